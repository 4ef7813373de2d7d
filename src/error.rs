//! Error types for the breathalyzer crate.

use std::path::PathBuf;

/// Breathalyzer error types.
///
/// The first five variants are produced by the scoring core and are all
/// terminal for a run. `FileNotFound` and `Io` only come from the input
/// loading done by the command line front end.
#[derive(Debug, thiserror::Error)]
pub enum BreathalyzerError {
    /// The raw vocabulary text has zero length.
    #[error("vocabulary string is empty")]
    EmptyVocabulary,

    /// The raw subject text has zero length.
    #[error("words string is empty")]
    EmptyWords,

    /// The subject text contains no word characters at all.
    #[error("no words found in the text")]
    NoWordsFound,

    /// Scoring was attempted against an index that was never built.
    #[error("no vocabulary set")]
    NoVocabularySet,

    /// Scoring was attempted with an empty frequency table.
    #[error("no words set")]
    NoWordsSet,

    /// Input file not found at the specified path.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// I/O error with context.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience result type for breathalyzer operations.
pub type BreathalyzerResult<T> = Result<T, BreathalyzerError>;
