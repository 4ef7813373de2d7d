//! Command line front end: arguments, input loading and output rendering.
//!
//! The scoring core never touches the filesystem. This module reads the two
//! text blobs, hands them to the core and renders the result.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info, warn};

use crate::error::{BreathalyzerError, BreathalyzerResult};
use crate::score::{ScoreAggregator, ScoreOptions, ScoreReport};
use crate::vocabulary::VocabularyIndex;
use crate::words::WordFrequencyTable;

/// Vocabulary location used when neither the flag nor the env var is given.
pub const DEFAULT_VOCABULARY_PATH: &str = "desc/vocabulary.txt";

/// Score how far a text drifts from a reference vocabulary.
#[derive(Parser, Debug, Clone)]
#[command(name = "breathalyzer")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct CliArgs {
    /// Text file to score
    #[arg(value_name = "TEXT_FILE")]
    pub text_file: PathBuf,

    /// Vocabulary file, one word per line
    #[arg(
        long,
        env = "BREATHALYZER_VOCABULARY",
        default_value = DEFAULT_VOCABULARY_PATH
    )]
    pub vocabulary: PathBuf,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Search words on all cores (requires the `parallel` feature)
    #[arg(long)]
    pub parallel: bool,

    /// Log debug events to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// How the result is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The total score only.
    Plain,
    /// The full [`ScoreReport`] as JSON.
    Json,
}

/// Read a whole input file as text.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD, which is not a
/// word character, so a stray Latin-1 byte only splits the token it sits in.
///
/// Missing paths (or paths that are not regular files) map to
/// [`BreathalyzerError::FileNotFound`]; read failures to
/// [`BreathalyzerError::Io`].
pub fn read_input(path: &Path) -> BreathalyzerResult<String> {
    if !path.is_file() {
        return Err(BreathalyzerError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let bytes = std::fs::read(path).map_err(|source| BreathalyzerError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            warn!(
                path = %path.display(),
                valid_up_to = e.utf8_error().valid_up_to(),
                "input is not valid UTF-8, replacing invalid bytes"
            );
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

/// Run a full scoring pass and return the text to print (without newline).
pub fn run(args: &CliArgs) -> Result<String> {
    info!(
        text_file = %args.text_file.display(),
        vocabulary = %args.vocabulary.display(),
        "scoring text"
    );

    let subject = read_input(&args.text_file)?;
    let vocabulary = read_input(&args.vocabulary)?;
    debug!(
        subject_bytes = subject.len(),
        vocabulary_bytes = vocabulary.len(),
        "inputs loaded"
    );

    let mut words = WordFrequencyTable::count(&subject)?;
    let index = VocabularyIndex::build(&vocabulary, &mut words)?;
    let report = ScoreAggregator::new(ScoreOptions {
        parallel: args.parallel,
    })
    .report(&words, &index)?;

    render(&report, args.format, args.pretty)
}

/// Render a report in the requested format.
pub fn render(report: &ScoreReport, format: OutputFormat, pretty: bool) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(report.total.to_string()),
        OutputFormat::Json if pretty => {
            serde_json::to_string_pretty(report).context("failed to serialize score report")
        }
        OutputFormat::Json => {
            serde_json::to_string(report).context("failed to serialize score report")
        }
    }
}
