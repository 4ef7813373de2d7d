//! `breathalyzer` - scores how far a text drifts from a reference vocabulary.
//!
//! Every distinct word of the subject text is matched against the closest
//! vocabulary entry by Levenshtein distance; distances are weighted by how
//! often the word occurs and summed into one integer.
//!
//! # Components
//!
//! - [`words`] - tokenizer and [`WordFrequencyTable`]
//! - [`vocabulary`] - length-bucketed [`VocabularyIndex`], exact-match pruning
//! - [`distance`] - expanding-radius [`DistanceSearchEngine`]
//! - [`score`] - frequency-weighted [`ScoreAggregator`]
//! - [`cli`] - file loading and output for the `breathalyzer` binary
//!
//! # Pipeline
//!
//! ```text
//! subject text ──→ WordFrequencyTable ──┐ (pruned)
//!                                       ↓
//! vocabulary ─────────────────→ VocabularyIndex
//!                                       ↓
//!                    ScoreAggregator ─→ DistanceSearchEngine (per word)
//!                                       ↓
//!                                     total
//! ```
//!
//! The frequency table must exist before the index is built, since building
//! the index removes exact matches from it.

pub mod cli;
pub mod distance;
pub mod error;
pub mod score;
pub mod vocabulary;
pub mod words;

pub use distance::{DistanceSearchEngine, minimal_distance};
pub use error::{BreathalyzerError, BreathalyzerResult};
pub use score::{ScoreAggregator, ScoreOptions, ScoreReport, WordScore};
pub use vocabulary::VocabularyIndex;
pub use words::WordFrequencyTable;

/// Score `subject` against `vocabulary` in one call.
///
/// Runs the two-phase build (frequency table, then the pruning index build)
/// and sums the weighted distances.
pub fn score_texts(subject: &str, vocabulary: &str) -> BreathalyzerResult<usize> {
    let mut words = WordFrequencyTable::count(subject)?;
    let index = VocabularyIndex::build(vocabulary, &mut words)?;
    score::score(&words, &index)
}
