//! Frequency-weighted score aggregation.
//!
//! Every distinct word contributes `minimal_distance(word) * count`; the
//! score is the sum over the table. Words pruned while building the index are
//! simply absent from the table and contribute nothing.

use serde::Serialize;
use tracing::debug;

use crate::distance::DistanceSearchEngine;
use crate::error::{BreathalyzerError, BreathalyzerResult};
use crate::vocabulary::VocabularyIndex;
use crate::words::WordFrequencyTable;

/// Aggregation options.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreOptions {
    /// Run the per-word search on the rayon pool. Needs the `parallel`
    /// feature; otherwise the sequential path is used.
    pub parallel: bool,
}

/// Score contribution of a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordScore {
    pub word: String,
    pub count: usize,
    pub distance: usize,
    /// `distance * count`.
    pub weighted: usize,
}

/// Total score together with the per-word breakdown, in ascending word order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreReport {
    pub total: usize,
    pub words: Vec<WordScore>,
}

/// Drives the distance search over a frequency table.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreAggregator {
    options: ScoreOptions,
}

impl ScoreAggregator {
    pub const fn new(options: ScoreOptions) -> Self {
        Self { options }
    }

    /// Sum of frequency-weighted minimal distances.
    pub fn score(
        &self,
        words: &WordFrequencyTable,
        index: &VocabularyIndex,
    ) -> BreathalyzerResult<usize> {
        Ok(self.report(words, index)?.total)
    }

    /// Like [`ScoreAggregator::score`], keeping each word's contribution.
    pub fn report(
        &self,
        words: &WordFrequencyTable,
        index: &VocabularyIndex,
    ) -> BreathalyzerResult<ScoreReport> {
        if !index.is_set() {
            return Err(BreathalyzerError::NoVocabularySet);
        }
        if words.is_empty() {
            return Err(BreathalyzerError::NoWordsSet);
        }

        let engine = DistanceSearchEngine::new(index);
        let scores = if self.options.parallel {
            score_parallel(&engine, words)
        } else {
            score_sequential(&engine, words)
        };

        let total: usize = scores.iter().map(|s| s.weighted).sum();
        debug!(words = scores.len(), total, "score aggregated");
        Ok(ScoreReport {
            total,
            words: scores,
        })
    }
}

fn score_word(engine: &DistanceSearchEngine<'_>, word: &str, count: usize) -> WordScore {
    let distance = engine.minimal_distance(word);
    WordScore {
        word: word.to_owned(),
        count,
        distance,
        weighted: distance * count,
    }
}

fn score_sequential(engine: &DistanceSearchEngine<'_>, words: &WordFrequencyTable) -> Vec<WordScore> {
    words
        .iter()
        .map(|(word, count)| score_word(engine, word, count))
        .collect()
}

#[cfg(feature = "parallel")]
fn score_parallel(engine: &DistanceSearchEngine<'_>, words: &WordFrequencyTable) -> Vec<WordScore> {
    use rayon::prelude::*;

    let pairs: Vec<(&str, usize)> = words.iter().collect();
    pairs
        .par_iter()
        .map(|&(word, count)| score_word(engine, word, count))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn score_parallel(engine: &DistanceSearchEngine<'_>, words: &WordFrequencyTable) -> Vec<WordScore> {
    tracing::warn!("parallel scoring not compiled in, using sequential search");
    score_sequential(engine, words)
}

/// Score with default options.
pub fn score(words: &WordFrequencyTable, index: &VocabularyIndex) -> BreathalyzerResult<usize> {
    ScoreAggregator::default().score(words, index)
}
