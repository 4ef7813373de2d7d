//! Expanding-radius minimal distance search.
//!
//! For a word of length `L` the engine probes the buckets `L`, `L+1`, `L-1`,
//! `L+2`, `L-2`, ... of a [`VocabularyIndex`]. The edit distance between two
//! strings is at least the difference of their lengths, so once the radius
//! reaches the best distance found so far no further bucket can improve it
//! and the search stops.
//!
//! Words are expected to have been pruned against the vocabulary already, so
//! a distance of 1 is the best achievable result and ends the search at once.

pub mod levenshtein;

use tracing::trace;

use crate::vocabulary::VocabularyIndex;

/// Smallest distance a pruned word can have; finding it ends the search.
const FLOOR_DISTANCE: usize = 1;

/// Minimal distance lookups against a borrowed index.
#[derive(Debug, Clone, Copy)]
pub struct DistanceSearchEngine<'a> {
    index: &'a VocabularyIndex,
}

impl<'a> DistanceSearchEngine<'a> {
    pub const fn new(index: &'a VocabularyIndex) -> Self {
        Self { index }
    }

    /// Minimal edit distance from `word` to any vocabulary entry.
    ///
    /// Defaults to the length of `word` when nothing in the index is closer,
    /// so the result is always in `0..=len(word)`.
    pub fn minimal_distance(&self, word: &str) -> usize {
        let chars: Vec<char> = word.chars().collect();
        let length = chars.len();
        let mut best = length;

        let mut step = 0;
        while step < best {
            let mut round = best;

            if let Some(bucket) = self.index.bucket(length + step) {
                if step == 0 && bucket.iter().any(|entry| entry == word) {
                    return 0;
                }
                round = round.min(scan_bucket(&chars, bucket, round));
            }

            if step > 0 {
                if let Some(bucket) = length
                    .checked_sub(step)
                    .and_then(|shorter| self.index.bucket(shorter))
                {
                    round = round.min(scan_bucket(&chars, bucket, round));
                }
            }

            if round == FLOOR_DISTANCE {
                trace!(word, step, "floor distance reached");
                return FLOOR_DISTANCE;
            }

            best = best.min(round);
            step += 1;
        }

        trace!(word, best, steps = step, "search exhausted");
        best
    }

    /// Reference scan over every entry, without buckets or early exits.
    pub fn exhaustive_distance(&self, word: &str) -> usize {
        let length = word.chars().count();
        self.index
            .entries()
            .map(|entry| levenshtein::distance(word, entry))
            .fold(length, usize::min)
    }
}

/// Smallest distance from `word` into `bucket`, capped at `cap`.
///
/// Returns [`FLOOR_DISTANCE`] as soon as an entry reaches it.
fn scan_bucket(word: &[char], bucket: &[String], cap: usize) -> usize {
    let mut min = cap;
    for entry in bucket {
        let entry_chars: Vec<char> = entry.chars().collect();
        let distance = levenshtein::distance_chars(word, &entry_chars);
        if distance == FLOOR_DISTANCE {
            return FLOOR_DISTANCE;
        }
        min = min.min(distance);
    }
    min
}

/// Convenience wrapper for a single lookup.
pub fn minimal_distance(word: &str, index: &VocabularyIndex) -> usize {
    DistanceSearchEngine::new(index).minimal_distance(word)
}
