//! Length-bucketed vocabulary index.
//!
//! Vocabulary entries are grouped by their length in `char`s so the distance
//! search can visit only the buckets whose length is close to the word being
//! scored.
//!
//! Building the index also applies the exact-match pruning rule: a line that
//! is byte-identical to a key of the [`WordFrequencyTable`] removes that key
//! from the table and is not bucketed. Keys are already uppercased while the
//! vocabulary line is compared as written, so a lowercase `cat` line never
//! prunes the word `CAT`.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::error::{BreathalyzerError, BreathalyzerResult};
use crate::words::WordFrequencyTable;

/// Vocabulary entries bucketed by length.
///
/// `VocabularyIndex::default()` is an index that was never built and is
/// rejected by the scorer. An index built from text with no usable lines is
/// empty but still counts as set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabularyIndex {
    buckets: BTreeMap<usize, Vec<String>>,
    set: bool,
}

impl VocabularyIndex {
    /// Build the index from newline separated `text`, pruning `words`.
    ///
    /// Only a zero-length `text` fails (with
    /// [`BreathalyzerError::EmptyVocabulary`]); blank lines are skipped and
    /// duplicates are kept.
    pub fn build(text: &str, words: &mut WordFrequencyTable) -> BreathalyzerResult<Self> {
        if text.is_empty() {
            return Err(BreathalyzerError::EmptyVocabulary);
        }

        let mut buckets: BTreeMap<usize, Vec<String>> = BTreeMap::new();
        let mut pruned = 0usize;

        for line in text.split('\n') {
            if line.is_empty() {
                continue;
            }
            if let Some(count) = words.remove(line) {
                trace!(word = line, count, "pruned exact vocabulary match");
                pruned += 1;
                continue;
            }
            buckets
                .entry(line.chars().count())
                .or_default()
                .push(line.to_owned());
        }

        let index = Self { buckets, set: true };
        debug!(
            buckets = index.bucket_count(),
            entries = index.entry_count(),
            pruned,
            remaining_words = words.len(),
            "vocabulary index built"
        );

        Ok(index)
    }

    /// Whether this index came out of [`VocabularyIndex::build`].
    pub const fn is_set(&self) -> bool {
        self.set
    }

    /// Entries of exactly `length` chars, or `None` if there are none.
    pub fn bucket(&self, length: usize) -> Option<&[String]> {
        self.buckets
            .get(&length)
            .map(Vec::as_slice)
            .filter(|bucket| !bucket.is_empty())
    }

    /// Number of distinct lengths present.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total number of bucketed entries, duplicates included.
    pub fn entry_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }

    /// Every bucketed entry, shortest lengths first.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.buckets.values().flatten().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(text: &str) -> WordFrequencyTable {
        WordFrequencyTable::count(text).expect("should count words")
    }

    #[test]
    fn test_buckets_by_length() {
        let mut words = table("zzz");
        let index = VocabularyIndex::build("CAT\nDOG\nHORSE\nOX\nBAT", &mut words)
            .expect("should build index");
        assert!(index.is_set());
        assert_eq!(index.bucket_count(), 3);
        assert_eq!(
            index.bucket(3),
            Some(&["CAT".to_owned(), "DOG".to_owned(), "BAT".to_owned()][..])
        );
        assert_eq!(index.bucket(2), Some(&["OX".to_owned()][..]));
        assert_eq!(index.bucket(4), None);
        assert_eq!(index.entry_count(), 5);
    }

    #[test]
    fn test_prunes_exact_match() {
        let mut words = table("cat cat dog fish");
        let index =
            VocabularyIndex::build("CAT\nDOG\nBAT", &mut words).expect("should build index");
        assert_eq!(words.len(), 1);
        assert!(words.contains("FISH"));
        assert_eq!(index.entries().collect::<Vec<_>>(), vec!["BAT"]);
    }

    #[test]
    fn test_pruning_is_case_sensitive_against_normalized_keys() {
        // Lowercase vocabulary lines never equal the uppercased keys.
        let mut words = table("cat");
        let index = VocabularyIndex::build("cat", &mut words).expect("should build index");
        assert!(words.contains("CAT"));
        assert_eq!(index.bucket(3), Some(&["cat".to_owned()][..]));
    }

    #[test]
    fn test_duplicate_after_prune_is_bucketed() {
        let mut words = table("cat");
        let index = VocabularyIndex::build("CAT\nCAT", &mut words).expect("should build index");
        assert!(words.is_empty());
        assert_eq!(index.entry_count(), 1);
    }

    #[test]
    fn test_duplicates_retained() {
        let mut words = table("x");
        let index = VocabularyIndex::build("AB\nAB\nAB", &mut words).expect("should build index");
        assert_eq!(index.bucket(2).map(<[String]>::len), Some(3));
    }

    #[test]
    fn test_blank_lines_give_set_but_empty_index() {
        let mut words = table("xyz");
        let index = VocabularyIndex::build("\n\n", &mut words).expect("should build index");
        assert!(index.is_set());
        assert!(index.is_empty());
        assert_eq!(index.bucket_count(), 0);
    }

    #[test]
    fn test_empty_vocabulary() {
        let mut words = table("xyz");
        assert!(matches!(
            VocabularyIndex::build("", &mut words),
            Err(BreathalyzerError::EmptyVocabulary)
        ));
    }

    #[test]
    fn test_default_is_unset() {
        assert!(!VocabularyIndex::default().is_set());
    }

    #[test]
    fn test_bucket_key_counts_chars() {
        let mut words = table("x");
        let index = VocabularyIndex::build("STRAßE\nÉÉÉÉ", &mut words).expect("should build index");
        assert_eq!(index.bucket(6), Some(&["STRAßE".to_owned()][..]));
        assert_eq!(index.bucket(4), Some(&["ÉÉÉÉ".to_owned()][..]));
        assert_eq!(index.bucket(7), None);
        assert_eq!(index.bucket(8), None);
    }

    #[test]
    fn test_carriage_return_kept() {
        let mut words = table("cat");
        let index = VocabularyIndex::build("CAT\r\n", &mut words).expect("should build index");
        assert!(words.contains("CAT"));
        assert_eq!(index.bucket(4), Some(&["CAT\r".to_owned()][..]));
    }
}
