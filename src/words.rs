//! Subject text tokenizer and word frequency table.
//!
//! Words are maximal runs of word characters (`\w+`, Unicode aware). Every
//! token is normalized with ASCII-only uppercasing, so `straße` becomes
//! `STRAßE`; this is the form the vocabulary pruning step compares against.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{BreathalyzerError, BreathalyzerResult};

static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("word pattern is a valid regex"));

/// Normalize a token into the canonical key form.
pub fn normalize(token: &str) -> String {
    token.to_ascii_uppercase()
}

/// Occurrence counts keyed by normalized word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencyTable {
    counts: BTreeMap<String, usize>,
}

impl WordFrequencyTable {
    /// Tokenize `text` and count every normalized word.
    ///
    /// Fails with [`BreathalyzerError::EmptyWords`] on a zero-length input and
    /// with [`BreathalyzerError::NoWordsFound`] when no token is extracted.
    pub fn count(text: &str) -> BreathalyzerResult<Self> {
        if text.is_empty() {
            return Err(BreathalyzerError::EmptyWords);
        }

        let mut counts = BTreeMap::new();
        for token in WORD_PATTERN.find_iter(text) {
            *counts.entry(normalize(token.as_str())).or_insert(0) += 1;
        }

        if counts.is_empty() {
            return Err(BreathalyzerError::NoWordsFound);
        }

        let table = Self { counts };
        debug!(
            distinct = table.len(),
            tokens = table.total_occurrences(),
            "word frequency table built"
        );
        Ok(table)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Occurrence count for an already normalized word.
    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Iterate `(word, count)` pairs in ascending word order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }

    /// Total number of tokens counted (sum of all counts).
    pub fn total_occurrences(&self) -> usize {
        self.counts.values().sum()
    }

    /// Drop `word` from scoring. Returns its count if it was present.
    pub(crate) fn remove(&mut self, word: &str) -> Option<usize> {
        self.counts.remove(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_case_insensitively() {
        let table = WordFrequencyTable::count("cat Cat CAT dog").expect("should count words");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("CAT"), Some(3));
        assert_eq!(table.get("DOG"), Some(1));
        assert_eq!(table.get("cat"), None);
        assert_eq!(table.total_occurrences(), 4);
    }

    #[test]
    fn test_punctuation_separates_tokens() {
        let table = WordFrequencyTable::count("well-known, don't; snake_case42!").expect("should count words");
        let words: Vec<&str> = table.iter().map(|(w, _)| w).collect();
        assert_eq!(words, vec!["DON", "KNOWN", "SNAKE_CASE42", "T", "WELL"]);
    }

    #[test]
    fn test_ascii_only_uppercase() {
        let table = WordFrequencyTable::count("straße élan").expect("should count words");
        assert!(table.contains("STRAßE"));
        assert!(table.contains("éLAN"));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            WordFrequencyTable::count(""),
            Err(BreathalyzerError::EmptyWords)
        ));
    }

    #[test]
    fn test_no_words_found() {
        assert!(matches!(
            WordFrequencyTable::count("  ... !? \n"),
            Err(BreathalyzerError::NoWordsFound)
        ));
    }

    #[test]
    fn test_remove() {
        let mut table = WordFrequencyTable::count("a b b").expect("should count words");
        assert_eq!(table.remove("B"), Some(2));
        assert_eq!(table.remove("B"), None);
        assert_eq!(table.len(), 1);
    }
}
