//! Letter multisets
//!
//! A `LetterBag` is the multiset of characters of a seed word. Sub-word
//! matching consumes one occurrence per matched character, so repeated letters
//! are counted individually.

use rustc_hash::FxHashMap;
use std::fmt;

/// The characters of a word, kept as a multiset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterBag {
    letters: Vec<char>,
}

impl LetterBag {
    /// Build a bag from a word, lowercasing it first
    ///
    /// # Examples
    /// ```
    /// use jumble::core::LetterBag;
    ///
    /// let bag = LetterBag::new("Yellow");
    /// assert_eq!(bag.len(), 6);
    /// assert!(bag.contains_word("well"));
    /// assert!(!bag.contains_word("wall"));
    /// ```
    #[must_use]
    pub fn new(word: &str) -> Self {
        Self {
            letters: word.to_lowercase().chars().collect(),
        }
    }

    /// Number of letters, counting repeats
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Check whether every character of `candidate` can be matched to a
    /// distinct, unused occurrence in this bag
    ///
    /// Works on a scratch copy: each matched character is removed so that a
    /// second occurrence in `candidate` needs a second occurrence here.
    #[must_use]
    pub fn contains_word(&self, candidate: &str) -> bool {
        let mut remaining = self.letters.clone();

        for ch in candidate.chars() {
            match remaining.iter().position(|&c| c == ch) {
                Some(index) => {
                    remaining.swap_remove(index);
                }
                None => return false,
            }
        }

        true
    }

    /// Count of each character in the bag
    #[must_use]
    pub fn counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for &ch in &self.letters {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }

    /// Number of distinct characters
    ///
    /// A bag with fewer than two distinct characters has exactly one
    /// arrangement; the scrambler uses this to skip its retries.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts().len()
    }

    /// Whether `other` is a rearrangement of exactly these letters
    #[must_use]
    pub fn is_anagram_of(&self, other: &str) -> bool {
        let other = Self::new(other);
        self.len() == other.len() && self.counts() == other.counts()
    }

}

impl fmt::Display for LetterBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.letters {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bag_normalizes_case() {
        let bag = LetterBag::new("YeLLow");
        assert_eq!(bag.to_string(), "yellow");
        assert_eq!(bag.len(), 6);
    }

    #[test]
    fn contains_simple_subset() {
        let bag = LetterBag::new("yellow");
        assert!(bag.contains_word("low"));
        assert!(bag.contains_word("yowl"));
        assert!(bag.contains_word("yellow"));
    }

    #[test]
    fn contains_respects_repeat_counts() {
        let bag = LetterBag::new("yellow");
        // Two l's available, but not three
        assert!(bag.contains_word("well"));
        assert!(!bag.contains_word("lull"));
        // Only one e
        assert!(!bag.contains_word("eel"));
    }

    #[test]
    fn contains_rejects_missing_letters() {
        let bag = LetterBag::new("yellow");
        assert!(!bag.contains_word("owls"));
        assert!(!bag.contains_word("wall"));
    }

    #[test]
    fn empty_candidate_is_always_contained() {
        assert!(LetterBag::new("abc").contains_word(""));
        assert!(LetterBag::new("").contains_word(""));
    }

    #[test]
    fn counts_duplicates() {
        let counts = LetterBag::new("deeded").counts();
        assert_eq!(counts.get(&'d'), Some(&3));
        assert_eq!(counts.get(&'e'), Some(&3));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn distinct_letters() {
        assert_eq!(LetterBag::new("aaaa").distinct(), 1);
        assert_eq!(LetterBag::new("a").distinct(), 1);
        assert_eq!(LetterBag::new("").distinct(), 0);
        assert_eq!(LetterBag::new("crane").distinct(), 5);
    }

    #[test]
    fn anagram_check() {
        let bag = LetterBag::new("listen");
        assert!(bag.is_anagram_of("silent"));
        assert!(bag.is_anagram_of("LISTEN"));
        assert!(!bag.is_anagram_of("listens"));
        assert!(!bag.is_anagram_of("lister"));
    }
}
