//! Sub-word enumeration
//!
//! Finds every corpus word that can be spelled from the letters of a seed
//! word, using each seed letter at most once.

use crate::core::LetterBag;
use crate::dictionary::Dictionary;
use rayon::prelude::*;

/// Minimum sub-word length used when the caller does not specify one
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// Enumerates sub-words of a seed over a dictionary
#[derive(Debug, Clone, Copy)]
pub struct SubwordMatcher<'a> {
    dictionary: &'a Dictionary,
}

impl<'a> SubwordMatcher<'a> {
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary) -> Self {
        Self { dictionary }
    }

    /// All corpus words that are letter-subsets of `seed`
    ///
    /// A word qualifies when it has at least `min_length` characters
    /// (default [`DEFAULT_MIN_LENGTH`]), differs from `seed` ignoring case,
    /// and every one of its characters can be matched to a distinct unused
    /// occurrence in `seed`. Results follow corpus order.
    ///
    /// A blank seed, a seed shorter than `min_length`, or a `min_length` of
    /// zero yields an empty list.
    ///
    /// # Examples
    /// ```
    /// use jumble::dictionary::Dictionary;
    /// use jumble::engine::SubwordMatcher;
    ///
    /// let dictionary = Dictionary::from_words(["low", "lull", "well", "yellow"]);
    /// let matcher = SubwordMatcher::new(&dictionary);
    /// assert_eq!(matcher.sub_words("yellow", None), vec!["low", "well"]);
    /// ```
    #[must_use]
    pub fn sub_words(&self, seed: &str, min_length: Option<usize>) -> Vec<&'a str> {
        let min_length = min_length.unwrap_or(DEFAULT_MIN_LENGTH);
        let seed = seed.trim().to_lowercase();
        let bag = LetterBag::new(&seed);

        if min_length == 0 || bag.is_empty() || bag.len() < min_length {
            return Vec::new();
        }

        // Ordered collect keeps corpus order across worker threads
        self.dictionary
            .words()
            .par_iter()
            .map(String::as_str)
            .filter(|word| {
                let length = word.chars().count();
                length >= min_length && length <= bag.len()
            })
            .filter(|&word| word != seed)
            .filter(|word| bag.contains_word(word))
            .collect()
    }
}
