//! Word dictionary and its query indices
//!
//! The corpus is loaded once and never mutated afterwards, so a `Dictionary`
//! can be shared across threads behind an `Arc` without locking. All indices
//! (exact set, alphabetical order, length buckets, palindromes) are built at
//! construction time; queries never rescan the raw word list line by line.
//!
//! Every query result is returned in corpus order.

mod embedded;
pub mod loader;

pub use embedded::{CORPUS, CORPUS_COUNT};

use crate::error::{JumbleError, Result};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::{FxHashMap, FxHashSet};
use std::path::Path;
use tracing::{error, info};

/// Immutable, indexed word corpus
#[derive(Debug, Default, Clone)]
pub struct Dictionary {
    /// Corpus entries in load order, lowercase, without duplicates
    words: Vec<String>,
    exact: FxHashSet<String>,
    /// Indices into `words`, sorted alphabetically
    sorted: Vec<usize>,
    /// Indices into `words` grouped by character count, each in corpus order
    by_length: FxHashMap<usize, Vec<usize>>,
    palindromes: Vec<usize>,
}

impl Dictionary {
    /// Build a dictionary from raw entries
    ///
    /// Entries are trimmed and lowercased. Blank entries and repeats of an
    /// earlier entry are dropped.
    ///
    /// # Examples
    /// ```
    /// use jumble::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["deed", "Level", "low"]);
    /// assert!(dictionary.exists("LEVEL"));
    /// assert_eq!(dictionary.palindrome_words(), vec!["deed", "level"]);
    /// ```
    #[must_use]
    pub fn from_words<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut exact = FxHashSet::default();

        for entry in entries {
            let word = entry.as_ref().trim().to_lowercase();
            if word.is_empty() || exact.contains(&word) {
                continue;
            }
            exact.insert(word.clone());
            words.push(word);
        }

        let mut sorted: Vec<usize> = (0..words.len()).collect();
        sorted.sort_unstable_by(|&a, &b| words[a].cmp(&words[b]));

        let mut by_length: FxHashMap<usize, Vec<usize>> = FxHashMap::default();
        for (i, word) in words.iter().enumerate() {
            by_length.entry(word.chars().count()).or_default().push(i);
        }

        let palindromes = words
            .iter()
            .enumerate()
            .filter(|(_, word)| is_palindrome(word))
            .map(|(i, _)| i)
            .collect();

        Self {
            words,
            exact,
            sorted,
            by_length,
            palindromes,
        }
    }

    /// Dictionary over the corpus compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        let dictionary = Self::from_words(CORPUS);
        info!(words = dictionary.len(), "Loaded embedded word corpus");
        dictionary
    }

    /// Load a word list from disk, failing hard on I/O errors
    ///
    /// # Errors
    ///
    /// Returns [`JumbleError::CorpusUnavailable`] if the file cannot be read.
    pub fn try_load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let words = loader::load_from_file(path).map_err(|source| {
            JumbleError::CorpusUnavailable {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let dictionary = Self::from_words(words);
        info!(
            path = %path.display(),
            words = dictionary.len(),
            "Loaded word corpus"
        );
        Ok(dictionary)
    }

    /// Load a word list from disk, degrading to an empty dictionary on failure
    ///
    /// The failure is logged once here. Every query on the returned
    /// dictionary then yields an empty result instead of an error.
    #[must_use]
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        Self::try_load(path).unwrap_or_else(|err| {
            error!("{err}; continuing with an empty dictionary");
            Self::default()
        })
    }

    /// Number of corpus entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All corpus entries in corpus order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Whether `word` is in the corpus, ignoring case
    ///
    /// Blank input is never found.
    #[must_use]
    pub fn exists(&self, word: &str) -> bool {
        if word.trim().is_empty() {
            return false;
        }
        self.exact.contains(&word.to_lowercase())
    }

    /// Corpus entries starting with `prefix`, ignoring case
    ///
    /// Returns an empty list when `prefix` is blank or contains anything
    /// other than ASCII letters. This is stricter than [`Dictionary::search`],
    /// which accepts any alphabetic character as a first or last letter.
    #[must_use]
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<&str> {
        if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_alphabetic()) {
            return Vec::new();
        }
        let prefix = prefix.to_ascii_lowercase();

        // Entries sharing a prefix are contiguous in alphabetical order
        let start = self
            .sorted
            .partition_point(|&i| self.words[i].as_str() < prefix.as_str());
        let mut matches: Vec<usize> = self.sorted[start..]
            .iter()
            .copied()
            .take_while(|&i| self.words[i].starts_with(&prefix))
            .collect();

        matches.sort_unstable();
        self.resolve(&matches)
    }

    /// Corpus entries matching every filter that is present
    ///
    /// At least one filter is required. `start_char` and `end_char` must be
    /// letters in the Unicode sense, unlike the ASCII-only prefix query
    /// (compared ignoring case) and `length` must be at least 1. A
    /// missing or invalid filter set yields an empty list.
    #[must_use]
    pub fn search(
        &self,
        start_char: Option<char>,
        end_char: Option<char>,
        length: Option<usize>,
    ) -> Vec<&str> {
        if start_char.is_none() && end_char.is_none() && length.is_none() {
            return Vec::new();
        }
        if start_char.is_some_and(|c| !c.is_alphabetic())
            || end_char.is_some_and(|c| !c.is_alphabetic())
            || length == Some(0)
        {
            return Vec::new();
        }

        // A length filter narrows the scan to one bucket
        let candidates: Box<dyn Iterator<Item = usize> + '_> = match length {
            Some(length) => Box::new(self.by_length.get(&length).into_iter().flatten().copied()),
            None => Box::new(0..self.words.len()),
        };

        candidates
            .map(|i| self.words[i].as_str())
            .filter(|word| start_char.is_none_or(|c| char_matches(word.chars().next(), c)))
            .filter(|word| end_char.is_none_or(|c| char_matches(word.chars().next_back(), c)))
            .collect()
    }

    /// Corpus entries of two or more characters that read the same reversed
    #[must_use]
    pub fn palindrome_words(&self) -> Vec<&str> {
        self.resolve(&self.palindromes)
    }

    /// Pick a uniformly random corpus entry with exactly `length` characters
    ///
    /// Backed by the length index, so the cost does not depend on corpus size.
    pub fn random_word<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Option<&str> {
        self.by_length
            .get(&length)
            .and_then(|bucket| bucket.choose(rng))
            .map(|&i| self.words[i].as_str())
    }

    /// Number of corpus entries with exactly `length` characters
    #[must_use]
    pub fn count_with_length(&self, length: usize) -> usize {
        self.by_length.get(&length).map_or(0, Vec::len)
    }

    fn resolve(&self, indices: &[usize]) -> Vec<&str> {
        indices.iter().map(|&i| self.words[i].as_str()).collect()
    }
}

/// Whether a word reads the same forwards and backwards
///
/// Single characters do not count; the middle character of an odd-length
/// word is compared with itself.
#[must_use]
pub fn is_palindrome(word: &str) -> bool {
    word.chars().nth(1).is_some() && word.chars().eq(word.chars().rev())
}

fn char_matches(found: Option<char>, wanted: char) -> bool {
    found.is_some_and(|c| c.to_lowercase().eq(wanted.to_lowercase()))
}
