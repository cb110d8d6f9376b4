//! Letter scrambling
//!
//! Produces random permutations of a word. When the word has more than one
//! possible arrangement, the scrambler re-rolls a bounded number of times to
//! avoid showing the same arrangement twice in a row. The bound is not a
//! guarantee: after the retries run out the last permutation is returned as is.

use crate::core::LetterBag;
use rand::Rng;
use rand::seq::SliceRandom;

/// Extra attempts made when a permutation repeats the previous one
pub const DEFAULT_RETRIES: usize = 10;

/// Random letter permutation with bounded repeat avoidance
#[derive(Debug, Clone, Copy)]
pub struct Scrambler {
    max_retries: usize,
}

impl Default for Scrambler {
    fn default() -> Self {
        Self::new(DEFAULT_RETRIES)
    }
}

impl Scrambler {
    #[must_use]
    pub const fn new(max_retries: usize) -> Self {
        Self { max_retries }
    }

    /// Scramble `word`, avoiding the word itself
    ///
    /// # Examples
    /// ```
    /// use jumble::engine::Scrambler;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let scrambled = Scrambler::default().scramble("elephant", &mut rng);
    /// assert_eq!(scrambled.len(), "elephant".len());
    /// ```
    pub fn scramble<R: Rng + ?Sized>(&self, word: &str, rng: &mut R) -> String {
        self.rescramble(word, word, rng)
    }

    /// Scramble `word`, avoiding the arrangement in `previous`
    pub fn rescramble<R: Rng + ?Sized>(&self, word: &str, previous: &str, rng: &mut R) -> String {
        let mut letters: Vec<char> = word.chars().collect();
        letters.shuffle(rng);

        // A single distinct letter has only one arrangement
        if LetterBag::new(word).distinct() > 1 {
            let mut retries = 0;
            while retries < self.max_retries && letters.iter().copied().eq(previous.chars()) {
                letters.shuffle(rng);
                retries += 1;
            }
        }

        letters.into_iter().collect()
    }
}
