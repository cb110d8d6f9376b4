//! Per-game guess state machine
//!
//! A game is ACTIVE while at least one sub-word is unguessed and COMPLETE
//! once every sub-word has been found. The only transition is
//! ACTIVE -> COMPLETE; a sub-word's guessed flag never goes back to false.

use super::id::GameId;
use super::view::GameView;
use crate::engine::Scrambler;
use rand::Rng;
use rustc_hash::FxHashMap;

/// One answer hidden in the seed word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubWord {
    pub word: String,
    pub guessed: bool,
}

/// Lifecycle phase derived from the remaining count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Active,
    Complete,
}

/// Outcome of a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessVerdict {
    /// A new sub-word was found and others remain
    Correct,
    /// A new sub-word was found and it was the last one
    Completed,
    /// Blank, unknown, or already found
    Incorrect,
    /// The game was already complete before this guess
    GameOver,
}

impl GuessVerdict {
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct | Self::Completed)
    }

    /// Result message shown to the player
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Correct => "Guessed correctly.",
            Self::Incorrect => "Guessed incorrectly.",
            Self::Completed | Self::GameOver => "All words guessed.",
        }
    }
}

/// One puzzle: the seed word, its displayed scramble and the answers
#[derive(Debug, Clone)]
pub struct GameState {
    id: GameId,
    original: String,
    scramble: String,
    min_length: usize,
    sub_words: Vec<SubWord>,
    index: FxHashMap<String, usize>,
    remaining: usize,
}

impl GameState {
    /// Assemble a game from precomputed parts
    ///
    /// Sub-words keep their given order; repeated entries are ignored.
    #[must_use]
    pub fn new<I, S>(
        id: GameId,
        original: impl Into<String>,
        scramble: impl Into<String>,
        min_length: usize,
        sub_words: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words = Vec::new();
        let mut index = FxHashMap::default();

        for word in sub_words {
            let word: String = word.into().to_lowercase();
            if index.contains_key(&word) {
                continue;
            }
            index.insert(word.clone(), words.len());
            words.push(SubWord {
                word,
                guessed: false,
            });
        }

        let remaining = words.len();
        Self {
            id,
            original: original.into(),
            scramble: scramble.into(),
            min_length,
            sub_words: words,
            index,
            remaining,
        }
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> GameId {
        self.id
    }

    /// The seed word
    #[inline]
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The arrangement currently shown to the player
    #[inline]
    #[must_use]
    pub fn scramble(&self) -> &str {
        &self.scramble
    }

    #[inline]
    #[must_use]
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    /// Every answer with its guessed flag, in corpus order
    #[inline]
    #[must_use]
    pub fn sub_words(&self) -> &[SubWord] {
        &self.sub_words
    }

    #[inline]
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.sub_words.len()
    }

    #[inline]
    #[must_use]
    pub const fn remaining_words(&self) -> usize {
        self.remaining
    }

    /// Answers found so far, in corpus order
    #[must_use]
    pub fn guessed_words(&self) -> Vec<&str> {
        self.sub_words
            .iter()
            .filter(|sub_word| sub_word.guessed)
            .map(|sub_word| sub_word.word.as_str())
            .collect()
    }

    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        if self.remaining == 0 {
            GamePhase::Complete
        } else {
            GamePhase::Active
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self.phase(), GamePhase::Complete)
    }

    /// Check a guess against the unguessed answers
    ///
    /// The candidate is trimmed and compared ignoring case. Re-submitting an
    /// answer that was already found is incorrect, not an error.
    pub fn apply_guess(&mut self, candidate: &str) -> GuessVerdict {
        if self.is_complete() {
            return GuessVerdict::GameOver;
        }

        let normalized = candidate.trim().to_lowercase();
        if normalized.is_empty() {
            return GuessVerdict::Incorrect;
        }

        match self.index.get(&normalized) {
            Some(&i) if !self.sub_words[i].guessed => {
                self.sub_words[i].guessed = true;
                self.remaining -= 1;
                if self.remaining == 0 {
                    GuessVerdict::Completed
                } else {
                    GuessVerdict::Correct
                }
            }
            _ => GuessVerdict::Incorrect,
        }
    }

    /// Replace the displayed scramble with a different arrangement
    ///
    /// Answers and progress are untouched.
    pub fn rescramble<R: Rng + ?Sized>(&mut self, scrambler: &Scrambler, rng: &mut R) -> &str {
        self.scramble = scrambler.rescramble(&self.original, &self.scramble, rng);
        &self.scramble
    }

    /// Serializable projection of the current state
    #[must_use]
    pub fn view(&self) -> GameView {
        GameView {
            id: self.id,
            original_word: self.original.clone(),
            scramble_word: self.scramble.clone(),
            total_words: self.total_words(),
            remaining_words: self.remaining,
            guessed_words: self
                .guessed_words()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}
