//! Concurrent game session registry
//!
//! Maps game identifiers to their state. The map itself sits behind a
//! read-write lock that is held only long enough to insert, remove, or clone
//! out an entry handle. Each game has its own mutex, so guesses on different
//! games never wait on each other while guesses on the same game are applied
//! one at a time.
//!
//! Lock order: a game mutex may be held while taking the RNG mutex, never
//! the other way around.

use super::config::GameConfig;
use super::id::GameId;
use super::state::{GameState, GuessVerdict};
use super::view::{GameView, GuessReport};
use crate::dictionary::Dictionary;
use crate::engine::{Scrambler, SubwordMatcher};
use crate::error::{JumbleError, Result};
use parking_lot::{Mutex, RwLock};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::{debug, info};

type GameSlot = Arc<Mutex<GameState>>;

/// Thread-safe store of active and completed games
///
/// Shared across request handlers via `Arc<GameRegistry>`.
pub struct GameRegistry {
    dictionary: Arc<Dictionary>,
    config: GameConfig,
    scrambler: Scrambler,
    rng: Mutex<StdRng>,
    games: RwLock<FxHashMap<GameId, GameSlot>>,
}

impl GameRegistry {
    /// Create a registry seeded from the operating system
    #[must_use]
    pub fn new(dictionary: Arc<Dictionary>, config: GameConfig) -> Self {
        Self::with_rng(dictionary, config, StdRng::from_os_rng())
    }

    /// Create a registry with a fixed seed, for reproducible games
    #[must_use]
    pub fn with_seed(dictionary: Arc<Dictionary>, config: GameConfig, seed: u64) -> Self {
        Self::with_rng(dictionary, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(dictionary: Arc<Dictionary>, config: GameConfig, rng: StdRng) -> Self {
        Self {
            dictionary,
            config,
            scrambler: Scrambler::default(),
            rng: Mutex::new(rng),
            games: RwLock::new(FxHashMap::default()),
        }
    }

    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of registered games
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.read().is_empty()
    }

    /// Create and register a game with the configured lengths
    ///
    /// # Errors
    ///
    /// See [`GameRegistry::create_game`].
    pub fn create_default(&self) -> Result<GameState> {
        self.create_game(self.config.length, Some(self.config.min_length))
    }

    /// Create and register a game whose seed word has `length` letters
    ///
    /// Only seeds hiding at least one sub-word are chosen, uniformly among
    /// those. All sub-words are computed before the game becomes visible.
    /// Returns a snapshot of the new game.
    ///
    /// # Errors
    ///
    /// Fails validation when `length` is below 3 or `min_length` is zero or
    /// larger than `length`. Returns [`JumbleError::NoWordAvailable`] when the
    /// corpus has no word of that length and [`JumbleError::NoPlayableWord`]
    /// when none of those words hides a sub-word.
    pub fn create_game(&self, length: usize, min_length: Option<usize>) -> Result<GameState> {
        let settings = GameConfig::for_length(length, min_length)?;
        let (original, sub_words) = self.pick_seed(settings.length, settings.min_length)?;
        let scramble = self.scrambler.scramble(original, &mut *self.rng.lock());

        let mut games = self.games.write();
        let mut id = GameId::new();
        while games.contains_key(&id) {
            id = GameId::new();
        }

        let state = GameState::new(id, original, scramble, settings.min_length, sub_words);
        games.insert(id, Arc::new(Mutex::new(state.clone())));
        drop(games);

        debug!(
            %id,
            word = state.original(),
            total = state.total_words(),
            "Created game"
        );
        Ok(state)
    }

    /// Draw a seed of `length` letters together with its sub-words
    ///
    /// One random draw is tried first. If it hides nothing, the remaining
    /// seeds are scanned in shuffled order, which keeps the pick uniform over
    /// playable seeds.
    fn pick_seed(&self, length: usize, min_length: usize) -> Result<(&str, Vec<&str>)> {
        if self.dictionary.count_with_length(length) == 0 {
            return Err(JumbleError::NoWordAvailable(length));
        }
        let matcher = SubwordMatcher::new(&self.dictionary);

        let drawn = self.dictionary.random_word(length, &mut *self.rng.lock());
        if let Some(seed) = drawn {
            let sub_words = matcher.sub_words(seed, Some(min_length));
            if !sub_words.is_empty() {
                return Ok((seed, sub_words));
            }
        }

        let mut seeds = self.dictionary.search(None, None, Some(length));
        seeds.shuffle(&mut *self.rng.lock());
        for seed in seeds {
            let sub_words = matcher.sub_words(seed, Some(min_length));
            if !sub_words.is_empty() {
                return Ok((seed, sub_words));
            }
        }

        debug!(length, min_length, "No seed hides a sub-word");
        Err(JumbleError::NoPlayableWord { length, min_length })
    }

    /// Snapshot of a game
    ///
    /// # Errors
    ///
    /// [`JumbleError::InvalidGameId`] for a blank or malformed identifier,
    /// [`JumbleError::GameNotFound`] for an unknown one.
    pub fn get(&self, id: &str) -> Result<GameState> {
        let slot = self.slot(id)?;
        let state = slot.lock().clone();
        Ok(state)
    }

    /// Player-facing view of a game
    ///
    /// # Errors
    ///
    /// See [`GameRegistry::get`].
    pub fn view(&self, id: &str) -> Result<GameView> {
        let slot = self.slot(id)?;
        let view = slot.lock().view();
        Ok(view)
    }

    /// Submit a guess to a game
    ///
    /// The guess and the returned view are taken under the game's lock, so
    /// the report reflects exactly this guess.
    ///
    /// # Errors
    ///
    /// See [`GameRegistry::get`]. A wrong answer is not an error.
    pub fn guess(&self, id: &str, word: &str) -> Result<GuessReport> {
        let slot = self.slot(id)?;
        let mut state = slot.lock();

        if self.config.rescramble_on_guess {
            state.rescramble(&self.scrambler, &mut *self.rng.lock());
        }

        let verdict = state.apply_guess(word);
        if verdict == GuessVerdict::Completed {
            info!(id = %state.id(), total = state.total_words(), "All words guessed");
        }

        Ok(GuessReport::new(verdict, word, state.view()))
    }

    /// Show the game's letters in a new order
    ///
    /// # Errors
    ///
    /// See [`GameRegistry::get`].
    pub fn rescramble(&self, id: &str) -> Result<String> {
        let slot = self.slot(id)?;
        let mut state = slot.lock();
        let scramble = state
            .rescramble(&self.scrambler, &mut *self.rng.lock())
            .to_string();
        Ok(scramble)
    }

    /// Remove a game when its session is torn down
    ///
    /// # Errors
    ///
    /// See [`GameRegistry::get`].
    pub fn end_game(&self, id: &str) -> Result<GameState> {
        let game_id = GameId::parse(id)?;
        let slot = self
            .games
            .write()
            .remove(&game_id)
            .ok_or_else(|| JumbleError::GameNotFound(id.to_string()))?;

        debug!(%game_id, "Ended game");
        let state = slot.lock().clone();
        Ok(state)
    }

    fn slot(&self, id: &str) -> Result<GameSlot> {
        let game_id = GameId::parse(id)?;
        let slot = self.games.read().get(&game_id).cloned();
        slot.ok_or_else(|| {
            debug!(%game_id, "Unknown game id");
            JumbleError::GameNotFound(id.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterBag;
    use std::thread;

    fn registry() -> GameRegistry {
        GameRegistry::with_seed(
            Arc::new(Dictionary::embedded()),
            GameConfig::default(),
            2024,
        )
    }

    fn yellow_registry() -> GameRegistry {
        let dictionary = Dictionary::from_words([
            "low", "lowly", "lye", "ole", "owe", "owl", "well", "welly", "woe", "yell", "yellow",
            "yeow", "yew", "yowl",
        ]);
        GameRegistry::with_seed(Arc::new(dictionary), GameConfig::default(), 1)
    }

    #[test]
    fn create_game_matches_sub_word_count() {
        let registry = registry();
        let state = registry.create_game(6, Some(3)).unwrap();
        let expected = SubwordMatcher::new(registry.dictionary())
            .sub_words(state.original(), Some(3))
            .len();

        assert_eq!(state.original().len(), 6);
        assert_eq!(state.total_words(), expected);
        assert_eq!(state.remaining_words(), state.total_words());
        assert!(state.total_words() > 0);
        assert!(state.guessed_words().is_empty());
        assert!(LetterBag::new(state.original()).is_anagram_of(state.scramble()));
        assert_ne!(state.scramble(), state.original());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn create_game_sub_words_satisfy_invariants() {
        let registry = registry();
        let state = registry.create_game(7, Some(4)).unwrap();
        let bag = LetterBag::new(state.original());

        for sub_word in state.sub_words() {
            assert!(sub_word.word.len() >= 4);
            assert_ne!(sub_word.word, state.original());
            assert!(bag.contains_word(&sub_word.word));
            assert!(!sub_word.guessed);
        }
    }

    #[test]
    fn create_default_uses_config() {
        let registry = registry();
        let state = registry.create_default().unwrap();
        assert_eq!(state.original().len(), 6);
        assert_eq!(state.min_length(), 3);
    }

    #[test]
    fn create_game_validates_lengths() {
        let registry = registry();
        assert!(registry.create_game(2, None).unwrap_err().is_validation());
        assert!(registry.create_game(6, Some(0)).unwrap_err().is_validation());
        assert!(registry.create_game(4, Some(5)).unwrap_err().is_validation());
        assert!(registry.is_empty());
    }

    #[test]
    fn create_game_without_matching_word() {
        let registry = registry();
        assert!(matches!(
            registry.create_game(30, None),
            Err(JumbleError::NoWordAvailable(30))
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn create_game_skips_seeds_without_sub_words() {
        // "qxz" hides nothing; "tea" hides "eat" and "ate"
        let dictionary = Dictionary::from_words(["qxz", "tea", "eat", "ate"]);
        let registry = GameRegistry::with_seed(Arc::new(dictionary), GameConfig::default(), 3);

        for _ in 0..30 {
            let state = registry.create_game(3, Some(3)).unwrap();
            assert_ne!(state.original(), "qxz");
            assert!(state.total_words() > 0);
            assert!(!state.is_complete());

            let report = registry.guess(&state.id().to_string(), "zzz").unwrap();
            assert_eq!(report.result, "Guessed incorrectly.");
        }
    }

    #[test]
    fn embedded_short_seeds_are_always_playable() {
        let registry = registry();
        for _ in 0..50 {
            assert!(registry.create_game(3, Some(3)).unwrap().total_words() > 0);
            assert!(registry.create_game(6, Some(6)).unwrap().total_words() > 0);
        }
    }

    #[test]
    fn create_game_fails_when_no_seed_is_playable() {
        let dictionary = Dictionary::from_words(["qxz", "vjk", "low"]);
        let registry = GameRegistry::with_seed(Arc::new(dictionary), GameConfig::default(), 3);

        let err = registry.create_game(3, Some(3)).unwrap_err();
        assert!(matches!(
            err,
            JumbleError::NoPlayableWord {
                length: 3,
                min_length: 3
            }
        ));
        assert!(!err.is_validation());
        assert!(registry.is_empty());
    }

    #[test]
    fn empty_dictionary_has_no_words() {
        let registry =
            GameRegistry::with_seed(Arc::new(Dictionary::default()), GameConfig::default(), 0);
        assert!(matches!(
            registry.create_default(),
            Err(JumbleError::NoWordAvailable(6))
        ));
    }

    #[test]
    fn get_distinguishes_invalid_and_unknown_ids() {
        let registry = registry();
        registry.create_default().unwrap();

        let invalid = registry.get("  ").unwrap_err();
        assert!(matches!(invalid, JumbleError::InvalidGameId(_)));
        assert_eq!(invalid.to_string(), "Invalid Game ID.");

        let missing = registry
            .get("51eb70da-7e19-46eb-b45e-ab25e9b6c444")
            .unwrap_err();
        assert!(missing.is_not_found());
        assert_eq!(missing.to_string(), "Game board/state not found.");
    }

    #[test]
    fn failed_lookups_do_not_touch_existing_games() {
        let registry = registry();
        let state = registry.create_default().unwrap();
        let id = state.id().to_string();

        assert!(registry.guess("", "anything").is_err());
        assert!(
            registry
                .guess("51eb70da-7e19-46eb-b45e-ab25e9b6c444", "anything")
                .is_err()
        );

        let after = registry.view(&id).unwrap();
        assert_eq!(after, state.view());
    }

    #[test]
    fn guess_reports_progress() {
        let registry = registry();
        let state = registry.create_default().unwrap();
        let id = state.id().to_string();
        let answer = state.sub_words()[0].word.clone();

        let wrong = registry.guess(&id, "helloworld").unwrap();
        assert_eq!(wrong.result, "Guessed incorrectly.");
        assert!(!wrong.correct);
        assert_eq!(wrong.guess_word, "helloworld");
        assert_eq!(wrong.game.remaining_words, state.total_words());

        let blank = registry.guess(&id, "").unwrap();
        assert_eq!(blank.result, "Guessed incorrectly.");
        assert_eq!(blank.guess_word, "");

        let right = registry.guess(&id, &answer).unwrap();
        assert!(right.correct);
        assert_eq!(right.game.id, state.id());
        assert_eq!(right.game.original_word, state.original());
        assert_eq!(right.game.total_words, state.total_words());
        assert_eq!(right.game.remaining_words, state.total_words() - 1);
        assert!(right.game.guessed_words.contains(&answer));
    }

    #[test]
    fn guessing_every_word_completes_once() {
        let registry = yellow_registry();
        let state = registry.create_default().unwrap();
        assert_eq!(state.original(), "yellow");
        assert_eq!(state.total_words(), 13);

        let id = state.id().to_string();
        let answers: Vec<String> = state.sub_words().iter().map(|s| s.word.clone()).collect();
        let mut completions = 0;
        let mut last = None;

        for (i, answer) in answers.iter().enumerate() {
            // Repeats never count twice
            registry.guess(&id, answer).unwrap();
            let repeat = registry.guess(&id, answer).unwrap();
            if repeat.result == "All words guessed." {
                completions += 1;
            }
            assert_eq!(repeat.game.remaining_words, answers.len() - i - 1);
            assert_eq!(repeat.game.guessed_words.len(), i + 1);
            last = Some(repeat);
        }

        let last = last.unwrap();
        assert_eq!(last.game.remaining_words, 0);
        assert_eq!(last.game.guessed_words, answers);
        assert_eq!(completions, 1);
        assert!(registry.get(&id).unwrap().is_complete());
    }

    #[test]
    fn final_guess_reports_all_words_guessed() {
        let registry = yellow_registry();
        let state = registry.create_default().unwrap();
        let id = state.id().to_string();

        let mut reports = Vec::new();
        for sub_word in state.sub_words() {
            reports.push(registry.guess(&id, &sub_word.word).unwrap());
        }

        let (last, rest) = reports.split_last().unwrap();
        assert!(rest.iter().all(|r| r.result == "Guessed correctly."));
        assert_eq!(last.result, "All words guessed.");
        assert!(last.correct);

        let after = registry.guess(&id, "low").unwrap();
        assert_eq!(after.result, "All words guessed.");
        assert!(!after.correct);
    }

    #[test]
    fn rescramble_changes_only_the_display() {
        let registry = registry();
        let state = registry.create_default().unwrap();
        let id = state.id().to_string();

        let scramble = registry.rescramble(&id).unwrap();
        assert_ne!(scramble, state.scramble());
        assert!(LetterBag::new(state.original()).is_anagram_of(&scramble));

        let view = registry.view(&id).unwrap();
        assert_eq!(view.scramble_word, scramble);
        assert_eq!(view.remaining_words, state.remaining_words());
    }

    #[test]
    fn rescramble_on_guess_shuffles_board() {
        let config = GameConfig {
            rescramble_on_guess: true,
            ..GameConfig::default()
        };
        let registry = GameRegistry::with_seed(Arc::new(Dictionary::embedded()), config, 5);
        let state = registry.create_default().unwrap();

        let report = registry.guess(&state.id().to_string(), "zzz").unwrap();
        assert_ne!(report.game.scramble_word, state.scramble());
    }

    #[test]
    fn end_game_removes_entry() {
        let registry = registry();
        let state = registry.create_default().unwrap();
        let id = state.id().to_string();

        let ended = registry.end_game(&id).unwrap();
        assert_eq!(ended.id(), state.id());
        assert!(registry.is_empty());
        assert!(registry.get(&id).unwrap_err().is_not_found());
        assert!(registry.end_game(&id).unwrap_err().is_not_found());
    }

    #[test]
    fn seeded_registries_pick_the_same_words() {
        let dictionary = Arc::new(Dictionary::embedded());
        let a = GameRegistry::with_seed(Arc::clone(&dictionary), GameConfig::default(), 99);
        let b = GameRegistry::with_seed(dictionary, GameConfig::default(), 99);

        let first = a.create_default().unwrap();
        let second = b.create_default().unwrap();
        assert_eq!(first.original(), second.original());
        assert_eq!(first.scramble(), second.scramble());
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn concurrent_creates_are_all_registered() {
        let registry = registry();

        let ids: Vec<GameId> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(|| {
                        (0..10)
                            .map(|_| registry.create_default().unwrap().id())
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|handle| handle.join().unwrap())
                .collect()
        });

        assert_eq!(ids.len(), 80);
        assert_eq!(registry.len(), 80);
        for id in ids {
            assert!(registry.get(&id.to_string()).is_ok());
        }
    }

    #[test]
    fn concurrent_distinct_guesses_are_all_recorded() {
        let registry = yellow_registry();
        let state = registry.create_default().unwrap();
        let id = state.id().to_string();
        let answers: Vec<String> = state.sub_words().iter().map(|s| s.word.clone()).collect();

        thread::scope(|scope| {
            for answer in &answers {
                let registry = &registry;
                let id = &id;
                scope.spawn(move || {
                    assert!(registry.guess(id, answer).unwrap().correct);
                });
            }
        });

        let after = registry.get(&id).unwrap();
        assert_eq!(after.remaining_words(), 0);
        assert_eq!(after.guessed_words().len(), answers.len());
    }

    #[test]
    fn concurrent_duplicate_guess_is_accepted_once() {
        let registry = yellow_registry();
        let state = registry.create_default().unwrap();
        let id = state.id().to_string();

        let verdicts: Vec<bool> = thread::scope(|scope| {
            let handles: Vec<_> = (0..16)
                .map(|_| scope.spawn(|| registry.guess(&id, "owl").unwrap().correct))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect()
        });

        assert_eq!(verdicts.iter().filter(|&&correct| correct).count(), 1);
        assert_eq!(registry.get(&id).unwrap().remaining_words(), 12);
    }

    #[test]
    fn verdict_after_completion_is_game_over() {
        let registry = yellow_registry();
        let state = registry.create_default().unwrap();
        let id = state.id().to_string();
        for sub_word in state.sub_words() {
            registry.guess(&id, &sub_word.word).unwrap();
        }

        let mut snapshot = registry.get(&id).unwrap();
        assert_eq!(snapshot.apply_guess("owl"), GuessVerdict::GameOver);
    }
}
