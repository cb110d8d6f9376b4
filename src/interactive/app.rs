//! TUI application state and logic

use crate::game::{GameRegistry, GameState, GuessVerdict};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::warn;

/// Upper bound on typed guess length
const MAX_INPUT: usize = 32;

/// Application state
pub struct App<'a> {
    pub registry: &'a GameRegistry,
    /// Latest snapshot of the game on screen
    pub game: GameState,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    Completed,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_started: usize,
    pub games_completed: usize,
    pub correct_guesses: usize,
    pub wrong_guesses: usize,
}

impl Statistics {
    /// Share of guesses that found a word, as a percentage
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        let total = self.correct_guesses + self.wrong_guesses;
        if total == 0 {
            0.0
        } else {
            self.correct_guesses as f64 / total as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    /// Start a session with a freshly created game
    ///
    /// # Errors
    ///
    /// Returns an error if the registry cannot create a game.
    pub fn new(registry: &'a GameRegistry) -> Result<Self> {
        let game = registry.create_default()?;
        let mut app = Self {
            registry,
            game,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics {
                games_started: 1,
                ..Statistics::default()
            },
            should_quit: false,
            input_mode: InputMode::Guessing,
        };
        app.announce_game();
        Ok(app)
    }

    fn game_id(&self) -> String {
        self.game.id().to_string()
    }

    fn announce_game(&mut self) {
        self.input_mode = InputMode::Guessing;
        self.add_message(
            &format!(
                "Find {} words in these {} letters!",
                self.game.total_words(),
                self.game.original().chars().count()
            ),
            MessageStyle::Info,
        );
    }

    pub fn submit_guess(&mut self) {
        let guess = self.input_buffer.trim().to_string();
        self.input_buffer.clear();
        if guess.is_empty() {
            return;
        }

        let report = match self.registry.guess(&self.game_id(), &guess) {
            Ok(report) => report,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };
        self.refresh();

        match report.verdict {
            GuessVerdict::Correct => {
                self.stats.correct_guesses += 1;
                self.add_message(
                    &format!(
                        "✅ {} | {} to go",
                        guess.to_uppercase(),
                        report.game.remaining_words
                    ),
                    MessageStyle::Success,
                );
            }
            GuessVerdict::Completed => {
                self.stats.correct_guesses += 1;
                self.stats.games_completed += 1;
                self.input_mode = InputMode::Completed;
                self.add_message(
                    &format!(
                        "🎉 All {} words found in {}!",
                        report.game.total_words,
                        self.game.original().to_uppercase()
                    ),
                    MessageStyle::Success,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            GuessVerdict::Incorrect => {
                self.stats.wrong_guesses += 1;
                let text = if self.game.guessed_words().contains(&guess.to_lowercase().as_str()) {
                    format!("Already found {}", guess.to_uppercase())
                } else {
                    format!("❌ {} is not hidden here", guess.to_uppercase())
                };
                self.add_message(&text, MessageStyle::Error);
            }
            GuessVerdict::GameOver => {
                self.input_mode = InputMode::Completed;
                self.add_message(report.result, MessageStyle::Info);
            }
        }
    }

    pub fn shuffle(&mut self) {
        match self.registry.rescramble(&self.game_id()) {
            Ok(_) => self.refresh(),
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        self.end_current();
        self.input_buffer.clear();
        self.messages.clear();

        match self.registry.create_default() {
            Ok(game) => {
                self.game = game;
                self.stats.games_started += 1;
                self.add_message("New game started!", MessageStyle::Info);
                self.announce_game();
            }
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                self.should_quit = true;
            }
        }
    }

    /// Drop the current game from the registry
    pub fn end_current(&mut self) {
        if let Err(err) = self.registry.end_game(&self.game_id()) {
            warn!(%err, "Failed to end game");
        }
    }

    fn refresh(&mut self) {
        match self.registry.get(&self.game_id()) {
            Ok(game) => self.game = game,
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Words found so far out of the total
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.game.total_words() - self.game.remaining_words()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

            match app.input_mode {
                InputMode::Completed => match key.code {
                    KeyCode::Char('c') if ctrl => app.should_quit = true,
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    _ => {}
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Char('c') if ctrl => app.should_quit = true,
                    KeyCode::Char('n') if ctrl => app.new_game(),
                    KeyCode::Esc => app.should_quit = true,
                    KeyCode::Tab => app.shuffle(),
                    KeyCode::Char(c) if c.is_alphabetic() => {
                        if app.input_buffer.chars().count() < MAX_INPUT {
                            app.input_buffer.extend(c.to_lowercase());
                        }
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => app.submit_guess(),
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    app.end_current();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::game::GameConfig;
    use std::sync::Arc;

    fn yellow_registry() -> GameRegistry {
        let dictionary = Dictionary::from_words([
            "low", "lowly", "lye", "ole", "owe", "owl", "well", "welly", "woe", "yell", "yellow",
            "yeow", "yew", "yowl",
        ]);
        GameRegistry::with_seed(Arc::new(dictionary), GameConfig::default(), 5)
    }

    #[test]
    fn app_starts_with_a_fresh_game() {
        let registry = yellow_registry();
        let app = App::new(&registry).unwrap();
        assert_eq!(app.game.original(), "yellow");
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.found_count(), 0);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn guesses_update_snapshot_and_stats() {
        let registry = yellow_registry();
        let mut app = App::new(&registry).unwrap();

        app.input_buffer = "owl".into();
        app.submit_guess();
        assert_eq!(app.found_count(), 1);
        assert_eq!(app.stats.correct_guesses, 1);
        assert!(app.input_buffer.is_empty());

        app.input_buffer = "owl".into();
        app.submit_guess();
        assert_eq!(app.found_count(), 1);
        assert_eq!(app.stats.wrong_guesses, 1);
        assert!((app.stats.accuracy() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn finding_every_word_completes() {
        let registry = yellow_registry();
        let mut app = App::new(&registry).unwrap();
        let answers: Vec<String> = app
            .game
            .sub_words()
            .iter()
            .map(|sub_word| sub_word.word.clone())
            .collect();

        for answer in answers {
            app.input_buffer = answer;
            app.submit_guess();
        }
        assert_eq!(app.input_mode, InputMode::Completed);
        assert_eq!(app.stats.games_completed, 1);
    }

    #[test]
    fn new_game_replaces_registered_game() {
        let registry = yellow_registry();
        let mut app = App::new(&registry).unwrap();
        let first = app.game.id();

        app.new_game();
        assert_ne!(app.game.id(), first);
        assert_eq!(registry.len(), 1);
        assert_eq!(app.stats.games_started, 2);

        app.end_current();
        assert!(registry.is_empty());
    }

    #[test]
    fn shuffle_changes_scramble() {
        let registry = yellow_registry();
        let mut app = App::new(&registry).unwrap();
        let before = app.game.scramble().to_string();
        app.shuffle();
        assert_ne!(app.game.scramble(), before);
    }

    #[test]
    fn messages_are_capped() {
        let registry = yellow_registry();
        let mut app = App::new(&registry).unwrap();
        for i in 0..10 {
            app.add_message(&i.to_string(), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "9");
    }
}
