//! Jumble - CLI
//!
//! Word puzzle engine with TUI and CLI modes: dictionary queries, scrambling,
//! and find-every-hidden-word games.

use anyhow::Result;
use clap::{Parser, Subcommand};
use jumble::{
    commands::{Query, run_census, run_query, run_simple},
    dictionary::Dictionary,
    game::{CreatedReport, GameConfig, GameRegistry},
    output::{print_census_result, print_game_board, print_query_answer},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "jumble",
    about = "Word scrambles, dictionary queries, and hidden-word games",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default, compiled in) or path to a file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for reproducible scrambles and games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Reshuffle the board before every guess
    #[arg(long, global = true)]
    shuffle_on_guess: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Simple CLI game (line-based, without TUI)
    Simple,

    /// Create a game and print its board
    New {
        /// Letters in the seed word
        #[arg(short, long, default_value = "6")]
        length: usize,

        /// Shortest hidden word to count
        #[arg(short, long, default_value = "3")]
        min_length: usize,
    },

    /// Scramble the letters of a word
    Scramble { word: String },

    /// Check whether a word is in the dictionary
    Exists { word: String },

    /// List words starting with a prefix
    Prefix { prefix: String },

    /// Search by first letter, last letter, and length
    Search {
        #[arg(short, long)]
        start: Option<char>,

        #[arg(short, long)]
        end: Option<char>,

        #[arg(short, long)]
        length: Option<usize>,
    },

    /// List palindromes
    Palindromes,

    /// List the words hidden in a word's letters
    Subwords {
        word: String,

        #[arg(short, long)]
        min_length: Option<usize>,
    },

    /// Rank seed words of one length by how many words they hide
    Census {
        #[arg(short, long, default_value = "6")]
        length: usize,

        #[arg(short, long)]
        min_length: Option<usize>,

        /// Number of seeds to list
        #[arg(short, long, default_value = "20")]
        top: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play);

    init_tracing(cli.verbose, matches!(command, Commands::Play));

    let dictionary = Arc::new(load_dictionary(&cli.wordlist));
    let config = GameConfig {
        rescramble_on_guess: cli.shuffle_on_guess,
        ..GameConfig::default()
    };
    let registry = match cli.seed {
        Some(seed) => GameRegistry::with_seed(Arc::clone(&dictionary), config, seed),
        None => GameRegistry::new(Arc::clone(&dictionary), config),
    };

    match command {
        Commands::Play => run_play_command(&registry),
        Commands::Simple => run_simple(&registry),
        Commands::New { length, min_length } => {
            run_new_command(&registry, length, min_length, cli.json)
        }
        Commands::Census {
            length,
            min_length,
            top,
        } => {
            let result = run_census(&dictionary, length, min_length, top, !cli.json);
            if cli.json {
                let ranked: Vec<_> = result
                    .ranked
                    .iter()
                    .map(|(word, count)| serde_json::json!({ "word": word, "subWords": count }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&ranked)?);
            } else {
                print_census_result(&result);
            }
            Ok(())
        }
        Commands::Scramble { word } => run_query_command(
            &dictionary,
            &Query::Scramble { word },
            cli.seed,
            cli.json,
        ),
        Commands::Exists { word } => {
            run_query_command(&dictionary, &Query::Exists { word }, cli.seed, cli.json)
        }
        Commands::Prefix { prefix } => {
            run_query_command(&dictionary, &Query::Prefix { prefix }, cli.seed, cli.json)
        }
        Commands::Search { start, end, length } => run_query_command(
            &dictionary,
            &Query::Search {
                start_char: start,
                end_char: end,
                length,
            },
            cli.seed,
            cli.json,
        ),
        Commands::Palindromes => {
            run_query_command(&dictionary, &Query::Palindromes, cli.seed, cli.json)
        }
        Commands::Subwords { word, min_length } => run_query_command(
            &dictionary,
            &Query::SubWords { word, min_length },
            cli.seed,
            cli.json,
        ),
    }
}

/// Install the stderr subscriber
///
/// The TUI owns the terminal, so it gets a filter but no fmt layer.
fn init_tracing(verbose: bool, tui: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = (!tui).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Load the corpus based on the -w flag
///
/// A missing file degrades to an empty dictionary; the failure is logged.
fn load_dictionary(wordlist: &str) -> Dictionary {
    match wordlist {
        "embedded" => Dictionary::embedded(),
        path => Dictionary::load(path),
    }
}

fn run_query_command(
    dictionary: &Dictionary,
    query: &Query,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let answer = match seed {
        Some(seed) => run_query(dictionary, query, &mut StdRng::seed_from_u64(seed)),
        None => run_query(dictionary, query, &mut rand::rng()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&answer)?);
    } else {
        print_query_answer(&answer);
    }
    Ok(())
}

fn run_new_command(
    registry: &GameRegistry,
    length: usize,
    min_length: usize,
    json: bool,
) -> Result<()> {
    let game = registry.create_game(length, Some(min_length))?;

    if json {
        let report = CreatedReport::from(game.view());
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Created game {}", game.id());
        print_game_board(&game.view());
    }
    Ok(())
}

fn run_play_command(registry: &GameRegistry) -> Result<()> {
    use jumble::interactive::{App, run_tui};

    let app = App::new(registry)?;
    run_tui(app)
}
