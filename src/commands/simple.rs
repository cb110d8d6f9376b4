//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::game::{GameRegistry, GameState};
use crate::output::{print_answers, print_game_board, print_guess_report};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the line-based game loop against a registry
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails, or if
/// the registry cannot create a game (for example, an empty dictionary).
pub fn run_simple(registry: &GameRegistry) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Jumble - Interactive Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Find every word hidden in the scrambled letters.");
    print_help();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut game = registry.create_default()?;
    print_game_board(&game.view());

    loop {
        let Some(line) = get_user_input(&mut input, "Guess")? else {
            // stdin closed
            registry.end_game(&game.id().to_string())?;
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };
        let id = game.id().to_string();

        match line.to_lowercase().as_str() {
            ":quit" | ":q" | ":exit" => {
                registry.end_game(&id)?;
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            ":new" | ":n" => {
                registry.end_game(&id)?;
                game = registry.create_default()?;
                println!("\n🔄 New game started!");
                print_game_board(&game.view());
            }
            ":shuffle" | ":s" => {
                registry.rescramble(&id)?;
                print_game_board(&registry.view(&id)?);
            }
            ":words" | ":w" => {
                print_answers(&registry.get(&id)?, false);
            }
            ":reveal" => {
                game = registry.get(&id)?;
                print_answers(&game, true);
            }
            ":help" | ":h" | "?" => print_help(),
            _ => {
                let report = registry.guess(&id, &line)?;
                print_guess_report(&report);

                if report.game.remaining_words == 0 {
                    game = registry.get(&id)?;
                    celebrate(&game);

                    let again = get_user_input(&mut input, "Play again? (yes/no)")?
                        .unwrap_or_default()
                        .to_lowercase();
                    registry.end_game(&id)?;
                    if matches!(again.as_str(), "yes" | "y") {
                        game = registry.create_default()?;
                        println!("\n🔄 New game started!");
                        print_game_board(&game.view());
                    } else {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                } else if report.correct {
                    print_game_board(&report.game);
                }
            }
        }
    }
}

fn celebrate(game: &GameState) {
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "      🎉 🎊 ✨  A L L   W O R D S   F O U N D !  ✨ 🎊 🎉      "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());
    println!(
        "\n  You found all {} words hidden in {}",
        game.total_words().to_string().bright_cyan().bold(),
        game.original().to_uppercase().bright_yellow().bold()
    );
    println!();
}

fn print_help() {
    println!("Type a word and press Enter to guess.");
    println!("Commands: ':shuffle' new letter order, ':words' show progress,");
    println!("          ':reveal' show answers, ':new' new game, ':quit' exit\n");
}

/// Prompt and read one trimmed line; `None` once input is exhausted
fn get_user_input<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
