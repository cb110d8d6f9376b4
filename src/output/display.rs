//! Display functions for command results

use super::formatters::{completion_bar, letter_tiles, masked_word, word_columns};
use crate::commands::{CensusResult, QueryAnswer};
use crate::game::{GameState, GameView, GuessReport};
use colored::Colorize;

/// Print the result of a dictionary query
pub fn print_query_answer(answer: &QueryAnswer) {
    match answer {
        QueryAnswer::Scramble { word, scramble } => {
            println!("\n{} {}", "Word:    ".cyan(), word.bright_white().bold());
            println!(
                "{} {}",
                "Scramble:".cyan(),
                scramble.bright_yellow().bold()
            );
        }
        QueryAnswer::Exists { word, exists } => {
            if *exists {
                println!("\n✅ {} {}", word.bright_white().bold(), "is a word".green());
            } else {
                println!("\n❌ {} {}", word.bright_white().bold(), "is not a word".red());
            }
        }
        QueryAnswer::Words { title, words } => {
            println!("\n{}", "─".repeat(60).cyan());
            println!("{} ({} found)", title.bright_cyan().bold(), words.len());
            println!("{}", "─".repeat(60).cyan());

            if words.is_empty() {
                println!("{}", "  (no words)".bright_black());
            }
            for row in word_columns(words, 6) {
                println!("  {row}");
            }
        }
    }
}

/// Print the current board of a game
pub fn print_game_board(game: &GameView) {
    let found = game.total_words - game.remaining_words;

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        "   {}",
        letter_tiles(&game.scramble_word).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
    println!(
        "   Found: [{}] {}/{}",
        completion_bar(found, game.total_words, 30).green(),
        found,
        game.total_words
    );

    if !game.guessed_words.is_empty() {
        println!("   {}", game.guessed_words.join(", ").bright_white());
    }
}

/// Print the outcome of a guess
pub fn print_guess_report(report: &GuessReport) {
    let word = report.guess_word.trim().to_uppercase();
    if report.correct {
        println!("\n✅ {} {}", word.bright_white().bold(), report.result.green());
    } else {
        println!("\n❌ {} {}", word.bright_white().bold(), report.result.red());
    }
    println!(
        "   {} of {} words remaining",
        report.game.remaining_words, report.game.total_words
    );
}

/// Print every answer of a game, masking the ones not yet found
pub fn print_answers(game: &GameState, reveal: bool) {
    println!("\n{}", "Answers:".bright_cyan().bold());
    let cells: Vec<String> = game
        .sub_words()
        .iter()
        .map(|sub_word| {
            if sub_word.guessed || reveal {
                sub_word.word.clone()
            } else {
                masked_word(sub_word.word.chars().count())
            }
        })
        .collect();

    for row in word_columns(&cells, 6) {
        println!("  {row}");
    }
    if reveal {
        println!(
            "\n  The seed word was {}",
            game.original().to_uppercase().bright_yellow().bold()
        );
    }
}

/// Print the result of a census run
pub fn print_census_result(result: &CensusResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {}",
        "SEED CENSUS:".bright_cyan().bold(),
        format!("{}-letter words", result.length).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Coverage:".bright_cyan().bold());
    println!("   Seeds:            {}", result.seeds);
    println!(
        "   Playable:         {}",
        format!("{}", result.playable).green()
    );
    println!("   Total answers:    {}", result.total_sub_words);
    println!("   Min sub-word len: {}", result.min_length);
    println!(
        "   Average answers:  {}",
        format!("{:.2}", result.average_sub_words)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if result.ranked.is_empty() {
        return;
    }

    println!("\n📈 {}", "Richest seeds:".bright_cyan().bold());
    let max = result.ranked.first().map_or(0, |(_, count)| *count);
    for (i, (word, count)) in result.ranked.iter().enumerate() {
        println!(
            "   {:>3}. {:<12} {} {count}",
            i + 1,
            word.to_uppercase(),
            completion_bar(*count, max, 30).green()
        );
    }
}
