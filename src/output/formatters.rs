//! Formatting utilities for terminal output

/// Render letters as spaced uppercase tiles, e.g. `Y E L L O W`
#[must_use]
pub fn letter_tiles(letters: &str) -> String {
    letters
        .chars()
        .flat_map(char::to_uppercase)
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Placeholder for an answer the player has not found yet
#[must_use]
pub fn masked_word(length: usize) -> String {
    "_".repeat(length)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Progress bar for found answers
#[must_use]
pub fn completion_bar(found: usize, total: usize, width: usize) -> String {
    create_progress_bar(found as f64, total as f64, width)
}

/// Lay words out in rows of `columns` cells padded to the longest word
#[must_use]
pub fn word_columns(words: &[String], columns: usize) -> Vec<String> {
    let width = words.iter().map(|w| w.chars().count()).max().unwrap_or(0);
    words
        .chunks(columns.max(1))
        .map(|row| {
            row.iter()
                .map(|w| format!("{w:<width$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_tiles_uppercase_and_spaced() {
        assert_eq!(letter_tiles("wolley"), "W O L L E Y");
        assert_eq!(letter_tiles(""), "");
    }

    #[test]
    fn masked_word_matches_length() {
        assert_eq!(masked_word(4), "____");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn completion_bar_without_answers() {
        assert_eq!(completion_bar(0, 0, 4), "░░░░");
    }

    #[test]
    fn word_columns_pads_cells() {
        let words: Vec<String> = ["low", "lowly", "owl", "yew", "yowl"]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            word_columns(&words, 2),
            vec!["low    lowly", "owl    yew", "yowl"]
        );
    }
}
