//! Seed word census
//!
//! Ranks every corpus word of a given length by how many sub-words it hides.
//! Useful for picking game lengths that produce rich boards.

use crate::dictionary::Dictionary;
use crate::engine::{DEFAULT_MIN_LENGTH, SubwordMatcher};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Statistics over all seed words of one length
#[derive(Debug, Clone)]
pub struct CensusResult {
    pub length: usize,
    pub min_length: usize,
    /// Corpus words with the requested length
    pub seeds: usize,
    /// Seeds with at least one sub-word
    pub playable: usize,
    pub total_sub_words: usize,
    pub average_sub_words: f64,
    /// Richest seeds first, at most `top` entries
    pub ranked: Vec<(String, usize)>,
    pub duration: Duration,
}

/// Count sub-words for every seed of `length` letters
///
/// Ties are broken alphabetically. A progress bar is drawn on stderr when
/// `show_progress` is set.
#[must_use]
pub fn run_census(
    dictionary: &Dictionary,
    length: usize,
    min_length: Option<usize>,
    top: usize,
    show_progress: bool,
) -> CensusResult {
    let start = Instant::now();
    let min_length = min_length.unwrap_or(DEFAULT_MIN_LENGTH);
    let seeds = dictionary.search(None, None, Some(length));
    let matcher = SubwordMatcher::new(dictionary);

    let pb = if show_progress {
        ProgressBar::new(seeds.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message(format!("{length}-letter seeds"));

    let mut counts: Vec<(String, usize)> = seeds
        .par_iter()
        .map(|&seed| {
            let count = matcher.sub_words(seed, Some(min_length)).len();
            pb.inc(1);
            (seed.to_string(), count)
        })
        .collect();

    pb.finish_and_clear();

    let playable = counts.iter().filter(|(_, count)| *count > 0).count();
    let total_sub_words: usize = counts.iter().map(|(_, count)| count).sum();
    let average_sub_words = if counts.is_empty() {
        0.0
    } else {
        total_sub_words as f64 / counts.len() as f64
    };

    counts.sort_by(|(a_word, a_count), (b_word, b_count)| {
        b_count.cmp(a_count).then_with(|| a_word.cmp(b_word))
    });
    counts.truncate(top);

    CensusResult {
        length,
        min_length,
        seeds: seeds.len(),
        playable,
        total_sub_words,
        average_sub_words,
        ranked: counts,
        duration: start.elapsed(),
    }
}
