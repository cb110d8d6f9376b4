//! Word list loading utilities
//!
//! Reads newline-delimited word lists from disk.
//! Entries are trimmed and lowercased; blank lines are skipped.

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one word per line
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use jumble::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_from_file_reads_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "deed").unwrap();
        writeln!(file, "Level").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "yellow\r").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words, vec!["deed", "level", "yellow"]);
    }

    #[test]
    fn lines_are_trimmed_and_lowercased() {
        let words = words_from_lines(["Crane", "  irate  ", "", "   "].into_iter());
        assert_eq!(words, vec!["crane", "irate"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_file(dir.path().join("missing.txt"));
        assert!(result.is_err());
    }
}
