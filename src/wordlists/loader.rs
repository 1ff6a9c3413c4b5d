//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use std::fs;
use std::io;
use std::path::Path;

/// Normalize a single word list entry
///
/// Trims surrounding whitespace and lowercases the entry. Returns `None` for
/// blank lines, comment lines (starting with `#`), and entries containing
/// anything other than letters.
#[must_use]
pub fn normalize(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    if !trimmed.chars().all(char::is_alphabetic) {
        return None;
    }
    Some(trimmed.to_lowercase())
}

/// Load words from a newline-delimited file
///
/// Returns a vector of normalized words, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/root_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    Ok(content.lines().filter_map(normalize).collect())
}

/// Convert an embedded string slice to an owned word vector
///
/// # Examples
/// ```
/// use scramble::wordlists::loader::words_from_slice;
/// use scramble::wordlists::ROOT_WORDS;
///
/// let words = words_from_slice(ROOT_WORDS);
/// assert_eq!(words.len(), ROOT_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().filter_map(|&s| normalize(s)).collect()
}
