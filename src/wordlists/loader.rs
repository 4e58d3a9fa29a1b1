//! Word list and frequency table loading
//!
//! Reads the flat files the candidate baseline is built from: a dictionary
//! with one word per line and a `word,count` CSV of corpus frequencies.

use crate::core::Word;
use anyhow::{Context, Result};
use log::{debug, warn};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fs;
use std::path::Path;

/// Load a dictionary file
///
/// # Errors
///
/// Returns an error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_helper::wordlists::loader::load_word_list;
///
/// let words = load_word_list("5_letter_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;
    let words = words_from_str(&content);
    debug!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse a dictionary held in memory
///
/// Lines are trimmed and lowercased; blank lines are skipped, invalid words
/// are skipped with a warning and duplicates keep their first occurrence.
#[must_use]
pub fn words_from_str(content: &str) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    content
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    warn!("Skipping line {}: '{trimmed}': {e}", i + 1);
                    None
                }
            }
        })
        .filter(|word| seen.insert(word.text().to_string()))
        .collect()
}

/// Load a `word,count` frequency CSV
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_frequencies<P: AsRef<Path>>(path: P) -> Result<FxHashMap<String, f64>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read frequency table {}", path.display()))?;
    let frequencies = frequencies_from_str(&content);
    debug!("Loaded {} frequencies from {}", frequencies.len(), path.display());
    Ok(frequencies)
}

/// Parse a frequency table held in memory
///
/// The first line is a header. Only five-letter words are kept, lowercased.
/// A missing or unparseable count reads as zero, and a repeated word keeps
/// its first row.
#[must_use]
pub fn frequencies_from_str(content: &str) -> FxHashMap<String, f64> {
    let mut frequencies = FxHashMap::default();

    for line in content.lines().skip(1) {
        let mut fields = line.split(',');
        let word = fields.next().unwrap_or_default().trim().to_lowercase();
        if word.chars().count() != 5 {
            continue;
        }
        let count = fields
            .next()
            .and_then(|c| c.trim().parse::<f64>().ok())
            .filter(|c| c.is_finite() && *c >= 0.0)
            .unwrap_or(0.0);
        frequencies.entry(word).or_insert(count);
    }

    frequencies
}
