//! Word lists and base scores
//!
//! Loads the dictionary and frequency table and turns them into the ranked,
//! read-only candidate baseline every session starts from.

pub mod corpus;
pub mod loader;

pub use corpus::{LetterFrequencies, build_candidates};
pub use loader::{load_frequencies, load_word_list};

use crate::core::Word;
use crate::scoring::{Candidate, ScoringMethod};
use anyhow::{Result, bail};
use log::info;
use rustc_hash::{FxHashMap, FxHashSet};
use std::path::Path;

/// Default dictionary file, one word per line
pub const DEFAULT_WORD_LIST: &str = "5_letter_words.txt";

/// Default frequency table, `word,count` with a header row
pub const DEFAULT_FREQUENCIES: &str = "word_freq_wikipedia.csv";

/// Dictionary plus the candidate baseline built from it
#[derive(Debug, Clone)]
pub struct Corpus {
    dictionary: Vec<Word>,
    candidates: Vec<Candidate>,
}

impl Corpus {
    /// Join `dictionary` with `frequencies` and rank the result for `method`
    #[must_use]
    pub fn new(
        dictionary: Vec<Word>,
        frequencies: &FxHashMap<String, f64>,
        method: ScoringMethod,
    ) -> Self {
        let candidates = build_candidates(&dictionary, frequencies, method);
        Self {
            dictionary,
            candidates,
        }
    }

    /// Every valid dictionary word, in file order
    #[must_use]
    pub fn dictionary(&self) -> &[Word] {
        &self.dictionary
    }

    /// Ranked, read-only baseline shared by all sessions
    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Dictionary words that made it into the baseline, in file order
    ///
    /// Only these can ever be suggested, so they are the words worth playing
    /// against.
    #[must_use]
    pub fn targets(&self) -> Vec<&Word> {
        let known: FxHashSet<&str> = self.candidates.iter().map(|c| c.word().text()).collect();
        self.dictionary
            .iter()
            .filter(|w| known.contains(w.text()))
            .collect()
    }
}

/// Load both files and build the corpus
///
/// # Errors
///
/// Returns an error if either file cannot be read or no dictionary word has a
/// frequency entry.
pub fn load_corpus(
    words_path: impl AsRef<Path>,
    frequencies_path: impl AsRef<Path>,
    method: ScoringMethod,
) -> Result<Corpus> {
    let words = loader::load_word_list(&words_path)?;
    let frequencies = loader::load_frequencies(&frequencies_path)?;
    let corpus = Corpus::new(words, &frequencies, method);

    if corpus.candidates.is_empty() {
        bail!(
            "no word in {} has an entry in {}",
            words_path.as_ref().display(),
            frequencies_path.as_ref().display()
        );
    }

    info!(
        "Built {} candidates from {} dictionary words",
        corpus.candidates.len(),
        corpus.dictionary.len()
    );
    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("wordle_helper_{}_{name}", std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn load_corpus_from_files() {
        let words = write_temp("words_ok.txt", "slate\ncrane\nqajaq\n");
        let freq = write_temp("freq_ok.csv", "word,count\ncrane,9\nslate,4\n");

        let corpus = load_corpus(&words, &freq, ScoringMethod::Decay).unwrap();
        assert_eq!(corpus.dictionary().len(), 3);
        assert_eq!(corpus.candidates().len(), 2);

        // file order, without the word that has no frequency
        let targets: Vec<&str> = corpus.targets().iter().map(|w| w.text()).collect();
        assert_eq!(targets, ["slate", "crane"]);

        fs::remove_file(words).ok();
        fs::remove_file(freq).ok();
    }

    #[test]
    fn load_corpus_rejects_empty_join() {
        let words = write_temp("words_empty.txt", "crane\n");
        let freq = write_temp("freq_empty.csv", "word,count\nslate,4\n");

        let err = load_corpus(&words, &freq, ScoringMethod::Decay).unwrap_err();
        assert!(err.to_string().contains("no word"));

        fs::remove_file(words).ok();
        fs::remove_file(freq).ok();
    }
}
