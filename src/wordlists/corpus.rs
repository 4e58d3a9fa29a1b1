//! Base score computation
//!
//! Joins the dictionary with the frequency table and derives each word's
//! structural (letter frequency) and popularity scores, both scaled to 0-100.

use crate::core::{WORD_LEN, Word};
use crate::scoring::{Candidate, RankedCandidate, ScoringMethod, sort_ranked};
use rustc_hash::FxHashMap;

const VOWELS: &[u8] = b"aeiou";

/// Percentage of words containing each letter exactly k times (k = 0..=5)
#[derive(Debug, Clone, PartialEq)]
pub struct LetterFrequencies {
    table: [[f64; WORD_LEN + 1]; 26],
}

impl LetterFrequencies {
    /// Build the table from a word set
    #[must_use]
    pub fn from_words(words: &[&Word]) -> Self {
        let mut table = [[0.0; WORD_LEN + 1]; 26];
        if words.is_empty() {
            return Self { table };
        }

        for word in words {
            for (letter, count) in word.char_counts() {
                table[usize::from(letter - b'a')][usize::from(count)] += 1.0;
            }
        }

        let total = words.len() as f64;
        for row in &mut table {
            for cell in row.iter_mut() {
                *cell = 100.0 * *cell / total;
            }
        }
        Self { table }
    }

    /// Percentage of words with `letter` exactly `count` times
    #[must_use]
    pub fn percent(&self, letter: u8, count: usize) -> f64 {
        self.table[usize::from(letter - b'a')][count]
    }

    /// Unscaled structural score of `word`
    ///
    /// Sums, over distinct letters, how common that letter multiplicity is.
    /// A vowel that occurs exactly once counts double.
    #[must_use]
    pub fn raw_score(&self, word: &Word) -> f64 {
        word.char_counts()
            .into_iter()
            .map(|(letter, count)| {
                let mult = if count == 1 && VOWELS.contains(&letter) {
                    2.0
                } else {
                    1.0
                };
                mult * self.percent(letter, usize::from(count))
            })
            .sum()
    }
}

/// Build the ranked candidate baseline
///
/// Only dictionary words present in `frequencies` are kept. Popularity is
/// `100 * sqrt(count) / sqrt(max count)`; structural scores are scaled so the
/// best word gets 100. The result is ordered for move 0 under `method`.
#[must_use]
pub fn build_candidates(
    words: &[Word],
    frequencies: &FxHashMap<String, f64>,
    method: ScoringMethod,
) -> Vec<Candidate> {
    let joined: Vec<(&Word, f64)> = words
        .iter()
        .filter_map(|w| frequencies.get(w.text()).map(|&count| (w, count)))
        .collect();

    let max_sqrt = joined
        .iter()
        .map(|&(_, count)| count.sqrt())
        .fold(0.0_f64, f64::max);

    let joined_words: Vec<&Word> = joined.iter().map(|&(w, _)| w).collect();
    let letters = LetterFrequencies::from_words(&joined_words);
    let raw: Vec<f64> = joined_words.iter().map(|w| letters.raw_score(w)).collect();
    let max_raw = raw.iter().copied().fold(0.0_f64, f64::max);

    let candidates: Vec<Candidate> = joined
        .iter()
        .zip(&raw)
        .map(|(&(word, count), &raw_score)| {
            let popularity = scale(count.sqrt(), max_sqrt);
            let structural = scale(raw_score, max_raw);
            Candidate::new(word.clone(), structural, popularity)
        })
        .collect();

    rank_for_first_move(&candidates, method)
}

fn scale(value: f64, max: f64) -> f64 {
    if max > 0.0 { 100.0 * value / max } else { 0.0 }
}

fn rank_for_first_move(candidates: &[Candidate], method: ScoringMethod) -> Vec<Candidate> {
    let mut ranked: Vec<RankedCandidate<'_>> = candidates
        .iter()
        .map(|c| RankedCandidate::new(c, method, 0))
        .collect();
    sort_ranked(&mut ranked);
    ranked.iter().map(|r| r.candidate().clone()).collect()
}
