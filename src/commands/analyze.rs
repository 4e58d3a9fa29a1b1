//! Word analysis command
//!
//! Shows a word's base scores and how every scoring method rates it as the
//! game goes on.

use crate::core::Word;
use crate::scoring::{Candidate, MAX_MOVES, ScoringMethod};
use anyhow::{Context, Result, bail};

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: String,
    pub structural: f64,
    pub popularity: f64,
    /// 1-based position in the baseline ranking
    pub rank: usize,
    pub total_candidates: usize,
    /// Scores under each method for moves `0..=MAX_MOVES`
    pub scores: Vec<(ScoringMethod, Vec<f64>)>,
}

/// Analyze `word` against the candidate baseline
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters or contains non-ASCII)
/// - The word is not a candidate
pub fn analyze_word(baseline: &[Candidate], word: &str) -> Result<AnalysisResult> {
    let word = Word::new(word).with_context(|| format!("invalid word '{word}'"))?;

    let Some((index, candidate)) = baseline
        .iter()
        .enumerate()
        .find(|(_, c)| c.word().text() == word.text())
    else {
        bail!("'{word}' is not in the candidate list");
    };

    let scores = ScoringMethod::ALL
        .iter()
        .map(|&method| {
            let per_move = (0..=MAX_MOVES).map(|m| candidate.score(method, m)).collect();
            (method, per_move)
        })
        .collect();

    Ok(AnalysisResult {
        word: word.text().to_string(),
        structural: candidate.structural_score(),
        popularity: candidate.popularity_score(),
        rank: index + 1,
        total_candidates: baseline.len(),
        scores,
    })
}
