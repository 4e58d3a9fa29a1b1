//! Word solving command
//!
//! Plays one session against a known answer.

use crate::core::Word;
use crate::session::{Oracle, SessionReport, run_session};
use crate::solver::CandidatePool;
use anyhow::{Context, Result};
use log::warn;

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: Word,
    /// Whether the answer is in the candidate baseline at all
    pub in_baseline: bool,
    pub report: SessionReport,
}

/// Solve `target` with the pool's scoring method
///
/// # Errors
///
/// Returns an error if `target` is not a valid five-letter word.
pub fn solve_word(pool: &mut CandidatePool<'_>, target: &str) -> Result<SolveResult> {
    let target = Word::new(target).with_context(|| format!("invalid target word '{target}'"))?;

    let in_baseline = pool
        .baseline()
        .iter()
        .any(|c| c.word().text() == target.text());
    if !in_baseline {
        warn!("'{target}' is not a candidate; it can never be suggested");
    }

    let report = run_session(pool, &mut Oracle::new(target.clone()))?;
    Ok(SolveResult {
        target,
        in_baseline,
        report,
    })
}
