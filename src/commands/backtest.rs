//! Backtest - play every dictionary word against the oracle
//!
//! Sessions are independent, so targets are spread over the rayon pool with
//! one candidate pool per worker over the shared baseline.

use crate::core::Word;
use crate::scoring::{Candidate, ScoringMethod};
use crate::session::{
    BacktestStatistics, Oracle, ResultLine, ResultLog, SessionReport, run_session,
};
use crate::solver::CandidatePool;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use std::time::Instant;

/// One target and how its session went
#[derive(Debug, Clone)]
pub struct BacktestEntry {
    pub target: Word,
    pub report: SessionReport,
}

impl BacktestEntry {
    #[must_use]
    pub fn result_line(&self) -> ResultLine {
        ResultLine::new(self.target.text(), self.report.moves(), self.report.method)
    }
}

/// Entries in target order plus their statistics
#[derive(Debug, Clone)]
pub struct BacktestRun {
    pub method: ScoringMethod,
    pub entries: Vec<BacktestEntry>,
    pub stats: BacktestStatistics,
}

impl BacktestRun {
    /// Append one line per target, in target order
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be written.
    pub fn write_log(&self, log: &ResultLog) -> Result<()> {
        let lines: Vec<ResultLine> = self.entries.iter().map(BacktestEntry::result_line).collect();
        log.append_all(&lines)?;
        info!("Appended {} results to {}", lines.len(), log.path().display());
        Ok(())
    }

    /// Targets that were not solved within the move limit
    #[must_use]
    pub fn failures(&self) -> Vec<&BacktestEntry> {
        self.entries
            .iter()
            .filter(|e| !e.report.outcome.is_success())
            .collect()
    }
}

/// Run an oracle session for every target
///
/// # Errors
///
/// Returns an error if the progress bar template is invalid.
pub fn run_backtest(
    baseline: &[Candidate],
    targets: &[&Word],
    method: ScoringMethod,
    show_progress: bool,
) -> Result<BacktestRun> {
    let pb = if show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb.set_message(method.name());
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let entries = targets
        .par_iter()
        .map_init(
            || CandidatePool::new(baseline, method),
            |pool, &target| {
                let report = run_session(pool, &mut Oracle::new(target.clone()))?;
                pb.inc(1);
                Ok(BacktestEntry {
                    target: target.clone(),
                    report,
                })
            },
        )
        .collect::<Result<Vec<_>>>()?;
    let duration = start.elapsed();

    pb.finish_with_message(format!("{} complete", method.name()));

    let stats = BacktestStatistics::from_reports(entries.iter().map(|e| &e.report), duration);
    info!(
        "[{method}] {} sessions, {} solved in {:.2}s",
        stats.total,
        stats.solved,
        duration.as_secs_f64()
    );

    Ok(BacktestRun {
        method,
        entries,
        stats,
    })
}
