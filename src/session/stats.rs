//! Aggregate statistics over many sessions

use super::driver::SessionReport;
use super::results::ResultLine;
use crate::scoring::{MAX_MOVES, ScoringMethod};
use rustc_hash::FxHashMap;
use std::time::Duration;

/// Statistics from a batch of oracle sessions
#[derive(Debug, Clone, PartialEq)]
pub struct BacktestStatistics {
    pub total: usize,
    /// Solved in any number of moves
    pub solved: usize,
    /// Solved within `MAX_MOVES`
    pub solved_in_limit: usize,
    /// Exhausted or repeated
    pub failed: usize,
    /// Move count -> sessions solved in that many moves
    pub distribution: FxHashMap<u32, usize>,
    /// Mean moves over solved sessions
    pub average_moves: f64,
    pub duration: Duration,
}

impl BacktestStatistics {
    #[must_use]
    pub fn from_reports<'r>(
        reports: impl IntoIterator<Item = &'r SessionReport>,
        duration: Duration,
    ) -> Self {
        let mut total = 0;
        let mut distribution: FxHashMap<u32, usize> = FxHashMap::default();
        for report in reports {
            total += 1;
            if let Ok(moves) = u32::try_from(report.moves()) {
                *distribution.entry(moves).or_insert(0) += 1;
            }
        }

        let solved: usize = distribution.values().sum();
        let solved_in_limit = distribution
            .iter()
            .filter(|&(&moves, _)| moves <= MAX_MOVES)
            .map(|(_, &count)| count)
            .sum();
        let total_moves: u64 = distribution
            .iter()
            .map(|(&moves, &count)| u64::from(moves) * count as u64)
            .sum();

        Self {
            total,
            solved,
            solved_in_limit,
            failed: total - solved,
            distribution,
            average_moves: ratio(total_moves as f64, solved),
            duration,
        }
    }

    /// Share of sessions solved within the move limit, as a percentage
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        100.0 * ratio(self.solved_in_limit as f64, self.total)
    }

    /// Largest move count that was needed
    #[must_use]
    pub fn max_moves(&self) -> u32 {
        self.distribution.keys().copied().max().unwrap_or(0)
    }
}

/// Per-method summary of a results log
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSummary {
    pub method: ScoringMethod,
    pub sessions: usize,
    /// Sessions that did not fail (positive move count)
    pub completed: usize,
    /// Sessions solved in 1..=`MAX_MOVES` moves
    pub successes: usize,
    /// Mean moves among successful sessions
    pub average_moves: f64,
}

impl MethodSummary {
    /// Success rate over completed sessions, as a percentage
    ///
    /// Failed sessions (`-1`) do not count against the rate.
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        100.0 * ratio(self.successes as f64, self.completed)
    }
}

/// Group result lines by method, in [`ScoringMethod::ALL`] order
#[must_use]
pub fn summarize(lines: &[ResultLine]) -> Vec<MethodSummary> {
    ScoringMethod::ALL
        .iter()
        .filter_map(|&method| {
            let of_method: Vec<&ResultLine> = lines.iter().filter(|l| l.method == method).collect();
            if of_method.is_empty() {
                return None;
            }

            let limit = i32::try_from(MAX_MOVES).unwrap_or(i32::MAX);
            let completed: Vec<i32> = of_method
                .iter()
                .map(|l| l.moves)
                .filter(|&m| m > 0)
                .collect();
            let successful: Vec<i32> = completed.iter().copied().filter(|&m| m <= limit).collect();
            let total: i32 = successful.iter().sum();

            Some(MethodSummary {
                method,
                sessions: of_method.len(),
                completed: completed.len(),
                successes: successful.len(),
                average_moves: ratio(f64::from(total), successful.len()),
            })
        })
        .collect()
}

fn ratio(value: f64, count: usize) -> f64 {
    if count == 0 { 0.0 } else { value / count as f64 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::session::driver::SessionOutcome;

    fn report(outcome: SessionOutcome) -> SessionReport {
        SessionReport {
            outcome,
            method: ScoringMethod::Decay,
            turns: Vec::new(),
        }
    }

    fn solved(moves: u32) -> SessionReport {
        report(SessionOutcome::Solved {
            word: "crane".to_string(),
            moves,
        })
    }

    #[test]
    fn backtest_statistics() {
        let reports = [
            solved(2),
            solved(3),
            solved(3),
            solved(8),
            report(SessionOutcome::Exhausted {
                partial: "cr".to_string(),
            }),
            report(SessionOutcome::Repeated {
                word: Word::new("slate").unwrap(),
            }),
        ];
        let stats = BacktestStatistics::from_reports(&reports, Duration::from_secs(1));

        assert_eq!(stats.total, 6);
        assert_eq!(stats.solved, 4);
        assert_eq!(stats.solved_in_limit, 3);
        assert_eq!(stats.failed, 2);
        assert_eq!(stats.distribution.get(&3), Some(&2));
        assert_eq!(stats.average_moves, 4.0);
        assert_eq!(stats.success_rate(), 50.0);
        assert_eq!(stats.max_moves(), 8);
    }

    #[test]
    fn backtest_statistics_empty() {
        let stats = BacktestStatistics::from_reports(&[], Duration::ZERO);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_moves, 0.0);
        assert_eq!(stats.success_rate(), 0.0);
    }

    #[test]
    fn summarize_groups_by_method() {
        let lines = [
            ResultLine::new("crane", 2, ScoringMethod::Decay),
            ResultLine::new("slate", 4, ScoringMethod::Decay),
            ResultLine::new("jazzy", -1, ScoringMethod::Decay),
            ResultLine::new("fuzzy", 7, ScoringMethod::Decay),
            ResultLine::new("crane", 3, ScoringMethod::StructuralOnly),
        ];
        let summary = summarize(&lines);

        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].method, ScoringMethod::StructuralOnly);
        assert_eq!(summary[0].sessions, 1);

        let decay = &summary[1];
        assert_eq!(decay.method, ScoringMethod::Decay);
        assert_eq!(decay.sessions, 4);
        assert_eq!(decay.completed, 3);
        assert_eq!(decay.successes, 2);
        assert_eq!(decay.average_moves, 3.0);
        assert!((decay.success_rate() - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn failed_sessions_do_not_lower_success_rate() {
        let lines = [
            ResultLine::new("crane", 2, ScoringMethod::Decay),
            ResultLine::new("slate", -1, ScoringMethod::Decay),
        ];
        let summary = summarize(&lines);

        assert_eq!(summary[0].sessions, 2);
        assert_eq!(summary[0].completed, 1);
        assert_eq!(summary[0].success_rate(), 100.0);
    }

    #[test]
    fn all_failed_sessions_rate_zero() {
        let lines = [ResultLine::new("jazzy", -1, ScoringMethod::Decay)];
        let summary = summarize(&lines);
        assert_eq!(summary[0].completed, 0);
        assert_eq!(summary[0].success_rate(), 0.0);
        assert_eq!(summary[0].average_moves, 0.0);
    }
}
