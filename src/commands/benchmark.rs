//! Benchmark command
//!
//! Backtests a random sample of targets without writing a results log.

use super::backtest::{BacktestRun, run_backtest};
use crate::core::Word;
use crate::scoring::{Candidate, ScoringMethod};
use anyhow::Result;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    /// Seed the sample was drawn with, to reproduce the run
    pub seed: u64,
    pub run: BacktestRun,
    pub words_per_second: f64,
}

/// Draw `count` distinct targets and backtest them
///
/// Without a `seed` a random one is drawn and reported.
///
/// # Errors
///
/// Returns an error if the backtest fails.
pub fn run_benchmark(
    baseline: &[Candidate],
    targets: &[&Word],
    method: ScoringMethod,
    count: usize,
    seed: Option<u64>,
) -> Result<BenchmarkResult> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let sample: Vec<&Word> = targets.choose_multiple(&mut rng, count).copied().collect();
    info!("Benchmarking {} words with seed {seed}", sample.len());

    let run = run_backtest(baseline, &sample, method, false)?;
    let secs = run.stats.duration.as_secs_f64();
    let words_per_second = if secs > 0.0 {
        run.stats.total as f64 / secs
    } else {
        0.0
    };

    Ok(BenchmarkResult {
        seed,
        run,
        words_per_second,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> Vec<Candidate> {
        [
            ("crane", 90.0, 70.0),
            ("slate", 80.0, 60.0),
            ("irate", 70.0, 40.0),
            ("trace", 60.0, 30.0),
            ("stale", 50.0, 20.0),
        ]
        .iter()
        .map(|&(w, s, p)| Candidate::new(Word::new(w).unwrap(), s, p))
        .collect()
    }

    fn sample_of(result: &BenchmarkResult) -> Vec<String> {
        result
            .run
            .entries
            .iter()
            .map(|e| e.target.text().to_string())
            .collect()
    }

    #[test]
    fn benchmark_samples_requested_count() {
        let base = baseline();
        let targets: Vec<&Word> = base.iter().map(Candidate::word).collect();

        let result = run_benchmark(&base, &targets, ScoringMethod::Decay, 3, Some(7)).unwrap();
        assert_eq!(result.seed, 7);
        assert_eq!(result.run.stats.total, 3);

        let mut sample = sample_of(&result);
        sample.sort();
        sample.dedup();
        assert_eq!(sample.len(), 3);
    }

    #[test]
    fn benchmark_seed_is_reproducible() {
        let base = baseline();
        let targets: Vec<&Word> = base.iter().map(Candidate::word).collect();

        let a = run_benchmark(&base, &targets, ScoringMethod::Decay, 2, Some(42)).unwrap();
        let b = run_benchmark(&base, &targets, ScoringMethod::Decay, 2, Some(42)).unwrap();
        assert_eq!(sample_of(&a), sample_of(&b));
    }

    #[test]
    fn benchmark_count_larger_than_pool() {
        let base = baseline();
        let targets: Vec<&Word> = base.iter().map(Candidate::word).collect();

        let result = run_benchmark(&base, &targets, ScoringMethod::Decay, 50, None).unwrap();
        assert_eq!(result.run.stats.total, 5);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let base = baseline();
        let targets: Vec<&Word> = base.iter().map(Candidate::word).collect();

        let result = run_benchmark(&base, &targets, ScoringMethod::Decay, 5, Some(1)).unwrap();
        let stats = &result.run.stats;
        let distribution_sum: usize = stats.distribution.values().sum();
        assert_eq!(distribution_sum + stats.failed, stats.total);
    }
}
