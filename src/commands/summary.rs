//! Summary command
//!
//! Aggregates one or more results logs per scoring method.

use crate::session::{MethodSummary, ResultLine, ResultLog, summarize};
use anyhow::Result;
use log::info;
use std::path::PathBuf;

/// Read every log and summarize the combined lines
///
/// # Errors
///
/// Returns an error if any log cannot be read.
pub fn summarize_logs(paths: &[PathBuf]) -> Result<Vec<MethodSummary>> {
    let mut lines: Vec<ResultLine> = Vec::new();
    for path in paths {
        let read = ResultLog::new(path).read()?;
        info!("Read {} results from {}", read.len(), path.display());
        lines.extend(read);
    }
    Ok(summarize(&lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ScoringMethod;
    use std::fs;

    #[test]
    fn summarize_across_files() {
        let dir = std::env::temp_dir();
        let a = dir.join(format!("wordle_summary_a_{}.txt", std::process::id()));
        let b = dir.join(format!("wordle_summary_b_{}.txt", std::process::id()));
        fs::write(&a, "crane, 2, DECAY\nslate, -1, DECAY\n").unwrap();
        fs::write(&b, "irate, 4, SQRT_INTERPOLATION\ntrace, 3, DECAY\n").unwrap();

        let summary = summarize_logs(&[a.clone(), b.clone()]).unwrap();
        fs::remove_file(a).ok();
        fs::remove_file(b).ok();

        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].method, ScoringMethod::SqrtInterpolation);
        assert_eq!(summary[1].method, ScoringMethod::Decay);
        assert_eq!(summary[1].sessions, 3);
        assert_eq!(summary[1].completed, 2);
        assert_eq!(summary[1].successes, 2);
        assert_eq!(summary[1].average_moves, 2.5);
        assert_eq!(summary[1].success_rate(), 100.0);
    }

    #[test]
    fn missing_log_is_an_error() {
        assert!(summarize_logs(&[PathBuf::from("/no/such/results.txt")]).is_err());
    }
}
