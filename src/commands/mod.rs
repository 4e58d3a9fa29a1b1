//! Command implementations

pub mod analyze;
pub mod backtest;
pub mod benchmark;
pub mod play;
pub mod solve;
pub mod summary;

pub use analyze::{AnalysisResult, analyze_word};
pub use backtest::{BacktestEntry, BacktestRun, run_backtest};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use play::run_play;
pub use solve::{SolveResult, solve_word};
pub use summary::summarize_logs;
