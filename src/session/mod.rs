//! Playing sessions
//!
//! Drives a [`CandidatePool`](crate::solver::CandidatePool) through whole
//! games against a feedback source and records how they went.

pub mod driver;
pub mod results;
pub mod source;
pub mod stats;

pub use driver::{SessionOutcome, SessionReport, Turn, run_session};
pub use results::{PERFORMANCE_LOG, ResultLine, ResultLineError, ResultLog, backtest_log_name};
pub use source::{FeedbackSource, Oracle, Prompt};
pub use stats::{BacktestStatistics, MethodSummary, summarize};
