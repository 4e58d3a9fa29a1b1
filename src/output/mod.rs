//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_backtest_statistics, print_benchmark_result, print_solve_result,
    print_summary,
};
