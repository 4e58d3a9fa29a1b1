//! Wordle Helper
//!
//! Suggests Wordle guesses by ranking a dictionary on letter-frequency
//! structure and word popularity, narrowing the candidates from the game's
//! feedback after every move.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_helper::core::{Feedback, Word};
//! use wordle_helper::scoring::{Candidate, ScoringMethod};
//! use wordle_helper::solver::{CandidatePool, Suggestion};
//!
//! let baseline = vec![
//!     Candidate::new(Word::new("crane").unwrap(), 80.0, 90.0),
//!     Candidate::new(Word::new("trace").unwrap(), 70.0, 60.0),
//!     Candidate::new(Word::new("arose").unwrap(), 60.0, 95.0),
//! ];
//! let mut pool = CandidatePool::new(&baseline, ScoringMethod::Decay);
//!
//! let Suggestion::Guess(first) = pool.suggest_next() else { unreachable!() };
//! assert_eq!(first.text(), "crane");
//!
//! pool.apply_feedback(&first, &Feedback::parse("gxxxx").unwrap());
//! assert_eq!(pool.suggest_next(), Suggestion::Exhausted);
//! ```

// Core domain types
pub mod core;

// Base scores and scoring methods
pub mod scoring;

// Constraint engine and candidate pool
pub mod solver;

// Dictionary and frequency loading
pub mod wordlists;

// Session driver, feedback sources and results logs
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
