//! Candidate filtering and ranking
//!
//! The constraint engine narrows a ranked candidate pool from feedback and
//! picks the next word to play.

mod constraints;
mod interpreter;
mod pool;

pub use constraints::{Constraints, Violation};
pub use interpreter::{ConstraintDelta, interpret};
pub use pool::{CandidatePool, Suggestion};
