//! Word scoring
//!
//! Base scores per candidate and the family of methods that combine them
//! into a per-move ranking score.

mod candidate;
pub mod method;

pub use candidate::{Candidate, RankedCandidate, sort_ranked};
pub use method::{MAX_MOVES, POPULARITY_EPSILON, ScoringMethod, ScoringStrategy};
