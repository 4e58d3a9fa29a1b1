//! Core domain types for the word game
//!
//! Words and feedback are pure value types with no knowledge of scoring or
//! candidate pools.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackError, Mark};
pub use word::{WORD_LEN, Word, WordError};
