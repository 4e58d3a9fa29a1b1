//! Session driver
//!
//! Runs one game from a full pool to a terminal outcome, asking a
//! [`FeedbackSource`] for feedback after every suggestion.

use super::source::FeedbackSource;
use crate::core::{Feedback, Word};
use crate::scoring::{MAX_MOVES, ScoringMethod};
use crate::solver::{CandidatePool, Suggestion};
use anyhow::Result;
use log::debug;
use std::fmt;

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Every slot is known
    Solved { word: String, moves: u32 },
    /// No candidate survives; `partial` holds the solved letters
    Exhausted { partial: String },
    /// The next suggestion would have repeated `word`
    Repeated { word: Word },
}

impl SessionOutcome {
    /// Move count for the results log, `-1` for a failed session
    #[must_use]
    pub fn moves(&self) -> i32 {
        match self {
            Self::Solved { moves, .. } => i32::try_from(*moves).unwrap_or(i32::MAX),
            Self::Exhausted { .. } | Self::Repeated { .. } => -1,
        }
    }

    /// Solved within the game's move limit
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Solved { moves, .. } if *moves <= MAX_MOVES)
    }
}

impl fmt::Display for SessionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solved { word, moves } => write!(f, "solved {word} in {moves}"),
            Self::Exhausted { partial } => write!(f, "no candidates left (known: {partial})"),
            Self::Repeated { word } => write!(f, "would repeat {word}"),
        }
    }
}

/// One played word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub feedback: Feedback,
    /// Produced by the smart move rather than the ranking
    pub smart: bool,
    /// Live pool size once the feedback was recorded, before the next
    /// suggestion drops inconsistent words
    pub remaining_after: usize,
}

/// Full record of a session
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub outcome: SessionOutcome,
    pub method: ScoringMethod,
    pub turns: Vec<Turn>,
}

impl SessionReport {
    #[must_use]
    pub fn moves(&self) -> i32 {
        self.outcome.moves()
    }
}

/// Play one session to its end
///
/// The pool is reset first, so a pool can be reused across sessions. Once a
/// single slot is missing with more than two words still live, every later
/// suggestion comes from the smart move at that slot. The live count is taken
/// before the latest feedback has pruned anything.
///
/// # Errors
///
/// Returns an error only if the feedback source fails.
pub fn run_session(
    pool: &mut CandidatePool<'_>,
    source: &mut dyn FeedbackSource,
) -> Result<SessionReport> {
    pool.reset_session();

    let method = pool.method();
    let mut turns = Vec::new();
    let mut moves = 0;
    let mut smart_position: Option<usize> = None;

    let outcome = loop {
        let suggestion = match smart_position {
            Some(position) => pool.suggest_smart_move(position),
            None => pool.suggest_next(),
        };

        let guess = match suggestion {
            Suggestion::Guess(word) => word,
            Suggestion::Exhausted => {
                break SessionOutcome::Exhausted {
                    partial: pool.solved_word(),
                };
            }
            Suggestion::Repeat(word) => break SessionOutcome::Repeated { word },
        };

        moves += 1;
        pool.set_move_number(moves);
        let feedback = source.feedback(&guess)?;
        pool.apply_feedback(&guess, &feedback);

        turns.push(Turn {
            guess,
            feedback,
            smart: smart_position.is_some(),
            remaining_after: pool.remaining_count(),
        });

        if pool.missing_count() == 0 {
            break SessionOutcome::Solved {
                word: pool.solved_word(),
                moves,
            };
        }
        if pool.remaining_count() == 0 {
            break SessionOutcome::Exhausted {
                partial: pool.solved_word(),
            };
        }
        if smart_position.is_none() && pool.missing_count() == 1 && pool.remaining_count() > 2 {
            smart_position = pool.missing_position();
            debug!("Switching to smart moves at position {smart_position:?}");
        }
    };

    debug!("Session [{method}] {outcome} after {} turns", turns.len());
    Ok(SessionReport {
        outcome,
        method,
        turns,
    })
}
