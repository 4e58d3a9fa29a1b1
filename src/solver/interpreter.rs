//! Feedback interpretation
//!
//! Turns feedback on a guess into constraint updates without wrongly
//! excluding a letter that repeats in the guess.

use crate::core::{Feedback, Mark, Word};

/// Constraint updates derived from one piece of feedback
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintDelta {
    confirmed: Vec<(u8, usize)>,
    misplaced: Vec<(u8, usize)>,
    excluded: Vec<u8>,
}

impl ConstraintDelta {
    /// (letter, position) pairs known correct
    #[must_use]
    pub fn confirmed(&self) -> &[(u8, usize)] {
        &self.confirmed
    }

    /// (letter, position) pairs where a present letter is not
    #[must_use]
    pub fn misplaced(&self) -> &[(u8, usize)] {
        &self.misplaced
    }

    /// Letters known absent
    #[must_use]
    pub fn excluded(&self) -> &[u8] {
        &self.excluded
    }
}

/// Interpret `feedback` given for `word`
///
/// Every correct or misplaced mark is kept with its position. An absent mark
/// only excludes its letter when no other position of the word marked that
/// letter correct or misplaced.
///
/// # Examples
/// ```
/// use wordle_helper::core::{Feedback, Word};
/// use wordle_helper::solver::interpret;
///
/// let guess = Word::new("sassy").unwrap();
/// let delta = interpret(&guess, &Feedback::parse("gxxxx").unwrap());
///
/// assert_eq!(delta.confirmed(), &[(b's', 0)]);
/// assert_eq!(delta.excluded(), b"ay");
/// ```
#[must_use]
pub fn interpret(word: &Word, feedback: &Feedback) -> ConstraintDelta {
    let mut delta = ConstraintDelta::default();

    for (i, mark) in feedback.marks().iter().enumerate() {
        let letter = word.char_at(i);
        match mark {
            Mark::Correct => delta.confirmed.push((letter, i)),
            Mark::Misplaced => delta.misplaced.push((letter, i)),
            Mark::Absent => {}
        }
    }

    let present = |letter: u8| {
        delta.confirmed.iter().any(|&(c, _)| c == letter)
            || delta.misplaced.iter().any(|&(c, _)| c == letter)
    };
    let excluded: Vec<u8> = feedback
        .marks()
        .iter()
        .enumerate()
        .filter(|&(_, mark)| *mark == Mark::Absent)
        .map(|(i, _)| word.char_at(i))
        .filter(|&letter| !present(letter))
        .fold(Vec::new(), |mut acc, letter| {
            if !acc.contains(&letter) {
                acc.push(letter);
            }
            acc
        });
    delta.excluded = excluded;

    delta
}
