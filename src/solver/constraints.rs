//! Accumulated letter constraints for one session

use crate::core::{Feedback, Mark, WORD_LEN, Word};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeSet;
use std::fmt;

use super::interpreter::ConstraintDelta;

/// Why a word fails the current constraints
///
/// Variants are listed in the order they are checked; the first failing check
/// is the one reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Word contains a letter known to be absent
    Excluded(u8),
    /// Word lacks a confirmed letter at its position
    ConfirmedMismatch { letter: u8, position: usize },
    /// Word has a misplaced letter at a position it is known not to occupy
    MisplacedAt { letter: u8, position: usize },
    /// Word lacks a letter known to be present
    MissingLetter(u8),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Excluded(letter) => write!(f, "contains excluded '{}'", char::from(letter)),
            Self::ConfirmedMismatch { letter, position } => {
                write!(f, "needs '{}' at {position}", char::from(letter))
            }
            Self::MisplacedAt { letter, position } => {
                write!(f, "has '{}' at forbidden {position}", char::from(letter))
            }
            Self::MissingLetter(letter) => write!(f, "lacks '{}'", char::from(letter)),
        }
    }
}

/// Constraint state built up from feedback
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    confirmed: FxHashMap<u8, BTreeSet<usize>>,
    misplaced: FxHashMap<u8, BTreeSet<usize>>,
    excluded: FxHashSet<u8>,
    solved: [Option<u8>; WORD_LEN],
}

impl Constraints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_excluded(&self, letter: u8) -> bool {
        self.excluded.contains(&letter)
    }

    /// Solved slots, `None` where the letter is still unknown
    #[must_use]
    pub const fn solved_slots(&self) -> &[Option<u8>; WORD_LEN] {
        &self.solved
    }

    /// Number of unsolved slots
    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.solved.iter().filter(|s| s.is_none()).count()
    }

    /// Last unsolved slot, if any
    #[must_use]
    pub fn missing_position(&self) -> Option<usize> {
        self.solved.iter().rposition(Option::is_none)
    }

    /// Solved letters joined in order, unknown slots left out
    #[must_use]
    pub fn solved_word(&self) -> String {
        self.solved.iter().flatten().map(|&c| char::from(c)).collect()
    }

    /// True when no feedback has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.confirmed.is_empty()
            && self.misplaced.is_empty()
            && self.excluded.is_empty()
            && self.solved.iter().all(Option::is_none)
    }

    /// First constraint `word` violates, in check order
    #[must_use]
    pub fn violation(&self, word: &Word) -> Option<Violation> {
        if let Some(&letter) = word.chars().iter().find(|c| self.excluded.contains(c)) {
            return Some(Violation::Excluded(letter));
        }

        for (&letter, positions) in &self.confirmed {
            if let Some(&position) = positions.iter().find(|&&p| word.char_at(p) != letter) {
                return Some(Violation::ConfirmedMismatch { letter, position });
            }
        }

        for (&letter, positions) in &self.misplaced {
            if let Some(&position) = positions.iter().find(|&&p| word.char_at(p) == letter) {
                return Some(Violation::MisplacedAt { letter, position });
            }
        }

        self.misplaced
            .keys()
            .find(|&&letter| !word.has_letter(letter))
            .map(|&letter| Violation::MissingLetter(letter))
    }

    /// Check whether `word` satisfies every constraint
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        self.violation(word).is_none()
    }

    /// Fill solved slots from feedback on `word`
    ///
    /// A correct mark fills its slot. A misplaced mark fills the one open slot
    /// when exactly one slot was open before this feedback and the letter is
    /// not already among the solved letters.
    pub fn record_solved(&mut self, word: &Word, feedback: &Feedback) {
        let open_before = self.missing_count();
        let open_slot = self.missing_position();

        for (i, mark) in feedback.marks().iter().enumerate() {
            let letter = word.char_at(i);
            match mark {
                Mark::Correct if self.solved[i].is_none() => self.solved[i] = Some(letter),
                Mark::Misplaced if open_before == 1 && !self.solved.contains(&Some(letter)) => {
                    if let Some(slot) = open_slot
                        && self.solved[slot].is_none()
                    {
                        self.solved[slot] = Some(letter);
                    }
                }
                _ => {}
            }
        }
    }

    /// Merge interpreted feedback
    ///
    /// Exclusions are skipped for letters already confirmed or misplaced, so a
    /// letter is never both known-present and excluded.
    pub fn merge(&mut self, delta: &ConstraintDelta) {
        for &(letter, position) in delta.confirmed() {
            self.confirmed.entry(letter).or_default().insert(position);
            self.excluded.remove(&letter);
        }
        for &(letter, position) in delta.misplaced() {
            self.misplaced.entry(letter).or_default().insert(position);
            self.excluded.remove(&letter);
        }
        for &letter in delta.excluded() {
            if !self.confirmed.contains_key(&letter) && !self.misplaced.contains_key(&letter) {
                self.excluded.insert(letter);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::interpreter::interpret;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn after(guess: &str, feedback: &str) -> Constraints {
        let mut constraints = Constraints::new();
        let guess = word(guess);
        let feedback = Feedback::parse(feedback).unwrap();
        constraints.record_solved(&guess, &feedback);
        constraints.merge(&interpret(&guess, &feedback));
        constraints
    }

    #[test]
    fn empty_constraints_admit_everything() {
        let constraints = Constraints::new();
        assert!(constraints.is_empty());
        assert!(constraints.admits(&word("zzzzz")));
        assert_eq!(constraints.missing_count(), 5);
        assert_eq!(constraints.solved_word(), "");
    }

    #[test]
    fn excluded_checked_first() {
        let constraints = after("crane", "gxxxx");
        // "trace" both lacks c at 0 and contains excluded letters
        assert_eq!(constraints.violation(&word("trace")), Some(Violation::Excluded(b'r')));
        assert_eq!(
            constraints.violation(&word("stilt")),
            Some(Violation::ConfirmedMismatch { letter: b'c', position: 0 })
        );
        assert!(constraints.admits(&word("cloud")));
    }

    #[test]
    fn misplaced_position_then_presence() {
        let constraints = after("stole", "oxxxx");
        assert_eq!(
            constraints.violation(&word("squib")),
            Some(Violation::MisplacedAt { letter: b's', position: 0 })
        );
        assert_eq!(constraints.violation(&word("dumpy")), Some(Violation::MissingLetter(b's')));
        assert!(constraints.admits(&word("busks")));
    }

    #[test]
    fn confirmed_letter_never_excluded() {
        // Second s absent, first s correct
        let constraints = after("sassy", "gxxxx");
        assert!(!constraints.is_excluded(b's'));
        assert!(constraints.is_excluded(b'a'));
        assert!(constraints.admits(&word("shunt")));

        // A later gray s does not exclude it either
        let mut constraints = constraints;
        let guess = word("bliss");
        let feedback = Feedback::parse("xxxxx").unwrap();
        constraints.merge(&interpret(&guess, &feedback));
        assert!(!constraints.is_excluded(b's'));
        assert!(constraints.is_excluded(b'b'));
    }

    #[test]
    fn record_solved_fills_greens() {
        let constraints = after("crane", "gxgxg");
        assert_eq!(
            constraints.solved_slots(),
            &[Some(b'c'), None, Some(b'a'), None, Some(b'e')]
        );
        assert_eq!(constraints.solved_word(), "cae");
        assert_eq!(constraints.missing_count(), 2);
        assert_eq!(constraints.missing_position(), Some(3));
    }

    #[test]
    fn record_solved_infers_last_slot_from_misplaced() {
        let mut constraints = after("hazel", "ggggx");
        assert_eq!(constraints.missing_count(), 1);

        // "s" shows up misplaced while only slot 4 is open: it must go there
        let guess = word("sumps");
        let feedback = Feedback::parse("oxxxx").unwrap();
        constraints.record_solved(&guess, &feedback);
        assert_eq!(constraints.missing_count(), 0);
        assert_eq!(constraints.solved_word(), "hazes");
    }

    #[test]
    fn record_solved_ignores_misplaced_known_letter() {
        let mut constraints = after("hazel", "ggggx");
        // "a" is already solved, so its misplaced mark says nothing about slot 4
        let guess = word("amigo");
        let feedback = Feedback::parse("oxxxx").unwrap();
        constraints.record_solved(&guess, &feedback);
        assert_eq!(constraints.missing_count(), 1);
    }

    #[test]
    fn solved_slots_never_retracted() {
        let mut constraints = after("crane", "gxxxx");
        let guess = word("dolly");
        let feedback = Feedback::parse("xxxxx").unwrap();
        constraints.record_solved(&guess, &feedback);
        assert_eq!(constraints.solved_slots()[0], Some(b'c'));
    }
}
