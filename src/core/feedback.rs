//! Per-letter feedback for a guess
//!
//! Feedback is written as five characters over `x` (absent), `o` (present but
//! misplaced) and `g` (correct position), one per letter of the guess.

use super::word::{WORD_LEN, Word};
use std::fmt;
use std::str::FromStr;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Letter does not occur (beyond occurrences already accounted for)
    Absent,
    /// Letter occurs, but not at this position
    Misplaced,
    /// Letter is correct at this position
    Correct,
}

impl Mark {
    /// Parse a feedback character (case-insensitive)
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'x' | 'X' => Some(Self::Absent),
            'o' | 'O' => Some(Self::Misplaced),
            'g' | 'G' => Some(Self::Correct),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Absent => 'x',
            Self::Misplaced => 'o',
            Self::Correct => 'g',
        }
    }
}

/// Error type for malformed feedback strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    InvalidLength(usize),
    InvalidMark(char),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "feedback must be exactly {WORD_LEN} characters, got {len}")
            }
            Self::InvalidMark(c) => {
                write!(f, "invalid feedback character '{c}' (use x, o or g)")
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LEN]);

impl Feedback {
    /// All letters correct
    pub const PERFECT: Self = Self([Mark::Correct; WORD_LEN]);

    #[must_use]
    pub const fn new(marks: [Mark; WORD_LEN]) -> Self {
        Self(marks)
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LEN] {
        &self.0
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Feedback the game gives when `guess` is played against `answer`
    ///
    /// Duplicate letters follow the game's rules: exact matches are marked
    /// first and consume their letter, then misplaced marks are handed out
    /// left to right while unmatched copies of the letter remain.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::{Feedback, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let answer = Word::new("spree").unwrap();
    /// assert_eq!(Feedback::calculate(&guess, &answer).to_string(), "ggogx");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LEN];
        let mut answer_available = answer.char_counts();

        // Allow: Index needed to compare guess[i] with answer[i] and set marks[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            let letter = guess.char_at(i);
            if letter == answer.char_at(i) {
                marks[i] = Mark::Correct;
                if let Some(count) = answer_available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if marks[i] == Mark::Absent
                && let Some(count) = answer_available.get_mut(&guess.char_at(i))
                && *count > 0
            {
                marks[i] = Mark::Misplaced;
                *count -= 1;
            }
        }

        Self(marks)
    }

    /// Parse a feedback string such as `"gxoxx"`
    ///
    /// # Errors
    /// Returns `FeedbackError` if the string is not exactly five characters
    /// from `x`, `o`, `g` (either case).
    pub fn parse(s: &str) -> Result<Self, FeedbackError> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LEN {
            return Err(FeedbackError::InvalidLength(chars.len()));
        }

        let mut marks = [Mark::Absent; WORD_LEN];
        for (slot, &c) in marks.iter_mut().zip(&chars) {
            *slot = Mark::from_char(c).ok_or(FeedbackError::InvalidMark(c))?;
        }
        Ok(Self(marks))
    }

    /// Coloured-square rendering, e.g. "🟩⬜🟨⬜⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|m| match m {
                Mark::Correct => '🟩',
                Mark::Misplaced => '🟨',
                Mark::Absent => '⬜',
            })
            .collect()
    }
}

impl FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.as_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc(guess: &str, answer: &str) -> String {
        let guess = Word::new(guess).unwrap();
        let answer = Word::new(answer).unwrap();
        Feedback::calculate(&guess, &answer).to_string()
    }

    #[test]
    fn feedback_all_absent() {
        assert_eq!(calc("abcde", "fghij"), "xxxxx");
    }

    #[test]
    fn feedback_perfect() {
        for word in ["crane", "speed", "aaaaa"] {
            let w = Word::new(word).unwrap();
            assert!(Feedback::calculate(&w, &w).is_perfect());
        }
    }

    #[test]
    fn feedback_duplicate_letter_green_and_yellow() {
        // Second e is exact, first e is covered by the spare e at position 4
        assert_eq!(calc("speed", "spree"), "ggogx");
    }

    #[test]
    fn feedback_duplicate_letter_exhausted() {
        // ERASE has two e's; both e's in SPEED are misplaced
        assert_eq!(calc("speed", "erase"), "oxoox");
        // Only one o left over after the exact match in FLOOR
        assert_eq!(calc("robot", "floor"), "ooxgx");
        // Single e in answer is consumed by the exact match
        assert_eq!(calc("geese", "those"), "xxxgg");
    }

    #[test]
    fn feedback_parse_valid() {
        let fb = Feedback::parse("GxO gx".replace(' ', "").as_str()).unwrap();
        assert_eq!(fb.marks()[0], Mark::Correct);
        assert_eq!(fb.marks()[1], Mark::Absent);
        assert_eq!(fb.marks()[2], Mark::Misplaced);
        assert_eq!(fb.to_string(), "gxogx");
    }

    #[test]
    fn feedback_parse_invalid() {
        assert_eq!(Feedback::parse("gxo"), Err(FeedbackError::InvalidLength(3)));
        assert_eq!(
            Feedback::parse("gxoxxg"),
            Err(FeedbackError::InvalidLength(6))
        );
        assert_eq!(Feedback::parse("gxyxx"), Err(FeedbackError::InvalidMark('y')));
        assert_eq!(Feedback::parse(""), Err(FeedbackError::InvalidLength(0)));
    }

    #[test]
    fn feedback_from_str_trait() {
        let fb: Feedback = "ggggg".parse().unwrap();
        assert_eq!(fb, Feedback::PERFECT);
    }

    #[test]
    fn feedback_emoji() {
        let fb = Feedback::parse("gxoxx").unwrap();
        assert_eq!(fb.to_emoji(), "🟩⬜🟨⬜⬜");
    }
}
