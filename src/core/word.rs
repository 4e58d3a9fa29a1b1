//! Candidate word representation
//!
//! A `Word` is a validated five-letter lowercase word.

use rustc_hash::FxHashMap;
use std::fmt;

/// Number of letters in every word the solver handles
pub const WORD_LEN: usize = 5;

/// A validated 5-letter word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "word must be exactly {WORD_LEN} letters, got {len}")
            }
            Self::NonAscii => write!(f, "word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "word contains non-alphabetic characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string, normalising to lowercase
    ///
    /// # Errors
    /// Returns `WordError` if the text is not exactly five ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("cranes").is_err());
    /// assert!(Word::new("cr4ne").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let chars: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self::from_letters(chars))
    }

    /// Build a word from letters already known to be lowercase ASCII
    fn from_letters(chars: [u8; WORD_LEN]) -> Self {
        Self {
            text: chars.iter().map(|&c| char::from(c)).collect(),
            chars,
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }

    /// Copy of this word with one position replaced
    ///
    /// `letter` must be a lowercase ASCII letter.
    ///
    /// # Panics
    /// Panics if position >= 5
    #[must_use]
    pub fn with_letter_at(&self, position: usize, letter: u8) -> Self {
        debug_assert!(letter.is_ascii_lowercase());
        let mut chars = self.chars;
        chars[position] = letter;
        Self::from_letters(chars)
    }

    /// Count of each letter in the word
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
