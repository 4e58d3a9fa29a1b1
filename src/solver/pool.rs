//! Live candidate pool for one session
//!
//! The pool borrows an immutable baseline of candidates and keeps its own
//! ranked working copy plus the constraint state, so any number of pools can
//! share one baseline.

use super::constraints::Constraints;
use super::interpreter::interpret;
use crate::core::{Feedback, WORD_LEN, Word};
use crate::scoring::{Candidate, RankedCandidate, ScoringMethod, sort_ranked};
use log::debug;
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;

/// Result of asking the pool for a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestion {
    /// A word not suggested before in this session
    Guess(Word),
    /// No candidate survives the constraints
    Exhausted,
    /// The heuristic would have repeated an already-tried word
    Repeat(Word),
}

impl Suggestion {
    /// The fresh word, if any
    #[must_use]
    pub const fn guess(&self) -> Option<&Word> {
        match self {
            Self::Guess(word) => Some(word),
            Self::Exhausted | Self::Repeat(_) => None,
        }
    }
}

/// Candidate pool and constraint engine
#[derive(Debug, Clone)]
pub struct CandidatePool<'a> {
    baseline: &'a [Candidate],
    method: ScoringMethod,
    move_number: u32,
    live: Vec<RankedCandidate<'a>>,
    constraints: Constraints,
    tried: FxHashSet<String>,
    last_suggestion: Option<Word>,
}

impl<'a> CandidatePool<'a> {
    /// Create a pool over `baseline`, ranked for move 0
    #[must_use]
    pub fn new(baseline: &'a [Candidate], method: ScoringMethod) -> Self {
        Self {
            baseline,
            method,
            move_number: 0,
            live: Self::initial_ranking(baseline, method),
            constraints: Constraints::new(),
            tried: FxHashSet::default(),
            last_suggestion: None,
        }
    }

    fn initial_ranking(baseline: &'a [Candidate], method: ScoringMethod) -> Vec<RankedCandidate<'a>> {
        let mut live: Vec<_> = baseline
            .iter()
            .map(|c| RankedCandidate::new(c, method, 0))
            .collect();
        sort_ranked(&mut live);
        live
    }

    /// Restore the full baseline and clear all session state
    pub fn reset_session(&mut self) {
        self.move_number = 0;
        self.live = Self::initial_ranking(self.baseline, self.method);
        self.constraints = Constraints::new();
        self.tried.clear();
        self.last_suggestion = None;
    }

    /// Rescore every live candidate for `move_number` and re-rank
    pub fn set_move_number(&mut self, move_number: u32) {
        self.move_number = move_number;
        for ranked in &mut self.live {
            ranked.rescore(self.method, move_number);
        }
        sort_ranked(&mut self.live);
    }

    #[must_use]
    pub const fn move_number(&self) -> u32 {
        self.move_number
    }

    #[must_use]
    pub const fn method(&self) -> ScoringMethod {
        self.method
    }

    #[must_use]
    pub const fn baseline(&self) -> &'a [Candidate] {
        self.baseline
    }

    /// Live candidates in rank order
    #[must_use]
    pub fn live(&self) -> &[RankedCandidate<'a>] {
        &self.live
    }

    #[must_use]
    pub const fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    #[must_use]
    pub const fn last_suggestion(&self) -> Option<&Word> {
        self.last_suggestion.as_ref()
    }

    /// Check whether `word` was already suggested this session
    #[must_use]
    pub fn was_tried(&self, word: &str) -> bool {
        self.tried.contains(word)
    }

    #[must_use]
    pub fn tried_count(&self) -> usize {
        self.tried.len()
    }

    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.live.len()
    }

    /// Solved letters assembled positionally, unknown slots left out
    #[must_use]
    pub fn solved_word(&self) -> String {
        self.constraints.solved_word()
    }

    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.constraints.missing_count()
    }

    /// Last unsolved position, if any
    #[must_use]
    pub fn missing_position(&self) -> Option<usize> {
        self.constraints.missing_position()
    }

    /// Drop every candidate that violates the constraints or was already
    /// tried, then suggest the best survivor
    ///
    /// The suggestion is removed from the pool and recorded as tried.
    pub fn suggest_next(&mut self) -> Suggestion {
        let mut suggestion: Option<&'a Word> = None;
        let constraints = &self.constraints;
        let tried = &self.tried;

        self.live.retain(|ranked| {
            let word = ranked.word();
            if tried.contains(word.text()) {
                debug!("Dropping {word}: already tried");
                return false;
            }
            if let Some(violation) = constraints.violation(word) {
                debug!("Dropping {word}: {violation}");
                return false;
            }
            if suggestion.is_none() {
                suggestion = Some(word);
                return false;
            }
            true
        });

        if let Some(top) = self.live.first() {
            debug!("Next best: {top}");
        }
        debug!(
            "Remaining words: {} || suggestion: {}",
            self.live.len(),
            suggestion.map_or("none", Word::text)
        );

        match suggestion {
            Some(word) => self.accept(word.clone()),
            None => {
                self.last_suggestion = None;
                Suggestion::Exhausted
            }
        }
    }

    /// Disambiguating suggestion when only `position` is unresolved
    ///
    /// Collects the letters consistent live candidates carry at `position`
    /// while matching the last suggestion everywhere else. One such letter completes the word
    /// directly. Otherwise the untried baseline word covering the most of those
    /// letters is chosen, earliest in baseline order on ties; a trial letter
    /// counts against a word that holds it away from `position` when the last
    /// suggestion also contains it. With no covering word this falls back to
    /// [`Self::suggest_next`]. Whatever is suggested leaves the pool and is
    /// recorded as tried.
    ///
    /// # Panics
    /// Panics if `position >= 5`.
    pub fn suggest_smart_move(&mut self, position: usize) -> Suggestion {
        assert!(position < WORD_LEN, "position {position} out of range");

        let Some(last) = self.last_suggestion.clone() else {
            return self.suggest_next();
        };

        let constraints = &self.constraints;
        let trial_letters: BTreeSet<u8> = self
            .live
            .iter()
            .map(RankedCandidate::word)
            .filter(|word| constraints.admits(word))
            .filter(|word| {
                (0..WORD_LEN)
                    .filter(|&i| i != position)
                    .all(|i| word.char_at(i) == last.char_at(i))
            })
            .map(|word| word.char_at(position))
            .collect();

        debug!(
            "Trial letters at {position}: {}",
            trial_letters.iter().map(|&c| char::from(c)).collect::<String>()
        );

        if trial_letters.len() == 1
            && let Some(&letter) = trial_letters.first()
        {
            return self.accept(last.with_letter_at(position, letter));
        }

        let mut best: Option<(&'a Candidate, i32)> = None;
        for candidate in self.baseline {
            let word = candidate.word();
            if self.tried.contains(word.text()) {
                continue;
            }
            let coverage = trial_coverage(word, &last, position, &trial_letters);
            if coverage > 0 && best.is_none_or(|(_, top)| coverage > top) {
                best = Some((candidate, coverage));
            }
        }

        match best {
            Some((candidate, coverage)) => {
                debug!("Smart probe {} covers {coverage} trial letters", candidate.word());
                self.accept(candidate.word().clone())
            }
            None => self.suggest_next(),
        }
    }

    fn accept(&mut self, word: Word) -> Suggestion {
        if !self.tried.insert(word.text().to_string()) {
            debug!("Would repeat {word}");
            return Suggestion::Repeat(word);
        }
        debug!("Suggesting {word} at move {}", self.move_number);
        self.live.retain(|ranked| ranked.word().text() != word.text());
        self.last_suggestion = Some(word.clone());
        Suggestion::Guess(word)
    }

    /// Record feedback for `word` into the constraint state
    ///
    /// The live pool is left as is; inconsistent candidates are dropped by the
    /// next [`Self::suggest_next`].
    pub fn apply_feedback(&mut self, word: &Word, feedback: &Feedback) {
        self.constraints.record_solved(word, feedback);
        self.constraints.merge(&interpret(word, feedback));
        debug!(
            "Feedback {feedback} on {word}: solved {:?}, {} live",
            self.constraints.solved_word(),
            self.live.len()
        );
    }
}

/// Number of trial letters `word` would test, less redundant ones
fn trial_coverage(word: &Word, last: &Word, position: usize, trial_letters: &BTreeSet<u8>) -> i32 {
    let mut coverage = 0;
    for &letter in trial_letters {
        if word.has_letter(letter) {
            coverage += 1;
            if last.has_letter(letter) && word.char_at(position) != letter {
                coverage -= 1;
            }
        }
    }
    coverage
}
