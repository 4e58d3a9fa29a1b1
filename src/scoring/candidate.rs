//! Candidate words and their ranking
//!
//! A `Candidate` holds the immutable base scores fixed at load time. A
//! `RankedCandidate` borrows one and carries the score for the current move.

use super::method::{ScoringMethod, ScoringStrategy};
use crate::core::Word;
use std::cmp::Ordering;
use std::fmt;

/// One word with its load-time base scores
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    word: Word,
    structural: f64,
    popularity: f64,
}

impl Candidate {
    #[must_use]
    pub const fn new(word: Word, structural: f64, popularity: f64) -> Self {
        Self {
            word,
            structural,
            popularity,
        }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Letter-frequency score
    #[inline]
    #[must_use]
    pub const fn structural_score(&self) -> f64 {
        self.structural
    }

    /// Corpus popularity score
    #[inline]
    #[must_use]
    pub const fn popularity_score(&self) -> f64 {
        self.popularity
    }

    /// Score under `method` at `move_number`
    #[must_use]
    pub fn score(&self, method: ScoringMethod, move_number: u32) -> f64 {
        method.score(self.structural, self.popularity, move_number)
    }
}

/// A candidate plus its score for the current move
#[derive(Debug, Clone, Copy)]
pub struct RankedCandidate<'a> {
    candidate: &'a Candidate,
    score: f64,
}

impl<'a> RankedCandidate<'a> {
    #[must_use]
    pub fn new(candidate: &'a Candidate, method: ScoringMethod, move_number: u32) -> Self {
        Self {
            candidate,
            score: candidate.score(method, move_number),
        }
    }

    #[inline]
    #[must_use]
    pub const fn candidate(&self) -> &'a Candidate {
        self.candidate
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &'a Word {
        &self.candidate.word
    }

    /// Score for the current move
    #[inline]
    #[must_use]
    pub const fn score(&self) -> f64 {
        self.score
    }

    pub fn rescore(&mut self, method: ScoringMethod, move_number: u32) {
        self.score = self.candidate.score(method, move_number);
    }

    /// Ranking order: best first
    ///
    /// Current score descending, then popularity descending, then structural
    /// score descending. Full ties compare equal so a stable sort keeps the
    /// incoming order.
    #[must_use]
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| other.candidate.popularity.total_cmp(&self.candidate.popularity))
            .then_with(|| other.candidate.structural.total_cmp(&self.candidate.structural))
    }
}

/// Stable sort of a ranked slice into best-first order
pub fn sort_ranked(ranked: &mut [RankedCandidate<'_>]) {
    ranked.sort_by(RankedCandidate::rank_cmp);
}

impl fmt::Display for RankedCandidate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}->{:.3},{:.3},{:.3}]",
            self.candidate.word, self.score, self.candidate.popularity, self.candidate.structural
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(word: &str, structural: f64, popularity: f64) -> Candidate {
        Candidate::new(Word::new(word).unwrap(), structural, popularity)
    }

    fn ranked_words(pool: &[Candidate], method: ScoringMethod, move_number: u32) -> Vec<&str> {
        let mut ranked: Vec<_> = pool
            .iter()
            .map(|c| RankedCandidate::new(c, method, move_number))
            .collect();
        sort_ranked(&mut ranked);
        ranked.iter().map(|r| r.word().text()).collect()
    }

    #[test]
    fn ranks_by_current_score() {
        let pool = vec![
            candidate("trace", 70.0, 60.0),
            candidate("crane", 80.0, 90.0),
            candidate("arose", 60.0, 95.0),
        ];
        // Decay at move 0: crane 170, arose 155, trace 130
        assert_eq!(ranked_words(&pool, ScoringMethod::Decay, 0), ["crane", "arose", "trace"]);
        // Decay at move 3: arose 102.5, crane 100, trace 68.75
        assert_eq!(ranked_words(&pool, ScoringMethod::Decay, 3), ["arose", "crane", "trace"]);
    }

    #[test]
    fn ties_break_on_popularity_then_structure() {
        let pool = vec![
            candidate("aaaaa", 50.0, 10.0),
            candidate("bbbbb", 10.0, 50.0),
            candidate("ccccc", 20.0, 50.0),
        ];
        // Structural-only: no ties, plain descending
        assert_eq!(
            ranked_words(&pool, ScoringMethod::StructuralOnly, 0),
            ["aaaaa", "ccccc", "bbbbb"]
        );
        // Popularity-only: bbbbb and ccccc tie on score and popularity
        assert_eq!(
            ranked_words(&pool, ScoringMethod::PopularityOnly, 0),
            ["ccccc", "bbbbb", "aaaaa"]
        );
    }

    #[test]
    fn full_ties_keep_input_order() {
        let pool = vec![
            candidate("zebra", 10.0, 10.0),
            candidate("abbey", 10.0, 10.0),
        ];
        assert_eq!(ranked_words(&pool, ScoringMethod::Decay, 2), ["zebra", "abbey"]);
    }

    #[test]
    fn rescore_tracks_move_number() {
        let c = candidate("crane", 80.0, 90.0);
        let mut ranked = RankedCandidate::new(&c, ScoringMethod::Decay, 0);
        assert_eq!(ranked.score(), 170.0);
        ranked.rescore(ScoringMethod::Decay, 1);
        assert_eq!(ranked.score(), 130.0);
    }

    #[test]
    fn display_shows_scores() {
        let c = candidate("crane", 80.0, 90.0);
        let ranked = RankedCandidate::new(&c, ScoringMethod::Decay, 0);
        assert_eq!(ranked.to_string(), "[crane->170.000,90.000,80.000]");
    }
}
