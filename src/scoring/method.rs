//! Scoring methods
//!
//! Each method maps a candidate's two base scores and the current move number
//! to the single score the pool ranks by.

use std::fmt;

/// Number of moves the interpolating methods blend over
pub const MAX_MOVES: u32 = 6;

/// Popularity below this marks a word that must never be recommended
pub const POPULARITY_EPSILON: f64 = 0.001;

/// A pure scoring function over base scores and the move number
pub trait ScoringStrategy {
    fn score(&self, structural: f64, popularity: f64, move_number: u32) -> f64;
}

/// Letter-frequency score only
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralOnly;

impl ScoringStrategy for StructuralOnly {
    fn score(&self, structural: f64, _popularity: f64, _move_number: u32) -> f64 {
        structural
    }
}

/// Corpus popularity only
#[derive(Debug, Clone, Copy, Default)]
pub struct PopularityOnly;

impl ScoringStrategy for PopularityOnly {
    fn score(&self, _structural: f64, popularity: f64, _move_number: u32) -> f64 {
        popularity
    }
}

/// Weighted average shifting linearly from structure to popularity
///
/// Weights are `MAX_MOVES - move` (floored at 0) for structure and
/// `min(move, MAX_MOVES)` for popularity.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearInterpolation;

impl ScoringStrategy for LinearInterpolation {
    fn score(&self, structural: f64, popularity: f64, move_number: u32) -> f64 {
        if popularity < POPULARITY_EPSILON {
            return 0.0;
        }
        let (a, b) = move_weights(move_number);
        weighted_average(a, b, structural, popularity)
    }
}

/// Like `LinearInterpolation` with square-rooted weights, flattening the shift
#[derive(Debug, Clone, Copy, Default)]
pub struct SqrtInterpolation;

impl ScoringStrategy for SqrtInterpolation {
    fn score(&self, structural: f64, popularity: f64, move_number: u32) -> f64 {
        if popularity < POPULARITY_EPSILON {
            return 0.0;
        }
        let (a, b) = move_weights(move_number);
        weighted_average(a.sqrt(), b.sqrt(), structural, popularity)
    }
}

/// Structure halves every move, popularity stays: `s / 2^move + p`
#[derive(Debug, Clone, Copy, Default)]
pub struct Decay;

impl ScoringStrategy for Decay {
    fn score(&self, structural: f64, popularity: f64, move_number: u32) -> f64 {
        if popularity < POPULARITY_EPSILON {
            return 0.0;
        }
        structural / 2f64.powi(move_number as i32) + popularity
    }
}

fn move_weights(move_number: u32) -> (f64, f64) {
    (
        f64::from(MAX_MOVES.saturating_sub(move_number)),
        f64::from(move_number.min(MAX_MOVES)),
    )
}

// a + b is MAX_MOVES (or its square-root split) and never zero
fn weighted_average(a: f64, b: f64, structural: f64, popularity: f64) -> f64 {
    (a * structural + b * popularity) / (a + b)
}

/// Runtime-selectable scoring method with static dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScoringMethod {
    StructuralOnly,
    PopularityOnly,
    LinearInterpolation,
    SqrtInterpolation,
    #[default]
    Decay,
}

impl ScoringStrategy for ScoringMethod {
    fn score(&self, structural: f64, popularity: f64, move_number: u32) -> f64 {
        match self {
            Self::StructuralOnly => StructuralOnly.score(structural, popularity, move_number),
            Self::PopularityOnly => PopularityOnly.score(structural, popularity, move_number),
            Self::LinearInterpolation => {
                LinearInterpolation.score(structural, popularity, move_number)
            }
            Self::SqrtInterpolation => SqrtInterpolation.score(structural, popularity, move_number),
            Self::Decay => Decay.score(structural, popularity, move_number),
        }
    }
}

impl ScoringMethod {
    /// Every method, in result-log order
    pub const ALL: [Self; 5] = [
        Self::StructuralOnly,
        Self::PopularityOnly,
        Self::LinearInterpolation,
        Self::SqrtInterpolation,
        Self::Decay,
    ];

    /// Name written to result logs
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::StructuralOnly => "STRUCTURAL_ONLY",
            Self::PopularityOnly => "POPULARITY_ONLY",
            Self::LinearInterpolation => "LINEAR_INTERPOLATION",
            Self::SqrtInterpolation => "SQRT_INTERPOLATION",
            Self::Decay => "DECAY",
        }
    }

    /// Look up a method by short name or result-log name (case-insensitive)
    ///
    /// Supported short names: "structural", "popularity", "linear", "sqrt", "decay"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_ascii_lowercase();
        match lower.as_str() {
            "structural" | "structural_only" => Some(Self::StructuralOnly),
            "popularity" | "popularity_only" => Some(Self::PopularityOnly),
            "linear" | "linear_interpolation" => Some(Self::LinearInterpolation),
            "sqrt" | "sqrt_interpolation" => Some(Self::SqrtInterpolation),
            "decay" => Some(Self::Decay),
            _ => None,
        }
    }
}

impl fmt::Display for ScoringMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GUARDED: [ScoringMethod; 3] = [
        ScoringMethod::LinearInterpolation,
        ScoringMethod::SqrtInterpolation,
        ScoringMethod::Decay,
    ];

    #[test]
    fn single_metric_methods_ignore_move() {
        for m in 0..10 {
            assert_eq!(ScoringMethod::StructuralOnly.score(80.0, 90.0, m), 80.0);
            assert_eq!(ScoringMethod::PopularityOnly.score(80.0, 90.0, m), 90.0);
        }
    }

    #[test]
    fn epsilon_guard_zeroes_obscure_words() {
        for method in GUARDED {
            for m in 0..=12 {
                assert_eq!(method.score(99.0, 0.0005, m), 0.0, "{method} at move {m}");
            }
        }
    }

    #[test]
    fn single_metric_methods_skip_epsilon_guard() {
        assert_eq!(ScoringMethod::StructuralOnly.score(42.0, 0.0005, 3), 42.0);
        assert_eq!(ScoringMethod::PopularityOnly.score(42.0, 0.0005, 3), 0.0005);
    }

    #[test]
    fn epsilon_boundary_is_exclusive() {
        // Exactly the threshold is not "below" it
        assert!(ScoringMethod::Decay.score(10.0, POPULARITY_EPSILON, 0) > 0.0);
    }

    #[test]
    fn decay_halves_structure_each_move() {
        assert_eq!(ScoringMethod::Decay.score(80.0, 90.0, 0), 170.0);
        assert_eq!(ScoringMethod::Decay.score(80.0, 90.0, 1), 130.0);
        assert_eq!(ScoringMethod::Decay.score(80.0, 90.0, 3), 100.0);
    }

    #[test]
    fn linear_interpolation_endpoints() {
        let m = ScoringMethod::LinearInterpolation;
        assert_eq!(m.score(60.0, 30.0, 0), 60.0);
        assert_eq!(m.score(60.0, 30.0, 3), 45.0);
        assert_eq!(m.score(60.0, 30.0, 6), 30.0);
        // Past the last move popularity alone decides
        assert_eq!(m.score(60.0, 30.0, 9), 30.0);
    }

    #[test]
    fn sqrt_interpolation_weights() {
        let m = ScoringMethod::SqrtInterpolation;
        assert!((m.score(60.0, 30.0, 0) - 60.0).abs() < 1e-9);
        assert!((m.score(60.0, 30.0, 6) - 30.0).abs() < 1e-9);
        // Equal weights at the midpoint
        assert!((m.score(60.0, 30.0, 3) - 45.0).abs() < 1e-9);
        // Flatter curve: after one move sqrt leans further to popularity
        let linear = ScoringMethod::LinearInterpolation.score(60.0, 30.0, 1);
        assert!(m.score(60.0, 30.0, 1) < linear);
    }

    #[test]
    fn method_names_round_trip() {
        for method in ScoringMethod::ALL {
            assert_eq!(ScoringMethod::from_name(method.name()), Some(method));
        }
        assert_eq!(ScoringMethod::from_name("sqrt"), Some(ScoringMethod::SqrtInterpolation));
        assert_eq!(ScoringMethod::from_name(" Decay "), Some(ScoringMethod::Decay));
        assert_eq!(ScoringMethod::from_name("entropy"), None);
    }

    #[test]
    fn default_method_is_decay() {
        assert_eq!(ScoringMethod::default(), ScoringMethod::Decay);
    }
}
