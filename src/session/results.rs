//! Results log
//!
//! One line per finished session: `<word>, <moves or -1>, <METHOD>`.

use crate::scoring::ScoringMethod;
use anyhow::{Context, Result};
use log::warn;
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default log for human play
pub const PERFORMANCE_LOG: &str = "performance.txt";

/// Default log for a backtest under `method`
#[must_use]
pub fn backtest_log_name(method: ScoringMethod) -> String {
    format!("backtesting_{}.txt", method.name())
}

/// Error parsing a results line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultLineError {
    /// Not exactly three comma-separated fields
    FieldCount(usize),
    InvalidMoves(String),
    UnknownMethod(String),
}

impl fmt::Display for ResultLineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldCount(n) => write!(f, "expected 3 fields, found {n}"),
            Self::InvalidMoves(s) => write!(f, "invalid move count '{s}'"),
            Self::UnknownMethod(s) => write!(f, "unknown scoring method '{s}'"),
        }
    }
}

impl std::error::Error for ResultLineError {}

/// Outcome of one session as written to the log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLine {
    pub word: String,
    /// Moves taken, `-1` on failure
    pub moves: i32,
    pub method: ScoringMethod,
}

impl ResultLine {
    #[must_use]
    pub fn new(word: impl Into<String>, moves: i32, method: ScoringMethod) -> Self {
        Self {
            word: word.into(),
            moves,
            method,
        }
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        self.moves < 0
    }
}

impl fmt::Display for ResultLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.word, self.moves, self.method.name())
    }
}

impl FromStr for ResultLine {
    type Err = ResultLineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(',').map(str::trim).collect();
        let [word, moves, method] = fields[..] else {
            return Err(ResultLineError::FieldCount(fields.len()));
        };

        let moves = moves
            .parse::<i32>()
            .map_err(|_| ResultLineError::InvalidMoves(moves.to_string()))?;
        let method = ScoringMethod::from_name(method)
            .ok_or_else(|| ResultLineError::UnknownMethod(method.to_string()))?;

        Ok(Self::new(word, moves, method))
    }
}

/// Append-only results file
#[derive(Debug, Clone)]
pub struct ResultLog {
    path: PathBuf,
}

impl ResultLog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one line, creating the file if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or written.
    pub fn append(&self, line: &ResultLine) -> Result<()> {
        self.append_all(std::slice::from_ref(line))
    }

    /// Append several lines in order with a single open
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or written.
    pub fn append_all(&self, lines: &[ResultLine]) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("failed to open results log {}", self.path.display()))?;

        for line in lines {
            writeln!(file, "{line}")
                .with_context(|| format!("failed to write to {}", self.path.display()))?;
        }
        Ok(())
    }

    /// Read every well-formed line; malformed lines are skipped with a warning
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn read(&self) -> Result<Vec<ResultLine>> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read results log {}", self.path.display()))?;

        Ok(content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .filter_map(|(i, line)| match line.parse() {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    warn!("{}:{}: {e}", self.path.display(), i + 1);
                    None
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_format() {
        let line = ResultLine::new("crane", 3, ScoringMethod::Decay);
        assert_eq!(line.to_string(), "crane, 3, DECAY");

        let failed = ResultLine::new("jazzy", -1, ScoringMethod::SqrtInterpolation);
        assert_eq!(failed.to_string(), "jazzy, -1, SQRT_INTERPOLATION");
        assert!(failed.is_failure());
    }

    #[test]
    fn line_parse() {
        let line: ResultLine = "slate, 4, LINEAR_INTERPOLATION".parse().unwrap();
        assert_eq!(line, ResultLine::new("slate", 4, ScoringMethod::LinearInterpolation));
    }

    #[test]
    fn line_parse_errors() {
        assert_eq!(
            "slate, 4".parse::<ResultLine>(),
            Err(ResultLineError::FieldCount(2))
        );
        assert_eq!(
            "slate, four, DECAY".parse::<ResultLine>(),
            Err(ResultLineError::InvalidMoves("four".to_string()))
        );
        assert_eq!(
            "slate, 4, ENTROPY".parse::<ResultLine>(),
            Err(ResultLineError::UnknownMethod("ENTROPY".to_string()))
        );
    }

    #[test]
    fn backtest_log_names() {
        assert_eq!(backtest_log_name(ScoringMethod::Decay), "backtesting_DECAY.txt");
        assert_eq!(
            backtest_log_name(ScoringMethod::PopularityOnly),
            "backtesting_POPULARITY_ONLY.txt"
        );
    }

    #[test]
    fn log_appends_and_reads_back() {
        let path = std::env::temp_dir().join(format!("wordle_results_{}.txt", std::process::id()));
        let _ = fs::remove_file(&path);
        let log = ResultLog::new(&path);

        log.append(&ResultLine::new("crane", 2, ScoringMethod::Decay)).unwrap();
        log.append_all(&[
            ResultLine::new("slate", -1, ScoringMethod::Decay),
            ResultLine::new("irate", 5, ScoringMethod::StructuralOnly),
        ])
        .unwrap();
        fs::OpenOptions::new()
            .append(true)
            .open(&path)
            .and_then(|mut f| writeln!(f, "garbage line"))
            .unwrap();

        let lines = log.read().unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].word, "crane");
        assert_eq!(lines[1].moves, -1);
        assert_eq!(lines[2].method, ScoringMethod::StructuralOnly);
    }
}
