//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark, Word};
use colored::{ColoredString, Colorize};

/// Render a played word with each letter colored by its mark
#[must_use]
pub fn colored_guess(word: &Word, feedback: &Feedback) -> String {
    word.chars()
        .iter()
        .zip(feedback.marks())
        .map(|(&c, mark)| colored_letter(char::from(c).to_ascii_uppercase(), *mark).to_string())
        .collect()
}

fn colored_letter(letter: char, mark: Mark) -> ColoredString {
    let cell = format!(" {letter} ");
    match mark {
        Mark::Correct => cell.black().on_green(),
        Mark::Misplaced => cell.black().on_yellow(),
        Mark::Absent => cell.white().on_bright_black(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // clamped to [0, width] below
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Percentage with one decimal, or a dash when there is nothing to divide by
#[must_use]
pub fn percent(part: usize, whole: usize) -> String {
    if whole == 0 {
        "-".to_string()
    } else {
        format!("{:.1}%", part as f64 / whole as f64 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn percent_formatting() {
        assert_eq!(percent(1, 4), "25.0%");
        assert_eq!(percent(0, 0), "-");
    }

    #[test]
    fn colored_guess_keeps_letters() {
        colored::control::set_override(false);
        let word = Word::new("crane").unwrap();
        let feedback = Feedback::parse("gxoxx").unwrap();
        assert_eq!(colored_guess(&word, &feedback), " C  R  A  N  E ");
    }
}
