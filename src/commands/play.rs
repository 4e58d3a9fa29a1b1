//! Interactive play
//!
//! The helper suggests words, a person types the feedback the game showed,
//! and every finished session is appended to the results log.

use crate::session::{Prompt, ResultLine, ResultLog, SessionOutcome, SessionReport, run_session};
use crate::solver::CandidatePool;
use anyhow::Result;
use colored::Colorize;
use log::info;
use std::io::{BufRead, Write};

/// Play sessions until the user declines another one
///
/// Returns the reports of every finished session. Closed input ends play
/// quietly between sessions and as an error mid-session.
///
/// # Errors
///
/// Returns an error on I/O failure or if the results log cannot be written.
pub fn run_play<R: BufRead, W: Write>(
    pool: &mut CandidatePool<'_>,
    mut reader: R,
    mut writer: W,
    log: Option<&ResultLog>,
) -> Result<Vec<SessionReport>> {
    writeln!(writer, "{}", "═".repeat(60).cyan())?;
    writeln!(
        writer,
        " {} (scoring: {})",
        "WORDLE HELPER".bright_cyan().bold(),
        pool.method()
    )?;
    writeln!(writer, "{}", "═".repeat(60).cyan())?;
    writeln!(writer, "Play the suggested word, then type what the game showed:")?;
    writeln!(writer, "  g = correct spot, o = wrong spot, x = not in the word")?;

    let mut reports = Vec::new();

    loop {
        let report = {
            let mut prompt = Prompt::new(&mut reader, &mut writer);
            run_session(pool, &mut prompt)?
        };
        print_outcome(&mut writer, &report)?;

        if let Some(log) = log {
            let line = ResultLine::new(outcome_word(&report), report.moves(), report.method);
            log.append(&line)?;
            info!("Recorded '{line}' in {}", log.path().display());
        }
        reports.push(report);

        write!(writer, "\nContinue another game? [Y/N]: ")?;
        writer.flush()?;
        let mut answer = String::new();
        if reader.read_line(&mut answer)? == 0 || !answer.trim().eq_ignore_ascii_case("y") {
            break;
        }
    }

    writeln!(writer, "\nThanks for playing!")?;
    Ok(reports)
}

/// Word to record for a session: the answer, or what was known of it
fn outcome_word(report: &SessionReport) -> String {
    match &report.outcome {
        SessionOutcome::Solved { word, .. } | SessionOutcome::Exhausted { partial: word } => {
            word.clone()
        }
        SessionOutcome::Repeated { word } => word.text().to_string(),
    }
}

fn print_outcome<W: Write>(writer: &mut W, report: &SessionReport) -> Result<()> {
    match &report.outcome {
        SessionOutcome::Solved { word, moves } => writeln!(
            writer,
            "\n{} {} in {moves} {}",
            "Solved:".green().bold(),
            word.to_uppercase().bright_green().bold(),
            if *moves == 1 { "move" } else { "moves" }
        )?,
        SessionOutcome::Exhausted { partial } => writeln!(
            writer,
            "\n{} no candidate fits that feedback (known letters: {})",
            "Out of words:".red().bold(),
            if partial.is_empty() { "-" } else { partial }
        )?,
        SessionOutcome::Repeated { word } => writeln!(
            writer,
            "\n{} the next suggestion would repeat {}",
            "Stuck:".red().bold(),
            word.text().to_uppercase()
        )?,
    }
    Ok(())
}
