//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, percent};
use crate::commands::{AnalysisResult, BacktestRun, BenchmarkResult, SolveResult};
use crate::scoring::MAX_MOVES;
use crate::session::{BacktestStatistics, MethodSummary, SessionOutcome};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} ({})",
        result.target.text().to_uppercase().bright_yellow().bold(),
        result.report.method
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, turn) in result.report.turns.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}{}",
            i + 1,
            colored_guess(&turn.guess, &turn.feedback),
            turn.feedback.to_emoji(),
            if turn.smart { "  (probe)".bright_black().to_string() } else { String::new() }
        );
        if verbose {
            println!("  Candidates left: {}", turn.remaining_after);
        }
    }

    println!();
    match &result.report.outcome {
        SessionOutcome::Solved { word, moves } => {
            let line = format!("✅ Solved {} in {moves} moves", word.to_uppercase());
            if *moves <= MAX_MOVES {
                println!("{}", line.green().bold());
            } else {
                println!("{} {}", line.yellow().bold(), "(over the limit)".yellow());
            }
        }
        outcome => {
            println!("{}", format!("❌ Failed: {outcome}").red().bold());
            if !result.in_baseline {
                println!("   {} is not in the candidate list", result.target);
            }
        }
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SCORE ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 Rank {} of {} candidates",
        result.rank, result.total_candidates
    );
    println!(
        "   Structural:  [{}] {}",
        create_progress_bar(result.structural, 100.0, 30).green(),
        format!("{:.3}", result.structural).bright_yellow()
    );
    println!(
        "   Popularity:  [{}] {}",
        create_progress_bar(result.popularity, 100.0, 30).green(),
        format!("{:.3}", result.popularity).bright_yellow()
    );

    println!("\n📈 {}", "Score by move:".bright_cyan().bold());
    print!("   {:<22}", "");
    for m in 0..=MAX_MOVES {
        print!("{m:>9}");
    }
    println!();
    for (method, scores) in &result.scores {
        print!("   {:<22}", method.name());
        for score in scores {
            print!("{score:>9.2}");
        }
        println!();
    }
}

/// Print backtest statistics
pub fn print_backtest_statistics(run: &BacktestRun) {
    let stats = &run.stats;

    println!("\n{}", "═".repeat(70));
    println!(" Backtest Results: {} ", run.method.name().bright_cyan().bold());
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total);
    println!(
        "  Solved in {MAX_MOVES}:         {} {}",
        stats.solved_in_limit,
        format!("({})", percent(stats.solved_in_limit, stats.total)).green()
    );
    if stats.solved > stats.solved_in_limit {
        println!(
            "  Solved late:         {}",
            (stats.solved - stats.solved_in_limit).to_string().yellow()
        );
    }
    if stats.failed > 0 {
        println!(
            "  Failed:              {} {}",
            stats.failed,
            format!("({})", percent(stats.failed, stats.total)).red()
        );
    }
    println!(
        "  Average moves:       {}",
        format!("{:.3}", stats.average_moves).bright_yellow().bold()
    );
    println!("  Total time:          {:.2}s", stats.duration.as_secs_f64());

    print_distribution(stats);

    let failures = run.failures();
    if !failures.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for entry in failures.iter().take(10) {
            println!(
                "  {} ({})",
                entry.target.text().to_uppercase().yellow(),
                entry.report.outcome
            );
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    let stats = &result.run.stats;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Method:           {}", result.run.method);
    println!("   Seed:             {}", result.seed);
    println!("   Words tested:     {}", stats.total);
    println!(
        "   Average moves:    {}",
        format!("{:.2}", stats.average_moves).bright_yellow().bold()
    );
    println!(
        "   Success rate:     {}",
        format!("{:.1}%", stats.success_rate()).green()
    );
    println!(
        "   Worst case:       {}",
        stats.max_moves().to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", stats.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    print_distribution(stats);
}

fn print_distribution(stats: &BacktestStatistics) {
    println!("\n📈 {}", "Move Distribution".bright_cyan().bold());
    let max_count = stats.distribution.values().copied().max().unwrap_or(0);
    for moves in 1..=stats.max_moves().max(MAX_MOVES) {
        let count = stats.distribution.get(&moves).copied().unwrap_or(0);
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        let bar = if moves <= MAX_MOVES { bar.green() } else { bar.yellow() };
        println!(
            "  {moves:>2} moves: {bar} {count:5} ({:>6})",
            percent(count, stats.total)
        );
    }
}

/// Print per-method summaries of results logs
pub fn print_summary(summaries: &[MethodSummary]) {
    if summaries.is_empty() {
        println!("No results found.");
        return;
    }

    let header = format!(
        "{:<22} {:>9} {:>9} {:>9} {:>9} {:>9}",
        "METHOD", "sessions", "failed", "solved", "rate", "avg"
    );
    println!("\n{}", header.bold());
    for s in summaries {
        println!(
            "{:<22} {:>9} {:>9} {:>9} {:>9} {:>9.3}",
            s.method.name(),
            s.sessions,
            s.sessions - s.completed,
            s.successes,
            format!("{:.1}%", s.success_rate()),
            s.average_moves
        );
    }
}
