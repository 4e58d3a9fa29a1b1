//! Wordle Helper - CLI
//!
//! Suggests Wordle guesses from letter-frequency and word-popularity scores,
//! and backtests the scoring methods against a dictionary.

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_helper::{
    commands::{
        analyze_word, run_backtest, run_benchmark, run_play, solve_word, summarize_logs,
    },
    logging::init_logger,
    output::{
        print_analysis_result, print_backtest_statistics, print_benchmark_result,
        print_solve_result, print_summary,
    },
    scoring::ScoringMethod,
    session::{PERFORMANCE_LOG, ResultLog, backtest_log_name},
    solver::CandidatePool,
    wordlists::{Corpus, DEFAULT_FREQUENCIES, DEFAULT_WORD_LIST, load_corpus},
};

#[derive(Parser)]
#[command(
    name = "wordle_helper",
    about = "Wordle helper ranking guesses by letter frequency and word popularity",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Scoring method: decay (default), structural, popularity, linear, sqrt
    #[arg(short, long, global = true, default_value = "decay")]
    method: String,

    /// Dictionary file, one five-letter word per line
    #[arg(short, long, global = true, default_value = DEFAULT_WORD_LIST)]
    words: PathBuf,

    /// Word frequency CSV with a `word,count` header
    #[arg(short, long, global = true, default_value = DEFAULT_FREQUENCIES)]
    freq: PathBuf,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive helper (default): enter the game's feedback after each suggestion
    Play {
        /// Results log to append to
        #[arg(short, long, default_value = PERFORMANCE_LOG)]
        output: PathBuf,
    },

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show how many candidates remain after each turn
        #[arg(short, long)]
        counts: bool,
    },

    /// Show a word's base scores and its score under every method
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Play every dictionary word against the oracle and log the results
    Backtest {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,

        /// Run once per scoring method instead of only --method
        #[arg(short, long)]
        all_methods: bool,

        /// Results log (default: backtesting_<METHOD>.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Backtest a random sample of words without logging
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for the sample
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Aggregate results logs per scoring method
    Summary {
        /// Results logs to read
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let method = ScoringMethod::from_name(&cli.method)
        .ok_or_else(|| anyhow!("unknown scoring method '{}'", cli.method))?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        output: PathBuf::from(PERFORMANCE_LOG),
    });

    match command {
        // Summaries only read logs
        Commands::Summary { files } => {
            print_summary(&summarize_logs(&files)?);
            Ok(())
        }
        command => {
            let corpus = load_corpus(&cli.words, &cli.freq, method)?;
            run_with_corpus(command, &corpus, method)
        }
    }
}

fn run_with_corpus(command: Commands, corpus: &Corpus, method: ScoringMethod) -> Result<()> {
    match command {
        Commands::Play { output } => run_play_command(corpus, method, output),
        Commands::Solve { word, counts } => {
            let mut pool = CandidatePool::new(corpus.candidates(), method);
            let result = solve_word(&mut pool, &word)?;
            print_solve_result(&result, counts);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(corpus.candidates(), &word)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Backtest {
            limit,
            all_methods,
            output,
        } => run_backtest_command(corpus, method, limit, all_methods, output),
        Commands::Benchmark { count, seed } => {
            println!("Running benchmark on {count} random words...");
            let targets = corpus.targets();
            let result = run_benchmark(corpus.candidates(), &targets, method, count, seed)?;
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::Summary { files } => {
            print_summary(&summarize_logs(&files)?);
            Ok(())
        }
    }
}

fn run_play_command(corpus: &Corpus, method: ScoringMethod, output: PathBuf) -> Result<()> {
    let mut pool = CandidatePool::new(corpus.candidates(), method);
    let log = ResultLog::new(output);
    let stdin = io::stdin();
    run_play(&mut pool, stdin.lock(), io::stdout(), Some(&log))?;
    Ok(())
}

fn run_backtest_command(
    corpus: &Corpus,
    method: ScoringMethod,
    limit: Option<usize>,
    all_methods: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let mut targets = corpus.targets();
    if let Some(limit) = limit {
        targets.truncate(limit);
    }

    let methods: Vec<ScoringMethod> = if all_methods {
        ScoringMethod::ALL.to_vec()
    } else {
        vec![method]
    };

    println!("\n{}", "═".repeat(70));
    println!(" Wordle Helper Backtest ");
    println!("{}", "═".repeat(70));
    println!("\nTesting {} words", targets.len());

    for method in methods {
        let run = run_backtest(corpus.candidates(), &targets, method, true)?;
        let path = output
            .clone()
            .unwrap_or_else(|| PathBuf::from(backtest_log_name(method)));
        run.write_log(&ResultLog::new(path))?;
        print_backtest_statistics(&run);
    }
    Ok(())
}
