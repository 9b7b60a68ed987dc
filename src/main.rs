//! Hangman Solver - CLI
//!
//! Solves single words, test files and random samples with the letter-frequency solver.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use hangman_solver::{
    commands::{SimulationConfig, SolveConfig, run_simulation, run_test_cases, solve_word},
    core::Word,
    logging::init_logger,
    output::{
        print_case_result, print_case_summary, print_simulation_summary, print_solve_result,
        write_case_results, write_simulation_results,
    },
    solver::TieBreak,
    wordlists::{WORDS, load_dictionary, load_test_cases, words_from_slice},
};
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "hangman_solver",
    about = "Hangman solver guessing the most frequent letter among matching dictionary words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a word-per-line file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// How to choose between equally frequent letters
    #[arg(short, long, global = true, value_enum, default_value_t = TieBreakArg::FirstSeen)]
    tie_break: TieBreakArg,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum TieBreakArg {
    /// Letter met first while scanning candidates in dictionary order
    FirstSeen,
    /// Alphabetically smallest letter
    Alphabetical,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::FirstSeen => Self::FirstSeen,
            TieBreakArg::Alphabetical => Self::Alphabetical,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Initial board, e.g. "a**le" ('*' or '_' for unknown letters)
        #[arg(short, long)]
        pattern: Option<String>,

        /// Show candidate counts for every guess
        #[arg(long)]
        steps: bool,
    },

    /// Solve every `id;pattern;word` line of a test file, without the word in the pool
    TestFile {
        /// Test file path
        path: PathBuf,

        /// Save results as CSV
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Solve randomly sampled dictionary words from a blank board
    Simulate {
        /// Number of random words to solve
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// RNG seed for a reproducible sample
        #[arg(short, long)]
        seed: Option<u64>,

        /// Test file whose words are left out of the sample
        #[arg(short = 'x', long)]
        exclude_tests: Option<PathBuf>,

        /// Save results as CSV
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run the test file, then a simulation excluding its words, saving both reports
    Run {
        /// Test file path
        #[arg(long, default_value = "cases.txt")]
        tests: PathBuf,

        /// CSV report for the test file
        #[arg(long, default_value = "case_results.csv")]
        cases_csv: PathBuf,

        /// CSV report for the simulation
        #[arg(long, default_value = "random_results.csv")]
        random_csv: PathBuf,

        /// Number of random words to solve
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// RNG seed for a reproducible sample
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

/// Load the dictionary based on the -w flag
fn load_wordlist(wordlist: &str) -> Result<Vec<Word>> {
    match wordlist {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => load_dictionary(path),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let dictionary = load_wordlist(&cli.wordlist)?;
    let tie_break = TieBreak::from(cli.tie_break);

    // Default to the full run if no command given
    let command = cli.command.unwrap_or(Commands::Run {
        tests: PathBuf::from("cases.txt"),
        cases_csv: PathBuf::from("case_results.csv"),
        random_csv: PathBuf::from("random_results.csv"),
        count: 100,
        seed: None,
    });

    match command {
        Commands::Solve {
            word,
            pattern,
            steps,
        } => run_solve_command(&word, pattern, steps, tie_break, &dictionary),
        Commands::TestFile { path, output } => {
            run_test_file_command(&path, output.as_deref(), tie_break, &dictionary).map(|_| ())
        }
        Commands::Simulate {
            count,
            seed,
            exclude_tests,
            output,
        } => {
            let exclude = match exclude_tests {
                Some(path) => case_words(&path)?,
                None => FxHashSet::default(),
            };
            run_simulate_command(
                &SimulationConfig {
                    count,
                    seed,
                    exclude,
                    tie_break,
                },
                output.as_deref(),
                &dictionary,
            )
        }
        Commands::Run {
            tests,
            cases_csv,
            random_csv,
            count,
            seed,
        } => {
            println!("\n--- Test file (real word removed from the pool) ---");
            let exclude =
                run_test_file_command(&tests, Some(cases_csv.as_path()), tie_break, &dictionary)?;

            println!("\n--- Simulation on {count} random words ---");
            run_simulate_command(
                &SimulationConfig {
                    count,
                    seed,
                    exclude,
                    tie_break,
                },
                Some(random_csv.as_path()),
                &dictionary,
            )
        }
    }
}

fn run_solve_command(
    word: &str,
    pattern: Option<String>,
    steps: bool,
    tie_break: TieBreak,
    dictionary: &[Word],
) -> Result<()> {
    let config = SolveConfig {
        target: word.to_string(),
        pattern,
        tie_break,
    };
    let result = solve_word(config, dictionary)?;

    print_solve_result(&result, steps);
    Ok(())
}

/// Returns the set of test words so a following simulation can skip them
fn run_test_file_command(
    path: &Path,
    output: Option<&Path>,
    tie_break: TieBreak,
    dictionary: &[Word],
) -> Result<FxHashSet<String>> {
    let cases = load_test_cases(path)?;
    let results = run_test_cases(&cases, dictionary, tie_break);

    for result in &results {
        print_case_result(result);
    }
    print_case_summary(&results);

    if let Some(output) = output {
        write_case_results(output, &results)?;
        println!("Results saved to {}", output.display());
    }

    Ok(cases.into_iter().map(|c| c.word.text().to_string()).collect())
}

fn run_simulate_command(
    config: &SimulationConfig,
    output: Option<&Path>,
    dictionary: &[Word],
) -> Result<()> {
    let summary = run_simulation(dictionary, config)?;
    print_simulation_summary(&summary);

    if let Some(output) = output {
        write_simulation_results(output, &summary.records)?;
        println!("Results saved to {}", output.display());
    }
    Ok(())
}

fn case_words(path: &Path) -> Result<FxHashSet<String>> {
    Ok(load_test_cases(path)?
        .into_iter()
        .map(|c| c.word.text().to_string())
        .collect())
}
