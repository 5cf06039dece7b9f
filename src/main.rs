//! Wordle Advisor - CLI
//!
//! Suggests guesses ranked by entropy or expected partition size and prunes
//! the answer list from the feedback you report.

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use wordle_advisor::{
    commands::{analyze_word, run_experiment, run_play, select_targets, solve_word, suggest_next},
    core::{DEFAULT_WORD_LENGTH, MAX_WORD_LENGTH, Word},
    output::{
        print_analysis_result, print_experiment_statistics, print_solve_result, print_suggestion,
    },
    solver::{DEFAULT_OPENER, Heuristic, Mode, SelectionPolicy, Solver, SolverConfig},
    wordlists::{
        WordLists,
        loader::{load_flat, load_path},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_advisor",
    about = "Wordle guess advisor using information-theoretic scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    solver: SolverArgs,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Args)]
struct SolverArgs {
    /// Letters per word
    #[arg(short = 'l', long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Suggestions shown per turn
    #[arg(short = 'k', long, global = true, default_value_t = 5)]
    top_k: usize,

    /// Scoring heuristic: entropy (default) or expected-size
    #[arg(short = 'H', long, global = true, default_value = "entropy")]
    heuristic: Heuristic,

    /// Hard mode: guesses must respect all feedback so far
    #[arg(long, global = true)]
    hard: bool,

    /// Score only candidates once fewer than this many remain
    #[arg(long, global = true, default_value_t = SelectionPolicy::default().closing_threshold)]
    closing_threshold: usize,

    /// Candidate count above which the almost-solved probe applies
    #[arg(long, global = true, default_value_t = SelectionPolicy::default().endgame_floor)]
    endgame_floor: usize,

    /// Unconfirmed positions allowed in the almost-solved state
    #[arg(long, global = true, default_value_t = SelectionPolicy::default().hit_margin)]
    hit_margin: usize,

    /// Fixed first guess
    #[arg(long, global = true, default_value = DEFAULT_OPENER)]
    opener: String,

    /// Rank the first turn instead of using the opener
    #[arg(long, global = true)]
    no_opener: bool,

    /// Only words without repeated letters; feedback and scoring use '2a1b' counts
    #[arg(long, global = true)]
    unique_letters: bool,

    /// Scoring threads (default: all cores)
    #[arg(short = 'j', long, global = true)]
    threads: Option<usize>,

    /// Turn limit for simulated games
    #[arg(long, global = true, default_value_t = 32)]
    max_turns: usize,

    /// Wordlist: 'embedded' (default), 'answers' (answers only), or path to a file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Answer list file; replaces the answers taken from --wordlist
    #[arg(long, global = true)]
    answers: Option<PathBuf>,

    /// Allowed-guess list file; replaces the allowed list taken from --wordlist
    #[arg(long, global = true)]
    allowed: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive advisor (default)
    Play,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and metrics per turn
        #[arg(long)]
        details: bool,
    },

    /// Suggest the next guesses after the turns played so far
    Suggest {
        /// Turns as guess:feedback, e.g. tares:--y-g
        turns: Vec<String>,
    },

    /// Analyze a single guess against the answer list
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Run the solver against many answers and report statistics
    Experiment {
        /// Only the first N answers
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// N answers drawn at random instead
        #[arg(long, conflicts_with = "limit")]
        sample: Option<usize>,

        /// Seed for --sample
        #[arg(long)]
        seed: Option<u64>,

        /// Write per-target records as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },
}

impl SolverArgs {
    fn config(&self) -> Result<SolverConfig> {
        if self.length == 0 || self.length > MAX_WORD_LENGTH {
            bail!("--length must be between 1 and {MAX_WORD_LENGTH}");
        }

        Ok(SolverConfig {
            word_length: self.length,
            top_k: self.top_k,
            heuristic: self.heuristic,
            mode: if self.hard { Mode::Hard } else { Mode::Easy },
            policy: SelectionPolicy::new(self.closing_threshold, self.endgame_floor, self.hit_margin),
            opener: (!self.no_opener).then(|| self.opener.clone()),
            unique_letters: self.unique_letters,
            threads: self.threads,
            max_turns: self.max_turns,
        })
    }

    /// Resolve --wordlist, --answers and --allowed into one normalized pair
    fn word_lists(&self) -> Result<WordLists> {
        let mut lists = match self.wordlist.as_str() {
            "embedded" | "all" => WordLists::embedded(),
            "answers" => WordLists::embedded_answers_only(),
            path => load_path(path, self.length)
                .with_context(|| format!("failed to load wordlist '{path}'"))?,
        };

        if let Some(path) = &self.answers {
            lists.answers = load_list(path, self.length)?;
        }
        if let Some(path) = &self.allowed {
            lists.allowed = load_list(path, self.length)?;
        }

        let mut lists = WordLists::new(lists.answers, lists.allowed);
        if self.unique_letters {
            lists.retain_unique_letters();
        }
        Ok(lists)
    }
}

fn load_list(path: &Path, length: usize) -> Result<Vec<Word>> {
    load_flat(path, length).with_context(|| format!("failed to load {}", path.display()))
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.solver.config()?;
    let lists = cli.solver.word_lists()?;
    let solver = Solver::new(config, &lists.answers, &lists.allowed)
        .context("failed to set up the solver")?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play(&solver, io::stdin().lock(), &mut io::stdout()),
        Commands::Solve { word, details } => {
            let result = solve_word(&solver, &word)?;
            print_solve_result(&result, details);
            Ok(())
        }
        Commands::Suggest { turns } => {
            let result = suggest_next(&solver, &turns)?;
            print_suggestion(&result);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&solver, &word)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Experiment {
            limit,
            sample,
            seed,
            output,
            quiet,
        } => {
            let targets = select_targets(solver.answers(), limit, sample, seed);
            println!("🎯 Testing {} words...", targets.len());

            let result = run_experiment(&solver, &targets, !quiet)?;
            print_experiment_statistics(&result.stats);

            if let Some(path) = output {
                result.write_report(&path)?;
                println!("\nReport written to {}", path.display());
            }
            Ok(())
        }
    }
}
