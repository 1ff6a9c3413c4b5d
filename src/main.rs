//! Scramble - CLI
//!
//! Anagram word game with TUI and line modes, plus utilities for checking
//! words, solving roots, and surveying the root list.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use scramble::{
    commands::{check_word, print_survey_statistics, run_simple, run_survey, solve_root},
    core::{Rules, Session},
    dictionary::WordSet,
    output::{print_check_report, print_solve_result},
    wordlists::{ROOT_WORDS, loader::words_from_slice},
};
use std::io;

#[derive(Parser)]
#[command(
    name = "scramble",
    about = "Anagram word game: build as many words as you can from a root word's letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root words: 'embedded' (default, 214 curated roots) or path to file
    #[arg(short = 'r', long, global = true, default_value = "embedded")]
    roots: String,

    /// Dictionary: 'embedded' (default, 8,829 words) or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed the root draw for reproducible rounds
    #[arg(short = 's', long, global = true)]
    seed: Option<u64>,

    /// Accepted words must be longer than this many letters
    #[arg(short = 'm', long, global = true, default_value_t = 3)]
    min_length: usize,

    /// Language tag the dictionary is consulted with
    #[arg(short = 'l', long, global = true, default_value = "en")]
    language: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line mode (plain stdin/stdout, no TUI)
    Simple,

    /// Judge one word against a root without playing a game
    Check {
        /// Root word for the round
        root: String,

        /// Candidate word to judge
        word: String,
    },

    /// List everything playable from a root
    Solve {
        /// Root word to scan
        root: String,

        /// List the words, not just the counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Score the whole root list against the dictionary
    Survey {
        /// Limit the number of roots surveyed
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

/// Load the dictionary based on the -w flag
///
/// - "embedded": the bundled English dictionary
/// - "<path>": load a custom word list, tagged with the -l language
fn load_dictionary(wordlist_mode: &str, language: &str) -> Result<WordSet> {
    use scramble::wordlists::loader::load_from_file;

    match wordlist_mode {
        "embedded" => Ok(WordSet::embedded()),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to read dictionary from '{path}'"))?;
            Ok(WordSet::from_words(language, words))
        }
    }
}

/// Load the root pool based on the -r flag
fn load_roots(roots_mode: &str) -> Result<Vec<String>> {
    use scramble::wordlists::loader::load_from_file;

    match roots_mode {
        "embedded" => Ok(words_from_slice(ROOT_WORDS)),
        path => {
            load_from_file(path).with_context(|| format!("failed to read root words from '{path}'"))
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let rules = Rules {
        min_length: cli.min_length,
        language: cli.language.clone(),
    };

    let lexicon = load_dictionary(&cli.wordlist, &cli.language)?;
    let roots = load_roots(&cli.roots)?;

    log::info!(
        "loaded {} dictionary words and {} roots",
        lexicon.len(),
        roots.len()
    );
    if lexicon.is_empty() {
        log::warn!("dictionary is empty; every submission will be rejected");
    }
    if !lexicon.language().eq_ignore_ascii_case(&cli.language) {
        log::warn!(
            "dictionary answers for '{}' but play asks for '{}'",
            lexicon.language(),
            cli.language
        );
    }

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(lexicon, roots, rules, cli.seed),
        Commands::Simple => run_simple_command(lexicon, roots, rules, cli.seed),
        Commands::Check { root, word } => run_check_command(&root, &word, &lexicon, &rules),
        Commands::Solve { root, verbose } => {
            run_solve_command(&root, verbose, &lexicon, &rules);
            Ok(())
        }
        Commands::Survey { limit } => {
            run_survey_command(&roots, &lexicon, &rules, limit);
            Ok(())
        }
    }
}

/// Build a session, seeding the root draw when requested
fn build_session(
    lexicon: WordSet,
    roots: Vec<String>,
    rules: Rules,
    seed: Option<u64>,
) -> Result<Session<WordSet>> {
    let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    Session::with_rng(lexicon, roots, rules, rng).context("cannot start a game")
}

fn run_play_command(
    lexicon: WordSet,
    roots: Vec<String>,
    rules: Rules,
    seed: Option<u64>,
) -> Result<()> {
    use scramble::interactive::{App, run_tui};

    let session = build_session(lexicon, roots, rules, seed)?;
    let app = App::new(session);
    run_tui(app)
}

fn run_simple_command(
    lexicon: WordSet,
    roots: Vec<String>,
    rules: Rules,
    seed: Option<u64>,
) -> Result<()> {
    let mut session = build_session(lexicon, roots, rules, seed)?;
    run_simple(&mut session, io::stdin().lock()).map_err(|e| anyhow::anyhow!(e))
}

fn run_check_command(root: &str, word: &str, lexicon: &WordSet, rules: &Rules) -> Result<()> {
    let report = check_word(root, word, lexicon, rules);
    print_check_report(&report);

    // Scripting: nonzero exit when the word does not play
    if !report.outcome.is_accepted() {
        std::process::exit(1);
    }
    Ok(())
}

fn run_solve_command(root: &str, verbose: bool, lexicon: &WordSet, rules: &Rules) {
    let result = solve_root(root, lexicon, rules);
    print_solve_result(&result, verbose);
}

fn run_survey_command(roots: &[String], lexicon: &WordSet, rules: &Rules, limit: Option<usize>) {
    let stats = run_survey(roots, lexicon, rules, limit);
    print_survey_statistics(&stats);
}
