//! Scrabble Rank - CLI
//!
//! Scores a word corpus against a playable dictionary and prints the
//! best-scoring groups as `<score>--<word1>-<word2>-...` lines.

use anyhow::Result;
use clap::{Parser, Subcommand};
use scrabble_rank::{
    commands::{RankConfig, run_rank, score_breakdown},
    output::{print_rank_result, print_score_breakdown},
    pipeline::{Dictionary, ExecutionMode},
    wordlists::{DICTIONARY, SAMPLE_CORPUS, generator, loader},
};

#[derive(Parser)]
#[command(
    name = "scrabble_rank",
    about = "Ranks a word corpus by Scrabble board score",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file of playable words (default: embedded list)
    #[arg(short = 'd', long, global = true)]
    dictionary: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank a candidate corpus and print the best score groups (default)
    Rank {
        /// Candidate corpus file (default: embedded sample text)
        #[arg(short = 'w', long)]
        words: Option<String>,

        /// Repeat the corpus this many times
        #[arg(short = 'r', long, default_value_t = 1)]
        repeat: usize,

        /// Append this many synthetic filler words
        #[arg(short = 'g', long, default_value_t = 0)]
        generate: usize,

        /// Seed for synthetic generation
        #[arg(long, default_value_t = generator::DEFAULT_SEED)]
        seed: u64,

        /// Execution mode: parallel or sequential
        #[arg(short = 'm', long, default_value = "parallel")]
        mode: String,

        /// Number of score groups to keep
        #[arg(short = 't', long, default_value_t = 3)]
        top: usize,

        /// Show run statistics
        #[arg(short, long)]
        verbose: bool,
    },

    /// Score a single word and show the breakdown
    Score {
        /// Word to score
        word: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(cli.dictionary.as_deref())?;

    // Default to ranking the embedded sample corpus if no command given
    let command = cli.command.unwrap_or(Commands::Rank {
        words: None,
        repeat: 1,
        generate: 0,
        seed: generator::DEFAULT_SEED,
        mode: String::from("parallel"),
        top: 3,
        verbose: false,
    });

    match command {
        Commands::Rank {
            words,
            repeat,
            generate,
            seed,
            mode,
            top,
            verbose,
        } => {
            let candidates = load_candidates(words.as_deref(), repeat, generate, seed)?;
            rank_command(&candidates, &dictionary, &mode, top, verbose);
            Ok(())
        }
        Commands::Score { word } => score_command(&word, &dictionary),
    }
}

/// Load the dictionary from a file, or fall back to the embedded list
fn load_dictionary(path: Option<&str>) -> Result<Dictionary> {
    match path {
        Some(path) => Ok(loader::dictionary_from_file(path)?),
        None => Ok(loader::build_dictionary(DICTIONARY.iter().copied())),
    }
}

/// Assemble the candidate corpus: file or embedded text, repeated, plus
/// synthetic filler
fn load_candidates(
    path: Option<&str>,
    repeat: usize,
    generate: usize,
    seed: u64,
) -> Result<Vec<String>> {
    let base = match path {
        Some(path) => loader::words_from_file(path)?,
        None => SAMPLE_CORPUS.iter().map(|s| (*s).to_string()).collect(),
    };

    let mut candidates = loader::repeat_words(&base, repeat);
    candidates.extend(generator::synthetic_words(generate, seed));
    Ok(candidates)
}

fn rank_command(candidates: &[String], dictionary: &Dictionary, mode: &str, top: usize, verbose: bool) {
    let mut config = RankConfig::new(ExecutionMode::from_name(mode));
    config.top = top;

    let result = run_rank(candidates, dictionary, &config);
    print_rank_result(&result, verbose);
}

fn score_command(word: &str, dictionary: &Dictionary) -> Result<()> {
    let breakdown = score_breakdown(word, Some(dictionary)).map_err(|e| anyhow::anyhow!(e))?;
    print_score_breakdown(&breakdown);
    Ok(())
}
