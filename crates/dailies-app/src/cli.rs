//! Command-line arguments.

use clap::{Args, Parser, Subcommand};

use crate::version;

/// Generates the daily puzzles and prints them as JSON.
///
/// Without options, each puzzle command prints today's puzzle (UTC date).
#[derive(Debug, Parser)]
#[command(name = "dailies", author, version = version::build_version(), about)]
pub struct Cli {
    /// What to generate.
    #[command(subcommand)]
    pub command: Command,

    /// Pretty-print the JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,
}

/// A request for one payload.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Generate a 9×9 number-place puzzle.
    Sudoku(PuzzleArgs),
    /// Generate an 8×8 crossword.
    Crossword(PuzzleArgs),
    /// Generate a seven-letter honeycomb.
    SpellingBee(PuzzleArgs),
    /// Select the hidden five-letter word.
    Wordle(PuzzleArgs),
    /// Score a five-letter guess against a word.
    Check(CheckArgs),
}

/// Where a puzzle's seed comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct PuzzleArgs {
    /// Seed from the wall clock instead of the date.
    #[arg(long, conflicts_with_all = ["date", "seed"])]
    pub random: bool,

    /// Generate the daily puzzle of this date instead of today.
    #[arg(long, value_name = "YYYY-MM-DD", conflicts_with = "seed")]
    pub date: Option<String>,

    /// Generate from an explicit seed.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<String>,
}

/// Arguments of the `check` command.
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct CheckArgs {
    /// The five-letter guess.
    #[arg(long)]
    pub guess: String,

    /// The five-letter word to score against.
    #[arg(long)]
    pub word: String,
}
