//! Example generating a run of daily puzzles in parallel.
//!
//! This example shows how to:
//! - Derive daily seeds from a range of dates
//! - Generate puzzles for every date in parallel
//! - Spot repeated puzzles across the range
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzles
//! ```
//!
//! Pick the game, the first date, and the number of days:
//!
//! ```sh
//! cargo run --example generate_puzzles -- --game crossword --start 2024-01-01 --days 365
//! ```
//!
//! Print every puzzle instead of the summary only:
//!
//! ```sh
//! cargo run --example generate_puzzles -- --days 3 --verbose
//! ```

use std::{collections::HashMap, process};

use clap::{Parser, ValueEnum};
use dailies_core::{PuzzleSeed, seed};
use dailies_generator::{
    CrosswordGenerator, GenerationError, HoneycombGenerator, NumberGridGenerator, WordleGenerator,
};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Game {
    Sudoku,
    Crossword,
    SpellingBee,
    Wordle,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Game to generate.
    #[arg(long, value_name = "GAME", default_value = "sudoku")]
    game: Game,

    /// First date of the run (YYYY-MM-DD).
    #[arg(long, value_name = "DATE", default_value = "2024-01-01")]
    start: String,

    /// Number of consecutive days to generate.
    #[arg(long, value_name = "COUNT", default_value_t = 30)]
    days: usize,

    /// Print every generated puzzle.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let start = match seed::parse_date(&args.start) {
        Ok(date) => date,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };
    if args.days == 0 {
        eprintln!("--days must be at least 1.");
        process::exit(1);
    }

    let dates: Vec<String> = start
        .iter_days()
        .take(args.days)
        .map(seed::date_string)
        .collect();

    let results: Vec<(String, Result<String, GenerationError>)> = dates
        .into_par_iter()
        .map(|date| {
            let puzzle = render(args.game, PuzzleSeed::from_date(&date));
            (date, puzzle)
        })
        .collect();

    let mut seen: HashMap<&str, Vec<&str>> = HashMap::new();
    for (date, result) in &results {
        match result {
            Ok(puzzle) => {
                if args.verbose {
                    println!("{date}:");
                    println!("  {puzzle}");
                }
                seen.entry(puzzle.as_str()).or_default().push(date.as_str());
            }
            Err(err) => {
                eprintln!("{date}: {err}");
                process::exit(1);
            }
        }
    }

    println!("Game: {:?}", args.game);
    println!("Days: {}", results.len());
    println!("Distinct puzzles: {}", seen.len());
    let mut repeats: Vec<_> = seen.values().filter(|dates| dates.len() > 1).collect();
    repeats.sort();
    for dates in repeats {
        println!("  repeated on {}", dates.join(", "));
    }
}

fn render(game: Game, seed: PuzzleSeed) -> Result<String, GenerationError> {
    let rendered = match game {
        Game::Sudoku => NumberGridGenerator::new()
            .generate_with_seed(seed)?
            .puzzle
            .to_string(),
        Game::Crossword => {
            let crossword = CrosswordGenerator::new().generate_with_seed(seed)?;
            crossword.solution.to_string().replace('\n', " ")
        }
        Game::SpellingBee => {
            let honeycomb = HoneycombGenerator::new().generate_with_seed(seed);
            let outer: String = honeycomb.outer_letters.iter().collect();
            format!(
                "{} [{outer}] {} words",
                honeycomb.center_letter,
                honeycomb.valid_words.len()
            )
        }
        Game::Wordle => WordleGenerator::new().generate_with_seed(seed)?.word,
    };
    Ok(rendered)
}
