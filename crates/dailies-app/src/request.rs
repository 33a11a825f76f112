//! Turns parsed commands into JSON payloads.

use dailies_core::{PuzzleSeed, seed};
use dailies_game::evaluate_guess;
use dailies_generator::{
    CrosswordGenerator, HoneycombGenerator, NumberGridGenerator, WordleGenerator,
};
use serde::Serialize;
use serde_json::Value;

use crate::{
    AppError,
    cli::{CheckArgs, Command, PuzzleArgs},
    payload::{CheckPayload, Mode, Origin, PuzzlePayload},
};

/// Handles one command and returns its payload.
///
/// # Errors
///
/// Returns [`AppError`] if an argument is malformed or generation fails.
pub fn handle(command: &Command) -> Result<Value, AppError> {
    match command {
        Command::Sudoku(args) => {
            let (origin, seed) = resolve_seed(args)?;
            let puzzle = NumberGridGenerator::new().generate_with_seed(seed)?;
            to_payload(origin, puzzle)
        }
        Command::Crossword(args) => {
            let (origin, seed) = resolve_seed(args)?;
            let puzzle = CrosswordGenerator::new().generate_with_seed(seed)?;
            to_payload(origin, puzzle)
        }
        Command::SpellingBee(args) => {
            let (origin, seed) = resolve_seed(args)?;
            let puzzle = HoneycombGenerator::new().generate_with_seed(seed);
            to_payload(origin, puzzle)
        }
        Command::Wordle(args) => {
            let (origin, seed) = resolve_seed(args)?;
            let puzzle = WordleGenerator::new().generate_with_seed(seed)?;
            to_payload(origin, puzzle)
        }
        Command::Check(args) => check(args),
    }
}

/// Picks the seed for a puzzle command.
///
/// An explicit seed wins, then `--random`, then `--date`, then today's UTC
/// date. Dates are re-formatted before hashing, so `2024-1-5` and
/// `2024-01-05` name the same puzzle.
///
/// # Errors
///
/// Returns [`AppError::Seed`] if the seed or date does not parse.
pub fn resolve_seed(args: &PuzzleArgs) -> Result<(Origin, PuzzleSeed), AppError> {
    if let Some(seed) = &args.seed {
        let seed: PuzzleSeed = seed.parse()?;
        log::info!("using explicit seed {seed}");
        let origin = Origin::Unscheduled {
            mode: Mode::Seeded,
            seed: Some(seed.value()),
        };
        return Ok((origin, seed));
    }

    if args.random {
        let seed = PuzzleSeed::from_wall_clock();
        log::info!("using wall-clock seed {seed}");
        let origin = Origin::Unscheduled {
            mode: Mode::Random,
            seed: None,
        };
        return Ok((origin, seed));
    }

    let date = match &args.date {
        Some(date) => seed::date_string(seed::parse_date(date)?),
        None => seed::current_date_string(),
    };
    let seed = PuzzleSeed::from_date(&date);
    log::info!("using daily seed {seed} for {date}");
    Ok((Origin::Daily { date }, seed))
}

fn check(args: &CheckArgs) -> Result<Value, AppError> {
    let result = evaluate_guess(&args.guess, &args.word)?;
    log::info!("checked guess {:?}", args.guess);
    Ok(serde_json::to_value(CheckPayload { result })?)
}

fn to_payload<T>(origin: Origin, puzzle: T) -> Result<Value, AppError>
where
    T: Serialize,
{
    Ok(serde_json::to_value(PuzzlePayload { origin, puzzle })?)
}
