//! Play sessions for the daily puzzles.
//!
//! Each game wraps a generated puzzle and tracks the player's progress
//! against it:
//!
//! - [`WordleGame`]: six guesses at a hidden five-letter word, scored by
//!   [`evaluate_guess`]
//! - [`SpellingBeeGame`]: finding words in a honeycomb, with points per word
//! - [`SudokuGame`]: filling a number-place grid around its givens
//! - [`CrosswordGame`]: filling the open cells of a crossword
//!
//! Games own their state and never touch the generators again after
//! construction.
//!
//! # Examples
//!
//! ```
//! use dailies_game::{GameStatus, LetterResult, WordleGame};
//!
//! let mut game = WordleGame::new("light")?;
//! let result = game.submit("night")?;
//! assert_eq!(result[0], LetterResult::Absent);
//! assert!(result[1..].iter().all(|r| r.is_correct()));
//!
//! game.submit("light")?;
//! assert_eq!(game.status(), GameStatus::Won);
//! # Ok::<(), dailies_game::GameError>(())
//! ```

pub use self::{
    crossword::{CrosswordCheck, CrosswordGame},
    error::GameError,
    spelling_bee::{Accepted, Rejection, SpellingBeeGame},
    sudoku::{CellState, SudokuCheck, SudokuGame},
    wordle::{GameStatus, Guess, KeyState, LetterResult, WordleGame, evaluate_guess},
};

mod crossword;
mod error;
mod spelling_bee;
mod sudoku;
mod wordle;
