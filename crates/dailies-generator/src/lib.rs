//! Deterministic puzzle generators.
//!
//! Every generator turns a [`PuzzleSeed`] into a self-contained puzzle. The
//! same seed always produces the same puzzle, which is what makes daily
//! puzzles possible: the seed is derived from the date, so every player sees
//! the same puzzle on the same day.
//!
//! # Generators
//!
//! - [`NumberGridGenerator`]: a 9×9 number-place puzzle built by randomized
//!   backtracking, then thinned out by removing [`REMOVED_CELLS`] cells
//! - [`CrosswordGenerator`]: three words from a fixed bank stamped into an
//!   8×8 grid at fixed anchors
//! - [`HoneycombGenerator`]: one of ten fixed seven-letter sets, with the
//!   words and pangrams it admits
//! - [`WordleGenerator`]: the hidden five-letter word
//!
//! Each generator creates its own [`PuzzleRng`](dailies_core::PuzzleRng) per
//! call and only reads the static word banks in [`word_bank`], so generators
//! can be shared freely across threads.
//!
//! # Examples
//!
//! ```
//! use dailies_core::PuzzleSeed;
//! use dailies_generator::NumberGridGenerator;
//!
//! let generator = NumberGridGenerator::new();
//! let seed = PuzzleSeed::from_date("2024-01-01");
//! let puzzle = generator.generate_with_seed(seed)?;
//!
//! assert!(puzzle.solution.is_valid_solution());
//! assert_eq!(puzzle.puzzle.count_empty(), 40);
//! # Ok::<(), dailies_generator::GenerationError>(())
//! ```
//!
//! [`PuzzleSeed`]: dailies_core::PuzzleSeed

pub use self::{
    crossword::{
        CROSSWORD_BANK, Clue, Clues, CrosswordEntry, CrosswordGenerator, Direction,
        GeneratedCrossword,
    },
    error::GenerationError,
    honeycomb::{GeneratedHoneycomb, HoneycombGenerator, HoneycombLetters},
    number_grid::{Difficulty, GeneratedNumberGrid, NumberGridGenerator, REMOVED_CELLS},
    wordle::{DailyWord, MAX_GUESSES, WORD_LENGTH, WordleGenerator},
};

mod crossword;
mod error;
mod honeycomb;
mod number_grid;
pub mod word_bank;
mod wordle;
