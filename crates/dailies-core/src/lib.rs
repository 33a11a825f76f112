//! Core data structures shared by the dailies puzzle generators and games.
//!
//! This crate provides the building blocks every puzzle depends on. Nothing in
//! here knows about a specific game's rules beyond grid shapes.
//!
//! # Overview
//!
//! 1. **Seeds and randomness**
//!    - [`seed`]: [`PuzzleSeed`], date-based and wall-clock seed derivation
//!    - [`rng`]: [`PuzzleRng`], the deterministic generator every puzzle draws from
//!
//! 2. **Grids**
//!    - [`position`]: [`Position`] (row, column) coordinates
//!    - [`digit_grid`]: [`DigitGrid`], a 9×9 number-place grid
//!    - [`letter_grid`]: [`CrosswordGrid`] and [`LetterGrid`], the 8×8 crossword grids
//!
//! 3. **Letters**
//!    - [`letter_set`]: [`LetterSet`], a bitset of lowercase ASCII letters
//!
//! # Examples
//!
//! ```
//! use dailies_core::{PuzzleRng, PuzzleSeed};
//!
//! let seed = PuzzleSeed::from_date("2024-01-01");
//! let mut a = PuzzleRng::new(seed);
//! let mut b = PuzzleRng::new(seed);
//!
//! // The same seed always yields the same sequence.
//! assert_eq!(a.next_int(1, 9), b.next_int(1, 9));
//! ```

pub mod digit_grid;
pub mod letter_grid;
pub mod letter_set;
pub mod position;
pub mod rng;
pub mod seed;

pub use self::{
    digit_grid::{DigitGrid, GridParseError},
    letter_grid::{CROSSWORD_SIZE, CrosswordCell, CrosswordGrid, LetterGrid},
    letter_set::LetterSet,
    position::Position,
    rng::PuzzleRng,
    seed::{PuzzleSeed, SeedParseError},
};
