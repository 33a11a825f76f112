use std::fmt::{self, Display};

use dailies_core::{DigitGrid, Position, PuzzleRng, PuzzleSeed};
use serde::Serialize;

use crate::GenerationError;

/// Number of cells removed from the solution to form the puzzle.
pub const REMOVED_CELLS: usize = 40;

const DIGITS: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Difficulty label attached to generated number-place puzzles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// [`REMOVED_CELLS`] cells removed at random.
    #[default]
    Medium,
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Medium => f.write_str("medium"),
        }
    }
}

/// A generated number-place puzzle with its solution and seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedNumberGrid {
    /// The puzzle presented to the player; removed cells are 0.
    pub puzzle: DigitGrid,
    /// The completed grid the puzzle was cut from.
    pub solution: DigitGrid,
    /// The difficulty label of the puzzle.
    pub difficulty: Difficulty,
    /// The seed that produced this puzzle.
    #[serde(skip)]
    pub seed: PuzzleSeed,
}

/// Generates number-place puzzles.
///
/// Generation runs in two steps:
///
/// 1. **Fill**: a randomized backtracking search completes an empty grid. For
///    each empty cell, in row-major order, the digits 1-9 are shuffled and tried
///    in turn. A placement that leads to a dead end is undone and the next digit
///    is tried.
/// 2. **Removal**: random cells are emptied until [`REMOVED_CELLS`] of them are
///    gone. Picking an already-empty cell just costs another draw.
///
/// The removal step does not check that the puzzle has a unique solution;
/// several completions may satisfy the remaining givens.
///
/// # Examples
///
/// ```
/// use dailies_core::PuzzleSeed;
/// use dailies_generator::NumberGridGenerator;
///
/// let generator = NumberGridGenerator::new();
/// let a = generator.generate_with_seed(PuzzleSeed::new(7))?;
/// let b = generator.generate_with_seed(PuzzleSeed::new(7))?;
/// assert_eq!(a, b);
/// # Ok::<(), dailies_generator::GenerationError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberGridGenerator;

impl NumberGridGenerator {
    /// Creates a new generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generates a puzzle seeded from the wall clock.
    ///
    /// # Errors
    ///
    /// See [`NumberGridGenerator::generate_with_seed`].
    pub fn generate(&self) -> Result<GeneratedNumberGrid, GenerationError> {
        self.generate_with_seed(PuzzleSeed::from_wall_clock())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Exhausted`] if the fill cannot complete the
    /// grid. This cannot happen unless the placement check is broken.
    pub fn generate_with_seed(
        &self,
        seed: PuzzleSeed,
    ) -> Result<GeneratedNumberGrid, GenerationError> {
        let mut rng = PuzzleRng::new(seed);

        let mut solution = DigitGrid::new();
        let mut backtracks = 0;
        if !fill(&mut solution, &mut rng, &mut backtracks) {
            return Err(GenerationError::Exhausted { seed });
        }
        debug_assert!(solution.is_valid_solution());

        let (puzzle, draws) = remove_cells(&solution, &mut rng, REMOVED_CELLS);
        log::debug!(
            "number grid seed={seed}: fill backtracked {backtracks} times, removal took {draws} draws"
        );

        Ok(GeneratedNumberGrid {
            puzzle,
            solution,
            difficulty: Difficulty::Medium,
            seed,
        })
    }
}

/// Completes `grid` by randomized backtracking.
///
/// Returns `false` if no digit fits the first empty cell under the current
/// placements, leaving `grid` as it was on entry.
fn fill(grid: &mut DigitGrid, rng: &mut PuzzleRng, backtracks: &mut usize) -> bool {
    let Some(pos) = grid.first_empty() else {
        return true;
    };

    for digit in rng.shuffle(&DIGITS) {
        if !grid.can_place(pos, digit) {
            continue;
        }
        grid.set(pos, digit);
        if fill(grid, rng, backtracks) {
            return true;
        }
        grid.clear(pos);
        *backtracks += 1;
    }
    false
}

/// Copies `solution` and empties `count` distinct random cells.
///
/// Returns the puzzle and the number of (row, column) draws it took.
fn remove_cells(solution: &DigitGrid, rng: &mut PuzzleRng, count: usize) -> (DigitGrid, usize) {
    assert!(count <= 81, "cannot remove {count} cells from a 9x9 grid");

    let mut puzzle = solution.clone();
    let mut removed = 0;
    let mut draws = 0;
    while removed < count {
        let row = draw_index(rng);
        let col = draw_index(rng);
        draws += 1;

        let pos = Position::new(row, col);
        if puzzle[pos] != 0 {
            puzzle.clear(pos);
            removed += 1;
        }
    }
    (puzzle, draws)
}

// next_int(0, 8) is at most 8.
#[expect(clippy::cast_possible_truncation)]
fn draw_index(rng: &mut PuzzleRng) -> u8 {
    rng.next_int(0, 8) as u8
}
