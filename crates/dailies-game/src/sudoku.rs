use std::fmt::{self, Display};

use dailies_core::{DigitGrid, Position};
use dailies_generator::GeneratedNumberGrid;

use crate::GameError;

/// The state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum CellState {
    /// Part of the puzzle; cannot be changed.
    Given(u8),
    /// Entered by the player.
    Filled(u8),
    /// Not yet filled.
    Empty,
}

impl CellState {
    /// Returns the digit in the cell, given or filled.
    #[must_use]
    pub fn as_digit(self) -> Option<u8> {
        match self {
            Self::Given(digit) | Self::Filled(digit) => Some(digit),
            Self::Empty => None,
        }
    }
}

/// The outcome of checking a number-place grid.
///
/// Conditions are checked in declaration order; the first that applies is
/// reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum SudokuCheck {
    /// At least one cell is empty.
    Incomplete,
    /// Two peers hold the same digit.
    HasConflicts,
    /// Every cell is filled without conflicts, but the grid differs from the
    /// stored solution.
    Incorrect,
    /// The grid matches the stored solution.
    Solved,
}

impl Display for SudokuCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::Incomplete => "puzzle not complete",
            Self::HasConflicts => "there are errors in the solution",
            Self::Incorrect => "solution is incorrect",
            Self::Solved => "puzzle solved",
        };
        f.write_str(message)
    }
}

/// A number-place game session.
///
/// Givens come from the puzzle and are fixed; every other cell can be filled
/// and cleared freely. Conflicting entries are allowed and reported by
/// [`SudokuGame::conflicts`].
///
/// # Examples
///
/// ```
/// use dailies_core::{Position, PuzzleSeed};
/// use dailies_game::{SudokuCheck, SudokuGame};
/// use dailies_generator::NumberGridGenerator;
///
/// let puzzle = NumberGridGenerator::new().generate_with_seed(PuzzleSeed::new(1))?;
/// let solution = puzzle.solution.clone();
/// let mut game = SudokuGame::new(&puzzle);
/// assert_eq!(game.check(), SudokuCheck::Incomplete);
///
/// for pos in Position::ALL {
///     if game.cell(pos).is_empty() {
///         game.set_digit(pos, solution[pos]).unwrap();
///     }
/// }
/// assert_eq!(game.check(), SudokuCheck::Solved);
/// # Ok::<(), dailies_generator::GenerationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SudokuGame {
    givens: DigitGrid,
    grid: DigitGrid,
    solution: DigitGrid,
}

impl SudokuGame {
    /// Starts a session for a generated puzzle.
    #[must_use]
    pub fn new(puzzle: &GeneratedNumberGrid) -> Self {
        Self::from_grids(puzzle.puzzle.clone(), puzzle.solution.clone())
    }

    /// Starts a session from a puzzle grid and its solution.
    ///
    /// Every non-zero cell of `puzzle` becomes a given.
    #[must_use]
    pub fn from_grids(puzzle: DigitGrid, solution: DigitGrid) -> Self {
        Self {
            grid: puzzle.clone(),
            givens: puzzle,
            solution,
        }
    }

    /// Returns the state of the cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: Position) -> CellState {
        match (self.givens[pos], self.grid[pos]) {
            (0, 0) => CellState::Empty,
            (0, digit) => CellState::Filled(digit),
            (given, _) => CellState::Given(given),
        }
    }

    /// Returns the current grid, givens and entries combined.
    #[must_use]
    pub fn grid(&self) -> &DigitGrid {
        &self.grid
    }

    /// Returns the stored solution.
    #[must_use]
    pub fn solution(&self) -> &DigitGrid {
        &self.solution
    }

    /// Writes `digit` at `pos`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidDigit`] if `digit` is not in 1-9, or
    /// [`GameError::CannotModifyGivenCell`] if `pos` holds a given.
    pub fn set_digit(&mut self, pos: Position, digit: u8) -> Result<(), GameError> {
        if !(1..=9).contains(&digit) {
            return Err(GameError::InvalidDigit { digit });
        }
        self.ensure_editable(pos)?;
        self.grid.set(pos, digit);
        Ok(())
    }

    /// Empties the cell at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if `pos` holds a given.
    pub fn clear(&mut self, pos: Position) -> Result<(), GameError> {
        self.ensure_editable(pos)?;
        self.grid.clear(pos);
        Ok(())
    }

    fn ensure_editable(&self, pos: Position) -> Result<(), GameError> {
        if self.cell(pos).is_given() {
            return Err(GameError::CannotModifyGivenCell);
        }
        Ok(())
    }

    /// Returns every filled position that shares its digit with a peer, in
    /// row-major order.
    #[must_use]
    pub fn conflicts(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|&pos| {
                let digit = self.grid[pos];
                digit != 0
                    && Position::ALL
                        .into_iter()
                        .any(|other| pos.is_peer_of(other) && self.grid[other] == digit)
            })
            .collect()
    }

    /// Checks the grid against the rules and the stored solution.
    #[must_use]
    pub fn check(&self) -> SudokuCheck {
        if !self.grid.is_filled() {
            SudokuCheck::Incomplete
        } else if !self.conflicts().is_empty() {
            SudokuCheck::HasConflicts
        } else if self.grid != self.solution {
            SudokuCheck::Incorrect
        } else {
            SudokuCheck::Solved
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLUTION: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    fn solution() -> DigitGrid {
        SOLUTION.parse().unwrap()
    }

    fn game_with_blanks(blanks: &[Position]) -> SudokuGame {
        let solution = solution();
        let mut puzzle = solution.clone();
        for &pos in blanks {
            puzzle.clear(pos);
        }
        SudokuGame::from_grids(puzzle, solution)
    }

    #[test]
    fn test_givens_are_immutable() {
        let mut game = game_with_blanks(&[Position::new(0, 0)]);
        let given = Position::new(0, 1);
        assert_eq!(game.cell(given), CellState::Given(3));
        assert_eq!(game.set_digit(given, 4), Err(GameError::CannotModifyGivenCell));
        assert_eq!(game.clear(given), Err(GameError::CannotModifyGivenCell));
        assert_eq!(game.cell(given), CellState::Given(3));
    }

    #[test]
    fn test_set_and_clear() {
        let pos = Position::new(4, 4);
        let mut game = game_with_blanks(&[pos]);
        assert!(game.cell(pos).is_empty());

        game.set_digit(pos, 5).unwrap();
        assert_eq!(game.cell(pos), CellState::Filled(5));
        game.set_digit(pos, 7).unwrap();
        assert_eq!(game.cell(pos).as_digit(), Some(7));

        game.clear(pos).unwrap();
        assert!(game.cell(pos).is_empty());
        assert_eq!(game.set_digit(pos, 0), Err(GameError::InvalidDigit { digit: 0 }));
        assert_eq!(game.set_digit(pos, 10), Err(GameError::InvalidDigit { digit: 10 }));
    }

    #[test]
    fn test_conflicts_report_both_cells() {
        let blank = Position::new(0, 0);
        let mut game = game_with_blanks(&[blank]);
        assert!(game.conflicts().is_empty());

        // Row 0 already has a 3 at (0, 1).
        game.set_digit(blank, 3).unwrap();
        let conflicts = game.conflicts();
        assert!(conflicts.contains(&blank));
        assert!(conflicts.contains(&Position::new(0, 1)));
        assert!(!conflicts.contains(&Position::new(8, 8)));
    }

    #[test]
    fn test_check_outcomes() {
        let a = Position::new(0, 0);
        let b = Position::new(0, 1);
        let mut game = game_with_blanks(&[a, b]);
        assert_eq!(game.check(), SudokuCheck::Incomplete);

        game.set_digit(a, 5).unwrap();
        game.set_digit(b, 5).unwrap();
        assert_eq!(game.check(), SudokuCheck::HasConflicts);

        game.set_digit(a, 5).unwrap();
        game.set_digit(b, 3).unwrap();
        assert_eq!(game.check(), SudokuCheck::Solved);
        assert_eq!(game.check().to_string(), "puzzle solved");
    }

    #[test]
    fn test_valid_but_different_grid_is_incorrect() {
        // Swapping the digits 1 and 2 everywhere keeps the grid valid.
        let swapped: String = SOLUTION
            .chars()
            .map(|ch| match ch {
                '1' => '2',
                '2' => '1',
                other => other,
            })
            .collect();
        let swapped: DigitGrid = swapped.parse().unwrap();
        assert!(swapped.is_valid_solution());

        let mut game = SudokuGame::from_grids(DigitGrid::new(), solution());
        for pos in Position::ALL {
            game.set_digit(pos, swapped[pos]).unwrap();
        }
        assert!(game.conflicts().is_empty());
        assert_eq!(game.check(), SudokuCheck::Incorrect);
    }
}
