//! The 9×9 number-place grid.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::Position;

/// A 9×9 number-place grid.
///
/// Each cell holds a digit 1-9, or 0 when the cell is empty. The grid does not
/// enforce the number-place rules on its own; use [`DigitGrid::can_place`] and
/// [`DigitGrid::is_valid_solution`] to check them.
///
/// Serializes as nine rows of nine integers, the shape the puzzle payloads use.
///
/// # Examples
///
/// ```
/// use dailies_core::{DigitGrid, Position};
///
/// let mut grid = DigitGrid::new();
/// grid.set(Position::new(0, 0), 5);
///
/// assert_eq!(grid[Position::new(0, 0)], 5);
/// assert!(!grid.can_place(Position::new(0, 8), 5)); // same row
/// assert!(grid.can_place(Position::new(4, 4), 5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "[[u8; 9]; 9]", try_from = "[[u8; 9]; 9]")]
pub struct DigitGrid {
    cells: [[u8; 9]; 9],
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [[0; 9]; 9] }
    }

    /// Returns the rows of the grid.
    #[must_use]
    pub const fn rows(&self) -> &[[u8; 9]; 9] {
        &self.cells
    }

    /// Sets the cell at `pos`; 0 clears it.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the grid or `digit` is greater than 9.
    pub fn set(&mut self, pos: Position, digit: u8) {
        assert!(digit <= 9, "Digit must be between 0 and 9, got {digit}");
        self.cells[usize::from(pos.row())][usize::from(pos.col())] = digit;
    }

    /// Empties the cell at `pos`.
    pub fn clear(&mut self, pos: Position) {
        self.set(pos, 0);
    }

    /// Returns the first empty cell in row-major order.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        Position::ALL.into_iter().find(|&pos| self[pos] == 0)
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn count_empty(&self) -> usize {
        self.cells.iter().flatten().filter(|&&d| d == 0).count()
    }

    /// Returns `true` if no cell is empty.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.first_empty().is_none()
    }

    /// Returns `true` if `digit` is absent from the row, the column, and the
    /// 3×3 box of `pos`.
    ///
    /// The cell at `pos` itself is part of its row, so callers check empty
    /// cells only.
    #[must_use]
    pub fn can_place(&self, pos: Position, digit: u8) -> bool {
        let row = usize::from(pos.row());
        let col = usize::from(pos.col());

        if self.cells[row].contains(&digit) {
            return false;
        }
        if self.cells.iter().any(|r| r[col] == digit) {
            return false;
        }

        let origin = pos.box_origin();
        let (r0, c0) = (usize::from(origin.row()), usize::from(origin.col()));
        !self.cells[r0..r0 + 3]
            .iter()
            .any(|r| r[c0..c0 + 3].contains(&digit))
    }

    /// Returns `true` if every row, column, and 3×3 box contains each of the
    /// digits 1-9 exactly once.
    #[must_use]
    pub fn is_valid_solution(&self) -> bool {
        const FULL: u16 = 0b11_1111_1110;

        let mut rows = [0u16; 9];
        let mut cols = [0u16; 9];
        let mut boxes = [0u16; 9];
        for pos in Position::ALL {
            let digit = self[pos];
            if digit == 0 {
                return false;
            }
            let bit = 1 << digit;
            rows[usize::from(pos.row())] |= bit;
            cols[usize::from(pos.col())] |= bit;
            boxes[usize::from(pos.box_index())] |= bit;
        }
        rows.into_iter()
            .chain(cols)
            .chain(boxes)
            .all(|mask| mask == FULL)
    }
}

impl Index<Position> for DigitGrid {
    type Output = u8;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[usize::from(pos.row())][usize::from(pos.col())]
    }
}

impl From<DigitGrid> for [[u8; 9]; 9] {
    fn from(grid: DigitGrid) -> Self {
        grid.cells
    }
}

impl TryFrom<[[u8; 9]; 9]> for DigitGrid {
    type Error = GridParseError;

    fn try_from(cells: [[u8; 9]; 9]) -> Result<Self, Self::Error> {
        if let Some(&value) = cells.iter().flatten().find(|&&d| d > 9) {
            return Err(GridParseError::DigitOutOfRange { value });
        }
        Ok(Self { cells })
    }
}

/// Formats the grid as 81 characters in row-major order, `.` for empty cells.
impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.cells.iter().flatten() {
            if *digit == 0 {
                f.write_str(".")?;
            } else {
                write!(f, "{digit}")?;
            }
        }
        Ok(())
    }
}

/// Parses a grid from its textual form.
///
/// - Digits 1-9 represent filled cells
/// - `.`, `_`, or `0` represent empty cells
/// - Whitespace is ignored
impl FromStr for DigitGrid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut count = 0;
        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            let digit = match ch {
                '.' | '_' => 0,
                '0'..='9' => {
                    u8::try_from(ch).map_err(|_| GridParseError::InvalidChar { ch })? - b'0'
                }
                _ => return Err(GridParseError::InvalidChar { ch }),
            };
            if count < 81 {
                grid.set(Position::ALL[count], digit);
            }
            count += 1;
        }
        if count != 81 {
            return Err(GridParseError::InvalidLength { len: count });
        }
        Ok(grid)
    }
}

/// Errors produced when building a [`DigitGrid`] from external data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// The input contained a character that is neither a digit nor an empty marker.
    #[display("invalid grid character: {ch:?}")]
    InvalidChar {
        /// The offending character.
        ch: char,
    },
    /// The input did not contain exactly 81 cells.
    #[display("expected 81 cells, found {len}")]
    InvalidLength {
        /// The number of cells found.
        len: usize,
    },
    /// A cell held a value greater than 9.
    #[display("cell value out of range: {value}")]
    DigitOutOfRange {
        /// The offending value.
        value: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str = "
        534 678 912
        672 195 348
        198 342 567
        859 761 423
        426 853 791
        713 924 856
        961 537 284
        287 419 635
        345 286 179
    ";

    #[test]
    fn test_parse_and_display() {
        let grid: DigitGrid = SOLVED.parse().unwrap();
        assert_eq!(grid[Position::new(0, 0)], 5);
        assert_eq!(grid[Position::new(8, 8)], 9);
        assert_eq!(
            grid.to_string(),
            SOLVED.chars().filter(|c| !c.is_whitespace()).collect::<String>()
        );

        let empty: DigitGrid = format!("{}{}", "_".repeat(40), "0".repeat(41))
            .parse()
            .unwrap();
        assert_eq!(empty, DigitGrid::new());
        assert_eq!(empty.to_string(), ".".repeat(81));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "12x".parse::<DigitGrid>(),
            Err(GridParseError::InvalidChar { ch: 'x' })
        );
        assert_eq!(
            "123".parse::<DigitGrid>(),
            Err(GridParseError::InvalidLength { len: 3 })
        );
        assert_eq!(
            "1".repeat(82).parse::<DigitGrid>(),
            Err(GridParseError::InvalidLength { len: 82 })
        );
    }

    #[test]
    fn test_valid_solution() {
        let mut grid: DigitGrid = SOLVED.parse().unwrap();
        assert!(grid.is_filled());
        assert!(grid.is_valid_solution());

        // Swapping two digits in a row keeps the row valid but breaks columns.
        let a = grid[Position::new(0, 0)];
        let b = grid[Position::new(0, 1)];
        grid.set(Position::new(0, 0), b);
        grid.set(Position::new(0, 1), a);
        assert!(!grid.is_valid_solution());

        grid.clear(Position::new(0, 0));
        assert!(!grid.is_filled());
        assert!(!grid.is_valid_solution());
        assert_eq!(grid.first_empty(), Some(Position::new(0, 0)));
        assert_eq!(grid.count_empty(), 1);
    }

    #[test]
    fn test_first_empty_is_row_major() {
        let mut grid = DigitGrid::new();
        for col in 0..9 {
            grid.set(Position::new(0, col), col + 1);
        }
        grid.set(Position::new(1, 0), 4);
        assert_eq!(grid[Position::new(0, 8)], 9);
        assert_eq!(grid.first_empty(), Some(Position::new(1, 1)));
        assert_eq!(grid.count_empty(), 71);
    }

    #[test]
    fn test_can_place_checks_row_column_box() {
        let mut grid = DigitGrid::new();
        grid.set(Position::new(4, 4), 7);

        assert!(!grid.can_place(Position::new(4, 0), 7));
        assert!(!grid.can_place(Position::new(8, 4), 7));
        assert!(!grid.can_place(Position::new(3, 5), 7));
        assert!(grid.can_place(Position::new(0, 0), 7));
        assert!(grid.can_place(Position::new(4, 0), 6));
    }

    #[test]
    fn test_serde_shape() {
        let grid: DigitGrid = SOLVED.parse().unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        assert!(json.starts_with("[[5,3,4,6,7,8,9,1,2],[6,7,2,"));

        let back: DigitGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);

        let bad = json.replacen('5', "10", 1);
        assert!(serde_json::from_str::<DigitGrid>(&bad).is_err());
    }

    #[test]
    #[should_panic(expected = "Digit must be between 0 and 9")]
    fn test_set_rejects_ten() {
        DigitGrid::new().set(Position::new(0, 0), 10);
    }
}
