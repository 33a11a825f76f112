//! Grid coordinates.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// A cell coordinate in a square grid, addressed as (row, column).
///
/// Rows grow downwards and columns grow to the right, both starting at 0.
/// `Position` itself carries no grid size; each grid type checks bounds when
/// it is indexed.
///
/// # Examples
///
/// ```
/// use dailies_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.row(), 4);
/// assert_eq!(pos.col(), 7);
/// assert_eq!(pos.box_index(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All 81 positions of a 9×9 number-place grid in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a new position.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns the row (0-based).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-based).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the index of the 3×3 box containing this position
    /// (0-8, left to right, top to bottom).
    ///
    /// Only meaningful for positions inside a 9×9 grid.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.row / 3) * 3 + self.col / 3
    }

    /// Returns the top-left position of the 3×3 box containing this position.
    #[must_use]
    pub const fn box_origin(self) -> Self {
        Self {
            row: self.row - self.row % 3,
            col: self.col - self.col % 3,
        }
    }

    /// Returns the position `offset` cells to the right, or `None` if the
    /// result would leave a `size`×`size` grid.
    #[must_use]
    pub fn right(self, offset: u8, size: u8) -> Option<Self> {
        let col = self.col.checked_add(offset)?;
        (col < size).then_some(Self { row: self.row, col })
    }

    /// Returns the position `offset` cells below, or `None` if the result
    /// would leave a `size`×`size` grid.
    #[must_use]
    pub fn down(self, offset: u8, size: u8) -> Option<Self> {
        let row = self.row.checked_add(offset)?;
        (row < size).then_some(Self { row, col: self.col })
    }

    /// Returns `true` if both positions lie in the same row, column, or 3×3 box.
    ///
    /// A position is not its own peer.
    #[must_use]
    pub fn is_peer_of(self, other: Self) -> bool {
        self != other
            && (self.row == other.row
                || self.col == other.col
                || self.box_index() == other.box_index())
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}
