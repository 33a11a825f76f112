//! The 8×8 crossword grids.
//!
//! A crossword puzzle is described by two grids of the same shape:
//!
//! - [`CrosswordGrid`] is what the player sees: every cell is either
//!   [`CrosswordCell::Blocked`] or [`CrosswordCell::Open`].
//! - [`LetterGrid`] holds the answer: open cells carry an uppercase letter,
//!   blocked cells carry nothing.
//!
//! Both serialize as eight rows of eight strings, using `"#"` for blocked
//! cells, `""` for open cells in the player grid, and the letter itself in the
//! answer grid.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize, Serializer};

use crate::Position;

/// Width and height of a crossword grid.
pub const CROSSWORD_SIZE: u8 = 8;

const SIZE: usize = CROSSWORD_SIZE as usize;

/// A single cell of the player-facing crossword grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum CrosswordCell {
    /// An unused cell, rendered as `#`.
    #[default]
    Blocked,
    /// A cell that belongs to at least one word and is still unsolved.
    Open,
}

impl CrosswordCell {
    /// Returns the textual form used in payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blocked => "#",
            Self::Open => "",
        }
    }
}

impl From<CrosswordCell> for String {
    fn from(cell: CrosswordCell) -> Self {
        cell.as_str().to_owned()
    }
}

impl TryFrom<String> for CrosswordCell {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "#" => Ok(Self::Blocked),
            "" => Ok(Self::Open),
            _ => Err(format!("invalid crossword cell: {value:?}")),
        }
    }
}

/// The player-facing 8×8 crossword grid.
///
/// # Examples
///
/// ```
/// use dailies_core::{CrosswordCell, CrosswordGrid, Position};
///
/// let mut grid = CrosswordGrid::blocked();
/// grid.open(Position::new(2, 1));
///
/// assert_eq!(grid[Position::new(2, 1)], CrosswordCell::Open);
/// assert_eq!(grid[Position::new(0, 0)], CrosswordCell::Blocked);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CrosswordGrid {
    cells: [[CrosswordCell; SIZE]; SIZE],
}

impl CrosswordGrid {
    /// Creates a grid with every cell blocked.
    #[must_use]
    pub const fn blocked() -> Self {
        Self {
            cells: [[CrosswordCell::Blocked; SIZE]; SIZE],
        }
    }

    /// Returns the rows of the grid.
    #[must_use]
    pub const fn rows(&self) -> &[[CrosswordCell; SIZE]; SIZE] {
        &self.cells
    }

    /// Marks the cell at `pos` as open.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the grid.
    pub fn open(&mut self, pos: Position) {
        self.cells[usize::from(pos.row())][usize::from(pos.col())] = CrosswordCell::Open;
    }

    /// Returns `true` if the cell at `pos` is open.
    #[must_use]
    pub fn is_open(&self, pos: Position) -> bool {
        self[pos] == CrosswordCell::Open
    }

    /// Returns the number of open cells.
    #[must_use]
    pub fn count_open(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == CrosswordCell::Open)
            .count()
    }

    /// Returns `true` if every open cell has a letter in `solution` and every
    /// blocked cell has none.
    #[must_use]
    pub fn is_consistent_with(&self, solution: &LetterGrid) -> bool {
        positions().all(|pos| self.is_open(pos) == solution.get(pos).is_some())
    }
}

impl std::ops::Index<Position> for CrosswordGrid {
    type Output = CrosswordCell;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[usize::from(pos.row())][usize::from(pos.col())]
    }
}

/// The answer grid of a crossword.
///
/// `None` marks a blocked cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct LetterGrid {
    cells: [[Option<char>; SIZE]; SIZE],
}

impl LetterGrid {
    /// Creates a grid with every cell blocked.
    #[must_use]
    pub const fn blocked() -> Self {
        Self {
            cells: [[None; SIZE]; SIZE],
        }
    }

    /// Returns the rows of the grid.
    #[must_use]
    pub const fn rows(&self) -> &[[Option<char>; SIZE]; SIZE] {
        &self.cells
    }

    /// Returns the letter at `pos`, or `None` for a blocked cell.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<char> {
        self.cells[usize::from(pos.row())][usize::from(pos.col())]
    }

    /// Writes `letter` at `pos`, replacing whatever was there.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the grid.
    pub fn set(&mut self, pos: Position, letter: char) {
        self.cells[usize::from(pos.row())][usize::from(pos.col())] = Some(letter);
    }

    /// Empties the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the grid.
    pub fn clear(&mut self, pos: Position) {
        self.cells[usize::from(pos.row())][usize::from(pos.col())] = None;
    }
}

impl Serialize for LetterGrid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let rows = self
            .cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or_else(|| "#".to_owned(), String::from))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        rows.serialize(serializer)
    }
}

/// Formats the grid as eight lines, `#` for blocked cells.
impl Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.unwrap_or('#'))?;
            }
        }
        Ok(())
    }
}

/// Returns all 64 crossword positions in row-major order.
pub fn positions() -> impl Iterator<Item = Position> {
    (0..CROSSWORD_SIZE)
        .flat_map(|row| (0..CROSSWORD_SIZE).map(move |col| Position::new(row, col)))
}
