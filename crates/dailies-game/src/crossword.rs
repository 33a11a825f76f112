use dailies_core::{CrosswordGrid, LetterGrid, Position, letter_grid};
use dailies_generator::{Clues, GeneratedCrossword};
use serde::Serialize;

use crate::GameError;

/// The result of checking a crossword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CrosswordCheck {
    /// Open cells holding the right letter.
    pub correct: usize,
    /// Number of open cells.
    pub total: usize,
}

impl CrosswordCheck {
    /// Returns `true` if every open cell holds the right letter.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.correct == self.total
    }
}

/// A crossword game session.
///
/// # Examples
///
/// ```
/// use dailies_core::{Position, PuzzleSeed};
/// use dailies_game::CrosswordGame;
/// use dailies_generator::CrosswordGenerator;
///
/// let crossword = CrosswordGenerator::new().generate_with_seed(PuzzleSeed::new(5))?;
/// let mut game = CrosswordGame::new(crossword);
/// assert!(!game.check().is_solved());
///
/// game.reveal();
/// assert!(game.check().is_solved());
/// assert!(game.set_letter(Position::new(0, 0), 'a').is_err());
/// # Ok::<(), dailies_generator::GenerationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrosswordGame {
    grid: CrosswordGrid,
    solution: LetterGrid,
    entries: LetterGrid,
    clues: Clues,
}

impl CrosswordGame {
    /// Starts a session for a generated crossword.
    #[must_use]
    pub fn new(crossword: GeneratedCrossword) -> Self {
        let GeneratedCrossword {
            grid,
            solution,
            clues,
            seed: _,
        } = crossword;
        Self {
            grid,
            solution,
            entries: LetterGrid::blocked(),
            clues,
        }
    }

    /// Returns the player-facing grid.
    #[must_use]
    pub fn grid(&self) -> &CrosswordGrid {
        &self.grid
    }

    /// Returns the clues.
    #[must_use]
    pub fn clues(&self) -> &Clues {
        &self.clues
    }

    /// Returns the player's letter at `pos`, if any.
    #[must_use]
    pub fn entry(&self, pos: Position) -> Option<char> {
        self.entries.get(pos)
    }

    /// Writes `letter`, uppercased, at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::BlockedCell`] if `pos` is blocked, or
    /// [`GameError::InvalidCharacter`] if `letter` is not an ASCII letter.
    pub fn set_letter(&mut self, pos: Position, letter: char) -> Result<(), GameError> {
        self.ensure_open(pos)?;
        if !letter.is_ascii_alphabetic() {
            return Err(GameError::InvalidCharacter {
                input: letter.to_string(),
            });
        }
        self.entries.set(pos, letter.to_ascii_uppercase());
        Ok(())
    }

    /// Removes the player's letter at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::BlockedCell`] if `pos` is blocked.
    pub fn clear(&mut self, pos: Position) -> Result<(), GameError> {
        self.ensure_open(pos)?;
        self.entries.clear(pos);
        Ok(())
    }

    fn ensure_open(&self, pos: Position) -> Result<(), GameError> {
        if !self.grid.is_open(pos) {
            return Err(GameError::BlockedCell);
        }
        Ok(())
    }

    /// Counts the open cells whose entry matches the solution.
    #[must_use]
    pub fn check(&self) -> CrosswordCheck {
        let open: Vec<_> = letter_grid::positions()
            .filter(|&pos| self.grid.is_open(pos))
            .collect();
        let correct = open
            .iter()
            .filter(|&&pos| {
                self.entries
                    .get(pos)
                    .is_some_and(|letter| self.solution.get(pos) == Some(letter))
            })
            .count();
        CrosswordCheck {
            correct,
            total: open.len(),
        }
    }

    /// Fills every open cell with its answer.
    pub fn reveal(&mut self) {
        self.entries = self.solution.clone();
    }
}
