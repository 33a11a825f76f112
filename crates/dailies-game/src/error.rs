/// Errors returned by game operations.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum GameError {
    /// A word did not have the required number of letters.
    #[display("{input:?} has {len} letters, expected {expected}")]
    InvalidLength {
        /// The rejected input.
        input: String,
        /// The number of letters found.
        len: usize,
        /// The number of letters required.
        expected: usize,
    },
    /// An input contained something other than ASCII letters.
    #[display("{input:?} must contain only the letters A-Z")]
    InvalidCharacter {
        /// The rejected input.
        input: String,
    },
    /// A digit outside 1-9 was entered.
    #[display("digit {digit} is out of range 1-9")]
    InvalidDigit {
        /// The rejected digit.
        digit: u8,
    },
    /// Attempted to modify a given (pre-filled) cell.
    #[display("cannot modify a given cell")]
    CannotModifyGivenCell,
    /// Attempted to write into a blocked crossword cell.
    #[display("cannot write into a blocked cell")]
    BlockedCell,
    /// The game has already been won or lost.
    #[display("the game is already over")]
    GameOver,
}

impl GameError {
    /// Returns `true` if the error was caused by malformed player input
    /// rather than by the state of the game.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        self.is_invalid_length() || self.is_invalid_character() || self.is_invalid_digit()
    }
}
