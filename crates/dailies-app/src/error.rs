use dailies_core::SeedParseError;
use dailies_game::GameError;
use dailies_generator::GenerationError;

/// Errors surfaced by the command-line request layer.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AppError {
    /// A seed or date argument could not be parsed.
    #[display("{_0}")]
    Seed(#[from] SeedParseError),
    /// A guess or word was rejected.
    #[display("{_0}")]
    Game(#[from] GameError),
    /// A generator failed; this is an internal fault, not a user error.
    #[display("puzzle generation failed: {_0}")]
    Generation(#[from] GenerationError),
    /// The payload could not be written as JSON.
    #[display("failed to write JSON output: {_0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Returns `true` if the error was caused by the command-line input.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Self::Seed(_) => true,
            Self::Game(err) => err.is_invalid_input(),
            Self::Generation(_) | Self::Json(_) => false,
        }
    }

    /// Returns the process exit code for this error: 2 for invalid input,
    /// 1 otherwise.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        if self.is_invalid_input() { 2 } else { 1 }
    }
}
