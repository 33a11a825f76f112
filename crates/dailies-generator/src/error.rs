use dailies_core::PuzzleSeed;

/// Errors that can occur while generating a puzzle.
///
/// Neither variant is recoverable by retrying with the same input: generation
/// is deterministic, so the same seed fails the same way every time.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GenerationError {
    /// The backtracking fill could not complete the grid.
    ///
    /// A correct fill always completes a 9×9 grid, so this means an internal
    /// invariant was broken. Callers must treat it as fatal.
    #[display("backtracking fill exhausted all candidates for seed {seed}")]
    Exhausted {
        /// The seed being generated.
        seed: PuzzleSeed,
    },
    /// A generator was given an empty word list to pick from.
    #[display("word list is empty")]
    EmptyWordList,
}
