use dailies_core::{PuzzleRng, PuzzleSeed};
use serde::Serialize;

use crate::{GenerationError, word_bank};

/// Length of every answer and guess.
pub const WORD_LENGTH: usize = 5;

/// Number of guesses a player gets.
pub const MAX_GUESSES: usize = 6;

/// The hidden word for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyWord {
    /// The answer, in uppercase.
    pub word: String,
    /// Number of guesses allowed.
    pub max_guesses: usize,
    /// The seed that selected this word.
    #[serde(skip)]
    pub seed: PuzzleSeed,
}

/// Selects the hidden word of the five-letter word game.
///
/// One draw of `next_int(0, len - 1)` from a fresh [`PuzzleRng`] indexes the
/// word list.
///
/// # Examples
///
/// ```
/// use dailies_core::PuzzleSeed;
/// use dailies_generator::{MAX_GUESSES, WordleGenerator};
///
/// let daily = WordleGenerator::with_words(&["apple"]).generate_with_seed(PuzzleSeed::new(3))?;
///
/// assert_eq!(daily.word, "APPLE");
/// assert_eq!(daily.max_guesses, MAX_GUESSES);
/// # Ok::<(), dailies_generator::GenerationError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WordleGenerator<'a> {
    words: &'a [&'a str],
}

impl Default for WordleGenerator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl WordleGenerator<'static> {
    /// Creates a generator drawing from the built-in five-letter list.
    #[must_use]
    pub fn new() -> Self {
        Self::with_words(word_bank::five_letter_words())
    }
}

impl<'a> WordleGenerator<'a> {
    /// Creates a generator drawing from a custom list.
    #[must_use]
    pub const fn with_words(words: &'a [&'a str]) -> Self {
        Self { words }
    }

    /// Selects a word seeded from the wall clock.
    ///
    /// # Errors
    ///
    /// See [`WordleGenerator::generate_with_seed`].
    pub fn generate(&self) -> Result<DailyWord, GenerationError> {
        self.generate_with_seed(PuzzleSeed::from_wall_clock())
    }

    /// Selects the word determined by `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::EmptyWordList`] if the list is empty.
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> Result<DailyWord, GenerationError> {
        if self.words.is_empty() {
            return Err(GenerationError::EmptyWordList);
        }
        let mut rng = PuzzleRng::new(seed);
        let index = rng.next_int(0, self.words.len() - 1);
        let word = self.words[index].to_ascii_uppercase();
        log::debug!("wordle seed={seed}: picked index {index}");

        Ok(DailyWord {
            word,
            max_guesses: MAX_GUESSES,
            seed,
        })
    }
}
