use dailies_generator::{DailyWord, MAX_GUESSES, WORD_LENGTH};
use serde::Serialize;

use crate::GameError;

/// The score of one guessed letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::IsVariant)]
#[serde(rename_all = "lowercase")]
pub enum LetterResult {
    /// The letter is in the answer at this position.
    Correct,
    /// The letter is in the answer at another, unmatched position.
    Present,
    /// The letter is not in the answer, or every copy is already matched.
    Absent,
}

/// Scores `guess` against `target`.
///
/// Both words are uppercased first and must have exactly five letters. Exact
/// matches are found first and consume their target letter. Each remaining
/// guess letter, left to right, then consumes the leftmost unconsumed copy of
/// itself in the target, if any. A letter guessed twice is therefore only
/// marked present as many times as the target has spare copies.
///
/// # Errors
///
/// Returns [`GameError::InvalidLength`] if either word does not have five
/// letters.
///
/// # Examples
///
/// ```
/// use dailies_game::{LetterResult::*, evaluate_guess};
///
/// assert_eq!(
///     evaluate_guess("speed", "abide")?,
///     [Absent, Absent, Present, Absent, Present]
/// );
/// # Ok::<(), dailies_game::GameError>(())
/// ```
pub fn evaluate_guess(guess: &str, target: &str) -> Result<[LetterResult; WORD_LENGTH], GameError> {
    let guess = normalize(guess)?;
    let target = normalize(target)?;
    Ok(score(&guess, &target))
}

fn normalize(word: &str) -> Result<[char; WORD_LENGTH], GameError> {
    let letters: Vec<char> = word.to_uppercase().chars().collect();
    <[char; WORD_LENGTH]>::try_from(letters).map_err(|letters| GameError::InvalidLength {
        input: word.to_owned(),
        len: letters.len(),
        expected: WORD_LENGTH,
    })
}

fn score(guess: &[char; WORD_LENGTH], target: &[char; WORD_LENGTH]) -> [LetterResult; WORD_LENGTH] {
    let mut result = [LetterResult::Absent; WORD_LENGTH];
    let mut consumed = [false; WORD_LENGTH];

    for (i, (g, t)) in guess.iter().zip(target).enumerate() {
        if g == t {
            result[i] = LetterResult::Correct;
            consumed[i] = true;
        }
    }

    for (i, g) in guess.iter().enumerate() {
        if result[i].is_correct() {
            continue;
        }
        let spare = (0..WORD_LENGTH).find(|&j| !consumed[j] && target[j] == *g);
        if let Some(j) = spare {
            result[i] = LetterResult::Present;
            consumed[j] = true;
        }
    }

    result
}

/// Whether a game is still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::IsVariant)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Guesses remain and the answer has not been found.
    Playing,
    /// The answer was guessed.
    Won,
    /// Every guess was used without finding the answer.
    Lost,
}

/// The best information a player has about a letter.
///
/// Variants are ordered from least to most informative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyState {
    /// Not guessed yet.
    Unused,
    /// Guessed and not in the answer.
    Absent,
    /// Guessed and in the answer, but not yet in the right place.
    Present,
    /// Guessed in the right place at least once.
    Correct,
}

impl From<LetterResult> for KeyState {
    fn from(result: LetterResult) -> Self {
        match result {
            LetterResult::Correct => Self::Correct,
            LetterResult::Present => Self::Present,
            LetterResult::Absent => Self::Absent,
        }
    }
}

/// A submitted guess and its score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Guess {
    /// The guessed word, in uppercase.
    pub word: String,
    /// The score of each letter.
    pub result: [LetterResult; WORD_LENGTH],
}

/// A five-letter word guessing game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordleGame {
    answer: String,
    guesses: Vec<Guess>,
    max_guesses: usize,
}

impl WordleGame {
    /// Starts a game with `answer` as the hidden word and [`MAX_GUESSES`] guesses.
    ///
    /// # Errors
    ///
    /// Returns an input error if `answer` is not five ASCII letters.
    pub fn new(answer: &str) -> Result<Self, GameError> {
        Ok(Self {
            answer: validate_word(answer)?,
            guesses: Vec::with_capacity(MAX_GUESSES),
            max_guesses: MAX_GUESSES,
        })
    }

    /// Starts a game for a generated word.
    ///
    /// # Errors
    ///
    /// Returns an input error if the word is not five ASCII letters.
    pub fn from_daily(daily: &DailyWord) -> Result<Self, GameError> {
        let mut game = Self::new(&daily.word)?;
        game.max_guesses = daily.max_guesses;
        Ok(game)
    }

    /// Returns the hidden word, in uppercase.
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Returns the guesses made so far, oldest first.
    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    /// Returns the number of guesses left.
    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.max_guesses.saturating_sub(self.guesses.len())
    }

    /// Returns the current status of the game.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.guesses.last().is_some_and(|guess| guess.word == self.answer) {
            GameStatus::Won
        } else if self.guesses.len() >= self.max_guesses {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        }
    }

    /// Scores `guess` and records it.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameOver`] if the game is already won or lost, or
    /// an input error if `guess` is not five ASCII letters. Rejected guesses
    /// do not count.
    pub fn submit(&mut self, guess: &str) -> Result<[LetterResult; WORD_LENGTH], GameError> {
        if !self.status().is_playing() {
            return Err(GameError::GameOver);
        }
        let word = validate_word(guess)?;
        let result = evaluate_guess(&word, &self.answer)?;
        self.guesses.push(Guess { word, result });
        Ok(result)
    }

    /// Returns the best result seen for `letter` across all guesses.
    ///
    /// A correct placement anywhere outranks present, which outranks absent.
    #[must_use]
    pub fn keyboard_state(&self, letter: char) -> KeyState {
        let letter = letter.to_ascii_uppercase();
        self.guesses
            .iter()
            .flat_map(|guess| guess.word.chars().zip(guess.result))
            .filter(|&(ch, _)| ch == letter)
            .map(|(_, result)| KeyState::from(result))
            .max()
            .unwrap_or(KeyState::Unused)
    }
}

fn validate_word(word: &str) -> Result<String, GameError> {
    let len = word.chars().count();
    if len != WORD_LENGTH {
        return Err(GameError::InvalidLength {
            input: word.to_owned(),
            len,
            expected: WORD_LENGTH,
        });
    }
    if !word.chars().all(|ch| ch.is_ascii_alphabetic()) {
        return Err(GameError::InvalidCharacter {
            input: word.to_owned(),
        });
    }
    Ok(word.to_ascii_uppercase())
}
