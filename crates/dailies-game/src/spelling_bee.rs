use dailies_core::LetterSet;
use dailies_generator::GeneratedHoneycomb;
use serde::Serialize;

/// Minimum length of a scoring word.
const MIN_WORD_LENGTH: usize = 4;

/// Bonus points for a pangram.
const PANGRAM_BONUS: u32 = 7;

/// Why a submitted word did not score.
///
/// Checks run in declaration order and the first failure is reported.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum Rejection {
    /// Fewer than four letters.
    #[display("word must be at least 4 letters")]
    TooShort,
    /// The center letter is not used.
    #[display("word must contain the center letter")]
    MissingCenterLetter,
    /// A letter outside the honeycomb is used.
    #[display("word contains invalid letters")]
    InvalidLetters,
    /// The word has already been found.
    #[display("already found")]
    AlreadyFound,
    /// The word is well formed but not in the puzzle's word list.
    #[display("not in word list")]
    NotInWordList,
}

/// A word that scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Accepted {
    /// The word, in lowercase.
    pub word: String,
    /// The points it earned.
    pub points: u32,
    /// Whether it uses all seven letters.
    pub pangram: bool,
}

/// A spelling bee session: find words, collect points.
///
/// # Examples
///
/// ```
/// use dailies_core::PuzzleSeed;
/// use dailies_game::{Rejection, SpellingBeeGame};
/// use dailies_generator::HoneycombGenerator;
///
/// let bank = ["tone", "anterior"];
/// let puzzle = HoneycombGenerator::with_bank(&bank).generate_with_seed(PuzzleSeed::new(0));
/// let mut game = SpellingBeeGame::new(puzzle);
///
/// assert_eq!(game.submit("TONE").map(|a| a.points), Ok(1));
/// assert_eq!(game.submit("anterior").map(|a| a.points), Ok(15));
/// assert_eq!(game.submit("tone"), Err(Rejection::AlreadyFound));
/// assert_eq!(game.score(), 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellingBeeGame {
    puzzle: GeneratedHoneycomb,
    allowed: LetterSet,
    found: Vec<String>,
    score: u32,
}

impl SpellingBeeGame {
    /// Starts a session for `puzzle`.
    #[must_use]
    pub fn new(puzzle: GeneratedHoneycomb) -> Self {
        let allowed = puzzle.letters().allowed();
        Self {
            puzzle,
            allowed,
            found: Vec::new(),
            score: 0,
        }
    }

    /// Returns the puzzle being played.
    #[must_use]
    pub fn puzzle(&self) -> &GeneratedHoneycomb {
        &self.puzzle
    }

    /// Returns the words found so far, in the order they were found.
    #[must_use]
    pub fn found_words(&self) -> &[String] {
        &self.found
    }

    /// Returns the total points earned.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns the points available if every word is found.
    #[must_use]
    pub fn max_score(&self) -> u32 {
        self.puzzle
            .valid_words
            .iter()
            .map(|word| word_points(word, self.puzzle.pangrams.contains(word)))
            .sum()
    }

    /// Returns `true` once every valid word has been found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.found.len() == self.puzzle.valid_words.len()
    }

    /// Checks `word` and records it if it scores.
    ///
    /// The word is lowercased before checking.
    ///
    /// # Errors
    ///
    /// Returns the first [`Rejection`] that applies. Rejected words cost
    /// nothing.
    pub fn submit(&mut self, word: &str) -> Result<Accepted, Rejection> {
        let word = word.to_lowercase();
        if word.chars().count() < MIN_WORD_LENGTH {
            return Err(Rejection::TooShort);
        }
        if !word.contains(self.puzzle.center_letter) {
            return Err(Rejection::MissingCenterLetter);
        }
        if !LetterSet::from_word(&word).is_some_and(|letters| letters.is_subset(self.allowed)) {
            return Err(Rejection::InvalidLetters);
        }
        if self.found.contains(&word) {
            return Err(Rejection::AlreadyFound);
        }
        if !self.puzzle.valid_words.contains(&word) {
            return Err(Rejection::NotInWordList);
        }

        let pangram = self.puzzle.pangrams.contains(&word);
        let points = word_points(&word, pangram);
        self.score += points;
        self.found.push(word.clone());
        Ok(Accepted {
            word,
            points,
            pangram,
        })
    }
}

/// Four-letter words score 1; longer words score their length, plus
/// [`PANGRAM_BONUS`] for a pangram.
fn word_points(word: &str, pangram: bool) -> u32 {
    let len = word.chars().count();
    if len == MIN_WORD_LENGTH {
        return 1;
    }
    let points = u32::try_from(len).unwrap_or(u32::MAX);
    if pangram {
        points.saturating_add(PANGRAM_BONUS)
    } else {
        points
    }
}

#[cfg(test)]
mod tests {
    use dailies_core::PuzzleSeed;
    use dailies_generator::HoneycombGenerator;

    use super::*;

    const BANK: [&str; 8] = [
        "tone", "note", "orient", "anterior", "ratio", "stone", "ant", "rotator",
    ];

    // Seed 0 selects center 'e' with outer letters a r t i n o.
    fn game() -> SpellingBeeGame {
        let puzzle = HoneycombGenerator::with_bank(&BANK).generate_with_seed(PuzzleSeed::new(0));
        SpellingBeeGame::new(puzzle)
    }

    #[test]
    fn test_word_points() {
        assert_eq!(word_points("tone", false), 1);
        assert_eq!(word_points("orient", false), 6);
        assert_eq!(word_points("anterior", true), 15);
    }

    #[test]
    fn test_rejections_in_order() {
        let mut game = game();
        assert_eq!(game.submit("ten"), Err(Rejection::TooShort));
        assert_eq!(game.submit("ratio"), Err(Rejection::MissingCenterLetter));
        assert_eq!(game.submit("stone"), Err(Rejection::InvalidLetters));
        assert_eq!(game.submit("tore"), Err(Rejection::NotInWordList));
        game.submit("note").unwrap();
        assert_eq!(game.submit("note"), Err(Rejection::AlreadyFound));
        assert_eq!(game.found_words(), ["note"]);
        assert_eq!(game.score(), 1);
    }

    #[test]
    fn test_too_short_wins_over_missing_center() {
        let mut game = game();
        assert_eq!(game.submit("rat"), Err(Rejection::TooShort));
    }

    #[test]
    fn test_scoring_and_completion() {
        let mut game = game();
        assert_eq!(game.max_score(), 1 + 1 + 6 + 15);
        assert!(!game.is_complete());

        let pangram = game.submit("Anterior").unwrap();
        assert_eq!(
            pangram,
            Accepted {
                word: "anterior".to_owned(),
                points: 15,
                pangram: true,
            }
        );
        assert!(!game.submit("orient").unwrap().pangram);
        game.submit("tone").unwrap();
        game.submit("note").unwrap();

        assert_eq!(game.score(), game.max_score());
        assert!(game.is_complete());
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(Rejection::TooShort.to_string(), "word must be at least 4 letters");
        assert_eq!(Rejection::NotInWordList.to_string(), "not in word list");
    }
}
