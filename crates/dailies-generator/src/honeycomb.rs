use dailies_core::{LetterSet, PuzzleSeed};
use serde::Serialize;

use crate::word_bank;

/// Minimum length of a valid spelling bee word.
pub const MIN_WORD_LENGTH: usize = 4;

/// A center letter and its six surrounding letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HoneycombLetters {
    /// The letter every valid word must contain.
    pub center: char,
    /// The six letters around the center, in display order.
    pub outer: [char; 6],
}

impl HoneycombLetters {
    /// Creates a letter set.
    #[must_use]
    pub const fn new(center: char, outer: [char; 6]) -> Self {
        Self { center, outer }
    }

    /// Returns all seven letters as a set.
    #[must_use]
    pub fn allowed(&self) -> LetterSet {
        std::iter::once(self.center).chain(self.outer).collect()
    }

    /// Returns `true` if `word` is a valid word for these letters.
    ///
    /// A valid word has at least [`MIN_WORD_LENGTH`] letters, contains the
    /// center letter, and uses no letter outside the seven.
    #[must_use]
    pub fn admits(&self, word: &str) -> bool {
        if word.chars().count() < MIN_WORD_LENGTH {
            return false;
        }
        LetterSet::from_word(word)
            .is_some_and(|letters| letters.contains(self.center) && letters.is_subset(self.allowed()))
    }

    /// Returns `true` if `word` is valid and uses all seven letters.
    #[must_use]
    pub fn is_pangram(&self, word: &str) -> bool {
        self.admits(word) && LetterSet::from_word(word).is_some_and(|letters| letters.len() == 7)
    }
}

/// The fixed letter sets, selected by `seed % 10`.
pub const LETTER_SETS: [HoneycombLetters; 10] = [
    HoneycombLetters::new('e', ['a', 'r', 't', 'i', 'n', 'o']),
    HoneycombLetters::new('a', ['n', 't', 'i', 'o', 'r', 's']),
    HoneycombLetters::new('i', ['n', 't', 'a', 'o', 'r', 'c']),
    HoneycombLetters::new('o', ['n', 't', 'a', 'i', 'r', 'd']),
    HoneycombLetters::new('t', ['a', 'r', 'e', 'i', 'n', 'o']),
    HoneycombLetters::new('n', ['a', 'r', 't', 'i', 'o', 'e']),
    HoneycombLetters::new('r', ['a', 't', 'e', 'i', 'n', 'o']),
    HoneycombLetters::new('s', ['a', 't', 'e', 'i', 'n', 'o']),
    HoneycombLetters::new('l', ['a', 't', 'e', 'i', 'n', 'o']),
    HoneycombLetters::new('c', ['a', 't', 'e', 'i', 'n', 'o']),
];

/// A generated spelling bee puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedHoneycomb {
    /// The letter every word must contain.
    pub center_letter: char,
    /// The six surrounding letters.
    pub outer_letters: [char; 6],
    /// Every bank word the letters admit, in bank order.
    pub valid_words: Vec<String>,
    /// The valid words that use all seven letters, in bank order.
    pub pangrams: Vec<String>,
    /// The seed that produced this puzzle.
    #[serde(skip)]
    pub seed: PuzzleSeed,
}

impl GeneratedHoneycomb {
    /// Returns the letters of this puzzle.
    #[must_use]
    pub const fn letters(&self) -> HoneycombLetters {
        HoneycombLetters::new(self.center_letter, self.outer_letters)
    }
}

/// Generates spelling bee puzzles.
///
/// The seed picks one of the ten [`LETTER_SETS`] directly by `seed % 10`; no
/// random draws are involved, so only ten distinct puzzles exist. The word
/// bank is then filtered in order: a word is kept if the letters admit it
/// (see [`HoneycombLetters::admits`]), and kept words with exactly seven
/// distinct letters are pangrams.
///
/// # Examples
///
/// ```
/// use dailies_core::PuzzleSeed;
/// use dailies_generator::HoneycombGenerator;
///
/// let bank = ["rotation", "anterior", "ant", "tone", "quiz"];
/// let generator = HoneycombGenerator::with_bank(&bank);
/// let puzzle = generator.generate_with_seed(PuzzleSeed::new(10));
///
/// assert_eq!(puzzle.center_letter, 'e');
/// assert_eq!(puzzle.valid_words, ["anterior", "tone"]);
/// assert_eq!(puzzle.pangrams, ["anterior"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HoneycombGenerator<'a> {
    bank: &'a [&'a str],
}

impl Default for HoneycombGenerator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl HoneycombGenerator<'static> {
    /// Creates a generator filtering the built-in word bank.
    #[must_use]
    pub fn new() -> Self {
        Self::with_bank(word_bank::spelling_bee_words())
    }
}

impl<'a> HoneycombGenerator<'a> {
    /// Creates a generator filtering a custom word bank.
    #[must_use]
    pub const fn with_bank(bank: &'a [&'a str]) -> Self {
        Self { bank }
    }

    /// Generates a puzzle seeded from the wall clock.
    #[must_use]
    pub fn generate(&self) -> GeneratedHoneycomb {
        self.generate_with_seed(PuzzleSeed::from_wall_clock())
    }

    /// Generates the puzzle determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedHoneycomb {
        let letters = letters_for_seed(seed);

        let valid_words: Vec<String> = self
            .bank
            .iter()
            .filter(|word| letters.admits(word))
            .map(|&word| word.to_owned())
            .collect();
        let pangrams: Vec<String> = valid_words
            .iter()
            .filter(|word| letters.is_pangram(word))
            .cloned()
            .collect();
        log::debug!(
            "honeycomb seed={seed}: center {:?}, {} words, {} pangrams",
            letters.center,
            valid_words.len(),
            pangrams.len()
        );

        GeneratedHoneycomb {
            center_letter: letters.center,
            outer_letters: letters.outer,
            valid_words,
            pangrams,
            seed,
        }
    }
}

fn letters_for_seed(seed: PuzzleSeed) -> HoneycombLetters {
    let len = LETTER_SETS.len() as u64;
    // The remainder is below 10.
    #[expect(clippy::cast_possible_truncation)]
    let index = (seed.value() % len) as usize;
    LETTER_SETS[index]
}
