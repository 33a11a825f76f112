use dailies_core::{CROSSWORD_SIZE, CrosswordGrid, LetterGrid, Position, PuzzleRng, PuzzleSeed};
use serde::Serialize;

use crate::GenerationError;

/// A word and the clue that describes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrosswordEntry {
    /// The answer, in uppercase.
    pub word: &'static str,
    /// The clue shown to the player.
    pub clue: &'static str,
}

impl CrosswordEntry {
    /// Creates an entry.
    #[must_use]
    pub const fn new(word: &'static str, clue: &'static str) -> Self {
        Self { word, clue }
    }
}

/// The built-in word bank.
pub const CROSSWORD_BANK: [CrosswordEntry; 12] = [
    CrosswordEntry::new("HELLO", "A greeting"),
    CrosswordEntry::new("WORLD", "Our planet"),
    CrosswordEntry::new("GAMES", "Activities for fun"),
    CrosswordEntry::new("PUZZLE", "Brain teaser"),
    CrosswordEntry::new("CODE", "Programming instructions"),
    CrosswordEntry::new("WORD", "Unit of language"),
    CrosswordEntry::new("PLAY", "Have fun"),
    CrosswordEntry::new("BRAIN", "Thinking organ"),
    CrosswordEntry::new("SOLVE", "Find the answer"),
    CrosswordEntry::new("LOGIC", "Reasoning"),
    CrosswordEntry::new("DAILY", "Every day"),
    CrosswordEntry::new("CROSS", "Intersect"),
];

/// The orientation of a crossword word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left to right along a row.
    Across,
    /// Top to bottom along a column.
    Down,
}

impl Direction {
    fn step(self, anchor: Position, offset: u8) -> Option<Position> {
        match self {
            Self::Across => anchor.right(offset, CROSSWORD_SIZE),
            Self::Down => anchor.down(offset, CROSSWORD_SIZE),
        }
    }
}

/// Where the generator stamps each drawn word, in placement order.
const PLACEMENTS: [(Direction, Position); 3] = [
    (Direction::Across, Position::new(2, 1)),
    (Direction::Down, Position::new(1, 3)),
    (Direction::Across, Position::new(5, 2)),
];

/// A numbered clue anchored at the first cell of its word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Clue {
    /// The clue number, assigned in placement order starting at 1.
    pub number: u32,
    /// The clue text.
    pub clue: String,
    /// Row of the word's first cell.
    pub row: u8,
    /// Column of the word's first cell.
    pub col: u8,
    /// The orientation of the word.
    #[serde(skip)]
    pub direction: Direction,
}

impl Clue {
    /// Returns the position of the word's first cell.
    #[must_use]
    pub const fn anchor(&self) -> Position {
        Position::new(self.row, self.col)
    }
}

/// Clues split by orientation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Clues {
    /// Clues for across words, in placement order.
    pub across: Vec<Clue>,
    /// Clues for down words, in placement order.
    pub down: Vec<Clue>,
}

impl Clues {
    /// Returns all clues ordered by number.
    pub fn iter(&self) -> impl Iterator<Item = &Clue> {
        let mut all: Vec<_> = self.across.iter().chain(&self.down).collect();
        all.sort_by_key(|clue| clue.number);
        all.into_iter()
    }
}

/// A generated crossword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedCrossword {
    /// The grid shown to the player: open cells are to be filled in.
    pub grid: CrosswordGrid,
    /// The answers for every open cell.
    pub solution: LetterGrid,
    /// The clues for the placed words.
    pub clues: Clues,
    /// The seed that produced this crossword.
    #[serde(skip)]
    pub seed: PuzzleSeed,
}

/// Generates small fixed-layout crosswords.
///
/// Three words are drawn from the bank (draws are independent, so a word may
/// repeat) and stamped at fixed anchors: across at (2, 1), down at (1, 3),
/// and across at (5, 2). A word that would run past the edge of the 8×8 grid
/// is cut short.
///
/// The layout is not a search. Placements do not check each other: where two
/// words share a cell, the later placement's letter wins. The first two
/// anchors always share (2, 3).
///
/// # Examples
///
/// ```
/// use dailies_core::PuzzleSeed;
/// use dailies_generator::CrosswordGenerator;
///
/// let crossword = CrosswordGenerator::new().generate_with_seed(PuzzleSeed::new(1))?;
///
/// assert_eq!(crossword.clues.across.len(), 2);
/// assert_eq!(crossword.clues.down.len(), 1);
/// assert!(crossword.grid.is_consistent_with(&crossword.solution));
/// # Ok::<(), dailies_generator::GenerationError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CrosswordGenerator<'a> {
    bank: &'a [CrosswordEntry],
}

impl Default for CrosswordGenerator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl CrosswordGenerator<'static> {
    /// Creates a generator drawing from [`CROSSWORD_BANK`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_bank(&CROSSWORD_BANK)
    }
}

impl<'a> CrosswordGenerator<'a> {
    /// Creates a generator drawing from a custom bank.
    #[must_use]
    pub const fn with_bank(bank: &'a [CrosswordEntry]) -> Self {
        Self { bank }
    }

    /// Generates a crossword seeded from the wall clock.
    ///
    /// # Errors
    ///
    /// See [`CrosswordGenerator::generate_with_seed`].
    pub fn generate(&self) -> Result<GeneratedCrossword, GenerationError> {
        self.generate_with_seed(PuzzleSeed::from_wall_clock())
    }

    /// Generates the crossword determined by `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::EmptyWordList`] if the bank is empty.
    pub fn generate_with_seed(
        &self,
        seed: PuzzleSeed,
    ) -> Result<GeneratedCrossword, GenerationError> {
        if self.bank.is_empty() {
            return Err(GenerationError::EmptyWordList);
        }
        let mut rng = PuzzleRng::new(seed);

        let mut grid = CrosswordGrid::blocked();
        let mut solution = LetterGrid::blocked();
        let mut clues = Clues::default();

        for ((direction, anchor), number) in PLACEMENTS.into_iter().zip(1..) {
            let entry = self.bank[rng.next_int(0, self.bank.len() - 1)];
            let written = place_word(&mut grid, &mut solution, entry.word, anchor, direction);
            log::debug!(
                "crossword seed={seed}: {number} {direction:?} {:?} at {anchor}, {written} letters",
                entry.word
            );

            let clue = Clue {
                number,
                clue: entry.clue.to_owned(),
                row: anchor.row(),
                col: anchor.col(),
                direction,
            };
            match direction {
                Direction::Across => clues.across.push(clue),
                Direction::Down => clues.down.push(clue),
            }
        }

        Ok(GeneratedCrossword {
            grid,
            solution,
            clues,
            seed,
        })
    }
}

/// Writes `word` from `anchor` in `direction`, stopping at the grid edge.
///
/// Returns the number of letters written.
fn place_word(
    grid: &mut CrosswordGrid,
    solution: &mut LetterGrid,
    word: &str,
    anchor: Position,
    direction: Direction,
) -> usize {
    let mut written = 0;
    for (offset, letter) in (0..=u8::MAX).zip(word.chars()) {
        let Some(pos) = direction.step(anchor, offset) else {
            break;
        };
        solution.set(pos, letter.to_ascii_uppercase());
        grid.open(pos);
        written += 1;
    }
    written
}

#[cfg(test)]
mod tests {
    use dailies_core::{CrosswordCell, letter_grid};
    use proptest::prelude::*;

    use super::*;

    fn generate(seed: u64) -> GeneratedCrossword {
        CrosswordGenerator::new()
            .generate_with_seed(PuzzleSeed::new(seed))
            .unwrap()
    }

    #[test]
    fn test_is_deterministic() {
        let seed = PuzzleSeed::from_date("2024-01-01");
        let generator = CrosswordGenerator::new();
        assert_eq!(
            generator.generate_with_seed(seed).unwrap(),
            generator.generate_with_seed(seed).unwrap()
        );
    }

    #[test]
    fn test_daily_output_is_pinned() {
        // 2024-01-01 draws BRAIN, HELLO, WORD.
        let crossword = CrosswordGenerator::new()
            .generate_with_seed(PuzzleSeed::from_date("2024-01-01"))
            .unwrap();
        let clues: Vec<_> = crossword.clues.iter().map(|c| c.clue.as_str()).collect();
        assert_eq!(clues, ["Thinking organ", "A greeting", "Unit of language"]);
        assert_eq!(
            crossword.solution.to_string(),
            [
                "########", "###H####", "#BREIN##", "###L####", "###L####", "##WORD##",
                "########", "########",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_clue_numbering_follows_placement_order() {
        let crossword = generate(42);
        let across: Vec<_> = crossword.clues.across.iter().map(|c| c.number).collect();
        let down: Vec<_> = crossword.clues.down.iter().map(|c| c.number).collect();
        assert_eq!(across, [1, 3]);
        assert_eq!(down, [2]);

        assert_eq!(crossword.clues.across[0].anchor(), Position::new(2, 1));
        assert_eq!(crossword.clues.down[0].anchor(), Position::new(1, 3));
        assert_eq!(crossword.clues.across[1].anchor(), Position::new(5, 2));
        assert!(crossword.clues.down.iter().all(|c| c.direction == Direction::Down));

        let numbers: Vec<_> = crossword.clues.iter().map(|c| c.number).collect();
        assert_eq!(numbers, [1, 2, 3]);
    }

    #[test]
    fn test_clues_come_from_bank() {
        let crossword = generate(9);
        for clue in crossword.clues.iter() {
            assert!(CROSSWORD_BANK.iter().any(|entry| entry.clue == clue.clue));
        }
    }

    #[test]
    fn test_long_words_are_truncated_and_overwritten() {
        static BANK: [CrosswordEntry; 1] = [CrosswordEntry::new("ABCDEFGHIJ", "Letters")];
        let crossword = CrosswordGenerator::with_bank(&BANK)
            .generate_with_seed(PuzzleSeed::new(0))
            .unwrap();
        let solution = &crossword.solution;

        // Across at (2, 1) runs to the edge: 7 letters.
        assert_eq!(solution.get(Position::new(2, 1)), Some('A'));
        assert_eq!(solution.get(Position::new(2, 7)), Some('G'));
        // Down at (1, 3) overwrote the across letter at (2, 3).
        assert_eq!(solution.get(Position::new(2, 3)), Some('B'));
        assert_eq!(solution.get(Position::new(7, 3)), Some('G'));
        // Across at (5, 2) overwrote the down letter at (5, 3).
        assert_eq!(solution.get(Position::new(5, 3)), Some('B'));
        assert_eq!(solution.get(Position::new(5, 7)), Some('F'));

        assert!(crossword.grid.is_consistent_with(solution));
        assert_eq!(crossword.grid.count_open(), 7 + 7 + 6 - 2);
    }

    #[test]
    fn test_empty_bank_is_rejected() {
        static BANK: [CrosswordEntry; 0] = [];
        assert_eq!(
            CrosswordGenerator::with_bank(&BANK).generate_with_seed(PuzzleSeed::new(0)),
            Err(GenerationError::EmptyWordList)
        );
    }

    #[test]
    fn test_lowercase_words_are_uppercased() {
        let bank = vec![CrosswordEntry::new("abc", "Start")];
        let crossword = CrosswordGenerator::with_bank(&bank)
            .generate_with_seed(PuzzleSeed::new(0))
            .unwrap();
        assert_eq!(crossword.solution.get(Position::new(2, 1)), Some('A'));
    }

    proptest! {
        #[test]
        fn grids_share_shape(seed in any::<u64>()) {
            let crossword = generate(seed);
            prop_assert!(crossword.grid.is_consistent_with(&crossword.solution));
            for pos in letter_grid::positions() {
                if crossword.grid[pos] == CrosswordCell::Open {
                    let letter = crossword.solution.get(pos).unwrap();
                    prop_assert!(letter.is_ascii_uppercase());
                }
            }
            // Row 0 and column 0 are never reached by any anchor.
            prop_assert!((0..8).all(|i| crossword.solution.get(Position::new(0, i)).is_none()));
            prop_assert!((0..8).all(|i| crossword.solution.get(Position::new(i, 0)).is_none()));
        }
    }
}
