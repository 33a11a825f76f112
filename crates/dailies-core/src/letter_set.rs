//! A set of lowercase ASCII letters.

use std::fmt::{self, Debug};

/// A set of lowercase ASCII letters `a`-`z`, represented as a bitset.
///
/// Bit 0 stands for `a`, bit 25 for `z`.
///
/// # Examples
///
/// ```
/// use dailies_core::LetterSet;
///
/// let allowed = LetterSet::from_iter("eartino".chars());
/// let word = LetterSet::from_word("ration").unwrap();
///
/// assert!(word.is_subset(allowed));
/// assert_eq!(word.len(), 6);
/// assert!(LetterSet::from_word("Ration").is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet {
    bits: u32,
}

impl LetterSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Collects the distinct letters of `word`.
    ///
    /// Returns `None` if `word` contains anything other than `a`-`z`.
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        word.chars().try_fold(Self::EMPTY, |mut set, ch| {
            let bit = Self::bit(ch)?;
            set.bits |= bit;
            Some(set)
        })
    }

    fn bit(ch: char) -> Option<u32> {
        ch.is_ascii_lowercase()
            .then(|| 1 << (u32::from(ch) - u32::from('a')))
    }

    /// Adds `ch` to the set.
    ///
    /// # Panics
    ///
    /// Panics if `ch` is not a lowercase ASCII letter.
    pub fn insert(&mut self, ch: char) {
        let bit = Self::bit(ch)
            .unwrap_or_else(|| panic!("Letter must be between 'a' and 'z', got {ch:?}"));
        self.bits |= bit;
    }

    /// Returns `true` if `ch` is in the set.
    ///
    /// Characters outside `a`-`z` are never members.
    #[must_use]
    pub fn contains(self, ch: char) -> bool {
        Self::bit(ch).is_some_and(|bit| self.bits & bit != 0)
    }

    /// Returns the number of letters in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set has no letters.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns `true` if every letter of `self` is also in `other`.
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.bits & !other.bits == 0
    }

    /// Returns an iterator over the letters in alphabetical order.
    pub fn iter(self) -> impl Iterator<Item = char> {
        ('a'..='z').filter(move |&ch| self.contains(ch))
    }
}

impl FromIterator<char> for LetterSet {
    /// # Panics
    ///
    /// Panics if any item is not a lowercase ASCII letter.
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut set = Self::new();
        for ch in iter {
            set.insert(ch);
        }
        set
    }
}

impl Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
