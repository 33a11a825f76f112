//! Puzzle seeds and how they are derived.
//!
//! A [`PuzzleSeed`] fully determines a generated puzzle. Seeds come from one of
//! two places:
//!
//! - **Daily puzzles** hash the calendar date with [`PuzzleSeed::from_date`].
//!   Dates are always taken in UTC ([`current_date_string`]), so every server
//!   agrees on what "today" is regardless of its local timezone.
//! - **Random puzzles** use the wall clock in milliseconds
//!   ([`PuzzleSeed::from_wall_clock`]).
//!
//! # Examples
//!
//! ```
//! use dailies_core::PuzzleSeed;
//!
//! let a = PuzzleSeed::from_date("2024-01-01");
//! let b = PuzzleSeed::from_date("2024-01-01");
//! assert_eq!(a, b);
//!
//! let parsed: PuzzleSeed = "12345".parse()?;
//! assert_eq!(parsed.value(), 12345);
//! # Ok::<(), dailies_core::SeedParseError>(())
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use chrono::{NaiveDate, Utc};

/// Format of canonical date strings.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A seed that fully determines a generated puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzleSeed(u64);

impl PuzzleSeed {
    /// Creates a seed from a raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw seed value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Derives the seed of a daily puzzle from its date string.
    ///
    /// The hash runs over the UTF-16 code units of `date`, starting from 0 and
    /// computing `hash = hash * 31 + unit` with 32-bit signed wrap-around. The
    /// seed is the absolute value of the final hash. The mapping never changes
    /// between runs or releases.
    ///
    /// # Examples
    ///
    /// ```
    /// use dailies_core::PuzzleSeed;
    ///
    /// assert_eq!(PuzzleSeed::from_date("").value(), 0);
    /// assert_eq!(PuzzleSeed::from_date("a").value(), 97);
    /// assert_eq!(PuzzleSeed::from_date("ab").value(), 97 * 31 + 98);
    /// ```
    #[must_use]
    pub fn from_date(date: &str) -> Self {
        let hash = date.encode_utf16().fold(0i32, |hash, unit| {
            hash.wrapping_mul(31).wrapping_add(i32::from(unit))
        });
        Self(u64::from(hash.unsigned_abs()))
    }

    /// Derives the seed of a daily puzzle from a calendar date.
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        Self::from_date(&date_string(date))
    }

    /// Derives a seed from the current wall-clock time in milliseconds.
    ///
    /// Two calls within the same millisecond return the same seed.
    #[must_use]
    pub fn from_wall_clock() -> Self {
        let millis = Utc::now().timestamp_millis();
        Self(u64::try_from(millis).unwrap_or_default())
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Parses a seed from a non-negative decimal integer.
impl FromStr for PuzzleSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SeedParseError::InvalidSeed {
            input: s.to_owned(),
        };
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        s.parse().map(Self).map_err(|_| invalid())
    }
}

impl From<u64> for PuzzleSeed {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Formats `date` as a canonical `YYYY-MM-DD` string.
#[must_use]
pub fn date_string(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Returns today's date in UTC as a canonical `YYYY-MM-DD` string.
#[must_use]
pub fn current_date_string() -> String {
    date_string(Utc::now().date_naive())
}

/// Parses a canonical `YYYY-MM-DD` date string.
///
/// # Errors
///
/// Returns [`SeedParseError::InvalidDate`] if `s` is not a valid date in that format.
pub fn parse_date(s: &str) -> Result<NaiveDate, SeedParseError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| SeedParseError::InvalidDate {
        input: s.to_owned(),
    })
}

/// Errors produced when reading a seed or a date from user input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The seed was not a non-negative integer that fits in 64 bits.
    #[display("invalid seed {input:?}: expected a non-negative integer")]
    InvalidSeed {
        /// The rejected input.
        input: String,
    },
    /// The date was not a valid `YYYY-MM-DD` date.
    #[display("invalid date {input:?}: expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input.
        input: String,
    },
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_date_seed_is_stable() {
        assert_eq!(
            PuzzleSeed::from_date("2024-01-01"),
            PuzzleSeed::from_date("2024-01-01")
        );
        assert_ne!(
            PuzzleSeed::from_date("2024-01-01"),
            PuzzleSeed::from_date("2024-01-02")
        );
    }

    #[test]
    fn test_date_seed_known_values() {
        assert_eq!(PuzzleSeed::from_date("2024-01-01").value(), 613_341_632);
        assert_eq!(PuzzleSeed::from_date("2024-12-25").value(), 612_388_254);
    }

    #[test]
    fn test_date_seeds_rarely_collide_over_a_year() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let seeds: HashSet<_> = start
            .iter_days()
            .take(366)
            .map(PuzzleSeed::for_date)
            .collect();
        assert!(seeds.len() > 360);
    }

    #[test]
    fn test_date_string_format() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(date_string(date), "2024-03-07");
        assert_eq!(parse_date("2024-03-07"), Ok(date));
        assert!(parse_date("03/07/2024").is_err());
        assert_eq!(current_date_string().len(), 10);
    }

    #[test]
    fn test_parse_seed() {
        assert_eq!("0".parse(), Ok(PuzzleSeed::new(0)));
        assert_eq!(
            "18446744073709551615".parse(),
            Ok(PuzzleSeed::new(u64::MAX))
        );
        for input in ["", "-1", "+1", "1.5", "abc", "18446744073709551616"] {
            assert_eq!(
                input.parse::<PuzzleSeed>(),
                Err(SeedParseError::InvalidSeed {
                    input: input.to_owned()
                })
            );
        }
        assert_eq!(PuzzleSeed::new(42).to_string(), "42");
    }

    #[test]
    fn test_wall_clock_seed_is_recent() {
        // 2020-01-01T00:00:00Z in milliseconds.
        assert!(PuzzleSeed::from_wall_clock().value() > 1_577_836_800_000);
    }
}
