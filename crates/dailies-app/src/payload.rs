//! JSON payloads printed by the CLI.
//!
//! A puzzle payload is the generated puzzle's own fields plus a description
//! of where its seed came from, flattened into one object:
//!
//! ```json
//! { "date": "2024-01-01", "word": "CRANE", "maxGuesses": 6 }
//! { "mode": "random", "word": "CRANE", "maxGuesses": 6 }
//! ```

use dailies_game::LetterResult;
use dailies_generator::WORD_LENGTH;
use serde::Serialize;

/// How a puzzle's seed was chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Origin {
    /// The daily puzzle of a UTC date.
    Daily {
        /// The date, `YYYY-MM-DD`.
        date: String,
    },
    /// Seeded from the wall clock or an explicit seed.
    Unscheduled {
        /// How the seed was chosen.
        mode: Mode,
        /// The explicit seed, if one was given.
        #[serde(skip_serializing_if = "Option::is_none")]
        seed: Option<u64>,
    },
}

/// Marker for puzzles that are not tied to a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Seeded from the wall clock.
    Random,
    /// Seeded from an explicit `--seed`.
    Seeded,
}

/// A generated puzzle together with its origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PuzzlePayload<T> {
    /// Where the seed came from.
    #[serde(flatten)]
    pub origin: Origin,
    /// The puzzle's fields.
    #[serde(flatten)]
    pub puzzle: T,
}

/// The response of the `check` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckPayload {
    /// One score per guessed letter.
    pub result: [LetterResult; WORD_LENGTH],
}

#[cfg(test)]
mod tests {
    use dailies_core::PuzzleSeed;
    use dailies_generator::WordleGenerator;
    use serde_json::json;

    use super::*;

    fn word() -> dailies_generator::DailyWord {
        WordleGenerator::with_words(&["crane"])
            .generate_with_seed(PuzzleSeed::new(0))
            .unwrap()
    }

    #[test]
    fn test_daily_payload_carries_date() {
        let payload = PuzzlePayload {
            origin: Origin::Daily {
                date: "2024-01-01".to_owned(),
            },
            puzzle: word(),
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "date": "2024-01-01", "word": "CRANE", "maxGuesses": 6 })
        );
    }

    #[test]
    fn test_random_payload_carries_mode() {
        let payload = PuzzlePayload {
            origin: Origin::Unscheduled {
                mode: Mode::Random,
                seed: None,
            },
            puzzle: word(),
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "mode": "random", "word": "CRANE", "maxGuesses": 6 })
        );

        let payload = PuzzlePayload {
            origin: Origin::Unscheduled {
                mode: Mode::Seeded,
                seed: Some(42),
            },
            puzzle: word(),
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "mode": "seeded", "seed": 42, "word": "CRANE", "maxGuesses": 6 })
        );
    }

    #[test]
    fn test_check_payload() {
        let payload = CheckPayload {
            result: [
                LetterResult::Correct,
                LetterResult::Present,
                LetterResult::Absent,
                LetterResult::Absent,
                LetterResult::Correct,
            ],
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "result": ["correct", "present", "absent", "absent", "correct"] })
        );
    }
}
