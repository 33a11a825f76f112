//! Built-in word lists.
//!
//! The lists are embedded at compile time and parsed on first use into
//! process-wide, read-only slices. Concurrent generators read them without
//! synchronization.
//!
//! The list files hold one lowercase word per line. Blank lines and lines
//! starting with `#` are skipped.

use std::sync::LazyLock;

static SPELLING_BEE_WORDS: LazyLock<Vec<&'static str>> =
    LazyLock::new(|| parse_word_list(include_str!("../words/spelling_bee.txt")));

static FIVE_LETTER_WORDS: LazyLock<Vec<&'static str>> =
    LazyLock::new(|| parse_word_list(include_str!("../words/five_letter.txt")));

/// Returns the candidate words for the spelling bee, in list order.
#[must_use]
pub fn spelling_bee_words() -> &'static [&'static str] {
    &SPELLING_BEE_WORDS
}

/// Returns the candidate answers for the five-letter word game, in list order.
#[must_use]
pub fn five_letter_words() -> &'static [&'static str] {
    &FIVE_LETTER_WORDS
}

fn parse_word_list(text: &'static str) -> Vec<&'static str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}
