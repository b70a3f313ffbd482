//! Blank-tile accounting
//!
//! Each occurrence of a letter beyond its physical tile count must be
//! covered by a wildcard ("blank") tile, and a single word may consume at
//! most two of them. Words needing more are unplayable and never reach the
//! scoring stage.

use crate::core::{Letter, LetterHistogram, Word};

/// Maximum wildcard tiles a single word may consume
pub const MAX_BLANKS: u32 = 2;

/// Blanks needed to play `count` occurrences of one letter
#[inline]
#[must_use]
pub const fn blank_deficit(letter: Letter, count: u32) -> u32 {
    count.saturating_sub(letter.available())
}

/// Total blanks needed to play every letter of a word
#[must_use]
pub fn blanks_needed(histogram: &LetterHistogram) -> u32 {
    histogram
        .present()
        .map(|(letter, count)| blank_deficit(letter, count))
        .sum()
}

/// Whether a word can be laid out with the available tiles plus at most
/// two blanks
///
/// # Examples
/// ```
/// use scrabble_rank::core::Word;
/// use scrabble_rank::scoring::is_playable;
///
/// // Only one Z tile exists, so ZZZ burns both blanks but ZZZZ would need a third
/// assert!(is_playable(&Word::new("zzz").unwrap()));
/// assert!(!is_playable(&Word::new("zzzz").unwrap()));
/// ```
#[must_use]
pub fn is_playable(word: &Word) -> bool {
    blanks_needed(&LetterHistogram::of(word)) <= MAX_BLANKS
}
