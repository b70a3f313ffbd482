//! Board scoring
//!
//! Values a word as placed across a double-letter and a double-word square,
//! plus a 50-point bonus for laying down a full seven-tile rack.

use crate::core::{Letter, LetterHistogram, Word};

/// Bonus for playing all seven rack tiles at once
pub const SEVEN_TILE_BONUS: u32 = 50;

/// Number of tiles in a full rack
pub const RACK_SIZE: usize = 7;

/// Leading characters the double-letter square can fall under
const HEAD_WINDOW: usize = 3;

/// Trailing characters the double-letter square can fall under
const TAIL_WINDOW: usize = 4;

/// Tile score of a word before any board placement
///
/// Each letter contributes its face value for at most as many occurrences
/// as there are physical tiles; occurrences beyond that are played as
/// blanks, which score zero.
#[must_use]
pub fn base_score(histogram: &LetterHistogram) -> u32 {
    histogram
        .present()
        .map(|(letter, count)| letter.score() * count.min(letter.available()))
        .sum()
}

/// Best single-letter score within reach of the double-letter square
///
/// The square can fall under the first three or the last four characters
/// of the word. The two windows overlap for words shorter than seven
/// characters; the overlap is kept as-is since only the maximum matters.
#[must_use]
pub fn double_letter_bonus(word: &Word) -> u32 {
    let tail_start = word.len().saturating_sub(TAIL_WINDOW);
    word.letters()
        .take(HEAD_WINDOW)
        .chain(word.letters().skip(tail_start))
        .map(Letter::score)
        .max()
        .unwrap_or(0)
}

/// Full board score of a word
///
/// `2 * (base + double-letter bonus)`, plus [`SEVEN_TILE_BONUS`] when the
/// word uses exactly [`RACK_SIZE`] tiles.
///
/// # Examples
/// ```
/// use scrabble_rank::core::Word;
/// use scrabble_rank::scoring::final_score;
///
/// // C3 + A1 + T1 = 5 base, best edge letter is C = 3
/// assert_eq!(final_score(&Word::new("cat").unwrap()), 2 * (5 + 3));
/// ```
#[must_use]
pub fn final_score(word: &Word) -> u32 {
    let histogram = LetterHistogram::of(word);
    final_score_with(word, &histogram)
}

/// Full board score, reusing an already-built histogram
#[must_use]
pub fn final_score_with(word: &Word, histogram: &LetterHistogram) -> u32 {
    let rack_bonus = if word.len() == RACK_SIZE {
        SEVEN_TILE_BONUS
    } else {
        0
    };
    2 * (base_score(histogram) + double_letter_bonus(word)) + rack_bonus
}
