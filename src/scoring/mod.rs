//! Pure scoring functions over validated words
//!
//! Blank accounting gates which words are playable at all; the score
//! functions value a playable word as placed on the board. Everything here
//! is a pure function of one word, safe to evaluate from any thread.

pub mod blanks;
pub mod score;

pub use blanks::{MAX_BLANKS, blank_deficit, blanks_needed, is_playable};
pub use score::{
    RACK_SIZE, SEVEN_TILE_BONUS, base_score, double_letter_bonus, final_score, final_score_with,
};
