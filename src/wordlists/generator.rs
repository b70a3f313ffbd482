//! Synthetic candidate generation
//!
//! Produces pseudo-random filler words so a small corpus can be padded into
//! a large workload. Generation is seeded, so a given seed always produces
//! the same corpus.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Shortest generated word
pub const MIN_LENGTH: usize = 2;

/// Longest generated word
pub const MAX_LENGTH: usize = 21;

/// Seed used when the caller does not supply one
pub const DEFAULT_SEED: u64 = 7;

/// Generate `count` random uppercase words
///
/// Lengths are uniform in [`MIN_LENGTH`]`..=`[`MAX_LENGTH`]. Most output is
/// gibberish that the dictionary filter discards; its job is to exercise
/// the pipeline, not to score.
///
/// # Examples
/// ```
/// use scrabble_rank::wordlists::generator::{DEFAULT_SEED, synthetic_words};
///
/// let words = synthetic_words(10, DEFAULT_SEED);
/// assert_eq!(words.len(), 10);
/// assert_eq!(words, synthetic_words(10, DEFAULT_SEED));
/// ```
#[must_use]
pub fn synthetic_words(count: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let length = rng.random_range(MIN_LENGTH..=MAX_LENGTH);
            (0..length)
                .map(|_| char::from(b'A' + rng.random_range(0..26)))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_count() {
        assert_eq!(synthetic_words(0, DEFAULT_SEED).len(), 0);
        assert_eq!(synthetic_words(25, DEFAULT_SEED).len(), 25);
    }

    #[test]
    fn same_seed_same_words() {
        assert_eq!(synthetic_words(50, 7), synthetic_words(50, 7));
    }

    #[test]
    fn different_seeds_differ() {
        assert_ne!(synthetic_words(50, 7), synthetic_words(50, 8));
    }

    #[test]
    fn lengths_stay_in_bounds() {
        for word in synthetic_words(200, DEFAULT_SEED) {
            assert!(word.len() >= MIN_LENGTH);
            assert!(word.len() <= MAX_LENGTH);
        }
    }

    #[test]
    fn output_is_uppercase_alphabetic() {
        for word in synthetic_words(200, DEFAULT_SEED) {
            assert!(word.chars().all(|c| c.is_ascii_uppercase()));
        }
    }
}
