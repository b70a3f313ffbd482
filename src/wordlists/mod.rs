//! Word sources for the ranking pipeline
//!
//! Embedded default lists, file loading, input repetition, and synthetic
//! filler generation. Everything here is I/O glue; the pipeline itself
//! consumes plain in-memory collections.

mod embedded;
pub mod generator;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, SAMPLE_CORPUS, SAMPLE_CORPUS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn corpus_count_matches_const() {
        assert_eq!(SAMPLE_CORPUS.len(), SAMPLE_CORPUS_COUNT);
    }

    #[test]
    fn dictionary_entries_are_uppercase_words() {
        for &word in DICTIONARY {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Entry '{word}' is not uppercase A-Z"
            );
        }
    }

    #[test]
    fn dictionary_covers_sample_corpus_words() {
        // Spot-check that the default run has material to rank
        for word in ["QUESTION", "SLEEP", "FORTUNE", "TROUBLES"] {
            assert!(
                DICTIONARY.contains(&word),
                "Dictionary missing corpus word '{word}'"
            );
        }
    }

    #[test]
    fn corpus_is_nonempty_raw_text() {
        assert!(!SAMPLE_CORPUS.is_empty());
        // Tokens are raw: at least one carries punctuation for the
        // normalization stage to reject
        assert!(SAMPLE_CORPUS.iter().any(|t| !t.chars().all(char::is_alphanumeric)));
    }
}
