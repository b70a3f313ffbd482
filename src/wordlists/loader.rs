//! Word list loading utilities
//!
//! Reads candidate corpora and dictionaries from plain text and builds the
//! in-memory collections the pipeline consumes.

use crate::pipeline::Dictionary;
use std::fs;
use std::io;
use std::path::Path;

/// Load whitespace-separated tokens from a text file, in order
///
/// Tokens are kept raw; normalization and filtering happen inside the
/// pipeline.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn words_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.split_whitespace().map(str::to_string).collect())
}

/// Repeat a word sequence `times` times, preserving order
///
/// Used to scale a small corpus into a large workload. Zero repeats yield
/// an empty corpus.
#[must_use]
pub fn repeat_words(words: &[String], times: usize) -> Vec<String> {
    let mut repeated = Vec::with_capacity(words.len() * times);
    for _ in 0..times {
        repeated.extend_from_slice(words);
    }
    repeated
}

/// Build an uppercase membership set from dictionary entries
///
/// # Examples
/// ```
/// use scrabble_rank::wordlists::loader::build_dictionary;
///
/// let dictionary = build_dictionary(["cat", "Dog"]);
/// assert!(dictionary.contains("CAT"));
/// assert!(dictionary.contains("DOG"));
/// ```
#[must_use]
pub fn build_dictionary<I, S>(entries: I) -> Dictionary
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .map(|entry| entry.as_ref().to_uppercase())
        .collect()
}

/// Load a dictionary file into a membership set
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn dictionary_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    Ok(build_dictionary(words_from_file(path)?))
}
