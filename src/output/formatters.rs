//! Formatting utilities for ranked output

use crate::core::Word;
use std::collections::BTreeSet;

/// Deduplicate a group's words and sort them ascending
#[must_use]
pub fn sorted_unique(words: &[Word]) -> Vec<String> {
    words
        .iter()
        .map(Word::text)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Render one normalized score group as a validation line
///
/// Format: `<score>--<word1>-<word2>-...-<wordN>`. Callers pass words that
/// are already deduplicated and sorted, e.g. via [`sorted_unique`].
#[must_use]
pub fn group_line(score: u32, words: &[String]) -> String {
    format!("{score}--{}", words.join("-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn sorted_unique_dedupes_and_sorts() {
        let group = words(&["cat", "act", "cat", "act", "bat"]);
        assert_eq!(sorted_unique(&group), vec!["ACT", "BAT", "CAT"]);
    }

    #[test]
    fn sorted_unique_of_empty_group() {
        assert!(sorted_unique(&[]).is_empty());
    }

    #[test]
    fn group_line_format() {
        let group = sorted_unique(&words(&["cat", "act"]));
        assert_eq!(group_line(16, &group), "16--ACT-CAT");
    }

    #[test]
    fn group_line_single_word() {
        let group = sorted_unique(&words(&["quiz"]));
        assert_eq!(group_line(64, &group), "64--QUIZ");
    }
}
