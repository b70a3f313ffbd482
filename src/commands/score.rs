//! Single-word scoring command
//!
//! Validates one word and reports every intermediate scoring quantity the
//! pipeline would compute for it.

use crate::core::{LetterHistogram, Word};
use crate::pipeline::Dictionary;
use crate::scoring::{
    MAX_BLANKS, base_score, blanks_needed, double_letter_bonus, final_score_with,
};

/// Scoring breakdown for a single word
pub struct ScoreBreakdown {
    pub word: String,
    pub length: usize,
    pub distinct_letters: usize,
    pub blanks_needed: u32,
    pub playable: bool,
    pub base_score: u32,
    pub bonus: u32,
    pub final_score: u32,
    /// Dictionary membership, when a dictionary was supplied
    pub in_dictionary: Option<bool>,
}

/// Break down the score of a word
///
/// # Errors
///
/// Returns an error if the word is empty or contains characters outside
/// A-Z after uppercasing.
pub fn score_breakdown(
    word: &str,
    dictionary: Option<&Dictionary>,
) -> Result<ScoreBreakdown, String> {
    let word = Word::new(word).map_err(|e| format!("Invalid word: {e}"))?;
    let histogram = LetterHistogram::of(&word);
    let blanks = blanks_needed(&histogram);

    Ok(ScoreBreakdown {
        length: word.len(),
        distinct_letters: histogram.distinct(),
        blanks_needed: blanks,
        playable: blanks <= MAX_BLANKS,
        base_score: base_score(&histogram),
        bonus: double_letter_bonus(&word),
        final_score: final_score_with(&word, &histogram),
        in_dictionary: dictionary.map(|d| d.contains(word.text())),
        word: word.text().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::build_dictionary;

    #[test]
    fn breakdown_for_simple_word() {
        let breakdown = score_breakdown("cat", None).unwrap();

        assert_eq!(breakdown.word, "CAT");
        assert_eq!(breakdown.length, 3);
        assert_eq!(breakdown.distinct_letters, 3);
        assert_eq!(breakdown.blanks_needed, 0);
        assert!(breakdown.playable);
        assert_eq!(breakdown.base_score, 5);
        assert_eq!(breakdown.bonus, 3);
        assert_eq!(breakdown.final_score, 16);
        assert_eq!(breakdown.in_dictionary, None);
    }

    #[test]
    fn breakdown_reports_membership_when_given() {
        let dictionary = build_dictionary(["CAT"]);

        let hit = score_breakdown("cat", Some(&dictionary)).unwrap();
        assert_eq!(hit.in_dictionary, Some(true));

        let miss = score_breakdown("zzz", Some(&dictionary)).unwrap();
        assert_eq!(miss.in_dictionary, Some(false));
    }

    #[test]
    fn breakdown_flags_unplayable_words() {
        let breakdown = score_breakdown("zzzz", None).unwrap();
        assert_eq!(breakdown.blanks_needed, 3);
        assert!(!breakdown.playable);
        // Still scored: the gate is reported, not enforced here
        assert_eq!(breakdown.base_score, 10);
    }

    #[test]
    fn breakdown_rejects_invalid_input() {
        assert!(score_breakdown("", None).is_err());
        assert!(score_breakdown("don't", None).is_err());
    }

    #[test]
    fn breakdown_includes_rack_bonus() {
        let breakdown = score_breakdown("jukebox", None).unwrap();
        assert_eq!(breakdown.length, 7);
        assert_eq!(breakdown.final_score, 2 * (27 + 8) + 50);
    }
}
