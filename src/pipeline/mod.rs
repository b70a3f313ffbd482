//! Filter-aggregate ranking pipeline
//!
//! Normalizes raw candidate tokens, gates them on dictionary membership and
//! blank feasibility, scores the survivors, and groups them by final score.
//! The per-word path is a pure function with no shared mutable state, so
//! the same pipeline runs on the calling thread or fanned out across a
//! rayon worker pool with identical keys and group membership.

mod groups;

pub use groups::ScoreGroups;

use crate::core::{LetterHistogram, Word};
use crate::scoring::{MAX_BLANKS, blanks_needed, final_score_with};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Membership set of playable dictionary words, stored uppercase
pub type Dictionary = FxHashSet<String>;

/// Execution strategy for the ranking pipeline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecutionMode {
    /// One pass on the calling thread; input order is kept within groups
    Sequential,
    /// Rayon fold/reduce across the worker pool; intra-group order follows
    /// merge order, which presentation masks by sorting
    #[default]
    Parallel,
}

impl ExecutionMode {
    /// Create a mode from a name string
    ///
    /// Supported names: "sequential", "seq", "parallel", "par".
    /// Defaults to parallel if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "sequential" | "seq" => Self::Sequential,
            _ => Self::Parallel,
        }
    }
}

/// Score one raw candidate token
///
/// Returns the validated word and its final score, or `None` when the
/// token is not purely alphabetic, not in the dictionary, or would need
/// more than two blanks. Disqualification is filtering, not an error.
#[must_use]
pub fn score_candidate(raw: &str, dictionary: &Dictionary) -> Option<(u32, Word)> {
    let word = Word::new(raw).ok()?;
    if !dictionary.contains(word.text()) {
        return None;
    }
    let histogram = LetterHistogram::of(&word);
    if blanks_needed(&histogram) > MAX_BLANKS {
        return None;
    }
    let score = final_score_with(&word, &histogram);
    Some((score, word))
}

/// Rank candidate words against a dictionary
///
/// Both modes produce the same score keys and the same member set per key;
/// see [`ExecutionMode`] for the intra-group ordering difference.
///
/// # Examples
/// ```
/// use scrabble_rank::pipeline::{self, Dictionary, ExecutionMode};
///
/// let dictionary: Dictionary =
///     ["CAT", "DOG", "ACT"].iter().map(|s| (*s).to_string()).collect();
/// let candidates = ["cat", "dog", "act", "zzz"];
///
/// let groups = pipeline::rank(&candidates, &dictionary, ExecutionMode::Sequential);
///
/// // CAT and ACT share a histogram, hence a group; ZZZ is not in the dictionary
/// assert_eq!(groups.len(), 2);
/// ```
#[must_use]
pub fn rank<S: AsRef<str> + Sync>(
    candidates: &[S],
    dictionary: &Dictionary,
    mode: ExecutionMode,
) -> ScoreGroups {
    match mode {
        ExecutionMode::Sequential => rank_sequential(candidates, dictionary),
        ExecutionMode::Parallel => rank_parallel(candidates, dictionary),
    }
}

fn rank_sequential<S: AsRef<str>>(candidates: &[S], dictionary: &Dictionary) -> ScoreGroups {
    let mut groups = ScoreGroups::new();
    for raw in candidates {
        if let Some((score, word)) = score_candidate(raw.as_ref(), dictionary) {
            groups.insert(score, word);
        }
    }
    groups
}

fn rank_parallel<S: AsRef<str> + Sync>(candidates: &[S], dictionary: &Dictionary) -> ScoreGroups {
    candidates
        .par_iter()
        .filter_map(|raw| score_candidate(raw.as_ref(), dictionary))
        .fold(ScoreGroups::new, |mut groups, (score, word)| {
            groups.insert(score, word);
            groups
        })
        .reduce(ScoreGroups::new, ScoreGroups::merge)
}
