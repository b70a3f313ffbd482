//! Corpus ranking command
//!
//! Runs the ranking pipeline over an assembled candidate corpus and
//! normalizes the best score groups for presentation.

use crate::output::formatters::sorted_unique;
use crate::pipeline::{self, Dictionary, ExecutionMode};
use std::time::{Duration, Instant};

/// Configuration for a ranking run
pub struct RankConfig {
    pub mode: ExecutionMode,
    /// Number of score groups to keep, highest first
    pub top: usize,
}

impl RankConfig {
    #[must_use]
    pub const fn new(mode: ExecutionMode) -> Self {
        Self { mode, top: 3 }
    }
}

/// One normalized score group
pub struct RankedGroup {
    pub score: u32,
    /// Deduplicated members, sorted ascending
    pub words: Vec<String>,
}

/// Result of a ranking run
pub struct RankResult {
    pub groups: Vec<RankedGroup>,
    pub candidates: usize,
    pub qualifying: usize,
    pub distinct_scores: usize,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Rank a candidate corpus and keep the best score groups
#[must_use]
pub fn run_rank<S: AsRef<str> + Sync>(
    candidates: &[S],
    dictionary: &Dictionary,
    config: &RankConfig,
) -> RankResult {
    let start = Instant::now();
    let groups = pipeline::rank(candidates, dictionary, config.mode);
    let duration = start.elapsed();

    let ranked: Vec<RankedGroup> = groups
        .top(config.top)
        .into_iter()
        .map(|(score, words)| RankedGroup {
            score,
            words: sorted_unique(words),
        })
        .collect();

    RankResult {
        groups: ranked,
        candidates: candidates.len(),
        qualifying: groups.total_words(),
        distinct_scores: groups.len(),
        duration,
        words_per_second: candidates.len() as f64 / duration.as_secs_f64(),
    }
}
