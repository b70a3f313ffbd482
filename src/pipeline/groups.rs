//! Score-grouped aggregation of ranked words

use crate::core::Word;
use rustc_hash::FxHashMap;

/// Words grouped by their final board score
///
/// Backed by a hash map from score to an append-ordered list, so partial
/// groupings from different workers merge cheaply. Descending score order
/// is established once at read time rather than maintained on every
/// insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreGroups {
    groups: FxHashMap<u32, Vec<Word>>,
}

impl ScoreGroups {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a word to its score group
    pub fn insert(&mut self, score: u32, word: Word) {
        self.groups.entry(score).or_default().push(word);
    }

    /// Union of two partial groupings
    ///
    /// Associative and commutative up to intra-group order, which makes it
    /// a valid parallel reduction step: the key set and each key's member
    /// set are independent of merge order.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        for (score, mut words) in other.groups {
            self.groups.entry(score).or_default().append(&mut words);
        }
        self
    }

    /// Number of distinct scores
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total words across all groups
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Words sharing one score, in insertion order
    #[must_use]
    pub fn get(&self, score: u32) -> Option<&[Word]> {
        self.groups.get(&score).map(Vec::as_slice)
    }

    /// All scores present, highest first
    #[must_use]
    pub fn scores_descending(&self) -> Vec<u32> {
        let mut scores: Vec<u32> = self.groups.keys().copied().collect();
        scores.sort_unstable_by(|a, b| b.cmp(a));
        scores
    }

    /// The `n` highest-scoring groups, highest first
    ///
    /// Returns fewer entries when fewer distinct scores exist; an empty
    /// grouping yields an empty result.
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<(u32, &[Word])> {
        self.scores_descending()
            .into_iter()
            .take(n)
            .map(|score| (score, self.groups[&score].as_slice()))
            .collect()
    }
}
