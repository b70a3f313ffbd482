//! Command implementations

pub mod rank;
pub mod score;

pub use rank::{RankConfig, RankResult, RankedGroup, run_rank};
pub use score::{ScoreBreakdown, score_breakdown};
