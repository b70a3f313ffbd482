//! Core domain types for tile scoring
//!
//! This module contains the fundamental domain types with zero external
//! dependencies. All types here are pure, testable, and have clear
//! mathematical properties.

mod histogram;
mod letter;
mod word;

pub use histogram::LetterHistogram;
pub use letter::Letter;
pub use word::{Word, WordError};
