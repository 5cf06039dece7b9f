//! Core domain types
//!
//! Words, feedback patterns and observations. Everything here is pure and
//! independent of the solver.

mod observation;
mod pattern;
mod word;

pub use observation::{Observation, Resolution};
pub use pattern::{Feedback, Pattern, PatternError};
pub use word::{ALPHABET_SIZE, DEFAULT_WORD_LENGTH, MAX_WORD_LENGTH, Word, WordError};
