//! Solver configuration

use super::evaluator::Heuristic;
use super::selector::SelectionPolicy;
use super::state::Mode;
use crate::core::{MAX_WORD_LENGTH, Resolution};

/// Opener suggested on the first turn when it is a legal guess
pub const DEFAULT_OPENER: &str = "tares";

/// Tunables for a solver instance
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Letters per word (default: 5)
    pub word_length: usize,
    /// Suggestions returned per turn (default: 5)
    pub top_k: usize,
    pub heuristic: Heuristic,
    pub mode: Mode,
    pub policy: SelectionPolicy,
    /// Fixed first guess; `None` ranks the first turn live
    pub opener: Option<String>,
    /// Restrict both lists to words without repeated letters and score
    /// guesses on `(hits, misplaced)` counts
    pub unique_letters: bool,
    /// Dedicated scoring threads; `None` uses the global rayon pool
    pub threads: Option<usize>,
    /// Turn limit for simulated games (default: 32)
    pub max_turns: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            word_length: 5,
            top_k: 5,
            heuristic: Heuristic::default(),
            mode: Mode::default(),
            policy: SelectionPolicy::default(),
            opener: Some(DEFAULT_OPENER.to_string()),
            unique_letters: false,
            threads: None,
            max_turns: 32,
        }
    }
}

impl SolverConfig {
    /// Check the settings are usable
    ///
    /// # Errors
    /// Returns a description of the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        if self.word_length == 0 || self.word_length > MAX_WORD_LENGTH {
            return Err(format!(
                "word length must be between 1 and {MAX_WORD_LENGTH}, got {}",
                self.word_length
            ));
        }
        if self.top_k == 0 {
            return Err("top-k must be at least 1".to_string());
        }
        if self.max_turns == 0 {
            return Err("max turns must be at least 1".to_string());
        }
        if self.threads == Some(0) {
            return Err("thread count must be at least 1".to_string());
        }
        Ok(())
    }

    /// Feedback guesses are scored on
    #[must_use]
    pub const fn resolution(&self) -> Resolution {
        if self.unique_letters {
            Resolution::Counts
        } else {
            Resolution::Pattern
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    #[must_use]
    pub fn without_opener(mut self) -> Self {
        self.opener = None;
        self
    }
}
