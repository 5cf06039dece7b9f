//! Formatting utilities for terminal output

use crate::core::{Observation, Pattern};

/// Format a pattern as emoji string
#[must_use]
pub fn pattern_to_emoji(pattern: Pattern) -> String {
    pattern.to_emoji()
}

/// Format feedback as emoji, or as "2a1b" for counts
#[must_use]
pub fn format_observation(observation: &Observation) -> String {
    match observation {
        Observation::Pattern(pattern) => pattern.to_emoji(),
        Observation::Counts { .. } => observation.to_string(),
    }
}

/// Score with the expected number of remaining candidates
#[must_use]
pub fn format_score(score: f64, expected_remaining: f64) -> String {
    format!("score {score:>7.3}  ~{expected_remaining:.1} left")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Entropy bar scaled to the most bits `candidates` outcomes can carry
#[must_use]
pub fn entropy_bar(entropy: f64, candidates: usize, width: usize) -> String {
    let max_entropy = (candidates.max(1) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}
