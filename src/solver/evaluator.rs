//! Guess evaluation
//!
//! Scores a guess by how it partitions the remaining candidates. Each candidate
//! is encoded against the guess and counted per distinct feedback the player
//! would see; the heuristics are functions of those partition sizes.

use crate::core::{Pattern, Resolution, Word};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;
use std::str::FromStr;

/// Scoring heuristic for a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heuristic {
    /// Shannon entropy of the partition in bits (higher is better)
    #[default]
    Entropy,
    /// Mean of `n_k² / N` over nonempty partitions (lower is better)
    ExpectedSize,
}

impl Heuristic {
    /// Canonical name used on the command line
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Entropy => "entropy",
            Self::ExpectedSize => "expected-size",
        }
    }

    /// True when larger scores are better
    #[must_use]
    pub const fn maximizes(self) -> bool {
        matches!(self, Self::Entropy)
    }

    /// Order two scores so that the better one sorts first
    #[must_use]
    pub fn compare(self, a: f64, b: f64) -> Ordering {
        if self.maximizes() {
            b.total_cmp(&a)
        } else {
            a.total_cmp(&b)
        }
    }

    /// Score `guess` against `candidates` under full pattern feedback
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Word;
    /// use wordle_advisor::solver::Heuristic;
    ///
    /// let guess = Word::new("slate").unwrap();
    /// let candidates = vec![Word::new("slate").unwrap(), Word::new("mound").unwrap()];
    ///
    /// let bits = Heuristic::Entropy.score(&guess, &candidates);
    /// assert!((bits - 1.0).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn score(self, guess: &Word, candidates: &[Word]) -> f64 {
        self.score_with(guess, candidates, Resolution::Pattern)
    }

    /// Score `guess` against `candidates` for the feedback `resolution`
    #[must_use]
    pub fn score_with(self, guess: &Word, candidates: &[Word], resolution: Resolution) -> f64 {
        if candidates.is_empty() {
            return 0.0;
        }

        let counts = partition_counts(guess, candidates, resolution);
        match self {
            Self::Entropy => shannon_entropy(&counts),
            Self::ExpectedSize => expected_partition_size(&counts),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "entropy" => Ok(Self::Entropy),
            "expected-size" | "expected" | "partition" => Ok(Self::ExpectedSize),
            other => Err(format!(
                "unknown heuristic '{other}' (expected 'entropy' or 'expected-size')"
            )),
        }
    }
}

/// Partition metrics for a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Mean of `n_k² / N` over the nonempty partitions
    pub expected_size: f64,
    /// Expected number of remaining candidates, `Σ n_k² / N`
    pub expected_remaining: f64,
    /// Largest partition (worst-case remaining candidates)
    pub max_partition: usize,
    /// Number of distinct patterns
    pub partitions: usize,
}

impl GuessMetrics {
    /// Score under a heuristic without re-partitioning
    #[must_use]
    pub const fn score(&self, heuristic: Heuristic) -> f64 {
        match heuristic {
            Heuristic::Entropy => self.entropy,
            Heuristic::ExpectedSize => self.expected_size,
        }
    }
}

/// Count candidates per feedback they produce with the guess
///
/// Under `Resolution::Counts` candidates are keyed by their collapsed
/// pattern, so each bucket is one `(hits, misplaced)` outcome.
#[must_use]
pub fn partition_counts(
    guess: &Word,
    candidates: &[Word],
    resolution: Resolution,
) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let key = resolution.key(Pattern::calculate(guess, candidate));
        *counts.entry(key).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from a pattern distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for an empty distribution or a certain outcome
/// - Maximized for a uniform distribution, bounded by log₂(n)
#[must_use]
pub fn shannon_entropy<S: BuildHasher>(counts: &HashMap<Pattern, usize, S>) -> f64 {
    let total = counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Mean of `n_k² / N` over nonempty partitions
///
/// Returns 0.0 for an empty distribution.
#[must_use]
pub fn expected_partition_size<S: BuildHasher>(counts: &HashMap<Pattern, usize, S>) -> f64 {
    let total = counts.values().sum::<usize>() as f64;
    let groups = counts.values().filter(|&&count| count > 0).count();

    if total == 0.0 || groups == 0 {
        return 0.0;
    }

    let second_moment: f64 = counts
        .values()
        .map(|&count| (count * count) as f64 / total)
        .sum();

    second_moment / groups as f64
}

/// Calculate every partition metric for a guess in one pass
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[Word], resolution: Resolution) -> GuessMetrics {
    let counts = partition_counts(guess, candidates, resolution);
    let total = candidates.len() as f64;

    let expected_remaining = if candidates.is_empty() {
        0.0
    } else {
        counts
            .values()
            .map(|&count| (count * count) as f64 / total)
            .sum()
    };

    GuessMetrics {
        entropy: shannon_entropy(&counts),
        expected_size: expected_partition_size(&counts),
        expected_remaining,
        max_partition: counts.values().copied().max().unwrap_or(0),
        partitions: counts.len(),
    }
}
