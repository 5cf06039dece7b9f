//! Search-space selection
//!
//! Decides per turn whether guesses are scored from the whole guess pool
//! (probing for information) or only from the remaining candidates (closing,
//! so the guess can itself be the answer).

use std::fmt;

/// Which words a turn's guesses are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchSpace {
    /// Only words that can still be the answer
    Candidates,
    /// Every word currently legal to guess
    GuessPool,
}

impl fmt::Display for SearchSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Candidates => f.write_str("candidates"),
            Self::GuessPool => f.write_str("guess pool"),
        }
    }
}

/// Thresholds for switching to candidate-only scoring
///
/// Scoring is restricted to candidates when fewer than `closing_threshold`
/// remain, unless the game is almost solved: more than `endgame_floor`
/// candidates left while the best hit count so far is at least
/// `word_length - hit_margin`. That state is a family of near-identical words
/// where a probe word from the full pool splits better than any candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionPolicy {
    /// Candidate counts below this switch to closing (default: 30)
    pub closing_threshold: usize,
    /// Candidate counts above this can be almost solved (default: 2)
    pub endgame_floor: usize,
    /// Unconfirmed positions allowed in the almost-solved state (default: 2)
    pub hit_margin: usize,
}

impl SelectionPolicy {
    #[must_use]
    pub const fn new(closing_threshold: usize, endgame_floor: usize, hit_margin: usize) -> Self {
        Self {
            closing_threshold,
            endgame_floor,
            hit_margin,
        }
    }

    /// Many candidates left but most positions already confirmed
    #[must_use]
    pub const fn is_almost_solved(
        &self,
        num_candidates: usize,
        max_hits: usize,
        word_length: usize,
    ) -> bool {
        num_candidates > self.endgame_floor
            && max_hits >= word_length.saturating_sub(self.hit_margin)
    }

    /// Pick the search space for the current turn
    #[must_use]
    pub const fn select(
        &self,
        num_candidates: usize,
        max_hits: usize,
        word_length: usize,
    ) -> SearchSpace {
        if num_candidates < self.closing_threshold
            && !self.is_almost_solved(num_candidates, max_hits, word_length)
        {
            SearchSpace::Candidates
        } else {
            SearchSpace::GuessPool
        }
    }
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self::new(30, 2, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn many_candidates_probe() {
        let policy = SelectionPolicy::default();
        assert_eq!(policy.select(2315, 0, 5), SearchSpace::GuessPool);
        assert_eq!(policy.select(30, 0, 5), SearchSpace::GuessPool);
    }

    #[test]
    fn few_candidates_close() {
        let policy = SelectionPolicy::default();
        assert_eq!(policy.select(29, 0, 5), SearchSpace::Candidates);
        assert_eq!(policy.select(10, 2, 5), SearchSpace::Candidates);
    }

    #[test]
    fn almost_solved_family_probes() {
        // e.g. _ight with several letters still open
        let policy = SelectionPolicy::default();
        assert!(policy.is_almost_solved(6, 3, 5));
        assert_eq!(policy.select(6, 3, 5), SearchSpace::GuessPool);
        assert_eq!(policy.select(6, 4, 5), SearchSpace::GuessPool);
    }

    #[test]
    fn tiny_endgame_closes_even_when_almost_solved() {
        let policy = SelectionPolicy::default();
        assert!(!policy.is_almost_solved(2, 4, 5));
        assert_eq!(policy.select(2, 4, 5), SearchSpace::Candidates);
        assert_eq!(policy.select(1, 4, 5), SearchSpace::Candidates);
    }

    #[test]
    fn custom_thresholds() {
        let policy = SelectionPolicy::new(100, 5, 1);
        assert_eq!(policy.select(99, 3, 5), SearchSpace::Candidates);
        assert_eq!(policy.select(99, 4, 5), SearchSpace::GuessPool);
        assert_eq!(policy.select(5, 4, 5), SearchSpace::Candidates);
        assert_eq!(policy.select(100, 0, 5), SearchSpace::GuessPool);
    }

    #[test]
    fn margin_wider_than_word() {
        let policy = SelectionPolicy::new(30, 2, 10);
        // Every state counts as almost solved once above the floor
        assert_eq!(policy.select(5, 0, 5), SearchSpace::GuessPool);
    }
}
