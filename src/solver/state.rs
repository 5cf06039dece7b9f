//! Game state and candidate pruning
//!
//! `GameState` is an immutable snapshot: pruning returns a new state and leaves
//! the old one untouched, so earlier turns can be kept for undo.

use super::selector::{SearchSpace, SelectionPolicy};
use crate::core::{Observation, Pattern, Word};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Game rules variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Any allowed word may be guessed on every turn
    #[default]
    Easy,
    /// Guesses must stay consistent with all feedback so far
    Hard,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Easy => f.write_str("easy"),
            Self::Hard => f.write_str("hard"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" | "normal" => Ok(Self::Easy),
            "hard" => Ok(Self::Hard),
            other => Err(format!("unknown mode '{other}' (expected 'easy' or 'hard')")),
        }
    }
}

/// Keep the words of `pool` that would have produced `observation` for `guess`
///
/// Recomputes the full pattern for each word and compares for equality.
///
/// # Examples
/// ```
/// use wordle_advisor::core::{Observation, Pattern, Word};
/// use wordle_advisor::solver::prune;
///
/// let pool: Vec<Word> = ["crate", "grate", "slate"].iter().map(|w| Word::new(*w).unwrap()).collect();
/// let guess = Word::new("crane").unwrap();
/// let observed = Pattern::calculate(&guess, &pool[1]);
///
/// let left = prune(&pool, &guess, &Observation::Pattern(observed));
/// assert_eq!(left, vec![Word::new("grate").unwrap()]);
/// ```
#[must_use]
pub fn prune(pool: &[Word], guess: &Word, observation: &Observation) -> Vec<Word> {
    pool.iter()
        .filter(|&word| observation.matches(Pattern::calculate(guess, word)))
        .cloned()
        .collect()
}

/// Candidate set, guess pool and derived counters for one turn
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    candidates: Arc<[Word]>,
    guess_pool: Arc<[Word]>,
    mode: Mode,
    max_hits: u8,
    word_length: usize,
}

impl GameState {
    /// Initial state before any feedback
    #[must_use]
    pub fn new(
        candidates: Arc<[Word]>,
        guess_pool: Arc<[Word]>,
        mode: Mode,
        word_length: usize,
    ) -> Self {
        Self {
            candidates,
            guess_pool,
            mode,
            max_hits: 0,
            word_length,
        }
    }

    /// Words that can still be the answer
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Words currently legal to guess
    #[must_use]
    pub fn guess_pool(&self) -> &[Word] {
        &self.guess_pool
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Highest hit count observed so far
    #[must_use]
    pub const fn max_hits(&self) -> u8 {
        self.max_hits
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// True when feedback contradicted every candidate
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Check if a word is legal to guess in this state
    #[must_use]
    pub fn is_legal_guess(&self, word: &Word) -> bool {
        self.guess_pool.contains(word) || self.candidates.contains(word)
    }

    /// Apply one turn of feedback
    ///
    /// Easy mode prunes only the candidates; hard mode prunes the guess pool
    /// by the same rule.
    #[must_use]
    pub fn prune(&self, guess: &Word, observation: &Observation) -> Self {
        let candidates: Arc<[Word]> = prune(&self.candidates, guess, observation).into();
        let guess_pool = match self.mode {
            Mode::Easy => Arc::clone(&self.guess_pool),
            Mode::Hard => prune(&self.guess_pool, guess, observation).into(),
        };

        debug_assert!(candidates.len() <= self.candidates.len());

        Self {
            candidates,
            guess_pool,
            mode: self.mode,
            max_hits: self.max_hits.max(observation.hits()),
            word_length: self.word_length,
        }
    }

    /// Words to score this turn under `policy`
    ///
    /// Falls back to the candidates when a hard-mode pool has emptied, which
    /// happens when answers are missing from the allowed list.
    #[must_use]
    pub fn search_space(&self, policy: &SelectionPolicy) -> (SearchSpace, &[Word]) {
        let space = policy.select(
            self.candidates.len(),
            usize::from(self.max_hits),
            self.word_length,
        );

        match space {
            SearchSpace::GuessPool if !self.guess_pool.is_empty() => {
                (SearchSpace::GuessPool, &self.guess_pool)
            }
            _ => (SearchSpace::Candidates, &self.candidates),
        }
    }
}
