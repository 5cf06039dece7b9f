//! Word solving command
//!
//! Solves a specific target word and returns the solution path with the
//! metrics of each guess.

use crate::core::{Pattern, Word};
use crate::solver::{ParallelMap, SearchSpace, SolveError, Solver};

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: String,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub search_space: SearchSpace,
    pub from_opener: bool,
    /// Only when more than one candidate was left
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
}

/// Solve a specific word, taking the top suggestion each turn
///
/// The target does not have to be in the answer list; the game then ends
/// exhausted once feedback rules out every candidate.
///
/// # Errors
///
/// Returns an error if the target is not a valid word of the configured
/// length or no legal guess remains.
pub fn solve_word<P: ParallelMap>(solver: &Solver<P>, target: &str) -> Result<SolveResult, SolveError> {
    let target_word = Word::with_length(target, solver.config().word_length)?;

    let mut game = solver.new_game();
    let mut guesses: Vec<GuessStep> = Vec::new();

    while !game.phase().is_terminal() && game.turns() < solver.config().max_turns {
        let suggestion = game.suggest()?;
        let Some(best) = suggestion.best() else {
            break;
        };
        let guess = best.word.clone();

        let candidates_before = game.candidates().len();
        let (entropy, expected_remaining) = if candidates_before > 1 {
            let metrics = game.metrics(&guess);
            (Some(metrics.entropy), Some(metrics.expected_remaining))
        } else {
            (None, None)
        };

        let pattern = Pattern::calculate(&guess, &target_word);
        game.observe(&guess, solver.config().resolution().observation(pattern))?;

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            pattern,
            candidates_before,
            candidates_after: game.candidates().len(),
            search_space: suggestion.search_space,
            from_opener: suggestion.from_opener,
            entropy,
            expected_remaining,
        });
    }

    Ok(SolveResult {
        success: game.record().solved,
        guesses,
        target: target_word.text().to_string(),
    })
}
