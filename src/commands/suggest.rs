//! Suggestion command
//!
//! Replays the turns already played, given as `guess:feedback`, and returns
//! the ranked guesses for the next turn.

use crate::core::{Observation, Word};
use crate::solver::{Game, ParallelMap, Phase, Solver, Suggestion};
use anyhow::{Context, Result, bail};

/// State after replaying the given turns
#[derive(Debug, Clone)]
pub struct SuggestResult {
    pub phase: Phase,
    /// `None` once the game is over
    pub suggestion: Option<Suggestion>,
    /// Remaining candidates, listed when few are left
    pub candidates: Vec<Word>,
    pub total_candidates: usize,
}

/// Candidates listed in full at or below this count
const LIST_LIMIT: usize = 20;

/// Parse one `guess:feedback` turn
///
/// # Errors
///
/// Returns an error if the separator is missing or either half is invalid.
pub fn parse_turn(turn: &str, length: usize) -> Result<(Word, Observation)> {
    let (guess, feedback) = turn
        .split_once(':')
        .or_else(|| turn.split_once('='))
        .with_context(|| format!("expected 'guess:feedback', got '{turn}'"))?;

    let guess = Word::with_length(guess.trim(), length)
        .with_context(|| format!("invalid guess in '{turn}'"))?;
    let observation = Observation::parse(feedback, length)
        .with_context(|| format!("invalid feedback in '{turn}'"))?;
    Ok((guess, observation))
}

/// Apply parsed turns to a fresh game
///
/// # Errors
///
/// Returns an error if a turn is rejected by the game.
pub fn replay<'a, P: ParallelMap>(
    solver: &'a Solver<P>,
    turns: &[(Word, Observation)],
) -> Result<Game<'a, P>> {
    let mut game = solver.new_game();
    for (i, (guess, observation)) in turns.iter().enumerate() {
        if game.phase().is_terminal() {
            bail!("turn {} comes after the game ended ({})", i + 1, game.phase());
        }
        game.observe(guess, *observation)
            .with_context(|| format!("turn {} ({guess})", i + 1))?;
    }
    Ok(game)
}

/// Replay `turns` and suggest the next guesses
///
/// # Errors
///
/// Returns an error if a turn cannot be parsed or applied.
pub fn suggest_next<P: ParallelMap>(solver: &Solver<P>, turns: &[String]) -> Result<SuggestResult> {
    let length = solver.config().word_length;
    let parsed = turns
        .iter()
        .map(|turn| parse_turn(turn, length))
        .collect::<Result<Vec<_>>>()?;

    let game = replay(solver, &parsed)?;
    let suggestion = if game.phase().is_terminal() {
        None
    } else {
        Some(game.suggest()?)
    };

    let total_candidates = game.candidates().len();
    let candidates = if total_candidates <= LIST_LIMIT {
        game.candidates().to_vec()
    } else {
        Vec::new()
    };

    Ok(SuggestResult {
        phase: game.phase(),
        suggestion,
        candidates,
        total_candidates,
    })
}
