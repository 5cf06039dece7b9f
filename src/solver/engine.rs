//! Main solver interface
//!
//! `Solver` holds the word lists, configuration and scoring pool shared by
//! every game. `Game` drives one solve through
//! `Opening -> Guessing -> Solved | Exhausted`, keeping each turn's
//! `GameState` so a turn can be undone.

use super::config::SolverConfig;
use super::evaluator::{GuessMetrics, calculate_metrics};
use super::parallel::{ParallelMap, RayonPool};
use super::ranker::{Ranker, ScoredGuess};
use super::selector::SearchSpace;
use super::state::{GameState, Mode};
use crate::core::{Observation, Pattern, PatternError, Word, WordError};
use rayon::ThreadPoolBuildError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Position of a game in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// No feedback received yet
    Opening,
    /// Feedback received, answer not yet found
    Guessing,
    /// The last guess was all hits
    Solved,
    /// Feedback contradicted every candidate
    Exhausted,
}

impl Phase {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Opening => f.write_str("opening"),
            Self::Guessing => f.write_str("guessing"),
            Self::Solved => f.write_str("solved"),
            Self::Exhausted => f.write_str("exhausted"),
        }
    }
}

/// Errors raised while configuring or playing a game
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("guess '{guess}' has {actual} letters, expected {expected}")]
    GuessLength {
        guess: String,
        expected: usize,
        actual: usize,
    },

    #[error("target '{target}' has {actual} letters, expected {expected}")]
    TargetLength {
        target: String,
        expected: usize,
        actual: usize,
    },

    #[error("feedback covers {actual} positions, expected {expected}")]
    ObservationLength { expected: usize, actual: usize },

    #[error("hit/misplaced counts are only accepted with the unique-letter policy")]
    CountsRequireUniqueLetters,

    #[error(transparent)]
    Feedback(#[from] PatternError),

    #[error(transparent)]
    Word(#[from] WordError),

    #[error("game is already over ({0})")]
    GameOver(Phase),

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("no {length}-letter answer words available")]
    NoAnswers { length: usize },

    #[error("no legal guesses remain")]
    EmptyGuessPool,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to start scoring threads")]
    WorkerPool(#[from] ThreadPoolBuildError),
}

/// One turn of a game
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub guess: Word,
    pub observation: Observation,
    /// Candidates left after pruning
    pub remaining: usize,
}

/// Guesses proposed for the current turn
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    /// Best first
    pub guesses: Vec<ScoredGuess>,
    /// Candidates before this turn
    pub remaining: usize,
    pub search_space: SearchSpace,
    /// True when the configured opener was used instead of ranking
    pub from_opener: bool,
}

impl Suggestion {
    #[must_use]
    pub fn best(&self) -> Option<&ScoredGuess> {
        self.guesses.first()
    }
}

/// Summary of a finished or abandoned game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveRecord {
    /// Known target, or the solving guess for live games
    pub target: Option<String>,
    pub num_guesses: usize,
    pub solved: bool,
    pub phase: Phase,
    pub guesses: Vec<String>,
    /// Candidates left after each turn
    pub remaining: Vec<usize>,
}

impl SolveRecord {
    /// Guesses joined as "tares-crane-grate"
    #[must_use]
    pub fn history(&self) -> String {
        self.guesses.join("-")
    }
}

/// Word lists, configuration and scoring pool shared across games
#[derive(Debug)]
pub struct Solver<P: ParallelMap = RayonPool> {
    config: SolverConfig,
    answers: Arc<[Word]>,
    allowed: Arc<[Word]>,
    opener: Option<Word>,
    ranker: Ranker<P>,
}

impl Solver<RayonPool> {
    /// Create a solver scoring on rayon
    ///
    /// Uses a dedicated pool when `config.threads` is set.
    ///
    /// # Errors
    /// Returns `SolveError` if the configuration is invalid, no answers of the
    /// configured length remain, or the thread pool cannot start.
    pub fn new(config: SolverConfig, answers: &[Word], allowed: &[Word]) -> Result<Self, SolveError> {
        let executor = match config.threads {
            Some(threads) if threads > 0 => RayonPool::with_threads(threads)?,
            _ => RayonPool::global(),
        };
        Self::with_executor(config, answers, allowed, executor)
    }
}

impl<P: ParallelMap> Solver<P> {
    /// Create a solver with an explicit executor
    ///
    /// Words of the wrong length are dropped, as are words with repeated
    /// letters under the unique-letter policy. An empty allowed list falls
    /// back to the answers.
    ///
    /// # Errors
    /// Returns `SolveError::InvalidConfig` or `SolveError::NoAnswers`.
    pub fn with_executor(
        config: SolverConfig,
        answers: &[Word],
        allowed: &[Word],
        executor: P,
    ) -> Result<Self, SolveError> {
        config.validate().map_err(SolveError::InvalidConfig)?;

        let admissible = |word: &&Word| {
            word.len() == config.word_length && (!config.unique_letters || word.has_unique_letters())
        };

        let answers: Arc<[Word]> = answers.iter().filter(admissible).cloned().collect();
        if answers.is_empty() {
            return Err(SolveError::NoAnswers {
                length: config.word_length,
            });
        }

        let allowed: Vec<Word> = allowed.iter().filter(admissible).cloned().collect();
        let allowed: Arc<[Word]> = if allowed.is_empty() {
            Arc::clone(&answers)
        } else {
            allowed.into()
        };

        let opener = config.opener.as_deref().and_then(|text| {
            let word = Word::with_length(text, config.word_length).ok()?;
            if allowed.contains(&word) || answers.contains(&word) {
                Some(word)
            } else {
                log::debug!("opener '{text}' is not a legal guess; ranking the first turn");
                None
            }
        });

        log::info!(
            "solver ready: {} answers, {} allowed, {} mode, {} on {} feedback",
            answers.len(),
            allowed.len(),
            config.mode,
            config.heuristic,
            config.resolution()
        );

        Ok(Self {
            ranker: Ranker::new(config.heuristic, executor).with_resolution(config.resolution()),
            config,
            answers,
            allowed,
            opener,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    #[must_use]
    pub fn allowed(&self) -> &[Word] {
        &self.allowed
    }

    /// Opener used on the first turn, if it is a legal guess
    #[must_use]
    pub const fn opener(&self) -> Option<&Word> {
        self.opener.as_ref()
    }

    #[must_use]
    pub const fn ranker(&self) -> &Ranker<P> {
        &self.ranker
    }

    /// Start a game over the full word lists
    #[must_use]
    pub fn new_game(&self) -> Game<'_, P> {
        let initial = GameState::new(
            Arc::clone(&self.answers),
            Arc::clone(&self.allowed),
            self.config.mode,
            self.config.word_length,
        );

        Game {
            solver: self,
            states: vec![initial],
            history: Vec::new(),
            phase: Phase::Opening,
        }
    }

    /// Play a full game against a known target, taking the top suggestion
    /// each turn
    ///
    /// Feedback is reported at the configured resolution. Stops after
    /// `max_turns` guesses if the target has not been found.
    ///
    /// # Errors
    /// Returns `SolveError::TargetLength` for a target of the wrong length.
    pub fn simulate(&self, target: &Word) -> Result<SolveRecord, SolveError> {
        if target.len() != self.config.word_length {
            return Err(SolveError::TargetLength {
                target: target.text().to_string(),
                expected: self.config.word_length,
                actual: target.len(),
            });
        }

        let mut game = self.new_game();

        while !game.phase().is_terminal() && game.turns() < self.config.max_turns {
            let suggestion = game.suggest()?;
            let Some(best) = suggestion.best() else {
                break;
            };
            let guess = best.word.clone();
            let pattern = Pattern::calculate(&guess, target);
            game.observe(&guess, self.config.resolution().observation(pattern))?;
        }

        if !game.phase().is_terminal() {
            log::debug!("gave up on '{target}' after {} turns", game.turns());
        }

        let mut record = game.record();
        record.target = Some(target.text().to_string());
        Ok(record)
    }
}

/// One solve in progress
#[derive(Debug)]
pub struct Game<'a, P: ParallelMap = RayonPool> {
    solver: &'a Solver<P>,
    /// Initial state followed by the state after each turn
    states: Vec<GameState>,
    history: Vec<Turn>,
    phase: Phase,
}

impl<P: ParallelMap> Game<'_, P> {
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> &GameState {
        // Never empty: the initial state is never popped
        &self.states[self.states.len() - 1]
    }

    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        self.state().candidates()
    }

    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    #[must_use]
    pub fn turns(&self) -> usize {
        self.history.len()
    }

    /// Partition metrics for `guess` against the current candidates
    #[must_use]
    pub fn metrics(&self, guess: &Word) -> GuessMetrics {
        calculate_metrics(guess, self.candidates(), self.solver.ranker.resolution())
    }

    /// Propose guesses for the current turn
    ///
    /// # Errors
    /// Returns `SolveError::GameOver` once the game has ended and
    /// `SolveError::EmptyGuessPool` if nothing can be guessed.
    pub fn suggest(&self) -> Result<Suggestion, SolveError> {
        if self.phase.is_terminal() {
            return Err(SolveError::GameOver(self.phase));
        }

        let config = &self.solver.config;
        let ranker = &self.solver.ranker;
        let state = self.state();
        let candidates = state.candidates();

        if self.phase == Phase::Opening
            && let Some(opener) = &self.solver.opener
        {
            return Ok(Suggestion {
                guesses: vec![ScoredGuess {
                    word: opener.clone(),
                    score: ranker.score(opener, candidates),
                }],
                remaining: candidates.len(),
                search_space: SearchSpace::GuessPool,
                from_opener: true,
            });
        }

        if let [only] = candidates {
            return Ok(Suggestion {
                guesses: vec![ScoredGuess {
                    word: only.clone(),
                    score: ranker.score(only, candidates),
                }],
                remaining: 1,
                search_space: SearchSpace::Candidates,
                from_opener: false,
            });
        }

        let (search_space, pool) = state.search_space(&config.policy);
        if pool.is_empty() {
            return Err(SolveError::EmptyGuessPool);
        }

        log::debug!(
            "turn {}: {} candidates, scoring {search_space} ({} words)",
            self.turns() + 1,
            candidates.len(),
            pool.len()
        );

        Ok(Suggestion {
            guesses: ranker.rank(pool, candidates, config.top_k),
            remaining: candidates.len(),
            search_space,
            from_opener: false,
        })
    }

    /// Apply feedback for a played guess
    ///
    /// Returns the phase after pruning.
    ///
    /// # Errors
    /// Returns `SolveError` if the game is over, the guess or feedback has the
    /// wrong length, or counts are given without the unique-letter policy.
    pub fn observe(&mut self, guess: &Word, observation: Observation) -> Result<Phase, SolveError> {
        if self.phase.is_terminal() {
            return Err(SolveError::GameOver(self.phase));
        }

        let config = &self.solver.config;
        let length = config.word_length;

        if guess.len() != length {
            return Err(SolveError::GuessLength {
                guess: guess.text().to_string(),
                expected: length,
                actual: guess.len(),
            });
        }

        if let Some(actual) = observation.pattern_len()
            && actual != length
        {
            return Err(SolveError::ObservationLength {
                expected: length,
                actual,
            });
        }

        let observation = match observation {
            Observation::Counts { .. } if !config.unique_letters => {
                return Err(SolveError::CountsRequireUniqueLetters);
            }
            Observation::Counts { hits, misplaced } => Observation::counts(hits, misplaced, length)?,
            Observation::Pattern(_) => observation,
        };

        let state = self.state();
        if state.mode() == Mode::Hard && !state.is_legal_guess(guess) {
            log::warn!("'{guess}' is inconsistent with earlier feedback in hard mode");
        }

        let next = state.prune(guess, &observation);
        let before = state.candidates().len();

        let phase = if observation.is_solved(length) {
            Phase::Solved
        } else if next.is_exhausted() {
            Phase::Exhausted
        } else {
            Phase::Guessing
        };

        log::debug!(
            "{guess} {observation}: {before} -> {} candidates, {} -> {phase}",
            next.candidates().len(),
            self.phase
        );

        self.history.push(Turn {
            guess: guess.clone(),
            observation,
            remaining: next.candidates().len(),
        });
        self.states.push(next);
        self.phase = phase;

        Ok(phase)
    }

    /// Take back the last turn
    ///
    /// # Errors
    /// Returns `SolveError::NothingToUndo` before the first turn.
    pub fn undo(&mut self) -> Result<(), SolveError> {
        if self.history.pop().is_none() {
            return Err(SolveError::NothingToUndo);
        }
        self.states.pop();
        self.phase = if self.history.is_empty() {
            Phase::Opening
        } else {
            Phase::Guessing
        };
        Ok(())
    }

    /// Summarize the game so far
    #[must_use]
    pub fn record(&self) -> SolveRecord {
        let solved = self.phase == Phase::Solved;
        SolveRecord {
            target: solved
                .then(|| self.history.last().map(|turn| turn.guess.text().to_string()))
                .flatten(),
            num_guesses: self.history.len(),
            solved,
            phase: self.phase,
            guesses: self
                .history
                .iter()
                .map(|turn| turn.guess.text().to_string())
                .collect(),
            remaining: self.history.iter().map(|turn| turn.remaining).collect(),
        }
    }
}
