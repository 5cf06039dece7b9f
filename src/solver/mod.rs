//! Guess evaluation, ranking and game control
//!
//! Leaves first: the evaluator scores one guess, the ranker scores a pool in
//! parallel, the selector picks the pool, and the engine runs the game.

mod config;
mod engine;
pub mod evaluator;
pub mod parallel;
mod ranker;
mod selector;
mod state;

pub use config::{DEFAULT_OPENER, SolverConfig};
pub use engine::{Game, Phase, SolveError, SolveRecord, Solver, Suggestion, Turn};
pub use evaluator::{GuessMetrics, Heuristic, calculate_metrics, partition_counts};
pub use parallel::{ParallelMap, RayonPool, Sequential};
pub use ranker::{Ranker, ScoredGuess};
pub use selector::{SearchSpace, SelectionPolicy};
pub use state::{GameState, Mode, prune};
