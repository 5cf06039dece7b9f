//! Command implementations

pub mod analyze;
pub mod experiment;
pub mod play;
pub mod solve;
pub mod suggest;

pub use analyze::{AnalysisResult, analyze_word};
pub use experiment::{
    ExperimentResult, ExperimentStatistics, ReportEntry, run_experiment, select_targets,
};
pub use play::run_play;
pub use solve::{GuessStep, SolveResult, solve_word};
pub use suggest::{SuggestResult, parse_turn, replay, suggest_next};
