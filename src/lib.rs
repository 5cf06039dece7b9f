//! Wordle Advisor
//!
//! Recommends guesses for Wordle-style games by scoring how each guess splits
//! the remaining answers, and prunes the answers from observed feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_advisor::core::{Observation, Pattern, Word};
//! use wordle_advisor::solver::{Phase, Sequential, Solver, SolverConfig};
//!
//! let answers: Vec<Word> = ["crate", "grate", "slate"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//! let solver = Solver::with_executor(SolverConfig::default(), &answers, &[], Sequential).unwrap();
//!
//! let mut game = solver.new_game();
//! let guess = game.suggest().unwrap().best().unwrap().word.clone();
//! let feedback = Pattern::calculate(&guess, &answers[1]);
//! let phase = game.observe(&guess, Observation::Pattern(feedback)).unwrap();
//! assert!(phase == Phase::Solved || game.candidates().len() < 3);
//! ```

// Core domain types
pub mod core;

// Scoring, ranking and game control
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
