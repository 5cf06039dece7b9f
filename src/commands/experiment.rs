//! Experiment harness
//!
//! Runs the solver against many known targets, aggregates guess-count
//! statistics and exports one record per target as a JSON report.

use crate::core::Word;
use crate::solver::{ParallelMap, SolveError, SolveRecord, Solver};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index::sample;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

/// One target's line in the JSON report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub count: usize,
    /// Guesses joined with '-'
    pub history: String,
    /// Candidates left after each guess
    pub remaining: Vec<usize>,
    pub solved: bool,
}

/// Aggregate statistics over all targets
#[derive(Debug, Clone)]
pub struct ExperimentStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: Vec<String>,
    /// Over solved targets only
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub mean_guesses: f64,
    pub distribution: BTreeMap<usize, usize>,
    pub first_guess_used: BTreeMap<String, usize>,
    pub total_time: Duration,
}

/// Records for every target plus their statistics
#[derive(Debug, Clone)]
pub struct ExperimentResult {
    pub records: Vec<SolveRecord>,
    pub stats: ExperimentStatistics,
}

impl ExperimentResult {
    /// Report entries keyed by target word
    #[must_use]
    pub fn report(&self) -> BTreeMap<String, ReportEntry> {
        self.records
            .iter()
            .filter_map(|record| {
                let target = record.target.clone()?;
                Some((
                    target,
                    ReportEntry {
                        count: record.num_guesses,
                        history: record.history(),
                        remaining: record.remaining.clone(),
                        solved: record.solved,
                    },
                ))
            })
            .collect()
    }

    /// Write the report as pretty JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn write_report(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.report())?;
        fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("wrote {} records to {}", self.records.len(), path.display());
        Ok(())
    }
}

/// Pick the targets to run
///
/// With `sample` set, draws that many distinct answers (seeded when `seed`
/// is given, in list order); otherwise takes the first `limit` answers.
#[must_use]
pub fn select_targets(
    answers: &[Word],
    limit: Option<usize>,
    sample_size: Option<usize>,
    seed: Option<u64>,
) -> Vec<Word> {
    if let Some(n) = sample_size {
        let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let mut indices = sample(&mut rng, answers.len(), n.min(answers.len())).into_vec();
        indices.sort_unstable();
        return indices.into_iter().map(|i| answers[i].clone()).collect();
    }

    answers
        .iter()
        .take(limit.unwrap_or(answers.len()))
        .cloned()
        .collect()
}

/// Solve every target and gather statistics
///
/// Targets run one after another; each solve already fans its scoring out
/// over the pool.
///
/// # Errors
///
/// Returns `SolveError` if a target has the wrong length or a game cannot
/// continue.
pub fn run_experiment<P: ParallelMap>(
    solver: &Solver<P>,
    targets: &[Word],
    show_progress: bool,
) -> Result<ExperimentResult, SolveError> {
    let pb = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut records = Vec::with_capacity(targets.len());

    for (idx, target) in targets.iter().enumerate() {
        records.push(solver.simulate(target)?);

        if idx % 10 == 0 {
            let avg = records.iter().map(|r| r.num_guesses).sum::<usize>() as f64
                / records.len() as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let stats = statistics(&records, start.elapsed());
    log::info!(
        "experiment: {}/{} solved, mean {:.3} guesses",
        stats.solved,
        stats.total_words,
        stats.mean_guesses
    );

    Ok(ExperimentResult { records, stats })
}

fn statistics(records: &[SolveRecord], total_time: Duration) -> ExperimentStatistics {
    let solved: Vec<usize> = records
        .iter()
        .filter(|r| r.solved)
        .map(|r| r.num_guesses)
        .collect();

    let failed = records
        .iter()
        .filter(|r| !r.solved)
        .filter_map(|r| r.target.clone())
        .collect();

    let mut distribution = BTreeMap::new();
    for &count in &solved {
        *distribution.entry(count).or_insert(0) += 1;
    }

    let mut first_guess_used = BTreeMap::new();
    for first in records.iter().filter_map(|r| r.guesses.first()) {
        *first_guess_used.entry(first.clone()).or_insert(0) += 1;
    }

    let mean_guesses = if solved.is_empty() {
        0.0
    } else {
        solved.iter().sum::<usize>() as f64 / solved.len() as f64
    };

    ExperimentStatistics {
        total_words: records.len(),
        solved: solved.len(),
        failed,
        min_guesses: solved.iter().copied().min().unwrap_or(0),
        max_guesses: solved.iter().copied().max().unwrap_or(0),
        mean_guesses,
        distribution,
        first_guess_used,
        total_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{Sequential, SolverConfig};
    use crate::wordlists::WordLists;

    fn solver() -> Solver<Sequential> {
        let lists = WordLists::embedded();
        Solver::with_executor(SolverConfig::default(), &lists.answers, &lists.allowed, Sequential)
            .unwrap()
    }

    #[test]
    fn select_targets_limit_and_sample() {
        let lists = WordLists::embedded();

        let first = select_targets(&lists.answers, Some(3), None, None);
        assert_eq!(first, lists.answers[..3].to_vec());

        let a = select_targets(&lists.answers, None, Some(10), Some(7));
        let b = select_targets(&lists.answers, None, Some(10), Some(7));
        assert_eq!(a.len(), 10);
        assert_eq!(a, b);

        let all = select_targets(&lists.answers, None, Some(usize::MAX), Some(1));
        assert_eq!(all.len(), lists.answers.len());
    }

    #[test]
    fn experiment_statistics() {
        let solver = solver();
        let targets = select_targets(solver.answers(), None, Some(12), Some(42));
        let result = run_experiment(&solver, &targets, false).unwrap();
        let stats = &result.stats;

        assert_eq!(stats.total_words, 12);
        assert_eq!(stats.solved + stats.failed.len(), 12);
        assert!(stats.min_guesses <= stats.max_guesses);
        assert!(stats.mean_guesses >= stats.min_guesses as f64);
        assert!(stats.mean_guesses <= stats.max_guesses as f64);
        assert_eq!(stats.distribution.values().sum::<usize>(), stats.solved);
        assert_eq!(stats.first_guess_used.get("tares"), Some(&12));
    }

    #[test]
    fn report_is_keyed_by_target() {
        let solver = solver();
        let targets: Vec<Word> = ["crane", "dough"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        let result = run_experiment(&solver, &targets, false).unwrap();
        let report = result.report();

        let crane = &report["crane"];
        assert!(crane.solved);
        assert!(crane.history.starts_with("tares-"));
        assert!(crane.history.ends_with("-crane"));
        assert_eq!(crane.count, crane.history.split('-').count());
        assert_eq!(crane.remaining.last(), Some(&1));

        let json = serde_json::to_value(&report).unwrap();
        assert!(json["dough"]["count"].is_u64());
    }

    #[test]
    fn report_written_to_disk() {
        let solver = solver();
        let targets = vec![Word::new("glove").unwrap()];
        let result = run_experiment(&solver, &targets, false).unwrap();

        let path = std::env::temp_dir().join(format!(
            "wordle_advisor_{}_report.json",
            std::process::id()
        ));
        result.write_report(&path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"glove\""));
        fs::remove_file(path).unwrap();
    }
}
