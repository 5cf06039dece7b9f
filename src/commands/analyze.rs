//! Word analysis command
//!
//! Reports how a single guess partitions the answer list and where it ranks
//! among all legal guesses.

use crate::core::Word;
use crate::solver::{GuessMetrics, Heuristic, ParallelMap, SolveError, Solver, calculate_metrics};

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: String,
    pub metrics: GuessMetrics,
    pub heuristic: Heuristic,
    /// Score under the configured heuristic
    pub score: f64,
    /// 1-based position among all allowed guesses
    pub rank: usize,
    pub total_guesses: usize,
    pub total_candidates: usize,
    pub is_candidate: bool,
}

impl AnalysisResult {
    /// Candidate count divided by the expected remaining count
    #[must_use]
    pub fn expected_reduction(&self) -> f64 {
        if self.metrics.expected_remaining > 0.0 {
            self.total_candidates as f64 / self.metrics.expected_remaining
        } else {
            0.0
        }
    }
}

/// Analyze a word against the full answer list
///
/// # Errors
///
/// Returns an error if the word is not a valid word of the configured length.
pub fn analyze_word<P: ParallelMap>(solver: &Solver<P>, word: &str) -> Result<AnalysisResult, SolveError> {
    let guess = Word::with_length(word, solver.config().word_length)?;
    let candidates = solver.answers();
    let heuristic = solver.config().heuristic;

    if !solver.allowed().contains(&guess) {
        log::warn!("'{guess}' is not in the allowed list");
    }

    let metrics = calculate_metrics(&guess, candidates, solver.ranker().resolution());
    let score = metrics.score(heuristic);

    let scores = solver.ranker().score_all(solver.allowed(), candidates);
    let better = scores
        .iter()
        .filter(|&&other| heuristic.compare(other, score).is_lt())
        .count();

    Ok(AnalysisResult {
        word: guess.text().to_string(),
        metrics,
        heuristic,
        score,
        rank: better + 1,
        total_guesses: solver.allowed().len(),
        total_candidates: candidates.len(),
        is_candidate: candidates.contains(&guess),
    })
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
    fn analyze_valid_word() {
        let solver = solver();
        let result = analyze_word(&solver, "tares").unwrap();

        assert_eq!(result.word, "tares");
        assert!(result.metrics.entropy > 0.0);
        assert!(result.expected_reduction() >= 1.0);
        assert_eq!(result.total_candidates, solver.answers().len());
        assert!(!result.is_candidate);
        assert!(result.rank >= 1 && result.rank <= result.total_guesses);
    }

    #[test]
    fn analyze_invalid_word() {
        let solver = solver();
        assert!(analyze_word(&solver, "cr4ne").is_err());
        assert!(analyze_word(&solver, "cranes").is_err());
    }

    #[test]
    fn entropy_properties() {
        let solver = solver();
        let result = analyze_word(&solver, "crane").unwrap();

        assert!(result.is_candidate);
        assert!(result.metrics.entropy >= 0.0);
        assert!(result.metrics.entropy <= (result.total_candidates as f64).log2());
        assert!(result.metrics.expected_remaining <= result.total_candidates as f64);
        assert!(result.metrics.max_partition <= result.total_candidates);
    }

    #[test]
    fn top_ranked_word_is_first() {
        let solver = solver();
        let best = solver
            .ranker()
            .rank(solver.allowed(), solver.answers(), 1)
            .remove(0);

        let result = analyze_word(&solver, best.word.text()).unwrap();
        assert_eq!(result.rank, 1);
        assert!((result.score - best.score).abs() < 1e-12);
    }
}
