//! Top-k guess ranking
//!
//! Scores every word of a pool against the candidate set through a
//! `ParallelMap`, then orders by the heuristic's preferred direction. The sort
//! is stable, so ties keep their pool order and repeated calls agree.

use super::evaluator::Heuristic;
use super::parallel::{ParallelMap, RayonPool};
use crate::core::{Resolution, Word};
use std::cmp::Ordering;

/// A guess and its heuristic score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredGuess {
    pub word: Word,
    pub score: f64,
}

/// Ranks guesses with a fixed heuristic, feedback resolution and executor
#[derive(Debug, Default)]
pub struct Ranker<P: ParallelMap = RayonPool> {
    heuristic: Heuristic,
    resolution: Resolution,
    executor: P,
}

impl<P: ParallelMap> Ranker<P> {
    /// Ranker scoring on full pattern feedback
    #[must_use]
    pub const fn new(heuristic: Heuristic, executor: P) -> Self {
        Self {
            heuristic,
            resolution: Resolution::Pattern,
            executor,
        }
    }

    /// Score on the feedback the player actually receives
    #[must_use]
    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    #[must_use]
    pub const fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    #[must_use]
    pub const fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Score a single guess
    #[must_use]
    pub fn score(&self, guess: &Word, candidates: &[Word]) -> f64 {
        self.heuristic.score_with(guess, candidates, self.resolution)
    }

    /// Score every word in `pool`, in pool order
    #[must_use]
    pub fn score_all(&self, pool: &[Word], candidates: &[Word]) -> Vec<f64> {
        let (heuristic, resolution) = (self.heuristic, self.resolution);
        self.executor
            .map(pool, |guess| heuristic.score_with(guess, candidates, resolution))
    }

    /// Return up to `top_k` guesses from `pool`, best first
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Word;
    /// use wordle_advisor::solver::{Heuristic, Ranker, Sequential};
    ///
    /// let pool: Vec<Word> = ["aaaaa", "crane"].iter().map(|w| Word::new(*w).unwrap()).collect();
    /// let candidates: Vec<Word> = ["crate", "slate", "irate"].iter().map(|w| Word::new(*w).unwrap()).collect();
    ///
    /// let ranker = Ranker::new(Heuristic::Entropy, Sequential);
    /// let ranked = ranker.rank(&pool, &candidates, 2);
    /// assert_eq!(ranked[0].word.text(), "crane");
    /// ```
    #[must_use]
    pub fn rank(&self, pool: &[Word], candidates: &[Word], top_k: usize) -> Vec<ScoredGuess> {
        if top_k == 0 || pool.is_empty() {
            return Vec::new();
        }

        log::debug!(
            "scoring {} guesses against {} candidates ({})",
            pool.len(),
            candidates.len(),
            self.heuristic
        );

        let scores = self.score_all(pool, candidates);

        if top_k == 1 {
            return self
                .select_best(&scores)
                .map(|i| ScoredGuess {
                    word: pool[i].clone(),
                    score: scores[i],
                })
                .into_iter()
                .collect();
        }

        let mut order: Vec<usize> = (0..pool.len()).collect();
        order.sort_by(|&a, &b| self.heuristic.compare(scores[a], scores[b]));
        order.truncate(top_k);

        order
            .into_iter()
            .map(|i| ScoredGuess {
                word: pool[i].clone(),
                score: scores[i],
            })
            .collect()
    }

    /// Index of the first best score; same as the head of the stable sort
    fn select_best(&self, scores: &[f64]) -> Option<usize> {
        (0..scores.len()).reduce(|best, i| {
            if self.heuristic.compare(scores[i], scores[best]) == Ordering::Less {
                i
            } else {
                best
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::parallel::Sequential;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn texts(ranked: &[ScoredGuess]) -> Vec<&str> {
        ranked.iter().map(|s| s.word.text()).collect()
    }

    #[test]
    fn ranks_best_first() {
        let pool = words(&["zzzzz", "crane", "aaaaa"]);
        let candidates = words(&["slate", "irate", "crate", "grate"]);

        let ranker = Ranker::new(Heuristic::Entropy, Sequential);
        let ranked = ranker.rank(&pool, &candidates, 3);

        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].word.text(), "crane");
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn expected_size_sorts_ascending() {
        let pool = words(&["zzzzz", "crane"]);
        let candidates = words(&["slate", "irate", "crate", "grate"]);

        let ranker = Ranker::new(Heuristic::ExpectedSize, Sequential);
        let ranked = ranker.rank(&pool, &candidates, 2);

        assert_eq!(texts(&ranked), vec!["crane", "zzzzz"]);
        assert!(ranked[0].score <= ranked[1].score);
    }

    #[test]
    fn ties_keep_pool_order() {
        // None of these letters appear in the candidates: all score zero
        let pool = words(&["zzzzz", "yyyyy", "xxxxx"]);
        let candidates = words(&["crane", "slate"]);

        for heuristic in [Heuristic::Entropy, Heuristic::ExpectedSize] {
            let ranker = Ranker::new(heuristic, Sequential);
            assert_eq!(
                texts(&ranker.rank(&pool, &candidates, 3)),
                vec!["zzzzz", "yyyyy", "xxxxx"]
            );
            assert_eq!(texts(&ranker.rank(&pool, &candidates, 1)), vec!["zzzzz"]);
        }
    }

    #[test]
    fn top_one_matches_full_sort() {
        let pool = words(&["aaaaa", "slate", "crane", "trace", "zzzzz", "irate"]);
        let candidates = words(&["crate", "grate", "plate", "irate", "trace", "react"]);

        for heuristic in [Heuristic::Entropy, Heuristic::ExpectedSize] {
            let ranker = Ranker::new(heuristic, Sequential);
            let full = ranker.rank(&pool, &candidates, pool.len());
            let single = ranker.rank(&pool, &candidates, 1);
            assert_eq!(single, full[..1].to_vec());
        }
    }

    #[test]
    fn top_k_larger_than_pool_returns_all() {
        let pool = words(&["crane", "slate"]);
        let candidates = words(&["crate"]);

        let ranker = Ranker::new(Heuristic::Entropy, Sequential);
        assert_eq!(ranker.rank(&pool, &candidates, 10).len(), 2);
        assert!(ranker.rank(&pool, &candidates, 0).is_empty());
        assert!(ranker.rank(&[], &candidates, 5).is_empty());
    }

    #[test]
    fn counts_resolution_scores_coarser_buckets() {
        let pool = words(&["crate", "zzzzz"]);
        let candidates = words(&["caret", "react", "crate", "slimy"]);

        let full = Ranker::new(Heuristic::Entropy, Sequential);
        let coarse = Ranker::new(Heuristic::Entropy, Sequential).with_resolution(Resolution::Counts);
        assert_eq!(coarse.resolution(), Resolution::Counts);

        // Four distinct patterns, but caret and react share their counts
        assert!((full.score(&pool[0], &candidates) - 2.0).abs() < 1e-9);
        assert!((coarse.score(&pool[0], &candidates) - 1.5).abs() < 1e-9);

        let ranked = coarse.rank(&pool, &candidates, 2);
        assert_eq!(texts(&ranked), vec!["crate", "zzzzz"]);
        assert!((ranked[0].score - 1.5).abs() < 1e-9);
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let pool = words(&["crane", "slate", "irate", "aaaaa", "zonal", "trace", "grate"]);
        let candidates = words(&["crate", "grate", "plate", "irate"]);

        let sequential = Ranker::new(Heuristic::Entropy, Sequential);
        let parallel = Ranker::new(Heuristic::Entropy, RayonPool::global());

        let expected = sequential.rank(&pool, &candidates, 5);
        for _ in 0..5 {
            assert_eq!(parallel.rank(&pool, &candidates, 5), expected);
        }
    }
}
