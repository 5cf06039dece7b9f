//! Parallel map over independent scoring tasks
//!
//! The ranker only needs "apply a pure function to every item and keep the
//! results in input order". `ParallelMap` captures that; `RayonPool` runs it on
//! rayon and `Sequential` runs it inline.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

/// Order-preserving map over a slice of independent tasks
pub trait ParallelMap: Sync {
    /// Apply `f` to every item, returning results in input order
    fn map<T, R, F>(&self, items: &[T], f: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send;
}

/// Runs tasks on the calling thread
#[derive(Debug, Clone, Copy, Default)]
pub struct Sequential;

impl ParallelMap for Sequential {
    fn map<T, R, F>(&self, items: &[T], f: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send,
    {
        items.iter().map(f).collect()
    }
}

/// Runs tasks on a rayon pool
///
/// Uses the global pool (sized to available parallelism) unless built with an
/// explicit thread count.
#[derive(Debug, Default)]
pub struct RayonPool {
    pool: Option<ThreadPool>,
}

impl RayonPool {
    /// Use rayon's global pool
    #[must_use]
    pub const fn global() -> Self {
        Self { pool: None }
    }

    /// Build a dedicated pool with `threads` workers
    ///
    /// # Errors
    /// Returns an error if rayon cannot spawn the pool.
    pub fn with_threads(threads: usize) -> Result<Self, ThreadPoolBuildError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("scorer-{i}"))
            .build()?;
        Ok(Self { pool: Some(pool) })
    }

    /// Number of worker threads
    #[must_use]
    pub fn threads(&self) -> usize {
        self.pool
            .as_ref()
            .map_or_else(rayon::current_num_threads, ThreadPool::current_num_threads)
    }
}

impl ParallelMap for RayonPool {
    fn map<T, R, F>(&self, items: &[T], f: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send,
    {
        let run = || items.par_iter().map(&f).collect::<Vec<R>>();
        match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_preserves_order() {
        let items = [3, 1, 2];
        assert_eq!(Sequential.map(&items, |x| x * 10), vec![30, 10, 20]);
    }

    #[test]
    fn rayon_preserves_order() {
        let items: Vec<usize> = (0..1000).collect();
        let doubled = RayonPool::global().map(&items, |x| x * 2);
        assert_eq!(doubled, items.iter().map(|x| x * 2).collect::<Vec<_>>());
    }

    #[test]
    fn dedicated_pool_matches_sequential() {
        let pool = RayonPool::with_threads(2).unwrap();
        assert_eq!(pool.threads(), 2);

        let items: Vec<u64> = (0..257).collect();
        assert_eq!(
            pool.map(&items, |x| x * x),
            Sequential.map(&items, |x| x * x)
        );
    }

    #[test]
    fn empty_input() {
        let items: [u8; 0] = [];
        assert!(RayonPool::global().map(&items, |x| *x).is_empty());
    }
}
