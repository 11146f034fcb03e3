use dashmap::DashMap;

use crate::{Coefficients, Solution, SolveError, Tolerance, quadratic::solve_with};

/// A concurrent memo of solutions keyed by coefficient value.
///
/// Each distinct coefficient triple is solved at most once, even when many
/// threads ask for it at the same time. Errors are cached alongside
/// successes since solving is deterministic.
#[derive(Debug, Default)]
pub struct SolutionCache {
    entries: DashMap<Key, Result<Solution, SolveError>>,
    tolerance: Tolerance,
}

/// Bit patterns of `(a, b, c)`, with `-0.0` folded into `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Key([u64; 3]);

impl From<&Coefficients> for Key {
    fn from(coefficients: &Coefficients) -> Self {
        // Adding 0.0 turns -0.0 into 0.0 and leaves every other value alone.
        Self(coefficients.to_array().map(|value| (value + 0.0).to_bits()))
    }
}

impl SolutionCache {
    /// Creates an empty cache that solves with the default [`Tolerance`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty cache that solves with the given tolerances.
    #[must_use]
    pub fn with_tolerance(tolerance: Tolerance) -> Self {
        Self {
            entries: DashMap::new(),
            tolerance,
        }
    }

    /// Returns the cached solution, solving and storing it on first request.
    ///
    /// # Errors
    ///
    /// Returns the same error [`solve_with`](crate::solve_with) would.
    pub fn solve(&self, coefficients: &Coefficients) -> Result<Solution, SolveError> {
        self.get_or_compute(coefficients, || solve_with(coefficients, &self.tolerance))
    }

    fn get_or_compute<F>(
        &self,
        coefficients: &Coefficients,
        compute: F,
    ) -> Result<Solution, SolveError>
    where
        F: FnOnce() -> Result<Solution, SolveError>,
    {
        // The entry holds its shard lock until the value is inserted, so
        // concurrent callers for the same key wait instead of recomputing.
        self.entries
            .entry(Key::from(coefficients))
            .or_insert_with(compute)
            .value()
            .clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn caches_successes_and_errors() {
        let cache = SolutionCache::new();

        let first = cache.solve(&Coefficients::new(1.0, -5.0, 6.0));
        let again = cache.solve(&Coefficients::new(1.0, -5.0, 6.0));
        assert_eq!(first, again);
        assert!(first.is_ok());

        let invalid = cache.solve(&Coefficients::new(0.0, 1.0, 1.0));
        assert!(matches!(invalid, Err(SolveError::NotQuadratic { .. })));

        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn negative_zero_shares_an_entry() {
        let cache = SolutionCache::new();

        cache.solve(&Coefficients::new(1.0, 0.0, -4.0)).expect("should solve");
        cache.solve(&Coefficients::new(1.0, -0.0, -4.0)).expect("should solve");

        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn computes_each_key_once_across_threads() {
        let cache = SolutionCache::new();
        let calls = AtomicUsize::new(0);
        let coefficients = Coefficients::new(2.0, 3.0, -7.0);

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for _ in 0..100 {
                        cache
                            .get_or_compute(&coefficients, || {
                                calls.fetch_add(1, Ordering::SeqCst);
                                solve_with(&coefficients, &Tolerance::default())
                            })
                            .expect("should solve");
                    }
                });
            }
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len(), 1);
    }
}
