//! Wall-clock instrumentation around a single search call.
//!
//! The engine counts comparisons; this module adds elapsed time. Nothing is
//! kept between calls.

use std::time::{Duration, Instant};

use crate::results::{Algorithm, SearchResult};

/// Output of a search call that can carry a measured duration.
pub trait Timed {
    /// The result of searching an empty view: nothing found, zero comparisons.
    fn empty(algorithm: Algorithm) -> Self;

    /// Record the measured wall-clock time.
    fn stamp(&mut self, elapsed: Duration);
}

impl Timed for SearchResult<'_> {
    fn empty(algorithm: Algorithm) -> Self {
        SearchResult::not_found(algorithm, 0)
    }

    fn stamp(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }
}

/// Name search yields one result per match; each gets the duration of the
/// whole scan.
impl Timed for Vec<SearchResult<'_>> {
    fn empty(_algorithm: Algorithm) -> Self {
        Vec::new()
    }

    fn stamp(&mut self, elapsed: Duration) {
        for result in self.iter_mut() {
            result.elapsed = elapsed;
        }
    }
}

/// Time `run` on a monotonic clock and stamp the result.
///
/// An empty view (`view_len == 0`) short-circuits to [`Timed::empty`] with a
/// zero duration; `run` is not called.
///
/// Comparison counts come from `run` unchanged, so repeated calls against the
/// same view and target agree on everything except `elapsed`.
pub fn measure<T, F>(algorithm: Algorithm, view_len: usize, run: F) -> T
where
    T: Timed,
    F: FnOnce() -> T,
{
    if view_len == 0 {
        return T::empty(algorithm);
    }

    let start = Instant::now();
    let mut result = run();
    let elapsed = start.elapsed();

    result.stamp(elapsed);
    result
}
