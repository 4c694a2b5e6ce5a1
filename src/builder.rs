use log::debug;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::engine;
use crate::metrics::measure;
use crate::product::ProductId;
use crate::report::Comparison;
use crate::results::{Algorithm, SearchResult};
use crate::traits::{LogObserver, SearchObserver, Silent};

// ---------------------------------------------------------------------------
// ComparisonBuilder
// ---------------------------------------------------------------------------

/// Runs linear, binary and recursive binary search for one target and compares them.
///
/// Created via [`catalex::compare()`](crate::compare). Configure with chained
/// builder methods, then call [`run()`](ComparisonBuilder::run).
///
/// # Example
///
/// ```rust,ignore
/// let report = catalex::compare(&catalog, ProductId(7004))
///     .repeat(5)
///     .trace(true)
///     .run();
/// ```
pub struct ComparisonBuilder<'c> {
    catalog: &'c Catalog,
    target:  ProductId,
    repeat:  usize,
    trace:   bool,
}

impl<'c> ComparisonBuilder<'c> {
    pub(crate) fn new(catalog: &'c Catalog, target: ProductId) -> Self {
        Self {
            catalog,
            target,
            repeat: 1,
            trace:  false,
        }
    }

    // ── Options ───────────────────────────────────────────────────────────

    /// Run each algorithm `n` times and keep the fastest run.
    ///
    /// Comparison counts are identical across runs; only `elapsed` varies.
    /// `0` is treated as `1`.
    pub fn repeat(mut self, n: usize) -> Self {
        self.repeat = n.max(1);
        self
    }

    /// Log every comparison step at `trace` level through [`LogObserver`].
    ///
    /// Disabled by default.
    pub fn trace(mut self, yes: bool) -> Self {
        self.trace = yes;
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Execute all three searches and compute the comparison.
    ///
    /// Linear search runs over the original order; both binary variants run
    /// over the sorted view.
    pub fn run(self) -> ComparisonReport<'c> {
        let original = self.catalog.original();
        let sorted   = self.catalog.sorted();
        let target   = self.target;

        let mut log    = LogObserver;
        let mut silent = Silent;
        let observer: &mut dyn SearchObserver = if self.trace { &mut log } else { &mut silent };

        let linear = best_of(self.repeat, || {
            measure(Algorithm::Linear, original.len(), || {
                engine::linear_search_with(original, target, &mut *observer)
            })
        });

        let binary = best_of(self.repeat, || {
            measure(Algorithm::Binary, sorted.len(), || {
                engine::binary_search_with(sorted, target, &mut *observer)
            })
        });

        let recursive = best_of(self.repeat, || {
            measure(Algorithm::BinaryRecursive, sorted.len(), || {
                engine::binary_search_recursive_with(sorted, target, &mut *observer)
            })
        });

        let comparison = Comparison::between(&linear, &binary);

        debug!(
            "compared searches for id {target}: linear {} / binary {} comparisons ({})",
            linear.comparisons,
            binary.comparisons,
            comparison.comparison_ratio,
        );

        ComparisonReport {
            target,
            linear,
            binary,
            recursive,
            comparison,
        }
    }
}

// ---------------------------------------------------------------------------
// ComparisonReport
// ---------------------------------------------------------------------------

/// The output of [`ComparisonBuilder::run`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport<'a> {
    pub target: ProductId,

    /// Linear search over the original order.
    pub linear: SearchResult<'a>,

    /// Iterative binary search over the sorted view.
    pub binary: SearchResult<'a>,

    /// Recursive binary search over the sorted view.
    pub recursive: SearchResult<'a>,

    /// Linear against iterative binary.
    pub comparison: Comparison,
}

impl<'a> ComparisonReport<'a> {
    /// Linear, binary and recursive results, in that order.
    pub fn results(&self) -> [&SearchResult<'a>; 3] {
        [&self.linear, &self.binary, &self.recursive]
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Call `run` `repeat` times and keep the result with the smallest `elapsed`.
fn best_of<'a>(repeat: usize, mut run: impl FnMut() -> SearchResult<'a>) -> SearchResult<'a> {
    let mut best = run();

    for _ in 1..repeat {
        let next = run();
        debug_assert_eq!(
            (next.index(), next.comparisons),
            (best.index(), best.comparisons),
            "search outcome changed between runs",
        );
        if next.elapsed < best.elapsed {
            best = next;
        }
    }

    best
}
