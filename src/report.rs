use std::fmt;

use serde::{Serialize, Serializer};

use crate::results::{Algorithm, SearchResult};

/// Dataset sizes used when the caller has no sizes of its own.
pub const DEFAULT_SIZES: [usize; 4] = [100, 1_000, 10_000, 100_000];

// ---------------------------------------------------------------------------
// Ratio
// ---------------------------------------------------------------------------

/// A speedup ratio, or `Undefined` when its denominator was zero.
///
/// Renders as `N/A` when undefined, `4.0x` otherwise. Serializes as a number
/// or the string `"N/A"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ratio {
    Value(f64),
    Undefined,
}

impl Ratio {
    pub fn of(numerator: f64, denominator: f64) -> Self {
        if denominator == 0.0 {
            Self::Undefined
        } else {
            Self::Value(numerator / denominator)
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::Undefined => None,
        }
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v:.1}x"),
            Self::Undefined => f.write_str("N/A"),
        }
    }
}

impl Serialize for Ratio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => serializer.serialize_f64(*v),
            Self::Undefined => serializer.serialize_str("N/A"),
        }
    }
}

// ---------------------------------------------------------------------------
// Comparison
// ---------------------------------------------------------------------------

/// How much cheaper `candidate` was than `baseline` for the same target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Comparison {
    /// `baseline.comparisons / candidate.comparisons`.
    pub comparison_ratio: Ratio,

    /// `baseline.elapsed / candidate.elapsed`.
    pub time_ratio: Ratio,
}

impl Comparison {
    pub fn between(baseline: &SearchResult<'_>, candidate: &SearchResult<'_>) -> Self {
        Self {
            comparison_ratio: Ratio::of(baseline.comparisons as f64, candidate.comparisons as f64),
            time_ratio:       Ratio::of(
                baseline.elapsed.as_secs_f64(),
                candidate.elapsed.as_secs_f64(),
            ),
        }
    }

    /// Linear search against binary search, picked out of `results` by
    /// algorithm. The iterative binary result is preferred over the recursive
    /// one. If either side is missing both ratios are undefined.
    pub fn from_results(results: &[SearchResult<'_>]) -> Self {
        let find = |algorithm: Algorithm| results.iter().find(|r| r.algorithm == algorithm);

        let baseline = find(Algorithm::Linear);
        let candidate = find(Algorithm::Binary).or_else(|| find(Algorithm::BinaryRecursive));

        match (baseline, candidate) {
            (Some(b), Some(c)) => Self::between(b, c),
            _ => Self::undefined(),
        }
    }

    fn undefined() -> Self {
        Self {
            comparison_ratio: Ratio::Undefined,
            time_ratio:       Ratio::Undefined,
        }
    }
}

// ---------------------------------------------------------------------------
// Scalability projection
// ---------------------------------------------------------------------------

/// Theoretical worst-case comparison counts for a dataset of `n` products.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScalabilityRow {
    pub n:            usize,
    pub linear_worst: usize,
    pub binary_worst: usize,
    pub factor:       f64,
}

/// Project worst cases for size `n`: `n` comparisons for linear search and
/// `max(1, ceil(log2(n)))` for binary search.
pub fn project(n: usize) -> ScalabilityRow {
    let linear_worst = n;
    let binary_worst = ceil_log2(n).max(1);

    ScalabilityRow {
        n,
        linear_worst,
        binary_worst,
        factor: linear_worst as f64 / binary_worst as f64,
    }
}

/// One [`ScalabilityRow`] per size, in the order given.
pub fn scalability(sizes: &[usize]) -> Vec<ScalabilityRow> {
    sizes.iter().map(|&n| project(n)).collect()
}

/// Exact `ceil(log2(n))`; zero for `n <= 1`.
fn ceil_log2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        (usize::BITS - (n - 1).leading_zeros()) as usize
    }
}
