use std::fmt;
use std::time::Duration;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::product::Product;

/// Which strategy produced a [`SearchResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Algorithm {
    Linear,
    Binary,
    BinaryRecursive,
    NameScan,
}

impl Algorithm {
    /// Human-readable label, stable across releases.
    pub fn label(self) -> &'static str {
        match self {
            Self::Linear          => "Linear Search",
            Self::Binary          => "Binary Search",
            Self::BinaryRecursive => "Binary Search (Recursive)",
            Self::NameScan        => "Linear Search (Name)",
        }
    }

    /// Worst-case comparison complexity in Big O notation.
    pub fn complexity(self) -> &'static str {
        match self {
            Self::Linear | Self::NameScan         => "O(n)",
            Self::Binary | Self::BinaryRecursive  => "O(log n)",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The outcome of one search invocation.
///
/// Created fresh per call. `product` is present iff the search found a match,
/// and `index` is the position of that match in the view that was searched
/// (original order for linear and name search, sorted order for binary).
///
/// Serializes as `{found, index, product, comparisons, elapsed, algorithm}`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<'a> {
    /// Strategy that produced this result.
    pub algorithm: Algorithm,

    /// Number of element-vs-target comparisons performed.
    pub comparisons: usize,

    /// Wall-clock time of the call. Zero until stamped by
    /// [`metrics::measure`](crate::metrics::measure).
    pub elapsed: Duration,

    index:   Option<usize>,
    product: Option<&'a Product>,
}

impl<'a> SearchResult<'a> {
    pub(crate) fn found(algorithm: Algorithm, index: usize, product: &'a Product, comparisons: usize) -> Self {
        Self {
            algorithm,
            comparisons,
            elapsed: Duration::ZERO,
            index:   Some(index),
            product: Some(product),
        }
    }

    pub(crate) fn not_found(algorithm: Algorithm, comparisons: usize) -> Self {
        Self {
            algorithm,
            comparisons,
            elapsed: Duration::ZERO,
            index:   None,
            product: None,
        }
    }

    pub fn is_found(&self) -> bool {
        self.index.is_some()
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn product(&self) -> Option<&'a Product> {
        self.product
    }
}

impl Serialize for SearchResult<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SearchResult", 6)?;
        state.serialize_field("found", &self.is_found())?;
        state.serialize_field("index", &self.index)?;
        state.serialize_field("product", &self.product)?;
        state.serialize_field("comparisons", &self.comparisons)?;
        state.serialize_field("elapsed", &self.elapsed)?;
        state.serialize_field("algorithm", &self.algorithm)?;
        state.end()
    }
}
