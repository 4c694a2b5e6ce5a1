use std::collections::HashMap;
use std::ops::Deref;

use log::{debug, warn};

use crate::engine;
use crate::error::CatalexError;
use crate::metrics::measure;
use crate::product::{Product, ProductId};
use crate::results::{Algorithm, SearchResult};

// ---------------------------------------------------------------------------
// SortedView
// ---------------------------------------------------------------------------

/// A slice of products ordered strictly ascending by id.
///
/// Binary search only accepts this type, so the sorted-order precondition is
/// checked once (at catalog construction or by [`SortedView::new`]) rather
/// than trusted on every call.
#[derive(Debug, Clone, Copy)]
pub struct SortedView<'a>(&'a [Product]);

impl<'a> SortedView<'a> {
    /// Wrap `products` if its ids are strictly ascending, `None` otherwise.
    pub fn new(products: &'a [Product]) -> Option<Self> {
        products
            .windows(2)
            .all(|w| w[0].id < w[1].id)
            .then_some(Self(products))
    }

    pub fn as_slice(&self) -> &'a [Product] {
        self.0
    }
}

impl Deref for SortedView<'_> {
    type Target = [Product];

    fn deref(&self) -> &[Product] {
        self.0
    }
}

// ---------------------------------------------------------------------------
// Scenario
// ---------------------------------------------------------------------------

/// Position-based case analysis over the original (insertion) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// First product: linear search finds it in one comparison.
    Best,
    /// Last product: linear search scans everything.
    Worst,
    /// Product at `len / 2`.
    Average,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// The immutable product collection and its two views.
///
/// Built once from an externally supplied sequence; there is no mutation API.
/// `Catalog` is `Send + Sync`, so any number of threads may search it at once.
#[derive(Debug, Clone)]
pub struct Catalog {
    original: Vec<Product>,
    sorted:   Vec<Product>,
}

impl Catalog {
    /// Build a catalog, sorting a copy of `products` by id.
    ///
    /// # Errors
    ///
    /// [`CatalexError::DuplicateId`] if two products share an id. Positions
    /// refer to insertion order.
    pub fn build(products: impl IntoIterator<Item = Product>) -> Result<Self, CatalexError> {
        let original: Vec<Product> = products.into_iter().collect();

        let mut seen = HashMap::with_capacity(original.len());
        for (position, product) in original.iter().enumerate() {
            if let Some(first) = seen.insert(product.id, position) {
                warn!("rejecting catalog: product id {} repeated", product.id);
                return Err(CatalexError::DuplicateId {
                    id:     product.id,
                    first,
                    second: position,
                });
            }
        }

        // Ids are unique, so an unstable sort is still fully deterministic.
        let mut sorted = original.clone();
        sorted.sort_unstable_by_key(|p| p.id);

        debug!("built catalog with {} products", original.len());
        Ok(Self { original, sorted })
    }

    /// Products in insertion order.
    pub fn original(&self) -> &[Product] {
        &self.original
    }

    /// Products in ascending id order.
    pub fn sorted(&self) -> SortedView<'_> {
        SortedView(&self.sorted)
    }

    pub fn len(&self) -> usize {
        self.original.len()
    }

    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    /// Uninstrumented lookup by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.sorted
            .binary_search_by_key(&id, |p| p.id)
            .ok()
            .map(|i| &self.sorted[i])
    }

    /// The id sitting at the scenario's position in the original order.
    /// `None` for an empty catalog.
    pub fn scenario_target(&self, scenario: Scenario) -> Option<ProductId> {
        let position = match scenario {
            Scenario::Best    => 0,
            Scenario::Worst   => self.original.len().checked_sub(1)?,
            Scenario::Average => self.original.len() / 2,
        };
        self.original.get(position).map(|p| p.id)
    }

    // ── Instrumented searches ─────────────────────────────────────────────

    /// Timed linear search over the original order.
    pub fn linear(&self, target: ProductId) -> SearchResult<'_> {
        let view = self.original();
        measure(Algorithm::Linear, view.len(), || engine::linear_search(view, target))
    }

    /// Timed iterative binary search over the sorted view.
    pub fn binary(&self, target: ProductId) -> SearchResult<'_> {
        let view = self.sorted();
        measure(Algorithm::Binary, view.len(), || engine::binary_search(view, target))
    }

    /// Timed recursive binary search over the sorted view.
    pub fn binary_recursive(&self, target: ProductId) -> SearchResult<'_> {
        let view = self.sorted();
        measure(Algorithm::BinaryRecursive, view.len(), || {
            engine::binary_search_recursive(view, target)
        })
    }

    /// Timed substring search over the original order.
    pub fn search_by_name(&self, term: &str) -> Vec<SearchResult<'_>> {
        let view = self.original();
        measure(Algorithm::NameScan, view.len(), || engine::search_by_name(view, term))
    }
}
