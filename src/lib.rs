//! # catalex
//!
//! Instrumented product-catalog search: linear search, iterative and
//! recursive binary search, and substring search, each run returning its
//! comparison count and elapsed wall-clock time, plus the arithmetic to
//! compare them.
//!
//! catalex owns the catalog, the algorithms, the instrumentation and the
//! comparison math. It does **not** own sample data, console output or a
//! CLI. Those belong to the caller.
//!
//! # Quick Start
//!
//! ```rust
//! use catalex::{Catalog, Price, Product, ProductId};
//!
//! let catalog = Catalog::build(vec![
//!     Product::new(3007u32, "Nike Air Max 270", "Footwear", "Nike", Price::from_cents(14999)),
//!     Product::new(1001u32, "iPhone 15 Pro", "Electronics", "Apple", Price::from_cents(99999)),
//!     Product::new(2003u32, "Samsung Galaxy S24", "Electronics", "Samsung", Price::from_cents(89999)),
//! ]).unwrap();
//!
//! let report = catalex::compare(&catalog, ProductId(2003)).run();
//!
//! assert!(report.binary.is_found());
//! assert_eq!(report.linear.comparisons, 3);
//! assert_eq!(report.binary.comparisons, 1);
//! println!("binary search used {} fewer comparisons", report.comparison.comparison_ratio);
//! ```
//!
//! # Using the pieces directly
//!
//! The [`engine`] functions are pure and take a view; the [`metrics`] module
//! adds timing; the [`report`] module turns results into ratios and
//! projections:
//!
//! ```rust
//! use catalex::{engine, metrics, report, Algorithm, Catalog, Price, Product, ProductId};
//!
//! let catalog = Catalog::build(vec![
//!     Product::new(1u32, "Kettle", "Kitchen", "Acme", Price::from_cents(2500)),
//!     Product::new(2u32, "Toaster", "Kitchen", "Acme", Price::from_cents(4000)),
//! ]).unwrap();
//!
//! let sorted = catalog.sorted();
//! let result = metrics::measure(Algorithm::Binary, sorted.len(), || {
//!     engine::binary_search(sorted, ProductId(2))
//! });
//! assert_eq!(result.index(), Some(1));
//!
//! let row = report::project(100_000);
//! assert_eq!(row.binary_worst, 17);
//! ```

#![forbid(unsafe_code)]

pub mod engine;
pub mod metrics;
pub mod report;

mod builder;
mod catalog;
mod error;
mod product;
mod results;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::{ComparisonBuilder, ComparisonReport};
pub use catalog::{Catalog, Scenario, SortedView};
pub use error::CatalexError;
pub use product::{Price, Product, ProductId, Rating};
pub use report::{Comparison, Ratio, ScalabilityRow};
pub use results::{Algorithm, SearchResult};
pub use traits::{LogObserver, SearchObserver, Silent, Step};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a [`ComparisonBuilder`] that searches `catalog` for `target` with
/// every id-based algorithm.
///
/// # Example
///
/// ```rust
/// use catalex::{Catalog, Price, Product, ProductId};
///
/// let catalog = Catalog::build(vec![
///     Product::new(10u32, "Lamp", "Home", "Lumen", Price::from_cents(3000)),
///     Product::new(20u32, "Desk", "Home", "Oakly", Price::from_cents(18000)),
/// ]).unwrap();
///
/// let report = catalex::compare(&catalog, ProductId(99)).repeat(3).run();
///
/// assert!(!report.linear.is_found());
/// assert_eq!(report.linear.comparisons, 2);
/// ```
pub fn compare(catalog: &Catalog, target: ProductId) -> ComparisonBuilder<'_> {
    ComparisonBuilder::new(catalog, target)
}
