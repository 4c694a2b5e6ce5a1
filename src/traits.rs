use std::cmp::Ordering;

use log::trace;

use crate::product::ProductId;

/// One unit of work performed by a search algorithm.
///
/// Every `Step` corresponds to exactly one comparison, so the number of steps
/// an observer sees equals the `comparisons` of the resulting
/// [`SearchResult`](crate::SearchResult).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A sequential scan examined `position` (linear and name search).
    Scanned {
        position: usize,
        id:       ProductId,
        matched:  bool,
    },

    /// A binary probe at `mid` within the inclusive range `[left, right]`.
    /// `ordering` is the probed id compared to the target.
    Probed {
        left:     usize,
        right:    usize,
        mid:      usize,
        id:       ProductId,
        ordering: Ordering,
    },
}

/// Receives every comparison step of a single search call.
///
/// Observers are opt-in and supplied per call. The algorithms themselves keep
/// no trace state. Any `FnMut(&Step)` closure is an observer:
///
/// ```rust
/// use catalex::{engine, Catalog, Price, Product, ProductId, Step};
///
/// let catalog = Catalog::build(vec![
///     Product::new(7u32, "Kettle", "Kitchen", "Acme", Price::from_cents(2000)),
/// ]).unwrap();
///
/// let mut steps = Vec::new();
/// let result = engine::linear_search_with(
///     catalog.original(),
///     ProductId(7),
///     &mut |s: &Step| steps.push(*s),
/// );
///
/// assert_eq!(steps.len(), result.comparisons);
/// ```
pub trait SearchObserver {
    fn observe(&mut self, step: &Step);
}

impl<F> SearchObserver for F
where
    F: FnMut(&Step),
{
    fn observe(&mut self, step: &Step) {
        self(step)
    }
}

/// Discards every step. Used by the non-`_with` engine functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl SearchObserver for Silent {
    fn observe(&mut self, _step: &Step) {}
}

/// Emits one `log::trace!` line per step.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl SearchObserver for LogObserver {
    fn observe(&mut self, step: &Step) {
        match *step {
            Step::Scanned { position, id, matched } => {
                trace!("scan position {position} (id {id}) matched={matched}");
            }
            Step::Probed { left, right, mid, id, ordering } => {
                trace!("probe [{left}, {right}] mid={mid} (id {id}) {ordering:?} target");
            }
        }
    }
}
