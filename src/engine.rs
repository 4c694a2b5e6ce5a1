use std::cmp::Ordering;

use crate::catalog::SortedView;
use crate::product::{Product, ProductId};
use crate::results::{Algorithm, SearchResult};
use crate::traits::{SearchObserver, Silent, Step};

// ---------------------------------------------------------------------------
// Binary search state machine
// ---------------------------------------------------------------------------

/// State of a binary search over inclusive bounds.
///
/// `Searching` always holds `left <= right < len`. `Found` and `NotFound` are
/// terminal: [`advance`](BinaryState::advance) returns them unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryState {
    Searching { left: usize, right: usize },
    Found(usize),
    NotFound,
}

impl BinaryState {
    /// `Searching(0, len - 1)`, or `NotFound` straight away for an empty view.
    pub fn start(len: usize) -> Self {
        match len.checked_sub(1) {
            Some(right) => Self::Searching { left: 0, right },
            None        => Self::NotFound,
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Searching { .. })
    }

    /// Perform one probe. Costs exactly one comparison when `self` is
    /// `Searching`, none otherwise.
    pub fn advance<O>(self, view: SortedView<'_>, target: ProductId, observer: &mut O) -> Self
    where
        O: SearchObserver + ?Sized,
    {
        match self {
            Self::Searching { left, right } => probe(view, target, left, right, observer),
            terminal                        => terminal,
        }
    }
}

/// Compare the midpoint of `[left, right]` against `target` and pick the next state.
fn probe<O>(view: SortedView<'_>, target: ProductId, left: usize, right: usize, observer: &mut O) -> BinaryState
where
    O: SearchObserver + ?Sized,
{
    let mid = left + (right - left) / 2;
    let id = view[mid].id;
    let ordering = id.cmp(&target);

    observer.observe(&Step::Probed { left, right, mid, id, ordering });

    match ordering {
        Ordering::Equal => BinaryState::Found(mid),
        Ordering::Less if mid < right => BinaryState::Searching { left: mid + 1, right },
        Ordering::Greater if mid > left => BinaryState::Searching { left, right: mid - 1 },
        // The range collapsed: left > right.
        _ => BinaryState::NotFound,
    }
}

// ---------------------------------------------------------------------------
// Linear search
// ---------------------------------------------------------------------------

/// Scan `view` front to back for `target`.
///
/// One comparison per element examined, the match included. An absent target
/// costs exactly `view.len()` comparisons.
pub fn linear_search(view: &[Product], target: ProductId) -> SearchResult<'_> {
    linear_search_with(view, target, &mut Silent)
}

/// [`linear_search`] reporting every comparison to `observer`.
pub fn linear_search_with<'a, O>(view: &'a [Product], target: ProductId, observer: &mut O) -> SearchResult<'a>
where
    O: SearchObserver + ?Sized,
{
    for (position, product) in view.iter().enumerate() {
        let matched = product.id == target;
        observer.observe(&Step::Scanned { position, id: product.id, matched });

        if matched {
            return SearchResult::found(Algorithm::Linear, position, product, position + 1);
        }
    }

    SearchResult::not_found(Algorithm::Linear, view.len())
}

// ---------------------------------------------------------------------------
// Binary search
// ---------------------------------------------------------------------------

/// Iterative binary search over inclusive bounds.
///
/// Never exceeds `floor(log2(n)) + 1` comparisons.
pub fn binary_search(view: SortedView<'_>, target: ProductId) -> SearchResult<'_> {
    binary_search_with(view, target, &mut Silent)
}

/// [`binary_search`] reporting every probe to `observer`.
pub fn binary_search_with<'a, O>(view: SortedView<'a>, target: ProductId, observer: &mut O) -> SearchResult<'a>
where
    O: SearchObserver + ?Sized,
{
    let mut state = BinaryState::start(view.len());
    let mut comparisons = 0;

    while !state.is_terminal() {
        state = state.advance(view, target, observer);
        comparisons += 1;
    }

    finish(Algorithm::Binary, view, state, comparisons)
}

/// Recursive binary search. Same probes, same result and same comparison
/// count as [`binary_search`] for every view and target.
pub fn binary_search_recursive(view: SortedView<'_>, target: ProductId) -> SearchResult<'_> {
    binary_search_recursive_with(view, target, &mut Silent)
}

/// [`binary_search_recursive`] reporting every probe to `observer`.
pub fn binary_search_recursive_with<'a, O>(
    view: SortedView<'a>,
    target: ProductId,
    observer: &mut O,
) -> SearchResult<'a>
where
    O: SearchObserver + ?Sized,
{
    let (state, comparisons) = match BinaryState::start(view.len()) {
        BinaryState::Searching { left, right } => descend(view, target, left, right, 0, observer),
        terminal                               => (terminal, 0),
    };

    finish(Algorithm::BinaryRecursive, view, state, comparisons)
}

/// Recurse on `[left, right]`, threading the comparison count through.
fn descend<O>(
    view: SortedView<'_>,
    target: ProductId,
    left: usize,
    right: usize,
    comparisons: usize,
    observer: &mut O,
) -> (BinaryState, usize)
where
    O: SearchObserver + ?Sized,
{
    match probe(view, target, left, right, observer) {
        BinaryState::Searching { left, right } => descend(view, target, left, right, comparisons + 1, observer),
        terminal                               => (terminal, comparisons + 1),
    }
}

fn finish(algorithm: Algorithm, view: SortedView<'_>, state: BinaryState, comparisons: usize) -> SearchResult<'_> {
    match state {
        BinaryState::Found(index) => {
            SearchResult::found(algorithm, index, &view.as_slice()[index], comparisons)
        }
        _ => SearchResult::not_found(algorithm, comparisons),
    }
}

// ---------------------------------------------------------------------------
// Name search
// ---------------------------------------------------------------------------

/// Every product whose name, category or brand contains `term` (ASCII
/// case-insensitive), or whose decimal id contains `term` literally.
///
/// Results keep the order of `view`. Each result's `comparisons` is the
/// 1-based scan position of its product. An empty or all-whitespace `term`
/// matches nothing.
pub fn search_by_name<'a>(view: &'a [Product], term: &str) -> Vec<SearchResult<'a>> {
    search_by_name_with(view, term, &mut Silent)
}

/// [`search_by_name`] reporting every examined product to `observer`.
pub fn search_by_name_with<'a, O>(view: &'a [Product], term: &str, observer: &mut O) -> Vec<SearchResult<'a>>
where
    O: SearchObserver + ?Sized,
{
    if term.trim().is_empty() {
        return Vec::new();
    }

    let term_lower = term.to_ascii_lowercase();
    let mut results = Vec::new();

    for (position, product) in view.iter().enumerate() {
        let matched = product.matches_term(term, &term_lower);
        observer.observe(&Step::Scanned { position, id: product.id, matched });

        if matched {
            results.push(SearchResult::found(Algorithm::NameScan, position, product, position + 1));
        }
    }

    results
}
