use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CatalexError;

// ---------------------------------------------------------------------------
// ProductId
// ---------------------------------------------------------------------------

/// Catalog-unique product identifier. The sole ordering key of the sorted view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

// ---------------------------------------------------------------------------
// Price
// ---------------------------------------------------------------------------

/// Fixed-point price in minor units (cents). Non-negative by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// `Price::new(999, 99)` is `999.99`. `cents` above 99 carries into units.
    /// `None` if the total does not fit in a `u64` count of cents.
    pub const fn new(units: u64, cents: u64) -> Option<Self> {
        match units.checked_mul(100) {
            Some(whole) => match whole.checked_add(cents) {
                Some(total) => Some(Self(total)),
                None => None,
            },
            None => None,
        }
    }

    pub const fn cents(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

// ---------------------------------------------------------------------------
// Rating
// ---------------------------------------------------------------------------

/// Customer rating in `0.0..=5.0`.
///
/// Deserialization goes through [`Rating::new`], so a catalog loaded from JSON
/// can never carry an out-of-range value.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Rating(f64);

impl Rating {
    pub const MAX: f64 = 5.0;

    pub fn new(value: f64) -> Result<Self, CatalexError> {
        if (0.0..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            // NaN lands here too: it is never contained in a range.
            Err(CatalexError::InvalidRating(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Rating {
    type Error = CatalexError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for f64 {
    fn from(r: Rating) -> Self {
        r.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// ---------------------------------------------------------------------------
// Product
// ---------------------------------------------------------------------------

/// A single catalog entry.
///
/// Fields are public for reading; once a product is inside a
/// [`Catalog`](crate::Catalog) only shared references are ever handed out,
/// so it cannot change for the lifetime of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog-unique identifier; the sort key of the sorted view.
    pub id: ProductId,

    /// Display name. Searched by [`engine::search_by_name`](crate::engine::search_by_name).
    pub name: String,

    /// Category label, e.g. `Electronics`. Searched by name search.
    pub category: String,

    /// Manufacturer or label. Searched by name search.
    pub brand: String,

    /// Unit price in fixed-point cents.
    pub price: Price,

    /// Units in stock. Defaults to zero.
    #[serde(default)]
    pub stock_quantity: u32,

    /// Customer rating in `0.0..=5.0`. Defaults to `0.0`.
    #[serde(default)]
    pub rating: Rating,

    /// Informational only. Never used for ordering or matching.
    #[serde(default = "Utc::now")]
    pub added_at: DateTime<Utc>,
}

impl Product {
    /// Create a product with zero stock, a `0.0` rating and `added_at = now`.
    /// Chain `with_*` to fill in the rest.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<String>,
        brand: impl Into<String>,
        price: Price,
    ) -> Self {
        Self {
            id:             id.into(),
            name:           name.into(),
            category:       category.into(),
            brand:          brand.into(),
            price,
            stock_quantity: 0,
            rating:         Rating::default(),
            added_at:       Utc::now(),
        }
    }

    pub fn with_stock(mut self, quantity: u32) -> Self {
        self.stock_quantity = quantity;
        self
    }

    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_added_at(mut self, at: DateTime<Utc>) -> Self {
        self.added_at = at;
        self
    }

    /// Whether `term` occurs in this product's searchable text.
    ///
    /// Name, category and brand are compared ASCII case-insensitively.
    /// The id is matched literally against its decimal form.
    /// `term_lower` must be `term` already ASCII-lowercased.
    pub(crate) fn matches_term(&self, term: &str, term_lower: &str) -> bool {
        self.name.to_ascii_lowercase().contains(term_lower)
            || self.category.to_ascii_lowercase().contains(term_lower)
            || self.brand.to_ascii_lowercase().contains(term_lower)
            || self.id.to_string().contains(term)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} | {} | {} | ${} | Stock: {} | Rating: {:.1}★",
            self.id,
            self.name,
            self.category,
            self.brand,
            self.price,
            self.stock_quantity,
            self.rating,
        )
    }
}
