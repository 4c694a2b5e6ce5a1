use thiserror::Error;

use crate::product::ProductId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalexError {
    // Catalog construction
    #[error("duplicate product id {id} at positions {first} and {second}")]
    DuplicateId {
        id:     ProductId,
        first:  usize,
        second: usize,
    },

    // Product construction
    #[error("rating {0} outside 0.0..=5.0")]
    InvalidRating(f64),
}

impl CatalexError {
    /// The product id this error refers to, if applicable.
    /// Callers use this to report "rejected: <id>" without matching on variants.
    pub fn product_id(&self) -> Option<ProductId> {
        match self {
            Self::DuplicateId { id, .. } => Some(*id),
            Self::InvalidRating(_)       => None,
        }
    }
}
