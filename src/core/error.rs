//! Errors raised while building a card catalog.
//!
//! Everything downstream of the catalog is recoverable: unresolved lines,
//! missing objectives, and ambiguous inferences fall through to less specific
//! results instead of failing.

use thiserror::Error;

use super::Side;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate card id {id}")]
    DuplicateId { id: String },

    /// Two cards of one side collapse onto the same resolution key.
    #[error("{side} cards {first} and {second} both resolve as \"{key}\"")]
    DuplicateIdentity {
        side: Side,
        key: String,
        first: String,
        second: String,
    },
}

pub type CatalogResult<T> = Result<T, CatalogError>;
