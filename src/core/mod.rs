//! Shared building blocks: sides, classifier configuration, and errors.

pub mod config;
pub mod error;
pub mod side;

pub use config::ClassifierConfig;
pub use error::{CatalogError, CatalogResult};
pub use side::Side;
