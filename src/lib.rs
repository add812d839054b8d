//! # swccg-decklists
//!
//! Classifies Star Wars CCG tournament decklists into named archetypes.
//!
//! ## Design Principles
//!
//! 1. **Descriptive, Not Validating**: A decklist never fails to classify.
//!    Unresolved lines are logged and skipped; missing signals fall through
//!    to less specific names, ending at "Unknown".
//!
//! 2. **Rules As Data**: Title corrections, starting-location rules, naming
//!    rules and trump rules are ordered tables. Their order is their
//!    precedence.
//!
//! 3. **Order Is Observable**: Decklists are classified in input order and
//!    the archetype registry depends on it.
//!
//! ## Pipeline
//!
//! - **Normalize**: Card titles to display titles and comparison keys
//! - **Resolve**: Decklist lines to catalog cards, by side and qualifier
//! - **Parse**: Plaintext to a `Decklist` with starting cards inferred
//! - **Name**: Decklist to a candidate archetype
//! - **Register**: Merge candidates into the `ArchetypeRegistry`
//!
//! ## Modules
//!
//! - `core`: Sides, classifier configuration, errors
//! - `text`: Title normalizer and correction tables
//! - `cards`: Card definitions, catalog, and name resolution
//! - `decklist`: Decklist parsing, starting cards, output records
//! - `archetypes`: Archetype naming and the registry
//! - `pipeline`: Batch classification

pub mod core;
pub mod text;
pub mod cards;
pub mod decklist;
pub mod archetypes;
pub mod pipeline;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{CatalogError, CatalogResult, ClassifierConfig, Side};

pub use crate::text::{comparable_string, comparison_key, display_title};

pub use crate::cards::{
    Card, CardId, CardQuery, CardResolver, CardType, Catalog, Face, FaceKind, LocationIcons,
    UnitStats,
};

pub use crate::decklist::{Decklist, DecklistEntry, DecklistLine, DecklistParser, DecklistRecord, Format};

pub use crate::archetypes::{
    Archetype, ArchetypeNamer, ArchetypeRegistry, CandidateArchetype, TrumpRule,
};

pub use crate::pipeline::{Pipeline, PipelineOutput, PipelineReport};
