//! Card system: definitions, catalog, and name resolution.
//!
//! ## Key Types
//!
//! - `CardId`: Catalog identifier for a card
//! - `Card`: Static card data with a front and optional back `Face`
//! - `FaceKind`: Card type with its type-specific data
//! - `Catalog`: Validated, indexed card collection
//! - `CardResolver`: Raw decklist name to catalog card
//!
//! ## Blanked Cards
//!
//! Cards retired by errata are still named in older decklists. The catalog
//! loader adds virtual copies for them (see `blanked`), and the resolver
//! maps renamed titles onto their current printing.

pub mod blanked;
pub mod catalog;
pub mod definition;
pub mod resolver;

pub use blanked::{blanked_cards, BlankedCard, BLANKED_CARDS};
pub use catalog::{Catalog, STARTING_SECTION};
pub use definition::{Card, CardId, CardType, Face, FaceKind, LocationIcons, UnitStats};
pub use resolver::{renamed_title, CardQuery, CardResolver};
