//! Decklist parsing and starting-card inference.
//!
//! ## Key Types
//!
//! - `DecklistParser`: Plaintext to `Decklist`, resolving card lines
//! - `Decklist`: Resolved cards, sections, and derived starting cards
//! - `DecklistLine`: One card line and its resolution outcome
//! - `DecklistRecord`: Serializable output
//!
//! Unresolved card lines are never fatal. They are logged with the raw
//! text, decklist URL and side, kept on the decklist, and skipped.

pub mod meta;
pub mod model;
pub mod parser;
pub mod record;
pub mod starting;

pub use meta::{
    confirmed_side, format_for_round, majority_side, marked_side, round_from_title,
    side_from_title, Format, ROUND_NAMES,
};
pub use model::{Decklist, DecklistEntry, DecklistLine};
pub use parser::{split_quantity, DecklistParser};
pub use record::{ArchetypeRef, CardRef, DecklistRecord, RecordCard};
pub use starting::{starting_interrupt, starting_location};
