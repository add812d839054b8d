//! Archetype naming and the archetype registry.
//!
//! ## Key Types
//!
//! - `ArchetypeNamer`: Decklist to `CandidateArchetype` via the naming
//!   cascade, objective modifiers and trump rules
//! - `ArchetypeRegistry`: Ordered archetypes with loose name lookup and
//!   create-or-update merging
//! - `Archetype`: A named strategy and the decklists assigned to it
//!
//! ## Two Passes
//!
//! Every decklist is named from its cards first (seed pass). A second pass
//! reads the archetype hint at the end of the decklist title, attaches the
//! decklist URL to the archetype it names, and records the hint as a
//! matcher. Order matters in both passes: the first matching archetype
//! wins a lookup, and a later decklist can overwrite an archetype's side.

pub mod modifiers;
pub mod namer;
pub mod registry;
pub mod short_names;
pub mod titles;
pub mod trumps;

pub use modifiers::{objective_suffix, ObjectiveModifier, OBJECTIVE_MODIFIERS};
pub use namer::{
    ArchetypeNamer, CandidateArchetype, DeckView, NamingRule, NAMING_RULES, UNKNOWN_ARCHETYPE,
};
pub use registry::{Archetype, ArchetypeOverride, ArchetypeRegistry, MANUAL_OVERRIDES};
pub use short_names::{abbreviate, short_name, SHORT_NAMES, SUBSTRING_ABBREVIATIONS};
pub use titles::{raw_archetype_name, TOURNAMENT_SIGNIFIERS};
pub use trumps::{apply_trumps, TrumpRule, TRUMP_RULES};
