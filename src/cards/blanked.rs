//! Synthetic catalog entries for blanked cards.
//!
//! Some cards were later blanked and reprinted as virtual cards that share
//! the original's game text. Older decklists still name the virtual printing,
//! so a copy of the original is added under the virtual title.

use super::definition::{Card, CardId};

/// A virtual card cloned from an existing catalog card.
#[derive(Clone, Copy, Debug)]
pub struct BlankedCard {
    /// ID of the card to copy.
    pub source: &'static str,
    /// ID assigned to the copy.
    pub id: &'static str,
    /// Front title of the copy.
    pub title: &'static str,
    /// Suffix appended to each of the source's aliases.
    pub alias_suffix: &'static str,
}

/// Virtual cards added at catalog load time.
pub const BLANKED_CARDS: &[BlankedCard] = &[BlankedCard {
    source: "7_300",
    id: "7_300v",
    title: "Ralltiir Operations / In The Hands Of The Empire (V)",
    alias_suffix: " (V)",
}];

/// Build the synthetic cards whose sources exist in `cards`.
///
/// Sources missing from the catalog are skipped.
#[must_use]
pub fn blanked_cards(cards: &[Card]) -> Vec<Card> {
    BLANKED_CARDS
        .iter()
        .filter_map(|blanked| {
            let Some(source) = cards.iter().find(|c| c.id.as_str() == blanked.source) else {
                tracing::debug!(source = blanked.source, "blanked card source missing");
                return None;
            };
            let mut copy = source.retitled(CardId::new(blanked.id), blanked.title);
            copy.aliases = source
                .aliases
                .iter()
                .map(|alias| format!("{alias}{}", blanked.alias_suffix))
                .collect();
            Some(copy)
        })
        .collect()
}
