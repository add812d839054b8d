//! Serializable decklist output.

use serde::{Deserialize, Serialize};

use super::meta::{format_for_round, round_from_title, Format};
use super::model::Decklist;
use crate::cards::Card;
use crate::core::Side;

/// A card named by a record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRef {
    pub card_id: String,
    pub title: String,
}

impl From<&Card> for CardRef {
    fn from(card: &Card) -> Self {
        Self {
            card_id: card.id.to_string(),
            title: card.display_title().to_string(),
        }
    }
}

/// A card and its quantity in a record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordCard {
    pub card_id: String,
    pub title: String,
    pub quantity: u32,
}

/// The archetype a record was assigned to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchetypeRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
}

/// Structured output for one decklist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecklistRecord {
    pub url: String,
    pub title: String,
    pub date: String,
    pub side: Side,
    pub cards: Vec<RecordCard>,
    pub count: u32,
    pub objective: Option<CardRef>,
    pub starting_interrupt: Option<CardRef>,
    pub starting_location: Option<CardRef>,
    pub archetype: Option<ArchetypeRef>,
    pub round: Option<String>,
    pub format: Option<Format>,
}

impl DecklistRecord {
    /// Build the record for a parsed decklist.
    #[must_use]
    pub fn new(decklist: &Decklist<'_>, archetype: Option<ArchetypeRef>) -> Self {
        let round = round_from_title(&decklist.title);
        Self {
            url: decklist.url.clone(),
            title: decklist.title.clone(),
            date: decklist.date.clone(),
            side: decklist.side,
            cards: decklist
                .entries
                .iter()
                .map(|entry| RecordCard {
                    card_id: entry.card.id.to_string(),
                    title: entry.card.display_title().to_string(),
                    quantity: entry.quantity,
                })
                .collect(),
            count: decklist.count(),
            objective: decklist.objective.map(CardRef::from),
            starting_interrupt: decklist.starting_interrupt.map(CardRef::from),
            starting_location: decklist.starting_location.map(CardRef::from),
            archetype,
            round: round.map(str::to_string),
            format: round.map(format_for_round),
        }
    }
}
