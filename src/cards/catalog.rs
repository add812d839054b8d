//! Card catalog for title and ID lookup.
//!
//! The `Catalog` stores every card from both sides in load order and
//! indexes them by ID and by comparison key. It is built once and never
//! mutated.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;
use smallvec::SmallVec;

use super::blanked::blanked_cards;
use super::definition::{Card, CardId, CardType};
use crate::core::{CatalogError, CatalogResult};

/// Header of the section listing starting cards.
pub const STARTING_SECTION: &str = "STARTING";

/// Immutable collection of cards.
///
/// Construction checks that no two cards share an ID and that, within a
/// side, no two cards share the same comparison key, Episode I flag and
/// set.
///
/// ## Example
///
/// ```
/// use swccg_decklists::cards::{Card, CardId, Catalog, Face, FaceKind};
/// use swccg_decklists::core::Side;
///
/// let catalog = Catalog::new(vec![
///     Card::new(CardId::new("1_1"), Side::Light, "1", Face::new("Sense", FaceKind::Interrupt)),
/// ])
/// .unwrap();
///
/// let found = catalog.get(&CardId::new("1_1")).unwrap();
/// assert_eq!(found.display_title(), "Sense");
/// assert_eq!(catalog.with_key("sense").count(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    cards: Vec<Card>,
    by_id: FxHashMap<CardId, usize>,
    by_key: FxHashMap<String, SmallVec<[usize; 2]>>,
    section_headers: Vec<String>,
}

#[derive(Deserialize)]
struct CatalogFile {
    cards: Vec<Card>,
}

impl Catalog {
    /// Build a catalog from cards in lookup-priority order.
    pub fn new(cards: Vec<Card>) -> CatalogResult<Self> {
        let mut by_id = FxHashMap::default();
        let mut by_key: FxHashMap<String, SmallVec<[usize; 2]>> = FxHashMap::default();

        for (index, card) in cards.iter().enumerate() {
            if by_id.insert(card.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateId {
                    id: card.id.to_string(),
                });
            }

            let same_key = by_key.entry(card.comparison_key().to_string()).or_default();
            if let Some(&other) = same_key.iter().find(|&&other| {
                let other = &cards[other];
                other.side == card.side
                    && other.is_episode_one() == card.is_episode_one()
                    && other.set == card.set
            }) {
                return Err(CatalogError::DuplicateIdentity {
                    side: card.side,
                    key: card.comparison_key().to_string(),
                    first: cards[other].id.to_string(),
                    second: card.id.to_string(),
                });
            }
            same_key.push(index);
        }

        let section_headers = section_headers(&cards);
        tracing::debug!(cards = cards.len(), "catalog built");

        Ok(Self {
            cards,
            by_id,
            by_key,
            section_headers,
        })
    }

    /// Parse both sides' catalog JSON and add the synthetic blanked cards.
    ///
    /// Each document has the shape `{ "cards": [ ... ] }`. Dark side cards
    /// come first in lookup order.
    pub fn load(dark_json: &str, light_json: &str) -> CatalogResult<Self> {
        let mut cards = Self::parse_side(dark_json)?;
        cards.extend(Self::parse_side(light_json)?);
        let blanked = blanked_cards(&cards);
        cards.extend(blanked);
        Self::new(cards)
    }

    /// Parse one side's catalog document.
    pub fn parse_side(json: &str) -> CatalogResult<Vec<Card>> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Ok(file.cards)
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.by_id.get(id).map(|&index| &self.cards[index])
    }

    /// Check if a card ID is in the catalog.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Cards whose front title has the given comparison key, in catalog order.
    pub fn with_key<'a>(&'a self, key: &str) -> impl Iterator<Item = &'a Card> + 'a {
        self.by_key
            .get(key)
            .into_iter()
            .flat_map(|indices| indices.iter())
            .map(move |&index| &self.cards[index])
    }

    /// Get the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Upper-case decklist section headers: each distinct type label
    /// pluralized, plus `STARTING`.
    #[must_use]
    pub fn section_headers(&self) -> &[String] {
        &self.section_headers
    }

    /// Whether a line (case-insensitively) names a section header.
    #[must_use]
    pub fn is_section_header(&self, line: &str) -> bool {
        let upper = line.trim().to_uppercase();
        self.section_headers.iter().any(|h| *h == upper)
    }
}

fn section_headers(cards: &[Card]) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut headers = Vec::new();
    for card in cards {
        let label = match card.card_type() {
            CardType::JediTest => "Jedi Test",
            _ => card.front.type_label(),
        };
        let header = format!("{}S", label.to_uppercase());
        if seen.insert(header.clone()) {
            headers.push(header);
        }
    }
    headers.push(STARTING_SECTION.to_string());
    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Face, FaceKind};
    use crate::core::Side;

    fn interrupt(id: &str, side: Side, title: &str) -> Card {
        Card::new(CardId::new(id), side, "1", Face::new(title, FaceKind::Interrupt))
    }

    #[test]
    fn test_new_and_get() {
        let catalog = Catalog::new(vec![
            interrupt("1_1", Side::Light, "Sense"),
            interrupt("1_2", Side::Dark, "Alter"),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains(&CardId::new("1_2")));
        assert!(catalog.get(&CardId::new("9_99")).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::new(vec![
            interrupt("1_1", Side::Light, "Sense"),
            interrupt("1_1", Side::Light, "Alter"),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateId { id }) if id == "1_1"));
    }

    #[test]
    fn test_duplicate_identity_rejected() {
        let result = Catalog::new(vec![
            interrupt("1_1", Side::Light, "Sense"),
            interrupt("1_2", Side::Light, "•Sense"),
        ]);
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateIdentity { side: Side::Light, .. })
        ));
    }

    #[test]
    fn test_same_title_distinguished_by_side_icon_or_set() {
        let episode_one = Card::new(
            CardId::new("11_1"),
            Side::Light,
            "11",
            Face::new("Sense", FaceKind::Interrupt).with_icon("Episode I"),
        );
        let catalog = Catalog::new(vec![
            interrupt("1_1", Side::Light, "Sense"),
            interrupt("1_2", Side::Dark, "Sense"),
            episode_one,
        ])
        .unwrap();

        let ids: Vec<_> = catalog.with_key("sense").map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1_1", "1_2", "11_1"]);
    }

    #[test]
    fn test_section_headers() {
        let catalog = Catalog::new(vec![
            interrupt("1_1", Side::Light, "Sense"),
            Card::new(
                CardId::new("1_2"),
                Side::Light,
                "1",
                Face::new("Jedi Test #1", FaceKind::from_label("Jedi Test #1")),
            ),
            Card::new(
                CardId::new("1_3"),
                Side::Light,
                "1",
                Face::new("Jedi Test #2", FaceKind::from_label("Jedi Test #2")),
            ),
        ])
        .unwrap();

        assert_eq!(catalog.section_headers(), ["INTERRUPTS", "JEDI TESTS", "STARTING"]);
        assert!(catalog.is_section_header("Interrupts"));
        assert!(catalog.is_section_header("starting "));
        assert!(!catalog.is_section_header("Sense"));
    }

    #[test]
    fn test_load_adds_blanked_cards() {
        let dark = r#"{"cards": [{
            "gempId": "7_300",
            "side": "Dark",
            "set": "7",
            "front": {"title": "Ralltiir Operations / In The Hands Of The Empire", "type": "Objective"},
            "abbr": ["ROps"]
        }]}"#;
        let light = r#"{"cards": []}"#;

        let catalog = Catalog::load(dark, light).unwrap();
        let blanked = catalog.get(&CardId::new("7_300v")).unwrap();
        assert_eq!(blanked.display_title(), "Ralltiir Operations (V)");
        assert_eq!(blanked.aliases, vec!["ROps (V)"]);
    }

    #[test]
    fn test_load_rejects_bad_json() {
        assert!(matches!(
            Catalog::load("not json", "{}"),
            Err(CatalogError::Json(_))
        ));
    }
}
