//! Parsed decklists.
//!
//! A `Decklist` borrows its cards from the `Catalog` it was parsed against.
//! It is built once by the parser and read-only afterwards.

use crate::cards::{Card, CardId, CardQuery, CardType};
use crate::core::Side;

/// One line of decklist text and what became of it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecklistLine {
    /// The line as written.
    pub raw: String,
    /// Quantity read from the line (1 when implied).
    pub quantity: u32,
    /// The card name part of the line.
    pub name: String,
    /// The card the name resolved to, if any.
    pub card: Option<CardId>,
}

impl DecklistLine {
    /// Whether the line named a catalog card.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.card.is_some()
    }
}

/// A resolved card and how many copies the decklist runs.
#[derive(Clone, Copy, Debug)]
pub struct DecklistEntry<'a> {
    pub card: &'a Card,
    pub quantity: u32,
}

/// One tournament decklist.
///
/// ## Example
///
/// ```
/// use swccg_decklists::cards::{Card, CardId, Catalog, Face, FaceKind};
/// use swccg_decklists::core::Side;
/// use swccg_decklists::decklist::DecklistParser;
///
/// let catalog = Catalog::new(vec![Card::new(
///     CardId::new("1_1"),
///     Side::Light,
///     "1",
///     Face::new("Sense", FaceKind::Interrupt),
/// )])
/// .unwrap();
///
/// let text = "My Deck\n2024-01-01\nhttps://example.org/deck\n\n2x Sense\n1x Sense\n";
/// let decklist = DecklistParser::new(&catalog).parse(text, Side::Light);
///
/// assert_eq!(decklist.entries.len(), 1);
/// assert_eq!(decklist.count(), 3);
/// assert!(decklist.contains("Sense"));
/// ```
#[derive(Clone, Debug)]
pub struct Decklist<'a> {
    pub title: String,
    pub date: String,
    pub url: String,
    /// Side the cards were resolved against.
    pub side: Side,
    /// Whether the title or a side-specific card confirmed `side`.
    pub side_confirmed: bool,
    /// Resolved cards in first-seen order, one entry per card.
    pub entries: Vec<DecklistEntry<'a>>,
    /// Cards listed in the STARTING section, in listed order.
    pub starting_cards: Vec<&'a Card>,
    /// Whether the text had a STARTING section at all.
    pub has_starting_section: bool,
    pub objective: Option<&'a Card>,
    pub starting_interrupt: Option<&'a Card>,
    pub starting_location: Option<&'a Card>,
    /// Every card line, resolved or not.
    pub lines: Vec<DecklistLine>,
}

impl<'a> Decklist<'a> {
    /// Create an empty decklist.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        date: impl Into<String>,
        url: impl Into<String>,
        side: Side,
    ) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            url: url.into(),
            side,
            side_confirmed: false,
            entries: Vec::new(),
            starting_cards: Vec::new(),
            has_starting_section: false,
            objective: None,
            starting_interrupt: None,
            starting_location: None,
            lines: Vec::new(),
        }
    }

    /// Add copies of a card, merging with an existing entry.
    pub fn add(&mut self, card: &'a Card, quantity: u32) {
        match self.entries.iter_mut().find(|e| e.card.id == card.id) {
            Some(entry) => entry.quantity += quantity,
            None => self.entries.push(DecklistEntry { card, quantity }),
        }
    }

    /// Add a card to the STARTING section list.
    pub fn add_starting(&mut self, card: &'a Card) {
        if !self.starting_cards.iter().any(|c| c.id == card.id) {
            self.starting_cards.push(card);
        }
    }

    /// Total number of cards.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    /// Whether the card count equals `legal_size`.
    #[must_use]
    pub fn is_complete(&self, legal_size: u32) -> bool {
        self.count() == legal_size
    }

    /// Iterate over the distinct cards.
    pub fn cards(&self) -> impl Iterator<Item = &'a Card> + '_ {
        self.entries.iter().map(|e| e.card)
    }

    /// Distinct cards of one front type.
    pub fn cards_of_type(&self, card_type: CardType) -> impl Iterator<Item = &'a Card> + '_ {
        self.cards().filter(move |c| c.is_type(card_type))
    }

    /// Starting-section cards of one front type.
    pub fn starting_of_type(&self, card_type: CardType) -> impl Iterator<Item = &'a Card> + '_ {
        self.starting_cards
            .iter()
            .copied()
            .filter(move |c| c.is_type(card_type))
    }

    /// Find the decklist's copy of the card `title` names.
    ///
    /// The title goes through the same normalization and qualifier handling
    /// as decklist lines.
    #[must_use]
    pub fn find(&self, title: &str) -> Option<&'a Card> {
        CardQuery::parse(title).select(self.cards())
    }

    /// Whether the decklist runs the card `title` names.
    #[must_use]
    pub fn contains(&self, title: &str) -> bool {
        self.find(title).is_some()
    }

    /// Whether the decklist runs any of the named cards.
    #[must_use]
    pub fn contains_any(&self, titles: &[&str]) -> bool {
        titles.iter().any(|title| self.contains(title))
    }

    /// Lines that did not resolve to a card.
    pub fn unresolved_lines(&self) -> impl Iterator<Item = &DecklistLine> {
        self.lines.iter().filter(|line| !line.is_resolved())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Face, FaceKind};

    fn card(id: &str, title: &str, kind: FaceKind) -> Card {
        Card::new(CardId::new(id), Side::Light, "1", Face::new(title, kind))
    }

    #[test]
    fn test_add_merges_quantities() {
        let sense = card("1_1", "Sense", FaceKind::Interrupt);
        let alter = card("1_2", "Alter", FaceKind::Interrupt);

        let mut decklist = Decklist::new("t", "d", "u", Side::Light);
        decklist.add(&sense, 2);
        decklist.add(&alter, 1);
        decklist.add(&sense, 3);

        assert_eq!(decklist.entries.len(), 2);
        assert_eq!(decklist.entries[0].quantity, 5);
        assert_eq!(decklist.count(), 6);
        assert!(!decklist.is_complete(60));
    }

    #[test]
    fn test_find_uses_normalized_titles() {
        let obj = card(
            "1_3",
            "Hidden Base / Systems Will Slip Through Your Fingers",
            FaceKind::Objective,
        );
        let mut decklist = Decklist::new("t", "d", "u", Side::Light);
        decklist.add(&obj, 1);

        assert!(decklist.contains("Hidden Base"));
        assert!(decklist.contains("•Hidden Base"));
        assert!(!decklist.contains("Hidden Base (V)"));
        assert_eq!(decklist.cards_of_type(CardType::Objective).count(), 1);
    }

    #[test]
    fn test_starting_cards_are_distinct() {
        let loc = card("1_4", "Hoth: Echo Command Center", FaceKind::from_label("Location"));
        let mut decklist = Decklist::new("t", "d", "u", Side::Light);
        decklist.add_starting(&loc);
        decklist.add_starting(&loc);

        assert_eq!(decklist.starting_cards.len(), 1);
        assert_eq!(decklist.starting_of_type(CardType::Location).count(), 1);
    }
}
