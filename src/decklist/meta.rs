//! Decklist metadata read from titles and card text: side, round, format.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::model::Decklist;
use crate::core::Side;

/// Tournament round names, as they appear in decklist titles.
pub const ROUND_NAMES: &[&str] = &[
    "Day 1",
    "Day 2",
    "Day 3",
    "Top 4",
    "Top 8",
    "Top 16",
    "Elite 8",
    "Quarterfinals",
    "Semifinals",
    "Semi-Finals",
    "Finals",
    "Tiebreaker",
    "Round 1",
    "Round 2",
    "Final Four",
    "Sweet 16",
];

/// Dark side defensive-shield card that only Dark decks start with.
pub const DARK_SIDE_MARKER_CARD: &str = "Knowledge And Defense (V)";
/// Light side defensive-shield card that only Light decks start with.
pub const LIGHT_SIDE_MARKER_CARD: &str = "Anger, Fear, Aggression (V)";

static DARK_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Knowledge.{1,5}Defense").unwrap());
static LIGHT_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Anger,? Fear,? Agg?ression").unwrap());
static ROUND: LazyLock<Regex> = LazyLock::new(|| {
    let names: Vec<String> = ROUND_NAMES.iter().map(|n| regex::escape(n)).collect();
    Regex::new(&format!("({})", names.join("|"))).unwrap()
});

/// How games in a round were played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    Swiss,
    #[serde(rename = "Match Play")]
    MatchPlay,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Swiss => write!(f, "Swiss"),
            Format::MatchPlay => write!(f, "Match Play"),
        }
    }
}

/// The side named by a " DS " or " LS " marker in a title.
#[must_use]
pub fn side_from_title(title: &str) -> Option<Side> {
    [Side::Dark, Side::Light]
        .into_iter()
        .find(|side| title.contains(&format!(" {} ", side.marker())))
}

/// The side a decklist is marked with before its cards are resolved.
///
/// Checks the plaintext for either side's shield card, then the title
/// marker. `None` means the cards have to decide.
#[must_use]
pub fn marked_side(title: &str, plaintext: &str) -> Option<Side> {
    if DARK_TEXT.is_match(plaintext) {
        Some(Side::Dark)
    } else if LIGHT_TEXT.is_match(plaintext) {
        Some(Side::Light)
    } else {
        side_from_title(title)
    }
}

/// The side most of a decklist's card copies belong to. Ties go to Light.
#[must_use]
pub fn majority_side(decklist: &Decklist<'_>) -> Option<Side> {
    let (light, dark) = decklist.entries.iter().fold((0, 0), |(light, dark), entry| {
        match entry.card.side {
            Side::Light => (light + entry.quantity, dark),
            Side::Dark => (light, dark + entry.quantity),
        }
    });
    match (light, dark) {
        (0, 0) => None,
        (light, dark) if dark > light => Some(Side::Dark),
        _ => Some(Side::Light),
    }
}

/// The side confirmed by the title marker or a side-specific card.
#[must_use]
pub fn confirmed_side(decklist: &Decklist<'_>) -> Option<Side> {
    side_from_title(&decklist.title).or_else(|| {
        if decklist.contains(DARK_SIDE_MARKER_CARD) {
            Some(Side::Dark)
        } else if decklist.contains(LIGHT_SIDE_MARKER_CARD) {
            Some(Side::Light)
        } else {
            None
        }
    })
}

/// The leftmost round name in a title.
#[must_use]
pub fn round_from_title(title: &str) -> Option<&'static str> {
    let found = ROUND.find(title)?;
    ROUND_NAMES.iter().copied().find(|name| *name == found.as_str())
}

/// Format of a round: Swiss on day one, match play after.
#[must_use]
pub fn format_for_round(round: &str) -> Format {
    if round == "Day 1" {
        Format::Swiss
    } else {
        Format::MatchPlay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_from_title() {
        assert_eq!(side_from_title("2022 Worlds Day 1 Jane DS HB"), Some(Side::Dark));
        assert_eq!(side_from_title("2022 Worlds Day 1 Jane LS HB"), Some(Side::Light));
        assert_eq!(side_from_title("DSII Throne Room"), None);
    }

    #[test]
    fn test_marked_side() {
        assert_eq!(marked_side("x", "1x Knowledge And Defense (V)"), Some(Side::Dark));
        assert_eq!(marked_side("x", "1x Knowledge & Defense"), Some(Side::Dark));
        assert_eq!(marked_side("x", "1x KNOWLEDGE AND DEFENSE (V)"), Some(Side::Dark));
        assert_eq!(marked_side("x", "1x Anger Fear Agression"), Some(Side::Light));
        assert_eq!(marked_side("x", "1x anger, fear, aggression (v)"), Some(Side::Light));
        assert_eq!(marked_side("Jane DS Deck", "1x Sense"), Some(Side::Dark));
        assert_eq!(marked_side("Jane Deck", "1x Sense"), None);
    }

    #[test]
    fn test_majority_side() {
        use crate::cards::{Card, CardId, Face, FaceKind};

        let sense = Card::new(CardId::new("1"), Side::Light, "1", Face::new("Sense", FaceKind::Interrupt));
        let alter = Card::new(CardId::new("2"), Side::Dark, "1", Face::new("Alter", FaceKind::Interrupt));
        let mut decklist = Decklist::new("t", "d", "u", Side::Light);
        assert_eq!(majority_side(&decklist), None);

        decklist.add(&sense, 1);
        decklist.add(&alter, 1);
        assert_eq!(majority_side(&decklist), Some(Side::Light));

        decklist.add(&alter, 1);
        assert_eq!(majority_side(&decklist), Some(Side::Dark));
    }

    #[test]
    fn test_round_and_format() {
        assert_eq!(round_from_title("2019 Worlds Day 1 Jane LS"), Some("Day 1"));
        assert_eq!(round_from_title("2019 Worlds Semi-Finals Jane LS"), Some("Semi-Finals"));
        assert_eq!(round_from_title("2019 Worlds Top 16 Jane"), Some("Top 16"));
        assert_eq!(round_from_title("Casual Game"), None);

        assert_eq!(format_for_round("Day 1"), Format::Swiss);
        assert_eq!(format_for_round("Finals"), Format::MatchPlay);
        assert_eq!(Format::MatchPlay.to_string(), "Match Play");
    }
}
