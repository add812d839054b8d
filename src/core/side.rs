//! Side (Light or Dark) of cards, decklists, and archetypes.

use serde::{Deserialize, Serialize};

/// One of the two factions a card, decklist, or archetype belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Light,
    Dark,
}

impl Side {
    /// Two-letter marker used in decklist titles ("LS" / "DS").
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Side::Light => "LS",
            Side::Dark => "DS",
        }
    }

    /// Parse a title marker ("LS"/"DS", any case).
    #[must_use]
    pub fn from_marker(marker: &str) -> Option<Self> {
        if marker.eq_ignore_ascii_case("LS") {
            Some(Side::Light)
        } else if marker.eq_ignore_ascii_case("DS") {
            Some(Side::Dark)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Light => write!(f, "Light"),
            Side::Dark => write!(f, "Dark"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers() {
        assert_eq!(Side::from_marker("ds"), Some(Side::Dark));
        assert_eq!(Side::from_marker("LS"), Some(Side::Light));
        assert_eq!(Side::from_marker("XS"), None);
        assert_eq!(Side::Dark.marker(), "DS");
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Side::Dark).unwrap(), "\"Dark\"");
        let side: Side = serde_json::from_str("\"Light\"").unwrap();
        assert_eq!(side, Side::Light);
    }
}
