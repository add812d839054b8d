//! Classifier configuration.
//!
//! The thresholds the archetype namer applies when it counts cards in a
//! decklist. Defaults match the tournament corpus the tables were tuned on.

use serde::{Deserialize, Serialize};

/// Card-count thresholds and species list used during classification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Legal deck size. Decklists with a different total are still
    /// classified; the total is only recorded.
    pub legal_deck_size: u32,

    /// Species checked when looking for a dominant species among characters.
    pub species: Vec<String>,

    /// Minimum number of distinct characters of one species for it to
    /// count as dominant.
    pub species_threshold: usize,

    /// Hidden Base decks with fewer battleground systems than this are
    /// "No-Flip".
    pub battleground_system_threshold: usize,

    /// Mind What You Have Learned decks with fewer Jedi Tests than this
    /// are "No-Flip".
    pub jedi_test_threshold: usize,

    /// Distinct non-unique TIE starfighters needed for the "TIEs" override.
    pub tie_threshold: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            legal_deck_size: 60,
            species: vec![
                "Gungan".to_string(),
                "Mandalorian".to_string(),
                "Wookiee".to_string(),
            ],
            species_threshold: 3,
            battleground_system_threshold: 5,
            jedi_test_threshold: 5,
            tie_threshold: 6,
        }
    }
}

impl ClassifierConfig {
    /// Set the legal deck size.
    #[must_use]
    pub fn with_legal_deck_size(mut self, size: u32) -> Self {
        self.legal_deck_size = size;
        self
    }

    /// Replace the species list.
    #[must_use]
    pub fn with_species<I, S>(mut self, species: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.species = species.into_iter().map(Into::into).collect();
        self
    }

    /// Set the dominant-species threshold.
    #[must_use]
    pub fn with_species_threshold(mut self, threshold: usize) -> Self {
        self.species_threshold = threshold;
        self
    }

    /// Set the Hidden Base battleground-system threshold.
    #[must_use]
    pub fn with_battleground_system_threshold(mut self, threshold: usize) -> Self {
        self.battleground_system_threshold = threshold;
        self
    }

    /// Set the Jedi Test threshold.
    #[must_use]
    pub fn with_jedi_test_threshold(mut self, threshold: usize) -> Self {
        self.jedi_test_threshold = threshold;
        self
    }

    /// Set the TIE starfighter threshold.
    #[must_use]
    pub fn with_tie_threshold(mut self, threshold: usize) -> Self {
        self.tie_threshold = threshold;
        self
    }
}
