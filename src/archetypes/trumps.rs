//! Trump rules.
//!
//! Some cards define a deck whatever its objective or starting location.
//! Every rule in `TRUMP_RULES` is checked in order after the naming
//! cascade; each one that fires replaces the name, so the last match wins.

use super::namer::DeckView;
use crate::cards::CardType;

/// An override of the cascade's archetype name.
#[derive(Clone, Copy, Debug)]
pub enum TrumpRule {
    /// The decklist runs `card`: the archetype is `name`.
    Signature {
        card: &'static str,
        name: &'static str,
    },
    /// A rule that needs more than one card to decide.
    Derived {
        label: &'static str,
        derive: fn(&DeckView<'_, '_>) -> Option<String>,
    },
}

impl TrumpRule {
    /// Short description for logs.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            TrumpRule::Signature { card, .. } => *card,
            TrumpRule::Derived { label, .. } => *label,
        }
    }

    /// The name this rule forces, if it fires.
    #[must_use]
    pub fn apply(&self, view: &DeckView<'_, '_>) -> Option<String> {
        match self {
            TrumpRule::Signature { card, name } => {
                view.decklist.contains(card).then(|| (*name).to_string())
            }
            TrumpRule::Derived { derive, .. } => derive(view),
        }
    }
}

/// Trump rules in evaluation order.
pub const TRUMP_RULES: &[TrumpRule] = &[
    TrumpRule::Signature {
        card: "Echo Base Operations",
        name: "Echo Base Operations",
    },
    TrumpRule::Signature {
        card: "Walker Garrison",
        name: "Hoth Walkers",
    },
    TrumpRule::Signature {
        card: "That Thing's Operational",
        name: "That Thing's Operational",
    },
    TrumpRule::Signature {
        card: "Emperor's Orders",
        name: "Emperor's Orders",
    },
    TrumpRule::Derived {
        label: "naboo gungans",
        derive: naboo_gungans,
    },
    TrumpRule::Derived {
        label: "ties",
        derive: ties,
    },
    TrumpRule::Signature {
        card: "Asteroid Sanctuary",
        name: "Asteroid Sanctuary",
    },
    TrumpRule::Signature {
        card: "Master Kenobi",
        name: "Communing (Obi-Wan)",
    },
    TrumpRule::Signature {
        card: "Master Yoda",
        name: "Communing (Yoda)",
    },
    TrumpRule::Signature {
        card: "Master Qui-Gon Jinn, An Old Friend",
        name: "Communing (Qui-Gon)",
    },
    TrumpRule::Derived {
        label: "skywalker saga",
        derive: skywalker_saga,
    },
    TrumpRule::Derived {
        label: "revenge of the sith",
        derive: revenge_of_the_sith,
    },
];

/// Locations that pick the Skywalker for Skywalker Saga; the last one run
/// wins.
const SKYWALKER_LOCATIONS: &[(&[&str], &str)] = &[
    (&["Tatooine: Slave Quarters (V)", "Tatooine: Slave Quarters"], "Anakin"),
    (&["Endor: Anakin's Funeral Pyre"], "Luke"),
    (&["Ajan Kloss: Training Course"], "Rey"),
];

/// Sith apprentices in check order; the last one found wins.
const SITH_APPRENTICES: &[&str] = &["Maul", "Dooku", "Tyranus", "Vader"];

/// Run every trump rule over `name`.
#[must_use]
pub fn apply_trumps(view: &DeckView<'_, '_>, name: String) -> String {
    TRUMP_RULES.iter().fold(name, |name, rule| match rule.apply(view) {
        Some(trumped) => {
            tracing::debug!(url = %view.decklist.url, rule = rule.label(), from = %name, to = %trumped, "trump rule applied");
            trumped
        }
        None => name,
    })
}

fn naboo_gungans(view: &DeckView<'_, '_>) -> Option<String> {
    let throne_room = view.starting_location_title() == Some("Yavin 4: Massassi Throne Room");
    (view.decklist.contains("Steady, Steady") && !throne_room).then(|| "Naboo Gungans".to_string())
}

fn ties(view: &DeckView<'_, '_>) -> Option<String> {
    let generic_ties = view
        .decklist
        .cards()
        .filter(|c| c.front.uniqueness.is_none())
        .filter(|c| {
            c.front
                .sub_type
                .as_deref()
                .is_some_and(|s| s.starts_with("Starfighter: TIE"))
        })
        .count();
    (generic_ties >= view.config.tie_threshold).then(|| "TIEs".to_string())
}

fn skywalker_saga(view: &DeckView<'_, '_>) -> Option<String> {
    if !view.decklist.contains("The Force Is Strong In My Family") {
        return None;
    }
    let skywalker = SKYWALKER_LOCATIONS
        .iter()
        .filter(|(locations, _)| view.decklist.contains_any(locations))
        .map(|(_, skywalker)| skywalker)
        .last();
    Some(match skywalker {
        Some(skywalker) => format!("Skywalker Saga ({skywalker})"),
        None => "Skywalker Saga".to_string(),
    })
}

fn revenge_of_the_sith(view: &DeckView<'_, '_>) -> Option<String> {
    if !view.decklist.contains("Rise Of The Sith") {
        return None;
    }
    let apprentice = SITH_APPRENTICES
        .iter()
        .filter(|apprentice| {
            view.decklist
                .cards_of_type(CardType::Character)
                .any(|c| c.title().contains(**apprentice))
        })
        .last()
        .map(|&apprentice| if apprentice == "Tyranus" { "Dooku" } else { apprentice });
    Some(match apprentice {
        Some(apprentice) => format!("Revenge Of The Sith ({apprentice})"),
        None => "Revenge Of The Sith".to_string(),
    })
}
