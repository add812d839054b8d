//! Objective-specific name modifiers.
//!
//! Some objectives are played in distinct sub-variants ("Flip" vs
//! "No-Flip", a dominant species, ...). Each modifier inspects the decklist
//! and returns a suffix for the objective's name.

use super::namer::DeckView;
use crate::cards::CardType;

/// A name suffix rule for one objective.
#[derive(Clone, Copy, Debug)]
pub struct ObjectiveModifier {
    /// Display title of the objective.
    pub objective: &'static str,
    /// Suffix to append, including its leading space.
    pub suffix: fn(&DeckView<'_, '_>) -> Option<String>,
}

/// Modifier table, keyed by exact objective display title.
pub const OBJECTIVE_MODIFIERS: &[ObjectiveModifier] = &[
    ObjectiveModifier {
        objective: "Carbon Chamber Testing",
        suffix: carbon_chamber_testing,
    },
    ObjectiveModifier {
        objective: "Set Your Course For Alderaan",
        suffix: set_your_course,
    },
    ObjectiveModifier {
        objective: "Agents In The Court",
        suffix: agents_in_the_court,
    },
    ObjectiveModifier {
        objective: "Hidden Base",
        suffix: hidden_base,
    },
    ObjectiveModifier {
        objective: "Mind What You Have Learned",
        suffix: mind_what_you_have_learned,
    },
    ObjectiveModifier {
        objective: "Yavin 4 Base Operations",
        suffix: yavin_4_base_operations,
    },
];

const NO_FLIP: &str = " No-Flip";

/// The suffix for an objective, if it has a modifier that applies.
#[must_use]
pub fn objective_suffix(objective: &str, view: &DeckView<'_, '_>) -> Option<String> {
    OBJECTIVE_MODIFIERS
        .iter()
        .find(|m| m.objective == objective)
        .and_then(|m| (m.suffix)(view))
}

fn carbon_chamber_testing(view: &DeckView<'_, '_>) -> Option<String> {
    (!view.decklist.contains("Boba Fett's Blaster Rifle (V)")).then(|| NO_FLIP.to_string())
}

fn set_your_course(view: &DeckView<'_, '_>) -> Option<String> {
    let flips = view
        .decklist
        .contains_any(&["Commence Primary Ignition", "Commence Primary Ignition (V)"]);
    Some(if flips { " Flip" } else { NO_FLIP }.to_string())
}

fn agents_in_the_court(view: &DeckView<'_, '_>) -> Option<String> {
    let species = view.dominant_species()?;
    let flippers = view.decklist.cards_of_type(CardType::Character).any(|c| {
        c.front.is_sub_type("Alien")
            && (c.title().contains(species)
                || c.front.lore.as_deref().is_some_and(|lore| lore.contains(species)))
            && c.front.uniqueness.as_deref() != Some("*")
    });
    let mut suffix = format!(" {species}s");
    if !flippers {
        suffix.push_str(NO_FLIP);
    }
    Some(suffix)
}

fn hidden_base(view: &DeckView<'_, '_>) -> Option<String> {
    let battlegrounds = view
        .decklist
        .cards()
        .filter(|c| c.front.is_sub_type("System"))
        .filter(|c| c.front.location_icons().is_some_and(|icons| icons.is_dual()))
        .count();
    (battlegrounds < view.config.battleground_system_threshold).then(|| NO_FLIP.to_string())
}

fn mind_what_you_have_learned(view: &DeckView<'_, '_>) -> Option<String> {
    let jedi_tests = view.decklist.cards_of_type(CardType::JediTest).count();
    (jedi_tests < view.config.jedi_test_threshold).then(|| NO_FLIP.to_string())
}

fn yavin_4_base_operations(view: &DeckView<'_, '_>) -> Option<String> {
    view.decklist
        .contains("Jedi Business")
        .then(|| " Jedi Business".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardId, Face, FaceKind, LocationIcons};
    use crate::core::{ClassifierConfig, Side};
    use crate::decklist::Decklist;

    fn card(id: &str, face: Face) -> Card {
        Card::new(CardId::new(id), Side::Light, "1", face)
    }

    fn suffix(objective: &str, cards: &[Card]) -> Option<String> {
        let config = ClassifierConfig::default();
        let mut decklist = Decklist::new("t", "d", "u", Side::Light);
        for c in cards {
            decklist.add(c, 1);
        }
        objective_suffix(objective, &DeckView::new(&decklist, &config))
    }

    #[test]
    fn test_unknown_objective_has_no_suffix() {
        assert_eq!(suffix("Zero Hour", &[]), None);
    }

    #[test]
    fn test_set_your_course() {
        let cpi = card("1", Face::new("Commence Primary Ignition", FaceKind::Interrupt));
        assert_eq!(suffix("Set Your Course For Alderaan", &[cpi]).as_deref(), Some(" Flip"));
        assert_eq!(suffix("Set Your Course For Alderaan", &[]).as_deref(), Some(" No-Flip"));
    }

    #[test]
    fn test_hidden_base_threshold() {
        let systems: Vec<Card> = (0..5)
            .map(|i| {
                card(
                    &i.to_string(),
                    Face::new(format!("System {i}"), FaceKind::Location(LocationIcons::new(1, 1)))
                        .with_sub_type("System"),
                )
            })
            .collect();
        assert_eq!(suffix("Hidden Base", &systems[..4]).as_deref(), Some(" No-Flip"));
        assert_eq!(suffix("Hidden Base", &systems), None);
    }

    #[test]
    fn test_agents_in_the_court_species() {
        let wookiee = |id: &str, unique: &str| {
            card(
                id,
                Face::new(format!("Wookiee {id}"), FaceKind::from_label("Character"))
                    .with_sub_type("Alien")
                    .with_uniqueness(unique),
            )
        };
        let unique_only = [wookiee("1", "*"), wookiee("2", "*"), wookiee("3", "*")];
        assert_eq!(
            suffix("Agents In The Court", &unique_only).as_deref(),
            Some(" Wookiees No-Flip")
        );

        let with_generic = [wookiee("1", "*"), wookiee("2", "*"), wookiee("3", "**")];
        assert_eq!(suffix("Agents In The Court", &with_generic).as_deref(), Some(" Wookiees"));

        assert_eq!(suffix("Agents In The Court", &unique_only[..2]), None);
    }

    #[test]
    fn test_mind_what_you_have_learned() {
        let tests: Vec<Card> = (1..=5)
            .map(|i| {
                let label = format!("Jedi Test #{i}");
                card(&i.to_string(), Face::new(label.clone(), FaceKind::from_label(&label)))
            })
            .collect();
        assert_eq!(suffix("Mind What You Have Learned", &tests), None);
        assert_eq!(
            suffix("Mind What You Have Learned", &tests[..1]).as_deref(),
            Some(" No-Flip")
        );
    }
}
