//! Archetype naming tests.
//!
//! These tests verify the naming cascade end to end:
//! - Objective names with their modifiers
//! - Trump rules overriding the cascade, last match winning
//! - Aliases taken from the objective card

mod common;

use swccg_decklists::archetypes::{ArchetypeNamer, TrumpRule, TRUMP_RULES};
use swccg_decklists::core::{ClassifierConfig, Side};
use swccg_decklists::decklist::DecklistParser;

/// One battleground system is too few to flip Hidden Base.
#[test]
fn test_hidden_base_no_flip() {
    let catalog = common::catalog();
    let text = common::hidden_base_decklist("2024 Regionals Day 1 Jane LS HB", "https://example.org/hb");
    let decklist = DecklistParser::new(&catalog).parse_inferred(&text);

    let candidate = ArchetypeNamer::default().derive(&decklist);
    assert_eq!(candidate.name, "Hidden Base No-Flip");
    assert_eq!(candidate.short_name.as_deref(), Some("HB No-Flip"));
    assert_eq!(candidate.side, Some(Side::Light));
    assert_eq!(
        candidate.aliases,
        vec!["Hidden Base No-Flip", "HB No-Flip", "HB / SWSTYF", "HB"]
    );
}

/// A lower threshold flips the same list.
#[test]
fn test_threshold_from_config() {
    let catalog = common::catalog();
    let text = common::hidden_base_decklist("t", "u");
    let decklist = DecklistParser::new(&catalog).parse(&text, Side::Light);

    let namer = ArchetypeNamer::new(ClassifierConfig::default().with_battleground_system_threshold(1));
    assert_eq!(namer.name(&decklist), "Hidden Base");
}

/// A trump card replaces the cascade's name.
#[test]
fn test_trump_overrides_objective() {
    let catalog = common::catalog();
    let parser = DecklistParser::new(&catalog);
    let namer = ArchetypeNamer::default();

    let court = "Court Of The Vile Gangster\n1x Knowledge And Defense (V)\n";
    let plain = parser.parse_inferred(&common::decklist("t", "u", court));
    assert_eq!(namer.name(&plain), "Court Of The Vile Gangster");

    let walkers = parser.parse_inferred(&common::decklist("t", "u", &format!("{court}1x Walker Garrison\n")));
    assert_eq!(namer.name(&walkers), "Hoth Walkers");
}

/// With two trump cards the rule listed later wins, whatever the card order.
#[test]
fn test_last_trump_wins() {
    let position = |card: &str| {
        TRUMP_RULES
            .iter()
            .position(|rule| matches!(rule, TrumpRule::Signature { card: c, .. } if *c == card))
            .unwrap()
    };
    assert!(position("Walker Garrison") < position("Emperor's Orders"));

    let catalog = common::catalog();
    let parser = DecklistParser::new(&catalog);
    let namer = ArchetypeNamer::default();
    for body in [
        "1x Walker Garrison\n1x Emperor's Orders\n1x Knowledge And Defense (V)\n",
        "1x Emperor's Orders\n1x Walker Garrison\n1x Knowledge And Defense (V)\n",
    ] {
        let decklist = parser.parse_inferred(&common::decklist("t", "u", body));
        assert_eq!(namer.name(&decklist), "Emperor's Orders");
    }
}

/// Objective aliases and their front-face forms become aliases and matchers.
#[test]
fn test_virtual_objective_aliases() {
    let catalog = common::catalog();
    let text = common::decklist("t", "u", "Ralltiir Operations (V)\n1x Knowledge And Defense (V)\n");
    let decklist = DecklistParser::new(&catalog).parse_inferred(&text);

    let candidate = ArchetypeNamer::default().derive(&decklist);
    assert_eq!(candidate.name, "Ralltiir Operations (V)");
    assert_eq!(candidate.short_name.as_deref(), Some("ROps(V)"));
    assert!(candidate.aliases.contains(&"ROps / ITHOTE (V)".to_string()));
    assert!(candidate.aliases.contains(&"ROps (V)".to_string()));
    assert_eq!(candidate.matchers, candidate.aliases);
}

/// A list with no objective and no starting location is Unknown.
#[test]
fn test_unknown() {
    let catalog = common::catalog();
    let decklist = DecklistParser::new(&catalog).parse(&common::decklist("t", "u", "2x Sense\n"), Side::Light);
    let candidate = ArchetypeNamer::default().derive(&decklist);
    assert_eq!(candidate.name, "Unknown");
    assert_eq!(candidate.aliases, vec!["Unknown"]);
}
