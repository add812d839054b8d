//! End-to-end classification tests.

mod common;

use swccg_decklists::core::{ClassifierConfig, Side};
use swccg_decklists::pipeline::Pipeline;

fn batch() -> Vec<String> {
    vec![
        common::hidden_base_decklist("2022 U.S. Nationals Jane Doe LS HB", "https://example.org/1"),
        common::hidden_base_decklist("2022 Worlds Day 2 John Roe LS Hidden Base Fingers", "https://example.org/2"),
        common::decklist(
            "2022 Worlds Day 1 Jo DS ATMD",
            "https://example.org/3",
            "STARTING\nDeath Star II: Throne Room\nAccording To My Design\n\nINTERRUPTS\n2x Alter\n",
        ),
        common::decklist(
            "Casual list",
            "https://example.org/4",
            "1x Sense\n1x Mystery Card\n",
        ),
    ]
}

/// Every decklist ends up in exactly one archetype.
#[test]
fn test_every_url_assigned_once() {
    let catalog = common::catalog();
    let output = Pipeline::new(&catalog, ClassifierConfig::default()).run(batch());

    assert_eq!(output.records.len(), 4);
    for record in &output.records {
        let owners = output
            .archetypes
            .iter()
            .filter(|a| a.decklist_urls.contains(&record.url))
            .count();
        assert_eq!(owners, 1, "{} should belong to one archetype", record.url);
    }
    assert_eq!(output.report.assigned_urls, 4);
}

/// Title hints join the card-based archetype and are kept as matchers.
#[test]
fn test_title_hints_become_matchers() {
    let catalog = common::catalog();
    let output = Pipeline::new(&catalog, ClassifierConfig::default()).run(batch());

    let hb = output.archetypes.find("HB").unwrap();
    assert_eq!(hb.name, "Hidden Base No-Flip");
    assert_eq!(hb.side, Some(Side::Light));
    assert_eq!(hb.decklist_urls.len(), 2);
    assert!(hb.matchers.contains("Hidden Base Fingers"));

    assert_eq!(output.records[0].archetype.as_ref().unwrap().name, "Hidden Base No-Flip");
    assert_eq!(output.records[1].archetype.as_ref().unwrap().name, "Hidden Base No-Flip");
}

/// The override list fixes the side of the throne room archetype.
#[test]
fn test_manual_override_applies() {
    let catalog = common::catalog();
    let output = Pipeline::new(&catalog, ClassifierConfig::default()).run(batch());

    let atmd = output
        .archetypes
        .get("Death Star II: Throne Room According To My Design")
        .unwrap();
    assert_eq!(atmd.side, Some(Side::Dark));
    assert_eq!(atmd.short_name.as_deref(), Some("DSII Throne Room ATMD"));
}

/// Lists without signals still classify, as Unknown.
#[test]
fn test_unknown_and_report() {
    let catalog = common::catalog();
    let output = Pipeline::new(&catalog, ClassifierConfig::default()).run(batch());

    let casual = &output.records[3];
    assert_eq!(casual.archetype.as_ref().unwrap().name, "Unknown");
    assert_eq!(casual.count, 1);

    assert_eq!(output.report.decklists, 4);
    assert_eq!(output.report.complete, 0);
    assert_eq!(output.report.without_side, 1);
    assert_eq!(output.report.unresolved_lines, 1);
    assert_eq!(output.report.archetypes, 3);
}

/// Records and archetypes serialize with camelCase fields.
#[test]
fn test_json_shape() {
    let catalog = common::catalog();
    let output = Pipeline::new(&catalog, ClassifierConfig::default()).run(batch());

    let records = serde_json::to_value(&output.records).unwrap();
    assert_eq!(records[2]["startingLocation"]["cardId"], "9_2");
    assert_eq!(records[2]["startingInterrupt"]["title"], "According To My Design");
    assert_eq!(records[2]["round"], "Day 1");
    assert_eq!(records[2]["format"], "Swiss");

    let archetypes = serde_json::to_value(&output.archetypes).unwrap();
    assert!(archetypes.is_array());
    assert_eq!(archetypes[0]["shortName"], "HB No-Flip");
    assert!(archetypes[0]["decklistUrls"].is_array());
}
