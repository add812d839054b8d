//! Shared fixture catalog for integration tests.

#![allow(dead_code)]

use swccg_decklists::cards::Catalog;

pub const DARK_JSON: &str = r#"{
  "cards": [
    {
      "gempId": "7_300",
      "side": "Dark",
      "set": 7,
      "abbr": ["ROps / ITHOTE"],
      "front": { "title": "Ralltiir Operations / In The Hands Of The Empire", "type": "Objective" }
    },
    {
      "gempId": "6_1",
      "side": "Dark",
      "set": "6",
      "abbr": "Court",
      "front": { "title": "Court Of The Vile Gangster / I Shall Enjoy Watching You Die", "type": "Objective" }
    },
    {
      "gempId": "5_1",
      "side": "Dark",
      "set": "5",
      "front": { "title": "•Boba Fett", "type": "Character", "subType": "Alien", "uniqueness": "*", "power": "3", "ability": 1 }
    },
    {
      "gempId": "7_1",
      "side": "Dark",
      "set": "7",
      "front": { "title": "•Boba Fett", "type": "Character", "subType": "Alien", "uniqueness": "*", "power": 4 }
    },
    {
      "gempId": "3_1",
      "side": "Dark",
      "set": "3",
      "front": { "title": "Walker Garrison", "type": "Effect" }
    },
    {
      "gempId": "9_1",
      "side": "Dark",
      "set": "9",
      "front": { "title": "Emperor's Orders", "type": "Effect" }
    },
    {
      "gempId": "1_1",
      "side": "Dark",
      "set": "1",
      "front": { "title": "Alter", "type": "Interrupt", "subType": "Used" }
    },
    {
      "gempId": "200_1",
      "side": "Dark",
      "set": "200",
      "front": { "title": "Knowledge And Defense (V)", "type": "Effect", "subType": "Starting" }
    },
    {
      "gempId": "9_2",
      "side": "Dark",
      "set": "9",
      "front": {
        "title": "•Death Star II: Throne Room",
        "type": "Location",
        "subType": "Site",
        "lightSideIcons": 1,
        "darkSideIcons": "2"
      }
    },
    {
      "gempId": "9_3",
      "side": "Dark",
      "set": "9",
      "front": { "title": "According To My Design", "type": "Interrupt", "subType": "Used Or Starting" }
    }
  ]
}"#;

pub const LIGHT_JSON: &str = r#"{
  "cards": [
    {
      "gempId": "1_2",
      "side": "Light",
      "set": "1",
      "abbr": ["HB / SWSTYF", "HB"],
      "front": { "title": "Hidden Base / Systems Will Slip Through Your Fingers", "type": "Objective" }
    },
    {
      "gempId": "1_3",
      "side": "Light",
      "set": "1",
      "front": {
        "title": "•Artoo-Detoo",
        "type": "Character",
        "subType": "Droid",
        "uniqueness": "*",
        "lore": "Astromech droid.",
        "extraText": "R2-D2"
      }
    },
    {
      "gempId": "1_4",
      "side": "Light",
      "set": "1",
      "front": { "title": "Sense", "type": "Interrupt", "subType": "Used" }
    },
    {
      "gempId": "1_5",
      "side": "Light",
      "set": "1",
      "front": {
        "title": "•Home One: War Room",
        "type": "Location",
        "subType": "Site",
        "lightSideIcons": 2,
        "darkSideIcons": 0
      }
    },
    {
      "gempId": "1_6",
      "side": "Light",
      "set": "1",
      "front": {
        "title": "•Kessel",
        "type": "Location",
        "subType": "System",
        "lightSideIcons": 1,
        "darkSideIcons": 1,
        "parsec": "4"
      }
    },
    {
      "gempId": "1_7",
      "side": "Light",
      "set": "1",
      "front": {
        "title": "•Tatooine: Docking Bay 94",
        "type": "Location",
        "subType": "Site",
        "lightSideIcons": 1,
        "darkSideIcons": 1
      }
    },
    {
      "gempId": "1_8",
      "side": "Light",
      "set": "1",
      "front": {
        "title": "•Tatooine: Mos Eisley",
        "type": "Location",
        "subType": "Site",
        "lightSideIcons": 1,
        "darkSideIcons": 1
      }
    },
    {
      "gempId": "1_9",
      "side": "Light",
      "set": "1",
      "front": {
        "title": "•Dagobah: Swamp",
        "type": "Location",
        "subType": "Site",
        "lightSideIcons": 1,
        "darkSideIcons": 1
      }
    },
    {
      "gempId": "200_2",
      "side": "Light",
      "set": "200",
      "front": { "title": "Anger, Fear, Aggression (V)", "type": "Effect", "subType": "Starting" }
    }
  ]
}"#;

/// The fixture catalog, with synthetic cards injected.
pub fn catalog() -> Catalog {
    Catalog::load(DARK_JSON, LIGHT_JSON).unwrap()
}

/// Decklist plaintext with the header lines filled in.
pub fn decklist(title: &str, url: &str, body: &str) -> String {
    format!("{title}\n2024-06-01\n{url}\n\n{body}")
}

/// The Hidden Base decklist: one battleground system and three sites with
/// both Force icons, no STARTING section.
pub fn hidden_base_decklist(title: &str, url: &str) -> String {
    decklist(
        title,
        url,
        "OBJECTIVES\n1x Hidden Base\n\nLOCATIONS\n2x Home One: War Room\n1x Kessel\n1x Tatooine: Docking Bay 94\n1x Tatooine: Mos Eisley\n1x Dagobah: Swamp\n",
    )
}
