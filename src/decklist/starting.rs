//! Starting interrupt and starting location inference.
//!
//! Few decklists mark their starting cards, so both are inferred from the
//! rest of the list. Location inference is a prioritized cascade: each
//! `LocationRule` either produces a location or defers to the next rule.
//! Rule tables are data so their order can be read and tested on its own.

use std::sync::LazyLock;

use regex::Regex;

use super::model::Decklist;
use crate::cards::{Card, CardType};

/// Sub-type marker on interrupts that can be played at game start.
pub const STARTING_SUB_TYPE: &str = "Starting";

/// Starting interrupts that never define a deck's starting cards.
pub const EXCLUDED_STARTING_INTERRUPTS: &[&str] = &[
    "Prepared Defenses",
    "Heading For The Medical Frigate",
    "We Must Accelerate Our Plans",
    "We Wish To Board At Once",
    "Twi'lek Advisor",
    "The Signal",
    "Neimoidian Advisor",
    "Mindful Of The Future",
    "Careful Planning",
    "Combat Readiness",
];

/// Starting interrupts passed over when a decklist has another candidate.
pub const LESS_DEFINING_STARTING_INTERRUPTS: &[&str] = &[
    "Surface Defense (V)",
    "Don't Tread On Me (V)",
    "Operational As Planned",
];

/// Locations that are only ever played as starting locations.
pub const ALWAYS_STARTING_LOCATIONS: &[&str] = &[
    "Yavin 4: Massassi Throne Room",
    "Ajan Kloss: Training Course",
    "Tatooine: Slave Quarters (V)",
];

/// Starting interrupts that search for a system.
pub const SYSTEM_SEARCH_INTERRUPTS: &[&str] = &["Careful Planning (V)", "Combat Readiness (V)"];

/// Site prefixes folded onto the system they belong to.
const SYSTEM_FOLDS: &[(&str, &str)] = &[
    ("Xizor's Palace:", "Coruscant:"),
    ("Jabba's Palace:", "Tatooine:"),
    ("Maz's Castle:", "Takodana:"),
    ("Cloud City:", "Bespin:"),
];

/// A decklist-title pattern naming the deck's starting location.
#[derive(Clone, Copy, Debug)]
pub struct TitleHint {
    /// Case-insensitive pattern matched against the title.
    pub pattern: &'static str,
    /// Candidate locations, first found wins.
    pub locations: &'static [&'static str],
}

/// Title hints; when several match, the last one found in the deck wins.
pub const TITLE_HINTS: &[TitleHint] = &[
    TitleHint { pattern: "jcc", locations: &["Coruscant: Jedi Council Chamber"] },
    TitleHint { pattern: "home one.*war room", locations: &["Home One: War Room"] },
    TitleHint { pattern: "cch|chirpa", locations: &["Endor: Chief Chirpa's Hut"] },
    TitleHint {
        pattern: "dwell|slave quarters",
        locations: &["Tatooine: Slave Quarters (V)", "Tatooine: Slave Quarters"],
    },
    TitleHint { pattern: "pyre", locations: &["Endor: Anakin's Funeral Pyre"] },
    TitleHint { pattern: "dls|desert landing site", locations: &["Tatooine: Desert Landing Site"] },
    TitleHint { pattern: "dagobah.*cave", locations: &["Dagobah: Cave"] },
    TitleHint { pattern: "maul.*chambers", locations: &["Dathomir: Maul's Chambers"] },
    TitleHint { pattern: "5.*marker", locations: &["Hoth: Ice Plains (5th Marker) (V)"] },
    TitleHint { pattern: "d.*s.*(ii|2).*throne room", locations: &["Death Star II: Throne Room"] },
    TitleHint { pattern: "coruscant ssa", locations: &["Coruscant: The Works"] },
    TitleHint { pattern: "ssa.*nines", locations: &["Tatooine: Desert Landing Site"] },
];

/// A location started whenever the deck runs it without the cards that
/// would start somewhere else.
#[derive(Clone, Copy, Debug)]
pub struct HubRule {
    pub location: &'static str,
    pub unless: &'static [&'static str],
}

/// Hub rules; when several fire, the last one wins.
pub const HUB_RULES: &[HubRule] = &[
    HubRule {
        location: "Coruscant: Jedi Council Chamber",
        unless: &["Speak With The Jedi Council", "Take A Seat, Young Skywalker"],
    },
    HubRule {
        location: "Naboo: Boss Nass' Chambers",
        unless: &["Wesa Gotta Grand Army"],
    },
];

/// How an elimination rule narrows the candidate locations.
#[derive(Clone, Copy, Debug)]
pub enum Elimination {
    /// Drop locations with exactly these display titles.
    DropTitles(&'static [&'static str]),
    /// Drop locations whose title contains any of these.
    DropContaining(&'static [&'static str]),
    /// Drop systems with more than one Force icon on each side.
    DropBattlegroundSystems,
    /// Keep only locations whose title contains this.
    KeepContaining(&'static str),
}

/// An elimination applied when the deck runs any of `when`.
#[derive(Clone, Copy, Debug)]
pub struct EliminationRule {
    pub when: &'static [&'static str],
    pub elimination: Elimination,
}

/// Deck-specific elimination rules, applied in order.
pub const ELIMINATION_RULES: &[EliminationRule] = &[
    EliminationRule {
        when: &["Speak With The Jedi Council", "Take A Seat, Young Skywalker"],
        elimination: Elimination::DropTitles(&["Coruscant: Jedi Council Chamber"]),
    },
    EliminationRule {
        when: &["Wesa Gotta Grand Army"],
        elimination: Elimination::DropTitles(&["Naboo: Boss Nass' Chambers", "Naboo: Battle Plains"]),
    },
    EliminationRule {
        when: &["Our Only Hope (V)"],
        elimination: Elimination::DropContaining(&["Yoda's Hut", "Death Star II"]),
    },
    EliminationRule {
        when: &["We Must Accelerate Our Plans"],
        elimination: Elimination::DropTitles(&["Blockade Flagship: Bridge"]),
    },
    EliminationRule {
        when: &["Sonic Bombardment"],
        elimination: Elimination::DropTitles(&["Cloud City: Security Tower (V)"]),
    },
    EliminationRule {
        when: &["Vader's Obsession (V)"],
        elimination: Elimination::DropTitles(&["Coruscant: The Works"]),
    },
    EliminationRule {
        when: &["Jedi Business"],
        elimination: Elimination::DropTitles(&[
            "Coruscant: Night Club",
            "Malastare",
            "Tatooine: Mos Espa",
        ]),
    },
    EliminationRule {
        when: &["Now, This Is Podracing!"],
        elimination: Elimination::DropTitles(&["Coruscant: Night Club", "Tatooine: Skywalker Hut"]),
    },
    EliminationRule {
        when: &["Kamino"],
        elimination: Elimination::DropContaining(&["Kamino: "]),
    },
    EliminationRule {
        when: &["Dagobah", "Dagobah (V)"],
        elimination: Elimination::DropContaining(&["Dagobah: "]),
    },
    EliminationRule {
        when: &["A New Secret Base"],
        elimination: Elimination::DropBattlegroundSystems,
    },
    EliminationRule {
        when: &["Let The Wookiee Win (V)"],
        elimination: Elimination::DropContaining(&["Kashyyyk"]),
    },
    EliminationRule {
        when: &["I Must Be Allowed To Speak (V)"],
        elimination: Elimination::DropContaining(&["Farm"]),
    },
    EliminationRule {
        when: &["Like My Father Before Me"],
        elimination: Elimination::KeepContaining("Endor"),
    },
];

/// Battleground locations that still count as possible starting locations.
const BATTLEGROUND_EXCEPTIONS: &[&str] = &["Hoth: Main Power Generators"];

static TITLE_HINT_PATTERNS: LazyLock<Vec<(Regex, &'static [&'static str])>> = LazyLock::new(|| {
    TITLE_HINTS
        .iter()
        .map(|hint| {
            let regex = Regex::new(&format!("(?i){}", hint.pattern))
                .expect("title hint pattern is a valid regex");
            (regex, hint.locations)
        })
        .collect()
});

static SYSTEM_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(LS|DS) (\w+).*$").unwrap());

/// Whether `card`'s display title is one of `titles`.
fn titled(card: &Card, titles: &[&str]) -> bool {
    titles.contains(&card.display_title())
}

/// Infer the starting interrupt.
///
/// An interrupt in the STARTING section decides outright. Otherwise the
/// candidates are the deck's starting interrupts minus the excluded ones: a
/// sole candidate wins, else the first that is not less-defining. When only
/// less-defining candidates remain the result is `None`.
#[must_use]
pub fn starting_interrupt<'a>(decklist: &Decklist<'a>) -> Option<&'a Card> {
    decklist
        .starting_of_type(CardType::Interrupt)
        .next()
        .or_else(|| inferred_starting_interrupt(decklist))
}

fn inferred_starting_interrupt<'a>(decklist: &Decklist<'a>) -> Option<&'a Card> {
    let candidates: Vec<&Card> = decklist
        .cards_of_type(CardType::Interrupt)
        .filter(|c| {
            c.front
                .sub_type
                .as_deref()
                .is_some_and(|s| s.contains(STARTING_SUB_TYPE))
        })
        .filter(|c| !titled(c, EXCLUDED_STARTING_INTERRUPTS))
        .collect();

    match candidates.as_slice() {
        [] => None,
        [only] => Some(*only),
        several => {
            let chosen = several
                .iter()
                .copied()
                .find(|c| !titled(c, LESS_DEFINING_STARTING_INTERRUPTS));
            if chosen.is_none() {
                tracing::debug!(url = %decklist.url, candidates = several.len(), "ambiguous starting interrupt");
            }
            chosen
        }
    }
}

/// One step of the starting-location cascade.
pub type LocationRule = for<'a, 'd> fn(&'d Decklist<'a>) -> Option<&'a Card>;

/// The starting-location cascade, highest priority first.
pub const LOCATION_RULES: &[(&str, LocationRule)] = &[
    ("always starting", always_starting_location),
    ("starting section", starting_section_location),
    ("system search", system_search_location),
    ("title hint", title_hint_location),
    ("hub", hub_location),
    ("title system", title_system_location),
    ("elimination", elimination_location),
];

/// Infer the starting location: the first cascade rule that finds one.
#[must_use]
pub fn starting_location<'a>(decklist: &Decklist<'a>) -> Option<&'a Card> {
    LOCATION_RULES.iter().find_map(|(rule, infer)| {
        let location = infer(decklist)?;
        tracing::debug!(url = %decklist.url, rule, location = location.display_title(), "starting location");
        Some(location)
    })
}

/// A location that is only ever a starting location.
pub fn always_starting_location<'a>(decklist: &Decklist<'a>) -> Option<&'a Card> {
    decklist
        .cards()
        .find(|c| titled(c, ALWAYS_STARTING_LOCATIONS))
}

/// The first location in the STARTING section.
pub fn starting_section_location<'a>(decklist: &Decklist<'a>) -> Option<&'a Card> {
    decklist.starting_of_type(CardType::Location).next()
}

/// System name of a location title, with virtual markers and palace
/// prefixes folded away.
#[must_use]
pub fn system_name(location_title: &str) -> String {
    let mut title = location_title.replace(" (V)", "");
    for (site, system) in SYSTEM_FOLDS {
        if title.contains(site) {
            title = title.replacen(site, system, 1);
        }
    }
    title.split(':').next().unwrap_or_default().to_string()
}

/// Most common value; ties go to the value that reached the top count first.
fn mode(values: &[String]) -> Option<&String> {
    let mut counts: Vec<(&String, usize)> = Vec::new();
    let mut best: Option<(&String, usize)> = None;
    for value in values {
        let count = match counts.iter_mut().find(|(v, _)| *v == value) {
            Some((_, count)) => {
                *count += 1;
                *count
            }
            None => {
                counts.push((value, 1));
                1
            }
        };
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

/// For system-search starting interrupts, the system most of the deck's
/// locations belong to.
pub fn system_search_location<'a>(decklist: &Decklist<'a>) -> Option<&'a Card> {
    let searches = decklist
        .starting_interrupt
        .is_some_and(|si| titled(si, SYSTEM_SEARCH_INTERRUPTS));
    if !searches {
        return None;
    }

    let mut locations: Vec<&Card> = decklist.starting_of_type(CardType::Location).collect();
    if locations.is_empty() {
        locations = decklist.cards_of_type(CardType::Location).collect();
    }
    let systems: Vec<String> = locations
        .iter()
        .map(|l| system_name(l.display_title()))
        .collect();
    let system = mode(&systems)?;

    [
        system.clone(),
        format!("{system} (V)"),
        format!("{system} (Episode I)"),
        format!("{system} (Episode I) (V)"),
    ]
    .iter()
    .find_map(|title| decklist.find(title))
}

/// A location named by a title hint.
pub fn title_hint_location<'a>(decklist: &Decklist<'a>) -> Option<&'a Card> {
    TITLE_HINT_PATTERNS
        .iter()
        .filter(|(pattern, _)| pattern.is_match(&decklist.title))
        .filter_map(|(_, locations)| locations.iter().find_map(|l| decklist.find(l)))
        .last()
}

/// A hub location the deck runs without the cards that rule it out.
pub fn hub_location<'a>(decklist: &Decklist<'a>) -> Option<&'a Card> {
    HUB_RULES
        .iter()
        .filter(|rule| !decklist.contains_any(rule.unless))
        .filter_map(|rule| decklist.find(rule.location))
        .last()
}

/// A system named right after the side marker in the title.
pub fn title_system_location<'a>(decklist: &Decklist<'a>) -> Option<&'a Card> {
    let caps = SYSTEM_TOKEN.captures(&decklist.title)?;
    let token = &caps[2];
    [
        token.to_string(),
        format!("{token} (Episode I)"),
        format!("{token} (V)"),
    ]
    .iter()
    .find_map(|title| decklist.find(title))
}

fn apply_elimination<'a>(candidates: &mut Vec<&'a Card>, elimination: Elimination) {
    match elimination {
        Elimination::DropTitles(titles) => candidates.retain(|c| !titled(c, titles)),
        Elimination::DropContaining(parts) => {
            candidates.retain(|c| !parts.iter().any(|p| c.title().contains(p)));
        }
        Elimination::DropBattlegroundSystems => candidates.retain(|c| {
            let battleground = c.front.is_sub_type("System")
                && c.front
                    .location_icons()
                    .is_some_and(|icons| icons.light > 1 && icons.dark > 1);
            !battleground
        }),
        Elimination::KeepContaining(part) => candidates.retain(|c| c.title().contains(part)),
    }
}

/// Narrow the deck's locations down to one.
///
/// Candidates are the STARTING section's locations, else all locations.
/// Only multi-icon locations (and a few exceptions) are kept, then the
/// elimination rules run and docking bays are dropped. If more than one
/// remains, locations with Force icons on one side only get a second look.
pub fn elimination_location<'a>(decklist: &Decklist<'a>) -> Option<&'a Card> {
    let mut candidates: Vec<&Card> = decklist.starting_of_type(CardType::Location).collect();
    if candidates.is_empty() {
        candidates = decklist.cards_of_type(CardType::Location).collect();
    }

    candidates.retain(|c| {
        let multi_icon = c
            .front
            .location_icons()
            .is_some_and(|icons| icons.light > 1 || icons.dark > 1);
        multi_icon || BATTLEGROUND_EXCEPTIONS.iter().any(|e| c.title().contains(e))
    });

    for rule in ELIMINATION_RULES {
        if decklist.contains_any(rule.when) {
            apply_elimination(&mut candidates, rule.elimination);
        }
    }
    candidates.retain(|c| !c.title().contains("Docking Bay"));

    if let [only] = candidates.as_slice() {
        return Some(*only);
    }

    let mut one_sided: Vec<&Card> = candidates
        .iter()
        .copied()
        .filter(|c| {
            c.front
                .location_icons()
                .is_some_and(|icons| icons.light == 0 || icons.dark == 0)
        })
        .collect();
    if one_sided.len() > 1 && decklist.contains("Return Of A Jedi (V)") {
        one_sided.retain(|c| !c.title().contains("Obi-Wan's Hut"));
    }

    match one_sided.as_slice() {
        [only] => Some(*only),
        _ => {
            if candidates.len() > 1 {
                tracing::debug!(url = %decklist.url, candidates = candidates.len(), "ambiguous starting location");
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Face, FaceKind, LocationIcons};
    use crate::core::Side;

    fn location(id: &str, title: &str, light: u32, dark: u32) -> Card {
        Card::new(
            CardId::new(id),
            Side::Light,
            "1",
            Face::new(title, FaceKind::Location(LocationIcons::new(light, dark))),
        )
    }

    fn interrupt(id: &str, title: &str, sub_type: &str) -> Card {
        Card::new(
            CardId::new(id),
            Side::Light,
            "1",
            Face::new(title, FaceKind::Interrupt).with_sub_type(sub_type),
        )
    }

    fn decklist<'a>(title: &str, cards: &'a [Card]) -> Decklist<'a> {
        let mut decklist = Decklist::new(title, "", "https://example.org", Side::Light);
        for card in cards {
            decklist.add(card, 1);
        }
        decklist
    }

    #[test]
    fn test_system_name_folds() {
        assert_eq!(system_name("Cloud City: Security Tower (V)"), "Bespin");
        assert_eq!(system_name("Jabba's Palace: Audience Chamber"), "Tatooine");
        assert_eq!(system_name("Hoth"), "Hoth");
    }

    #[test]
    fn test_mode_prefers_first_to_reach_max() {
        let values: Vec<String> = ["Hoth", "Endor", "Endor", "Hoth"].map(String::from).to_vec();
        assert_eq!(mode(&values).map(String::as_str), Some("Endor"));
        assert_eq!(mode(&[]), None);
    }

    #[test]
    fn test_single_starting_interrupt() {
        let cards = [interrupt("1", "Careful Planning (V)", "Used Or Starting")];
        let decklist = decklist("t", &cards);
        assert_eq!(starting_interrupt(&decklist).unwrap().id.as_str(), "1");
    }

    #[test]
    fn test_less_defining_interrupt_skipped() {
        let cards = [
            interrupt("1", "Surface Defense (V)", "Starting"),
            interrupt("2", "Let The Wookiee Win (V)", "Starting"),
            interrupt("3", "Careful Planning", "Starting"),
        ];
        let decklist = decklist("t", &cards);
        assert_eq!(starting_interrupt(&decklist).unwrap().id.as_str(), "2");
    }

    #[test]
    fn test_only_less_defining_interrupts_is_unset() {
        let cards = [
            interrupt("1", "Surface Defense (V)", "Starting"),
            interrupt("2", "Operational As Planned", "Starting"),
        ];
        assert!(starting_interrupt(&decklist("t", &cards)).is_none());
    }

    #[test]
    fn test_starting_section_decides_interrupt() {
        let cards = [
            interrupt("1", "Surface Defense (V)", "Starting"),
            interrupt("2", "Let The Wookiee Win (V)", "Starting"),
        ];
        let mut decklist = decklist("t", &cards);
        decklist.has_starting_section = true;
        decklist.add_starting(&cards[0]);
        assert_eq!(starting_interrupt(&decklist).unwrap().id.as_str(), "1");
    }

    #[test]
    fn test_starting_section_without_interrupt_falls_back() {
        let cards = [
            location("1", "Yavin 4: Massassi War Room", 1, 1),
            interrupt("2", "Let The Wookiee Win (V)", "Starting"),
        ];
        let mut decklist = decklist("t", &cards);
        decklist.has_starting_section = true;
        decklist.add_starting(&cards[0]);
        assert_eq!(starting_interrupt(&decklist).unwrap().id.as_str(), "2");
    }

    #[test]
    fn test_always_starting_location_outranks_title_hint() {
        let cards = [
            location("1", "Yavin 4: Massassi Throne Room", 2, 0),
            location("2", "Coruscant: Jedi Council Chamber", 2, 0),
        ];
        let decklist = decklist("Jane LS JCC", &cards);
        assert_eq!(starting_location(&decklist).unwrap().id.as_str(), "1");
    }

    #[test]
    fn test_title_hint_last_match_wins() {
        let cards = [
            location("1", "Coruscant: Jedi Council Chamber", 2, 0),
            location("2", "Endor: Anakin's Funeral Pyre", 1, 0),
        ];
        let decklist = decklist("JCC Pyre", &cards);
        assert_eq!(title_hint_location(&decklist).unwrap().id.as_str(), "2");
    }

    #[test]
    fn test_hub_rule() {
        let cards = [
            location("1", "Coruscant: Jedi Council Chamber", 2, 0),
            interrupt("2", "Speak With The Jedi Council", "Used"),
        ];
        assert!(hub_location(&decklist("t", &cards)).is_none());
        assert!(hub_location(&decklist("t", &cards[..1])).is_some());
    }

    #[test]
    fn test_system_search_mode() {
        let cards = [
            interrupt("1", "Careful Planning (V)", "Starting"),
            location("2", "Endor", 2, 1),
            location("3", "Endor: Back Door", 1, 0),
            location("4", "Hoth", 1, 1),
        ];
        let mut decklist = decklist("t", &cards);
        decklist.starting_interrupt = Some(&cards[0]);
        assert_eq!(system_search_location(&decklist).unwrap().id.as_str(), "2");
    }

    #[test]
    fn test_title_system_token() {
        let cards = [location("1", "Kashyyyk", 2, 1)];
        let decklist = decklist("2023 Worlds Jane LS Kashyyyk Mains", &cards);
        assert_eq!(title_system_location(&decklist).unwrap().id.as_str(), "1");
    }

    #[test]
    fn test_elimination_single_survivor() {
        let cards = [
            location("1", "Hoth: Echo Command Center", 2, 0),
            location("2", "Hoth: Echo Docking Bay", 2, 0),
            location("3", "Endor", 1, 1),
        ];
        assert_eq!(elimination_location(&decklist("t", &cards)).unwrap().id.as_str(), "1");
    }

    #[test]
    fn test_elimination_one_sided_second_look() {
        let cards = [
            location("1", "Tatooine: Obi-Wan's Hut", 2, 0),
            location("2", "Naboo: Theed Palace Throne Room", 2, 0),
            location("3", "Kashyyyk", 2, 2),
            interrupt("4", "Return Of A Jedi (V)", "Used"),
        ];
        assert_eq!(elimination_location(&decklist("t", &cards)).unwrap().id.as_str(), "2");
    }

    #[test]
    fn test_elimination_ambiguous_is_unset() {
        let cards = [
            location("1", "Kashyyyk", 2, 2),
            location("2", "Endor", 2, 2),
        ];
        assert!(elimination_location(&decklist("t", &cards)).is_none());
    }

    #[test]
    fn test_elimination_rule_keep_containing() {
        let cards = [
            location("1", "Endor: Chief Chirpa's Hut", 2, 0),
            location("2", "Tatooine: Lars' Moisture Farm", 2, 0),
            interrupt("3", "Like My Father Before Me", "Used"),
        ];
        assert_eq!(elimination_location(&decklist("t", &cards)).unwrap().id.as_str(), "1");
    }
}
