//! Archetype hints read from decklist titles.
//!
//! Tournament decklists are usually titled
//! `<year> <event> <signifier or round> <player> <DS|LS> <archetype>`, for
//! example `2022 U.S. Nationals Jane Doe DS HB`. The trailing archetype is a
//! free-form hint written by whoever uploaded the list.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::Side;
use crate::decklist::ROUND_NAMES;

/// Words that end the event part of a decklist title.
pub const TOURNAMENT_SIGNIFIERS: &[&str] = &[
    "Playoffs",
    "Series",
    "Prix",
    "Championship",
    "Worlds",
    "Regionals",
    "States",
    "Cup",
    "Open",
    "Invitational",
    "Nationals",
    "Continentals",
    "MPC",
    "GEMPC7",
    "GEMPC",
    "Event",
    "League",
    "PC20",
    "Tournament",
    "OCS",
    "Mini-Worlds",
];

/// Hints that only make sense with the side in front of them.
const SIDE_QUALIFIED_HINTS: &[&str] = &["Senate", "Combat"];

static TOURNAMENT_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    let delimiters: Vec<String> = TOURNAMENT_SIGNIFIERS
        .iter()
        .chain(ROUND_NAMES)
        .map(|d| regex::escape(d))
        .collect();
    Regex::new(&format!(
        r"(?i)\d{{0,4}}\s?.+({})\s?.+\s(DS|LS)\s(.+)",
        delimiters.join("|")
    ))
    .unwrap()
});

/// The archetype hint at the end of a tournament decklist title.
///
/// ## Example
///
/// ```
/// use swccg_decklists::archetypes::raw_archetype_name;
///
/// assert_eq!(
///     raw_archetype_name("2022 U.S. Nationals Jane Doe DS HB").as_deref(),
///     Some("HB")
/// );
/// assert_eq!(
///     raw_archetype_name("2019 Worlds Day 2 John LS Senate").as_deref(),
///     Some("LS Senate")
/// );
/// assert_eq!(raw_archetype_name("Casual Hidden Base"), None);
/// ```
#[must_use]
pub fn raw_archetype_name(title: &str) -> Option<String> {
    let caps = TOURNAMENT_TITLE.captures(title)?;
    let side = Side::from_marker(caps.get(2)?.as_str())?;
    let hint = caps.get(3)?.as_str().trim();
    if hint.is_empty() {
        return None;
    }
    Some(if SIDE_QUALIFIED_HINTS.contains(&hint) {
        format!("{} {hint}", side.marker())
    } else {
        hint.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signifier_titles() {
        assert_eq!(
            raw_archetype_name("2023 Euro Continentals Anna Smith LS Hidden Base No-Flip").as_deref(),
            Some("Hidden Base No-Flip")
        );
        assert_eq!(
            raw_archetype_name("2021 PC20 Bob DS ROps (V)").as_deref(),
            Some("ROps (V)")
        );
    }

    #[test]
    fn test_round_titles() {
        assert_eq!(
            raw_archetype_name("2019 Worlds Top 8 Jo LS Profit").as_deref(),
            Some("Profit")
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            raw_archetype_name("2018 mpc jo ds court").as_deref(),
            Some("court")
        );
    }

    #[test]
    fn test_side_qualified_hints() {
        assert_eq!(
            raw_archetype_name("2022 Worlds Day 1 Jo DS Combat").as_deref(),
            Some("DS Combat")
        );
        assert_eq!(
            raw_archetype_name("2022 Worlds Day 1 Jo ls Senate").as_deref(),
            Some("LS Senate")
        );
    }

    #[test]
    fn test_titles_without_hint() {
        assert_eq!(raw_archetype_name(""), None);
        assert_eq!(raw_archetype_name("Hidden Base by Jo"), None);
        assert_eq!(raw_archetype_name("2022 Worlds Jo HB"), None);
    }
}
