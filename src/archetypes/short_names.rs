//! Abbreviated archetype names.
//!
//! A short name is built in two steps: targeted substring abbreviations
//! (location and interrupt names) are applied first, then the result is
//! looked up in the long-name table. Names the table does not know are
//! returned as abbreviated by the first step.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

/// Substring abbreviations, applied in order to the first occurrence.
pub const SUBSTRING_ABBREVIATIONS: &[(&str, &str)] = &[
    ("Combat Readiness (V)", "CR(V)"),
    ("Careful Planning (V)", "CP(V)"),
    ("Coruscant: Jedi Council Chamber", "JCC"),
    ("Dathomir: Maul's Chambers", "Maul's Chambers"),
    ("Dagobah: Cave", "Dagobah Cave"),
    ("Slip Sliding Away (V)", "SSA(V)"),
    ("Surface Defense (V)", "12-Card"),
    ("Death Star II: Throne Room", "DSII Throne Room"),
    ("According To My Design", "ATMD"),
    ("Endor: Chief Chirpa's Hut", "Chirpa's Hut"),
    ("Endor: Anakin's Funeral Pyre", "Pyre"),
    ("Hoth: Ice Plains (5th Marker)", "Ice Plains"),
    ("Let The Wookiee Win (V)", "LTWW(V)"),
    ("Naboo: Boss Nass' Chambers", "Boss Nass Chambers"),
    ("Podrace Prep", "Podracing"),
    ("Tatooine: Desert Landing Site", "DLS"),
    ("Tatooine: Hutt Trade Route (Desert)", "Hutt Trade Route"),
    ("Tatooine: Slave Quarters", "Slave Quarters"),
    ("Hoth: Defensive Perimeter (3rd Marker)", "3rd Marker"),
    ("Ajan Kloss: Training Course", "Ajan Kloss"),
    ("Coruscant: The Works", "Coruscant"),
    ("Invisible Hand: Bridge", "Invisible Hand"),
    ("Hoth: Main Power Generators (1st Marker)", "Hoth MPG"),
    ("Hoth MPG (V)", "Hoth MPG"),
    ("Home One: War Room", "Home One War Room"),
    ("Slave Quarters (V)", "Slave Quarters"),
    ("Tatooine: Skywalker Hut", "Skywalker Hut"),
    ("Yavin 4: Massassi Throne Room", "TRM"),
];

/// Full archetype names and their abbreviations.
pub const SHORT_NAMES: &[(&str, &str)] = &[
    ("A Great Tactician Creates Plans", "Thrawn"),
    ("A Stunning Move", "ASM"),
    ("Agents In The Court", "AITC"),
    ("Agents In The Court Mandalorians", "AITC Mandalorians"),
    ("Agents In The Court Mandalorians No-Flip", "AITC Mandalorians"),
    ("Agents Of Black Sun", "AOBS"),
    ("Bring Him Before Me", "BHBM"),
    ("Carbon Chamber Testing", "CCT"),
    ("Carbon Chamber Testing Flip", "CCT"),
    ("Carbon Chamber Testing No-Flip", "CCT No-Flip"),
    ("City In The Clouds", "City In The Clouds"),
    ("Court Of The Vile Gangster", "Court"),
    ("Dantooine Base Operations", "DBO"),
    ("Diplomatic Mission To Alderaan", "Diplo"),
    ("Don't Tread On Me (V)", "12-Card"),
    ("Endor (V)", "Endor"),
    ("Endor Operations", "Endor Ops"),
    ("He Is The Chosen One", "HITCO"),
    ("Hidden Base", "HB"),
    ("Hidden Base Flip", "HB"),
    ("Hidden Base No-Flip", "HB No-Flip"),
    ("Hunt Down And Destroy The Jedi (V)", "Hunt Down (V)"),
    ("Hunt Down And Destroy The Jedi", "Hunt Down"),
    ("Hunt For The Droid General", "Clones"),
    ("I Want That Map", "Map"),
    ("ISB Operations", "ISB"),
    ("Imperial Entanglements", "IE"),
    ("Imperial Occupation", "DS Operatives"),
    ("Invasion", "Invasion"),
    ("Let Them Make The First Move", "DS Combat"),
    ("Local Uprising", "LS Operatives"),
    ("Massassi Base Operations", "MBO"),
    ("Mind What You Have Learned", "MWYHL"),
    ("Mind What You Have Learned Flip", "MWYHL Flip"),
    ("Mind What You Have Learned No-Flip", "MWYHL No-Flip"),
    ("My Kind Of Scum", "MKOS"),
    ("My Lord, Is That Legal?", "DS Senate"),
    ("No Money, No Parts, No Deal!", "Watto"),
    ("Old Allies", "OA"),
    ("On The Verge Of Greatness", "Verge"),
    ("Plead My Case To The Senate", "LS Senate"),
    ("Quiet Mining Colony", "QMC"),
    ("Ralltiir Operations (V)", "ROps(V)"),
    ("Ralltiir Operations", "ROps"),
    ("Rebel Strike Team", "RST"),
    ("Rescue The Princess (V)", "RTP (V)"),
    ("Rescue The Princess", "RTP"),
    ("Set Your Course For Alderaan", "SYCFA"),
    ("Set Your Course For Alderaan Flip", "SYCFA Flip"),
    ("Set Your Course For Alderaan No-Flip", "SYCFA No-Flip"),
    ("Shadow Collective", "SC"),
    ("The Empire Knows We're Here", "Hoth Speeders"),
    ("The Galaxy May Need A Legend", "Legend"),
    ("The Hyperdrive Generator's Gone (V)", "Hyperdrive (V)"),
    ("The Hyperdrive Generator's Gone", "Hyperdrive"),
    ("The Shield Will Be Down In Moments", "Walkers Objective"),
    ("There Is Good In Him", "TIGIH"),
    ("They Have No Idea We're Coming", "No Idea"),
    ("This Deal Is Getting Worse All The Time", "TDIGWATT"),
    ("Twin Suns Of Tatooine", "Twin Suns"),
    ("Watch Your Step", "WYS"),
    ("We Have A Plan", "WHAP"),
    ("We'll Handle This", "LS Combat"),
    ("Yavin 4 Base Operations", "Y4O"),
    ("Yavin 4 Base Operations Jedi Business", "Y4O Jedi Business"),
    ("You Can Either Profit By This...", "Profit"),
    ("Zero Hour", "Zero Hour"),
    ("Echo Base Operations", "EBO"),
    ("That Thing's Operational", "TTO"),
    ("Hoth Walkers", "Walkers"),
    ("Naboo Gungans", "Gungans"),
    ("Communing (Obi-Wan)", "Obimuning"),
    ("Communing (Qui-Gon)", "Quimuning"),
    ("Communing (Yoda)", "Yodamuning"),
    ("Skywalker Saga (Anakin)", "Anakin Saga"),
    ("Skywalker Saga (Luke)", "Luke Saga"),
    ("Skywalker Saga (Rey)", "Rey Saga"),
    ("Revenge Of The Sith", "ROTS"),
    ("Revenge Of The Sith (Vader)", "ROTS Vader"),
    ("Revenge Of The Sith (Dooku)", "ROTS Dooku"),
    ("Revenge Of The Sith (Maul)", "ROTS Maul"),
    ("Rise Of The Sith", "ROTS"),
];

static SHORT_NAME_INDEX: LazyLock<FxHashMap<&'static str, &'static str>> =
    LazyLock::new(|| SHORT_NAMES.iter().copied().collect());

/// Apply the substring abbreviations to a name.
#[must_use]
pub fn abbreviate(name: &str) -> String {
    SUBSTRING_ABBREVIATIONS
        .iter()
        .fold(name.to_string(), |name, (from, to)| name.replacen(from, to, 1))
}

/// The short name for an archetype name.
///
/// ## Example
///
/// ```
/// use swccg_decklists::archetypes::short_name;
///
/// assert_eq!(short_name("Hidden Base No-Flip"), "HB No-Flip");
/// assert_eq!(short_name("Yavin 4: Massassi Throne Room"), "TRM");
/// assert_eq!(short_name("Coruscant: Jedi Council Chamber CP(V)"), "JCC CP(V)");
/// assert_eq!(short_name("Something New"), "Something New");
/// ```
#[must_use]
pub fn short_name(name: &str) -> String {
    let abbreviated = abbreviate(name);
    match SHORT_NAME_INDEX.get(abbreviated.as_str()) {
        Some(short) => (*short).to_string(),
        None => abbreviated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lookup() {
        assert_eq!(short_name("Hidden Base"), "HB");
        assert_eq!(short_name("Ralltiir Operations (V)"), "ROps(V)");
        assert_eq!(short_name("Rescue The Princess (V)"), "RTP (V)");
        assert_eq!(short_name("Hoth Walkers"), "Walkers");
        assert_eq!(short_name("Revenge Of The Sith"), "ROTS");
    }

    #[test]
    fn test_abbreviations_compose() {
        assert_eq!(short_name("Death Star II: Throne Room ATMD"), "DSII Throne Room ATMD");
        assert_eq!(
            short_name("Death Star II: Throne Room According To My Design"),
            "DSII Throne Room ATMD"
        );
        assert_eq!(short_name("Hoth: Main Power Generators (1st Marker) (V)"), "Hoth MPG");
        assert_eq!(short_name("Tatooine: Slave Quarters (V) LTWW(V)"), "Slave Quarters LTWW(V)");
    }

    #[test]
    fn test_only_first_occurrence_is_abbreviated() {
        assert_eq!(abbreviate("Podrace Prep Podrace Prep"), "Podracing Podrace Prep");
    }

    #[test]
    fn test_table_keys_are_unique() {
        assert_eq!(SHORT_NAME_INDEX.len(), SHORT_NAMES.len());
    }
}
