//! Ordered rewrite tables applied to card titles.
//!
//! Each table is a list of `(pattern, replacement)` pairs applied top to
//! bottom. Later entries may rely on earlier ones having run, so the order
//! is part of the data. Literal entries replace every occurrence; pattern
//! entries are regular expressions (with `$n` group references in the
//! replacement).

use std::sync::LazyLock;

use regex::Regex;

/// A single title rewrite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rewrite {
    /// Replace every occurrence of a literal substring.
    Literal {
        from: &'static str,
        to: &'static str,
    },
    /// Replace every match of a regular expression.
    Pattern {
        pattern: &'static str,
        to: &'static str,
    },
}

const fn lit(from: &'static str, to: &'static str) -> Rewrite {
    Rewrite::Literal { from, to }
}

const fn re(pattern: &'static str, to: &'static str) -> Rewrite {
    Rewrite::Pattern { pattern, to }
}

/// Known typos and data-entry errors seen in submitted decklists.
pub const DATA_ENTRY_FIXES: &[Rewrite] = &[
    lit("w/", "with"),
    lit("Sullustian", "Sullustan"),
    lit("Rebek", "Rebel"),
    re(r"BB-8$", "BB-8 (Beebee-Ate)"),
    lit("Bala-Tak", "Bala-Tik"),
    lit("Artoo-Deetoo", "Artoo-Detoo"),
    lit("Uhoh", "Uh-oh"),
    lit("Short-Range Fighters &", "Short Range Fighters &"),
    lit("Short Range Fighter &", "Short Range Fighters &"),
    re(r"Short Range Fighters$", "Short-range Fighters"),
    lit("Coarse, Rough", "Coarse and Rough"),
    re(r"^Morgan Elsbeth", "Magistrate Morgan Elsbeth"),
    lit("SetForStun", "Set for Stun"),
    re(r"^Blue 1$", "Blue 11"),
    lit("3P0", "3PO"),
    lit("K-2S0", "K-2SO"),
    lit("Tueesso", "Tuesso"),
    re(r"U-3PO$", "U-3PO (Yoo-Threepio)"),
    lit("Third Marker", "3rd Marker"),
    lit("Presence Of Te Force", "Presence Of The Force"),
    lit("Persuit", "Pursuit"),
    lit("Tractor Beams", "Tractor Beam"),
    lit("Flare S", "Flare-S"),
    lit("Padmé", "Padme"),
    lit("Agression", "Aggression"),
    lit("Anger Fear Aggression", "Anger, Fear, Aggression"),
    lit("Knowledge & Defense", "Knowledge And Defense"),
    lit("See You Around Kid", "See You Around, Kid"),
    re(r"5D6-RA-7$", "5D6-RA-7 (Fivedesix)"),
    re(r"5D6-RA-7 \(V\)$", "5D6-RA-7 (Fivedesix) (V)"),
    lit("Jedi Council Chambers", "Jedi Council Chamber"),
    lit(" with ", " With "),
    re(r"2-1B$", "2-1B (Too-Onebee)"),
    lit("I Can Take Care Of Myself", "I Think I Can Handle Myself"),
    lit("I'm Getting Kind Of Good At This", "I'm Getting Pretty Good At This"),
    lit("Darth Vader Emperors Enforcer", "Darth Vader, Emperor's Enforcer"),
    lit("Darth Vader Emperor's Enforcer", "Darth Vader, Emperor's Enforcer"),
    lit("Storm Trooper", "Stormtrooper"),
    lit("Asssault", "Assault"),
    lit("Ghhk and Those", "Ghhhk & Those"),
    lit("Search & Destroy", "Search And Destroy"),
    lit("Han Chewie, And The Falcon", "Han, Chewie, And The Falcon"),
    lit("Ability Ability Ability", "Ability, Ability, Ability"),
    re(r"(?i)Qui-Gon's Lightsaber \(ref[^)]*\s?(3|iii)\)", "Qui-Gon's Lightsaber"),
    re(r"(?i)Qui-Gon Jinn's Lightsaber \(ep(i|1)\)", "Qui-Gon Jinn's Lightsaber"),
    lit("'s Saber", "'s Lightsaber"),
    lit("ith Saber", "ith Lightsaber"),
    lit("Obi Wan", "Obi-Wan"),
    lit("Slave 1", "Slave I"),
    lit("Councli", "Council"),
    lit("Chimera", "Chimaera"),
    lit("Chimeara", "Chimaera"),
    lit("Desparate", "Desperate"),
    lit("Baqy", "Bay"),
    lit("Ahch To", "Ahch-To"),
    lit("\u{201a}Snap'", "'Snap'"),
    lit("Kinta Strider", "Kintan Strider"),
    lit("Palapatine", "Palpatine"),
    lit("(DB)", "(Docking Bay)"),
    re(
        r"Scarif: (Landing Pad|Docking Bay|Landing Pad Nine)$",
        "Scarif: Landing Pad Nine (Docking Bay)",
    ),
    re(r"Landing Platform$", "Landing Platform (Docking Bay)"),
    re(r"Platform 327$", "Platform 327 (Docking Bay)"),
    lit("Eza", "Ezra"),
    lit("Perimiter", "Perimeter"),
    lit("Kurt Drive", "Kuat Drive"),
    lit("X-Wing Laser Cannons", "X-wing Laser Cannon"),
    lit("Run, Luke, Run", "Run Luke, Run"),
    lit("G1", "Gold 1"),
    lit("Yavin :", "Yavin 4:"),
    lit("Yavin IV", "Yavin 4"),
    lit("Yavin 4 Docking Bay", "Yavin 4: Docking Bay"),
    lit("Chandrilla", "Chandrila"),
    re(r"(?i)heading to the medical", "Heading For The Medical"),
    lit("With Parts Showing", "With His Parts Showing"),
    re(r"^Jedha City", "Jedha: Jedha City"),
    lit("Peavy", "Peavey"),
    lit("Spacebort", "Spaceport"),
    lit("Owen & Beru Lars", "Owen Lars & Beru Lars"),
    lit("Manuever", "Maneuver"),
    lit("All wings & Darklighter Spin", "All Wings Report In & Darklighter Spin"),
    re(r"FN-2199$", "FN-2199 (Nines)"),
    lit("Blockade Flagship Bridge", "Blockade Flagship: Bridge"),
    lit("Naboo: Hallway", "Naboo: Theed Palace Hallway"),
    re(r"(?i)We're in Attack Position$", "We're In Attack Position Now"),
    lit("Bith Shuttle", "Bith Shuffle"),
    re(r"^Bith Shuffle", "The Bith Shuffle"),
    lit("Shuffle \u{107} Desperate", "Shuffle & Desperate"),
    lit("Shuffle and Desperate", "Shuffle & Desperate"),
    lit("EPP Mara", "Mara Jade With Lightsaber"),
    re(r"^Prince$", "Prince Xizor"),
    lit("I Can Feel The Conflict", "I Feel The Conflict"),
    lit("Darth Vader, Lord of The Sith", "Darth Vader, Dark Lord of The Sith"),
    lit("Spaceport Office", "Spaceport Prefect's Office"),
    lit("IG-8 8", "IG-88"),
    lit("Yoda ,", "Yoda,"),
    lit("Master OF", "Master Of"),
    lit("Kal 'Falnl", "Kal'Falnl"),
    lit("Kal Fal'nl", "Kal'Falnl"),
    lit("Uchines", "Urchins"),
    lit("Calrissian Scoundrel", "Calrissian, Scoundrel"),
    lit("Chewie Enraged", "Chewie, Enraged"),
    lit("Cahmbers", "Chambers"),
    lit("Baby.", "Baby,"),
    re(r"(?i)Specter of Supreme", "Specter Of The Supreme"),
    lit("Ellors", "Ellorrs"),
    lit("Fighter's Coming In", "Fighters Coming In"),
    re(r"Hoth: Defensive Perimeter$", "Hoth: Defensive Perimeter (3rd Marker)"),
    lit("Hoth: Ice Plains (V)", "Hoth: Ice Plains (5th Marker) (V)"),
    lit("Ponda Boba", "Ponda Baba"),
    lit("Holotheater", "Holotheatre"),
    re(r"Interrogation Room$", "Interrogation Room (Prison)"),
    lit("Sefia", "Sefla"),
    re(r"Ahsoka Tano With Lightsaber$", "Ahsoka Tano With Lightsabers"),
    lit("Escape Pod Combo", "Escape Pod & We're Doomed"),
    lit("Toryn far (V)", "Toryn Farr (V)"),
    lit("Inquistor", "Inquisitor"),
    lit("Hit & Run", "Hit And Run"),
    lit("Hoth: Docking Bay", "Hoth: Echo Docking Bay"),
    lit("Commmander Arden", "Commander Ardan"),
    lit("Assaj", "Asajj"),
    re(r"Cloud City: Upper Plaza$", "Cloud City: Upper Plaza Corridor"),
    re(r"General Leia$", "General Leia Organa"),
    lit("Nelsoor", "Nesloor"),
    lit("Sergeant Misik", "Corporal Misik"),
    lit("Shadaa", "Shaddaa"),
    lit("Naboo Blaster (V)", "Naboo Blaster"),
    lit("Masterful Move and Endor", "Masterful Move & Endor"),
    re(r"(?i)Masterful Move &\s+Occupation", "Masterful Move & Endor Occupation"),
    lit("Move & Endor Celebration", "Move & Endor Occupation"),
    lit("Director Krennic", "Director Orson Krennic"),
    re(r"Power Generators \(V\)$", "Power Generators (1st Marker) (V)"),
    re(r"Hoth: North Ridge$", "Hoth: North Ridge (4th Marker)"),
    re(r"Han With Heavy Blaster$", "Han With Heavy Blaster Pistol"),
    lit("Vengeace", "Vengeance"),
    lit("Boshek", "BoShek"),
    re(r"(?i)Dash In Rogue 10", "Dash In Rogue 12"),
    lit("\"Snap Wexley", "'Snap' Wexley"),
    lit("Wedge Antilles In Red Squadron 1", "Wedge In Red Squadron 1"),
    lit("Kylo With Lightsaber", "Kylo Ren With Lightsaber"),
    lit("Repairs \u{107} Starship", "Repairs & Starship"),
    // Cards that were never reprinted as (V)
    lit("Death Squadron Assignment (V)", "Death Squadron Assignment"),
    lit("A Brave Resistance (V)", "A Brave Resistance"),
    lit("Irritating (V)", "Irritating"),
    lit("Like Sand (V)", "Like Sand"),
    lit("Endor Commando Team (V)", "Endor Commando Team"),
    re(r"^Solo \(V\)$", "Solo"),
    lit("Rogue One (V)", "Rogue One"),
    lit("Scarif: Turbolift Complex (V)", "Scarif: Turbolift Complex"),
    lit("General Airen Cracken (V)", "General Airen Cracken"),
    lit("Captain Hera Syndulla (V)", "Captain Hera Syndulla"),
    lit("Senator Mon Mothma (V)", "Senator Mon Mothma"),
    lit("Leia's Resistance Transport (V)", "Leia's Resistance Transport"),
    lit("Rebel Trooper Reinforcements (V)", "Rebel Trooper Reinforcements"),
    lit("Death Squadron Assignments", "Death Squadron Assignment"),
    // Title case for short words
    lit(" in ", " In "),
    lit(" and ", " And "),
    lit(" of ", " Of "),
    lit(" with ", " With "),
    lit(" the ", " The "),
    lit(" to ", " To "),
    lit(" is ", " Is "),
    lit(" a ", " A "),
    lit(" an ", " An "),
    lit(" for ", " For "),
    lit(" me ", " Me "),
    lit(" at ", " At "),
    lit(" be ", " Be "),
    // Capitalization errors
    lit("Fn-", " FN-"),
    lit("thrawn", "Thrawn"),
    lit("command", "Command"),
    lit("moisture farm", "Moisture Farm"),
    lit("Obi-wan", "Obi-Wan"),
    lit("damage", "Damage"),
    lit("weapon", "Weapon"),
    lit("levitation", "Levitation"),
    lit("Kal'falnl", "Kal'Falnl"),
    lit("Tie Sentry", "TIE Sentry"),
    lit("clouds", "Clouds"),
    lit("dark lord", "Dark Lord"),
    lit("lightsaber", "Lightsaber"),
    lit("leave", "Leave"),
    lit("learner", "Learner"),
    lit("Le-BO2D9", "LE-BO2D9"),
    lit("PEace", "Peace"),
    lit("Temmin \"Snap\" Wexley", "Temmin 'Snap' Wexley"),
    lit("Ardon \"Vapor\" Crell", "Ardon 'Vapor' Crell"),
];

/// Punctuation and apostrophes lost in transcription.
pub const PUNCTUATION_FIXES: &[Rewrite] = &[
    lit("Turn It Off! Turn It Off (V)", "Turn It Off! Turn It Off! (V)"),
    lit("I Can't Shake Him (V)", "I Can't Shake Him! (V)"),
    lit("Alert My Star Destroyer (V)", "Alert My Star Destroyer! (V)"),
    lit("Down With The Emperor (V)", "Down With The Emperor! (V)"),
    lit("Evil Is Everywhere!", "Evil Is Everywhere"),
    re(r"Run Luke, Run$", "Run Luke, Run!"),
    re(r"Watch Your Back$", "Watch Your Back!"),
    re(r"Double Our Efforts$", "Double Our Efforts!"),
    re(r"Coming Through$", "Coming Through!"),
    re(r"Cease Fire$", "Cease Fire!"),
    re(r"It's A Trap$", "It's A Trap!"),
    re(r"It's A Hit$", "It's A Hit!"),
    re(r"You'll Be Dead$", "You'll Be Dead!"),
    lit("Lukes Bionic Hand", "Luke's Bionic Hand"),
    lit("Beldons Eye", "Beldon's Eye"),
    lit("Boss Nass Chambers", "Boss Nass' Chambers"),
    lit("Mauls", "Maul's"),
    lit("Tarpals Electropole", "Tarpals' Electropole"),
    lit("Lars Moisture Farm", "Lars' Moisture Farm"),
];

/// Cards that share a title with another printing. Printing hints are
/// folded either onto the default card or onto the "(Episode I)" and set
/// qualifiers the resolver understands.
pub const SAME_TITLE_DISAMBIGUATION: &[Rewrite] = &[
    re(r"Sense \((?i:pre)[^)]*\)", "Sense"),
    re(r"Alter \((?i:pre)[^)]*\)", "Alter"),
    re(r"Control \((?i:dag)[^)]*\)", "Control"),
    re(r"Tatooine \((?i:pre)[^)]*\)", "Tatooine"),
    re(r"Coruscant \((?i:s)[^)]*\)", "Coruscant"),
    re(r"Obi-Wan's Lightsaber \((?i:pre)[^)]*\)", "Obi-Wan's Lightsaber"),
    re(r"Bib Fortuna \((?i:j)[^)]*\)", "Bib Fortuna"),
    re(r"Sense \((?i:ep|cor)[^)]*\)", "Sense (Episode I)"),
    re(r"Alter \((?i:ep|cor)[^)]*\)", "Alter (Episode I)"),
    re(r"Control \((?i:ep|cor)[^)]*\)", "Control (Episode I)"),
    re(r"Tatooine \((?i:ep|cor)[^)]*\)", "Tatooine (Episode I)"),
    re(r"Coruscant \((?i:ep|cor)[^)]*\)", "Coruscant (Episode I)"),
    re(r"Obi-Wan's Lightsaber \((?i:e|r)[^)]*\)", "Obi-Wan's Lightsaber (Episode I)"),
    re(r"Bib Fortuna \((?i:e|r)[^)]*\)", "Bib Fortuna (Episode I)"),
    lit("Boba Fett (SE)", "Boba Fett (Special Edition)"),
    lit("Boba Fett (CC)", "Boba Fett (Cloud City)"),
    lit("Alter (V)", "Alter (Premiere) (V)"),
];

/// Cards that were blanked or renamed after decklists naming them were
/// published. Matched against whole titles (by comparison key) before the
/// resolver looks at qualifiers.
pub const RENAMED_CARDS: &[(&str, &str)] = &[
    ("Macroscan (V)", "Death Star Reactor Terminal"),
    ("Death Star Reactor Terminal (V)", "Death Star Reactor Terminal"),
    ("Evacuation Control (V)", "I Don't Like Sand"),
    ("Imperial Justice (V)", "Coarse And Rough And Irritating"),
    ("Imperial Domination (V)", "Imperial Enforcement"),
    (
        "Help Me Obi-Wan Kenobi & Quite A Mercenary",
        "Quite A Mercenary (V)",
    ),
    ("Ability, Ability, Ability (V)", "Ability, Ability, Ability"),
    ("Civil Disorder (V)", "Civil Disorder"),
    ("Strategic Reserves (V)", "Strategic Reserves"),
    ("Sense (V)", "Sense"),
];

/// A rewrite ready to apply.
#[derive(Debug)]
pub(crate) enum CompiledRewrite {
    Literal(&'static str, &'static str),
    Pattern(Regex, &'static str),
}

impl CompiledRewrite {
    fn compile(rewrite: &Rewrite) -> Self {
        match *rewrite {
            Rewrite::Literal { from, to } => CompiledRewrite::Literal(from, to),
            Rewrite::Pattern { pattern, to } => CompiledRewrite::Pattern(
                Regex::new(pattern).expect("correction pattern is a valid regex"),
                to,
            ),
        }
    }

    /// Apply this rewrite, returning `None` when nothing matched.
    pub(crate) fn apply(&self, input: &str) -> Option<String> {
        match self {
            CompiledRewrite::Literal(from, to) => {
                input.contains(from).then(|| input.replace(from, to))
            }
            CompiledRewrite::Pattern(regex, to) => regex
                .is_match(input)
                .then(|| regex.replace_all(input, *to).into_owned()),
        }
    }
}

/// All title corrections, in application order.
pub(crate) static TITLE_CORRECTIONS: LazyLock<Vec<CompiledRewrite>> = LazyLock::new(|| {
    DATA_ENTRY_FIXES
        .iter()
        .chain(PUNCTUATION_FIXES)
        .chain(SAME_TITLE_DISAMBIGUATION)
        .map(CompiledRewrite::compile)
        .collect()
});

/// Run the full correction table over a title.
pub(crate) fn apply_corrections(title: &str) -> String {
    let mut current = title.to_string();
    for rewrite in TITLE_CORRECTIONS.iter() {
        if let Some(next) = rewrite.apply(&current) {
            current = next;
        }
    }
    current
}
