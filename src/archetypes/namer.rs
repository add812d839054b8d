//! Card-based archetype naming.
//!
//! The name comes from the first rule of `NAMING_RULES` that applies, then
//! every trump rule runs in order and may replace it. The short name,
//! aliases and matchers are derived from the final name and the objective.

use serde::{Deserialize, Serialize};

use super::modifiers::objective_suffix;
use super::short_names::short_name;
use super::trumps::apply_trumps;
use crate::cards::CardType;
use crate::core::{ClassifierConfig, Side};
use crate::decklist::starting::SYSTEM_SEARCH_INTERRUPTS;
use crate::decklist::Decklist;
use crate::text::collapse_whitespace;

/// Name used when no rule applies.
pub const UNKNOWN_ARCHETYPE: &str = "Unknown";

/// Starting interrupts of 12-card starting decks.
pub const TWELVE_CARD_INTERRUPTS: &[&str] = &["Don't Tread On Me (V)", "Surface Defense (V)"];

/// A decklist together with the thresholds used to read it.
#[derive(Clone, Copy, Debug)]
pub struct DeckView<'d, 'a> {
    pub decklist: &'d Decklist<'a>,
    pub config: &'d ClassifierConfig,
}

impl<'d, 'a> DeckView<'d, 'a> {
    #[must_use]
    pub fn new(decklist: &'d Decklist<'a>, config: &'d ClassifierConfig) -> Self {
        Self { decklist, config }
    }

    /// Display title of the starting interrupt.
    #[must_use]
    pub fn starting_interrupt_title(&self) -> Option<&'a str> {
        self.decklist.starting_interrupt.map(|c| c.display_title())
    }

    /// Display title of the starting location.
    #[must_use]
    pub fn starting_location_title(&self) -> Option<&'a str> {
        self.decklist.starting_location.map(|c| c.display_title())
    }

    /// The species most of the deck's characters belong to.
    ///
    /// Counts distinct characters whose title, lore or extra text mentions
    /// each configured species. The highest count wins if it reaches the
    /// threshold; ties go to the species listed first.
    #[must_use]
    pub fn dominant_species(&self) -> Option<&'d str> {
        let config = self.config;
        let mut best: Option<(&'d str, usize)> = None;
        for species in &config.species {
            let count = self
                .decklist
                .cards_of_type(CardType::Character)
                .filter(|c| c.front.mentions(species))
                .count();
            if best.map_or(true, |(_, max)| count > max) {
                best = Some((species.as_str(), count));
            }
        }
        best.filter(|&(_, count)| count >= config.species_threshold)
            .map(|(species, _)| species)
    }
}

/// An archetype proposed for one decklist, before registry merging.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateArchetype {
    pub name: String,
    pub short_name: Option<String>,
    pub side: Option<Side>,
    pub aliases: Vec<String>,
    pub matchers: Vec<String>,
    pub decklist_urls: Vec<String>,
}

impl CandidateArchetype {
    /// A candidate with only a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = Some(short_name.into());
        self
    }

    #[must_use]
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    #[must_use]
    pub fn with_matcher(mut self, matcher: impl Into<String>) -> Self {
        self.matchers.push(matcher.into());
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.decklist_urls.push(url.into());
        self
    }
}

/// One step of the naming cascade.
pub type NamingRule = fn(&DeckView<'_, '_>) -> Option<String>;

/// The naming cascade, highest priority first.
pub const NAMING_RULES: &[(&str, NamingRule)] = &[
    ("objective", objective_name),
    ("12-card", twelve_card_name),
    ("system search", system_search_name),
    ("let the wookiee win", let_the_wookiee_win_name),
    ("slip sliding away", slip_sliding_away_name),
    ("according to my design", according_to_my_design_name),
    ("starting location", starting_location_name),
];

fn objective_name(view: &DeckView<'_, '_>) -> Option<String> {
    let objective = view.decklist.objective?.display_title();
    let suffix = objective_suffix(objective, view).unwrap_or_default();
    Some(format!("{objective}{suffix}"))
}

fn twelve_card_name(view: &DeckView<'_, '_>) -> Option<String> {
    let location = view.starting_location_title()?;
    let interrupt = view.starting_interrupt_title()?;
    TWELVE_CARD_INTERRUPTS
        .contains(&interrupt)
        .then(|| format!("{location} 12-Card"))
}

fn system_search_name(view: &DeckView<'_, '_>) -> Option<String> {
    let interrupt = view.starting_interrupt_title()?;
    if !SYSTEM_SEARCH_INTERRUPTS.contains(&interrupt) {
        return None;
    }
    let system = view
        .starting_location_title()
        .and_then(|title| title.split(':').next())
        .map(|system| system.replace(" (V)", ""))
        .unwrap_or_default();
    let suffix = match view.decklist.side {
        Side::Dark => "CR(V)",
        Side::Light => "CP(V)",
    };
    Some(collapse_whitespace(&format!("{system} {suffix}")))
}

fn let_the_wookiee_win_name(view: &DeckView<'_, '_>) -> Option<String> {
    if view.starting_interrupt_title()? != "Let The Wookiee Win (V)" {
        return None;
    }
    Some(if view.decklist.contains("Rendezvous Point") {
        "LTWW(V) Space".to_string()
    } else if view.dominant_species() == Some("Wookiee") {
        "LTWW(V) Wookiees".to_string()
    } else if let Some(location) = view.starting_location_title() {
        format!("{location} LTWW(V)")
    } else {
        "LTWW(V) Mains".to_string()
    })
}

/// `<location> <interrupt>`, with the location's `(V)` dropped.
fn location_prefixed(view: &DeckView<'_, '_>, interrupt: &str) -> Option<String> {
    if view.starting_interrupt_title()? != interrupt {
        return None;
    }
    let prefix = view
        .starting_location_title()
        .map(|location| location.replace("(V)", ""))
        .unwrap_or_default();
    Some(collapse_whitespace(&format!("{prefix} {interrupt}")))
}

fn slip_sliding_away_name(view: &DeckView<'_, '_>) -> Option<String> {
    location_prefixed(view, "Slip Sliding Away (V)")
}

fn according_to_my_design_name(view: &DeckView<'_, '_>) -> Option<String> {
    location_prefixed(view, "According To My Design")
}

fn starting_location_name(view: &DeckView<'_, '_>) -> Option<String> {
    view.starting_location_title().map(str::to_string)
}

/// Names decklists by their cards.
///
/// ## Example
///
/// ```
/// use swccg_decklists::archetypes::ArchetypeNamer;
/// use swccg_decklists::cards::{Card, CardId, Face, FaceKind};
/// use swccg_decklists::core::{ClassifierConfig, Side};
/// use swccg_decklists::decklist::Decklist;
///
/// let objective = Card::new(
///     CardId::new("1_1"),
///     Side::Light,
///     "1",
///     Face::new("Hidden Base / Systems Will Slip Through Your Fingers", FaceKind::Objective),
/// );
/// let mut decklist = Decklist::new("t", "d", "https://example.org/1", Side::Light);
/// decklist.add(&objective, 1);
/// decklist.objective = Some(&objective);
///
/// let candidate = ArchetypeNamer::new(ClassifierConfig::default()).derive(&decklist);
/// assert_eq!(candidate.name, "Hidden Base No-Flip");
/// assert_eq!(candidate.short_name.as_deref(), Some("HB No-Flip"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ArchetypeNamer {
    config: ClassifierConfig,
}

impl ArchetypeNamer {
    #[must_use]
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// The archetype name of a decklist.
    #[must_use]
    pub fn name(&self, decklist: &Decklist<'_>) -> String {
        let view = DeckView::new(decklist, &self.config);
        let name = NAMING_RULES
            .iter()
            .find_map(|(rule, derive)| {
                let name = derive(&view)?;
                tracing::debug!(url = %decklist.url, rule, name = %name, "archetype rule applied");
                Some(name)
            })
            .unwrap_or_else(|| UNKNOWN_ARCHETYPE.to_string());
        apply_trumps(&view, name)
    }

    /// The full candidate archetype for a decklist.
    ///
    /// Aliases and matchers are the name and short name, plus every alias
    /// of the objective and the front-face form of each.
    #[must_use]
    pub fn derive(&self, decklist: &Decklist<'_>) -> CandidateArchetype {
        let name = self.name(decklist);
        let short = short_name(&name);

        let mut aliases = vec![name.clone(), short.clone()];
        if let Some(objective) = decklist.objective {
            aliases.extend(objective.aliases.iter().cloned());
            aliases.extend(objective.aliases.iter().map(|alias| front_face_alias(alias)));
        }
        let mut seen = rustc_hash::FxHashSet::default();
        aliases.retain(|alias| !alias.is_empty() && seen.insert(alias.clone()));

        CandidateArchetype {
            name,
            short_name: Some(short),
            side: Some(decklist.side),
            matchers: aliases.clone(),
            aliases,
            decklist_urls: Vec::new(),
        }
    }
}

/// The front-face part of an alias, keeping a `(V)` marker from the back.
fn front_face_alias(alias: &str) -> String {
    let front = alias.split('/').next().unwrap_or(alias).trim();
    if alias.contains("(V)") && !front.ends_with("(V)") {
        format!("{front} (V)")
    } else {
        front.to_string()
    }
}
