//! Archetype registry.
//!
//! The registry owns every archetype seen so far and is the only place they
//! are created or changed. Lookups compare alphanumeric-only, lowercased
//! strings against each archetype's name, short name, aliases and
//! matchers; the first archetype in registry order that matches wins.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::namer::CandidateArchetype;
use crate::core::Side;
use crate::decklist::ArchetypeRef;
use crate::text::comparable_string;

/// A named deck strategy shared by many decklists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Archetype {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(default)]
    pub side: Option<Side>,
    #[serde(default)]
    pub aliases: IndexSet<String>,
    #[serde(default)]
    pub matchers: IndexSet<String>,
    #[serde(default)]
    pub decklist_urls: IndexSet<String>,
}

impl Archetype {
    fn from_candidate(candidate: CandidateArchetype) -> Self {
        let mut archetype = Self {
            name: candidate.name,
            short_name: None,
            side: None,
            aliases: IndexSet::new(),
            matchers: IndexSet::new(),
            decklist_urls: IndexSet::new(),
        };
        archetype.merge(CandidateArchetype {
            name: String::new(),
            ..candidate
        });
        archetype
    }

    /// Every string the archetype is known by.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str())
            .chain(self.short_name.as_deref())
            .chain(self.aliases.iter().map(String::as_str))
            .chain(self.matchers.iter().map(String::as_str))
    }

    /// Whether a comparable string names this archetype.
    #[must_use]
    pub fn is_named(&self, comparable: &str) -> bool {
        self.labels().any(|label| comparable_string(label) == comparable)
    }

    /// Name and short name, for decklist records.
    #[must_use]
    pub fn to_ref(&self) -> ArchetypeRef {
        ArchetypeRef {
            name: self.name.clone(),
            short_name: self.short_name.clone(),
        }
    }

    fn merge(&mut self, candidate: CandidateArchetype) {
        if let Some(side) = candidate.side {
            self.side = Some(side);
        }
        if self.short_name.is_none() {
            self.short_name = candidate.short_name.filter(|s| !s.is_empty());
        }
        let non_empty = |values: Vec<String>| values.into_iter().filter(|v| !v.is_empty());
        self.aliases.extend(non_empty(candidate.aliases));
        self.matchers.extend(non_empty(candidate.matchers));
        self.decklist_urls.extend(non_empty(candidate.decklist_urls));
    }
}

/// A fixed correction applied after classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArchetypeOverride {
    /// Exact archetype name.
    pub name: &'static str,
    pub side: Side,
}

/// Archetypes whose side the classification passes get wrong.
pub const MANUAL_OVERRIDES: &[ArchetypeOverride] = &[ArchetypeOverride {
    name: "Death Star II: Throne Room According To My Design",
    side: Side::Dark,
}];

/// Ordered collection of archetypes.
///
/// ## Example
///
/// ```
/// use swccg_decklists::archetypes::{ArchetypeRegistry, CandidateArchetype};
/// use swccg_decklists::core::Side;
///
/// let mut registry = ArchetypeRegistry::new();
/// registry.create_or_update(
///     CandidateArchetype::new("Hidden Base")
///         .with_short_name("HB")
///         .with_side(Side::Light),
/// );
/// registry.create_or_update(CandidateArchetype::new("hidden base!").with_url("https://example.org/1"));
///
/// assert_eq!(registry.len(), 1);
/// let archetype = registry.find("HB").unwrap();
/// assert_eq!(archetype.name, "Hidden Base");
/// assert!(archetype.decklist_urls.contains("https://example.org/1"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArchetypeRegistry {
    archetypes: Vec<Archetype>,
}

impl ArchetypeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding existing archetypes, in order.
    #[must_use]
    pub fn from_archetypes(archetypes: Vec<Archetype>) -> Self {
        Self { archetypes }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Archetype> {
        self.archetypes.iter()
    }

    #[must_use]
    pub fn archetypes(&self) -> &[Archetype] {
        &self.archetypes
    }

    fn position(&self, name_or_alias: &str) -> Option<usize> {
        let comparable = comparable_string(name_or_alias);
        if comparable.is_empty() {
            return None;
        }
        self.archetypes.iter().position(|a| a.is_named(&comparable))
    }

    /// The first archetype known by `name_or_alias`.
    #[must_use]
    pub fn find(&self, name_or_alias: &str) -> Option<&Archetype> {
        self.position(name_or_alias).map(|i| &self.archetypes[i])
    }

    /// The archetype with exactly this name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Archetype> {
        self.archetypes.iter().find(|a| a.name == name)
    }

    /// The archetype a decklist URL was assigned to.
    #[must_use]
    pub fn find_by_url(&self, url: &str) -> Option<&Archetype> {
        self.archetypes.iter().find(|a| a.decklist_urls.contains(url))
    }

    /// Merge a candidate into the archetype its name matches, or add it.
    pub fn create_or_update(&mut self, candidate: CandidateArchetype) -> &Archetype {
        let index = match self.position(&candidate.name) {
            Some(index) => {
                tracing::debug!(candidate = %candidate.name, archetype = %self.archetypes[index].name, "archetype updated");
                self.archetypes[index].merge(candidate);
                index
            }
            None => {
                tracing::debug!(archetype = %candidate.name, "archetype created");
                self.archetypes.push(Archetype::from_candidate(candidate));
                self.archetypes.len() - 1
            }
        };
        &self.archetypes[index]
    }

    /// Assign a decklist to an archetype using its title.
    ///
    /// `raw` is the archetype hint from the decklist title and `derived`
    /// the card-based name. An archetype known by `raw`, else by
    /// `derived`, keeps its name; otherwise `derived` names a new one. The
    /// raw hint is recorded as a matcher and the URL is attached.
    pub fn assign_from_title(
        &mut self,
        raw: Option<&str>,
        derived: &str,
        side: Option<Side>,
        url: &str,
    ) -> &Archetype {
        let found = raw
            .and_then(|raw| self.position(raw))
            .or_else(|| self.position(derived));
        let name = match found {
            Some(index) => self.archetypes[index].name.clone(),
            None if derived.is_empty() => raw.unwrap_or_default().to_string(),
            None => derived.to_string(),
        };

        let mut candidate = CandidateArchetype::new(name).with_url(url);
        candidate.side = side;
        if let Some(raw) = raw {
            candidate = candidate.with_matcher(raw);
        }
        self.create_or_update(candidate)
    }

    /// Apply fixed corrections by exact name. Returns how many applied.
    pub fn apply_overrides(&mut self, overrides: &[ArchetypeOverride]) -> usize {
        let mut applied = 0;
        for fix in overrides {
            if let Some(archetype) = self.archetypes.iter_mut().find(|a| a.name == fix.name) {
                archetype.side = Some(fix.side);
                applied += 1;
            }
        }
        applied
    }
}
