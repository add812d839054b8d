//! Batch classification.
//!
//! Runs every decklist through parsing and naming, then builds the
//! archetype registry in input order:
//!
//! 1. Seed pass: create or update an archetype from each card-based name.
//! 2. Title pass: attach each decklist URL to the archetype its title hint
//!    (or card-based name) matches.
//! 3. Manual overrides.
//! 4. One `DecklistRecord` per decklist, with its assigned archetype.

use serde::{Deserialize, Serialize};

use crate::archetypes::{
    raw_archetype_name, Archetype, ArchetypeNamer, ArchetypeRegistry, MANUAL_OVERRIDES,
};
use crate::cards::Catalog;
use crate::core::ClassifierConfig;
use crate::decklist::{Decklist, DecklistParser, DecklistRecord};

/// Totals for one pipeline run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineReport {
    pub decklists: usize,
    /// Decklists whose card count equals the legal deck size.
    pub complete: usize,
    /// Decklists whose side was inferred but never confirmed.
    pub without_side: usize,
    pub archetypes: usize,
    pub unresolved_lines: usize,
    /// Decklist URLs attached to an archetype.
    pub assigned_urls: usize,
}

/// Records, archetypes and totals of a run.
#[derive(Clone, Debug)]
pub struct PipelineOutput {
    pub records: Vec<DecklistRecord>,
    pub archetypes: ArchetypeRegistry,
    pub report: PipelineReport,
}

/// Classifies a batch of plaintext decklists against one catalog.
///
/// ## Example
///
/// ```
/// use swccg_decklists::cards::{Card, CardId, Catalog, Face, FaceKind};
/// use swccg_decklists::core::{ClassifierConfig, Side};
/// use swccg_decklists::pipeline::Pipeline;
///
/// let catalog = Catalog::new(vec![Card::new(
///     CardId::new("1_1"),
///     Side::Light,
///     "1",
///     Face::new("Hidden Base / Systems Will Slip Through Your Fingers", FaceKind::Objective),
/// )])
/// .unwrap();
///
/// let text = "2022 Worlds Day 1 Jane LS HB\n2022-08-01\nhttps://example.org/1\n\n1x Hidden Base\n";
/// let output = Pipeline::new(&catalog, ClassifierConfig::default()).run([text]);
///
/// assert_eq!(output.records.len(), 1);
/// let archetype = output.records[0].archetype.as_ref().unwrap();
/// assert_eq!(archetype.name, "Hidden Base No-Flip");
/// assert_eq!(archetype.short_name.as_deref(), Some("HB No-Flip"));
/// ```
#[derive(Clone, Debug)]
pub struct Pipeline<'a> {
    parser: DecklistParser<'a>,
    namer: ArchetypeNamer,
}

impl<'a> Pipeline<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog, config: ClassifierConfig) -> Self {
        Self {
            parser: DecklistParser::new(catalog),
            namer: ArchetypeNamer::new(config),
        }
    }

    #[must_use]
    pub fn parser(&self) -> &DecklistParser<'a> {
        &self.parser
    }

    #[must_use]
    pub fn namer(&self) -> &ArchetypeNamer {
        &self.namer
    }

    /// Parse every decklist, inferring each one's side.
    pub fn parse_all<I, S>(&self, plaintexts: I) -> Vec<Decklist<'a>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        plaintexts
            .into_iter()
            .map(|text| self.parser.parse_inferred(text.as_ref()))
            .collect()
    }

    /// Build archetypes for parsed decklists on top of `registry`.
    #[must_use]
    pub fn classify(&self, decklists: &[Decklist<'a>], mut registry: ArchetypeRegistry) -> ArchetypeRegistry {
        let mut names = Vec::with_capacity(decklists.len());
        for decklist in decklists {
            let candidate = self.namer.derive(decklist);
            names.push(candidate.name.clone());
            registry.create_or_update(candidate);
        }

        for (decklist, derived) in decklists.iter().zip(&names) {
            let raw = raw_archetype_name(&decklist.title);
            registry.assign_from_title(raw.as_deref(), derived, Some(decklist.side), &decklist.url);
        }

        let applied = registry.apply_overrides(MANUAL_OVERRIDES);
        tracing::debug!(applied, "manual overrides applied");
        registry
    }

    /// Records for parsed decklists, with archetypes looked up by URL.
    #[must_use]
    pub fn records(&self, decklists: &[Decklist<'a>], registry: &ArchetypeRegistry) -> Vec<DecklistRecord> {
        decklists
            .iter()
            .map(|decklist| {
                let archetype = registry.find_by_url(&decklist.url).map(Archetype::to_ref);
                DecklistRecord::new(decklist, archetype)
            })
            .collect()
    }

    /// Run the whole batch with an empty registry.
    pub fn run<I, S>(&self, plaintexts: I) -> PipelineOutput
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let decklists = self.parse_all(plaintexts);
        let archetypes = self.classify(&decklists, ArchetypeRegistry::new());
        let records = self.records(&decklists, &archetypes);
        let report = self.report(&decklists, &archetypes);

        tracing::info!(
            decklists = report.decklists,
            complete = report.complete,
            without_side = report.without_side,
            archetypes = report.archetypes,
            unresolved_lines = report.unresolved_lines,
            assigned_urls = report.assigned_urls,
            "classification finished"
        );

        PipelineOutput {
            records,
            archetypes,
            report,
        }
    }

    fn report(&self, decklists: &[Decklist<'a>], registry: &ArchetypeRegistry) -> PipelineReport {
        let legal_size = self.namer.config().legal_deck_size;
        PipelineReport {
            decklists: decklists.len(),
            complete: decklists.iter().filter(|d| d.is_complete(legal_size)).count(),
            without_side: decklists.iter().filter(|d| !d.side_confirmed).count(),
            archetypes: registry.len(),
            unresolved_lines: decklists.iter().map(|d| d.unresolved_lines().count()).sum(),
            assigned_urls: registry.iter().map(|a| a.decklist_urls.len()).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardId, Face, FaceKind, LocationIcons};
    use crate::core::Side;

    fn catalog() -> Catalog {
        let light = |id: &str, face: Face| Card::new(CardId::new(id), Side::Light, "1", face);
        let dark = |id: &str, face: Face| Card::new(CardId::new(id), Side::Dark, "1", face);
        Catalog::new(vec![
            light("1", Face::new("Hidden Base / Systems Will Slip Through Your Fingers", FaceKind::Objective))
                .with_alias("HB"),
            light("2", Face::new("•Home One: War Room", FaceKind::Location(LocationIcons::new(2, 0)))),
            dark("3", Face::new("Death Star II: Throne Room", FaceKind::Location(LocationIcons::new(1, 2)))),
            dark(
                "4",
                Face::new("According To My Design", FaceKind::Interrupt).with_sub_type("Used Or Starting"),
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_run_assigns_every_decklist() {
        let catalog = catalog();
        let texts = [
            "2022 Worlds Day 1 Jane LS HB\n2022-08-01\nhttps://example.org/1\n\n1x Hidden Base\n2x Home One: War Room\n",
            "2022 Worlds Day 1 Jo LS Hidden Base\n2022-08-01\nhttps://example.org/2\n\n1x Hidden Base\n",
            "2022 Worlds Day 1 Jo DS ATMD\n2022-08-01\nhttps://example.org/3\n\nSTARTING\nDeath Star II: Throne Room\nAccording To My Design\n",
        ];
        let output = Pipeline::new(&catalog, ClassifierConfig::default()).run(texts);

        assert_eq!(output.records.len(), 3);
        assert_eq!(output.archetypes.len(), 2);
        assert_eq!(output.report.assigned_urls, 3);
        assert_eq!(output.report.complete, 0);

        let hb = output.archetypes.find("HB").unwrap();
        assert_eq!(hb.name, "Hidden Base No-Flip");
        assert_eq!(hb.decklist_urls.len(), 2);
        assert!(hb.matchers.contains("Hidden Base"));

        let atmd = output.records[2].archetype.as_ref().unwrap();
        assert_eq!(atmd.name, "Death Star II: Throne Room According To My Design");
        assert_eq!(atmd.short_name.as_deref(), Some("DSII Throne Room ATMD"));
        assert_eq!(
            output.archetypes.get(&atmd.name).unwrap().side,
            Some(Side::Dark)
        );
    }

    #[test]
    fn test_empty_batch() {
        let catalog = catalog();
        let output = Pipeline::new(&catalog, ClassifierConfig::default()).run(Vec::<String>::new());
        assert!(output.records.is_empty());
        assert!(output.archetypes.is_empty());
        assert_eq!(output.report, PipelineReport::default());
    }
}
