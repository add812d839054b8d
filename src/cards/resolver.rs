//! Card name resolution.
//!
//! Turns a raw card name from a decklist line into at most one catalog
//! card. Resolution is exact: the name is normalized, printing qualifiers
//! are split off, and the remaining comparison key must equal a card's key.

use std::sync::LazyLock;

use regex::Regex;

use super::catalog::Catalog;
use super::definition::Card;
use crate::core::Side;
use crate::text::{comparison_key, display_title, RENAMED_CARDS};

const EPISODE_ONE: &str = "(Episode I)";

static SET_QUALIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\((Cloud City|Special Edition)\)").unwrap());

static RENAMED_KEYS: LazyLock<Vec<(String, &'static str)>> = LazyLock::new(|| {
    RENAMED_CARDS
        .iter()
        .map(|(from, to)| (comparison_key(from), *to))
        .collect()
});

/// Catalog set named by a printing qualifier.
fn set_for_qualifier(qualifier: &str) -> Option<&'static str> {
    match qualifier {
        "Cloud City" => Some("5"),
        "Special Edition" => Some("7"),
        _ => None,
    }
}

/// Current title of a card that was renamed or blanked, if `title` names one.
#[must_use]
pub fn renamed_title(title: &str) -> Option<&'static str> {
    let key = comparison_key(title);
    RENAMED_KEYS
        .iter()
        .find(|(from, _)| *from == key)
        .map(|(_, to)| *to)
}

/// A card name split into its comparison key and printing qualifiers.
///
/// ## Example
///
/// ```
/// use swccg_decklists::cards::CardQuery;
///
/// let query = CardQuery::parse("Boba Fett (SE)");
/// assert_eq!(query.key, "boba fett");
/// assert_eq!(query.set, Some("7"));
/// assert!(!query.episode_one);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardQuery {
    /// Comparison key of the name with qualifiers removed.
    pub key: String,
    /// The name asked for the Episode I printing.
    pub episode_one: bool,
    /// Catalog set the name asked for.
    pub set: Option<&'static str>,
}

impl CardQuery {
    /// Parse a raw card name.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut title = display_title(raw);
        if let Some(current) = renamed_title(&title) {
            title = display_title(current);
        }

        let episode_one = title.contains(EPISODE_ONE);
        if episode_one {
            title = title.replace(EPISODE_ONE, " ");
        }

        let mut set = None;
        if let Some(caps) = SET_QUALIFIER.captures(&title) {
            set = set_for_qualifier(&caps[1]);
            title = SET_QUALIFIER.replace(&title, "").into_owned();
        }

        Self {
            key: comparison_key(&title),
            episode_one,
            set,
        }
    }

    /// Pick the card this query names from `candidates`.
    ///
    /// An Episode I query only matches cards with the Episode I icon. A plain
    /// query prefers a card without it and falls back to one with it.
    pub fn select<'c, I>(&self, candidates: I) -> Option<&'c Card>
    where
        I: IntoIterator<Item = &'c Card>,
    {
        let mut matching = candidates
            .into_iter()
            .filter(|card| card.comparison_key() == self.key)
            .filter(|card| self.set.map_or(true, |set| card.set == set))
            .peekable();

        if self.episode_one {
            return matching.find(|card| card.is_episode_one());
        }

        let first = *matching.peek()?;
        matching.find(|card| !card.is_episode_one()).or(Some(first))
    }
}

/// Resolves card names against a catalog.
///
/// ## Example
///
/// ```
/// use swccg_decklists::cards::{Card, CardId, CardResolver, Catalog, Face, FaceKind};
/// use swccg_decklists::core::Side;
///
/// let catalog = Catalog::new(vec![Card::new(
///     CardId::new("1_1"),
///     Side::Light,
///     "1",
///     Face::new("•Artoo-Detoo", FaceKind::from_label("Character")),
/// )])
/// .unwrap();
/// let resolver = CardResolver::new(&catalog);
///
/// let card = resolver.resolve("Artoo-Deetoo", None).unwrap();
/// assert_eq!(card.id, CardId::new("1_1"));
/// assert!(resolver.resolve("Artoo-Deetoo", Some(Side::Dark)).is_none());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct CardResolver<'a> {
    catalog: &'a Catalog,
}

impl<'a> CardResolver<'a> {
    /// Create a resolver over a catalog.
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// The catalog being resolved against.
    #[must_use]
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Resolve a raw name, optionally restricted to one side.
    #[must_use]
    pub fn resolve(&self, raw: &str, side: Option<Side>) -> Option<&'a Card> {
        self.resolve_query(&CardQuery::parse(raw), side)
    }

    /// Resolve an already-parsed query.
    #[must_use]
    pub fn resolve_query(&self, query: &CardQuery, side: Option<Side>) -> Option<&'a Card> {
        query.select(
            self.catalog
                .with_key(&query.key)
                .filter(|card| side.map_or(true, |side| card.side == side)),
        )
    }
}
