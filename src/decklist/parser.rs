//! Plaintext decklist parser.
//!
//! Input layout: a title line, a date line, a URL line, then card lines
//! grouped under optional section headers such as `CHARACTERS` or
//! `STARTING`. Card lines carry a quantity (`2x Name`, `2 Name`, `x2 Name`
//! or `Name x2`); a line without one counts as a single copy only in the
//! objective and starting sections.

use std::sync::LazyLock;

use regex::Regex;

use super::meta::{confirmed_side, majority_side, marked_side};
use super::model::{Decklist, DecklistLine};
use super::starting::{starting_interrupt, starting_location};
use crate::cards::{CardResolver, CardType, Catalog, STARTING_SECTION};
use crate::core::Side;

/// Section whose unquantified lines are single cards.
const OBJECTIVES_SECTION: &str = "OBJECTIVES";

static LEADING_QUANTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})(?:\s*[xX]\s+|[xX]|\s+)(\S.*)$").unwrap());
static PREFIXED_QUANTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[xX](\d{1,2})\s+(\S.*)$").unwrap());
static TRAILING_QUANTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s+[xX](\d{1,2})$").unwrap());
static HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z' ]+?)\s*(?:\(\d+\))?\s*:?$").unwrap());

/// Split a card line into quantity and name.
///
/// Returns `None` when the line has no quantity or the quantity is 0.
#[must_use]
pub fn split_quantity(line: &str) -> Option<(u32, &str)> {
    let line = line.trim();
    let (quantity, name) = if let Some(caps) = LEADING_QUANTITY.captures(line) {
        (caps.get(1)?, caps.get(2)?)
    } else if let Some(caps) = PREFIXED_QUANTITY.captures(line) {
        (caps.get(1)?, caps.get(2)?)
    } else {
        let caps = TRAILING_QUANTITY.captures(line)?;
        (caps.get(2)?, caps.get(1)?)
    };
    let quantity: u32 = quantity.as_str().parse().ok()?;
    (quantity > 0).then(|| (quantity, name.as_str().trim()))
}

/// Parses plaintext decklists against a catalog.
#[derive(Clone, Copy, Debug)]
pub struct DecklistParser<'a> {
    resolver: CardResolver<'a>,
}

impl<'a> DecklistParser<'a> {
    /// Create a parser over a catalog.
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            resolver: CardResolver::new(catalog),
        }
    }

    /// The resolver used for card lines.
    #[must_use]
    pub fn resolver(&self) -> CardResolver<'a> {
        self.resolver
    }

    /// The canonical section header a line names, if it is one.
    ///
    /// Matching ignores case, a trailing colon, a `(N)` count, and a
    /// missing plural `S`.
    #[must_use]
    pub fn section_header(&self, line: &str) -> Option<String> {
        let caps = HEADER.captures(line.trim())?;
        let name = caps[1].trim().to_uppercase();
        let catalog = self.resolver.catalog();
        [name.clone(), format!("{name}S")]
            .into_iter()
            .find(|candidate| catalog.is_section_header(candidate))
    }

    /// Parse with the side inferred from the title and plaintext.
    ///
    /// Without a side marker, lines resolve against both sides and the side
    /// is decided afterwards by the marker cards, else by the resolved cards.
    #[must_use]
    pub fn parse_inferred(&self, plaintext: &str) -> Decklist<'a> {
        let title = plaintext.lines().next().unwrap_or_default();
        match marked_side(title, plaintext) {
            Some(side) => self.parse(plaintext, side),
            None => self.parse_with(plaintext, Side::Light, None),
        }
    }

    /// Parse a decklist, resolving cards against `side`.
    #[must_use]
    pub fn parse(&self, plaintext: &str, side: Side) -> Decklist<'a> {
        self.parse_with(plaintext, side, Some(side))
    }

    fn parse_with(&self, plaintext: &str, side: Side, resolve_side: Option<Side>) -> Decklist<'a> {
        let mut lines = plaintext.lines();
        let title = lines.next().unwrap_or_default().trim();
        let date = lines.next().unwrap_or_default().trim();
        let url = lines.next().unwrap_or_default().trim();
        let mut decklist = Decklist::new(title, date, url, side);

        let mut section: Option<String> = None;
        let mut in_starting = false;

        for raw in lines {
            let line = raw.trim();
            if line.is_empty() {
                in_starting = false;
                continue;
            }
            if let Some(header) = self.section_header(line) {
                in_starting = header == STARTING_SECTION;
                decklist.has_starting_section |= in_starting;
                section = Some(header);
                continue;
            }

            let implied_single = in_starting || section.as_deref() == Some(OBJECTIVES_SECTION);
            self.parse_line(&mut decklist, line, resolve_side, implied_single, in_starting);
        }

        let objective = decklist.cards_of_type(CardType::Objective).next();
        decklist.objective = objective;
        decklist.starting_interrupt = starting_interrupt(&decklist);
        decklist.starting_location = starting_location(&decklist);

        if let Some(confirmed) = confirmed_side(&decklist) {
            decklist.side = confirmed;
            decklist.side_confirmed = true;
        } else if resolve_side.is_none() {
            decklist.side = majority_side(&decklist).unwrap_or(side);
        }

        tracing::debug!(
            url = %decklist.url,
            cards = decklist.count(),
            unresolved = decklist.unresolved_lines().count(),
            "decklist parsed"
        );
        decklist
    }

    fn parse_line(
        &self,
        decklist: &mut Decklist<'a>,
        line: &str,
        resolve_side: Option<Side>,
        implied_single: bool,
        in_starting: bool,
    ) {
        let (quantity, name) = match split_quantity(line) {
            Some(split) => split,
            None => {
                // Objectives are often listed without a count.
                let card = self.resolver.resolve(line, resolve_side);
                if implied_single || card.is_some_and(|c| c.is_type(CardType::Objective)) {
                    (1, line)
                } else {
                    tracing::warn!(raw = line, url = %decklist.url, "card line without quantity");
                    decklist.lines.push(DecklistLine {
                        raw: line.to_string(),
                        quantity: 0,
                        name: line.to_string(),
                        card: None,
                    });
                    return;
                }
            }
        };

        let card = self.resolver.resolve(name, resolve_side);
        decklist.lines.push(DecklistLine {
            raw: line.to_string(),
            quantity,
            name: name.to_string(),
            card: card.map(|c| c.id.clone()),
        });

        match card {
            Some(card) => {
                decklist.add(card, quantity);
                if in_starting {
                    decklist.add_starting(card);
                }
            }
            None => {
                tracing::warn!(raw = line, url = %decklist.url, side = %decklist.side, "could not resolve card");
            }
        }
    }
}
