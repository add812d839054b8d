//! Card definitions - static catalog data.
//!
//! A `Card` has a mandatory front `Face` and an optional back face. Each
//! face carries a `FaceKind`, a closed set of card-type variants where
//! type-specific data (unit stats, location Force icons) only exists on the
//! variants it applies to.
//!
//! Cards deserialize from the catalog JSON format (`gempId`, `front`,
//! `abbr`, camelCase face fields).

use std::sync::OnceLock;

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::Side;
use crate::text::{comparison_key, display_title};

/// Unique catalog identifier for a card (e.g. `"7_300"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Card type without type-specific data, for cheap comparisons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardType {
    Objective,
    Interrupt,
    Effect,
    Weapon,
    Device,
    AdmiralsOrder,
    DefensiveShield,
    EpicEvent,
    Podracer,
    Character,
    Starship,
    Vehicle,
    Creature,
    Location,
    JediTest,
    Other,
}

/// Power, ability, deploy and forfeit of a unit card.
///
/// Values are optional because some printings use `*` or `X`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UnitStats {
    pub power: Option<f64>,
    pub ability: Option<f64>,
    pub deploy: Option<f64>,
    pub forfeit: Option<f64>,
}

/// Force icons on each side of a location, and its parsec for systems.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocationIcons {
    pub light: u32,
    pub dark: u32,
    pub parsec: Option<u32>,
}

impl LocationIcons {
    /// Create icons with the given Force icon counts.
    #[must_use]
    pub const fn new(light: u32, dark: u32) -> Self {
        Self {
            light,
            dark,
            parsec: None,
        }
    }

    /// Whether both sides have at least one Force icon.
    #[must_use]
    pub const fn is_dual(&self) -> bool {
        self.light > 0 && self.dark > 0
    }
}

/// The type of a face together with its type-specific data.
#[derive(Clone, Debug, PartialEq)]
pub enum FaceKind {
    Objective,
    Interrupt,
    Effect,
    Weapon,
    Device,
    AdmiralsOrder,
    DefensiveShield,
    EpicEvent,
    Podracer,
    Character(UnitStats),
    Starship(UnitStats),
    Vehicle(UnitStats),
    Creature(UnitStats),
    Location(LocationIcons),
    /// Jedi Test, keeping the numbered label (e.g. "Jedi Test #1").
    JediTest(String),
    /// Any type this crate has no special handling for.
    Other(String),
}

impl FaceKind {
    /// The data-free card type.
    #[must_use]
    pub fn card_type(&self) -> CardType {
        match self {
            FaceKind::Objective => CardType::Objective,
            FaceKind::Interrupt => CardType::Interrupt,
            FaceKind::Effect => CardType::Effect,
            FaceKind::Weapon => CardType::Weapon,
            FaceKind::Device => CardType::Device,
            FaceKind::AdmiralsOrder => CardType::AdmiralsOrder,
            FaceKind::DefensiveShield => CardType::DefensiveShield,
            FaceKind::EpicEvent => CardType::EpicEvent,
            FaceKind::Podracer => CardType::Podracer,
            FaceKind::Character(_) => CardType::Character,
            FaceKind::Starship(_) => CardType::Starship,
            FaceKind::Vehicle(_) => CardType::Vehicle,
            FaceKind::Creature(_) => CardType::Creature,
            FaceKind::Location(_) => CardType::Location,
            FaceKind::JediTest(_) => CardType::JediTest,
            FaceKind::Other(_) => CardType::Other,
        }
    }

    /// The type label as it appears in the catalog.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            FaceKind::Objective => "Objective",
            FaceKind::Interrupt => "Interrupt",
            FaceKind::Effect => "Effect",
            FaceKind::Weapon => "Weapon",
            FaceKind::Device => "Device",
            FaceKind::AdmiralsOrder => "Admiral's Order",
            FaceKind::DefensiveShield => "Defensive Shield",
            FaceKind::EpicEvent => "Epic Event",
            FaceKind::Podracer => "Podracer",
            FaceKind::Character(_) => "Character",
            FaceKind::Starship(_) => "Starship",
            FaceKind::Vehicle(_) => "Vehicle",
            FaceKind::Creature(_) => "Creature",
            FaceKind::Location(_) => "Location",
            FaceKind::JediTest(label) | FaceKind::Other(label) => label,
        }
    }

    /// Build a kind from a catalog type label.
    ///
    /// Unit stats and location icons start empty; the caller fills them.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "Objective" => FaceKind::Objective,
            "Interrupt" => FaceKind::Interrupt,
            "Effect" => FaceKind::Effect,
            "Weapon" => FaceKind::Weapon,
            "Device" => FaceKind::Device,
            "Admiral's Order" => FaceKind::AdmiralsOrder,
            "Defensive Shield" => FaceKind::DefensiveShield,
            "Epic Event" => FaceKind::EpicEvent,
            "Podracer" => FaceKind::Podracer,
            "Character" => FaceKind::Character(UnitStats::default()),
            "Starship" => FaceKind::Starship(UnitStats::default()),
            "Vehicle" => FaceKind::Vehicle(UnitStats::default()),
            "Creature" => FaceKind::Creature(UnitStats::default()),
            "Location" => FaceKind::Location(LocationIcons::default()),
            jedi_test if jedi_test.starts_with("Jedi Test") => {
                FaceKind::JediTest(jedi_test.to_string())
            }
            other => FaceKind::Other(other.to_string()),
        }
    }

    /// Unit stats, for characters, starships, vehicles and creatures.
    #[must_use]
    pub fn unit_stats(&self) -> Option<&UnitStats> {
        match self {
            FaceKind::Character(stats)
            | FaceKind::Starship(stats)
            | FaceKind::Vehicle(stats)
            | FaceKind::Creature(stats) => Some(stats),
            _ => None,
        }
    }

    fn unit_stats_mut(&mut self) -> Option<&mut UnitStats> {
        match self {
            FaceKind::Character(stats)
            | FaceKind::Starship(stats)
            | FaceKind::Vehicle(stats)
            | FaceKind::Creature(stats) => Some(stats),
            _ => None,
        }
    }

    /// Force icons, for locations.
    #[must_use]
    pub fn location_icons(&self) -> Option<&LocationIcons> {
        match self {
            FaceKind::Location(icons) => Some(icons),
            _ => None,
        }
    }
}

/// One side of a printed card.
///
/// ## Example
///
/// ```
/// use swccg_decklists::cards::{Face, FaceKind, LocationIcons};
///
/// let system = Face::new("Kashyyyk", FaceKind::Location(LocationIcons::new(2, 1)))
///     .with_sub_type("System");
///
/// assert_eq!(system.type_label(), "Location");
/// assert!(system.location_icons().unwrap().is_dual());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawFace", into = "RawFace")]
pub struct Face {
    /// Title as printed, possibly with uniqueness dots and a back face.
    pub title: String,
    pub kind: FaceKind,
    pub sub_type: Option<String>,
    /// Uniqueness marker (`*`, `**`, `<>`, ...), absent for non-unique cards.
    pub uniqueness: Option<String>,
    pub destiny: Option<f64>,
    pub icons: Vec<String>,
    pub lore: Option<String>,
    pub extra_text: Vec<String>,
}

impl Face {
    /// Create a face with the given title and kind.
    #[must_use]
    pub fn new(title: impl Into<String>, kind: FaceKind) -> Self {
        Self {
            title: title.into(),
            kind,
            sub_type: None,
            uniqueness: None,
            destiny: None,
            icons: Vec::new(),
            lore: None,
            extra_text: Vec::new(),
        }
    }

    /// Set the sub-type (builder pattern).
    #[must_use]
    pub fn with_sub_type(mut self, sub_type: impl Into<String>) -> Self {
        self.sub_type = Some(sub_type.into());
        self
    }

    /// Set the uniqueness marker (builder pattern).
    #[must_use]
    pub fn with_uniqueness(mut self, uniqueness: impl Into<String>) -> Self {
        self.uniqueness = Some(uniqueness.into());
        self
    }

    /// Add an icon (builder pattern).
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icons.push(icon.into());
        self
    }

    /// Set the lore (builder pattern).
    #[must_use]
    pub fn with_lore(mut self, lore: impl Into<String>) -> Self {
        self.lore = Some(lore.into());
        self
    }

    /// Add an extra-text line (builder pattern).
    #[must_use]
    pub fn with_extra_text(mut self, text: impl Into<String>) -> Self {
        self.extra_text.push(text.into());
        self
    }

    /// The data-free card type.
    #[must_use]
    pub fn card_type(&self) -> CardType {
        self.kind.card_type()
    }

    /// The catalog type label.
    #[must_use]
    pub fn type_label(&self) -> &str {
        self.kind.label()
    }

    /// Force icons, for locations.
    #[must_use]
    pub fn location_icons(&self) -> Option<&LocationIcons> {
        self.kind.location_icons()
    }

    /// Whether the face has the given icon.
    #[must_use]
    pub fn has_icon(&self, icon: &str) -> bool {
        self.icons.iter().any(|i| i == icon)
    }

    /// Whether the sub-type is exactly `sub_type`.
    #[must_use]
    pub fn is_sub_type(&self, sub_type: &str) -> bool {
        self.sub_type.as_deref() == Some(sub_type)
    }

    /// Whether the title, lore or extra text contains `needle`.
    #[must_use]
    pub fn mentions(&self, needle: &str) -> bool {
        self.title.contains(needle)
            || self.lore.as_deref().is_some_and(|lore| lore.contains(needle))
            || self.extra_text.join(" ").contains(needle)
    }
}

/// A card from the catalog.
///
/// ## Example
///
/// ```
/// use swccg_decklists::cards::{Card, CardId, CardType, Face, FaceKind};
/// use swccg_decklists::core::Side;
///
/// let card = Card::new(
///     CardId::new("1_1"),
///     Side::Light,
///     "1",
///     Face::new("•Artoo-Detoo", FaceKind::from_label("Character")),
/// );
///
/// assert!(card.is_type(CardType::Character));
/// assert_eq!(card.display_title(), "Artoo-Detoo");
/// assert_eq!(card.comparison_key(), "artoo-detoo");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "gempId")]
    pub id: CardId,
    pub side: Side,
    #[serde(deserialize_with = "string_or_number")]
    pub set: String,
    pub front: Face,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back: Option<Face>,
    /// Nicknames and abbreviations.
    #[serde(rename = "abbr", default, deserialize_with = "one_or_many")]
    pub aliases: Vec<String>,
    #[serde(skip)]
    display: OnceLock<String>,
    #[serde(skip)]
    key: OnceLock<String>,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub fn new(id: CardId, side: Side, set: impl Into<String>, front: Face) -> Self {
        Self {
            id,
            side,
            set: set.into(),
            front,
            back: None,
            aliases: Vec::new(),
            display: OnceLock::new(),
            key: OnceLock::new(),
        }
    }

    /// Set the back face (builder pattern).
    #[must_use]
    pub fn with_back(mut self, back: Face) -> Self {
        self.back = Some(back);
        self
    }

    /// Add an alias (builder pattern).
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// A copy of this card under a different ID and front title.
    #[must_use]
    pub fn retitled(&self, id: CardId, title: impl Into<String>) -> Self {
        let mut front = self.front.clone();
        front.title = title.into();
        Self {
            id,
            side: self.side,
            set: self.set.clone(),
            front,
            back: self.back.clone(),
            aliases: self.aliases.clone(),
            display: OnceLock::new(),
            key: OnceLock::new(),
        }
    }

    /// Front title as printed.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.front.title
    }

    /// Normalized human-readable front title.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.display.get_or_init(|| display_title(&self.front.title))
    }

    /// Comparison key of the front title.
    #[must_use]
    pub fn comparison_key(&self) -> &str {
        self.key.get_or_init(|| comparison_key(&self.front.title))
    }

    /// Front face card type.
    #[must_use]
    pub fn card_type(&self) -> CardType {
        self.front.card_type()
    }

    /// Whether the front face is of the given type.
    #[must_use]
    pub fn is_type(&self, card_type: CardType) -> bool {
        self.card_type() == card_type
    }

    /// Whether this is the Episode I printing of a shared title.
    #[must_use]
    pub fn is_episode_one(&self) -> bool {
        self.front.has_icon("Episode I")
    }
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }
    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

fn one_or_many<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(Option::<RawText>::deserialize(deserializer)?
        .map(RawText::into_lines)
        .unwrap_or_default())
}

/// A number that may be written as a JSON number or a string.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
}

impl RawNumber {
    fn value(&self) -> Option<f64> {
        match self {
            RawNumber::Number(n) => Some(*n),
            RawNumber::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Text that may be a single string or a list of lines.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum RawText {
    One(String),
    Many(Vec<String>),
}

impl RawText {
    fn into_lines(self) -> Vec<String> {
        match self {
            RawText::One(s) => vec![s],
            RawText::Many(lines) => lines,
        }
    }
}

/// Face as laid out in catalog JSON.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFace {
    #[serde(default)]
    title: String,
    #[serde(rename = "type", default)]
    card_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sub_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    uniqueness: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    destiny: Option<RawNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    power: Option<RawNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ability: Option<RawNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    deploy: Option<RawNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    forfeit: Option<RawNumber>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    icons: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lore: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    extra_text: Option<RawText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    light_side_icons: Option<RawNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dark_side_icons: Option<RawNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parsec: Option<RawNumber>,
}

fn whole(number: Option<&RawNumber>) -> Option<u32> {
    number
        .and_then(RawNumber::value)
        .filter(|n| *n >= 0.0)
        .map(|n| n as u32)
}

impl From<RawFace> for Face {
    fn from(raw: RawFace) -> Self {
        let mut kind = FaceKind::from_label(&raw.card_type);
        if let Some(stats) = kind.unit_stats_mut() {
            stats.power = raw.power.as_ref().and_then(RawNumber::value);
            stats.ability = raw.ability.as_ref().and_then(RawNumber::value);
            stats.deploy = raw.deploy.as_ref().and_then(RawNumber::value);
            stats.forfeit = raw.forfeit.as_ref().and_then(RawNumber::value);
        }
        if let FaceKind::Location(icons) = &mut kind {
            icons.light = whole(raw.light_side_icons.as_ref()).unwrap_or(0);
            icons.dark = whole(raw.dark_side_icons.as_ref()).unwrap_or(0);
            icons.parsec = whole(raw.parsec.as_ref());
        }
        Face {
            title: raw.title,
            kind,
            sub_type: raw.sub_type,
            uniqueness: raw.uniqueness,
            destiny: raw.destiny.as_ref().and_then(RawNumber::value),
            icons: raw.icons,
            lore: raw.lore,
            extra_text: raw.extra_text.map(RawText::into_lines).unwrap_or_default(),
        }
    }
}

impl From<Face> for RawFace {
    fn from(face: Face) -> Self {
        let number = |n: Option<f64>| n.map(RawNumber::Number);
        let mut raw = RawFace {
            title: face.title,
            card_type: face.kind.label().to_string(),
            sub_type: face.sub_type,
            uniqueness: face.uniqueness,
            destiny: number(face.destiny),
            icons: face.icons,
            lore: face.lore,
            extra_text: (!face.extra_text.is_empty()).then_some(RawText::Many(face.extra_text)),
            ..RawFace::default()
        };
        if let Some(stats) = face.kind.unit_stats() {
            raw.power = number(stats.power);
            raw.ability = number(stats.ability);
            raw.deploy = number(stats.deploy);
            raw.forfeit = number(stats.forfeit);
        }
        if let Some(icons) = face.kind.location_icons() {
            raw.light_side_icons = Some(RawNumber::Number(f64::from(icons.light)));
            raw.dark_side_icons = Some(RawNumber::Number(f64::from(icons.dark)));
            raw.parsec = icons.parsec.map(|p| RawNumber::Number(f64::from(p)));
        }
        raw
    }
}
