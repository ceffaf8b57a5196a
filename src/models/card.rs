use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Rarity
// ---------------------------------------------------------------------------

/// Card rarity as spelled by the catalog (`"COMMON"`, `"LEGENDARY"`, ...).
///
/// Anything outside the four craftable rarities (e.g. `"FREE"`) is kept
/// verbatim in [`Rarity::Other`]. A blank rarity counts as missing and
/// becomes [`Rarity::Common`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
    Other(String),
}

impl Rarity {
    pub fn as_str(&self) -> &str {
        match self {
            Rarity::Common => "COMMON",
            Rarity::Rare => "RARE",
            Rarity::Epic => "EPIC",
            Rarity::Legendary => "LEGENDARY",
            Rarity::Other(s) => s,
        }
    }
}

impl Default for Rarity {
    fn default() -> Self {
        Rarity::Common
    }
}

impl From<String> for Rarity {
    fn from(s: String) -> Self {
        match s.as_str() {
            "COMMON" => Rarity::Common,
            blank if blank.trim().is_empty() => Rarity::Common,
            "RARE" => Rarity::Rare,
            "EPIC" => Rarity::Epic,
            "LEGENDARY" => Rarity::Legendary,
            _ => Rarity::Other(s),
        }
    }
}

impl From<&str> for Rarity {
    fn from(s: &str) -> Self {
        Rarity::from(s.to_string())
    }
}

impl From<Rarity> for String {
    fn from(r: Rarity) -> Self {
        r.as_str().to_string()
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CatalogCard -- One raw entry of cards.collectible.json
// ---------------------------------------------------------------------------

/// A card as it appears in the HearthstoneJSON collectible catalog.
///
/// Only the fields the report needs are modelled; everything is optional
/// because hero and special cards omit many of them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogCard {
    pub dbf_id: Option<u32>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub cost: Option<u32>,
    pub rarity: Option<Rarity>,
    pub set: Option<String>,
    pub card_class: Option<String>,
    #[serde(rename = "type")]
    pub type_field: Option<String>,
    pub text: Option<String>,
    pub mechanics: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// CardRecord -- Normalized metadata for one card identifier
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    pub dbf_id: u32,
    /// Catalog card id (e.g. `"CORE_CS2_029"`), empty when unknown.
    pub card_id: String,
    pub name: String,
    pub cost: u32,
    pub rarity: Rarity,
    pub dust_value: u32,
    /// Raw set code from the catalog (e.g. `"EXPERT1"`).
    pub set_code: Option<String>,
    /// Human-readable set name (e.g. `"Classic"`).
    pub set_label: String,
    pub card_class: Option<String>,
    pub mechanics: BTreeSet<String>,
    #[serde(rename = "type")]
    pub card_type: String,
    pub text: String,
}

impl CardRecord {
    pub fn has_mechanic(&self, tag: &str) -> bool {
        self.mechanics.contains(tag)
    }

    pub fn is_spell(&self) -> bool {
        self.card_type == "SPELL"
    }
}

// ---------------------------------------------------------------------------
// EnrichedCard -- A card record plus its number of copies in the deck
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedCard {
    #[serde(flatten)]
    pub record: CardRecord,
    pub count: u32,
}

impl std::ops::Deref for EnrichedCard {
    type Target = CardRecord;

    fn deref(&self) -> &CardRecord {
        &self.record
    }
}
