//! Card catalog indexing and per-card metadata resolution.
//!
//! The catalog is the HearthstoneJSON `cards.collectible.json` array, indexed
//! by `dbfId` (the identifier space used by deck codes).

use crate::cache;
use crate::config;
use crate::error::{DeckInfoError, Result};
use crate::heroes::HeroClass;
use crate::models::{CardCounts, CardRecord, CatalogCard, EnrichedCard, Rarity};
use crate::sets::format_set_name;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use tracing::{debug, warn};

/// Dust needed to craft one copy of a card of the given rarity.
///
/// Rarities outside the four craftable ones cost nothing.
pub fn dust_cost(rarity: &Rarity) -> u32 {
    match rarity {
        Rarity::Common => 40,
        Rarity::Rare => 100,
        Rarity::Epic => 400,
        Rarity::Legendary => 1600,
        Rarity::Other(_) => 0,
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Collectible card catalog keyed by `dbfId`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    cards: HashMap<u32, CatalogCard>,
}

impl Catalog {
    /// Build a catalog from parsed catalog JSON.
    ///
    /// The value must be an array of card objects; anything else is
    /// [`DeckInfoError::InvalidCatalog`]. A field with the wrong type only
    /// drops that field, so one bad entry never rejects the whole catalog.
    /// Entries without a `dbfId` are skipped since no deck can reference
    /// them.
    pub fn from_value(value: Value) -> Result<Self> {
        check_shape(&value)?;
        let entries = match value {
            Value::Array(arr) => arr,
            _ => Vec::new(),
        };

        let cards: Vec<CatalogCard> = entries
            .iter()
            .enumerate()
            .filter_map(|(i, entry)| entry.as_object().map(|obj| parse_entry(i, obj)))
            .collect();

        Ok(Self::from_cards(cards))
    }

    pub fn from_cards<I: IntoIterator<Item = CatalogCard>>(cards: I) -> Self {
        let cards: HashMap<u32, CatalogCard> = cards
            .into_iter()
            .filter_map(|c| c.dbf_id.map(|id| (id, c)))
            .collect();
        debug!(cards = cards.len(), "indexed card catalog");
        Self { cards }
    }

    /// Load a catalog from a local `.json` or `.json.gz` file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let value = cache::read_json_file(path.as_ref())?;
        Self::from_value(value)
    }

    pub fn get(&self, dbf_id: u32) -> Option<&CatalogCard> {
        self.cards.get(&dbf_id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Class of a hero card according to the catalog's `cardClass` field.
    pub fn hero_class(&self, hero_id: u32) -> Option<HeroClass> {
        self.get(hero_id)
            .and_then(|card| card.card_class.as_deref())
            .and_then(HeroClass::from_card_class)
    }

    /// Normalized metadata for one identifier, with defaults for unknown cards.
    pub fn record(&self, dbf_id: u32) -> CardRecord {
        match self.get(dbf_id) {
            Some(card) => card_record(dbf_id, card),
            None => card_record(dbf_id, &CatalogCard::default()),
        }
    }

    /// Enrich every identifier in `counts` with catalog metadata.
    ///
    /// Missing catalog entries are not an error; they resolve to an
    /// "Unknown Card" record so the report stays renderable.
    pub fn resolve(&self, counts: &CardCounts) -> Vec<EnrichedCard> {
        counts
            .iter()
            .map(|(dbf_id, count)| {
                if self.get(dbf_id).is_none() {
                    debug!(dbf_id, "card missing from catalog");
                }
                EnrichedCard {
                    record: self.record(dbf_id),
                    count,
                }
            })
            .collect()
    }
}

/// Check that `value` is an array of card objects.
///
/// Shared by the cache so a catalog of the wrong shape is never persisted.
pub fn check_shape(value: &Value) -> Result<()> {
    let entries = value.as_array().ok_or_else(|| {
        DeckInfoError::InvalidCatalog(format!(
            "expected an array of cards, got {}",
            json_kind(value)
        ))
    })?;
    match entries.iter().position(|entry| !entry.is_object()) {
        Some(i) => Err(DeckInfoError::InvalidCatalog(format!(
            "entry {} is {}, not a card object",
            i,
            json_kind(&entries[i])
        ))),
        None => Ok(()),
    }
}

fn parse_entry(index: usize, obj: &Map<String, Value>) -> CatalogCard {
    let mut card = CatalogCard::default();
    let mut bad = Vec::new();
    parse_field(obj, "dbfId", &mut card.dbf_id, &mut bad);
    parse_field(obj, "id", &mut card.id, &mut bad);
    parse_field(obj, "name", &mut card.name, &mut bad);
    parse_field(obj, "cost", &mut card.cost, &mut bad);
    parse_field(obj, "rarity", &mut card.rarity, &mut bad);
    parse_field(obj, "set", &mut card.set, &mut bad);
    parse_field(obj, "cardClass", &mut card.card_class, &mut bad);
    parse_field(obj, "type", &mut card.type_field, &mut bad);
    parse_field(obj, "text", &mut card.text, &mut bad);
    parse_field(obj, "mechanics", &mut card.mechanics, &mut bad);
    if !bad.is_empty() {
        warn!(entry = index, fields = ?bad, "ignoring malformed catalog fields");
    }
    card
}

/// Read `key` into `slot`, leaving it `None` when the value has the wrong type.
fn parse_field<T: DeserializeOwned>(
    obj: &Map<String, Value>,
    key: &'static str,
    slot: &mut Option<T>,
    bad: &mut Vec<&'static str>,
) {
    match obj.get(key) {
        None | Some(Value::Null) => {}
        Some(value) => match T::deserialize(value) {
            Ok(parsed) => *slot = Some(parsed),
            Err(_) => bad.push(key),
        },
    }
}

fn card_record(dbf_id: u32, card: &CatalogCard) -> CardRecord {
    let rarity = card.rarity.clone().unwrap_or_default();
    let set_code = card.set.clone();
    let dust_value = if set_code.as_deref() == Some(config::FREE_SET) {
        0
    } else {
        dust_cost(&rarity)
    };

    CardRecord {
        dbf_id,
        card_id: card.id.clone().unwrap_or_default(),
        name: card
            .name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| config::UNKNOWN_CARD.to_string()),
        cost: card.cost.unwrap_or(0),
        rarity,
        dust_value,
        set_label: format_set_name(set_code.as_deref()),
        set_code,
        card_class: card.card_class.clone(),
        mechanics: card
            .mechanics
            .iter()
            .flatten()
            .cloned()
            .collect::<BTreeSet<String>>(),
        card_type: card.type_field.clone().unwrap_or_default(),
        text: card.text.clone().unwrap_or_default(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
