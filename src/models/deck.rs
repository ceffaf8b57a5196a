use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// DeckReference -- What the user pasted, normalized
// ---------------------------------------------------------------------------

/// The canonical deck code plus whatever metadata the pasted text carried.
///
/// `None` means the field was unavailable (bare deck codes carry no
/// metadata). Created once per submission by
/// [`normalize`](crate::normalizer::normalize) and never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckReference {
    pub code: String,
    pub name: Option<String>,
    pub class: Option<String>,
    pub format: Option<String>,
}

impl DeckReference {
    pub fn bare(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: None,
            class: None,
            format: None,
        }
    }
}

// ---------------------------------------------------------------------------
// DecodedDeck -- Output of the external deck-code codec
// ---------------------------------------------------------------------------

/// A decoded deck string, shaped like the `deckstrings` codec output:
/// `{"heroes": [274], "cards": [[1, 2], [5, 1]], "format": 2}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DecodedDeck {
    #[serde(default)]
    pub heroes: Vec<u32>,
    #[serde(default)]
    pub cards: Vec<(u32, u32)>,
    #[serde(default)]
    pub format: u32,
}

impl DecodedDeck {
    /// Name of the game format encoded in the deck string.
    pub fn format_name(&self) -> Option<&'static str> {
        match self.format {
            1 => Some("Wild"),
            2 => Some("Standard"),
            3 => Some("Classic"),
            4 => Some("Twist"),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// CardCounts -- Card identifier -> copies
// ---------------------------------------------------------------------------

/// Number of copies per card identifier. Every stored quantity is positive.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CardCounts(BTreeMap<u32, u32>);

impl CardCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` copies of `dbf_id`, merging with any existing entry.
    pub fn add(&mut self, dbf_id: u32, count: u32) {
        if count == 0 {
            return;
        }
        let slot = self.0.entry(dbf_id).or_insert(0);
        *slot = slot.saturating_add(count);
    }

    pub fn get(&self, dbf_id: u32) -> Option<u32> {
        self.0.get(&dbf_id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.0.iter().map(|(&id, &count)| (id, count))
    }

    /// Number of distinct identifiers.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total copies across all identifiers.
    pub fn total(&self) -> u64 {
        self.0.values().map(|&n| u64::from(n)).sum()
    }
}

impl From<&DecodedDeck> for CardCounts {
    fn from(deck: &DecodedDeck) -> Self {
        deck.cards.iter().copied().collect()
    }
}

impl FromIterator<(u32, u32)> for CardCounts {
    fn from_iter<I: IntoIterator<Item = (u32, u32)>>(iter: I) -> Self {
        let mut counts = CardCounts::new();
        for (id, count) in iter {
            counts.add(id, count);
        }
        counts
    }
}
