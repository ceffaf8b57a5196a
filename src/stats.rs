//! Deck statistics: totals, rarity histogram, mana curve, average cost.

use crate::config::MANA_CURVE_BUCKETS;
use crate::models::{EnrichedCard, Rarity};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// ManaCurve
// ---------------------------------------------------------------------------

/// Card counts per mana cost. Buckets 0..=9 are exact; the last bucket
/// holds every card costing 10 or more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ManaCurve([u64; MANA_CURVE_BUCKETS]);

impl ManaCurve {
    /// Bucket index for a mana cost.
    pub fn bucket(cost: u32) -> usize {
        (cost as usize).min(MANA_CURVE_BUCKETS - 1)
    }

    /// Label for a bucket index (`"10+"` for the last one).
    pub fn label(bucket: usize) -> String {
        if bucket == MANA_CURVE_BUCKETS - 1 {
            format!("{}+", bucket)
        } else {
            bucket.to_string()
        }
    }

    pub fn add(&mut self, cost: u32, count: u32) {
        let slot = &mut self.0[Self::bucket(cost)];
        *slot = slot.saturating_add(u64::from(count));
    }

    pub fn get(&self, bucket: usize) -> u64 {
        self.0.get(bucket).copied().unwrap_or(0)
    }

    pub fn buckets(&self) -> &[u64; MANA_CURVE_BUCKETS] {
        &self.0
    }

    /// Largest bucket, used to scale bars. Zero for an empty deck.
    pub fn max_bucket(&self) -> u64 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.0.iter().fold(0, |acc, &n| acc.saturating_add(n))
    }
}

// ---------------------------------------------------------------------------
// DeckStatistics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckStatistics {
    pub total_cards: u64,
    pub total_dust: u64,
    pub rarity_histogram: BTreeMap<Rarity, u64>,
    pub mana_curve: ManaCurve,
    /// Mean mana cost per card; 0.0 for an empty deck.
    pub average_mana_cost: f64,
}

impl DeckStatistics {
    pub fn from_cards(cards: &[EnrichedCard]) -> Self {
        let mut stats = DeckStatistics::default();
        let mut total_mana: u64 = 0;

        // Counts come straight from the decoded deck string and are unbounded.
        for card in cards {
            let count = u64::from(card.count);
            stats.total_cards = stats.total_cards.saturating_add(count);
            stats.total_dust = stats
                .total_dust
                .saturating_add(u64::from(card.dust_value) * count);
            let slot = stats.rarity_histogram.entry(card.rarity.clone()).or_insert(0);
            *slot = slot.saturating_add(count);
            stats.mana_curve.add(card.cost, card.count);
            total_mana = total_mana.saturating_add(u64::from(card.cost) * count);
        }

        if stats.total_cards > 0 {
            stats.average_mana_cost = total_mana as f64 / stats.total_cards as f64;
        }
        stats
    }

    pub fn rarity_count(&self, rarity: &Rarity) -> u64 {
        self.rarity_histogram.get(rarity).copied().unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Display order: ascending cost, then name (case-insensitive first).
pub fn compare_cards(a: &EnrichedCard, b: &EnrichedCard) -> Ordering {
    a.cost
        .cmp(&b.cost)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.dbf_id.cmp(&b.dbf_id))
}

pub fn sort_cards(cards: &mut [EnrichedCard]) {
    cards.sort_by(compare_cards);
}

/// Sort the cards for display and compute their statistics.
pub fn aggregate(mut cards: Vec<EnrichedCard>) -> (Vec<EnrichedCard>, DeckStatistics) {
    sort_cards(&mut cards);
    let stats = DeckStatistics::from_cards(&cards);
    (cards, stats)
}
