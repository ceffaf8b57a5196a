//! The per-submission deck report and its text rendering.
//!
//! A [`DeckReport`] owns everything produced for one submission, including
//! the canonical deck code to hand back for copying. Nothing about the
//! current deck lives anywhere else.

use crate::analysis::{self, Analysis};
use crate::catalog::Catalog;
use crate::config;
use crate::heroes;
use crate::models::{CardCounts, DeckReference, DecodedDeck, EnrichedCard};
use crate::stats::{self, DeckStatistics, ManaCurve};
use serde::Serialize;
use std::fmt;

const BAR_WIDTH: u32 = 20;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckReport {
    pub reference: DeckReference,
    /// Declared class, else the hero's class, else [`config::UNAVAILABLE`].
    pub class: String,
    /// Declared format, else the decoded format, else [`config::UNAVAILABLE`].
    pub format: String,
    /// Cards in display order.
    pub cards: Vec<EnrichedCard>,
    pub stats: DeckStatistics,
    pub analysis: Analysis,
}

impl DeckReport {
    /// Assemble the report for a decoded deck.
    pub fn build(reference: DeckReference, decoded: &DecodedDeck, catalog: &Catalog) -> Self {
        let class = reference
            .class
            .clone()
            .or_else(|| {
                decoded
                    .heroes
                    .first()
                    .and_then(|&hero| heroes::class_for_hero(hero, catalog))
                    .map(|c| c.display_name().to_string())
            })
            .unwrap_or_else(|| config::UNAVAILABLE.to_string());
        let format = reference
            .format
            .clone()
            .or_else(|| decoded.format_name().map(str::to_string))
            .unwrap_or_else(|| config::UNAVAILABLE.to_string());

        let counts = CardCounts::from(decoded);
        let (cards, stats) = stats::aggregate(catalog.resolve(&counts));
        let analysis = analysis::describe(&cards, &class, &format);

        Self {
            reference,
            class,
            format,
            cards,
            stats,
            analysis,
        }
    }

    /// The canonical deck code, for copying.
    pub fn code(&self) -> &str {
        &self.reference.code
    }

    pub fn deck_name(&self) -> &str {
        self.reference.name.as_deref().unwrap_or(config::UNAVAILABLE)
    }
}

impl fmt::Display for DeckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deck Name: {}", self.deck_name())?;
        writeln!(f, "Class: {}", self.class)?;
        writeln!(f, "Format: {}", self.format)?;
        writeln!(f, "Deck Code: {}", self.code())?;

        writeln!(f, "\nDeck List:\n")?;
        for card in &self.cards {
            writeln!(
                f,
                "{} - [{} - x{}] - {} ({})",
                card.cost, card.name, card.count, card.rarity, card.set_label
            )?;
        }

        writeln!(f, "\nCard Rarities:\n")?;
        for (rarity, count) in &self.stats.rarity_histogram {
            writeln!(f, "{} Cards : {}", rarity, count)?;
        }

        writeln!(f, "\nMana Curve:\n")?;
        let curve = &self.stats.mana_curve;
        let max = curve.max_bucket();
        for (bucket, &count) in curve.buckets().iter().enumerate() {
            let width = if max == 0 {
                0
            } else {
                u128::from(count) * u128::from(BAR_WIDTH) / u128::from(max)
            };
            writeln!(
                f,
                "{:>3} | {:<bar$} {}",
                ManaCurve::label(bucket),
                "#".repeat(width as usize),
                count,
                bar = BAR_WIDTH as usize
            )?;
        }

        writeln!(f, "\nTotal Number of Cards: {}", self.stats.total_cards)?;
        writeln!(f, "Total Dust Cost: {}", self.stats.total_dust)?;

        writeln!(f, "\nDeck Analysis:\n")?;
        write!(f, "{}", self.analysis.text)
    }
}
