//! Rule-based deck archetype classification and strategy narrative.
//!
//! Classification is a fixed priority list over weighted card counts; the
//! narrative is assembled from static sentence tables. Output is fully
//! deterministic for a given card list, class and format.

use crate::config;
use crate::heroes::HeroClass;
use crate::models::{EnrichedCard, Rarity};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Archetype
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Archetype {
    Aggro,
    Control,
    #[serde(rename = "Spell-heavy")]
    SpellHeavy,
    Combo,
    Midrange,
}

impl Archetype {
    pub fn as_str(self) -> &'static str {
        match self {
            Archetype::Aggro => "Aggro",
            Archetype::Control => "Control",
            Archetype::SpellHeavy => "Spell-heavy",
            Archetype::Combo => "Combo",
            Archetype::Midrange => "Midrange",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The opposing deck style a matchup tip is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpponentBucket {
    Aggro,
    Control,
}

// ---------------------------------------------------------------------------
// CardProfile
// ---------------------------------------------------------------------------

/// Copy-weighted counts the classifier works from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardProfile {
    pub cheap: u64,
    pub expensive: u64,
    pub spells: u64,
    pub minions: u64,
    pub weapons: u64,
    pub mechanics: BTreeSet<String>,
}

impl CardProfile {
    pub fn from_cards(cards: &[EnrichedCard]) -> Self {
        let mut profile = CardProfile::default();
        for card in cards {
            let count = u64::from(card.count);
            match card.card_type.as_str() {
                "SPELL" => profile.spells += count,
                "MINION" => profile.minions += count,
                "WEAPON" => profile.weapons += count,
                _ => {}
            }
            if card.cost <= config::CHEAP_COST_MAX {
                profile.cheap += count;
            }
            if card.cost >= config::EXPENSIVE_COST_MIN {
                profile.expensive += count;
            }
            profile.mechanics.extend(card.mechanics.iter().cloned());
        }
        profile
    }

    pub fn archetype(&self) -> Archetype {
        if self.cheap > u64::from(config::AGGRO_CHEAP_THRESHOLD) {
            Archetype::Aggro
        } else if self.expensive > u64::from(config::CONTROL_EXPENSIVE_THRESHOLD) {
            Archetype::Control
        } else if self.spells > u64::from(config::SPELL_HEAVY_THRESHOLD) {
            Archetype::SpellHeavy
        } else if self.mechanics.contains("COMBO") {
            Archetype::Combo
        } else {
            Archetype::Midrange
        }
    }
}

/// Pick the single archetype for a card list (first matching rule wins).
pub fn classify(cards: &[EnrichedCard]) -> Archetype {
    CardProfile::from_cards(cards).archetype()
}

// ---------------------------------------------------------------------------
// Sentence tables
// ---------------------------------------------------------------------------

/// Optional sentence per mechanic tag, in the order they are emitted.
pub const MECHANIC_SENTENCES: [(&str, &str); 4] = [
    (
        "TAUNT",
        "The inclusion of multiple Taunt minions suggests this deck aims to protect key assets or stall for time. ",
    ),
    (
        "BATTLECRY",
        "The deck utilizes numerous Battlecry effects to generate value and maintain board presence. ",
    ),
    (
        "DEATHRATTLE",
        "The Deathrattle synergies in this deck create persistent value and potentially sticky board states. ",
    ),
    (
        "DISCOVER",
        "The Discover mechanics provide flexibility and resource generation throughout the game. ",
    ),
];

/// Class-flavoured sentence; only exact class names match.
pub fn class_sentence(class_name: &str) -> Option<&'static str> {
    let sentence = match HeroClass::from_display_name(class_name)? {
        HeroClass::Warrior => "As a Warrior deck, it likely uses armor gain and weapons to control the pace of the game. ",
        HeroClass::Paladin => "This Paladin build appears to leverage minion buffs and board development for consistent pressure. ",
        HeroClass::Hunter => "This Hunter deck aims to apply constant pressure and finish with direct damage to the opponent's hero. ",
        HeroClass::Mage => "The Mage's spell synergy and potential for direct damage make this a versatile threat. ",
        HeroClass::Priest => "This Priest deck utilizes healing and value generation to outlast opponents. ",
        HeroClass::Rogue => "As a Rogue deck, it likely employs combo mechanics and tempo plays to overwhelm the opponent. ",
        HeroClass::Shaman => "This Shaman build leverages the class's versatile toolkit to adapt to different board states. ",
        HeroClass::Warlock => "The Warlock's life tap ability gives this deck sustained card advantage at the cost of health. ",
        HeroClass::Druid => "This Druid deck uses mana acceleration to deploy threats ahead of curve. ",
        HeroClass::DemonHunter => "The Demon Hunter's aggressive tools and mobility make this deck a persistent threat. ",
        HeroClass::DeathKnight => "As a Death Knight deck, it harnesses the power of Undead minions and Runes to control the battlefield. ",
    };
    Some(sentence)
}

pub fn strategy_tip(archetype: Archetype) -> &'static str {
    match archetype {
        Archetype::Aggro => "maintaining early board control and pushing face damage when possible",
        Archetype::Control => "efficiently answering threats and preserving your resources for the late game",
        Archetype::Combo => "gathering your combo pieces while staying alive with your defensive tools",
        Archetype::SpellHeavy => "using your spells efficiently to control the board and set up for your win condition",
        Archetype::Midrange => "being the aggressor against control decks and controlling the board against aggro decks",
    }
}

pub fn matchup_tip(archetype: Archetype, opponent: OpponentBucket) -> &'static str {
    use OpponentBucket as Opp;
    match (archetype, opponent) {
        (Archetype::Aggro, Opp::Aggro) => "focus on fighting for board control before switching to face damage",
        (Archetype::Control, Opp::Aggro) => "prioritize clearing their board and stabilizing your health total",
        (Archetype::Combo, Opp::Aggro) => "use your defensive tools aggressively to stay alive until you can execute your combo",
        (Archetype::SpellHeavy, Opp::Aggro) => "use removal efficiently and save AOE effects for maximum impact",
        (Archetype::Midrange, Opp::Aggro) => "focus on efficient trades to deny their momentum",
        (Archetype::Aggro, Opp::Control) => "apply constant pressure to force inefficient answers",
        (Archetype::Control, Opp::Control) => "be patient and manage your resources to outlast their removal",
        (Archetype::Combo, Opp::Control) => "bait out their counterplay before committing to your full combo",
        (Archetype::SpellHeavy, Opp::Control) => "save key spells for when they'll have maximum impact",
        (Archetype::Midrange, Opp::Control) => "play aggressively and force them to have answers for each of your threats",
    }
}

// ---------------------------------------------------------------------------
// Narrative
// ---------------------------------------------------------------------------

/// Result of analysing a deck.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub archetype: Archetype,
    /// Average mana cost rounded to two decimals, as quoted in the text.
    pub average_mana: f64,
    pub legendaries: Vec<String>,
    pub text: String,
}

/// Average mana cost of a card list, rounded to two decimals.
pub fn rounded_average_mana(cards: &[EnrichedCard]) -> f64 {
    let total_cards: u64 = cards.iter().map(|c| u64::from(c.count)).sum();
    if total_cards == 0 {
        return 0.0;
    }
    let total_mana: u64 = cards
        .iter()
        .map(|c| u64::from(c.cost) * u64::from(c.count))
        .fold(0, u64::saturating_add);
    round_to_cents(total_mana as f64 / total_cards as f64)
}

/// Round the exact binary value of `value` to two decimals, halves up.
///
/// Scaling by 100 first would round the product instead, which turns
/// values just below a half (`2.025` is stored as `2.02499..`) into ties.
pub fn round_to_cents(value: f64) -> f64 {
    let doubled = (value * 200.0).round();
    // Exact halves round up; `{:.2}` rounds them to even.
    if doubled % 2.0 == 1.0 && value.mul_add(200.0, -doubled) == 0.0 {
        return (doubled + 1.0) / 200.0;
    }
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Classify `cards` and write the strategy narrative.
///
/// `cards` should already be in display order; legendary names are listed
/// in that order.
pub fn describe(cards: &[EnrichedCard], class_name: &str, format_name: &str) -> Analysis {
    let profile = CardProfile::from_cards(cards);
    let archetype = profile.archetype();
    let average_mana = rounded_average_mana(cards);
    let legendaries: Vec<String> = cards
        .iter()
        .filter(|c| c.rarity == Rarity::Legendary)
        .map(|c| c.name.clone())
        .collect();

    let mut text = format!(
        "This appears to be a {} {} deck for {} format. ",
        archetype, class_name, format_name
    );

    let average = format!("{:.2}", average_mana);
    if average_mana < config::AGGRESSIVE_AVERAGE_MANA {
        text.push_str(&format!(
            "With a low average mana cost of {}, this is an aggressive deck designed to put pressure on the opponent early. ",
            average
        ));
    } else if average_mana < config::MIDRANGE_AVERAGE_MANA {
        text.push_str(&format!(
            "With an average mana cost of {}, this is a midrange deck that can adapt to different matchups. ",
            average
        ));
    } else {
        text.push_str(&format!(
            "With a high average mana cost of {}, this is a control or combo deck that aims to outlast the opponent. ",
            average
        ));
    }

    if !legendaries.is_empty() {
        let listed = legendaries
            .iter()
            .take(config::MAX_LISTED_LEGENDARIES)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let others = if legendaries.len() > config::MAX_LISTED_LEGENDARIES {
            " and others"
        } else {
            ""
        };
        let verb = if legendaries.len() > 1 { "are" } else { "is" };
        text.push_str(&format!(
            "The deck features key legendary cards like {}{}, which {} central to the deck's strategy. ",
            listed, others, verb
        ));
    }

    for (tag, sentence) in MECHANIC_SENTENCES {
        if profile.mechanics.contains(tag) {
            text.push_str(sentence);
        }
    }

    if let Some(sentence) = class_sentence(class_name) {
        text.push_str(sentence);
    }

    text.push_str(&format!(
        "\n\nWhen playing this deck, focus on {}. Against aggressive decks, {}, while against control decks, {}.",
        strategy_tip(archetype),
        matchup_tip(archetype, OpponentBucket::Aggro),
        matchup_tip(archetype, OpponentBucket::Control)
    ));

    Analysis {
        archetype,
        average_mana,
        legendaries,
        text,
    }
}
