//! Shared test fixtures for the deck info integration tests.
//!
//! Provides a small sample catalog, an offline `DeckInfo` whose cache
//! directory is pre-seeded with that catalog, and helpers for building
//! decoded decks and enriched cards by hand.
#![allow(dead_code)]

use hsdeck_info::models::{CardRecord, DecodedDeck, EnrichedCard, Rarity};
use hsdeck_info::{DeckInfo, Result};
use std::collections::BTreeSet;
use std::fs;

pub const MAGE_CODE: &str = "AAECAf0EBMABobcC3sQCxc4CDU2KAckDqwS0BOYE7AWjtgLXtgKWxAKfxALnxAKNzgIA";
pub const DRUID_CODE: &str = "AAECAZICAA==";

/// The sample catalog as raw catalog JSON.
pub fn sample_catalog() -> serde_json::Value {
    serde_json::json!([
        {"dbfId": 100, "id": "EX1_277", "name": "Arcane Missiles", "cost": 1, "rarity": "COMMON",
         "set": "EXPERT1", "cardClass": "MAGE", "type": "SPELL", "text": "Deal $3 damage randomly split among all enemies."},
        {"dbfId": 101, "id": "CORE_CS2_024", "name": "Frostbolt", "cost": 2, "rarity": "COMMON",
         "set": "CORE", "cardClass": "MAGE", "type": "SPELL", "mechanics": ["FREEZE"]},
        {"dbfId": 102, "id": "NEW1_012", "name": "Mana Wyrm", "cost": 1, "rarity": "COMMON",
         "set": "EXPERT1", "cardClass": "MAGE", "type": "MINION", "mechanics": ["TRIGGER_VISUAL"]},
        {"dbfId": 103, "id": "CORE_CS2_033", "name": "Water Elemental", "cost": 4, "rarity": "COMMON",
         "set": "CORE", "cardClass": "MAGE", "type": "MINION", "mechanics": ["FREEZE"]},
        {"dbfId": 104, "id": "EX1_016", "name": "Sylvanas Windrunner", "cost": 6, "rarity": "LEGENDARY",
         "set": "HOF", "cardClass": "NEUTRAL", "type": "MINION", "mechanics": ["DEATHRATTLE"]},
        {"dbfId": 105, "id": "EX1_298", "name": "Ragnaros the Firelord", "cost": 8, "rarity": "LEGENDARY",
         "set": "HOF", "cardClass": "NEUTRAL", "type": "MINION"},
        {"dbfId": 106, "id": "ICC_838", "name": "Sindragosa", "cost": 8, "rarity": "LEGENDARY",
         "set": "ICECROWN", "cardClass": "NEUTRAL", "type": "MINION", "mechanics": ["BATTLECRY"]},
        {"dbfId": 107, "id": "CS2_032", "name": "Flamestrike", "cost": 7, "rarity": "EPIC",
         "set": "EXPERT1", "cardClass": "MAGE", "type": "SPELL"},
        {"dbfId": 108, "id": "EX1_559", "name": "Archmage Antonidas", "cost": 7, "rarity": "LEGENDARY",
         "set": "EXPERT1", "cardClass": "MAGE", "type": "MINION"},
        {"dbfId": 109, "id": "EX1_312", "name": "Twisting Nether", "cost": 12, "rarity": "EPIC",
         "set": "EXPERT1", "cardClass": "WARLOCK", "type": "SPELL"},
        {"dbfId": 110, "id": "TLC_001", "name": "Lost Relic", "cost": 0, "rarity": "FREE",
         "set": "THE_LOST_CITY", "cardClass": "NEUTRAL", "type": "SPELL"},
        {"dbfId": 111, "id": "EX1_144", "name": "Shadowstep", "cost": 0, "rarity": "RARE",
         "set": "EXPERT1", "cardClass": "ROGUE", "type": "SPELL", "mechanics": ["COMBO"]},
        {"dbfId": 637, "id": "HERO_08", "name": "Jaina Proudmoore", "rarity": "FREE",
         "set": "CORE", "cardClass": "MAGE", "type": "HERO"},
        {"dbfId": 57000, "id": "HERO_10b", "name": "Demon Hunter Skin",
         "set": "HERO_SKINS", "cardClass": "DEMONHUNTER", "type": "HERO"},
        {"name": "Entry Without Identifier", "cost": 3}
    ])
}

/// An offline `DeckInfo` whose cache already holds the sample catalog.
///
/// Returns `(DeckInfo, tempfile::TempDir)`. The caller must keep the
/// `TempDir` alive for the duration of the test.
pub fn setup_sample_info() -> (DeckInfo, tempfile::TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();
    seed_catalog(tmp_dir.path(), &sample_catalog());
    let info = DeckInfo::builder()
        .cache_dir(tmp_dir.path())
        .offline(true)
        .build()
        .unwrap();
    (info, tmp_dir)
}

/// Write `catalog` where the cache manager looks for the enUS catalog.
pub fn seed_catalog(cache_dir: &std::path::Path, catalog: &serde_json::Value) {
    let dir = cache_dir.join("enUS");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("cards.collectible.json"),
        serde_json::to_string(catalog).unwrap(),
    )
    .unwrap();
}

/// The sample mage deck: 13 distinct cards (one unknown), 22 copies.
pub fn mage_deck() -> DecodedDeck {
    DecodedDeck {
        heroes: vec![637],
        cards: vec![
            (100, 2),
            (101, 2),
            (102, 2),
            (103, 2),
            (104, 1),
            (105, 1),
            (106, 1),
            (107, 2),
            (108, 1),
            (109, 1),
            (110, 1),
            (101, 1),
            (999_999, 2),
            (111, 2),
            (102, 1),
        ],
        format: 2,
    }
}

/// A decoder that always returns `deck`, whatever code it is given.
pub fn fixed_decoder(deck: DecodedDeck) -> impl Fn(&str) -> Result<DecodedDeck> {
    move |_code: &str| Ok(deck.clone())
}

/// Build an enriched card directly, bypassing the catalog.
pub fn card(
    dbf_id: u32,
    name: &str,
    cost: u32,
    rarity: Rarity,
    card_type: &str,
    mechanics: &[&str],
    count: u32,
) -> EnrichedCard {
    EnrichedCard {
        record: CardRecord {
            dbf_id,
            card_id: String::new(),
            name: name.to_string(),
            cost,
            dust_value: hsdeck_info::catalog::dust_cost(&rarity),
            rarity,
            set_code: Some("EXPERT1".to_string()),
            set_label: "Classic".to_string(),
            card_class: None,
            mechanics: mechanics.iter().map(|m| m.to_string()).collect::<BTreeSet<_>>(),
            card_type: card_type.to_string(),
            text: String::new(),
        },
        count,
    }
}

/// `count` copies of a vanilla minion at `cost`.
pub fn minion(dbf_id: u32, cost: u32, count: u32) -> EnrichedCard {
    card(
        dbf_id,
        &format!("Minion {}", dbf_id),
        cost,
        Rarity::Common,
        "MINION",
        &[],
        count,
    )
}
