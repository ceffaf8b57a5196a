//! Hero identifier -> class resolution.
//!
//! The catalog's own `cardClass` field is authoritative for any hero card it
//! contains. The static table below only covers the default hero of each
//! class and is consulted when the catalog has no entry.

use crate::catalog::Catalog;
use std::fmt;

// ---------------------------------------------------------------------------
// HeroClass
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HeroClass {
    Warrior,
    Paladin,
    Hunter,
    Mage,
    Priest,
    Rogue,
    Shaman,
    Warlock,
    Druid,
    DemonHunter,
    DeathKnight,
}

impl HeroClass {
    pub const ALL: [HeroClass; 11] = [
        HeroClass::Warrior,
        HeroClass::Paladin,
        HeroClass::Hunter,
        HeroClass::Mage,
        HeroClass::Priest,
        HeroClass::Rogue,
        HeroClass::Shaman,
        HeroClass::Warlock,
        HeroClass::Druid,
        HeroClass::DemonHunter,
        HeroClass::DeathKnight,
    ];

    /// Name as shown to players and as written in deck-list exports.
    pub fn display_name(self) -> &'static str {
        match self {
            HeroClass::Warrior => "Warrior",
            HeroClass::Paladin => "Paladin",
            HeroClass::Hunter => "Hunter",
            HeroClass::Mage => "Mage",
            HeroClass::Priest => "Priest",
            HeroClass::Rogue => "Rogue",
            HeroClass::Shaman => "Shaman",
            HeroClass::Warlock => "Warlock",
            HeroClass::Druid => "Druid",
            HeroClass::DemonHunter => "Demon Hunter",
            HeroClass::DeathKnight => "Death Knight",
        }
    }

    /// Catalog spelling of the class (`"DEMONHUNTER"`).
    pub fn card_class(self) -> &'static str {
        match self {
            HeroClass::Warrior => "WARRIOR",
            HeroClass::Paladin => "PALADIN",
            HeroClass::Hunter => "HUNTER",
            HeroClass::Mage => "MAGE",
            HeroClass::Priest => "PRIEST",
            HeroClass::Rogue => "ROGUE",
            HeroClass::Shaman => "SHAMAN",
            HeroClass::Warlock => "WARLOCK",
            HeroClass::Druid => "DRUID",
            HeroClass::DemonHunter => "DEMONHUNTER",
            HeroClass::DeathKnight => "DEATHKNIGHT",
        }
    }

    pub fn from_card_class(card_class: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.card_class() == card_class)
    }

    /// Exact, case-sensitive match on the display name.
    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.display_name() == name)
    }
}

impl fmt::Display for HeroClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ---------------------------------------------------------------------------
// Static fallback table
// ---------------------------------------------------------------------------

/// Hero card identifier -> class for the default hero of every class.
pub const HERO_CLASSES: &[(u32, HeroClass)] = &[
    (7, HeroClass::Warrior),
    (671, HeroClass::Paladin),
    (31, HeroClass::Hunter),
    (637, HeroClass::Mage),
    (813, HeroClass::Priest),
    (930, HeroClass::Rogue),
    (1066, HeroClass::Shaman),
    (893, HeroClass::Warlock),
    (274, HeroClass::Druid),
    (56550, HeroClass::DemonHunter),
    (78065, HeroClass::DeathKnight),
];

const fn has_duplicate_ids(table: &[(u32, HeroClass)]) -> bool {
    let mut i = 0;
    while i < table.len() {
        let mut j = i + 1;
        while j < table.len() {
            if table[i].0 == table[j].0 {
                return true;
            }
            j += 1;
        }
        i += 1;
    }
    false
}

const _: () = assert!(
    !has_duplicate_ids(HERO_CLASSES),
    "duplicate hero id in HERO_CLASSES"
);

/// Look up a hero identifier in the static table only.
pub fn static_class(hero_id: u32) -> Option<HeroClass> {
    HERO_CLASSES
        .iter()
        .find(|(id, _)| *id == hero_id)
        .map(|(_, class)| *class)
}

/// Resolve the class of a hero card, preferring the catalog's `cardClass`.
pub fn class_for_hero(hero_id: u32, catalog: &Catalog) -> Option<HeroClass> {
    catalog
        .hero_class(hero_id)
        .or_else(|| static_class(hero_id))
}
