use std::path::PathBuf;

pub const API_BASE: &str = "https://api.hearthstonejson.com/v1";
pub const DEFAULT_LOCALE: &str = "enUS";
pub const CATALOG_FILE: &str = "cards.collectible.json";

/// Display text for deck metadata that only exists in pasted deck lists.
pub const UNAVAILABLE: &str = "(Only Available if Copied From HSReplay)";

/// Set code of the free starter set; its cards cost no dust.
pub const FREE_SET: &str = "CORE";

pub const UNKNOWN_CARD: &str = "Unknown Card";
pub const UNKNOWN_SET: &str = "Unknown Set";

// Archetype thresholds. Counts are weighted by copies in the deck.
pub const CHEAP_COST_MAX: u32 = 3;
pub const EXPENSIVE_COST_MIN: u32 = 7;
pub const AGGRO_CHEAP_THRESHOLD: u32 = 15;
pub const CONTROL_EXPENSIVE_THRESHOLD: u32 = 5;
pub const SPELL_HEAVY_THRESHOLD: u32 = 12;

// Average mana bands for the narrative.
pub const AGGRESSIVE_AVERAGE_MANA: f64 = 3.0;
pub const MIDRANGE_AVERAGE_MANA: f64 = 4.5;

pub const MAX_LISTED_LEGENDARIES: usize = 3;

/// Costs 0 through 9 plus a final "10+" bucket.
pub const MANA_CURVE_BUCKETS: usize = 11;

pub fn catalog_url(locale: &str) -> String {
    format!("{}/latest/{}/{}", API_BASE, locale, CATALOG_FILE)
}

/// Path of the cached catalog relative to the cache directory.
pub fn catalog_file(locale: &str) -> PathBuf {
    PathBuf::from(locale).join(CATALOG_FILE)
}

pub fn default_cache_dir() -> PathBuf {
    if let Some(cache) = dirs::cache_dir() {
        cache.join("hsdeck-info")
    } else {
        PathBuf::from(".hsdeck-info-cache")
    }
}
