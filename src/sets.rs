//! Card set code -> display name formatting.
//!
//! Known expansions use a fixed lookup table; any other code is turned into
//! title case (`"THE_LOST_CITY"` -> `"The Lost City"`). Formatting is
//! idempotent: a name that is already a known display label is returned
//! unchanged.

use crate::config;
use lazy_static::lazy_static;
use regex::Regex;

/// Set code -> display name for sets whose name is not derivable from the code.
pub const SET_NAMES: &[(&str, &str)] = &[
    ("CORE", "Core"),
    ("EXPERT1", "Classic"),
    ("HOF", "Hall of Fame"),
    ("TGT", "The Grand Tournament"),
    ("GANGS", "Mean Streets of Gadgetzan"),
    ("UNGORO", "Journey to Un'Goro"),
    ("ICECROWN", "Knights of the Frozen Throne"),
    ("LOOTAPALOOZA", "Kobolds & Catacombs"),
    ("GILNEAS", "The Witchwood"),
    ("BOOMSDAY", "The Boomsday Project"),
    ("TROLL", "Rastakhan's Rumble"),
    ("DALARAN", "Rise of Shadows"),
    ("ULDUM", "Saviors of Uldum"),
    ("DRAGONS", "Descent of Dragons"),
    ("YEAR_OF_THE_DRAGON", "Galakrond's Awakening"),
    ("BLACK_TEMPLE", "Ashes of Outland"),
    ("SCHOLOMANCE", "Scholomance Academy"),
    ("DARKMOON_FAIRE", "Madness at the Darkmoon Faire"),
    ("THE_BARRENS", "Forged in the Barrens"),
    ("STORMWIND", "United in Stormwind"),
    ("ALTERAC_VALLEY", "Fractured in Alterac Valley"),
    ("THE_SUNKEN_CITY", "Voyage to the Sunken City"),
    ("REVENDRETH", "Murder at Castle Nathria"),
    ("RETURN_OF_THE_LICH_KING", "March of the Lich King"),
    ("PATH_OF_ARTHAS", "Path of Arthas"),
    ("TITANS", "Titans"),
    ("BATTLE_OF_THE_BANDS", "Battle of the Bands"),
    ("WONDERS", "Festival of Legends"),
    ("HEIST", "Rise of Shadows Adventure"),
    ("TAVERNS_OF_TIME", "Taverns of Time"),
    ("BAD", "Showdown in the Badlands"),
    ("TOY", "Whizbang's Workshop"),
    ("PPP", "Perils in Paradise"),
    ("DREAM", "Into the Emerald Dream"),
    ("LEGACY", "Legacy"),
];

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn has_duplicate_codes(table: &[(&str, &str)]) -> bool {
    let mut i = 0;
    while i < table.len() {
        let mut j = i + 1;
        while j < table.len() {
            if str_eq(table[i].0, table[j].0) {
                return true;
            }
            j += 1;
        }
        i += 1;
    }
    false
}

const _: () = assert!(!has_duplicate_codes(SET_NAMES), "duplicate set code in SET_NAMES");

lazy_static! {
    static ref WORD_START: Regex = Regex::new(r"\b\w").unwrap();
}

/// Format a raw set code for display.
///
/// `None` or an empty code yields `"Unknown Set"`.
pub fn format_set_name(code: Option<&str>) -> String {
    let code = match code {
        Some(c) if !c.is_empty() => c,
        _ => return config::UNKNOWN_SET.to_string(),
    };

    if let Some(name) = lookup(code) {
        return name.to_string();
    }
    if is_known_label(code) {
        return code.to_string();
    }

    let spaced = code.to_lowercase().replace('_', " ");
    WORD_START
        .replace_all(&spaced, |caps: &regex::Captures| caps[0].to_uppercase())
        .into_owned()
}

/// Display name for a set code in the fixed table, if any.
pub fn lookup(code: &str) -> Option<&'static str> {
    SET_NAMES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

fn is_known_label(name: &str) -> bool {
    SET_NAMES.iter().any(|(_, label)| *label == name)
}
