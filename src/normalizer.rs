//! Deck text normalization.
//!
//! Accepts either a bare deck code or a deck-list block as exported by
//! HSReplay and similar sites:
//!
//! ```text
//! ### Big Spell Mage
//! # Class: Mage
//! # Format: Standard
//! #
//! # 2x (1) Arcane Missiles
//! # ...
//! #
//! AAECAf0EBu...
//! #
//! ```
//!
//! The same block pasted into a single-line field (newlines stripped) is
//! accepted too.

use crate::error::{DeckInfoError, Result};
use crate::models::DeckReference;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

lazy_static! {
    /// A deck code token anywhere in the text.
    static ref DECK_CODE: Regex = Regex::new(r"AAECA[A-Za-z0-9+/=]+").unwrap();

    /// `### title`, `# Class: ..`, `# Format: ..`, then at least one more section.
    static ref DECK_LIST: Regex = Regex::new(
        r"^###[ \t]*(.*?)\s*#\s*Class:\s*(\w+(?: \w+)?)(?s:.*?)#\s*Format:\s*(\w+(?: \w+)?)(?s:.*?)#(?s:.+)$"
    )
    .unwrap();
}

/// Extract the canonical deck code and any metadata from user input.
///
/// Returns [`DeckInfoError::InvalidInput`] when no deck code can be found.
pub fn normalize(input: &str) -> Result<DeckReference> {
    let text = input.trim();

    if let Some(caps) = DECK_LIST.captures(text) {
        let code = find_code(text).ok_or_else(|| {
            DeckInfoError::InvalidInput("deck list does not contain a deck code".to_string())
        })?;
        let field = |i: usize| {
            caps.get(i)
                .map(|m| m.as_str().trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        let reference = DeckReference {
            code: code.to_string(),
            name: field(1),
            class: field(2),
            format: field(3),
        };
        debug!(code = %reference.code, name = ?reference.name, "parsed deck list");
        return Ok(reference);
    }

    match find_code(text) {
        Some(code) => {
            debug!(code, "parsed bare deck code");
            Ok(DeckReference::bare(code))
        }
        None => Err(DeckInfoError::InvalidInput(
            "no deck code found in input".to_string(),
        )),
    }
}

/// First deck code token in `text`, if any.
pub fn find_code(text: &str) -> Option<&str> {
    DECK_CODE.find(text).map(|m| m.as_str())
}
