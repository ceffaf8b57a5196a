//! Deck code decoding seam.
//!
//! Decoding the binary deck string format is left to an external codec.
//! [`CommandDecoder`] talks to one over a process boundary; any closure with
//! the right signature can stand in for it.

use crate::error::{DeckInfoError, Result};
use crate::models::DecodedDeck;
use std::ffi::OsString;
use std::process::Command;
use tracing::debug;

/// Turns a canonical deck code into heroes, card counts and format.
pub trait DeckDecoder {
    fn decode(&self, code: &str) -> Result<DecodedDeck>;
}

impl<F> DeckDecoder for F
where
    F: Fn(&str) -> Result<DecodedDeck>,
{
    fn decode(&self, code: &str) -> Result<DecodedDeck> {
        self(code)
    }
}

// ---------------------------------------------------------------------------
// CommandDecoder
// ---------------------------------------------------------------------------

/// Runs an external codec program once per deck code.
///
/// The program is invoked as `program [args...] <code>` and must print the
/// decoded deck as JSON on stdout, e.g. a Node script wrapping the
/// `deckstrings` package:
///
/// ```text
/// console.log(JSON.stringify(require("deckstrings").decode(process.argv[2])))
/// ```
#[derive(Debug, Clone)]
pub struct CommandDecoder {
    program: OsString,
    args: Vec<OsString>,
}

impl CommandDecoder {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append an argument passed before the deck code.
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl DeckDecoder for CommandDecoder {
    fn decode(&self, code: &str) -> Result<DecodedDeck> {
        debug!(program = ?self.program, "running deck decoder");
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(code)
            .output()
            .map_err(|e| {
                DeckInfoError::DecodeFailure(format!(
                    "could not run decoder {:?}: {}",
                    self.program, e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DeckInfoError::DecodeFailure(format!(
                "decoder exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        serde_json::from_slice(&output.stdout).map_err(|e| {
            DeckInfoError::DecodeFailure(format!("decoder output is not a decoded deck: {}", e))
        })
    }
}
