//! Hearthstone deck info SDK for Rust.
//!
//! Turns a deck code, or a deck list copied from HSReplay, into a report:
//! sorted card list, rarities, mana curve, dust cost and a rule-based
//! archetype analysis. Card metadata comes from the HearthstoneJSON
//! collectible catalog, downloaded once and cached locally. Decoding the
//! deck string itself is delegated to an external codec via
//! [`DeckDecoder`].
//!
//! # Quick start
//!
//! ```no_run
//! use hsdeck_info::{CommandDecoder, DeckInfo};
//!
//! let info = DeckInfo::builder().build().unwrap();
//! let decoder = CommandDecoder::new("node").arg("decode-deck.js");
//!
//! let report = info.report("AAECAR8GxwPJBLsFmQfZB/oIDI0BqAK1A+sEkgXtBg==", &decoder).unwrap();
//! println!("{}", report);
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod analysis;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod decoder;
pub mod error;
pub mod heroes;
pub mod models;
pub mod normalizer;
pub mod report;
pub mod sets;
pub mod stats;

#[cfg(feature = "async")]
pub use async_client::AsyncDeckInfo;
pub use analysis::{Analysis, Archetype};
pub use cache::CacheManager;
pub use catalog::Catalog;
pub use decoder::{CommandDecoder, DeckDecoder};
pub use error::{DeckInfoError, Result};
pub use report::DeckReport;
pub use stats::DeckStatistics;

use std::cell::{Ref, RefCell};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

// ---------------------------------------------------------------------------
// DeckInfoBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`DeckInfo`] client.
///
/// Use [`DeckInfo::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](DeckInfoBuilder::build).
#[derive(Debug, Clone)]
pub struct DeckInfoBuilder {
    cache_dir: Option<PathBuf>,
    offline: bool,
    timeout: Duration,
    locale: String,
    catalog_path: Option<PathBuf>,
}

impl Default for DeckInfoBuilder {
    fn default() -> Self {
        Self {
            cache_dir: None,
            offline: false,
            timeout: Duration::from_secs(120),
            locale: config::DEFAULT_LOCALE.to_string(),
            catalog_path: None,
        }
    }
}

impl DeckInfoBuilder {
    /// Set a custom cache directory.
    ///
    /// If not set, the platform-appropriate default cache directory is used
    /// (e.g. `~/.cache/hsdeck-info` on Linux).
    pub fn cache_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.cache_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Enable or disable offline mode.
    ///
    /// When offline, the catalog is never downloaded; only a previously
    /// cached copy is used. Defaults to `false`.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Set the HTTP request timeout for catalog downloads.
    ///
    /// Defaults to 120 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Catalog locale (`enUS`, `deDE`, ...). Defaults to `enUS`.
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Read the catalog from a local `.json` / `.json.gz` file instead of
    /// the download cache.
    pub fn catalog_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.catalog_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Build the client.
    ///
    /// Creates the cache directory but does **not** download anything; the
    /// catalog is fetched lazily on first use.
    pub fn build(self) -> Result<DeckInfo> {
        if self.locale.is_empty() || !self.locale.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DeckInfoError::InvalidArgument(format!(
                "invalid locale '{}'",
                self.locale
            )));
        }
        let cache = CacheManager::new(self.cache_dir, self.offline, self.timeout)?;
        Ok(DeckInfo {
            cache: RefCell::new(cache),
            locale: self.locale,
            catalog_path: self.catalog_path,
            catalog: RefCell::new(None),
        })
    }
}

// ---------------------------------------------------------------------------
// DeckInfo
// ---------------------------------------------------------------------------

/// The main entry point: runs deck submissions through the full pipeline.
///
/// The catalog is loaded on first use and kept for the lifetime of the
/// client. Every [`report`](DeckInfo::report) call is otherwise independent.
pub struct DeckInfo {
    cache: RefCell<CacheManager>,
    locale: String,
    catalog_path: Option<PathBuf>,
    catalog: RefCell<Option<Catalog>>,
}

impl DeckInfo {
    /// Create a new builder for configuring the client.
    pub fn builder() -> DeckInfoBuilder {
        DeckInfoBuilder::default()
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The card catalog, loading it on first access.
    pub fn catalog(&self) -> Result<Ref<'_, Catalog>> {
        if self.catalog.borrow().is_none() {
            let catalog = match &self.catalog_path {
                Some(path) => {
                    debug!(path = %path.display(), "loading local catalog");
                    Catalog::from_path(path)?
                }
                None => {
                    let value = self.cache.borrow_mut().load_catalog(&self.locale)?;
                    Catalog::from_value(value)?
                }
            };
            *self.catalog.borrow_mut() = Some(catalog);
        }
        Ref::filter_map(self.catalog.borrow(), |c| c.as_ref())
            .map_err(|_| DeckInfoError::NotFound("card catalog is not loaded".into()))
    }

    /// Build the full report for one deck submission.
    ///
    /// Steps run in order and the first failure aborts the submission:
    /// normalize the text, decode the code, load the catalog, then resolve,
    /// aggregate and analyse.
    pub fn report<D: DeckDecoder + ?Sized>(&self, input: &str, decoder: &D) -> Result<DeckReport> {
        let reference = normalizer::normalize(input)?;
        let decoded = decoder.decode(&reference.code)?;
        debug!(
            heroes = ?decoded.heroes,
            cards = decoded.cards.len(),
            format = decoded.format,
            "decoded deck"
        );
        let catalog = self.catalog()?;
        Ok(DeckReport::build(reference, &decoded, &catalog))
    }

    /// Check for a newer catalog build and drop the cache if stale.
    ///
    /// Returns `true` if the cache was cleared (the next report downloads
    /// a fresh catalog). Always `false` offline or when a local catalog
    /// file is used.
    pub fn refresh(&self) -> Result<bool> {
        if self.catalog_path.is_some() || self.cache.borrow().offline {
            return Ok(false);
        }
        let stale = self.cache.borrow_mut().is_stale(&self.locale)?;
        if stale {
            self.cache.borrow().clear()?;
            *self.catalog.borrow_mut() = None;
            tracing::info!("Card catalog was stale; cache cleared");
        }
        Ok(stale)
    }

    /// Return a reference to the underlying cache manager.
    pub fn cache(&self) -> Ref<'_, CacheManager> {
        self.cache.borrow()
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for DeckInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.cache.borrow();
        let loaded = self.catalog.borrow().as_ref().map(Catalog::len);
        write!(
            f,
            "DeckInfo(cache_dir={}, locale={}, offline={}, catalog_cards={})",
            cache.cache_dir.display(),
            self.locale,
            cache.offline,
            loaded.map_or_else(|| "not loaded".to_string(), |n| n.to_string())
        )
    }
}
