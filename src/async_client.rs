//! Async wrapper around [`DeckInfo`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all client operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//!
//! Deck submissions are last-submission-wins: when a newer
//! [`report`](AsyncDeckInfo::report) call has started, an older one that
//! finishes afterwards returns [`DeckInfoError::Superseded`] instead of
//! overwriting the newer result.
//!
//! # Example
//!
//! ```no_run
//! use hsdeck_info::{AsyncDeckInfo, CommandDecoder, DeckInfo};
//!
//! #[tokio::main]
//! async fn main() {
//!     let info = AsyncDeckInfo::new(DeckInfo::builder()).await.unwrap();
//!     let decoder = CommandDecoder::new("node").arg("decode-deck.js");
//!
//!     let report = info.report("AAECAR8GxwPJBLsFmQfZB/oIDI0BqAK1A+sEkgXtBg==", decoder).await.unwrap();
//!     println!("{}", report);
//! }
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::error::{DeckInfoError, Result};
use crate::{DeckDecoder, DeckInfo, DeckInfoBuilder, DeckReport};

/// Async wrapper around [`DeckInfo`].
///
/// The underlying [`DeckInfo`] is protected by a [`Mutex`] since it uses
/// `RefCell` internally. Cloning is cheap and shares the same client and
/// submission counter.
#[derive(Clone)]
pub struct AsyncDeckInfo {
    inner: Arc<Mutex<DeckInfo>>,
    generation: Arc<AtomicU64>,
}

impl AsyncDeckInfo {
    /// Build the client on the blocking thread pool.
    pub async fn new(builder: DeckInfoBuilder) -> Result<Self> {
        let info = tokio::task::spawn_blocking(move || builder.build())
            .await
            .map_err(|e| DeckInfoError::InvalidArgument(format!("Task join error: {e}")))??;
        Ok(Self {
            inner: Arc::new(Mutex::new(info)),
            generation: Arc::new(AtomicU64::new(0)),
        })
    }

    /// Run a sync client operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&DeckInfo) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let info = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = info
                .lock()
                .map_err(|_| DeckInfoError::InvalidArgument("client lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| DeckInfoError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Build the report for a deck submission.
    ///
    /// Returns [`DeckInfoError::Superseded`] if another submission started
    /// while this one was waiting or running.
    pub async fn report<D>(&self, input: impl Into<String>, decoder: D) -> Result<DeckReport>
    where
        D: DeckDecoder + Send + 'static,
    {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let latest = self.generation.clone();
        let input = input.into();

        let report = self
            .run(move |info| {
                if latest.load(Ordering::SeqCst) != generation {
                    return Err(DeckInfoError::Superseded);
                }
                info.report(&input, &decoder)
            })
            .await?;

        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(generation, "discarding superseded deck report");
            return Err(DeckInfoError::Superseded);
        }
        Ok(report)
    }

    /// Check for a newer catalog build and drop the cache if stale.
    pub async fn refresh(&self) -> Result<bool> {
        self.run(|info| info.refresh()).await
    }

    /// Number of cards in the catalog, loading it if necessary.
    pub async fn catalog_len(&self) -> Result<usize> {
        self.run(|info| Ok(info.catalog()?.len())).await
    }
}
