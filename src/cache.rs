//! Version-aware catalog download and local file cache manager.
//!
//! Downloads the HearthstoneJSON collectible catalog and keeps it on disk.
//! The `latest` endpoint redirects to a numbered game build; that build
//! number is the cache version, and a newer build makes the cache stale.

use crate::catalog;
use crate::config;
use crate::error::{DeckInfoError, Result};
use flate2::read::GzDecoder;
use reqwest::blocking::Client;
use serde_json::Value;
use std::fs;
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Downloads and caches catalog files from HearthstoneJSON.
pub struct CacheManager {
    /// Directory where cached files are stored.
    pub cache_dir: PathBuf,
    /// If true, never touch the network (use cached files only).
    pub offline: bool,
    timeout: Duration,
    client: Option<Client>,
    remote_ver: Option<String>,
}

impl CacheManager {
    /// Create a new cache manager.
    ///
    /// If `cache_dir` is `None`, uses the platform-appropriate default cache directory.
    /// Creates the cache directory if it does not exist.
    pub fn new(cache_dir: Option<PathBuf>, offline: bool, timeout: Duration) -> Result<Self> {
        let dir = cache_dir.unwrap_or_else(config::default_cache_dir);
        fs::create_dir_all(&dir)?;
        Ok(Self {
            cache_dir: dir,
            offline,
            timeout,
            client: None,
            remote_ver: None,
        })
    }

    /// Lazy HTTP client, created on first use.
    pub fn client(&mut self) -> Result<&Client> {
        if self.client.is_none() {
            let client = Client::builder()
                .timeout(self.timeout)
                .redirect(reqwest::redirect::Policy::limited(10))
                .build()?;
            self.client = Some(client);
        }
        self.client
            .as_ref()
            .ok_or_else(|| DeckInfoError::InvalidArgument("HTTP client unavailable".into()))
    }

    fn local_version(&self) -> Option<String> {
        let version_file = self.cache_dir.join("version.txt");
        fs::read_to_string(version_file)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    fn save_version(&self, version: &str) {
        let version_file = self.cache_dir.join("version.txt");
        if let Err(e) = fs::write(&version_file, version) {
            warn!("Failed to write {}: {}", version_file.display(), e);
        }
    }

    /// Fetch the current catalog build number.
    ///
    /// Issues a HEAD request against the `latest` catalog URL and reads the
    /// build number from the redirect target. Returns `None` if offline, the
    /// API is unreachable, or no redirect happened. Cached for subsequent calls.
    pub fn remote_version(&mut self, locale: &str) -> Result<Option<String>> {
        if self.remote_ver.is_some() {
            return Ok(self.remote_ver.clone());
        }
        if self.offline {
            return Ok(None);
        }
        let client = self.client()?.clone();
        match client.head(config::catalog_url(locale)).send() {
            Ok(resp) => {
                let version = build_from_url(resp.url());
                debug!(version = ?version, "resolved remote catalog build");
                self.remote_ver = version.clone();
                Ok(version)
            }
            Err(e) => {
                warn!("Failed to fetch catalog version: {}", e);
                Ok(None)
            }
        }
    }

    /// Check if the local cache is out of date.
    ///
    /// Returns `true` if there is no local version or a newer build exists.
    /// Returns `false` if up to date or the API is unreachable.
    pub fn is_stale(&mut self, locale: &str) -> Result<bool> {
        match self.local_version() {
            None => Ok(true),
            Some(local_ver) => match self.remote_version(locale)? {
                None => Ok(false),
                Some(remote_ver) => Ok(local_ver != remote_ver),
            },
        }
    }

    /// Path of the cached catalog for `locale`.
    pub fn catalog_path(&self, locale: &str) -> PathBuf {
        self.cache_dir.join(config::catalog_file(locale))
    }

    /// Download a JSON document and store it at `dest`.
    ///
    /// The body must parse as JSON and pass `validate` before anything
    /// touches the cache. It is written to a temp file next to `dest` and
    /// persisted with a rename, so an interrupted download never leaves a
    /// partial file behind.
    fn download_json<V>(&mut self, url: &str, dest: &Path, validate: V) -> Result<Value>
    where
        V: Fn(&Value) -> Result<()>,
    {
        info!("Downloading {}", url);

        let client = self.client()?.clone();
        let resp = client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(DeckInfoError::FetchFailure(format!(
                "HTTP error! status: {}",
                status
            )));
        }
        let bytes = resp.bytes()?;
        let value: Value = serde_json::from_slice(&bytes).map_err(|e| {
            DeckInfoError::FetchFailure(format!("response is not valid JSON: {}", e))
        })?;
        validate(&value)?;

        let parent = dest.parent().unwrap_or(self.cache_dir.as_path());
        fs::create_dir_all(parent)?;
        let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
        tmp.write_all(&bytes)?;
        tmp.persist(dest).map_err(|e| DeckInfoError::Io(e.error))?;

        Ok(value)
    }

    /// Load the catalog JSON for `locale`, downloading it if missing or stale.
    ///
    /// If the cached file is corrupt it is deleted, so the next call
    /// re-downloads a fresh copy.
    pub fn load_catalog(&mut self, locale: &str) -> Result<Value> {
        let local_path = self.catalog_path(locale);

        if local_path.exists() && (self.offline || !self.is_stale(locale)?) {
            return self.read_cached(&local_path);
        }
        if self.offline {
            return Err(DeckInfoError::NotFound(format!(
                "Catalog {} not cached and offline mode is enabled",
                local_path.display()
            )));
        }

        let value = self.download_json(
            &config::catalog_url(locale),
            &local_path,
            catalog::check_shape,
        )?;
        if let Ok(Some(version)) = self.remote_version(locale) {
            self.save_version(&version);
        }
        Ok(value)
    }

    fn read_cached(&self, path: &Path) -> Result<Value> {
        let problem = match read_json_file(path) {
            Ok(value) => match catalog::check_shape(&value) {
                Ok(()) => return Ok(value),
                Err(e) => e.to_string(),
            },
            Err(DeckInfoError::Json(e)) => e.to_string(),
            Err(e) => return Err(e),
        };
        warn!("Corrupt cache file {}: {} -- removing", path.display(), problem);
        let _ = fs::remove_file(path);
        Err(DeckInfoError::NotFound(format!(
            "Cache file '{}' was corrupt and has been removed. \
             Retry to re-download. Original error: {}",
            path.file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("unknown"),
            problem
        )))
    }

    /// Remove all cached files and recreate the cache directory.
    pub fn clear(&self) -> Result<()> {
        if self.cache_dir.exists() {
            fs::remove_dir_all(&self.cache_dir)?;
            fs::create_dir_all(&self.cache_dir)?;
        }
        Ok(())
    }

    /// Close the HTTP client, if open.
    pub fn close(&mut self) {
        self.client = None;
    }
}

/// Read and parse a JSON file, decompressing `.gz` files transparently.
pub fn read_json_file(path: &Path) -> Result<Value> {
    if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        let file = fs::File::open(path)?;
        let mut decoder = BufReader::new(GzDecoder::new(BufReader::new(file)));
        let mut contents = String::new();
        decoder.read_to_string(&mut contents)?;
        Ok(serde_json::from_str(&contents)?)
    } else {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// Build number from a redirected catalog URL
/// (`.../v1/187681/enUS/cards.collectible.json` -> `"187681"`).
fn build_from_url(url: &reqwest::Url) -> Option<String> {
    let mut segments = url.path_segments()?;
    segments.find(|s| *s == "v1")?;
    segments
        .next()
        .filter(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()))
        .map(str::to_string)
}
