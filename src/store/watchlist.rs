// src/store/watchlist.rs

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::errors::{PagewatchError, Result};
use crate::fs::FileSystem;
use crate::store::storage_error;

/// Result of [`WatchlistStore::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

/// Result of [`WatchlistStore::remove`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotPresent,
}

/// Ordered set of watched URLs persisted as one URL per line.
///
/// Nothing is cached: `list` always reads the file, so a running poll loop
/// picks up edits made by another process on its next cycle.
#[derive(Clone)]
pub struct WatchlistStore {
    path: PathBuf,
    fs: Arc<dyn FileSystem>,
}

impl fmt::Debug for WatchlistStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WatchlistStore")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl WatchlistStore {
    pub fn new(path: impl Into<PathBuf>, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            path: path.into(),
            fs,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current watchlist in file order. A missing file is an empty list.
    pub fn list(&self) -> Result<Vec<String>> {
        let contents = self.fs.read_to_string(&self.path).map_err(storage_error)?;
        Ok(contents.as_deref().map(parse_watchlist).unwrap_or_default())
    }

    /// Append `url` unless it is already watched.
    pub fn add(&self, url: &str) -> Result<AddOutcome> {
        let url = normalize_identifier(url)?;
        let mut urls = self.list()?;

        if urls.iter().any(|u| u == url) {
            debug!(url, "already in watchlist");
            return Ok(AddOutcome::AlreadyPresent);
        }

        urls.push(url.to_string());
        self.persist(&urls)?;
        info!(url, "added to watchlist");
        Ok(AddOutcome::Added)
    }

    /// Remove `url` if it is watched.
    pub fn remove(&self, url: &str) -> Result<RemoveOutcome> {
        let url = url.trim();
        let mut urls = self.list()?;
        let before = urls.len();
        urls.retain(|u| u != url);

        if urls.len() == before {
            debug!(url, "not in watchlist");
            return Ok(RemoveOutcome::NotPresent);
        }

        self.persist(&urls)?;
        info!(url, "removed from watchlist");
        Ok(RemoveOutcome::Removed)
    }

    fn persist(&self, urls: &[String]) -> Result<()> {
        let mut out = String::new();
        for url in urls {
            out.push_str(url);
            out.push('\n');
        }
        self.fs
            .write_atomic(&self.path, out.as_bytes())
            .map_err(storage_error)
    }
}

/// One URL per line; whitespace is trimmed and blank lines are skipped.
/// Duplicates are kept as-is; de-duplication happens in `add`.
fn parse_watchlist(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Identifiers are stored one per line, so they cannot be empty or contain
/// whitespace.
fn normalize_identifier(url: &str) -> Result<&str> {
    let url = url.trim();
    if url.is_empty() {
        return Err(PagewatchError::ConfigError(
            "watched resource must not be empty".to_string(),
        ));
    }
    if url.chars().any(char::is_whitespace) {
        return Err(PagewatchError::ConfigError(format!(
            "watched resource must not contain whitespace: {url:?}"
        )));
    }
    Ok(url)
}
