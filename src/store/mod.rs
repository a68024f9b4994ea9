// src/store/mod.rs

//! Durable state: the watchlist and the last-known fingerprint per resource.
//!
//! Both stores are the only owners of state that survives a cycle; the
//! detector and scheduler re-read them every time. Every mutation is a full
//! rewrite through [`FileSystem::write_atomic`](crate::fs::FileSystem).

pub mod fingerprint;
pub mod watchlist;

pub use fingerprint::{FileFingerprintStore, FingerprintStore, MemoryFingerprintStore};
pub use watchlist::{AddOutcome, RemoveOutcome, WatchlistStore};

use crate::errors::PagewatchError;

pub(crate) fn storage_error(err: anyhow::Error) -> PagewatchError {
    PagewatchError::Storage(format!("{err:#}"))
}
