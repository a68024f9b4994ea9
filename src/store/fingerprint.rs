use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::detect::fingerprint::{resource_key, Fingerprint};
use crate::errors::Result;
use crate::fs::FileSystem;
use crate::store::storage_error;

/// Extension of the per-resource fingerprint files.
pub const FINGERPRINT_FILE_EXT: &str = "hash";

/// Abstract storage for the last-known fingerprint of each resource.
pub trait FingerprintStore: Send + Sync {
    /// `None` means the resource was never successfully fingerprinted.
    fn load(&self, url: &str) -> Result<Option<Fingerprint>>;
    /// Overwrite the slot for `url`; durable once this returns.
    fn save(&mut self, url: &str, fingerprint: &Fingerprint) -> Result<()>;
    /// Drop the slot for `url`. Forgetting an unknown resource is a no-op.
    fn forget(&mut self, url: &str) -> Result<()>;
}

/// One file per resource: `<dir>/<blake3(url)>.hash` holding the hex digest.
pub struct FileFingerprintStore {
    dir: PathBuf,
    fs: Arc<dyn FileSystem>,
}

impl fmt::Debug for FileFingerprintStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileFingerprintStore")
            .field("dir", &self.dir)
            .finish_non_exhaustive()
    }
}

impl FileFingerprintStore {
    pub fn new(dir: impl Into<PathBuf>, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            dir: dir.into(),
            fs,
        }
    }

    /// Path of the slot file for `url`.
    pub fn slot_path(&self, url: &str) -> PathBuf {
        self.dir
            .join(format!("{}.{}", resource_key(url), FINGERPRINT_FILE_EXT))
    }
}

impl FingerprintStore for FileFingerprintStore {
    fn load(&self, url: &str) -> Result<Option<Fingerprint>> {
        let path = self.slot_path(url);
        let Some(contents) = self.fs.read_to_string(&path).map_err(storage_error)? else {
            return Ok(None);
        };

        if contents.trim().is_empty() {
            return Ok(None);
        }

        match Fingerprint::from_hex(&contents) {
            Some(fp) => Ok(Some(fp)),
            None => {
                warn!(url, ?path, "ignoring unreadable fingerprint file");
                Ok(None)
            }
        }
    }

    fn save(&mut self, url: &str, fingerprint: &Fingerprint) -> Result<()> {
        let path = self.slot_path(url);
        self.fs
            .write_atomic(&path, fingerprint.as_str().as_bytes())
            .map_err(storage_error)?;
        debug!(url, fingerprint = %fingerprint, "stored fingerprint (file)");
        Ok(())
    }

    fn forget(&mut self, url: &str) -> Result<()> {
        let path = self.slot_path(url);
        self.fs.remove_file(&path).map_err(storage_error)?;
        debug!(url, ?path, "forgot fingerprint (file)");
        Ok(())
    }
}

/// Stores fingerprints in memory only.
#[derive(Debug, Default)]
pub struct MemoryFingerprintStore {
    map: HashMap<String, Fingerprint>,
}

impl MemoryFingerprintStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FingerprintStore for MemoryFingerprintStore {
    fn load(&self, url: &str) -> Result<Option<Fingerprint>> {
        Ok(self.map.get(url).cloned())
    }

    fn save(&mut self, url: &str, fingerprint: &Fingerprint) -> Result<()> {
        self.map.insert(url.to_string(), fingerprint.clone());
        debug!(url, fingerprint = %fingerprint, "stored fingerprint (memory)");
        Ok(())
    }

    fn forget(&mut self, url: &str) -> Result<()> {
        self.map.remove(url);
        Ok(())
    }
}
