use super::FileSystem;
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

/// In-memory filesystem for tests.
///
/// Writes can be made to fail on demand to exercise storage error paths; a
/// failed write leaves the previous contents untouched, like a crash before
/// the rename in `RealFileSystem::write_atomic`.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
    fail_writes: Arc<AtomicBool>,
    writes: Arc<AtomicUsize>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        if let Ok(mut files) = self.lock() {
            files.insert(path.as_ref().to_path_buf(), content.into());
        }
    }

    /// Contents of a file as a string, if present.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        let files = self.lock().ok()?;
        files
            .get(path.as_ref())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Make every subsequent `write_atomic` fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<PathBuf, Vec<u8>>>> {
        self.files
            .lock()
            .map_err(|_| anyhow!("mock filesystem lock poisoned"))
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<Option<String>> {
        let files = self.lock()?;
        match files.get(path) {
            Some(content) => String::from_utf8(content.clone())
                .map(Some)
                .map_err(|e| anyhow!("Invalid UTF-8: {}", e)),
            None => Ok(None),
        }
    }

    fn write_atomic(&self, path: &Path, contents: &[u8]) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(anyhow!("simulated write failure for {:?}", path));
        }
        self.lock()?.insert(path.to_path_buf(), contents.to_vec());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        self.lock()?.remove(path);
        Ok(())
    }
}
