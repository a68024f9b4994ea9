// src/fs/mod.rs

use std::fmt::Debug;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub mod mock;

/// Abstract filesystem interface used by the durable stores.
pub trait FileSystem: Send + Sync + Debug {
    /// Read a whole file as UTF-8. `Ok(None)` when the file does not exist.
    fn read_to_string(&self, path: &Path) -> Result<Option<String>>;

    /// Replace `path` with `contents` such that a crash leaves either the old
    /// or the new contents on disk, never a partial file.
    fn write_atomic(&self, path: &Path, contents: &[u8]) -> Result<()>;

    /// Remove a file. Removing a missing file is not an error.
    fn remove_file(&self, path: &Path) -> Result<()>;
}

/// Implementation that uses `std::fs` and write-then-rename via `tempfile`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<Option<String>> {
        match fs::read_to_string(path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("reading file {:?}", path)),
        }
    }

    fn write_atomic(&self, path: &Path, contents: &[u8]) -> Result<()> {
        let dir = parent_dir(path);
        fs::create_dir_all(&dir).with_context(|| format!("creating dir {:?}", dir))?;

        // The temp file must live in the target directory so the rename stays
        // on one filesystem.
        let mut tmp = tempfile::NamedTempFile::new_in(&dir)
            .with_context(|| format!("creating temp file in {:?}", dir))?;
        tmp.write_all(contents)
            .with_context(|| format!("writing temp file for {:?}", path))?;
        tmp.as_file()
            .sync_all()
            .with_context(|| format!("syncing temp file for {:?}", path))?;
        tmp.persist(path)
            .map_err(|e| e.error)
            .with_context(|| format!("renaming temp file onto {:?}", path))?;
        sync_dir(&dir)
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("removing file {:?}", path)),
        }
    }
}

/// Flush the directory entry so the rename itself survives a crash.
#[cfg(unix)]
fn sync_dir(dir: &Path) -> Result<()> {
    fs::File::open(dir)
        .and_then(|d| d.sync_all())
        .with_context(|| format!("syncing dir {:?}", dir))
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> Result<()> {
    Ok(())
}

/// Directory that holds `path`; a bare file name resolves to ".".
fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
