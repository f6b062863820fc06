//! Locally persisted configuration blob.
//!
//! A single named key holds a JSON-serialized configuration. It is written by
//! save, cleared by reset and read once at load time. File writes go through
//! `atomicwrites`, so the blob is either fully replaced or left as it was.

use crate::error::{Result, StoreError};
use atomicwrites::{AllowOverwrite, AtomicFile};
use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Name of the persisted key.
pub const STORAGE_KEY: &str = "siteConfig";

/// Directory name under the platform data dir.
pub const STATE_DIR: &str = "folio";

/// Storage for the locally persisted configuration blob.
pub trait PersistedStore: Send + Sync {
    /// Read the raw blob, `None` when nothing is persisted.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the blob. Last write wins.
    fn write(&self, value: &Value) -> Result<()>;

    /// Remove the blob. Clearing an empty store is not an error.
    fn clear(&self) -> Result<()>;
}

/// Default directory for the file-backed store.
///
/// Returns `~/.local/share/folio` on Linux.
pub fn default_state_dir() -> anyhow::Result<PathBuf> {
    let base = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data dir"))?;
    Ok(base.join(STATE_DIR))
}

/// File-backed store keeping the blob at `<dir>/siteConfig.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(format!("{STORAGE_KEY}.json")),
        }
    }

    /// Store under [`default_state_dir`].
    pub fn in_default_dir() -> anyhow::Result<Self> {
        Ok(Self::new(&default_state_dir()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PersistedStore for FileStore {
    fn read(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn write(&self, value: &Value) -> Result<()> {
        write_json_file(&self.path, value)?;
        tracing::debug!("persisted config to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Clear {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

/// Write `value` to `path` as pretty JSON with a trailing newline.
///
/// Missing parent directories are created. The file is replaced atomically.
pub fn write_json_file(path: &Path, value: &Value) -> Result<()> {
    let io_err = |source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }

    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    AtomicFile::new(path, AllowOverwrite)
        .write(|f| f.write_all(json.as_bytes()))
        .map_err(|e| match e {
            atomicwrites::Error::Internal(source) | atomicwrites::Error::User(source) => {
                io_err(source)
            }
        })
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blob: Mutex<Option<String>>,
}

impl MemoryStore {
    /// Store pre-filled with a raw blob, which need not be valid JSON.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            blob: Mutex::new(Some(raw.into())),
        }
    }
}

impl PersistedStore for MemoryStore {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.blob.lock().map_err(|_| StoreError::Poisoned)?.clone())
    }

    fn write(&self, value: &Value) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        *self.blob.lock().map_err(|_| StoreError::Poisoned)? = Some(raw);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.blob.lock().map_err(|_| StoreError::Poisoned)? = None;
        Ok(())
    }
}
