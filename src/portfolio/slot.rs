// src/portfolio/slot.rs
//! Storage slot seam for the portfolio store. The whole store lives in one
//! named slot holding one JSON document, mirroring a browser storage key.

use std::path::PathBuf;
use std::sync::Mutex;

pub trait SnapshotSlot: Send + Sync {
    /// Current slot contents. `Ok(None)` means the slot has never been
    /// written; an `Err` means the slot exists but could not be read and
    /// must not be rewritten from scratch.
    fn read(&self) -> std::io::Result<Option<String>>;

    /// Replace the slot contents wholesale.
    fn write(&self, contents: &str) -> std::io::Result<()>;
}

/// One JSON file on disk.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SnapshotSlot for FileSlot {
    fn read(&self) -> std::io::Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, contents: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, contents)
    }
}

/// In-memory slot for tests and ephemeral use.
#[derive(Default)]
pub struct MemorySlot {
    cell: Mutex<Option<String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the slot with raw contents, bypassing the store. Used by tests
    /// to simulate corruption.
    pub fn seed(&self, contents: &str) {
        *self.cell.lock().unwrap() = Some(contents.to_string());
    }
}

impl SnapshotSlot for MemorySlot {
    fn read(&self) -> std::io::Result<Option<String>> {
        Ok(self.cell.lock().unwrap().clone())
    }

    fn write(&self, contents: &str) -> std::io::Result<()> {
        *self.cell.lock().unwrap() = Some(contents.to_string());
        Ok(())
    }
}
