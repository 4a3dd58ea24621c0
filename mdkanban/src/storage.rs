//! Storage backends for board text
//!
//! A board lives at one storage location. The [`BoardStorage`] port reads and
//! writes that location's whole text; stores call `write` synchronously after
//! every mutation.

use crate::error::{KanbanError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Read/write access to one board location
pub trait BoardStorage: Send + Sync {
    /// The location, used in errors and logs
    fn location(&self) -> &Path;

    /// Read the full board text. A missing location is an error.
    fn read(&self) -> Result<String>;

    /// Replace the full board text
    fn write(&self, content: &str) -> Result<()>;
}

impl<S: BoardStorage + ?Sized> BoardStorage for Box<S> {
    fn location(&self) -> &Path {
        (**self).location()
    }

    fn read(&self) -> Result<String> {
        (**self).read()
    }

    fn write(&self, content: &str) -> Result<()> {
        (**self).write(content)
    }
}

/// A board stored as a Markdown file
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create storage for the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling temp file used for the write-then-rename
    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "board".to_string());
        self.path.with_file_name(format!(".{name}.tmp"))
    }
}

impl BoardStorage for FileStorage {
    fn location(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| KanbanError::read(&self.path, e))
    }

    fn write(&self, content: &str) -> Result<()> {
        // Write to temp file in same directory, then rename over the target
        let temp_path = self.temp_path();
        let result = fs::write(&temp_path, content).and_then(|()| fs::rename(&temp_path, &self.path));
        if result.is_err() {
            let _ = fs::remove_file(&temp_path);
        }
        result.map_err(|e| KanbanError::write(&self.path, e))
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    content: Option<String>,
    fail_writes: bool,
    writes: usize,
}

/// In-memory board storage.
///
/// Clones share the same underlying text, so a test can keep a handle while a
/// store owns another. Writes can be made to fail to exercise error paths.
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    label: PathBuf,
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStorage {
    /// Storage holding the given text
    pub fn new(content: impl Into<String>) -> Self {
        let storage = Self::missing();
        storage.lock().content = Some(content.into());
        storage
    }

    /// Storage with nothing at the location yet; reads fail as not found
    pub fn missing() -> Self {
        Self {
            label: PathBuf::from("memory"),
            state: Arc::new(Mutex::new(MemoryState::default())),
        }
    }

    /// Current text, if any
    pub fn content(&self) -> Option<String> {
        self.lock().content.clone()
    }

    /// Replace the text behind the store's back, like an external editor would
    pub fn set_content(&self, content: impl Into<String>) {
        self.lock().content = Some(content.into());
    }

    /// Make subsequent writes fail (or succeed again)
    pub fn fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.lock().writes
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl BoardStorage for MemoryStorage {
    fn location(&self) -> &Path {
        &self.label
    }

    fn read(&self) -> Result<String> {
        self.lock()
            .content
            .clone()
            .ok_or_else(|| KanbanError::read(&self.label, io::ErrorKind::NotFound.into()))
    }

    fn write(&self, content: &str) -> Result<()> {
        let mut state = self.lock();
        if state.fail_writes {
            return Err(KanbanError::write(
                &self.label,
                io::Error::new(io::ErrorKind::PermissionDenied, "writes are disabled"),
            ));
        }
        state.content = Some(content.to_string());
        state.writes += 1;
        Ok(())
    }
}
