//! Whole-file storage backends.
//!
//! The engine never touches the filesystem directly; it reads and writes
//! complete documents through a [`Storage`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::StoreConfig;

/// Whole-file read/write capability.
pub trait Storage {
    /// Whether a file exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Read the complete file.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Replace the file's contents, creating it if needed.
    fn write_string(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// In-memory storage for testing and embedding.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    files: RefCell<HashMap<PathBuf, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file.
    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files.borrow_mut().insert(path.into(), contents.into());
    }

    /// Current contents of a file.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    pub fn remove(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow_mut().remove(path.as_ref())
    }
}

impl Storage for MemoryStorage {
    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file in memory storage"))
    }

    fn write_string(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}

/// OS file storage.
///
/// Reads go through a scratch copy so a writer replacing the file mid-read
/// cannot hand us half a document. Writes go to a temporary sibling that is
/// persisted over the destination, so a failed write leaves the old file.
/// Neither is a lock: callers must still serialize access to one path.
#[derive(Debug, Clone, Default)]
pub struct FileStorage {
    config: StoreConfig,
}

impl FileStorage {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn scratch_file(&self) -> io::Result<tempfile::NamedTempFile> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(".csvbind-").suffix(".csv");
        match &self.config.scratch_dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
    }
}

/// Parent directory of a file path; `.` for bare file names.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

impl Storage for FileStorage {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        if !self.config.scratch_reads {
            return fs::read_to_string(path);
        }

        let scratch = self.scratch_file()?;
        fs::copy(path, scratch.path())?;
        debug!(
            path = %path.display(),
            scratch = %scratch.path().display(),
            "copied csv to scratch file"
        );
        fs::read_to_string(scratch.path())
    }

    fn write_string(&self, path: &Path, contents: &str) -> io::Result<()> {
        let dir = parent_dir(path);
        if self.config.create_parent_dirs && !dir.exists() {
            fs::create_dir_all(dir)?;
        }

        if !self.config.atomic_writes {
            return fs::write(path, contents);
        }

        let mut temp = tempfile::Builder::new()
            .prefix(".csvbind-")
            .suffix(".tmp")
            .tempfile_in(dir)?;
        temp.write_all(contents.as_bytes())?;
        // The temp file is created owner-only; keep the destination's mode.
        if let Ok(metadata) = fs::metadata(path) {
            fs::set_permissions(temp.path(), metadata.permissions())?;
        }
        temp.as_file().sync_all()?;
        temp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}
