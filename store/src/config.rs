//! Configuration for file-backed storage.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings for [`FileStorage`](crate::FileStorage).
///
/// Deserializable so a host application can embed it in its own config file;
/// missing keys take their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Copy the source into a scratch file before reading it.
    pub scratch_reads: bool,
    /// Directory for scratch copies (system temp dir when unset).
    pub scratch_dir: Option<PathBuf>,
    /// Write to a temporary sibling file and persist it over the destination.
    pub atomic_writes: bool,
    /// Create missing parent directories when writing.
    pub create_parent_dirs: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            scratch_reads: true,
            scratch_dir: None,
            atomic_writes: true,
            create_parent_dirs: true,
        }
    }
}

impl StoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scratch_reads(mut self, enabled: bool) -> Self {
        self.scratch_reads = enabled;
        self
    }

    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = Some(dir.into());
        self
    }

    pub fn with_atomic_writes(mut self, enabled: bool) -> Self {
        self.atomic_writes = enabled;
        self
    }

    pub fn with_create_parent_dirs(mut self, enabled: bool) -> Self {
        self.create_parent_dirs = enabled;
        self
    }

    /// Plain read and write straight to the destination, nothing else.
    pub fn direct() -> Self {
        Self {
            scratch_reads: false,
            scratch_dir: None,
            atomic_writes: false,
            create_parent_dirs: false,
        }
    }
}
