//! Temporary CSV files.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A CSV file inside its own temporary directory.
///
/// The directory and everything in it are removed on drop.
pub struct CsvFile {
    dir: TempDir,
    path: PathBuf,
}

impl CsvFile {
    /// A path that does not exist yet.
    pub fn missing() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("displays.csv");
        Self { dir, path }
    }

    /// A file seeded with `text`.
    pub fn with_contents(text: &str) -> Self {
        let file = Self::missing();
        fs::write(&file.path, text).expect("seed csv file");
        file
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Current file text.
    pub fn contents(&self) -> String {
        fs::read_to_string(&self.path).expect("read csv file")
    }

    /// Current file lines, without terminators.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    /// Number of entries in the containing directory.
    pub fn dir_entries(&self) -> usize {
        fs::read_dir(self.dir.path()).expect("list temp dir").count()
    }
}
