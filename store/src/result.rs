//! Single-row write modes and outcomes.

use std::fmt;

/// How a single-row write treats the target key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WriteMode {
    /// Rewrite the existing row; it must exist.
    Update,
    /// Add a new row; the key must not exist yet.
    Append,
}

impl fmt::Display for WriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteMode::Update => write!(f, "update"),
            WriteMode::Append => write!(f, "append"),
        }
    }
}

/// Outcome of a successful single-row write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// An existing row was rewritten at this 1-based file line.
    Updated { line: usize },
    /// A new row was added at this 1-based file line.
    Appended { line: usize },
}

impl WriteOutcome {
    /// The 1-based file line that was written.
    pub fn line(&self) -> usize {
        match self {
            WriteOutcome::Updated { line } | WriteOutcome::Appended { line } => *line,
        }
    }

    pub fn is_update(&self) -> bool {
        matches!(self, WriteOutcome::Updated { .. })
    }

    pub fn is_append(&self) -> bool {
        matches!(self, WriteOutcome::Appended { .. })
    }
}
