//! Checkers that inspect the filesystem.

use std::path::PathBuf;

use serde::Deserialize;
use serde_json::{json, Value};

use super::{CheckFuture, Checker, CheckerError};

/// Passes when `path` exists.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileExists {
    /// The path to look for.
    pub path: PathBuf,
}

impl FileExists {
    /// Discriminator for this kind.
    pub const KIND: &'static str = "file_exists";
}

impl Checker for FileExists {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn run(&self) -> CheckFuture<'_> {
        Box::pin(async move {
            tokio::fs::try_exists(&self.path)
                .await
                .map_err(|source| CheckerError::Io { path: self.path.clone(), source })
        })
    }

    fn as_json(&self) -> Value {
        json!({"type": Self::KIND, "path": self.path})
    }
}

/// Passes when the text of the file at `path` contains `pattern`.
///
/// An unreadable or missing file makes the run fail rather than report `false`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileContains {
    /// The file to read.
    pub path: PathBuf,
    /// Substring that must appear in the file.
    pub pattern: String,
}

impl FileContains {
    /// Discriminator for this kind.
    pub const KIND: &'static str = "file_contains";
}

impl Checker for FileContains {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn run(&self) -> CheckFuture<'_> {
        Box::pin(async move {
            let contents = tokio::fs::read_to_string(&self.path)
                .await
                .map_err(|source| CheckerError::Io { path: self.path.clone(), source })?;
            Ok(contents.contains(&self.pattern))
        })
    }

    fn as_json(&self) -> Value {
        json!({"type": Self::KIND, "path": self.path, "pattern": self.pattern})
    }
}
