//! Bound-repository marker for the CLI
//!
//! Each CLI invocation is a fresh process, so the path bound by `init`
//! has to outlive it. The marker is a one-line state file written by
//! `init`; when no such file exists the `REPOGATE_REPO_PATH`
//! environment variable is consulted instead.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::Result;

/// Environment variable that carries the bound repository path
pub const REPO_PATH_ENV: &str = "REPOGATE_REPO_PATH";

/// Reads and writes the bound repository path between invocations
#[derive(Debug, Clone)]
pub struct PathMarker {
    file: PathBuf,
    env_override: Option<String>,
}

impl PathMarker {
    /// Marker backed only by `file`
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            env_override: None,
        }
    }

    /// Marker backed by `file`, falling back to `REPOGATE_REPO_PATH`
    pub fn from_env(file: impl Into<PathBuf>) -> Self {
        let env_override = std::env::var(REPO_PATH_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty());
        Self {
            file: file.into(),
            env_override,
        }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    /// The bound path, if any invocation in this environment ran `init`
    pub fn load(&self) -> Option<String> {
        let stored = fs::read_to_string(&self.file)
            .ok()
            .map(|contents| contents.trim().to_string())
            .filter(|path| !path.is_empty());

        stored.or_else(|| self.env_override.clone())
    }

    /// Record `root` as the bound path
    pub fn store(&self, root: &Path) -> Result<()> {
        if let Some(parent) = self.file.parent() {
            fs::create_dir_all(parent)?;
        }

        let value = root.to_string_lossy().into_owned();
        fs::write(&self.file, format!("{value}\n"))?;
        tracing::debug!("Stored repository marker {:?} -> {}", self.file, value);
        Ok(())
    }
}
