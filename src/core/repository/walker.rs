//! File system walker with pattern-based filtering.
//!
//! Traverses a repository root and filters entries using glob
//! exclude patterns. Handles errors gracefully (permission denied,
//! etc.) without crashing.

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::error::{GatewayError, Result};

/// An entry found while walking a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedEntry {
    /// Absolute path on disk
    pub path: PathBuf,

    /// Root-relative path, `/`-separated
    pub relative: String,

    pub is_dir: bool,

    /// Regular file (not a directory, symlink, FIFO, socket or device)
    pub is_file: bool,

    /// Size in bytes (0 for directories)
    pub size: u64,
}

/// File system walker with pattern-based filtering
pub struct FileWalker {
    /// Patterns to exclude (e.g., "**/target/**", "**/node_modules/**")
    exclude_patterns: Vec<Pattern>,

    /// Maximum file size in bytes for content scans
    max_file_size_bytes: u64,
}

impl FileWalker {
    /// Create a new file walker
    ///
    /// # Arguments
    ///
    /// * `exclude_patterns` - Glob patterns matched against root-relative paths
    /// * `max_file_size_mb` - Files larger than this are skipped by [`FileWalker::collect_files`]
    ///
    /// # Returns
    ///
    /// A new `FileWalker` instance or an error if patterns are
    /// invalid
    pub fn new(exclude_patterns: &[String], max_file_size_mb: usize) -> Result<Self> {
        let exclude = exclude_patterns
            .iter()
            .map(|p| {
                Pattern::new(p).map_err(|e| {
                    GatewayError::ConfigError(format!("Invalid exclude pattern '{p}': {e}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            exclude_patterns: exclude,
            max_file_size_bytes: (max_file_size_mb as u64) * 1024 * 1024,
        })
    }

    /// Walk every file and directory below `root` (the root itself is
    /// not returned)
    pub fn walk(&self, root: &Path) -> Result<Vec<WalkedEntry>> {
        let mut entries = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| self.should_process_entry(e, root))
        {
            match entry {
                Ok(entry) => {
                    if entry.path() == root {
                        continue;
                    }

                    let is_dir = entry.file_type().is_dir();
                    let is_file = entry.file_type().is_file();
                    let relative = relative_path(entry.path(), root);
                    if !is_dir && self.is_excluded(&relative) {
                        continue;
                    }

                    let size = if is_dir {
                        0
                    } else {
                        entry.metadata().map(|m| m.len()).unwrap_or(0)
                    };

                    entries.push(WalkedEntry {
                        path: entry.path().to_path_buf(),
                        relative,
                        is_dir,
                        is_file,
                        size,
                    });
                }
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                    // Continue walking despite errors
                }
            }
        }

        Ok(entries)
    }

    /// Collect regular files small enough for a content scan
    ///
    /// Symlinks and special files are never returned, so a scan cannot
    /// read outside the root or block opening a FIFO.
    pub fn collect_files(&self, root: &Path) -> Result<Vec<WalkedEntry>> {
        let files = self
            .walk(root)?
            .into_iter()
            .filter(|e| {
                if !e.is_file && !e.is_dir {
                    tracing::debug!("Skipping non-regular file: {:?}", e.path);
                }
                e.is_file
            })
            .filter(|e| {
                if e.size > self.max_file_size_bytes {
                    tracing::debug!("Skipping large file: {:?} ({} bytes)", e.path, e.size);
                    return false;
                }
                true
            })
            .collect();

        Ok(files)
    }

    /// Determine if a directory entry should be descended into
    ///
    /// Filters out hidden directories and excluded directory trees.
    /// Never filters the root directory itself.
    fn should_process_entry(&self, entry: &DirEntry, root: &Path) -> bool {
        let path = entry.path();

        if path == root {
            return true;
        }

        if !entry.file_type().is_dir() {
            return true;
        }

        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.starts_with('.') {
                return false;
            }
        }

        let relative = relative_path(path, root);
        if self.is_excluded(&relative) || self.is_excluded(&format!("{relative}/")) {
            tracing::debug!("Skipping excluded directory: {:?}", path);
            return false;
        }

        true
    }

    fn is_excluded(&self, relative: &str) -> bool {
        self.exclude_patterns.iter().any(|p| p.matches(relative))
    }
}

/// Root-relative, `/`-separated form of `path`
pub fn relative_path(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
