//! Filesystem-backed implementation of the indexing capability.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::config::RepositoryConfig;
use crate::core::error::{GatewayError, Result};
use crate::core::repository::symbols::{SymbolKind, SymbolMatcher};
use crate::core::repository::walker::FileWalker;
use crate::core::repository::{IndexFactory, RepositoryIndex};
use crate::core::types::{FileTreeEntry, SymbolUsage};

/// Opens [`LocalIndex`] instances with shared walker settings
#[derive(Debug, Clone)]
pub struct LocalIndexFactory {
    config: RepositoryConfig,
}

impl LocalIndexFactory {
    pub fn new(config: RepositoryConfig) -> Self {
        Self { config }
    }
}

impl Default for LocalIndexFactory {
    fn default() -> Self {
        Self::new(RepositoryConfig::default())
    }
}

impl IndexFactory for LocalIndexFactory {
    fn open(&self, root_path: &str) -> Result<Box<dyn RepositoryIndex>> {
        Ok(Box::new(LocalIndex::open(root_path, &self.config)?))
    }
}

/// A repository rooted at a directory on the local filesystem
pub struct LocalIndex {
    root: PathBuf,
    walker: FileWalker,
}

impl LocalIndex {
    /// Open `root_path`, which must be an existing, readable directory
    pub fn open(root_path: &str, config: &RepositoryConfig) -> Result<Self> {
        let path = Path::new(root_path);
        if !path.exists() {
            return Err(GatewayError::binding(root_path, "path does not exist"));
        }
        if !path.is_dir() {
            return Err(GatewayError::binding(root_path, "path is not a directory"));
        }

        let root = path
            .canonicalize()
            .map_err(|e| GatewayError::binding(root_path, e))?;
        fs::read_dir(&root).map_err(|e| GatewayError::binding(root_path, e))?;

        let walker = FileWalker::new(&config.exclude_patterns, config.max_file_size_mb)?;

        Ok(Self { root, walker })
    }

    /// Resolve `path` inside the root, or fail with `NotFound`
    fn resolve(&self, path: &str) -> Result<PathBuf> {
        let not_found = || GatewayError::NotFound(path.to_string());

        let candidate = self.root.join(path);
        let resolved = candidate.canonicalize().map_err(|_| not_found())?;

        if !resolved.starts_with(&self.root) || !resolved.is_file() {
            return Err(not_found());
        }

        Ok(resolved)
    }
}

impl RepositoryIndex for LocalIndex {
    fn root(&self) -> &Path {
        &self.root
    }

    fn file_tree(&self) -> Result<Vec<FileTreeEntry>> {
        let mut tree: Vec<FileTreeEntry> = self
            .walker
            .walk(&self.root)?
            .into_iter()
            .map(|e| FileTreeEntry {
                name: e
                    .path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                path: e.relative,
                is_dir: e.is_dir,
                size: e.size,
            })
            .collect();

        tree.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(tree)
    }

    fn find_symbol_usages(&self, name: &str, kind: &str) -> Result<Vec<SymbolUsage>> {
        let matcher = SymbolMatcher::new(name, SymbolKind::parse(kind))?;
        let mut usages = Vec::new();

        for file in self.walker.collect_files(&self.root)? {
            let contents = match fs::read_to_string(&file.path) {
                Ok(c) => c,
                Err(e) => {
                    tracing::debug!("Skipping unreadable file {:?}: {}", file.path, e);
                    continue;
                }
            };

            for (idx, line) in contents.lines().enumerate() {
                if let Some(m) = matcher.classify(line) {
                    usages.push(SymbolUsage {
                        file: file.relative.clone(),
                        line: idx + 1,
                        column: m.column,
                        name: name.to_string(),
                        usage: m.usage.to_string(),
                        context: line.trim().to_string(),
                    });
                }
            }
        }

        usages.sort_by(|a, b| (&a.file, a.line).cmp(&(&b.file, b.line)));
        Ok(usages)
    }

    fn file_content(&self, path: &str) -> Result<String> {
        let resolved = self.resolve(path)?;
        let bytes = fs::read(&resolved)?;

        Ok(match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        })
    }
}
