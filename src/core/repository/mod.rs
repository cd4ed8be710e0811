//! Repository indexing capability
//!
//! The gateway never parses source code itself. It talks to an
//! indexing capability through [`RepositoryIndex`], constructed for a
//! root path by an [`IndexFactory`]. [`LocalIndex`] is the filesystem
//! implementation shipped with the crate.

pub mod local;
pub mod symbols;
pub mod walker;

use std::path::Path;

use crate::core::error::Result;
use crate::core::types::{FileTreeEntry, SymbolUsage};

pub use local::{LocalIndex, LocalIndexFactory};
pub use symbols::SymbolKind;
pub use walker::FileWalker;

/// Read operations offered by an indexed repository
pub trait RepositoryIndex: Send + Sync {
    /// Canonical root directory of the repository
    fn root(&self) -> &Path;

    /// All files and directories under the root
    fn file_tree(&self) -> Result<Vec<FileTreeEntry>>;

    /// Every location where `name` appears as a symbol of kind `kind`
    ///
    /// Returns an empty vector when the symbol has no usages.
    fn find_symbol_usages(&self, name: &str, kind: &str) -> Result<Vec<SymbolUsage>>;

    /// Full text of the file at `path`, resolved relative to the root
    fn file_content(&self, path: &str) -> Result<String>;
}

/// Constructs a [`RepositoryIndex`] for a root path
pub trait IndexFactory: Send + Sync {
    /// Open the repository at `root_path`, failing with a binding error
    /// if it cannot be indexed
    fn open(&self, root_path: &str) -> Result<Box<dyn RepositoryIndex>>;
}

/// A bound repository: the root path it was opened with plus its index
pub struct RepositoryHandle {
    root_path: String,
    index: Box<dyn RepositoryIndex>,
}

impl RepositoryHandle {
    /// Bind to `root_path` through `factory`
    pub fn open(root_path: &str, factory: &dyn IndexFactory) -> Result<Self> {
        let index = factory.open(root_path)?;
        Ok(Self {
            root_path: root_path.to_string(),
            index,
        })
    }

    /// The path exactly as supplied to [`RepositoryHandle::open`]
    pub fn root_path(&self) -> &str {
        &self.root_path
    }

    /// Canonical root as resolved by the index
    pub fn canonical_root(&self) -> &Path {
        self.index.root()
    }

    pub fn get_file_tree(&self) -> Result<Vec<FileTreeEntry>> {
        self.index.file_tree()
    }

    pub fn find_symbol_usages(&self, name: &str, kind: &str) -> Result<Vec<SymbolUsage>> {
        self.index.find_symbol_usages(name, kind)
    }

    pub fn get_file_content(&self, path: &str) -> Result<String> {
        self.index.file_content(path)
    }
}

impl std::fmt::Debug for RepositoryHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepositoryHandle")
            .field("root_path", &self.root_path)
            .field("canonical_root", &self.index.root())
            .finish()
    }
}
