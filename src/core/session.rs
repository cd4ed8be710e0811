//! Session state: the single currently bound repository
//!
//! `SessionState` owns at most one [`RepositoryHandle`]. Binding
//! constructs the new handle outside the lock and swaps it in only on
//! success, so readers always observe either the fully old or the fully
//! new handle and a failed bind leaves the prior handle active.

use std::sync::{Arc, RwLock};

use crate::core::error::{GatewayError, Result};
use crate::core::repository::{IndexFactory, RepositoryHandle};

/// Process-wide, lazily bound reference to the active repository
pub struct SessionState {
    factory: Arc<dyn IndexFactory>,
    current: RwLock<Option<Arc<RepositoryHandle>>>,
}

impl SessionState {
    /// Create an unbound session that opens repositories through `factory`
    pub fn new(factory: Arc<dyn IndexFactory>) -> Self {
        Self {
            factory,
            current: RwLock::new(None),
        }
    }

    /// Bind to `root_path`, replacing any existing handle
    ///
    /// On failure no replacement occurs and the error is returned.
    pub fn bind(&self, root_path: &str) -> Result<Arc<RepositoryHandle>> {
        let handle = Arc::new(RepositoryHandle::open(root_path, self.factory.as_ref())?);

        let previous = {
            let mut slot = self
                .current
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            slot.replace(Arc::clone(&handle))
        };

        match previous {
            Some(old) => tracing::info!(
                "Repository rebound: {} -> {}",
                old.root_path(),
                handle.root_path()
            ),
            None => tracing::info!("Repository initialized at {}", handle.root_path()),
        }

        Ok(handle)
    }

    /// The current handle, or `NotInitialized` if none is bound
    pub fn require_bound(&self) -> Result<Arc<RepositoryHandle>> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
            .ok_or(GatewayError::NotInitialized)
    }

    pub fn is_bound(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .is_some()
    }

    /// Root path of the bound repository, as supplied to `bind`
    pub fn root_path(&self) -> Option<String> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .as_ref()
            .map(|h| h.root_path().to_string())
    }
}
