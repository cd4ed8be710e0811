//! Gateway service: the operation dispatcher shared by all front ends
//!
//! Every operation validates its required fields first, then checks the
//! session binding, then delegates to the bound [`RepositoryHandle`].
//! Validation always runs before the binding check, so a malformed
//! request against an unbound session reports the validation error.
//!
//! [`RepositoryHandle`]: crate::core::repository::RepositoryHandle

use std::sync::Arc;

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::repository::{IndexFactory, LocalIndexFactory, RepositoryHandle};
use crate::core::session::SessionState;
use crate::core::types::{
    required, FileTreeEntry, InitResult, Request, ResponseEnvelope, SymbolQuery, SymbolUsage,
};

/// Operation dispatcher over a single [`SessionState`]
pub struct GatewayService {
    session: SessionState,
}

impl GatewayService {
    /// Create a gateway whose repositories are opened by `factory`
    pub fn new(factory: Arc<dyn IndexFactory>) -> Self {
        Self {
            session: SessionState::new(factory),
        }
    }

    /// Create a gateway over the local filesystem index
    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(LocalIndexFactory::new(config.repository.clone())))
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Bind the session to `path`, replacing any bound repository
    pub fn init(&self, path: &str) -> Result<InitResult> {
        let path = required("path", Some(path.to_string()))?;
        self.session.bind(&path)?;
        Ok(InitResult { path })
    }

    /// Rebind to a previously recorded root and return the handle
    ///
    /// Used by front ends that cannot keep the session in memory.
    pub fn restore(&self, root_path: &str) -> Result<Arc<RepositoryHandle>> {
        self.session.bind(root_path)
    }

    pub fn file_tree(&self) -> Result<Vec<FileTreeEntry>> {
        self.session.require_bound()?.get_file_tree()
    }

    pub fn find_symbols(&self, query: &SymbolQuery) -> Result<Vec<SymbolUsage>> {
        let handle = self.session.require_bound()?;
        handle.find_symbol_usages(&query.symbol_name, &query.symbol_type)
    }

    pub fn get_file_content(&self, path: &str) -> Result<String> {
        let path = required("path", Some(path.to_string()))?;
        self.session.require_bound()?.get_file_content(&path)
    }

    /// Validate and run `request`, wrapping the outcome in an envelope
    pub fn dispatch(&self, request: Request) -> ResponseEnvelope {
        let operation = request.operation();

        let envelope = match request {
            Request::Init { path } => {
                ResponseEnvelope::from_result(required("path", path).and_then(|p| self.init(&p)))
            }
            Request::FileTree => ResponseEnvelope::from_result(self.file_tree()),
            Request::FindSymbols {
                symbol,
                symbol_type,
            } => ResponseEnvelope::from_result(
                SymbolQuery::parse(symbol, symbol_type).and_then(|q| self.find_symbols(&q)),
            ),
            Request::GetFileContent { path } => ResponseEnvelope::from_result(
                required("path", path).and_then(|p| self.get_file_content(&p)),
            ),
        };

        if let Some(message) = envelope.error() {
            tracing::debug!(operation, status = envelope.status(), "{}", message);
        }

        envelope
    }
}
