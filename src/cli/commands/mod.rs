//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for one
//! gateway operation. Command names match the HTTP routes.

pub mod completions;
pub mod file_tree;
pub mod find_symbols;
pub mod get_file_content;
pub mod init;

// Re-export argument types for use in mod.rs
pub use completions::CompletionsArgs;
pub use file_tree::FileTreeArgs;
pub use find_symbols::FindSymbolsArgs;
pub use get_file_content::GetFileContentArgs;
pub use init::InitArgs;

use crate::core::error::Result;
use crate::core::gateway::GatewayService;
use crate::core::marker::PathMarker;

/// Rebind the gateway to the path recorded by a previous `init`
///
/// Leaves the gateway unbound when no path was recorded, so the
/// operation that follows reports `repository not initialized`.
pub fn restore_session(gateway: &GatewayService, marker: &PathMarker) -> Result<()> {
    if let Some(root) = marker.load() {
        tracing::debug!("Restoring repository from marker: {}", root);
        gateway.restore(&root)?;
    }
    Ok(())
}
