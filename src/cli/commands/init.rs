//! Init command - bind a repository for later invocations

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::gateway::GatewayService;
use crate::core::marker::PathMarker;
use crate::core::types::required;
use clap::Args;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path to the repository root
    #[arg(long)]
    pub path: Option<String>,
}

/// Execute the init command
///
/// Binds the repository, then records its canonical root in the marker
/// so later invocations can rebind it.
pub fn execute(
    args: InitArgs,
    gateway: &GatewayService,
    marker: &PathMarker,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = required("path", args.path)?;
    let result = gateway.init(&path)?;

    let handle = gateway.session().require_bound()?;
    marker.store(handle.canonical_root())?;

    match format {
        OutputFormat::Human => {
            output::print_success(&format!("Repository initialized at {}", result.path));
            println!(
                "  {} {}",
                colors::dim("Root:"),
                colors::file_path(&handle.canonical_root().display().to_string())
            );
        }
        OutputFormat::Json => output::print_envelope(&result)?,
    }

    Ok(())
}
