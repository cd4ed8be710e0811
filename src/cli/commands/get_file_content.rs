//! Get file content command - print a file from the bound repository

use crate::cli::commands::restore_session;
use crate::cli::output;
use crate::cli::OutputFormat;
use crate::core::gateway::GatewayService;
use crate::core::marker::PathMarker;
use crate::core::types::required;
use clap::Args;

/// Arguments for the get_file_content command
#[derive(Args, Debug)]
pub struct GetFileContentArgs {
    /// File path, relative to the repository root or absolute within it
    #[arg(long, visible_alias = "path")]
    pub file_path: Option<String>,
}

/// Execute the get_file_content command
pub fn execute(
    args: GetFileContentArgs,
    gateway: &GatewayService,
    marker: &PathMarker,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = required("path", args.file_path)?;
    restore_session(gateway, marker)?;
    let content = gateway.get_file_content(&path)?;

    match format {
        OutputFormat::Human => {
            print!("{content}");
            if !content.is_empty() && !content.ends_with('\n') {
                println!();
            }
        }
        OutputFormat::Json => output::print_envelope(&content)?,
    }

    Ok(())
}
