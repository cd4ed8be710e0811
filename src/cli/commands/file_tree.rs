//! File tree command - list the bound repository

use crate::cli::commands::restore_session;
use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::gateway::GatewayService;
use crate::core::marker::PathMarker;
use clap::Args;

/// Arguments for the file_tree command
#[derive(Args, Debug, Default)]
pub struct FileTreeArgs {}

/// Execute the file_tree command
pub fn execute(
    _args: FileTreeArgs,
    gateway: &GatewayService,
    marker: &PathMarker,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    restore_session(gateway, marker)?;
    let tree = gateway.file_tree()?;

    match format {
        OutputFormat::Human => {
            if let Some(root) = gateway.session().root_path() {
                output::print_header(&root);
            }
            for entry in &tree {
                println!("{}", output::format_tree_entry(entry));
            }

            let files = tree.iter().filter(|e| !e.is_dir).count();
            println!(
                "\n{} director(ies), {} file(s)",
                colors::number(&(tree.len() - files).to_string()),
                colors::number(&files.to_string())
            );
        }
        OutputFormat::Json => output::print_envelope(&tree)?,
    }

    Ok(())
}
