//! Find symbols command - locate usages of a named symbol

use crate::cli::commands::restore_session;
use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::gateway::GatewayService;
use crate::core::marker::PathMarker;
use crate::core::types::SymbolQuery;
use clap::Args;

/// Arguments for the find_symbols command
#[derive(Args, Debug)]
pub struct FindSymbolsArgs {
    /// Symbol name to search for
    #[arg(long)]
    pub symbol: Option<String>,

    /// Kind of symbol: function, type, variable, constant or any
    ///
    /// Unrecognized kinds match every usage.
    #[arg(long)]
    pub symbol_type: Option<String>,
}

/// Execute the find_symbols command
///
/// No usages is a successful, empty result.
pub fn execute(
    args: FindSymbolsArgs,
    gateway: &GatewayService,
    marker: &PathMarker,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let query = SymbolQuery::parse(args.symbol, args.symbol_type)?;
    restore_session(gateway, marker)?;
    let usages = gateway.find_symbols(&query)?;

    match format {
        OutputFormat::Human => {
            if usages.is_empty() {
                println!(
                    "No usages of '{}' found",
                    colors::label(&query.symbol_name)
                );
            } else {
                println!(
                    "Found {} usage(s) of '{}':\n",
                    colors::number(&usages.len().to_string()),
                    colors::label(&query.symbol_name)
                );
                for usage in &usages {
                    println!("{}", output::format_usage(usage));
                }
            }
        }
        OutputFormat::Json => output::print_envelope(&usages)?,
    }

    Ok(())
}
