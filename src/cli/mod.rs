//! CLI adapter for the repository gateway
//!
//! One process invocation runs one gateway operation. The bound
//! repository is carried between invocations by a [`PathMarker`]:
//! `init` records the root, and every other command rebinds a fresh
//! session from it before running.
//! This module is parallel to `http/` - both depend on `core/` but not on each other.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              | (gateway logic)  |
//!              +--------+---------+
//!                       |
//!          +------------+------------+
//!          |                         |
//!          v                         v
//! +------------------+      +------------------+
//! |      http/       |      |      cli/        |
//! | (axum adapter)   |      | (clap adapter)   |
//! +------------------+      +------------------+
//! ```
//!
//! [`PathMarker`]: crate::core::marker::PathMarker

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// Repogate - repository session gateway
///
/// Bind a source repository once with `init`, then browse its file tree,
/// search symbol usages and read files from later invocations.
#[derive(Parser, Debug)]
#[command(name = "repogate")]
#[command(version)]
#[command(about = "Repository session gateway", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "json")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Single-line `{"Result": ..., "Status": 200}` envelope (default)
    #[default]
    Json,
    /// Human-readable output
    Human,
}

/// Available CLI commands
///
/// Command names match the HTTP routes.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bind a repository for subsequent commands
    #[command(name = "init")]
    Init(commands::InitArgs),

    /// Show the file tree of the bound repository
    #[command(name = "file_tree")]
    FileTree(commands::FileTreeArgs),

    /// Find usages of a symbol in the bound repository
    #[command(name = "find_symbols")]
    FindSymbols(commands::FindSymbolsArgs),

    /// Print the contents of a file in the bound repository
    #[command(name = "get_file_content")]
    GetFileContent(commands::GetFileContentArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  repogate completions bash > ~/.local/share/bash-completion/completions/repogate
    ///   zsh:   repogate completions zsh > ~/.zfunc/_repogate
    ///   fish:  repogate completions fish > ~/.config/fish/completions/repogate.fish
    Completions(commands::CompletionsArgs),
}

impl Commands {
    /// Check required fields before any config, marker or repository access
    pub fn validate(&self) -> crate::core::error::Result<()> {
        use crate::core::types::{required, SymbolQuery};

        match self {
            Commands::Init(args) => required("path", args.path.clone()).map(drop),
            Commands::FindSymbols(args) => {
                SymbolQuery::parse(args.symbol.clone(), args.symbol_type.clone()).map(drop)
            }
            Commands::GetFileContent(args) => required("path", args.file_path.clone()).map(drop),
            Commands::FileTree(_) | Commands::Completions(_) => Ok(()),
        }
    }
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::gateway::GatewayService;
    use crate::core::marker::PathMarker;
    use crate::core::xdg::XdgDirs;

    // Handle completions command early (doesn't need a gateway)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    cli.command.validate()?;

    let xdg = XdgDirs::new();
    let config = Config::load_with_xdg(&xdg)?;
    let gateway = GatewayService::from_config(&config);
    let marker = PathMarker::from_env(xdg.marker_file());

    match cli.command {
        Commands::Init(args) => commands::init::execute(args, &gateway, &marker, cli.format),
        Commands::FileTree(args) => {
            commands::file_tree::execute(args, &gateway, &marker, cli.format)
        }
        Commands::FindSymbols(args) => {
            commands::find_symbols::execute(args, &gateway, &marker, cli.format)
        }
        Commands::GetFileContent(args) => {
            commands::get_file_content::execute(args, &gateway, &marker, cli.format)
        }
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
