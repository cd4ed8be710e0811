//! Repogate CLI - command-line front end of the repository gateway
//!
//! Each invocation runs one operation and prints its result envelope.
//! The repository bound by `init` is remembered for later invocations.
//!
//! # Examples
//!
//! ```bash
//! # Bind a repository
//! repogate init --path /path/to/repo
//!
//! # Browse and search it
//! repogate file_tree
//! repogate find_symbols --symbol Config --symbol-type type
//! repogate get_file_content --file-path src/main.rs
//! ```

use clap::Parser;
use repogate::cli::{output, run, Cli};

fn main() {
    // Diagnostics go to stderr so stdout carries only command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .compact()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
