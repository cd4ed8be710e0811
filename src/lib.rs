//! Repogate - Repository Session Gateway
//!
//! Exposes a single indexed source repository through two equivalent
//! front ends, a command-line interface and an HTTP service. Both share
//! one operation set (init, file tree, symbol search, file content) and
//! return the same `{"Result": ..., "Status": ...}` envelope.
//!
//! # Architecture
//!
//! The codebase is organized into three main modules:
//!
//! - **core**: Gateway logic (protocol-agnostic)
//!   - config, error, types, xdg
//!   - repository (indexing capability, filesystem index)
//!   - session (bound repository), marker (CLI persistence)
//!   - gateway (operation dispatch)
//!
//! - **http**: REST adapter (depends on core)
//!   - handlers, middleware, server startup
//!
//! - **cli**: clap adapter (depends on core)
//!   - commands, output

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP REST adapter
pub mod http;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{ErrorKind, GatewayError, Result};
pub use core::gateway::GatewayService;
pub use core::types::*;
