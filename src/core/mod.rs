//! Core domain logic (protocol-agnostic)
//!
//! This module contains all gateway logic that is independent
//! of transport protocols (HTTP, CLI).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error taxonomy and Result alias
//! - **types**: Request/response envelope and result records
//! - **xdg**: XDG directory handling
//! - **repository**: Indexing capability trait and filesystem implementation
//! - **session**: The single bound repository
//! - **marker**: Bound-path marker shared between CLI invocations
//! - **gateway**: Operation dispatcher

pub mod config;
pub mod error;
pub mod gateway;
pub mod marker;
pub mod repository;
pub mod session;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{ErrorKind, GatewayError, Result};
pub use gateway::GatewayService;
pub use session::SessionState;
