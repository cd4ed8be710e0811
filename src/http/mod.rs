//! HTTP REST adapter
//!
//! Depends only on core/. Never imports from cli/.
//!
//! Exposes the gateway operations as `POST` routes with `{"Data": ...}`
//! request bodies and `{"Result": ..., "Status": ...}` responses, plus
//! liveness and readiness checks.

pub mod handlers;
pub mod middleware;
pub mod server;

pub use handlers::*;
pub use server::{bind_listener, router, serve, AppState, Readiness, READY_LINE};
