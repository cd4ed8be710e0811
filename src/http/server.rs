//! Router assembly and listener startup
//!
//! The listener is bound with a single retry: readiness is cleared before
//! each attempt, and a failed first attempt waits the configured delay
//! before trying again. Only after a successful bind is readiness set.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::gateway::GatewayService;
use crate::http::{handlers, middleware as http_middleware};

/// Line printed to stdout once the listener is accepting connections
pub const READY_LINE: &str = "REPOGATE SERVER READY";

/// Process-wide readiness flag, shared by startup and the `/ready` route
#[derive(Debug, Clone, Default)]
pub struct Readiness(Arc<AtomicBool>);

impl Readiness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, ready: bool) {
        self.0.store(ready, Ordering::SeqCst);
    }

    pub fn is_ready(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<GatewayService>,
    pub readiness: Readiness,
}

impl AppState {
    pub fn new(gateway: GatewayService) -> Self {
        Self {
            gateway: Arc::new(gateway),
            readiness: Readiness::new(),
        }
    }
}

/// Build the API router over `state`
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health checks
        .route("/", get(handlers::heartbeat_handler))
        .route("/ready", get(handlers::ready_handler))
        // Gateway operations
        .route("/init", post(handlers::init_handler))
        .route("/file_tree", post(handlers::file_tree_handler))
        .route("/find_symbols", post(handlers::find_symbols_handler))
        .route("/get_file_content", post(handlers::get_file_content_handler))
        .layer(middleware::from_fn(http_middleware::log_request))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind `addr`, retrying once after `retry_delay` if the first attempt fails
///
/// `readiness` is cleared before each attempt and set after success.
pub async fn bind_listener(
    addr: &str,
    readiness: &Readiness,
    retry_delay: Duration,
) -> io::Result<TcpListener> {
    readiness.set(false);

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::warn!(
                "Failed to bind {}: {} (retrying in {:?})",
                addr,
                e,
                retry_delay
            );
            tokio::time::sleep(retry_delay).await;

            readiness.set(false);
            TcpListener::bind(addr).await?
        }
    };

    readiness.set(true);
    Ok(listener)
}

/// Bind the configured address and serve until the process exits
pub async fn serve(config: &Config, state: AppState) -> Result<()> {
    let addr = config.server.addr();
    let listener = bind_listener(
        &addr,
        &state.readiness,
        config.server.startup_retry_delay(),
    )
    .await?;

    tracing::info!("Listening on {}", addr);
    println!("{READY_LINE}");

    axum::serve(listener, router(state)).await?;

    Ok(())
}
