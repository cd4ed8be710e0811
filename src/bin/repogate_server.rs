//! Repogate HTTP server entry point
//!
//! Serves the repository gateway operations over HTTP.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use repogate::core::config::Config;
use repogate::core::gateway::GatewayService;
use repogate::core::xdg::XdgDirs;
use repogate::http::{self, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "repogate=info,tower_http=debug".into());
    let json = std::env::var("REPOGATE_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting repogate server");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let xdg = XdgDirs::new();
    xdg.log_paths();
    xdg.ensure_dirs_exist()?;

    // Load configuration
    let config = Config::load_with_xdg(&xdg)?;
    config.log_config();

    let state = AppState::new(GatewayService::from_config(&config));

    http::serve(&config, state).await?;

    Ok(())
}
