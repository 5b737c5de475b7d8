use std::net::SocketAddr;

use solar_quote_engine::config::Config;
use solar_quote_engine::shared_state::AppState;
use solar_quote_engine::{build_app, init_tracing};

const CONFIG_ENV: &str = "SOLAR_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config.json";

#[tokio::main]
async fn main() {
    init_tracing();

    // 1. Load configuration
    let config_path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = match Config::load(&config_path) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(path = %config_path, error = %e, "failed to load configuration");
            std::process::exit(1);
        }
    };
    tracing::info!(
        path = %config_path,
        lead_form = config.lead_form.is_some(),
        ui_latency_ms = config.server.ui_latency_ms,
        "configuration loaded"
    );

    // 2. Initialize shared state
    let state = match AppState::with_mock_orders(config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "failed to initialize application state");
            std::process::exit(1);
        }
    };

    // 3. Start Axum HTTP server
    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.server.port));
    let app = build_app(state);

    tracing::info!("API server listening on http://{}", addr);
    tracing::info!("Scalar UI: http://{}/scalar", addr);

    if let Err(e) = axum_server::bind(addr)
        .serve(app.into_make_service())
        .await
    {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
