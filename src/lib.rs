pub mod api_docs;
pub mod config;
pub mod controllers;
pub mod error;
pub mod extract;
pub mod models;
pub mod routes;
pub mod services;
pub mod shared_state;

use axum::{Router, response::Html, routing::get};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use utoipa::OpenApi;
use utoipa_scalar::Scalar;

use crate::api_docs::ApiDoc;
use crate::routes::api_routes::api_routes;
use crate::shared_state::AppState;

#[cfg(feature = "verbose_log")]
const DEFAULT_FILTER: &str = "debug";
#[cfg(not(feature = "verbose_log"))]
const DEFAULT_FILTER: &str = "info";

/// Initialize tracing. `RUST_LOG` overrides the default level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}

/// Full application: JSON API, API reference UI and static front-end.
pub fn build_app(state: AppState) -> Router {
    let static_dir = state.config.server.static_dir.clone();
    Router::new()
        .nest("/api", api_routes(state))
        .route("/scalar", get(|| async {
            Html(Scalar::new(ApiDoc::openapi()).to_html())
        }))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
