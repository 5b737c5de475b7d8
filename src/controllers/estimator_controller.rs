use axum::{Json, extract::State, response::IntoResponse};

use crate::error::AppError;
use crate::extract::ApiJson;
use crate::models::catalog::{CatalogResponse, SERVICES, ServiceOffering};
use crate::models::estimate::{EstimateRequest, EstimateResult};
use crate::models::settings::HealthStatus;
use crate::services::savings_estimator;
use crate::shared_state::AppState;

/// GET /api/health
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = HealthStatus)
    )
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime().as_secs(),
        lead_form_enabled: state.lead_form.is_some(),
    })
}

/// GET /api/catalog
/// Reference tables
///
/// Locations with their sun hours, system archetypes with cost per kW, and
/// the panel, inverter and wiring brands available for quotations.
#[utoipa::path(
    get,
    path = "/api/catalog",
    responses(
        (status = 200, description = "Reference tables", body = CatalogResponse)
    )
)]
pub async fn get_catalog() -> impl IntoResponse {
    Json(CatalogResponse::build())
}

/// GET /api/services
#[utoipa::path(
    get,
    path = "/api/services",
    responses(
        (status = 200, description = "Offered services", body = Vec<ServiceOffering>)
    )
)]
pub async fn list_services() -> impl IntoResponse {
    Json(SERVICES)
}

/// POST /api/estimate
/// Solar savings estimate
///
/// Recommends a system size for the monthly bill and roof area and projects
/// cost, savings, payback period and carbon offset.
#[utoipa::path(
    post,
    path = "/api/estimate",
    request_body = EstimateRequest,
    responses(
        (status = 200, description = "Recommended system and projected return", body = EstimateResult),
        (status = 400, description = "Bill or roof area out of range"),
        (status = 404, description = "Unknown location or system type")
    )
)]
pub async fn estimate(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<EstimateRequest>,
) -> Result<Json<EstimateResult>, AppError> {
    let result =
        savings_estimator::estimate_request(&request, &state.config.estimator, &state.config.bounds)?;
    state.ui_delay().await;
    Ok(Json(result))
}
