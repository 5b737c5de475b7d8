use axum::{Router, routing::{get, post}};
use crate::controllers::{
    // Reference data & calculator
    estimator_controller::{health, get_catalog, list_services, estimate},
    // Quotations
    quotation_controller::{price_quotation, create_quotation, download_report},
    // Demo order tracking
    tracking_controller::search_order,
    // Settings
    settings_controller::{get_theme, set_theme},
};
use crate::shared_state::AppState;

/// Build the `/api/*` sub-router.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health",                get(health))
        .route("/catalog",               get(get_catalog))
        .route("/services",              get(list_services))
        .route("/estimate",              post(estimate))
        .route("/quotations",            post(create_quotation))
        .route("/quotations/price",      post(price_quotation))
        .route("/quotations/report",     post(download_report))
        .route("/orders/search",         get(search_order))
        .route("/settings/theme",        get(get_theme).post(set_theme))
        .with_state(state)
}
