use axum::{Json, extract::State, response::IntoResponse};

use crate::error::AppError;
use crate::extract::ApiJson;
use crate::models::settings::{AppSettings, ThemeUpdate};
use crate::shared_state::AppState;

/// GET /api/settings/theme
#[utoipa::path(
    get,
    path = "/api/settings/theme",
    responses(
        (status = 200, description = "Current settings", body = AppSettings)
    )
)]
pub async fn get_theme(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.settings.current())
}

/// POST /api/settings/theme
/// Switch between light and dark theme; the choice is persisted.
#[utoipa::path(
    post,
    path = "/api/settings/theme",
    request_body = ThemeUpdate,
    responses(
        (status = 200, description = "Updated settings", body = AppSettings),
        (status = 500, description = "Settings could not be persisted")
    )
)]
pub async fn set_theme(
    State(state): State<AppState>,
    ApiJson(update): ApiJson<ThemeUpdate>,
) -> Result<Json<AppSettings>, AppError> {
    Ok(Json(state.settings.set_theme(update.theme)?))
}
