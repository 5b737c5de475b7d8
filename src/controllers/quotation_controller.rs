use axum::{
    Json,
    extract::State,
    http::header,
    response::IntoResponse,
};
use chrono::{Local, NaiveDate};
use uuid::Uuid;

use crate::error::AppError;
use crate::extract::ApiJson;
use crate::models::quotation::{QuotationBreakdown, QuotationRequest, QuotationResponse, SystemSelection};
use crate::services::quotation_report::{self, ReportContext};
use crate::services::quotation_pricer;
use crate::shared_state::AppState;

fn price(state: &AppState, selection: &SystemSelection) -> Result<QuotationBreakdown, AppError> {
    quotation_pricer::price(selection, &state.config.pricing, &state.config.bounds)
}

fn issue_dates(state: &AppState) -> Result<(NaiveDate, NaiveDate), AppError> {
    let issued_on = Local::now().date_naive();
    let valid_until =
        quotation_report::validity_window(issued_on, state.config.pricing.quotation_validity_days)?;
    Ok((issued_on, valid_until))
}

/// POST /api/quotations/price
/// Itemized price only
///
/// Recomputed on every form change; nothing is submitted.
#[utoipa::path(
    post,
    path = "/api/quotations/price",
    request_body = SystemSelection,
    responses(
        (status = 200, description = "Itemized cost", body = QuotationBreakdown),
        (status = 400, description = "System size out of range"),
        (status = 404, description = "Unknown brand")
    )
)]
pub async fn price_quotation(
    State(state): State<AppState>,
    ApiJson(selection): ApiJson<SystemSelection>,
) -> Result<Json<QuotationBreakdown>, AppError> {
    Ok(Json(price(&state, &selection)?))
}

/// POST /api/quotations
/// Request a quotation
///
/// Prices the system and forwards the lead to the external form collector.
/// Forwarding is best effort: its outcome never affects the response.
#[utoipa::path(
    post,
    path = "/api/quotations",
    request_body = QuotationRequest,
    responses(
        (status = 200, description = "Quotation issued", body = QuotationResponse),
        (status = 400, description = "System size out of range"),
        (status = 404, description = "Unknown brand")
    )
)]
pub async fn create_quotation(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<QuotationRequest>,
) -> Result<Json<QuotationResponse>, AppError> {
    let breakdown = price(&state, &request.system)?;

    let lead_forwarded = match &state.lead_form {
        Some(client) => {
            client.submit(&request);
            true
        }
        None => {
            tracing::info!("no lead form configured, quotation not forwarded");
            false
        }
    };

    let (issued_on, valid_until) = issue_dates(&state)?;
    let reference = Uuid::new_v4();
    tracing::info!(%reference, size_kw = request.system.system_size_kw, total = breakdown.total_cost, "quotation issued");

    state.ui_delay().await;
    Ok(Json(QuotationResponse {
        reference,
        issued_on,
        valid_until,
        breakdown,
        lead_forwarded,
    }))
}

/// POST /api/quotations/report
/// Downloadable quotation document
///
/// Returns a self-contained HTML file as an attachment.
#[utoipa::path(
    post,
    path = "/api/quotations/report",
    request_body = QuotationRequest,
    responses(
        (status = 200, description = "HTML quotation", body = String, content_type = "text/html"),
        (status = 400, description = "System size out of range"),
        (status = 404, description = "Unknown brand")
    )
)]
pub async fn download_report(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<QuotationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let breakdown = price(&state, &request.system)?;
    let (issued_on, valid_until) = issue_dates(&state)?;

    let html = quotation_report::render_report(&ReportContext {
        reference: Uuid::new_v4(),
        request: &request,
        breakdown: &breakdown,
        issued_on,
        valid_until,
    })?;

    let disposition = format!(
        "attachment; filename=\"{}\"",
        quotation_report::report_filename(&request.name)
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        html,
    ))
}
