use axum::{
    Json,
    extract::{Query, State},
};

use crate::error::AppError;
use crate::models::order::{Order, OrderQuery};
use crate::shared_state::AppState;

/// GET /api/orders/search
/// Look up an installation order
///
/// Matches on order ID (case-insensitive) or the last four digits of the
/// contact phone number. Backed by demo data.
#[utoipa::path(
    get,
    path = "/api/orders/search",
    params(OrderQuery),
    responses(
        (status = 200, description = "Matching order", body = Order),
        (status = 404, description = "Order not found")
    )
)]
pub async fn search_order(
    State(state): State<AppState>,
    Query(query): Query<OrderQuery>,
) -> Result<Json<Order>, AppError> {
    let order = state.orders.find_order(&query.order_id, &query.phone)?;
    tracing::debug!(order_id = %order.id, "order found");
    state.ui_delay().await;
    Ok(Json(order))
}
