use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::routing::post;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::api::rest::method_not_allowed;
use crate::courier::booking::{ORDERS_PATH, build_booking_request};
use crate::error::AppError;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/book-order", post(book_order).fallback(method_not_allowed))
}

#[derive(Deserialize)]
pub struct BookOrderRequest {
    #[serde(default)]
    pub order_id: Option<String>,
}

async fn book_order(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<BookOrderRequest>,
) -> Result<Json<Value>, AppError> {
    let order_id = match payload.order_id.as_deref() {
        Some(id) if !id.trim().is_empty() => id.trim().to_string(),
        _ => return Err(AppError::BadRequest("order_id required".to_string())),
    };

    let details = state.backend.fetch_order(&order_id).await?;
    let request = build_booking_request(
        &details,
        &state.config.sender_name,
        &state.config.sender_phone,
    )?;

    let timer = state
        .metrics
        .courier_request_seconds
        .with_label_values(&[ORDERS_PATH])
        .start_timer();
    let result = state.courier.book(&request).await;
    timer.observe_duration();

    match result {
        Ok(confirmation) => {
            state
                .metrics
                .bookings_total
                .with_label_values(&["success"])
                .inc();
            tracing::info!(order_id, "delivery booked");
            Ok(Json(json!({
                "message": "Order booked successfully",
                "data": confirmation,
            })))
        }
        Err(err) => {
            state
                .metrics
                .bookings_total
                .with_label_values(&["error"])
                .inc();
            Err(err)
        }
    }
}
