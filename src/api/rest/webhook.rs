use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::routing::post;
use serde_json::{Value, json};

use crate::api::rest::method_not_allowed;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/delivery-webhook",
        post(delivery_webhook).fallback(method_not_allowed),
    )
}

/// Courier status callback. The backend owns delivery records, so this only
/// acknowledges and logs the event.
async fn delivery_webhook(Json(payload): Json<Value>) -> Json<Value> {
    tracing::info!(
        order_id = payload["data"]["order"]["orderId"].as_str().unwrap_or_default(),
        event = payload["eventType"].as_str().unwrap_or_default(),
        "delivery webhook received"
    );

    Json(json!({ "message": "Webhook received" }))
}
