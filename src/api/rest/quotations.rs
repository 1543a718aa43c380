use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::routing::post;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::api::rest::method_not_allowed;
use crate::courier::quotation::{QUOTATIONS_PATH, build_quotation_request};
use crate::error::AppError;
use crate::models::address::{Artisan, ShippingAddress};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/checkout-quotation",
        post(checkout_quotation).fallback(method_not_allowed),
    )
}

#[derive(Deserialize)]
pub struct CheckoutQuotationRequest {
    pub shipping_address: Option<ShippingAddress>,
    pub artisan: Option<Artisan>,
}

async fn checkout_quotation(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CheckoutQuotationRequest>,
) -> Result<Json<Value>, AppError> {
    let (Some(shipping), Some(artisan)) = (payload.shipping_address, payload.artisan) else {
        return Err(AppError::BadRequest(
            "Missing required fields: shipping_address or artisan".to_string(),
        ));
    };

    let request = build_quotation_request(&shipping, &artisan)?;

    let timer = state
        .metrics
        .courier_request_seconds
        .with_label_values(&[QUOTATIONS_PATH])
        .start_timer();
    let result = state.courier.request_quotation(&request).await;
    timer.observe_duration();

    match result {
        Ok(quotation) => {
            state
                .metrics
                .quotations_total
                .with_label_values(&["success"])
                .inc();
            tracing::info!(
                quotation_id = quotation["quotationId"].as_str().unwrap_or_default(),
                "quotation created"
            );
            Ok(Json(json!({ "quotation": quotation })))
        }
        Err(err) => {
            state
                .metrics
                .quotations_total
                .with_label_values(&["error"])
                .inc();
            Err(err)
        }
    }
}
