pub mod booking;
pub mod quotation;

use axum::http::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::error::AppError;
use crate::signing;

const MARKET: &str = "PH";

/// Signing HTTP client for the courier API. Every call is a single attempt:
/// a timed-out or failed booking must never be blindly resent, since the
/// courier may already have recorded it.
#[derive(Clone)]
pub struct CourierClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    secret: String,
}

impl CourierClient {
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            base_url: config.courier_base_url.clone(),
            api_key: config.courier_api_key.clone(),
            secret: config.courier_secret.clone(),
        }
    }

    /// `POST /v3/quotations`; returns the quotation under `data`.
    pub async fn request_quotation(
        &self,
        request: &quotation::QuotationEnvelope,
    ) -> Result<Value, AppError> {
        self.post(quotation::QUOTATIONS_PATH, request).await
    }

    /// `POST /v3/orders`; returns the booking confirmation under `data`.
    pub async fn book(&self, request: &booking::BookingEnvelope) -> Result<Value, AppError> {
        self.post(booking::ORDERS_PATH, request).await
    }

    async fn post<T: Serialize>(&self, path: &str, request: &T) -> Result<Value, AppError> {
        // Serialized exactly once: the signature covers the same bytes that
        // go on the wire.
        let body = serde_json::to_string(request)
            .map_err(|err| AppError::Internal(format!("failed to serialize request: {err}")))?;
        let signed = signing::sign(&self.secret, "POST", path, &body);

        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, signing::authorization_header(&self.api_key, &signed))
            .header("market", MARKET)
            .body(body)
            .send()
            .await
            .map_err(|err| AppError::Internal(format!("courier request failed: {err}")))?;

        let status = response.status();
        let payload = read_json(response).await?;

        if status != StatusCode::CREATED {
            tracing::warn!(%status, path, "courier rejected request");
            return Err(AppError::Courier {
                status,
                body: payload,
            });
        }

        payload
            .get("data")
            .cloned()
            .ok_or_else(|| AppError::Internal("courier response missing data".to_string()))
    }
}

async fn read_json(response: reqwest::Response) -> Result<Value, AppError> {
    let text = response
        .text()
        .await
        .map_err(|err| AppError::Internal(format!("failed to read courier response: {err}")))?;

    // Error bodies are relayed verbatim even when they are not JSON.
    Ok(match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(_) => Value::String(text),
    })
}
