use serde_json::Value;

use crate::config::Config;
use crate::error::AppError;
use crate::models::order::OrderDetails;

/// Read-only client for the Order/Delivery Backend.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            base_url: config.backend_base_url.clone(),
        }
    }

    /// Fetches the order and its delivery record. A non-OK backend response
    /// is relayed to the caller verbatim at the backend's status code.
    pub async fn fetch_order(&self, order_id: &str) -> Result<OrderDetails, AppError> {
        let url = format!(
            "{}/api/products/orders/get-order/{}/",
            self.base_url, order_id
        );

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|err| AppError::Internal(format!("backend request failed: {err}")))?;

        let status = response.status();
        let payload: Value = response
            .json()
            .await
            .map_err(|err| AppError::Internal(format!("invalid backend response: {err}")))?;

        if !status.is_success() {
            return Err(AppError::Backend {
                status,
                body: payload,
            });
        }

        serde_json::from_value(payload)
            .map_err(|err| AppError::Internal(format!("unexpected backend order shape: {err}")))
    }
}
