use std::time::Duration;

use crate::backend::BackendClient;
use crate::config::Config;
use crate::courier::CourierClient;
use crate::error::AppError;
use crate::observability::metrics::Metrics;

pub struct AppState {
    pub config: Config,
    pub backend: BackendClient,
    pub courier: CourierClient,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|err| AppError::Internal(format!("failed to build http client: {err}")))?;

        Ok(Self {
            backend: BackendClient::new(http.clone(), &config),
            courier: CourierClient::new(http, &config),
            metrics: Metrics::new(),
            config,
        })
    }
}
