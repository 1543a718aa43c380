use std::env;

use crate::error::AppError;

pub const DEFAULT_COURIER_BASE_URL: &str = "https://rest.sandbox.lalamove.com";
pub const DEFAULT_BACKEND_BASE_URL: &str = "https://tahanancrafts.onrender.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub log_level: String,
    pub courier_api_key: String,
    pub courier_secret: String,
    pub courier_base_url: String,
    pub backend_base_url: String,
    pub request_timeout_secs: u64,
    pub sender_name: String,
    pub sender_phone: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            http_port: parse_or_default("HTTP_PORT", 3000)?,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            courier_api_key: required_var("LALAMOVE_API_KEY")?,
            courier_secret: required_var("LALAMOVE_SECRET")?,
            courier_base_url: env::var("LALAMOVE_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_COURIER_BASE_URL.to_string()),
            backend_base_url: env::var("BACKEND_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BACKEND_BASE_URL.to_string()),
            request_timeout_secs: parse_or_default("REQUEST_TIMEOUT_SECS", 30)?,
            sender_name: env::var("SENDER_NAME").unwrap_or_else(|_| "TahananCrafts".to_string()),
            sender_phone: env::var("SENDER_PHONE")
                .unwrap_or_else(|_| "+639123456789".to_string()),
        })
    }
}

fn required_var(key: &str) -> Result<String, AppError> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::Config(format!("{key} must be set"))),
    }
}

fn parse_or_default<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|err| AppError::Config(format!("invalid {key}: {err}"))),
        Err(_) => Ok(default),
    }
}
