//! Configuration module

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Model registry / tracking server base URL
    pub tracking_uri: String,

    /// Registered model name
    pub model_name: String,

    /// Registry alias designating the live version
    pub model_alias: String,

    /// Server port
    pub port: u16,

    /// Registry request timeout in seconds
    pub registry_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            tracking_uri: env::var("MLFLOW_TRACKING_URI")
                .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string()),

            model_name: env::var("MODEL_NAME")
                .unwrap_or_else(|_| "EMI_Regression_Model".to_string()),

            model_alias: env::var("MODEL_ALIAS").unwrap_or_else(|_| "production".to_string()),

            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            registry_timeout_seconds: env::var("REGISTRY_TIMEOUT_SECONDS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(30),
        }
    }
}
