use thiserror::Error;

use crate::app_config::AppConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
pub(crate) fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let reddit_client_id = require("REDDIT_CLIENT_ID")?;
    let reddit_client_secret = require("REDDIT_CLIENT_SECRET")?;
    let news_api_key = require("NEWS_API_KEY")?;
    let gemini_api_key = require("GEMINI_API_KEY")?;

    let raw_addr = or_default("STOCKLENS_BIND_ADDR", "0.0.0.0:3000");
    let bind_addr = raw_addr
        .parse::<SocketAddr>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: "STOCKLENS_BIND_ADDR".to_string(),
            reason: e.to_string(),
        })?;

    let log_level = or_default("STOCKLENS_LOG_LEVEL", "info");
    let user_agent = or_default(
        "STOCKLENS_USER_AGENT",
        "stocklens/0.1 (stock-discussion-summarizer)",
    );

    let raw_timeout = or_default("STOCKLENS_REQUEST_TIMEOUT_SECS", "30");
    let request_timeout_secs =
        raw_timeout
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: "STOCKLENS_REQUEST_TIMEOUT_SECS".to_string(),
                reason: e.to_string(),
            })?;

    Ok(AppConfig {
        bind_addr,
        log_level,
        user_agent,
        request_timeout_secs,
        reddit_client_id,
        reddit_client_secret,
        news_api_key,
        gemini_api_key,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
