//! Shared configuration and text utilities for stocklens.

mod app_config;
mod config;
mod text;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use text::clean_text;
