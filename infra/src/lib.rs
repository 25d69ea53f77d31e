//! # Infrastructure Layer
//!
//! Concrete implementations behind the CrossAuth domain traits.
//!
//! ## Architecture
//!
//! - **SMS**: HTTP gateway dispatch (request building, delivery, outcome
//!   classification) and a simulation sender for development
//! - **Telemetry**: tracing subscriber initialization
//!
//! Continuation tokens need no infrastructure of their own; they are signed by
//! the JWT facility in `ca_core`.

// Re-export core types for convenience
pub use ca_core::errors::*;

/// SMS service module - HTTP gateway and simulation senders
pub mod sms;

/// Tracing subscriber setup
pub mod telemetry;

use std::path::Path;

use ca_shared::config::{AppConfig, Environment};

/// Load application configuration from the environment
///
/// Env files in the working directory are read first when present, see
/// [`load_config_from`].
pub fn load_config() -> AppConfig {
    load_config_from(Path::new("."))
}

/// Load application configuration, reading env files from `dir`
///
/// The environment-specific file (e.g. `.env.production`) is read before
/// `.env`. Neither overrides variables that are already set.
pub fn load_config_from(dir: &Path) -> AppConfig {
    let environment = Environment::from_env();
    for file in [environment.env_file(), ".env"] {
        if dotenvy::from_path(dir.join(file)).is_ok() {
            tracing::debug!(file, "Loaded env file");
        }
    }

    let config = AppConfig::from_env();
    if config.token.is_using_default_secret() {
        if config.environment.is_production() {
            tracing::error!(
                "Continuation tokens are signed with the development secret in production"
            );
        } else {
            tracing::warn!("Continuation tokens are signed with the development secret");
        }
    }
    config
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Invalid or incomplete configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// HTTP client construction error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Tracing subscriber could not be installed
    #[error("Telemetry error: {0}")]
    Telemetry(String),
}
