//! Configuration module with business-specific sub-modules
//!
//! - `environment` - Environment detection and logging configuration
//! - `gateway` - The raw configuration surface of the HTTP SMS gateway
//! - `token` - Signing and lifetime settings for continuation tokens

pub mod environment;
pub mod gateway;
pub mod token;

use serde::{Deserialize, Serialize};

pub use environment::{Environment, LogFormat, LoggingConfig};
pub use gateway::SmsGatewaySettings;
pub use token::ContinuationTokenSettings;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// SMS gateway configuration
    pub gateway: SmsGatewaySettings,

    /// Continuation token configuration
    #[serde(default)]
    pub token: ContinuationTokenSettings,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let mut logging = LoggingConfig::for_environment(environment);
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            logging.level = level;
        }

        Self {
            environment,
            logging,
            gateway: SmsGatewaySettings::from_env(),
            token: ContinuationTokenSettings::from_env(),
        }
    }
}
