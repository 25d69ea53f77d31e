//! Continuation token configuration

use serde::{Deserialize, Serialize};

const DEFAULT_SECRET: &str = "development-secret-please-change-in-production";

/// Signing and lifetime settings for continuation tokens
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContinuationTokenSettings {
    /// Shared secret for HMAC signing
    pub secret: String,

    /// Algorithm for token signing (HS256, HS384 or HS512)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Lifetime used when the caller does not pick one, in seconds
    #[serde(default = "default_expiration_secs")]
    pub expiration_secs: i64,
}

impl Default for ContinuationTokenSettings {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
            algorithm: default_algorithm(),
            expiration_secs: default_expiration_secs(),
        }
    }
}

impl ContinuationTokenSettings {
    /// Create settings with the given secret and default lifetime
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set the default lifetime in seconds
    pub fn with_expiration_secs(mut self, secs: i64) -> Self {
        self.expiration_secs = secs;
        self
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            secret: std::env::var("CONTINUATION_TOKEN_SECRET").unwrap_or(defaults.secret),
            algorithm: std::env::var("CONTINUATION_TOKEN_ALGORITHM").unwrap_or(defaults.algorithm),
            expiration_secs: std::env::var("CONTINUATION_TOKEN_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.expiration_secs),
        }
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

fn default_algorithm() -> String {
    String::from("HS256")
}

fn default_expiration_secs() -> i64 {
    300 // 5 minutes
}
