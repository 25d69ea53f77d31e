//! Shared utilities and configuration types for CrossAuth
//!
//! This crate provides functionality used by both the domain and the
//! infrastructure layers:
//! - Configuration types (environment, logging, SMS gateway, continuation tokens)
//! - Phone number normalization

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, ContinuationTokenSettings, Environment, LogFormat, LoggingConfig,
    SmsGatewaySettings,
};
pub use utils::phone;
