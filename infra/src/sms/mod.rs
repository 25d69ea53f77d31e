//! SMS Service Module
//!
//! Delivery of one-time codes through a configurable HTTP SMS gateway.
//!
//! ## Features
//!
//! - **Gateway configuration**: validated once, field names chosen per gateway
//! - **Request builder**: JSON or form-encoded bodies, optional basic auth
//! - **Gateway client**: single POST with timeout, outcome classification
//! - **Facade**: [`SmsGateway`], the `SmsSender` the authentication flow calls
//! - **Simulation**: log-only sender for development

pub mod api_sms;
pub mod client;
pub mod config;
pub mod request;
pub mod simulated_sms;

// Re-export commonly used types
pub use api_sms::SmsGateway;
pub use client::{
    DeliveryObserver, DeliveryOutcome, GatewayClient, TracingDeliveryObserver, REDACTED,
};
pub use config::{GatewayConfig, RequestEncoding};
pub use request::{GatewayRequest, CONTENT_TYPE_FORM, CONTENT_TYPE_JSON};
pub use simulated_sms::SimulatedSmsSender;

use ca_core::services::sms::SmsSender;
use ca_shared::config::SmsGatewaySettings;
use tracing::info;

use crate::InfrastructureError;

#[cfg(test)]
mod tests;

/// Create an SMS sender based on configuration
///
/// Returns the simulation sender when `simulation` is set, otherwise the
/// HTTP gateway. Invalid gateway settings are an error here rather than at
/// send time.
pub fn create_sms_sender(
    settings: &SmsGatewaySettings,
) -> Result<Box<dyn SmsSender>, InfrastructureError> {
    let sender: Box<dyn SmsSender> = if settings.simulation {
        Box::new(SimulatedSmsSender::new(settings.country_code.clone()))
    } else {
        Box::new(SmsGateway::from_settings(settings)?)
    };

    info!(provider = sender.provider_name(), "SMS sender initialized");
    Ok(sender)
}
