//! HTTP API SMS gateway
//!
//! Facade the authentication flow talks to: normalizes the phone number,
//! builds the gateway request and dispatches it. Configuration is checked
//! once in the constructors; `send` never fails.

use std::sync::Arc;

use async_trait::async_trait;
use ca_core::services::sms::SmsSender;
use ca_shared::config::SmsGatewaySettings;
use ca_shared::phone::normalize_phone_number;
use tracing::debug;

use super::client::{DeliveryObserver, DeliveryOutcome, GatewayClient};
use super::config::GatewayConfig;
use super::request::GatewayRequest;
use crate::InfrastructureError;

/// SMS sender backed by a configurable HTTP gateway
pub struct SmsGateway {
    config: GatewayConfig,
    client: GatewayClient,
}

impl SmsGateway {
    /// Create a gateway that logs delivery outcomes through `tracing`
    pub fn new(config: GatewayConfig) -> Result<Self, InfrastructureError> {
        let client = GatewayClient::new(&config)?;
        Ok(Self { config, client })
    }

    /// Create a gateway reporting delivery outcomes to `observer`
    pub fn with_observer(
        config: GatewayConfig,
        observer: Arc<dyn DeliveryObserver>,
    ) -> Result<Self, InfrastructureError> {
        let client = GatewayClient::with_observer(&config, observer)?;
        Ok(Self { config, client })
    }

    /// Validate raw settings and create the gateway
    pub fn from_settings(settings: &SmsGatewaySettings) -> Result<Self, InfrastructureError> {
        Self::new(GatewayConfig::from_settings(settings)?)
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Deliver one message and return the outcome for inspection
    ///
    /// Failures are already reported to the observer when this returns.
    pub async fn deliver(&self, phone_number: &str, message: &str) -> DeliveryOutcome {
        let destination = normalize_phone_number(phone_number, self.config.country_code());
        let request = GatewayRequest::build(&self.config, &destination, message);
        debug!(request = %request.describe(), "Dispatching SMS");

        self.client.send(&request).await
    }
}

#[async_trait]
impl SmsSender for SmsGateway {
    async fn send(&self, phone_number: &str, message: &str) {
        self.deliver(phone_number, message).await;
    }

    fn provider_name(&self) -> &str {
        "api"
    }
}
