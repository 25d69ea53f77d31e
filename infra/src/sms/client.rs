//! HTTP delivery to the SMS gateway
//!
//! A single POST per message, no retry. Every result, including network
//! errors and timeouts, comes back as a [`DeliveryOutcome`] value; nothing is
//! raised past [`GatewayClient::send`].

use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use tracing::{error, info};

use super::config::GatewayConfig;
use super::request::GatewayRequest;
use crate::InfrastructureError;

/// Response summary used when response payloads are hidden
pub const REDACTED: &str = "redacted";

/// Result of one delivery attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryOutcome {
    /// The gateway answered with a 2xx status
    pub success: bool,
    /// HTTP status code, 0 when no response arrived
    pub status_code: u16,
    /// Response body, transport error text, or [`REDACTED`]
    pub body_summary: String,
    /// Short failure cause, kept even when the body is redacted
    pub cause: Option<String>,
}

/// Receives delivery outcomes, e.g. to log or count them
pub trait DeliveryObserver: Send + Sync {
    fn on_delivered(&self, request: &GatewayRequest, outcome: &DeliveryOutcome);

    fn on_failed(&self, request: &GatewayRequest, outcome: &DeliveryOutcome);
}

/// Observer that reports outcomes as tracing events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDeliveryObserver;

impl DeliveryObserver for TracingDeliveryObserver {
    fn on_delivered(&self, request: &GatewayRequest, outcome: &DeliveryOutcome) {
        info!(
            target: "sms_gateway",
            destination = request.destination(),
            status = outcome.status_code,
            response = %outcome.body_summary,
            "Sent SMS"
        );
    }

    fn on_failed(&self, request: &GatewayRequest, outcome: &DeliveryOutcome) {
        error!(
            target: "sms_gateway",
            destination = request.destination(),
            status = outcome.status_code,
            cause = outcome.cause.as_deref().unwrap_or("unknown"),
            response = %outcome.body_summary,
            request = %request.describe(),
            "Failed to send SMS. Validate your config."
        );
    }
}

/// Sends gateway requests and classifies the responses
pub struct GatewayClient {
    http: reqwest::Client,
    hide_response_payload: bool,
    observer: Arc<dyn DeliveryObserver>,
}

impl GatewayClient {
    /// Create a client that logs outcomes through `tracing`
    pub fn new(config: &GatewayConfig) -> Result<Self, InfrastructureError> {
        Self::with_observer(config, Arc::new(TracingDeliveryObserver))
    }

    /// Create a client reporting to a custom observer
    pub fn with_observer(
        config: &GatewayConfig,
        observer: Arc<dyn DeliveryObserver>,
    ) -> Result<Self, InfrastructureError> {
        let http = reqwest::Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            http,
            hide_response_payload: config.hide_response_payload(),
            observer,
        })
    }

    /// POST the request once and report the outcome
    pub async fn send(&self, request: &GatewayRequest) -> DeliveryOutcome {
        let mut builder = self
            .http
            .post(request.url().clone())
            .header(CONTENT_TYPE, request.content_type())
            .body(request.body().to_string());
        for (name, value) in request.headers() {
            builder = builder.header(*name, value.as_str());
        }

        let outcome = match builder.send().await {
            Ok(response) => {
                let status = response.status();
                let body = match response.text().await {
                    Ok(text) => text,
                    Err(e) => format!("unreadable response body: {}", e),
                };
                let success = status.is_success();

                DeliveryOutcome {
                    success,
                    status_code: status.as_u16(),
                    body_summary: self.summarize(body),
                    cause: (!success).then(|| format!("gateway responded with {}", status)),
                }
            }
            Err(e) => DeliveryOutcome {
                success: false,
                status_code: 0,
                body_summary: self.summarize(e.to_string()),
                cause: Some(transport_cause(&e).to_string()),
            },
        };

        if outcome.success {
            self.observer.on_delivered(request, &outcome);
        } else {
            self.observer.on_failed(request, &outcome);
        }
        outcome
    }

    fn summarize(&self, text: String) -> String {
        if self.hide_response_payload {
            REDACTED.to_string()
        } else {
            text
        }
    }
}

fn transport_cause(error: &reqwest::Error) -> &'static str {
    if error.is_timeout() {
        "request timed out"
    } else if error.is_connect() {
        "connection failed"
    } else {
        "request failed"
    }
}
