//! Simulation SMS sender
//!
//! Stands in for the gateway during development: messages are written to the
//! log instead of being sent.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use ca_core::services::sms::SmsSender;
use ca_shared::phone::{mask_phone_number, normalize_phone_number};
use tracing::warn;

/// SMS sender that only logs what it would send
#[derive(Clone, Default)]
pub struct SimulatedSmsSender {
    country_code: String,
    message_count: Arc<AtomicU64>,
}

impl SimulatedSmsSender {
    /// Create a simulation sender normalizing numbers against `country_code`
    ///
    /// Surrounding whitespace is trimmed, as for the HTTP gateway.
    pub fn new(country_code: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into().trim().to_string(),
            message_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Get the total number of simulated messages
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SmsSender for SimulatedSmsSender {
    async fn send(&self, phone_number: &str, message: &str) {
        let destination = normalize_phone_number(phone_number, &self.country_code);
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        warn!(
            target: "sms_gateway",
            provider = "simulation",
            destination = %mask_phone_number(&destination),
            count,
            "***** SIMULATION MODE ***** Would send SMS with text: {}",
            message
        );
    }

    fn provider_name(&self) -> &str {
        "simulation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_simulated_send_counts_messages() {
        let sender = SimulatedSmsSender::new("49");

        for i in 1..=3 {
            sender.send("15112345678", &format!("Code {}", i)).await;
            assert_eq!(sender.get_message_count(), i);
        }
    }

    #[tokio::test]
    async fn test_clones_share_the_counter() {
        let sender = SimulatedSmsSender::new("");
        let clone = sender.clone();

        clone.send("+4915112345678", "Code 1").await;
        assert_eq!(sender.get_message_count(), 1);
    }

    #[test]
    fn test_country_code_is_trimmed() {
        let sender = SimulatedSmsSender::new(" 49 ");
        assert_eq!(sender.country_code(), "49");
        assert_eq!(
            normalize_phone_number("15112345678", sender.country_code()),
            "4915112345678"
        );
    }

    #[test]
    fn test_provider_name() {
        assert_eq!(SimulatedSmsSender::default().provider_name(), "simulation");
    }
}
