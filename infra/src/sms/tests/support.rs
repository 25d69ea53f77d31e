//! Shared fixtures for the SMS tests

use std::sync::Mutex;

use ca_shared::config::SmsGatewaySettings;

use crate::sms::{DeliveryObserver, DeliveryOutcome, GatewayConfig, GatewayRequest};

/// Settings for a JSON gateway at `url` with `text`/`to`/`from` fields
pub fn settings(url: &str) -> SmsGatewaySettings {
    SmsGatewaySettings {
        api_url: Some(url.to_string()),
        sender_id: Some("CrossAuth".to_string()),
        message_attribute: Some("text".to_string()),
        receiver_attribute: Some("to".to_string()),
        sender_attribute: Some("from".to_string()),
        ..SmsGatewaySettings::default()
    }
}

pub fn config(settings: &SmsGatewaySettings) -> GatewayConfig {
    GatewayConfig::from_settings(settings).expect("test settings are valid")
}

/// Observer that keeps every outcome it sees
#[derive(Default)]
pub struct RecordingObserver {
    pub delivered: Mutex<Vec<(String, DeliveryOutcome)>>,
    pub failed: Mutex<Vec<(String, DeliveryOutcome)>>,
}

impl DeliveryObserver for RecordingObserver {
    fn on_delivered(&self, request: &GatewayRequest, outcome: &DeliveryOutcome) {
        self.delivered
            .lock()
            .unwrap()
            .push((request.destination().to_string(), outcome.clone()));
    }

    fn on_failed(&self, request: &GatewayRequest, outcome: &DeliveryOutcome) {
        self.failed
            .lock()
            .unwrap()
            .push((request.destination().to_string(), outcome.clone()));
    }
}
