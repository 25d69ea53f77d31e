//! Tests for SMS sender selection

use ca_core::errors::ConfigError;

use super::support::settings;
use crate::sms::create_sms_sender;
use crate::InfrastructureError;

#[test]
fn test_simulation_sender_selected() {
    let mut raw = settings("https://sms.example.com/send");
    raw.simulation = true;

    let sender = create_sms_sender(&raw).unwrap();
    assert_eq!(sender.provider_name(), "simulation");
}

#[test]
fn test_simulation_ignores_gateway_settings() {
    let mut raw = ca_shared::config::SmsGatewaySettings::default();
    raw.simulation = true;

    assert!(create_sms_sender(&raw).is_ok());
}

#[test]
fn test_api_sender_selected() {
    let sender = create_sms_sender(&settings("https://sms.example.com/send")).unwrap();
    assert_eq!(sender.provider_name(), "api");
}

#[test]
fn test_invalid_settings_rejected() {
    let mut raw = settings("https://sms.example.com/send");
    raw.sender_id = None;

    match create_sms_sender(&raw) {
        Err(InfrastructureError::Config(ConfigError::RequiredField { field })) => {
            assert_eq!(field, "senderId");
        }
        other => panic!("expected missing senderId, got {:?}", other.map(|s| s.provider_name().to_string())),
    }
}
