//! SMS gateway configuration surface
//!
//! The host hands component configuration over as a flat string map whose key
//! names are fixed (`apiurl`, `senderId`, ...). [`SmsGatewaySettings`] mirrors
//! that map one-to-one. It is deliberately unvalidated: the gateway facade
//! checks required fields once, when it is constructed.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default per-request timeout for gateway calls, in seconds
pub const DEFAULT_GATEWAY_TIMEOUT_SECS: u64 = 10;

/// Configuration keys paired with the environment variables that feed them.
const ENV_KEYS: &[(&str, &str)] = &[
    ("apiurl", "SMS_API_URL"),
    ("urlencode", "SMS_URLENCODE"),
    ("apitoken", "SMS_API_TOKEN"),
    ("apiuser", "SMS_API_USER"),
    ("senderId", "SMS_SENDER_ID"),
    ("countrycode", "SMS_COUNTRY_CODE"),
    ("apitokenattribute", "SMS_API_TOKEN_ATTRIBUTE"),
    ("messageattribute", "SMS_MESSAGE_ATTRIBUTE"),
    ("receiverattribute", "SMS_RECEIVER_ATTRIBUTE"),
    ("senderattribute", "SMS_SENDER_ATTRIBUTE"),
    ("hideResponsePayload", "SMS_HIDE_RESPONSE_PAYLOAD"),
    ("simulation", "SMS_SIMULATION"),
    ("timeoutSecs", "SMS_TIMEOUT_SECS"),
];

/// Raw SMS gateway settings as supplied by the host
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SmsGatewaySettings {
    /// Gateway endpoint receiving the POST request
    #[serde(rename = "apiurl", default)]
    pub api_url: Option<String>,

    /// Send a form-encoded body instead of JSON
    #[serde(rename = "urlencode", default)]
    pub url_encode: bool,

    /// API token, sent as a body field and/or as the basic auth password
    #[serde(rename = "apitoken", default)]
    pub api_token: String,

    /// Basic auth user; empty disables the Authorization header
    #[serde(rename = "apiuser", default)]
    pub api_user: String,

    /// Sender identity reported to the gateway
    #[serde(rename = "senderId", default)]
    pub sender_id: Option<String>,

    /// Default dialing prefix without `+`; empty disables normalization
    #[serde(rename = "countrycode", default)]
    pub country_code: String,

    /// Body field carrying the API token; empty omits the field
    #[serde(rename = "apitokenattribute", default)]
    pub api_token_attribute: String,

    /// Body field carrying the message text
    #[serde(rename = "messageattribute", default)]
    pub message_attribute: Option<String>,

    /// Body field carrying the destination number
    #[serde(rename = "receiverattribute", default)]
    pub receiver_attribute: Option<String>,

    /// Body field carrying the sender identity
    #[serde(rename = "senderattribute", default)]
    pub sender_attribute: Option<String>,

    /// Replace gateway response bodies with "redacted" in logs
    #[serde(rename = "hideResponsePayload", default)]
    pub hide_response_payload: bool,

    /// Log messages instead of sending them
    #[serde(default)]
    pub simulation: bool,

    /// Per-request timeout in seconds
    #[serde(rename = "timeoutSecs", default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SmsGatewaySettings {
    fn default() -> Self {
        Self {
            api_url: None,
            url_encode: false,
            api_token: String::new(),
            api_user: String::new(),
            sender_id: None,
            country_code: String::new(),
            api_token_attribute: String::new(),
            message_attribute: None,
            receiver_attribute: None,
            sender_attribute: None,
            hide_response_payload: false,
            simulation: false,
            timeout_secs: DEFAULT_GATEWAY_TIMEOUT_SECS,
        }
    }
}

impl SmsGatewaySettings {
    /// Build settings from the host's component configuration map
    pub fn from_map(config: &HashMap<String, String>) -> Self {
        Self::from_lookup(|key| config.get(key).cloned())
    }

    /// Build settings from `SMS_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| {
            ENV_KEYS
                .iter()
                .find(|(name, _)| *name == key)
                .and_then(|(_, var)| std::env::var(var).ok())
        })
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let flag = |key: &str| get(key).map(|v| parse_flag(&v)).unwrap_or(false);

        Self {
            api_url: get("apiurl"),
            url_encode: flag("urlencode"),
            api_token: get("apitoken").unwrap_or_default(),
            api_user: get("apiuser").unwrap_or_default(),
            sender_id: get("senderId"),
            country_code: get("countrycode").unwrap_or_default(),
            api_token_attribute: get("apitokenattribute").unwrap_or_default(),
            message_attribute: get("messageattribute"),
            receiver_attribute: get("receiverattribute"),
            sender_attribute: get("senderattribute"),
            hide_response_payload: flag("hideResponsePayload"),
            simulation: flag("simulation"),
            timeout_secs: get("timeoutSecs")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_GATEWAY_TIMEOUT_SECS),
        }
    }
}

/// Only a case-insensitive "true" enables a flag.
fn parse_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

fn default_timeout_secs() -> u64 {
    DEFAULT_GATEWAY_TIMEOUT_SECS
}
