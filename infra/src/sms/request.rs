//! Gateway request construction
//!
//! Gateways disagree on field names, so every field name comes from the
//! configuration. The field set and order are the same for both encodings:
//! message, receiver, sender, then the API token when a token field is
//! configured.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{Map, Value};
use url::{form_urlencoded, Url};

use super::config::{GatewayConfig, RequestEncoding};

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

/// A fully built gateway POST request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayRequest {
    url: Url,
    destination: String,
    headers: Vec<(&'static str, String)>,
    content_type: &'static str,
    body: String,
}

impl GatewayRequest {
    /// Build the request for one message
    ///
    /// `destination` is used as given; normalization happens before this.
    pub fn build(config: &GatewayConfig, destination: &str, message: &str) -> Self {
        let mut fields: Vec<(&str, &str)> = vec![
            (config.message_attr(), message),
            (config.receiver_attr(), destination),
            (config.sender_attr(), config.sender_id()),
        ];
        if !config.token_attr().is_empty() {
            fields.push((config.token_attr(), config.auth_token()));
        }

        let (content_type, body) = match config.encoding() {
            RequestEncoding::Json => (CONTENT_TYPE_JSON, json_body(&fields)),
            RequestEncoding::Form => (CONTENT_TYPE_FORM, form_body(&fields)),
        };

        let mut headers = Vec::new();
        if !config.auth_user().is_empty() {
            headers.push((
                "Authorization",
                basic_auth_header(config.auth_user(), config.auth_token()),
            ));
        }

        Self {
            url: config.endpoint_url().clone(),
            destination: destination.to_string(),
            headers,
            content_type,
            body,
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Normalized phone number the message is addressed to
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Extra headers besides `Content-Type`
    pub fn headers(&self) -> &[(&'static str, String)] {
        &self.headers
    }

    pub fn content_type(&self) -> &'static str {
        self.content_type
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// One-line description for logs; leaves out the body and credentials
    pub fn describe(&self) -> String {
        format!("POST {} ({})", self.url, self.content_type)
    }
}

fn json_body(fields: &[(&str, &str)]) -> String {
    let mut object = Map::new();
    for (key, value) in fields {
        object.insert((*key).to_string(), Value::String((*value).to_string()));
    }
    Value::Object(object).to_string()
}

fn form_body(fields: &[(&str, &str)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields.iter().copied())
        .finish()
}

fn basic_auth_header(user: &str, token: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", user, token)))
}
