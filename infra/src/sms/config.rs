//! Validated SMS gateway configuration

use std::time::Duration;

use ca_core::errors::ConfigError;
use ca_shared::config::SmsGatewaySettings;
use url::Url;

/// Wire format of the gateway request body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestEncoding {
    /// `application/json`
    Json,
    /// `application/x-www-form-urlencoded`
    Form,
}

/// Immutable gateway configuration, validated once at construction
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    endpoint_url: Url,
    encoding: RequestEncoding,
    auth_token: String,
    auth_user: String,
    sender_id: String,
    country_code: String,
    token_attr: String,
    message_attr: String,
    receiver_attr: String,
    sender_attr: String,
    hide_response_payload: bool,
    timeout: Duration,
}

impl GatewayConfig {
    /// Validate raw settings into a gateway configuration
    ///
    /// # Errors
    ///
    /// * `ConfigError::RequiredField` - `apiurl`, `senderId`, `messageattribute`,
    ///   `receiverattribute` or `senderattribute` is missing or empty
    /// * `ConfigError::InvalidValue` - `apiurl` is not an absolute http(s) URL,
    ///   the timeout is zero, or two body fields share a name
    pub fn from_settings(settings: &SmsGatewaySettings) -> Result<Self, ConfigError> {
        let raw_url = required("apiurl", settings.api_url.as_deref())?;
        let endpoint_url =
            Url::parse(raw_url).map_err(|e| ConfigError::invalid("apiurl", e.to_string()))?;
        if !matches!(endpoint_url.scheme(), "http" | "https") {
            return Err(ConfigError::invalid(
                "apiurl",
                format!("unsupported scheme '{}'", endpoint_url.scheme()),
            ));
        }

        if settings.timeout_secs == 0 {
            return Err(ConfigError::invalid("timeoutSecs", "must be at least one second"));
        }

        let sender_id = required("senderId", settings.sender_id.as_deref())?;
        let message_attr = required("messageattribute", settings.message_attribute.as_deref())?;
        let receiver_attr = required("receiverattribute", settings.receiver_attribute.as_deref())?;
        let sender_attr = required("senderattribute", settings.sender_attribute.as_deref())?;
        let token_attr = settings.api_token_attribute.as_str();

        let mut fields = vec![
            ("messageattribute", message_attr),
            ("receiverattribute", receiver_attr),
            ("senderattribute", sender_attr),
        ];
        if !token_attr.is_empty() {
            fields.push(("apitokenattribute", token_attr));
        }
        // A shared name would overwrite one field with another in the body.
        for (i, (key, name)) in fields.iter().enumerate() {
            if let Some((earlier, _)) = fields[..i].iter().find(|(_, other)| other == name) {
                return Err(ConfigError::invalid(
                    *key,
                    format!("field name '{}' is already used by {}", name, earlier),
                ));
            }
        }

        Ok(Self {
            endpoint_url,
            encoding: if settings.url_encode {
                RequestEncoding::Form
            } else {
                RequestEncoding::Json
            },
            auth_token: settings.api_token.clone(),
            auth_user: settings.api_user.clone(),
            sender_id: sender_id.to_string(),
            country_code: settings.country_code.trim().to_string(),
            token_attr: token_attr.to_string(),
            message_attr: message_attr.to_string(),
            receiver_attr: receiver_attr.to_string(),
            sender_attr: sender_attr.to_string(),
            hide_response_payload: settings.hide_response_payload,
            timeout: Duration::from_secs(settings.timeout_secs),
        })
    }

    pub fn endpoint_url(&self) -> &Url {
        &self.endpoint_url
    }

    pub fn encoding(&self) -> RequestEncoding {
        self.encoding
    }

    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }

    pub fn auth_user(&self) -> &str {
        &self.auth_user
    }

    pub fn sender_id(&self) -> &str {
        &self.sender_id
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Body field for the API token; empty means the field is not sent
    pub fn token_attr(&self) -> &str {
        &self.token_attr
    }

    pub fn message_attr(&self) -> &str {
        &self.message_attr
    }

    pub fn receiver_attr(&self) -> &str {
        &self.receiver_attr
    }

    pub fn sender_attr(&self) -> &str {
        &self.sender_attr
    }

    pub fn hide_response_payload(&self) -> bool {
        self.hide_response_payload
    }

    /// Per-request network timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

fn required<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str, ConfigError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::required(field)),
    }
}
