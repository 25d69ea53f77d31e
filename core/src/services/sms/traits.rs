//! Traits for SMS service integration

use async_trait::async_trait;

/// Trait for SMS delivery during a one-time code step
///
/// Delivery is fire-and-forget relative to the authentication flow: an
/// implementation reports failures through its own logging and always returns.
/// The user asks for a resend when no code arrives.
#[async_trait]
pub trait SmsSender: Send + Sync {
    /// Send `message` to `phone_number`
    async fn send(&self, phone_number: &str, message: &str);

    /// Name of the delivery backend, for logs
    fn provider_name(&self) -> &str;
}
