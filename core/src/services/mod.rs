//! Business services containing domain logic and use cases.

pub mod continuation;
pub mod sms;

// Re-export commonly used types
pub use continuation::{
    ContinuationTokenService, JwtTokenFacility, SignedContinuation, TokenSigner, TokenVerifier,
};
pub use sms::SmsSender;
