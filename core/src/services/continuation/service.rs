//! Continuation token service implementation

use ca_shared::config::ContinuationTokenSettings;
use tracing::{info, warn};

use crate::domain::entities::continuation_token::{ContinuationToken, ResumeOutcome};
use crate::errors::{DomainError, TokenError};

use super::facility::{JwtTokenFacility, TokenSigner, TokenVerifier};

/// A freshly issued token together with its signed serialization
#[derive(Debug, Clone)]
pub struct SignedContinuation {
    pub token: ContinuationToken,
    /// Compact signed form handed to the second device
    pub signed: String,
}

/// Issues continuation tokens and classifies resume attempts
///
/// Single use is not tracked here. The host's session store records
/// [`ContinuationToken::token_id`] once a token has been resumed.
pub struct ContinuationTokenService<F> {
    facility: F,
    default_expiration_secs: i64,
}

impl ContinuationTokenService<JwtTokenFacility> {
    /// Creates a service backed by the JWT facility
    pub fn from_settings(settings: &ContinuationTokenSettings) -> Result<Self, DomainError> {
        let facility = JwtTokenFacility::new(settings)?;
        Ok(Self::new(facility, settings.expiration_secs))
    }
}

impl<F: TokenSigner + TokenVerifier> ContinuationTokenService<F> {
    pub fn new(facility: F, default_expiration_secs: i64) -> Self {
        Self {
            facility,
            default_expiration_secs,
        }
    }

    /// Issues a token for a cross-device flow
    ///
    /// # Arguments
    ///
    /// * `user_id` - Identity the token speaks for
    /// * `expiration_secs` - Lifetime from now
    /// * `originating_session_id` - Pending authentication session to resume
    /// * `client_id` - Requesting client, becomes the issuer claim
    ///
    /// # Returns
    ///
    /// * `Ok(SignedContinuation)` - The token and its signed form
    /// * `Err(DomainError)` - Missing identifiers or signing failed
    pub fn issue(
        &self,
        user_id: &str,
        expiration_secs: i64,
        originating_session_id: &str,
        client_id: &str,
    ) -> Result<SignedContinuation, DomainError> {
        if user_id.is_empty() {
            return Err(TokenError::MissingClaim { claim: "sub".to_string() }.into());
        }
        if originating_session_id.is_empty() {
            return Err(TokenError::MissingClaim { claim: "oasid".to_string() }.into());
        }
        if expiration_secs <= 0 {
            warn!(
                user_id,
                expiration_secs, "issuing continuation token that is already expired"
            );
        }

        let token =
            ContinuationToken::issue(user_id, expiration_secs, originating_session_id, client_id);
        let signed = self.facility.sign(&token)?;

        info!(
            user_id,
            client_id,
            token_id = token.token_id(),
            expires_at = %token.expires_at(),
            "Issued continuation token"
        );

        Ok(SignedContinuation { token, signed })
    }

    /// Issues a token with the configured default lifetime
    pub fn issue_default(
        &self,
        user_id: &str,
        originating_session_id: &str,
        client_id: &str,
    ) -> Result<SignedContinuation, DomainError> {
        self.issue(user_id, self.default_expiration_secs, originating_session_id, client_id)
    }

    /// Verifies a presented token and decides whether the session may resume
    ///
    /// With `expected_subject` set, a token issued for anyone else is rejected.
    pub fn resume(&self, signed: &str, expected_subject: Option<&str>) -> ResumeOutcome {
        let result = self.facility.verify(signed).and_then(|token| {
            token.validate_claims(expected_subject)?;
            Ok(token)
        });

        if let Err(e) = &result {
            warn!(error = %e, "Refused continuation token");
        }

        ResumeOutcome::from(result)
    }
}
