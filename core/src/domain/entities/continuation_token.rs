//! Continuation token entity for cross-device login.
//!
//! A login started on one device (a browser) is finished on another (the
//! mobile app). The continuation token is the signed hand-over between the
//! two: it names the user, the client that asked for it, and the pending
//! authentication session that has to be resumed once the second device acts.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::TokenError;

/// Discriminator separating continuation tokens from other signed tokens of the host
pub const TOKEN_TYPE: &str = "app-action-token";

/// Claim name of the originating authentication session
pub const ORIGINATING_SESSION_CLAIM: &str = "oasid";

/// Signed, time-limited link between a user and a pending authentication session
///
/// Fields are private: a token is built once with [`ContinuationToken::issue`]
/// or deserialized from a verified envelope, and never altered afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinuationToken {
    /// Subject (user ID)
    #[serde(rename = "sub")]
    subject_user_id: String,

    /// Token kind, always [`TOKEN_TYPE`] for tokens issued here
    #[serde(rename = "typ")]
    token_type: String,

    /// Expiration timestamp
    exp: i64,

    /// Issued at timestamp
    iat: i64,

    /// Issuer (requesting client ID)
    #[serde(rename = "iss")]
    issuer: String,

    /// Unique token ID, lets the session store enforce single use
    #[serde(rename = "jti")]
    token_id: String,

    /// Authentication session to resume
    #[serde(rename = "oasid")]
    originating_session_id: String,
}

impl ContinuationToken {
    /// Creates a token that expires `expiration_secs` from now
    ///
    /// # Arguments
    ///
    /// * `user_id` - Identity the token speaks for
    /// * `expiration_secs` - Lifetime; zero or negative yields an already expired token
    /// * `originating_session_id` - Pending authentication session that must be resumed
    /// * `issuer_client_id` - Client that initiated the cross-device flow
    pub fn issue(
        user_id: impl Into<String>,
        expiration_secs: i64,
        originating_session_id: impl Into<String>,
        issuer_client_id: impl Into<String>,
    ) -> Self {
        let now = Utc::now().timestamp();

        Self {
            subject_user_id: user_id.into(),
            token_type: TOKEN_TYPE.to_string(),
            exp: now
                .saturating_add(expiration_secs)
                .clamp(DateTime::<Utc>::MIN_UTC.timestamp(), DateTime::<Utc>::MAX_UTC.timestamp()),
            iat: now,
            issuer: issuer_client_id.into(),
            token_id: Uuid::new_v4().to_string(),
            originating_session_id: originating_session_id.into(),
        }
    }

    pub fn subject_user_id(&self) -> &str {
        &self.subject_user_id
    }

    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn token_id(&self) -> &str {
        &self.token_id
    }

    pub fn originating_session_id(&self) -> &str {
        &self.originating_session_id
    }

    /// Expiration as a timestamp in seconds
    pub fn exp(&self) -> i64 {
        self.exp
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        to_datetime(self.exp)
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        to_datetime(self.iat)
    }

    /// Checks if the token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Checks if the token carries the continuation token discriminator
    pub fn has_expected_type(&self) -> bool {
        self.token_type == TOKEN_TYPE
    }

    pub fn is_for_subject(&self, user_id: &str) -> bool {
        self.subject_user_id == user_id
    }

    /// Checks the claims that do not depend on the signature
    ///
    /// The signature itself is checked by the verifier before this runs.
    pub fn validate_claims(&self, expected_subject: Option<&str>) -> Result<(), TokenError> {
        if !self.has_expected_type() {
            return Err(TokenError::TokenTypeMismatch {
                expected: TOKEN_TYPE.to_string(),
                actual: self.token_type.clone(),
            });
        }
        if self.is_expired() {
            return Err(TokenError::TokenExpired);
        }
        if let Some(subject) = expected_subject {
            if !self.is_for_subject(subject) {
                return Err(TokenError::SubjectMismatch);
            }
        }
        Ok(())
    }
}

// Out-of-range values saturate in the direction of their sign.
fn to_datetime(timestamp: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(timestamp, 0).single().unwrap_or(if timestamp > 0 {
        DateTime::<Utc>::MAX_UTC
    } else {
        DateTime::<Utc>::MIN_UTC
    })
}

/// Why a resume attempt was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    SignatureInvalid,
    TokenTypeMismatch,
    SubjectMismatch,
    Malformed,
}

/// Terminal outcome of presenting a continuation token
///
/// `Issued -> Resumed | Expired | Rejected`. Nothing here retries or reissues;
/// the host flow starts over with a fresh token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumeOutcome {
    /// Token accepted; the host resumes `originating_session_id()`
    Resumed(ContinuationToken),
    Expired,
    Rejected(RejectReason),
}

impl ResumeOutcome {
    pub fn is_resumed(&self) -> bool {
        matches!(self, ResumeOutcome::Resumed(_))
    }

    /// The session to resume, if the token was accepted
    pub fn session_id(&self) -> Option<&str> {
        match self {
            ResumeOutcome::Resumed(token) => Some(token.originating_session_id()),
            _ => None,
        }
    }
}

impl From<Result<ContinuationToken, TokenError>> for ResumeOutcome {
    fn from(result: Result<ContinuationToken, TokenError>) -> Self {
        match result {
            Ok(token) => ResumeOutcome::Resumed(token),
            Err(TokenError::TokenExpired) => ResumeOutcome::Expired,
            Err(TokenError::InvalidSignature) => ResumeOutcome::Rejected(RejectReason::SignatureInvalid),
            Err(TokenError::TokenTypeMismatch { .. }) => {
                ResumeOutcome::Rejected(RejectReason::TokenTypeMismatch)
            }
            Err(TokenError::SubjectMismatch) => ResumeOutcome::Rejected(RejectReason::SubjectMismatch),
            Err(_) => ResumeOutcome::Rejected(RejectReason::Malformed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_sets_claims() {
        let token = ContinuationToken::issue("user-1", 300, "session-abc", "mobile-app");

        assert_eq!(token.subject_user_id(), "user-1");
        assert_eq!(token.token_type(), TOKEN_TYPE);
        assert_eq!(token.issuer(), "mobile-app");
        assert_eq!(token.originating_session_id(), "session-abc");
        assert!(!token.token_id().is_empty());
        assert!(token.expires_at() > Utc::now());
        assert!(!token.is_expired());
        assert!(token.validate_claims(Some("user-1")).is_ok());
    }

    #[test]
    fn test_negative_lifetime_is_immediately_expired() {
        let token = ContinuationToken::issue("user-1", -1, "session-abc", "mobile-app");

        assert!(token.expires_at() < Utc::now());
        assert!(token.is_expired());
        assert_eq!(token.validate_claims(None), Err(TokenError::TokenExpired));
    }

    #[test]
    fn test_huge_lifetime_stays_in_the_future() {
        let token = ContinuationToken::issue("user-1", i64::MAX, "session-abc", "mobile-app");

        assert!(!token.is_expired());
        assert_eq!(token.exp(), DateTime::<Utc>::MAX_UTC.timestamp());
        assert_eq!(token.expires_at().timestamp(), DateTime::<Utc>::MAX_UTC.timestamp());

        let token = ContinuationToken::issue("user-1", i64::MIN, "session-abc", "mobile-app");
        assert!(token.is_expired());
        assert_eq!(token.expires_at().timestamp(), DateTime::<Utc>::MIN_UTC.timestamp());
    }

    #[test]
    fn test_out_of_range_timestamps_saturate() {
        assert_eq!(to_datetime(i64::MAX), DateTime::<Utc>::MAX_UTC);
        assert_eq!(to_datetime(i64::MIN), DateTime::<Utc>::MIN_UTC);
    }

    #[test]
    fn test_token_ids_are_unique() {
        let first = ContinuationToken::issue("user-1", 60, "session", "client");
        let second = ContinuationToken::issue("user-1", 60, "session", "client");
        assert_ne!(first.token_id(), second.token_id());
    }

    #[test]
    fn test_same_session_different_subjects() {
        let alice = ContinuationToken::issue("alice", 60, "session-1", "client");
        let bob = ContinuationToken::issue("bob", 60, "session-1", "client");

        assert_ne!(alice, bob);
        assert_eq!(alice.validate_claims(Some("bob")), Err(TokenError::SubjectMismatch));
        assert_eq!(bob.validate_claims(Some("alice")), Err(TokenError::SubjectMismatch));
    }

    #[test]
    fn test_wire_claim_names() {
        let token = ContinuationToken::issue("user-1", 60, "session-abc", "mobile-app");
        let json = serde_json::to_value(&token).unwrap();

        assert_eq!(json["sub"], "user-1");
        assert_eq!(json["typ"], TOKEN_TYPE);
        assert_eq!(json["iss"], "mobile-app");
        assert_eq!(json[ORIGINATING_SESSION_CLAIM], "session-abc");
        assert!(json["exp"].is_i64());
        assert!(json["iat"].is_i64());
        assert!(json["jti"].is_string());
    }

    #[test]
    fn test_foreign_type_is_rejected() {
        let json = serde_json::json!({
            "sub": "user-1",
            "typ": "reset-credentials",
            "exp": Utc::now().timestamp() + 60,
            "iat": Utc::now().timestamp(),
            "iss": "client",
            "jti": "id",
            "oasid": "session",
        });
        let token: ContinuationToken = serde_json::from_value(json).unwrap();

        assert!(matches!(
            token.validate_claims(None),
            Err(TokenError::TokenTypeMismatch { .. })
        ));
    }

    #[test]
    fn test_resume_outcome_from_verification() {
        let token = ContinuationToken::issue("user-1", 60, "session-abc", "client");

        let outcome = ResumeOutcome::from(Ok(token));
        assert!(outcome.is_resumed());
        assert_eq!(outcome.session_id(), Some("session-abc"));

        assert_eq!(ResumeOutcome::from(Err(TokenError::TokenExpired)), ResumeOutcome::Expired);
        assert_eq!(
            ResumeOutcome::from(Err(TokenError::InvalidSignature)),
            ResumeOutcome::Rejected(RejectReason::SignatureInvalid)
        );
        assert_eq!(
            ResumeOutcome::from(Err(TokenError::InvalidTokenFormat)),
            ResumeOutcome::Rejected(RejectReason::Malformed)
        );
    }
}
