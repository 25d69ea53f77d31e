//! Unit tests for the continuation token service

use std::sync::Mutex;

use ca_shared::config::ContinuationTokenSettings;

use crate::domain::entities::continuation_token::{ContinuationToken, RejectReason, ResumeOutcome};
use crate::errors::{DomainError, TokenError};
use crate::services::continuation::{ContinuationTokenService, TokenSigner, TokenVerifier};

fn service() -> ContinuationTokenService<crate::services::continuation::JwtTokenFacility> {
    ContinuationTokenService::from_settings(
        &ContinuationTokenSettings::new("service-test-secret").with_expiration_secs(90),
    )
    .unwrap()
}

/// Facility that keeps tokens in memory and hands out their index
struct MockFacility {
    tokens: Mutex<Vec<ContinuationToken>>,
}

impl MockFacility {
    fn new() -> Self {
        Self {
            tokens: Mutex::new(Vec::new()),
        }
    }
}

impl TokenSigner for MockFacility {
    fn sign(&self, token: &ContinuationToken) -> Result<String, DomainError> {
        let mut tokens = self.tokens.lock().unwrap();
        tokens.push(token.clone());
        Ok((tokens.len() - 1).to_string())
    }
}

impl TokenVerifier for MockFacility {
    fn verify(&self, signed: &str) -> Result<ContinuationToken, TokenError> {
        let index: usize = signed.parse().map_err(|_| TokenError::InvalidTokenFormat)?;
        self.tokens
            .lock()
            .unwrap()
            .get(index)
            .cloned()
            .ok_or(TokenError::InvalidSignature)
    }
}

#[test]
fn test_issue_then_resume() {
    let service = service();
    let issued = service.issue("user-1", 60, "session-abc", "mobile-app").unwrap();

    assert_eq!(issued.token.subject_user_id(), "user-1");
    assert_eq!(issued.token.issuer(), "mobile-app");
    assert_eq!(issued.signed.split('.').count(), 3);

    let outcome = service.resume(&issued.signed, Some("user-1"));
    assert_eq!(outcome, ResumeOutcome::Resumed(issued.token.clone()));
    assert_eq!(outcome.session_id(), Some("session-abc"));
}

#[test]
fn test_issue_default_uses_configured_lifetime() {
    let issued = service().issue_default("user-1", "session-abc", "mobile-app").unwrap();
    let lifetime = issued.token.exp() - issued.token.issued_at().timestamp();
    assert_eq!(lifetime, 90);
}

#[test]
fn test_expired_token_resume() {
    let service = service();
    let issued = service.issue("user-1", -1, "session-abc", "mobile-app").unwrap();

    assert!(issued.token.is_expired());
    assert_eq!(service.resume(&issued.signed, None), ResumeOutcome::Expired);
}

#[test]
fn test_tokens_for_same_session_are_bound_to_their_subject() {
    let service = service();
    let alice = service.issue("alice", 60, "session-1", "app").unwrap();
    let bob = service.issue("bob", 60, "session-1", "app").unwrap();

    assert_ne!(alice.signed, bob.signed);
    assert_ne!(alice.token.subject_user_id(), bob.token.subject_user_id());

    assert_eq!(
        service.resume(&alice.signed, Some("bob")),
        ResumeOutcome::Rejected(RejectReason::SubjectMismatch)
    );
    assert_eq!(
        service.resume(&bob.signed, Some("alice")),
        ResumeOutcome::Rejected(RejectReason::SubjectMismatch)
    );
    assert!(service.resume(&alice.signed, Some("alice")).is_resumed());
    assert!(service.resume(&bob.signed, Some("bob")).is_resumed());
}

#[test]
fn test_signature_failure_is_rejected() {
    let service = service();
    let issued = service.issue("user-1", 60, "session-abc", "app").unwrap();
    let foreign = ContinuationTokenService::from_settings(&ContinuationTokenSettings::new("other"))
        .unwrap()
        .issue("user-1", 60, "session-abc", "app")
        .unwrap();
    let (unsigned, _) = issued.signed.rsplit_once('.').unwrap();
    let (_, foreign_signature) = foreign.signed.rsplit_once('.').unwrap();
    let tampered = format!("{}.{}", unsigned, foreign_signature);

    assert_eq!(
        service.resume(&tampered, None),
        ResumeOutcome::Rejected(RejectReason::SignatureInvalid)
    );
}

#[test]
fn test_missing_identifiers_are_refused_at_issue() {
    let service = service();

    let result = service.issue("", 60, "session", "app");
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::MissingClaim { ref claim })) if claim == "sub"
    ));

    let result = service.issue("user-1", 60, "", "app");
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::MissingClaim { ref claim })) if claim == "oasid"
    ));
}

#[test]
fn test_service_enforces_claims_with_any_facility() {
    let service = ContinuationTokenService::new(MockFacility::new(), 60);

    let issued = service.issue("user-1", 60, "session-abc", "app").unwrap();
    assert!(service.resume(&issued.signed, Some("user-1")).is_resumed());

    // The mock facility never checks expiry; the service still does.
    let expired = service.issue("user-1", -5, "session-abc", "app").unwrap();
    assert_eq!(service.resume(&expired.signed, None), ResumeOutcome::Expired);

    assert_eq!(
        service.resume("99", None),
        ResumeOutcome::Rejected(RejectReason::SignatureInvalid)
    );
    assert_eq!(
        service.resume("garbage", None),
        ResumeOutcome::Rejected(RejectReason::Malformed)
    );
}
