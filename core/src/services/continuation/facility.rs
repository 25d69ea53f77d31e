//! Signed token facility
//!
//! The host owns the cryptography of signed tokens. The continuation service
//! only needs two capabilities from it, [`TokenSigner`] and [`TokenVerifier`].
//! [`JwtTokenFacility`] provides both with HMAC-signed JWTs.

use std::str::FromStr;

use ca_shared::config::ContinuationTokenSettings;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::continuation_token::ContinuationToken;
use crate::errors::{ConfigError, DomainError, TokenError};

/// Serializes and signs a continuation token
pub trait TokenSigner: Send + Sync {
    fn sign(&self, token: &ContinuationToken) -> Result<String, DomainError>;
}

/// Checks the signature of a serialized token and decodes it
///
/// Implementations verify the signature and expiry and the token type
/// discriminator. Subject binding is left to the caller.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, signed: &str) -> Result<ContinuationToken, TokenError>;
}

/// HMAC JWT implementation of the signed token facility
pub struct JwtTokenFacility {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenFacility {
    /// Creates a facility from token settings
    ///
    /// # Errors
    ///
    /// `DomainError::Config` when the secret is empty or the algorithm is not
    /// one of HS256, HS384, HS512.
    pub fn new(settings: &ContinuationTokenSettings) -> Result<Self, DomainError> {
        if settings.secret.is_empty() {
            return Err(ConfigError::required("secret").into());
        }

        let algorithm = Algorithm::from_str(&settings.algorithm).map_err(|_| {
            ConfigError::UnsupportedAlgorithm {
                algorithm: settings.algorithm.clone(),
            }
        })?;
        if !matches!(algorithm, Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512) {
            return Err(ConfigError::UnsupportedAlgorithm {
                algorithm: settings.algorithm.clone(),
            }
            .into());
        }

        let mut validation = Validation::new(algorithm);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp", "sub", "iss"]);

        Ok(Self {
            algorithm,
            encoding_key: EncodingKey::from_secret(settings.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(settings.secret.as_bytes()),
            validation,
        })
    }
}

impl TokenSigner for JwtTokenFacility {
    fn sign(&self, token: &ContinuationToken) -> Result<String, DomainError> {
        encode(&Header::new(self.algorithm), token, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }
}

impl TokenVerifier for JwtTokenFacility {
    fn verify(&self, signed: &str) -> Result<ContinuationToken, TokenError> {
        let data = decode::<ContinuationToken>(signed, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    TokenError::InvalidSignature
                }
                ErrorKind::MissingRequiredClaim(claim) => TokenError::MissingClaim {
                    claim: claim.clone(),
                },
                _ => TokenError::InvalidTokenFormat,
            })?;

        // Discriminator check, and expiry at `exp` itself.
        data.claims.validate_claims(None)?;
        Ok(data.claims)
    }
}
