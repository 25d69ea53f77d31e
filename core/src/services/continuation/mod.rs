//! Continuation token service module
//!
//! This module handles the cross-device login hand-over:
//! - Signing and verification capability traits for the host's token facility
//! - A JWT implementation of that capability
//! - Issuing tokens at flow start and classifying resume attempts

mod facility;
mod service;

#[cfg(test)]
mod tests;

pub use facility::{JwtTokenFacility, TokenSigner, TokenVerifier};
pub use service::{ContinuationTokenService, SignedContinuation};
