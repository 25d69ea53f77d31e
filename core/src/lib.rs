//! # CrossAuth Core
//!
//! Domain layer for second-factor delivery and cross-device login continuation.
//! This crate contains the continuation token value object, the signing and
//! verification capability it relies on, the SMS delivery capability the
//! authentication flow calls, and the error types shared by both.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
