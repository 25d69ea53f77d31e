//! Domain entities representing core business objects.

pub mod continuation_token;

// Re-export commonly used types
pub use continuation_token::{
    ContinuationToken, RejectReason, ResumeOutcome, ORIGINATING_SESSION_CLAIM, TOKEN_TYPE,
};
