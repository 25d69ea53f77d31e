//! SMS delivery capability used by the authentication flow

mod traits;

pub use traits::SmsSender;
