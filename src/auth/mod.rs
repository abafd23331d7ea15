// Authentication module
// Password hashing, session token issue/verify, and per-request identity

pub mod error;
pub mod identity;
pub mod password;
pub mod token;

// Re-export commonly used types
pub use error::AuthError;
pub use identity::{resolve_identity, Identity};
pub use password::PasswordHasher;
pub use token::{TokenCodec, TokenOutcome};
