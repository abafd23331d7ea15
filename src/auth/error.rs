// Authentication error types

use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

/// Authentication failures.
///
/// `InvalidCredentials` is the only variant whose message reaches the
/// caller verbatim; everything else is scrubbed to a generic message so no
/// internals leak through the API.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Sign-in with an unknown email or a wrong password. Both cases
    /// collapse into this one variant so the error alone cannot be used
    /// to enumerate registered emails.
    #[error("Invalid credentials!")]
    InvalidCredentials,

    #[error("token generation error: {0}")]
    TokenGeneration(String),

    #[error("password hashing error")]
    PasswordHash,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AuthError {
    /// Convert into the error shape exposed by the GraphQL API. Cannot be a
    /// `From` impl: async-graphql's blanket `impl<T: Display> From<T> for
    /// Error` already covers this type, so coherence forbids another one.
    pub fn into_graphql_error(self) -> async_graphql::Error {
        let err = self;
        match &err {
            AuthError::InvalidCredentials => async_graphql::Error::new("Invalid credentials!"),
            AuthError::TokenGeneration(msg) => {
                error!("token generation error: {}", msg);
                async_graphql::Error::new("Internal server error")
            }
            AuthError::PasswordHash => {
                error!("password hashing error");
                async_graphql::Error::new("Internal server error")
            }
            AuthError::Store(store_err) => {
                error!("store error during auth: {}", store_err);
                async_graphql::Error::new("Internal server error")
            }
        }
    }
}
