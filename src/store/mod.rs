// Credential store: user records and the storage trait behind them

mod mongo;

#[cfg(test)]
pub mod memory;

pub use mongo::MongoUserStore;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A persisted user document. The `password` field always holds an Argon2
/// PHC string, never the plaintext.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Fields for a user about to be inserted; the store assigns the identifier.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub avatar: Option<String>,
}

/// Store failures propagate unchanged to the caller; no retry is attempted.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

/// Access to the user collection. Production uses [`MongoUserStore`]; tests
/// run against an in-memory implementation.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by exact email match.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Find a user by identifier.
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<UserRecord>, StoreError>;

    /// Insert a new user and return the stored record with its assigned id.
    async fn insert_user(&self, user: NewUser) -> Result<UserRecord, StoreError>;
}
