// In-memory user store for tests

use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::store::{NewUser, StoreError, UserRecord, UserStore};

/// Test double backing the [`UserStore`] trait without a live database.
/// Mirrors the permissive semantics of the real collection: no unique
/// index on email, identifiers assigned on insert.
#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<UserRecord>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records, for asserting on duplicate sign-ups.
    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    /// Direct read of a stored record by email, bypassing the trait.
    pub fn stored_by_email(&self, email: &str) -> Option<UserRecord> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned()
    }

    /// Remove a record, simulating a deleted account behind a live token.
    pub fn remove(&self, id: &ObjectId) {
        self.users.lock().unwrap().retain(|u| &u.id != id);
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.stored_by_email(email))
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<UserRecord>, StoreError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| &u.id == id).cloned())
    }

    async fn insert_user(&self, user: NewUser) -> Result<UserRecord, StoreError> {
        let record = UserRecord {
            id: ObjectId::new(),
            name: user.name,
            email: user.email,
            password: user.password,
            avatar: user.avatar,
        };
        self.users.lock().unwrap().push(record.clone());
        Ok(record)
    }
}
