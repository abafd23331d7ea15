// MongoDB-backed user store

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};

use crate::store::{NewUser, StoreError, UserRecord, UserStore};

const USERS_COLLECTION: &str = "users";

/// User store over a single `users` collection.
pub struct MongoUserStore {
    users: Collection<UserRecord>,
}

impl MongoUserStore {
    pub fn new(db: &Database) -> Self {
        Self {
            users: db.collection(USERS_COLLECTION),
        }
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let user = self.users.find_one(doc! { "email": email }, None).await?;
        Ok(user)
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<UserRecord>, StoreError> {
        let user = self.users.find_one(doc! { "_id": id }, None).await?;
        Ok(user)
    }

    async fn insert_user(&self, user: NewUser) -> Result<UserRecord, StoreError> {
        let record = UserRecord {
            id: ObjectId::new(),
            name: user.name,
            email: user.email,
            password: user.password,
            avatar: user.avatar,
        };
        self.users.insert_one(&record, None).await?;
        tracing::debug!("inserted user {}", record.id);
        Ok(record)
    }
}
