// Task-list data source
//
// The task-list and to-do shapes are declared in the schema but have no
// persistence yet. The trait makes that gap explicit: the API layer depends
// on the interface, and the only implementation returns empty results.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;

use crate::auth::Identity;
use crate::store::StoreError;

// `progres` is spelled the way the published schema spells it.
#[derive(Debug, Clone)]
pub struct TaskListRecord {
    pub id: ObjectId,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub progres: f64,
    pub user_ids: Vec<ObjectId>,
}

#[derive(Debug, Clone)]
pub struct ToDoRecord {
    pub id: ObjectId,
    pub content: String,
    pub is_complete: bool,
    pub task_list_id: ObjectId,
}

/// Source of task lists and their to-dos.
#[async_trait]
pub trait TaskListSource: Send + Sync {
    /// Task lists visible to the given identity.
    async fn lists_for(&self, identity: &Identity) -> Result<Vec<TaskListRecord>, StoreError>;

    /// To-dos belonging to one task list.
    async fn todos_for_list(&self, list_id: &ObjectId) -> Result<Vec<ToDoRecord>, StoreError>;

    /// Look up a task list by identifier.
    async fn find_list(&self, id: &ObjectId) -> Result<Option<TaskListRecord>, StoreError>;
}

/// Stub source: every caller gets empty results regardless of identity.
pub struct EmptyTaskListSource;

#[async_trait]
impl TaskListSource for EmptyTaskListSource {
    async fn lists_for(&self, _identity: &Identity) -> Result<Vec<TaskListRecord>, StoreError> {
        Ok(Vec::new())
    }

    async fn todos_for_list(&self, _list_id: &ObjectId) -> Result<Vec<ToDoRecord>, StoreError> {
        Ok(Vec::new())
    }

    async fn find_list(&self, _id: &ObjectId) -> Result<Option<TaskListRecord>, StoreError> {
        Ok(None)
    }
}
