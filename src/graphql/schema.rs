// Schema declaration: types, queries, mutations

use async_graphql::{Context, EmptySubscription, InputObject, Object, Result, Schema, SimpleObject, ID};

use crate::auth::{AuthError, PasswordHasher};
use crate::graphql::context::RequestContext;
use crate::graphql::tasks::{TaskListRecord, ToDoRecord};
use crate::store::{NewUser, UserRecord};

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema() -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription).finish()
}

/// An account, as exposed by the API. Wraps the stored record; the stored
/// password hash is deliberately not a field.
pub struct User(pub UserRecord);

#[Object]
impl User {
    /// External identifier: the hex form of the stored `_id`.
    async fn id(&self) -> ID {
        ID(self.0.id.to_hex())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn email(&self) -> &str {
        &self.0.email
    }

    async fn avatar(&self) -> Option<&str> {
        self.0.avatar.as_deref()
    }
}

/// A user paired with a freshly issued session token. Built once per
/// successful sign-in or sign-up and returned to the caller; never stored.
#[derive(SimpleObject)]
pub struct AuthUser {
    pub user: User,
    pub token: String,
}

pub struct TaskList(pub TaskListRecord);

#[Object]
impl TaskList {
    async fn id(&self) -> ID {
        ID(self.0.id.to_hex())
    }

    async fn created_at(&self) -> String {
        self.0.created_at.to_rfc3339()
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    async fn progres(&self) -> f64 {
        self.0.progres
    }

    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let req = ctx.data::<RequestContext>()?;
        let mut users = Vec::with_capacity(self.0.user_ids.len());
        for id in &self.0.user_ids {
            if let Some(user) = req.store.find_by_id(id).await.map_err(|e| AuthError::from(e).into_graphql_error())? {
                users.push(User(user));
            }
        }
        Ok(users)
    }

    async fn todos(&self, ctx: &Context<'_>) -> Result<Vec<ToDo>> {
        let req = ctx.data::<RequestContext>()?;
        let todos = req
            .tasks
            .todos_for_list(&self.0.id)
            .await
            .map_err(|e| AuthError::from(e).into_graphql_error())?;
        Ok(todos.into_iter().map(ToDo).collect())
    }
}

pub struct ToDo(pub ToDoRecord);

#[Object]
impl ToDo {
    async fn id(&self) -> ID {
        ID(self.0.id.to_hex())
    }

    async fn content(&self) -> &str {
        &self.0.content
    }

    async fn is_complete(&self) -> bool {
        self.0.is_complete
    }

    async fn task_list(&self, ctx: &Context<'_>) -> Result<Option<TaskList>> {
        let req = ctx.data::<RequestContext>()?;
        let list = req
            .tasks
            .find_list(&self.0.task_list_id)
            .await
            .map_err(|e| AuthError::from(e).into_graphql_error())?;
        Ok(list.map(TaskList))
    }
}

#[derive(InputObject)]
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

#[derive(InputObject)]
pub struct SignUpInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub avatar: Option<String>,
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Task lists for the current identity. The backing source has no
    /// persistence yet, so every caller gets an empty list.
    async fn my_task_lists(&self, ctx: &Context<'_>) -> Result<Vec<TaskList>> {
        let req = ctx.data::<RequestContext>()?;
        let lists = req.tasks.lists_for(&req.user).await.map_err(|e| AuthError::from(e).into_graphql_error())?;
        Ok(lists.into_iter().map(TaskList).collect())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Sign in with email and password. Unknown email and wrong password
    /// surface as the same error so registered emails cannot be enumerated.
    async fn sign_in(&self, ctx: &Context<'_>, input: SignInInput) -> Result<AuthUser> {
        let req = ctx.data::<RequestContext>()?;

        let user = req
            .store
            .find_by_email(&input.email)
            .await
            .map_err(|e| AuthError::from(e).into_graphql_error())?
            .ok_or_else(|| AuthError::InvalidCredentials.into_graphql_error())?;

        if !PasswordHasher::verify(&input.password, &user.password) {
            return Err(AuthError::InvalidCredentials.into_graphql_error());
        }

        let token = req
            .codec
            .issue(&user.id.to_hex())
            .map_err(AuthError::into_graphql_error)?;
        tracing::debug!("user {} signed in", user.id);

        Ok(AuthUser {
            user: User(user),
            token,
        })
    }

    /// Create an account and sign it in. There is no duplicate-email check:
    /// signing up twice with the same email creates a second account,
    /// matching the permissive store semantics.
    async fn sign_up(&self, ctx: &Context<'_>, input: SignUpInput) -> Result<AuthUser> {
        let req = ctx.data::<RequestContext>()?;

        let hashed =
            PasswordHasher::hash(&input.password).map_err(AuthError::into_graphql_error)?;
        let user = req
            .store
            .insert_user(NewUser {
                name: input.name,
                email: input.email,
                password: hashed,
                avatar: input.avatar,
            })
            .await
            .map_err(|e| AuthError::from(e).into_graphql_error())?;

        let token = req
            .codec
            .issue(&user.id.to_hex())
            .map_err(AuthError::into_graphql_error)?;
        tracing::info!("user {} signed up", user.id);

        Ok(AuthUser {
            user: User(user),
            token,
        })
    }
}
