// Request-scoped GraphQL context

use std::sync::Arc;

use crate::auth::{Identity, TokenCodec};
use crate::graphql::tasks::TaskListSource;
use crate::store::UserStore;

/// Context built once per inbound request and attached to the GraphQL
/// request via `.data()`. Resolvers read it with
/// `ctx.data::<RequestContext>()`.
///
/// `user` holds the identity resolved from this request's bearer token;
/// it lives only as long as the request.
pub struct RequestContext {
    pub store: Arc<dyn UserStore>,
    pub tasks: Arc<dyn TaskListSource>,
    pub codec: Arc<TokenCodec>,
    pub user: Identity,
}
