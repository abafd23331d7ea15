mod auth;
mod config;
mod db;
mod graphql;
mod store;

use std::sync::Arc;

use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

use auth::{resolve_identity, TokenCodec};
use config::Config;
use graphql::tasks::{EmptyTaskListSource, TaskListSource};
use graphql::{build_schema, AppSchema, RequestContext};
use store::{MongoUserStore, UserStore};

/// Application state shared across requests. Everything here is read-only
/// after startup; per-request state lives on the GraphQL context instead.
#[derive(Clone)]
struct AppState {
    schema: AppSchema,
    store: Arc<dyn UserStore>,
    tasks: Arc<dyn TaskListSource>,
    codec: Arc<TokenCodec>,
}

/// Executes one GraphQL request. Identity is resolved here, once per
/// request, and attached to the request-scoped context.
async fn graphql_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    // The authorization header carries the raw session token, no scheme
    // prefix.
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let user = match resolve_identity(token.as_deref(), &state.codec, state.store.as_ref()).await {
        Ok(identity) => identity,
        Err(e) => {
            tracing::error!("Identity resolution failed: {}", e);
            let err = async_graphql::ServerError::new("Internal server error", None);
            return async_graphql::Response::from_errors(vec![err]).into();
        }
    };

    let request_ctx = RequestContext {
        store: state.store.clone(),
        tasks: state.tasks.clone(),
        codec: state.codec.clone(),
        user,
    };

    state
        .schema
        .execute(req.into_inner().data(request_ctx))
        .await
        .into()
}

async fn playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/")))
}

/// Creates and configures the application router
fn create_router(
    store: Arc<dyn UserStore>,
    tasks: Arc<dyn TaskListSource>,
    codec: Arc<TokenCodec>,
) -> Router {
    use tower_http::cors::{Any, CorsLayer};

    let state = AppState {
        schema: build_schema(),
        store,
        tasks,
        codec,
    };

    // Allow all origins, methods, and headers
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(playground).post(graphql_handler))
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    tracing::info!("Task List API - Starting...");

    let config = Config::from_env().expect("Configuration must be set in environment");

    // A confirmed store connection is required before serving
    tracing::info!("Connecting to database...");
    let database = db::connect(&config.db_uri, &config.db_name)
        .await
        .expect("Failed to connect to document store");

    let store: Arc<dyn UserStore> = Arc::new(MongoUserStore::new(&database));
    let tasks: Arc<dyn TaskListSource> = Arc::new(EmptyTaskListSource);
    let codec = Arc::new(TokenCodec::new(config.jwt_private_key.clone()));

    let app = create_router(store, tasks, codec);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("GraphQL server ready at http://{}", addr);

    axum::serve(listener, app).await.expect("Server error");
}
