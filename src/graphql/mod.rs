// GraphQL API layer

pub mod context;
pub mod schema;
pub mod tasks;

pub use context::RequestContext;
pub use schema::{build_schema, AppSchema};
