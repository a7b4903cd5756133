//! Bookshelf - GraphQL API server for a small book catalog
//!
//! Library surface used by the binary and the integration tests: the seeded
//! catalog store, the GraphQL schema, and the HTTP plumbing around them.

pub mod api;
pub mod config;
pub mod graphql;
pub mod store;

use std::sync::Arc;

use crate::config::Config;
use crate::graphql::BookshelfSchema;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub schema: BookshelfSchema,
}
