//! GraphQL API for the book catalog
//!
//! This module provides the GraphQL API using async-graphql: type
//! definitions, query and mutation resolvers, and the schema builder. Each
//! domain gets its own file under `queries/` and `mutations/`; the per-domain
//! resolver structs are combined into the roots with `MergedObject` in
//! `schema.rs`.
//!
//! This is the single API surface for the Bookshelf backend.

pub mod helpers;
pub mod mutations;
pub mod queries;
mod schema;
pub mod types;

pub use schema::{BookshelfSchema, build_schema};
pub use types::{Author, Book, MutationResponse, UpdateUserEmailMutationResponse, User};
