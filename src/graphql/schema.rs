//! GraphQL schema definition with queries and mutations
//!
//! This is the single API surface for the Bookshelf backend.

use std::sync::Arc;

use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::store::CatalogStore;

use super::mutations::{BookMutations, UserMutations};
use super::queries::{AuthorQueries, BookQueries, UserQueries};
use super::types::MutationResponse;

/// The GraphQL schema type
pub type BookshelfSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

#[derive(MergedObject, Default)]
pub struct QueryRoot(BookQueries, AuthorQueries, UserQueries);

#[derive(MergedObject, Default)]
pub struct MutationRoot(BookMutations, UserMutations);

/// Build the GraphQL schema with all resolvers
pub fn build_schema(store: Arc<CatalogStore>) -> BookshelfSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    // MutationResponse is only reached through its implementor, so register
    // the interface explicitly to keep it in the SDL.
    .register_output_type::<MutationResponse>()
    .data(store)
    .finish()
}
