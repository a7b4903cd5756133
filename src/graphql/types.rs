//! GraphQL type definitions
//!
//! These types mirror the store records but are decorated with async-graphql
//! attributes. Field-to-record mapping is explicit via the projection
//! functions in [helpers](super::helpers).

use std::sync::Arc;

use async_graphql::{ComplexObject, Context, ID, Interface, Result, SimpleObject};
use serde::{Deserialize, Serialize};

use crate::store::CatalogStore;

use super::helpers::author_record_to_graphql;

/// An author in the catalog.
#[derive(Debug, Clone, SimpleObject, Serialize, Deserialize)]
pub struct Author {
    pub id: ID,
    pub name: String,
    /// The author's drink of choice
    pub drinks: String,
    pub is_genious: bool,
}

/// A book in the catalog.
#[derive(Debug, Clone, SimpleObject, Serialize, Deserialize)]
#[graphql(complex)]
pub struct Book {
    pub id: ID,
    pub title: String,
    pub pages: i32,
    /// Aggregate review rating, absent for books nobody has rated yet
    pub rating: Option<f64>,
    /// Store-level author reference; exposed as the `author` field below
    #[graphql(skip)]
    #[serde(skip)]
    pub author_id: Option<i64>,
}

#[ComplexObject]
impl Book {
    /// The book's author, resolved against the author collection. Null for
    /// books without one (e.g. created via `addBook`).
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<Author>> {
        let store = ctx.data_unchecked::<Arc<CatalogStore>>();
        Ok(self
            .author_id
            .and_then(|id| store.author(id))
            .map(author_record_to_graphql))
    }
}

/// A registered user.
#[derive(Debug, Clone, SimpleObject, Serialize, Deserialize)]
pub struct User {
    pub id: ID,
    pub name: String,
    pub email: String,
}

/// Common shape for mutation results: a status code, a success flag, and a
/// human-readable message.
#[derive(Interface)]
#[graphql(
    field(name = "code", ty = "&String"),
    field(name = "success", ty = "&bool"),
    field(name = "message", ty = "&String")
)]
pub enum MutationResponse {
    UpdateUserEmail(UpdateUserEmailMutationResponse),
}

/// Result of `updateUserEmail`. Carries the updated user on success and a
/// `404`-coded failure when the id matches nobody.
#[derive(Debug, Clone, SimpleObject, Serialize, Deserialize)]
pub struct UpdateUserEmailMutationResponse {
    pub code: String,
    pub success: bool,
    pub message: String,
    pub user: Option<User>,
}
