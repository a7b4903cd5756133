pub mod books;
pub mod users;

pub use books::BookMutations;
pub use users::UserMutations;

pub(crate) mod prelude {
    pub(crate) use std::sync::Arc;

    pub(crate) use async_graphql::{Context, ID, Object, Result};

    pub(crate) use crate::graphql::helpers::*;
    pub(crate) use crate::graphql::types::*;
    pub(crate) use crate::store::CatalogStore;
}
