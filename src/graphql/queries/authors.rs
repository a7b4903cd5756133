use super::prelude::*;

#[derive(Default)]
pub struct AuthorQueries;

#[Object]
impl AuthorQueries {
    /// Get all authors in the catalog, in insertion order
    async fn authors(&self, ctx: &Context<'_>) -> Result<Vec<Author>> {
        let store = ctx.data_unchecked::<Arc<CatalogStore>>();
        Ok(store
            .authors()
            .into_iter()
            .map(author_record_to_graphql)
            .collect())
    }
}
