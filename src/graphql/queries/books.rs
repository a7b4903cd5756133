use super::prelude::*;

#[derive(Default)]
pub struct BookQueries;

#[Object]
impl BookQueries {
    /// Get all books in the catalog, in insertion order
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        let store = ctx.data_unchecked::<Arc<CatalogStore>>();
        Ok(store
            .books()
            .into_iter()
            .map(book_record_to_graphql)
            .collect())
    }
}
