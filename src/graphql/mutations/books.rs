use super::prelude::*;

#[derive(Default)]
pub struct BookMutations;

#[Object]
impl BookMutations {
    /// Add a new book to the catalog. The book starts without an author or a
    /// rating; its id is assigned by the store.
    async fn add_book(&self, ctx: &Context<'_>, title: String, pages: i32) -> Result<Book> {
        let store = ctx.data_unchecked::<Arc<CatalogStore>>();
        let record = store.add_book(title, pages);
        tracing::info!(book_id = record.id, "Book added to catalog");
        Ok(book_record_to_graphql(record))
    }
}
