use super::prelude::*;

#[derive(Default)]
pub struct UserQueries;

#[Object]
impl UserQueries {
    /// Get all registered users, in insertion order
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let store = ctx.data_unchecked::<Arc<CatalogStore>>();
        Ok(store
            .users()
            .into_iter()
            .map(user_record_to_graphql)
            .collect())
    }
}
