use super::prelude::*;

use crate::store::StoreError;

#[derive(Default)]
pub struct UserMutations;

#[Object]
impl UserMutations {
    /// Update a user's email address.
    ///
    /// Returns a tagged response rather than erroring on an unknown id: the
    /// caller gets `success: false` with a 404 code and no user.
    async fn update_user_email(
        &self,
        ctx: &Context<'_>,
        id: ID,
        email: String,
    ) -> Result<UpdateUserEmailMutationResponse> {
        let store = ctx.data_unchecked::<Arc<CatalogStore>>();
        let user_id = parse_id(&id)?;

        match store.update_user_email(user_id, email) {
            Ok(record) => Ok(UpdateUserEmailMutationResponse {
                code: "200".to_string(),
                success: true,
                message: "Email updated".to_string(),
                user: Some(user_record_to_graphql(record)),
            }),
            Err(e @ StoreError::UserNotFound(_)) => Ok(UpdateUserEmailMutationResponse {
                code: "404".to_string(),
                success: false,
                message: e.to_string(),
                user: None,
            }),
        }
    }
}
