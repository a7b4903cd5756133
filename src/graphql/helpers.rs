// Helper functions shared across GraphQL query/mutation modules.

use async_graphql::ID;

use crate::graphql::types::{Author, Book, User};
use crate::store::{AuthorRecord, BookRecord, UserRecord};

/// Convert an AuthorRecord from the store to a GraphQL Author type
pub(crate) fn author_record_to_graphql(r: AuthorRecord) -> Author {
    Author {
        id: ID::from(r.id.to_string()),
        name: r.name,
        drinks: r.drinks,
        is_genious: r.is_genious,
    }
}

/// Convert a BookRecord from the store to a GraphQL Book type
pub(crate) fn book_record_to_graphql(r: BookRecord) -> Book {
    Book {
        id: ID::from(r.id.to_string()),
        title: r.title,
        pages: r.pages,
        rating: r.rating,
        author_id: r.author_id,
    }
}

/// Convert a UserRecord from the store to a GraphQL User type
pub(crate) fn user_record_to_graphql(r: UserRecord) -> User {
    User {
        id: ID::from(r.id.to_string()),
        name: r.name,
        email: r.email,
    }
}

/// Parse an `ID` argument as an integer store id.
pub(crate) fn parse_id(id: &ID) -> Result<i64, async_graphql::Error> {
    id.parse::<i64>()
        .map_err(|e| async_graphql::Error::new(format!("Invalid ID: {}", e)))
}
