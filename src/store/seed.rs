//! Seed data for the catalog store.
//!
//! The collections are built from literals at startup and stand in for a real
//! data source (a database, a REST upstream, another GraphQL API).

use super::{AuthorRecord, BookRecord, CatalogStore, UserRecord};

/// Build a [CatalogStore] populated with the seed catalog.
pub fn seed() -> CatalogStore {
    let authors = vec![
        AuthorRecord {
            id: 1,
            name: "Kate Chopin".to_string(),
            drinks: "vodka".to_string(),
            is_genious: false,
        },
        AuthorRecord {
            id: 2,
            name: "Paul Auster".to_string(),
            drinks: "tea".to_string(),
            is_genious: true,
        },
    ];

    let books = vec![
        BookRecord {
            id: 1,
            title: "The Awakening".to_string(),
            author_id: Some(1),
            pages: 100,
            rating: Some(5.5),
        },
        BookRecord {
            id: 2,
            title: "City of Glass".to_string(),
            author_id: Some(2),
            pages: 99,
            rating: Some(8.1),
        },
    ];

    let users = vec![
        UserRecord {
            id: 1,
            name: "oda".to_string(),
            email: "ooddaa@gmail.com".to_string(),
        },
        UserRecord {
            id: 2,
            name: "mkat".to_string(),
            email: "mkat@gmail.com".to_string(),
        },
    ];

    CatalogStore::new(authors, books, users)
}
