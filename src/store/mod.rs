//! In-memory catalog store.
//!
//! Holds the three seeded collections (authors, books, users) for the life of
//! the process. Authors are immutable after seeding; books and users sit
//! behind locks because the mutation resolvers write to them. Constructed
//! once in main via [seed] and handed to the GraphQL schema as context data.

mod seed;

pub use seed::seed;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("user {0} not found")]
    UserNotFound(i64),
}

/// An author as stored in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorRecord {
    pub id: i64,
    pub name: String,
    pub drinks: String,
    pub is_genious: bool,
}

/// A book as stored in the catalog. `author_id` references an
/// [AuthorRecord]; resolution happens at query time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookRecord {
    pub id: i64,
    pub title: String,
    pub author_id: Option<i64>,
    pub pages: i32,
    pub rating: Option<f64>,
}

/// A registered user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// The in-memory data source behind the GraphQL API.
pub struct CatalogStore {
    authors: Vec<AuthorRecord>,
    books: RwLock<Vec<BookRecord>>,
    users: RwLock<Vec<UserRecord>>,
}

impl CatalogStore {
    pub fn new(
        authors: Vec<AuthorRecord>,
        books: Vec<BookRecord>,
        users: Vec<UserRecord>,
    ) -> Self {
        Self {
            authors,
            books: RwLock::new(books),
            users: RwLock::new(users),
        }
    }

    /// All authors, in insertion order.
    pub fn authors(&self) -> Vec<AuthorRecord> {
        self.authors.clone()
    }

    /// Look up a single author by id.
    pub fn author(&self, id: i64) -> Option<AuthorRecord> {
        self.authors.iter().find(|a| a.id == id).cloned()
    }

    /// All books, in insertion order.
    pub fn books(&self) -> Vec<BookRecord> {
        self.books.read().clone()
    }

    /// All users, in insertion order.
    pub fn users(&self) -> Vec<UserRecord> {
        self.users.read().clone()
    }

    /// Append a new book and return it. Ids are assigned as max + 1, so they
    /// stay unique within the collection.
    pub fn add_book(&self, title: String, pages: i32) -> BookRecord {
        let mut books = self.books.write();
        let id = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        let record = BookRecord {
            id,
            title,
            author_id: None,
            pages,
            rating: None,
        };
        books.push(record.clone());
        record
    }

    /// Replace a user's email and return the updated record.
    pub fn update_user_email(&self, id: i64, email: String) -> Result<UserRecord, StoreError> {
        let mut users = self.users.write();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(StoreError::UserNotFound(id))?;
        user.email = email;
        Ok(user.clone())
    }
}
