//! Integration tests for the GraphQL API
//!
//! These tests execute documents directly against the built schema:
//! - Query results against the seed catalog
//! - The addBook / updateUserEmail mutations
//! - The MutationResponse interface contract
//! - Engine-level errors for malformed requests

use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use bookshelf::graphql::{build_schema, BookshelfSchema};
use bookshelf::store;

fn schema() -> BookshelfSchema {
    build_schema(Arc::new(store::seed()))
}

/// Execute a document that is expected to succeed and return its data as JSON.
async fn execute(schema: &BookshelfSchema, document: &str) -> Value {
    let response = schema.execute(document).await;
    assert!(
        response.errors.is_empty(),
        "unexpected errors: {:?}",
        response.errors
    );
    response.data.into_json().unwrap()
}

// ============================================================================
// Query Tests
// ============================================================================

#[tokio::test]
async fn books_returns_seed_catalog_in_insertion_order() {
    let schema = schema();
    let data = execute(
        &schema,
        "{ books { id title pages rating author { name } } }",
    )
    .await;

    assert_eq!(
        data,
        json!({
            "books": [
                {
                    "id": "1",
                    "title": "The Awakening",
                    "pages": 100,
                    "rating": 5.5,
                    "author": { "name": "Kate Chopin" }
                },
                {
                    "id": "2",
                    "title": "City of Glass",
                    "pages": 99,
                    "rating": 8.1,
                    "author": { "name": "Paul Auster" }
                }
            ]
        })
    );
}

#[tokio::test]
async fn authors_returns_seed_collection() {
    let schema = schema();
    let data = execute(&schema, "{ authors { id name drinks isGenious } }").await;

    assert_eq!(
        data,
        json!({
            "authors": [
                { "id": "1", "name": "Kate Chopin", "drinks": "vodka", "isGenious": false },
                { "id": "2", "name": "Paul Auster", "drinks": "tea", "isGenious": true }
            ]
        })
    );
}

#[tokio::test]
async fn users_returns_seed_collection() {
    let schema = schema();
    let data = execute(&schema, "{ users { id name email } }").await;

    assert_eq!(
        data,
        json!({
            "users": [
                { "id": "1", "name": "oda", "email": "ooddaa@gmail.com" },
                { "id": "2", "name": "mkat", "email": "mkat@gmail.com" }
            ]
        })
    );
}

#[tokio::test]
async fn book_authors_resolve_to_members_of_the_author_collection() {
    let schema = schema();
    let data = execute(&schema, "{ books { author { id } } authors { id } }").await;

    let author_ids: Vec<&Value> = data["authors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| &a["id"])
        .collect();

    for book in data["books"].as_array().unwrap() {
        assert!(
            author_ids.contains(&&book["author"]["id"]),
            "book author {:?} not in author collection",
            book["author"]
        );
    }
}

#[tokio::test]
async fn queries_are_idempotent() {
    let schema = schema();
    let document = "{ books { id title rating } authors { name } users { email } }";

    let first = execute(&schema, document).await;
    let second = execute(&schema, document).await;
    assert_eq!(first, second);
}

// ============================================================================
// Mutation Tests
// ============================================================================

#[tokio::test]
async fn add_book_appends_to_the_catalog() {
    let schema = schema();
    let data = execute(
        &schema,
        r#"mutation { addBook(title: "Moon Palace", pages: 320) { id title pages rating author { name } } }"#,
    )
    .await;

    assert_eq!(
        data,
        json!({
            "addBook": {
                "id": "3",
                "title": "Moon Palace",
                "pages": 320,
                "rating": null,
                "author": null
            }
        })
    );

    // The new book shows up last in a subsequent query.
    let data = execute(&schema, "{ books { title } }").await;
    let titles: Vec<&str> = data["books"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["The Awakening", "City of Glass", "Moon Palace"]);
}

#[tokio::test]
async fn update_user_email_returns_success_response_and_persists() {
    let schema = schema();
    let data = execute(
        &schema,
        r#"mutation {
            updateUserEmail(id: "1", email: "oda@example.com") {
                code success message user { id name email }
            }
        }"#,
    )
    .await;

    assert_eq!(data["updateUserEmail"]["code"], json!("200"));
    assert_eq!(data["updateUserEmail"]["success"], json!(true));
    assert_eq!(
        data["updateUserEmail"]["user"],
        json!({ "id": "1", "name": "oda", "email": "oda@example.com" })
    );

    let data = execute(&schema, "{ users { email } }").await;
    assert_eq!(data["users"][0]["email"], json!("oda@example.com"));
}

#[tokio::test]
async fn update_user_email_unknown_id_returns_not_found_response() {
    let schema = schema();
    let data = execute(
        &schema,
        r#"mutation {
            updateUserEmail(id: "99", email: "nobody@example.com") {
                code success message user { id }
            }
        }"#,
    )
    .await;

    assert_eq!(
        data,
        json!({
            "updateUserEmail": {
                "code": "404",
                "success": false,
                "message": "user 99 not found",
                "user": null
            }
        })
    );

    // Nothing was mutated.
    let data = execute(&schema, "{ users { email } }").await;
    assert_eq!(
        data["users"],
        json!([
            { "email": "ooddaa@gmail.com" },
            { "email": "mkat@gmail.com" }
        ])
    );
}

#[tokio::test]
async fn update_user_email_rejects_non_integer_id() {
    let schema = schema();
    let response = schema
        .execute(r#"mutation { updateUserEmail(id: "not-a-number", email: "x@example.com") { code } }"#)
        .await;

    assert!(!response.errors.is_empty());
    assert!(response.errors[0].message.contains("Invalid ID"));
}

// ============================================================================
// Schema / Error Surface Tests
// ============================================================================

#[tokio::test]
async fn sdl_declares_the_mutation_response_interface() {
    let sdl = schema().sdl();

    assert!(sdl.contains("interface MutationResponse"));
    assert!(sdl.contains("type UpdateUserEmailMutationResponse implements MutationResponse"));
}

#[tokio::test]
async fn unknown_fields_are_rejected_by_the_engine() {
    let schema = schema();
    let response = schema.execute("{ magazines { id } }").await;

    assert!(!response.errors.is_empty());
    assert!(response.errors[0].message.contains("magazines"));
}

#[tokio::test]
async fn interface_fields_are_queryable_through_a_fragment() {
    let schema = schema();
    let data = execute(
        &schema,
        r#"mutation {
            updateUserEmail(id: "2", email: "mkat@example.com") {
                ... on MutationResponse { code success message }
            }
        }"#,
    )
    .await;

    assert_eq!(data["updateUserEmail"]["code"], json!("200"));
    assert_eq!(data["updateUserEmail"]["success"], json!(true));
}
