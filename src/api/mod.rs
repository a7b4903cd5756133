//! API route definitions
//!
//! The primary API is GraphQL at /graphql; only health checks live outside it.

pub mod health;
