//! # Bookshelf - a small in-memory GraphQL API
//!
//! Bookshelf serves two collections, books and authors, over GraphQL. Books
//! point at their author by id; authors list their books. Both collections
//! are seeded with sample data at startup and only ever grow: the two
//! mutations append records, nothing is edited or removed, and nothing is
//! persisted.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve /graphql (with the GraphiQL explorer) on 127.0.0.1:5000
//! bookshelf serve
//!
//! # One-off query against a fresh library
//! bookshelf query '{ books { id name author { name } } }'
//!
//! # Print the schema
//! bookshelf schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP endpoint
//! - [`model`]: Data models (Book, Author, ReferencePolicy)
//! - [`storage`]: The in-memory library

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Handles `.bookshelf.toml` files and upward discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `BookshelfError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema and the axum router serving it.
pub mod graphql;

/// Data models for books and authors.
pub mod model;

/// In-memory storage layer.
pub mod storage;

pub mod logging;
