//! GraphQL schema, resolvers and HTTP endpoint for the bookshelf.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server (explorer at http://localhost:5000/graphql)
//! bookshelf serve --port 5000
//!
//! # Execute a query from the CLI against a fresh library
//! bookshelf query '{ book(id: 5) { name author { name } } }'
//!
//! # Execute a mutation from the CLI
//! bookshelf mutate 'addAuthor(name: "Ana") { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `book`, `bookByName`, `author`, `books`, `authors`
//! - **Mutations**: `addBook`, `addAuthor`

mod schema;
mod server;
mod types;

pub use schema::{BookshelfSchema, MutationRoot, QueryRoot, build_schema};
pub use server::{GRAPHQL_PATH, router, run_server, serve};
pub use types::*;
