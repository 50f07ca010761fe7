//! Data models for the bookshelf.
//!
//! - [`Book`]: a book record pointing at its author by id
//! - [`Author`]: an author record
//! - [`ReferencePolicy`]: whether book → author references are checked on write

mod author;
mod book;
mod types;

pub use author::Author;
pub use book::Book;
pub use types::ReferencePolicy;
