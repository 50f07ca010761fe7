//! In-memory storage for books and authors.
//!
//! Both collections are ordered and append-only. A [`Library`] is an
//! explicit store object: the server owns one for its lifetime, and tests
//! build a fresh one each.
//!
//! ## Components
//!
//! - [`Library`]: lookups by linear scan and `count + 1` appends
//! - seed data: the fixed sample books and authors loaded at startup

mod library;
mod seed;

pub use library::Library;
