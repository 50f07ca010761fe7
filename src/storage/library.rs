use super::seed::{seed_authors, seed_books};
use crate::{
    error::{BookshelfError, Result},
    model::{Author, Book, ReferencePolicy},
};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// The in-memory book and author store.
///
/// Each collection sits behind its own lock. An append computes the new id
/// and pushes the record under a single write guard, so ids strictly
/// increase and concurrent writers never lose a record. When both locks are
/// needed, `authors` is always taken before `books`.
#[derive(Debug, Default)]
pub struct Library {
    books: RwLock<Vec<Book>>,
    authors: RwLock<Vec<Author>>,
    policy: ReferencePolicy,
}

impl Library {
    /// A library holding the fixed sample data.
    pub fn seeded() -> Self {
        Self::from_parts(seed_books(), seed_authors(), ReferencePolicy::default())
    }

    /// A library holding no records.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A seeded library with the given reference policy.
    pub fn with_policy(policy: ReferencePolicy) -> Self {
        Self::seeded().policy(policy)
    }

    /// A library holding exactly `books` and `authors`, in that order. Ids are
    /// taken as given; later appends continue from the collection lengths.
    fn from_parts(books: Vec<Book>, authors: Vec<Author>, policy: ReferencePolicy) -> Self {
        Self {
            books: RwLock::new(books),
            authors: RwLock::new(authors),
            policy,
        }
    }

    /// Replace the reference policy applied by [`Library::add_book`].
    pub fn policy(mut self, policy: ReferencePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The policy this library checks `add_book` against.
    pub fn reference_policy(&self) -> ReferencePolicy {
        self.policy
    }

    // Every write is a single push, so a poisoned guard still holds
    // consistent data.
    fn read_books(&self) -> RwLockReadGuard<'_, Vec<Book>> {
        self.books.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_books(&self) -> RwLockWriteGuard<'_, Vec<Book>> {
        self.books.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_authors(&self) -> RwLockReadGuard<'_, Vec<Author>> {
        self.authors.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_authors(&self) -> RwLockWriteGuard<'_, Vec<Author>> {
        self.authors.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn books(&self) -> Vec<Book> {
        self.read_books().clone()
    }

    pub fn authors(&self) -> Vec<Author> {
        self.read_authors().clone()
    }

    pub fn book(&self, id: i32) -> Option<Book> {
        self.read_books().iter().find(|b| b.id == id).cloned()
    }

    pub fn book_by_name(&self, name: &str) -> Option<Book> {
        self.read_books().iter().find(|b| b.name == name).cloned()
    }

    pub fn author(&self, id: i32) -> Option<Author> {
        self.read_authors().iter().find(|a| a.id == id).cloned()
    }

    /// Books written by `author_id`, in insertion order.
    pub fn books_by_author(&self, author_id: i32) -> Vec<Book> {
        self.read_books()
            .iter()
            .filter(|b| b.is_written_by(author_id))
            .cloned()
            .collect()
    }

    pub fn book_count(&self) -> usize {
        self.read_books().len()
    }

    pub fn author_count(&self) -> usize {
        self.read_authors().len()
    }

    pub fn add_book(&self, name: impl Into<String>, author_id: i32) -> Result<Book> {
        // Held across the push so a strict check cannot race an author append.
        let authors = match self.policy {
            ReferencePolicy::Strict => Some(self.read_authors()),
            ReferencePolicy::Lenient => None,
        };
        if let Some(authors) = &authors {
            if !authors.iter().any(|a| a.id == author_id) {
                return Err(BookshelfError::UnknownAuthor(author_id));
            }
        }

        let mut books = self.write_books();
        let book = Book::new(next_id(books.len())?, name, author_id);
        books.push(book.clone());
        debug!(id = book.id, author_id, "added book");
        Ok(book)
    }

    pub fn add_author(&self, name: Option<String>) -> Result<Author> {
        let mut authors = self.write_authors();
        let author = Author::new(next_id(authors.len())?, name);
        authors.push(author.clone());
        debug!(id = author.id, "added author");
        Ok(author)
    }
}

/// Ids are assigned by count, which equals max + 1 while nothing is removed.
fn next_id(len: usize) -> Result<i32> {
    len.checked_add(1)
        .and_then(|n| i32::try_from(n).ok())
        .ok_or(BookshelfError::IdSpaceExhausted)
}
