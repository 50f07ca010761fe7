use crate::error::BookshelfError;
use crate::model::{Author as ModelAuthor, Book as ModelBook};
use crate::storage::Library;
use async_graphql::{ComplexObject, Context, Lookahead, Object, PathSegment, SimpleObject};
use tracing::warn;

use super::schema::library;

/// This represents a book
#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub author_id: i32,
}

#[ComplexObject]
impl Book {
    /// The author whose id matches this book's `authorId`
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Author> {
        library(ctx)?
            .author(self.author_id)
            .map(Author::from)
            .ok_or_else(|| {
                BookshelfError::DanglingAuthor {
                    book_id: self.id,
                    author_id: self.author_id,
                }
                .into()
            })
    }
}

impl From<ModelBook> for Book {
    fn from(b: ModelBook) -> Self {
        Self {
            id: b.id,
            name: b.name,
            author_id: b.author_id,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Author {
    pub id: i32,
    pub name: Option<String>,
}

/// Author of books
#[Object]
impl Author {
    async fn id(&self) -> i32 {
        self.id
    }

    async fn name(&self) -> async_graphql::Result<&str> {
        self.name
            .as_deref()
            .ok_or_else(|| BookshelfError::MissingAuthorName(self.id).into())
    }

    /// Books whose `authorId` matches this author, in insertion order
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<Option<Book>>>> {
        let library = library(ctx)?;
        let books = library.books_by_author(self.id);
        Ok(Some(nullable_books(ctx, library, books)))
    }
}

impl From<ModelAuthor> for Author {
    fn from(a: ModelAuthor) -> Self {
        Self {
            id: a.id,
            name: a.name,
        }
    }
}

// `Book.author` and `Author.name` are non-null, so when either cannot resolve
// the nearest nullable parent has to become null. Every field that hands out
// a `Book` or `Author` is nullable; it checks the selection up front and
// reports the failing field itself.

/// A selected non-null field that cannot resolve, relative to the checked value.
type Unresolvable = (Vec<&'static str>, BookshelfError);

fn check_author(author: &ModelAuthor, selection: &Lookahead<'_>) -> Option<Unresolvable> {
    if author.name.is_none() && selection.field("name").exists() {
        return Some((vec!["name"], BookshelfError::MissingAuthorName(author.id)));
    }
    None
}

fn check_book(library: &Library, book: &ModelBook, selection: &Lookahead<'_>) -> Option<Unresolvable> {
    let author_selection = selection.field("author");
    if !author_selection.exists() {
        return None;
    }
    match library.author(book.author_id) {
        Some(author) => check_author(&author, &author_selection).map(|(mut fields, error)| {
            fields.insert(0, "author");
            (fields, error)
        }),
        None => {
            warn!(
                book_id = book.id,
                author_id = book.author_id,
                "book references a missing author"
            );
            Some((
                vec!["author"],
                BookshelfError::DanglingAuthor {
                    book_id: book.id,
                    author_id: book.author_id,
                },
            ))
        }
    }
}

fn report(ctx: &Context<'_>, index: Option<usize>, (fields, error): Unresolvable) {
    let mut error = ctx.set_error_path(async_graphql::Error::from(error).into_server_error(ctx.item.pos));
    error.path.extend(index.map(PathSegment::Index));
    error
        .path
        .extend(fields.into_iter().map(|f| PathSegment::Field(f.to_string())));
    ctx.add_error(error);
}

/// `book`, or null with an error listed when a selected field below it fails.
pub(crate) fn nullable_book(ctx: &Context<'_>, library: &Library, book: ModelBook) -> Option<Book> {
    match check_book(library, &book, &ctx.look_ahead()) {
        Some(failure) => {
            report(ctx, None, failure);
            None
        }
        None => Some(book.into()),
    }
}

pub(crate) fn nullable_author(ctx: &Context<'_>, author: ModelAuthor) -> Option<Author> {
    match check_author(&author, &ctx.look_ahead()) {
        Some(failure) => {
            report(ctx, None, failure);
            None
        }
        None => Some(author.into()),
    }
}

pub(crate) fn nullable_books(
    ctx: &Context<'_>,
    library: &Library,
    books: Vec<ModelBook>,
) -> Vec<Option<Book>> {
    let selection = ctx.look_ahead();
    books
        .into_iter()
        .enumerate()
        .map(|(index, book)| match check_book(library, &book, &selection) {
            Some(failure) => {
                report(ctx, Some(index), failure);
                None
            }
            None => Some(book.into()),
        })
        .collect()
}

pub(crate) fn nullable_authors(ctx: &Context<'_>, authors: Vec<ModelAuthor>) -> Vec<Option<Author>> {
    let selection = ctx.look_ahead();
    authors
        .into_iter()
        .enumerate()
        .map(|(index, author)| match check_author(&author, &selection) {
            Some(failure) => {
                report(ctx, Some(index), failure);
                None
            }
            None => Some(author.into()),
        })
        .collect()
}
