use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookshelfError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Book {book_id} references author {author_id}, which does not exist")]
    DanglingAuthor { book_id: i32, author_id: i32 },

    #[error("Author {0} has no name")]
    MissingAuthorName(i32),

    #[error("Unknown author: {0}")]
    UnknownAuthor(i32),

    #[error("No ids left to assign")]
    IdSpaceExhausted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, BookshelfError>;
