use serde::{Deserialize, Serialize};
use std::fmt;

/// How `addBook` treats an `authorId` that names no existing author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReferencePolicy {
    /// Store the book anyway; `Book.author` reports an error on read.
    #[default]
    Lenient,
    /// Reject the book at write time.
    Strict,
}

impl fmt::Display for ReferencePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferencePolicy::Lenient => write!(f, "lenient"),
            ReferencePolicy::Strict => write!(f, "strict"),
        }
    }
}
