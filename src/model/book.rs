use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i32,
    pub name: String,
    /// Foreign key into `Author::id`. Not enforced unless the library runs
    /// with [`ReferencePolicy::Strict`](super::ReferencePolicy::Strict).
    pub author_id: i32,
}

impl Book {
    pub fn new(id: i32, name: impl Into<String>, author_id: i32) -> Self {
        Self {
            id,
            name: name.into(),
            author_id,
        }
    }

    pub fn is_written_by(&self, author_id: i32) -> bool {
        self.author_id == author_id
    }
}
