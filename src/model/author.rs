use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: i32,

    /// `addAuthor` accepts an absent name, so storage keeps it optional even
    /// though the GraphQL field is non-null.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Author {
    pub fn new(id: i32, name: Option<String>) -> Self {
        Self { id, name }
    }

    pub fn named(id: i32, name: impl Into<String>) -> Self {
        Self::new(id, Some(name.into()))
    }
}
