use crate::model::{Author, Book};

pub(crate) fn seed_books() -> Vec<Book> {
    [
        (1, "Java", 1),
        (2, "Javascript", 1),
        (3, "Android", 2),
        (4, "Swift", 2),
        (5, "GraphQL", 3),
        (6, "Docker", 3),
        (7, "Kubernetes", 3),
        (8, "Kafka", 4),
    ]
    .into_iter()
    .map(|(id, name, author_id)| Book::new(id, name, author_id))
    .collect()
}

pub(crate) fn seed_authors() -> Vec<Author> {
    [(1, "Joao"), (2, "Joaquim"), (3, "Pedro"), (4, "Rubio")]
        .into_iter()
        .map(|(id, name)| Author::named(id, name))
        .collect()
}
