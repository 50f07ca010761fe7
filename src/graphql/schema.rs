use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Object, Schema};

use crate::storage::Library;

use super::types::{
    Author, Book, nullable_author, nullable_authors, nullable_book, nullable_books,
};

pub type BookshelfSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(library: Arc<Library>) -> BookshelfSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(library)
        .finish()
}

pub(crate) fn library<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<Library>> {
    ctx.data::<Arc<Library>>()
}

pub struct QueryRoot;

/// Root Query
#[Object(name = "Query")]
impl QueryRoot {
    /// A single book
    async fn book(&self, ctx: &Context<'_>, id: Option<i32>) -> async_graphql::Result<Option<Book>> {
        let library = library(ctx)?;
        Ok(id
            .and_then(|id| library.book(id))
            .and_then(|book| nullable_book(ctx, library, book)))
    }

    /// A single book fetched by name
    async fn book_by_name(
        &self,
        ctx: &Context<'_>,
        name: Option<String>,
    ) -> async_graphql::Result<Option<Book>> {
        let library = library(ctx)?;
        Ok(name
            .and_then(|name| library.book_by_name(&name))
            .and_then(|book| nullable_book(ctx, library, book)))
    }

    /// A single author
    async fn author(
        &self,
        ctx: &Context<'_>,
        id: Option<i32>,
    ) -> async_graphql::Result<Option<Author>> {
        let library = library(ctx)?;
        Ok(id
            .and_then(|id| library.author(id))
            .and_then(|author| nullable_author(ctx, author)))
    }

    /// List of all books
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<Option<Book>>>> {
        let library = library(ctx)?;
        Ok(Some(nullable_books(ctx, library, library.books())))
    }

    /// List of all authors
    async fn authors(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Option<Vec<Option<Author>>>> {
        let authors = library(ctx)?.authors();
        Ok(Some(nullable_authors(ctx, authors)))
    }
}

pub struct MutationRoot;

/// Root mutation
#[Object(name = "Mutations")]
impl MutationRoot {
    /// Add a book
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        name: String,
        author_id: i32,
    ) -> async_graphql::Result<Option<Book>> {
        let library = library(ctx)?;
        let book = library.add_book(name, author_id)?;
        Ok(nullable_book(ctx, library, book))
    }

    /// Add an author
    async fn add_author(
        &self,
        ctx: &Context<'_>,
        name: Option<String>,
    ) -> async_graphql::Result<Option<Author>> {
        let author = library(ctx)?.add_author(name)?;
        Ok(nullable_author(ctx, author))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_graphql::{Request, Variables};
    use serde_json::{Value, json};

    fn schema() -> BookshelfSchema {
        build_schema(Arc::new(Library::seeded()))
    }

    async fn run(schema: &BookshelfSchema, query: &str) -> Value {
        let response = schema.execute(query).await;
        assert!(response.errors.is_empty(), "errors: {:?}", response.errors);
        response.data.into_json().unwrap()
    }

    #[tokio::test]
    async fn test_every_seeded_book_by_id() {
        let schema = schema();
        let expected = [
            (1, "Java", 1),
            (2, "Javascript", 1),
            (3, "Android", 2),
            (4, "Swift", 2),
            (5, "GraphQL", 3),
            (6, "Docker", 3),
            (7, "Kubernetes", 3),
            (8, "Kafka", 4),
        ];
        for (id, name, author_id) in expected {
            let data = run(
                &schema,
                &format!("{{ book(id: {id}) {{ id name authorId }} }}"),
            )
            .await;
            assert_eq!(
                data,
                json!({ "book": { "id": id, "name": name, "authorId": author_id } })
            );
        }
    }

    #[tokio::test]
    async fn test_missing_book_is_null_not_error() {
        let data = run(&schema(), "{ book(id: 99) { id } }").await;
        assert_eq!(data, json!({ "book": null }));
    }

    #[tokio::test]
    async fn test_absent_arguments_match_nothing() {
        let data = run(
            &schema(),
            "{ book { id } author { id } bookByName { id } }",
        )
        .await;
        assert_eq!(
            data,
            json!({ "book": null, "author": null, "bookByName": null })
        );
    }

    #[tokio::test]
    async fn test_book_by_name() {
        let data = run(&schema(), r#"{ bookByName(name: "Kafka") { id authorId } }"#).await;
        assert_eq!(data, json!({ "bookByName": { "id": 8, "authorId": 4 } }));
    }

    #[tokio::test]
    async fn test_book_author_resolves_through_reference() {
        let data = run(&schema(), "{ book(id: 5) { name author { id name } } }").await;
        assert_eq!(
            data,
            json!({ "book": { "name": "GraphQL", "author": { "id": 3, "name": "Pedro" } } })
        );
    }

    #[tokio::test]
    async fn test_author_books_match_filtered_book_list() {
        let schema = schema();
        let all = run(&schema, "{ books { id name authorId } }").await;
        for author_id in 1..=4 {
            let expected: Vec<Value> = all["books"]
                .as_array()
                .unwrap()
                .iter()
                .filter(|b| b["authorId"] == json!(author_id))
                .cloned()
                .collect();
            let data = run(
                &schema,
                &format!("{{ author(id: {author_id}) {{ books {{ id name authorId }} }} }}"),
            )
            .await;
            assert_eq!(data["author"]["books"], Value::Array(expected));
        }
    }

    #[tokio::test]
    async fn test_author_without_books_has_empty_list() {
        let schema = schema();
        run(&schema, r#"mutation { addAuthor(name: "Nobody") { id } }"#).await;
        let data = run(&schema, "{ author(id: 5) { name books { id } } }").await;
        assert_eq!(data, json!({ "author": { "name": "Nobody", "books": [] } }));
    }

    #[tokio::test]
    async fn test_add_author_appends_with_next_id() {
        let schema = schema();
        let before = run(&schema, "{ authors { id } }").await;
        let count = before["authors"].as_array().unwrap().len() as i64;

        let created = run(&schema, r#"mutation { addAuthor(name: "X") { id name } }"#).await;
        assert_eq!(created, json!({ "addAuthor": { "id": count + 1, "name": "X" } }));

        let after = run(&schema, "{ authors { id name } }").await;
        let authors = after["authors"].as_array().unwrap();
        assert_eq!(authors.len() as i64, count + 1);
        assert_eq!(authors.last().unwrap(), &json!({ "id": count + 1, "name": "X" }));
    }

    #[tokio::test]
    async fn test_add_book_appends_with_next_id() {
        let schema = schema();
        let before = run(&schema, "{ books { id } }").await;
        let count = before["books"].as_array().unwrap().len();

        let request = Request::new(
            "mutation Add($name: String!, $authorId: Int!) { addBook(name: $name, authorId: $authorId) { id name authorId } }",
        )
        .variables(Variables::from_json(json!({ "name": "Y", "authorId": 1 })));
        let response = schema.execute(request).await;
        assert!(response.errors.is_empty());

        let after = run(&schema, "{ books { id name authorId } }").await;
        let books = after["books"].as_array().unwrap();
        assert_eq!(books.len(), count + 1);
        assert_eq!(
            books.last().unwrap(),
            &json!({ "id": count + 1, "name": "Y", "authorId": 1 })
        );
    }

    #[tokio::test]
    async fn test_add_book_requires_arguments() {
        let response = schema()
            .execute(r#"mutation { addBook(name: "Y") { id } }"#)
            .await;
        assert!(!response.errors.is_empty());
    }

    fn error_path(response: &async_graphql::Response) -> Value {
        assert_eq!(response.errors.len(), 1, "errors: {:?}", response.errors);
        serde_json::to_value(&response.errors[0].path).unwrap()
    }

    #[tokio::test]
    async fn test_dangling_author_nulls_single_book() {
        let schema = schema();
        run(&schema, r#"mutation { addBook(name: "Orphan", authorId: 42) { id } }"#).await;

        let response = schema.execute("{ book(id: 9) { name author { id } } }").await;
        assert!(response.errors[0].message.contains("author 42"));
        assert_eq!(error_path(&response), json!(["book", "author"]));
        assert_eq!(response.data.into_json().unwrap(), json!({ "book": null }));
    }

    #[tokio::test]
    async fn test_dangling_author_nulls_list_element() {
        let schema = schema();
        run(&schema, r#"mutation { addBook(name: "Orphan", authorId: 42) { id } }"#).await;

        let response = schema.execute("{ books { id author { id } } }").await;
        assert_eq!(error_path(&response), json!(["books", 8, "author"]));
        assert_eq!(
            response.data.into_json().unwrap(),
            json!({ "books": [
                { "id": 1, "author": { "id": 1 } },
                { "id": 2, "author": { "id": 1 } },
                { "id": 3, "author": { "id": 2 } },
                { "id": 4, "author": { "id": 2 } },
                { "id": 5, "author": { "id": 3 } },
                { "id": 6, "author": { "id": 3 } },
                { "id": 7, "author": { "id": 3 } },
                { "id": 8, "author": { "id": 4 } },
                null
            ] })
        );
    }

    #[tokio::test]
    async fn test_dangling_author_is_fine_when_not_selected() {
        let schema = schema();
        run(&schema, r#"mutation { addBook(name: "Orphan", authorId: 42) { id } }"#).await;

        let data = run(&schema, "{ book(id: 9) { id name authorId } }").await;
        assert_eq!(
            data,
            json!({ "book": { "id": 9, "name": "Orphan", "authorId": 42 } })
        );
    }

    #[tokio::test]
    async fn test_add_book_with_dangling_author_returns_null() {
        let library = Arc::new(Library::seeded());
        let schema = build_schema(Arc::clone(&library));

        let response = schema
            .execute(r#"mutation { addBook(name: "Orphan", authorId: 42) { id author { name } } }"#)
            .await;
        assert_eq!(error_path(&response), json!(["addBook", "author"]));
        assert_eq!(response.data.into_json().unwrap(), json!({ "addBook": null }));
        // The append happened even though the result is null.
        assert_eq!(library.book(9).unwrap().author_id, 42);
    }

    #[tokio::test]
    async fn test_nameless_author_nulls_mutation_result() {
        let library = Arc::new(Library::seeded());
        let schema = build_schema(Arc::clone(&library));

        let response = schema.execute("mutation { addAuthor { id name } }").await;
        assert_eq!(error_path(&response), json!(["addAuthor", "name"]));
        assert_eq!(response.data.into_json().unwrap(), json!({ "addAuthor": null }));
        assert_eq!(library.author_count(), 5);
    }

    #[tokio::test]
    async fn test_nameless_author_nulls_lookups() {
        let schema = schema();
        let data = run(&schema, "mutation { addAuthor { id } }").await;
        assert_eq!(data, json!({ "addAuthor": { "id": 5 } }));

        let response = schema.execute("{ author(id: 5) { id name } }").await;
        assert_eq!(error_path(&response), json!(["author", "name"]));
        assert_eq!(response.data.into_json().unwrap(), json!({ "author": null }));

        let response = schema.execute("{ authors { id name } }").await;
        assert_eq!(error_path(&response), json!(["authors", 4, "name"]));
        assert_eq!(
            response.data.into_json().unwrap(),
            json!({ "authors": [
                { "id": 1, "name": "Joao" },
                { "id": 2, "name": "Joaquim" },
                { "id": 3, "name": "Pedro" },
                { "id": 4, "name": "Rubio" },
                null
            ] })
        );
    }

    #[tokio::test]
    async fn test_nameless_author_nulls_nested_book() {
        let schema = schema();
        run(&schema, "mutation { addAuthor { id } }").await;
        run(&schema, r#"mutation { addBook(name: "Anonymous", authorId: 5) { id } }"#).await;

        let response = schema
            .execute("{ authors { id books { id author { name } } } }")
            .await;
        assert_eq!(
            error_path(&response),
            json!(["authors", 4, "books", 0, "author", "name"])
        );
        let data = response.data.into_json().unwrap();
        assert_eq!(data["authors"][4], json!({ "id": 5, "books": [null] }));
        assert_eq!(
            data["authors"][0],
            json!({ "id": 1, "books": [
                { "id": 1, "author": { "name": "Joao" } },
                { "id": 2, "author": { "name": "Joao" } }
            ] })
        );
    }

    #[tokio::test]
    async fn test_strict_policy_rejects_unknown_author() {
        let library = Arc::new(Library::with_policy(crate::model::ReferencePolicy::Strict));
        let schema = build_schema(Arc::clone(&library));

        let response = schema
            .execute(r#"mutation { addBook(name: "Orphan", authorId: 42) { id } }"#)
            .await;
        assert_eq!(response.errors.len(), 1);
        assert!(response.errors[0].message.contains("Unknown author"));
        assert_eq!(library.book_count(), 8);
    }

    #[tokio::test]
    async fn test_read_queries_are_idempotent() {
        let schema = schema();
        let query = "{ books { id name authorId } authors { id name books { id } } book(id: 3) { name } author(id: 2) { name } }";
        let first = run(&schema, query).await;
        let second = run(&schema, query).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_schema_type_names() {
        let sdl = schema().sdl();
        let has_line = |line: &str| sdl.lines().any(|l| l.trim() == line);

        assert!(sdl.contains("type Query"));
        assert!(sdl.contains("type Mutations"));
        assert!(sdl.contains("Author of books"));
        assert!(has_line("book(id: Int): Book"));
        assert!(has_line("bookByName(name: String): Book"));
        assert!(has_line("author(id: Int): Author"));
        assert!(has_line("books: [Book]"));
        assert!(has_line("authors: [Author]"));
        assert!(has_line("addBook(name: String!, authorId: Int!): Book"));
        assert!(has_line("addAuthor(name: String): Author"));
        assert!(has_line("authorId: Int!"));
        assert!(has_line("author: Author!"));
        assert!(has_line("name: String!"));
    }
}
