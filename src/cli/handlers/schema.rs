use crate::graphql::build_schema;
use crate::storage::Library;
use anyhow::Result;
use std::sync::Arc;

pub fn handle_schema() -> Result<()> {
    let schema = build_schema(Arc::new(Library::empty()));
    println!("{}", schema.sdl());
    Ok(())
}
