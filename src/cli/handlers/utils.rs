use crate::graphql::build_schema;
use anyhow::{Context, Result};
use std::sync::Arc;

use super::CommandContext;

/// Run one GraphQL document against a library built from the config and
/// return the response as pretty JSON.
pub(super) fn execute_document(
    ctx: &CommandContext,
    document: &str,
    variables: Option<String>,
) -> Result<String> {
    let library = Arc::new(ctx.config.library.build_library());
    let schema = build_schema(library);

    let vars: async_graphql::Variables = if let Some(v) = variables {
        serde_json::from_str(&v).context("Variables must be a JSON object")?
    } else {
        async_graphql::Variables::default()
    };

    let request = async_graphql::Request::new(document).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    if !response.errors.is_empty() {
        tracing::debug!(errors = response.errors.len(), "document returned errors");
    }

    Ok(serde_json::to_string_pretty(&response)?)
}
