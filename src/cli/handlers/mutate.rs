use anyhow::Result;

use super::CommandContext;
use super::utils::execute_document;

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
) -> Result<()> {
    // Auto-wrap in mutation { }
    let document = format!("mutation {{ {} }}", mutation);
    let output = execute_document(&ctx, &document, variables)?;
    println!("{}", output);
    Ok(())
}
