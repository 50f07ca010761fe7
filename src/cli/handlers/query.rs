use anyhow::Result;

use super::CommandContext;
use super::utils::execute_document;

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    let output = execute_document(&ctx, &query, variables)?;
    println!("{}", output);
    Ok(())
}
