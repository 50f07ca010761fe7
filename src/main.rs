use anyhow::Result;
use clap::Parser;

use bookshelf::cli::handlers::{
    CommandContext, ServeOptions, handle_mutate, handle_query, handle_schema, handle_serve,
};
use bookshelf::cli::{Cli, Commands};
use bookshelf::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.as_deref())?;

    match cli.command {
        Commands::Serve {
            host,
            port,
            no_graphiql,
            empty,
            references,
        } => {
            let ctx = CommandContext::load(cli.config.as_deref())?;
            let options = ServeOptions {
                host,
                port,
                no_graphiql,
                empty,
                references: references.map(Into::into),
            };
            handle_serve(ctx, options)
        }
        Commands::Query { query, variables } => {
            let ctx = CommandContext::load(cli.config.as_deref())?;
            handle_query(ctx, query, variables)
        }
        Commands::Mutate {
            mutation,
            variables,
        } => {
            let ctx = CommandContext::load(cli.config.as_deref())?;
            handle_mutate(ctx, mutation, variables)
        }
        Commands::Schema => handle_schema(),
    }
}
