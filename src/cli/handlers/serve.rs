use crate::graphql::{GRAPHQL_PATH, build_schema, run_server};
use crate::model::ReferencePolicy;
use anyhow::{Context, Result};
use colored::Colorize;
use std::sync::Arc;
use tracing::info;

use super::CommandContext;

/// Command-line overrides for the `[server]` and `[library]` config sections
#[derive(Default)]
pub struct ServeOptions {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub no_graphiql: bool,
    pub empty: bool,
    pub references: Option<ReferencePolicy>,
}

pub fn handle_serve(mut ctx: CommandContext, options: ServeOptions) -> Result<()> {
    let server = &mut ctx.config.server;
    if let Some(host) = options.host {
        server.host = host;
    }
    if let Some(port) = options.port {
        server.port = port;
    }
    if options.no_graphiql {
        server.graphiql = false;
    }

    let library_settings = &mut ctx.config.library;
    if options.empty {
        library_settings.seed = false;
    }
    if let Some(references) = options.references {
        library_settings.references = references;
    }

    if let Some(path) = &ctx.config_path {
        info!(config = %path.display(), "loaded config");
    }

    let library = Arc::new(ctx.config.library.build_library());
    info!(
        books = library.book_count(),
        authors = library.author_count(),
        references = %library.reference_policy(),
        "library ready"
    );

    let address = ctx.config.server.address();
    let graphiql = ctx.config.server.graphiql;
    let schema = build_schema(library);

    println!(
        "{} http://{}{}",
        "GraphQL endpoint:".green(),
        address,
        GRAPHQL_PATH
    );
    if graphiql {
        println!(
            "{} http://{}{}",
            "GraphiQL explorer:".green(),
            address,
            GRAPHQL_PATH
        );
    }

    tokio::runtime::Runtime::new()?
        .block_on(async { run_server(schema, &address, graphiql).await })
        .with_context(|| format!("Server on {} failed", address))?;
    Ok(())
}
