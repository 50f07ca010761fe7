use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(
    author,
    version,
    about = "A small in-memory GraphQL API over books and their authors"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .bookshelf.toml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the GraphQL HTTP server
    Serve {
        /// Address to bind
        #[arg(long, env = "BOOKSHELF_HOST")]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long, env = "BOOKSHELF_PORT")]
        port: Option<u16>,

        /// Do not serve the GraphiQL explorer
        #[arg(long)]
        no_graphiql: bool,

        /// Start without the sample books and authors
        #[arg(long)]
        empty: bool,

        /// How addBook treats an unknown authorId
        #[arg(long, value_enum)]
        references: Option<ReferencePolicyArg>,
    },

    /// Execute a GraphQL query against a fresh library
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the schema in GraphQL SDL
    Schema,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReferencePolicyArg {
    Lenient,
    Strict,
}

impl From<ReferencePolicyArg> for crate::model::ReferencePolicy {
    fn from(arg: ReferencePolicyArg) -> Self {
        match arg {
            ReferencePolicyArg::Lenient => crate::model::ReferencePolicy::Lenient,
            ReferencePolicyArg::Strict => crate::model::ReferencePolicy::Strict,
        }
    }
}
