use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shelf")]
#[command(
    author,
    version,
    about = "A tiny in-memory GraphQL catalogue of authors and books"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .shelf.yml by default)
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
        /// Address to bind (overrides config)
        #[arg(long, env = "SHELF_HOST")]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long, env = "SHELF_PORT")]
        port: Option<u16>,

        /// Do not serve the GraphiQL explorer on GET /graphql
        #[arg(long)]
        no_graphiql: bool,
    },

    /// Execute a GraphQL query against a freshly seeded store
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

    /// Print the schema in SDL
    Schema,
}
