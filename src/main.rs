use anyhow::{Context, Result};
use clap::Parser;

use shelf::cli::handlers::{self, CommandContext, ServeOverrides};
use shelf::cli::{Cli, Commands};
use shelf::config::ShelfConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    shelf::logging::init(cli.verbose, cli.log_file);

    match cli.command {
        Commands::Serve {
            host,
            port,
            no_graphiql,
        } => {
            let ctx = CommandContext::new(load_config(cli.config.as_deref())?);
            handlers::handle_serve(
                ctx,
                ServeOverrides {
                    host,
                    port,
                    no_graphiql,
                },
            )
        }
        Commands::Query { query, variables } => handlers::handle_query(query, variables),
        Commands::Mutate {
            mutation,
            variables,
        } => handlers::handle_mutate(mutation, variables),
        Commands::Schema => handlers::handle_schema(),
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<ShelfConfig> {
    let cwd = std::env::current_dir()?;
    ShelfConfig::load(&cwd, path).context("Failed to load shelf configuration")
}
