use std::sync::Arc;

use anyhow::{Context, Result};

use super::CommandContext;
use crate::graphql::{build_schema, run_server};
use crate::storage::RecordStore;

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default)]
pub struct ServeOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub no_graphiql: bool,
}

pub fn handle_serve(ctx: CommandContext, overrides: ServeOverrides) -> Result<()> {
    let mut settings = ctx.config.server;
    if let Some(host) = overrides.host {
        settings.host = host;
    }
    if let Some(port) = overrides.port {
        settings.port = port;
    }
    if overrides.no_graphiql {
        settings.graphiql = false;
    }

    let addr = settings.socket_addr()?;
    let schema = build_schema(Arc::new(RecordStore::seeded()));

    tokio::runtime::Runtime::new()?
        .block_on(run_server(schema, addr, settings.graphiql))
        .with_context(|| format!("Server on {} stopped", addr))?;
    Ok(())
}
