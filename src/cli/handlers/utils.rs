use std::sync::Arc;

use anyhow::{Context, Result};
use async_graphql::{Request, Variables};

use crate::graphql::build_schema;
use crate::storage::RecordStore;

pub(super) fn parse_variables(variables: Option<String>) -> Result<Variables> {
    match variables {
        Some(v) => serde_json::from_str(&v).context("Failed to parse --variables as JSON"),
        None => Ok(Variables::default()),
    }
}

/// Run one request against a fresh seeded store and print the response.
pub(super) fn execute_and_print(request: Request) -> Result<()> {
    let schema = build_schema(Arc::new(RecordStore::seeded()));
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);
    if response.is_err() {
        anyhow::bail!("GraphQL request returned {} error(s)", response.errors.len());
    }
    Ok(())
}
