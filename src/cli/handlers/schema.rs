use std::sync::Arc;

use anyhow::Result;

use crate::graphql::build_schema;
use crate::storage::RecordStore;

pub fn handle_schema() -> Result<()> {
    let schema = build_schema(Arc::new(RecordStore::new()));
    print!("{}", schema.sdl());
    Ok(())
}
