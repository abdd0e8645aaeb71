mod mutate;
mod query;
mod schema;
mod serve;
mod utils;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::{ServeOverrides, handle_serve};

use crate::config::ShelfConfig;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: ShelfConfig,
}

impl CommandContext {
    pub fn new(config: ShelfConfig) -> Self {
        Self { config }
    }
}
