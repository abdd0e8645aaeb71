use anyhow::Result;

use super::utils::{execute_and_print, parse_variables};

pub fn handle_mutate(mutation: String, variables: Option<String>) -> Result<()> {
    let vars = parse_variables(variables)?;

    // Auto-wrap in mutation { }
    let query = format!("mutation {{ {} }}", mutation);
    let request = async_graphql::Request::new(query).variables(vars);
    execute_and_print(request)
}
