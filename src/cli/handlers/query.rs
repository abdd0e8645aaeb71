use anyhow::Result;

use super::utils::{execute_and_print, parse_variables};

pub fn handle_query(query: String, variables: Option<String>) -> Result<()> {
    let vars = parse_variables(variables)?;
    let request = async_graphql::Request::new(query).variables(vars);
    execute_and_print(request)
}
