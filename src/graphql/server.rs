//! HTTP transport for the schema.

use std::net::SocketAddr;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Router;
use axum::extract::{FromRequest, Request, State};
use axum::http::{HeaderMap, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;

use super::ShelfSchema;
use crate::error::Result;

/// The one path the API is served on.
pub const GRAPHQL_PATH: &str = "/graphql";

#[derive(Clone)]
struct AppState {
    schema: ShelfSchema,
    graphiql: bool,
}

/// Build the router for [`GRAPHQL_PATH`].
///
/// POST and GET both execute GraphQL. A GET whose `Accept` header asks for
/// HTML gets the GraphiQL page instead, when `graphiql` is enabled.
pub fn router(schema: ShelfSchema, graphiql: bool) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphql_get).post(graphql_post))
        .with_state(AppState { schema, graphiql })
}

async fn graphql_post(State(state): State<AppState>, request: GraphQLRequest) -> GraphQLResponse {
    execute(&state.schema, request).await
}

async fn graphql_get(State(state): State<AppState>, request: Request) -> Response {
    if state.graphiql && accepts_html(request.headers()) {
        return graphiql_page().into_response();
    }

    match <GraphQLRequest as FromRequest<AppState>>::from_request(request, &state).await {
        Ok(request) => execute(&state.schema, request).await.into_response(),
        Err(rejection) => rejection.into_response(),
    }
}

async fn execute(schema: &ShelfSchema, request: GraphQLRequest) -> GraphQLResponse {
    let request = request.into_inner();
    tracing::debug!(
        operation = request.operation_name.as_deref().unwrap_or("<anonymous>"),
        "executing graphql request"
    );

    let response = schema.execute(request).await;
    if response.is_err() {
        tracing::debug!(errors = response.errors.len(), "request finished with errors");
    }
    response.into()
}

fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("text/html"))
}

fn graphiql_page() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// Bind `addr` and serve until the process is stopped.
pub async fn run_server(schema: ShelfSchema, addr: SocketAddr, graphiql: bool) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;

    tracing::info!(address = %local, "server is up");
    if graphiql {
        tracing::info!("GraphiQL: http://{}{}", local, GRAPHQL_PATH);
    }

    axum::serve(listener, router(schema, graphiql)).await?;
    Ok(())
}
