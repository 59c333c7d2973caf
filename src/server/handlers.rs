//! HTTP handlers for the GraphQL endpoint.

use crate::server::schema::DirectorySchema;
use async_graphql::http::GraphiQLSource;
use axum::extract::State;
use axum::response::Html;
use axum::Json;
use tracing::debug;

/// Execute a GraphQL request.
pub async fn graphql(
    State(schema): State<DirectorySchema>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    let operation = request.operation_name.clone();
    let response = schema.execute(request).await;

    if response.is_err() {
        debug!(
            operation = ?operation,
            errors = response.errors.len(),
            "GraphQL request returned errors"
        );
    }

    Json(response)
}

/// Serve the GraphiQL IDE pointed at this endpoint.
pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/").finish())
}

/// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}
