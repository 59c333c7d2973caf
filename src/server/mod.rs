//! GraphQL-over-HTTP server for the contact directory.
//!
//! `POST /` executes GraphQL requests, `GET /` serves GraphiQL when enabled
//! and `GET /health` answers liveness probes.

pub mod handlers;
pub mod schema;

pub use schema::{build_schema, DirectorySchema, MutationRoot, QueryRoot};

use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;
use tracing::{error, info};

/// Build the HTTP router around a schema.
pub fn router(schema: DirectorySchema, graphiql: bool) -> Router {
    let endpoint = if graphiql {
        get(handlers::graphiql).post(handlers::graphql)
    } else {
        post(handlers::graphql)
    };

    Router::new()
        .route("/", endpoint)
        .route("/health", get(handlers::health))
        .with_state(schema)
}

/// Serve `app` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Serve `app` on `listener` until Ctrl-C.
pub async fn run_server(listener: TcpListener, app: Router) -> Result<()> {
    serve(listener, app, shutdown_signal()).await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            // Without a signal handler the server just runs until killed
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
