//! Contact Directory - Main entry point
//!
//! Serves the directory's GraphQL API over HTTP.

use anyhow::Result;
use contact_directory::repositories::seed::sample_contacts;
use contact_directory::server::{self, build_schema};
use contact_directory::{
    Config, ContactRepository, ContactService, ContactServiceImpl, InMemoryContactRepository,
    MetricsTracker,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // RUST_LOG wins over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded successfully");

    let contacts = if config.seed_data {
        sample_contacts()?
    } else {
        Vec::new()
    };
    info!("Directory starting with {} contacts", contacts.len());

    let contact_repo =
        Arc::new(InMemoryContactRepository::with_contacts(contacts)) as Arc<dyn ContactRepository>;

    let metrics = MetricsTracker::new();
    let contact_service = Arc::new(ContactServiceImpl::with_metrics(
        contact_repo,
        metrics.clone(),
    )) as Arc<dyn ContactService>;

    let schema = build_schema(contact_service);
    let app = server::router(schema, config.graphiql);

    let listener = match TcpListener::bind(config.bind_address()).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", config.bind_address(), e);
            return Err(e.into());
        }
    };

    info!("Server ready at http://{}/", listener.local_addr()?);
    if config.graphiql {
        info!("GraphiQL available on GET /");
    }

    server::run_server(listener, app).await?;

    info!("{}", metrics.summary());
    info!("Contact Directory shutdown complete");
    Ok(())
}
