//! Shared setup and helpers for the integration tests.

#![allow(dead_code)]

use contact_directory::repositories::seed::sample_contacts;
use contact_directory::{
    build_schema, ContactRepository, ContactService, ContactServiceImpl, DirectorySchema,
    InMemoryContactRepository,
};
use serde_json::Value;
use std::sync::Arc;

pub mod fixtures;

/// A service over a repository seeded with the three sample contacts.
pub fn seeded_service() -> Arc<ContactServiceImpl> {
    let repo = Arc::new(InMemoryContactRepository::with_contacts(
        sample_contacts().expect("sample contacts are valid"),
    )) as Arc<dyn ContactRepository>;
    Arc::new(ContactServiceImpl::new(repo))
}

/// A schema over a freshly seeded directory.
pub fn seeded_schema() -> DirectorySchema {
    build_schema(seeded_service() as Arc<dyn ContactService>)
}

/// Execute a GraphQL document and return the whole response as JSON.
pub async fn execute_json(schema: &DirectorySchema, document: &str) -> Value {
    let response = schema.execute(document).await;
    serde_json::to_value(&response).expect("response serializes")
}

/// Names found in a list of serialized persons.
pub fn names(persons: &Value) -> Vec<String> {
    persons
        .as_array()
        .expect("persons is a list")
        .iter()
        .map(|p| p["name"].as_str().unwrap_or_default().to_string())
        .collect()
}
