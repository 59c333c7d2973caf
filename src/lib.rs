//! Contact Directory - a GraphQL API over an in-memory list of contacts.
//!
//! Supports counting, listing (optionally filtered by phone presence) and
//! finding contacts by name, plus adding contacts and editing phone numbers.
//!
//! # Architecture
//!
//! - **models**: Contact, Address and query/mutation input types
//! - **domain**: Validated value objects such as [`ContactId`]
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: The copy-on-write contact store
//! - **services**: Query and mutation logic
//! - **observability**: Operation metrics and timing
//! - **server**: GraphQL schema and HTTP transport

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod server;
pub mod services;

pub use config::Config;
pub use domain::ContactId;
pub use error::{ConfigError, DirectoryError};
pub use models::{Address, Contact, NewContact, PhoneFilter};
pub use observability::MetricsTracker;
pub use repositories::{ContactRepository, InMemoryContactRepository};
pub use server::{build_schema, DirectorySchema};
pub use services::{ContactService, ContactServiceImpl};
