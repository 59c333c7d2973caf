//! Application service layer.
//!
//! Services hold the directory's query and mutation logic and sit between
//! the GraphQL resolvers and the repository.

mod contact_service;

pub use contact_service::{ContactService, ContactServiceImpl};
