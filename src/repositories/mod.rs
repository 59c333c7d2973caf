mod in_memory_contact_repository;
pub mod seed;
mod traits;

pub use in_memory_contact_repository::InMemoryContactRepository;
pub use traits::{ContactPredicate, ContactRepository, ContactUpdate};
