//! Domain value objects and types.
//!
//! Type-safe wrappers for directory concepts. Value objects validate at
//! construction time so an invalid identifier can never be represented.

pub mod contact_id;
pub mod errors;

pub use contact_id::ContactId;
pub use errors::ValidationError;
