//! ContactId value object.

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A type-safe wrapper for contact IDs.
///
/// IDs are opaque strings. Fresh ones are random UUIDs; existing ones
/// (such as the seeded contacts) are accepted as-is as long as they are
/// not empty.
///
/// # Example
///
/// ```
/// use contact_directory::domain::ContactId;
///
/// let id = ContactId::new("3d594650-3436-11e9-bc57-8b80ba54c431").unwrap();
/// assert_eq!(id.as_str(), "3d594650-3436-11e9-bc57-8b80ba54c431");
///
/// let fresh = ContactId::generate();
/// assert_ne!(fresh, id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContactId(String);

impl ContactId {
    /// Create a ContactId from an existing value, validating that it's not empty.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyId` if the provided ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::EmptyId);
        }
        Ok(Self(id))
    }

    /// Generate a fresh, globally unique ID.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ContactId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ContactId> for String {
    fn from(id: ContactId) -> Self {
        id.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
