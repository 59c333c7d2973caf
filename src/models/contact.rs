//! Contact model representing a person in the directory.

use crate::domain::ContactId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One published version of the whole contact collection.
///
/// Snapshots are immutable; writers publish a new collection instead of
/// editing a snapshot that readers may still hold.
pub type ContactSnapshot = Arc<Vec<Contact>>;

/// A contact in the directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Unique identifier, assigned once at creation
    pub id: ContactId,

    /// Full name, unique across the directory (exact match)
    pub name: String,

    /// Phone number, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Street part of the address
    pub street: String,

    /// City part of the address
    pub city: String,
}

/// Postal address embedded in a contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub city: String,
}

/// Fields supplied by a caller adding a contact.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub street: String,
    pub city: String,
}

/// Phone-presence filter for listing contacts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PhoneFilter {
    /// Every contact
    #[default]
    All,
    /// Only contacts with a non-empty phone
    HasPhone,
    /// Only contacts without a phone, or with an empty one
    NoPhone,
}

impl Contact {
    /// Build a contact from caller input under the given ID.
    pub fn from_new(id: ContactId, new: NewContact) -> Self {
        Self {
            id,
            name: new.name,
            phone: new.phone,
            street: new.street,
            city: new.city,
        }
    }

    /// Whether the contact has a phone number. Empty strings do not count.
    pub fn has_phone(&self) -> bool {
        self.phone.as_deref().is_some_and(|p| !p.is_empty())
    }

    /// Project street and city into an [`Address`].
    pub fn address(&self) -> Address {
        Address {
            street: self.street.clone(),
            city: self.city.clone(),
        }
    }

    /// Copy of this contact with the phone replaced. Every other field is kept.
    pub fn with_phone(&self, phone: impl Into<String>) -> Self {
        Self {
            phone: Some(phone.into()),
            ..self.clone()
        }
    }
}

impl PhoneFilter {
    /// Whether a contact passes this filter.
    pub fn matches(&self, contact: &Contact) -> bool {
        match self {
            Self::All => true,
            Self::HasPhone => contact.has_phone(),
            Self::NoPhone => !contact.has_phone(),
        }
    }
}
