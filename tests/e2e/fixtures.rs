//! Test fixtures and sample data.
//!
//! Reusable contacts and inputs for the integration tests.

use contact_directory::{Contact, ContactId, NewContact};

/// Input for a new contact with street and city filled in.
pub fn sample_new_contact(name: &str, phone: Option<&str>) -> NewContact {
    NewContact {
        name: name.to_string(),
        phone: phone.map(str::to_string),
        street: "Vilppulantie 25".to_string(),
        city: "Helsinki".to_string(),
    }
}

/// A stored contact with a generated ID.
#[allow(dead_code)]
pub fn sample_contact(name: &str, phone: Option<&str>) -> Contact {
    Contact::from_new(ContactId::generate(), sample_new_contact(name, phone))
}
