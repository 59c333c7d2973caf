//! Sample contacts the directory boots with.

use crate::domain::{ContactId, ValidationError};
use crate::models::Contact;

/// The three contacts the service starts with when seeding is enabled.
pub fn sample_contacts() -> Result<Vec<Contact>, ValidationError> {
    Ok(vec![
        Contact {
            id: ContactId::new("3d594650-3436-11e9-bc57-8b80ba54c431")?,
            name: "Arto Hellas".to_string(),
            phone: Some("040-123543".to_string()),
            street: "Tapiolankatu 5 A".to_string(),
            city: "Espoo".to_string(),
        },
        Contact {
            id: ContactId::new("3d599470-3436-11e9-bc57-8b80ba54c431")?,
            name: "Matti Luukkainen".to_string(),
            phone: Some("040-432342".to_string()),
            street: "Malminkaari 10 A".to_string(),
            city: "Helsinki".to_string(),
        },
        Contact {
            id: ContactId::new("3d599471-3436-11e9-bc57-8b80ba54c431")?,
            name: "Venla Ruuska".to_string(),
            phone: None,
            street: "Nallemäentie 22 C".to_string(),
            city: "Helsinki".to_string(),
        },
    ])
}
