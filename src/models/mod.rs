//! Data models for directory entities.
//!
//! This module contains the contact record, its embedded address, the
//! input shape for new contacts, and the phone-presence filter used by
//! listing queries.

pub mod contact;

pub use contact::{Address, Contact, ContactSnapshot, NewContact, PhoneFilter};
