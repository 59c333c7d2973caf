use async_trait::async_trait;
use contact_directory::error::{DirectoryError, DirectoryResult};
use contact_directory::models::{Contact, ContactSnapshot};
use contact_directory::repositories::{ContactPredicate, ContactRepository, ContactUpdate};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Keeps contacts in a plain vector and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<Vec<Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Add a contact directly, bypassing the duplicate check.
    pub fn add_contact(&self, contact: Contact) {
        self.contacts.lock().unwrap().push(contact);
    }

    /// Add multiple contacts directly.
    pub fn add_contacts(&self, contacts_list: Vec<Contact>) {
        self.contacts.lock().unwrap().extend(contacts_list);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.lock().unwrap().clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn snapshot(&self) -> ContactSnapshot {
        self.track_call("snapshot");
        Arc::new(self.contacts.lock().unwrap().clone())
    }

    async fn append(&self, contact: Contact) -> DirectoryResult<Contact> {
        self.track_call("append");

        let mut contacts = self.contacts.lock().unwrap();
        if contacts.iter().any(|c| c.name == contact.name) {
            return Err(DirectoryError::DuplicateName { name: contact.name });
        }
        contacts.push(contact.clone());
        Ok(contact)
    }

    async fn replace_where(
        &self,
        predicate: ContactPredicate<'_>,
        update: ContactUpdate<'_>,
    ) -> Option<Contact> {
        self.track_call("replace_where");

        let mut contacts = self.contacts.lock().unwrap();
        let slot = contacts.iter_mut().find(|c| predicate(&**c))?;
        *slot = update(&*slot);
        Some(slot.clone())
    }
}
