use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{DirectoryError, DirectoryResult};
use crate::models::{Contact, ContactSnapshot};
use crate::repositories::traits::{ContactPredicate, ContactRepository, ContactUpdate};

/// Contact repository holding the collection in process memory.
///
/// The collection sits behind an `RwLock<Arc<Vec<_>>>`: readers clone the
/// `Arc` and drop the lock at once, writers build a new vector and swap it
/// in while holding the write lock for the whole check-and-replace.
pub struct InMemoryContactRepository {
    contacts: RwLock<ContactSnapshot>,
}

impl InMemoryContactRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::with_contacts(Vec::new())
    }

    /// Create a repository holding the given contacts, in order.
    ///
    /// The caller is responsible for the names being unique.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: RwLock::new(Arc::new(contacts)),
        }
    }
}

impl Default for InMemoryContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn snapshot(&self) -> ContactSnapshot {
        self.contacts.read().await.clone()
    }

    async fn append(&self, contact: Contact) -> DirectoryResult<Contact> {
        let mut current = self.contacts.write().await;

        if current.iter().any(|c| c.name == contact.name) {
            return Err(DirectoryError::DuplicateName { name: contact.name });
        }

        let mut next = Vec::with_capacity(current.len() + 1);
        next.extend(current.iter().cloned());
        next.push(contact.clone());
        *current = Arc::new(next);

        debug!(id = %contact.id, total = current.len(), "Contact appended");
        Ok(contact)
    }

    async fn replace_where(
        &self,
        predicate: ContactPredicate<'_>,
        update: ContactUpdate<'_>,
    ) -> Option<Contact> {
        let mut current = self.contacts.write().await;

        let position = current.iter().position(|c| predicate(c))?;
        let replacement = update(&current[position]);

        let mut next = current.to_vec();
        next[position] = replacement.clone();
        *current = Arc::new(next);

        debug!(id = %replacement.id, position, "Contact replaced");
        Some(replacement)
    }
}
