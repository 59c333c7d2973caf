use crate::error::DirectoryResult;
use crate::models::{Contact, ContactSnapshot};
use async_trait::async_trait;

/// Predicate selecting the contact a write applies to.
pub type ContactPredicate<'a> = &'a (dyn Fn(&Contact) -> bool + Send + Sync);

/// Function producing the replacement for a selected contact.
pub type ContactUpdate<'a> = &'a (dyn Fn(&Contact) -> Contact + Send + Sync);

/// Storage for the ordered contact collection.
///
/// Implementations publish a whole new collection on every write, so a
/// snapshot taken earlier never changes underneath its holder.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// The current collection, in insertion order.
    async fn snapshot(&self) -> ContactSnapshot;

    /// Append a contact at the end of the collection.
    ///
    /// Fails with `DirectoryError::DuplicateName` if a contact with the same
    /// name is already stored; the collection is left untouched in that case.
    async fn append(&self, contact: Contact) -> DirectoryResult<Contact>;

    /// Replace the first contact matching `predicate` with `update(old)`,
    /// keeping its position.
    ///
    /// Returns the replacement, or `None` when nothing matched.
    async fn replace_where(
        &self,
        predicate: ContactPredicate<'_>,
        update: ContactUpdate<'_>,
    ) -> Option<Contact>;
}
