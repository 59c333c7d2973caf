//! Contact service layer.
//!
//! Query and mutation operations over the contact repository.

use crate::domain::ContactId;
use crate::error::DirectoryResult;
use crate::models::{Contact, NewContact, PhoneFilter};
use crate::observability::{MetricsTracker, Timer};
use crate::repositories::ContactRepository;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

/// Contact service trait for directory operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Number of contacts in the directory.
    async fn count(&self) -> usize;

    /// Contacts passing `filter`, in insertion order.
    async fn list(&self, filter: PhoneFilter) -> Vec<Contact>;

    /// The contact whose name equals `name` exactly.
    async fn find_by_name(&self, name: &str) -> Option<Contact>;

    /// Add a contact under a freshly generated ID.
    ///
    /// Fails with `DirectoryError::DuplicateName` if the name is taken.
    async fn add_contact(&self, params: NewContact) -> DirectoryResult<Contact>;

    /// Replace the phone of the contact named `name`.
    ///
    /// Returns `None` when no contact has that name.
    async fn edit_phone(&self, name: &str, phone: String) -> Option<Contact>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    contact_repo: Arc<dyn ContactRepository>,
    metrics: MetricsTracker,
}

impl ContactServiceImpl {
    /// Create a new contact service.
    pub fn new(contact_repo: Arc<dyn ContactRepository>) -> Self {
        Self::with_metrics(contact_repo, MetricsTracker::new())
    }

    /// Create a contact service that reports into an existing tracker.
    pub fn with_metrics(
        contact_repo: Arc<dyn ContactRepository>,
        metrics: MetricsTracker,
    ) -> Self {
        Self {
            contact_repo,
            metrics,
        }
    }

    /// Metrics recorded by this service.
    pub fn metrics(&self) -> &MetricsTracker {
        &self.metrics
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn count(&self) -> usize {
        let count = self.contact_repo.snapshot().await.len();
        self.metrics.track_query("count", count);
        count
    }

    async fn list(&self, filter: PhoneFilter) -> Vec<Contact> {
        let timer = Timer::new("list");
        let contacts: Vec<Contact> = self
            .contact_repo
            .snapshot()
            .await
            .iter()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect();
        timer.finish();

        self.metrics.track_query("list", contacts.len());
        contacts
    }

    async fn find_by_name(&self, name: &str) -> Option<Contact> {
        let found = self
            .contact_repo
            .snapshot()
            .await
            .iter()
            .find(|c| c.name == name)
            .cloned();

        match found {
            Some(_) => self.metrics.track_query("find_by_name", 1),
            None => {
                self.metrics.track_query("find_by_name", 0);
                self.metrics.track_lookup_miss("find_by_name");
            }
        }
        found
    }

    async fn add_contact(&self, params: NewContact) -> DirectoryResult<Contact> {
        let timer = Timer::new("add_contact");
        let contact = Contact::from_new(ContactId::generate(), params);
        let result = self.contact_repo.append(contact).await;
        timer.finish();

        match &result {
            Ok(_) => self.metrics.track_mutation("add_contact", true),
            Err(e) => {
                warn!(error = %e, "Rejected new contact");
                self.metrics.track_mutation("add_contact", false);
            }
        }
        result
    }

    async fn edit_phone(&self, name: &str, phone: String) -> Option<Contact> {
        let timer = Timer::new("edit_phone");
        let updated = self
            .contact_repo
            .replace_where(&|c: &Contact| c.name == name, &|c: &Contact| {
                c.with_phone(phone.as_str())
            })
            .await;
        timer.finish();

        match updated {
            Some(_) => self.metrics.track_mutation("edit_phone", true),
            None => self.metrics.track_lookup_miss("edit_phone"),
        }
        updated
    }
}
