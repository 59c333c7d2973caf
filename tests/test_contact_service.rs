//! Service-level tests against a call-counting mock repository.

mod e2e;
mod mocks;

use contact_directory::{ContactService, ContactServiceImpl, DirectoryError, PhoneFilter};
use e2e::fixtures::{sample_contact, sample_new_contact};
use mocks::MockContactRepository;
use std::sync::Arc;

fn service_with(repo: &MockContactRepository) -> ContactServiceImpl {
    ContactServiceImpl::new(Arc::new(repo.clone()))
}

#[tokio::test]
async fn test_reads_use_a_single_snapshot() {
    let repo = MockContactRepository::new();
    repo.add_contacts(vec![
        sample_contact("Arto Hellas", Some("040-123543")),
        sample_contact("Venla Ruuska", None),
    ]);
    let service = service_with(&repo);

    assert_eq!(service.count().await, 2);
    assert_eq!(service.list(PhoneFilter::NoPhone).await.len(), 1);
    assert!(service.find_by_name("Arto Hellas").await.is_some());

    assert_eq!(repo.get_call_count("snapshot"), 3);
    assert_eq!(repo.get_call_count("append"), 0);
    assert_eq!(repo.get_call_count("replace_where"), 0);
}

#[tokio::test]
async fn test_add_contact_goes_through_append() {
    let repo = MockContactRepository::new();
    let service = service_with(&repo);

    let created = service
        .add_contact(sample_new_contact("Pekka Mikkola", Some("045-2374321")))
        .await
        .unwrap();

    assert_eq!(created.name, "Pekka Mikkola");
    assert!(!created.id.as_str().is_empty());
    assert_eq!(repo.get_call_count("append"), 1);
}

#[tokio::test]
async fn test_duplicate_name_is_reported() {
    let repo = MockContactRepository::new();
    repo.add_contact(sample_contact("Arto Hellas", Some("040-123543")));
    let service = service_with(&repo);

    let result = service
        .add_contact(sample_new_contact("Arto Hellas", None))
        .await;

    assert_eq!(
        result,
        Err(DirectoryError::DuplicateName {
            name: "Arto Hellas".to_string()
        })
    );
    assert_eq!(service.metrics().rejected_mutations_total(), 1);
}

#[tokio::test]
async fn test_edit_phone_matches_exact_name_only() {
    let repo = MockContactRepository::new();
    repo.add_contact(sample_contact("Venla Ruuska", None));
    let service = service_with(&repo);

    assert!(service
        .edit_phone("venla ruuska", "044-5551234".to_string())
        .await
        .is_none());
    assert_eq!(service.metrics().lookup_misses_total(), 1);

    let updated = service
        .edit_phone("Venla Ruuska", "044-5551234".to_string())
        .await
        .unwrap();
    assert_eq!(updated.phone.as_deref(), Some("044-5551234"));
    assert_eq!(repo.get_call_count("replace_where"), 2);
}
