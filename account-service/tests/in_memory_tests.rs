use account_service::{AccountRepository, InMemoryAccountRepository};
use common::decimal::dec;
use common::model::account::Account;
use uuid::Uuid;

#[tokio::test]
async fn test_seed_accounts_present() {
    let repo = InMemoryAccountRepository::new();

    let alice = repo.find_by_id("A100").await.unwrap().unwrap();
    assert_eq!(alice.id, "A100");
    assert_eq!(alice.owner, "Alice");
    assert_eq!(alice.balance, dec!(1200.50));

    let bob = repo.find_by_id("A200").await.unwrap().unwrap();
    assert_eq!(bob.id, "A200");
    assert_eq!(bob.owner, "Bob");
    assert_eq!(bob.balance, dec!(380.00));

    assert_eq!(repo.accounts.len(), 2);
}

#[tokio::test]
async fn test_find_by_id_returns_matching_record() {
    let repo = InMemoryAccountRepository::new();

    for id in ["A100", "A200"] {
        let account = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(account.id, id);
    }

    let missing = repo.find_by_id("A999").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_save_generates_id_when_empty() {
    let repo = InMemoryAccountRepository::new();

    let saved = repo
        .save(Account::new("", "Charlie", dec!(55.75)))
        .await
        .unwrap();

    assert!(!saved.id.is_empty());
    assert!(Uuid::parse_str(&saved.id).is_ok());

    // The generated ID must not collide with the seeds
    assert_ne!(saved.id, "A100");
    assert_ne!(saved.id, "A200");

    let fetched = repo.find_by_id(&saved.id).await.unwrap().unwrap();
    assert_eq!(fetched, saved);
}

#[tokio::test]
async fn test_save_with_existing_id_replaces_record() {
    let repo = InMemoryAccountRepository::new();

    let replaced = repo
        .save(Account::new("A100", "Mallory", dec!(0.01)))
        .await
        .unwrap();
    assert_eq!(replaced.id, "A100");

    let fetched = repo.find_by_id("A100").await.unwrap().unwrap();
    assert_eq!(fetched.owner, "Mallory");
    assert_eq!(fetched.balance, dec!(0.01));
    assert_eq!(repo.accounts.len(), 2);
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let repo = InMemoryAccountRepository::new();

    repo.delete_by_id("A100").await.unwrap();
    assert!(repo.find_by_id("A100").await.unwrap().is_none());

    // Deleting again must not fail or alter the store
    repo.delete_by_id("A100").await.unwrap();
    assert_eq!(repo.accounts.len(), 1);
}

#[tokio::test]
async fn test_clear_removes_everything() {
    let repo = InMemoryAccountRepository::new();

    repo.save(Account::new("", "Charlie", dec!(1.00)))
        .await
        .unwrap();
    repo.clear().await.unwrap();

    assert!(repo.accounts.is_empty());
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_concurrent_saves_are_all_visible() {
    let repo = std::sync::Arc::new(InMemoryAccountRepository::new());

    let mut handles = Vec::new();
    for i in 0..10 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            repo.save(Account::new("", format!("owner-{}", i), dec!(10.00)))
                .await
                .unwrap()
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }

    // Two seeds plus ten freshly created accounts
    assert_eq!(repo.find_all().await.unwrap().len(), 12);
}
