//! Repository for account data

use async_trait::async_trait;
use common::decimal::dec;
use common::error::Result;
use common::model::account::Account;
use dashmap::DashMap;
use uuid::Uuid;

/// Account repository trait defining the interface for account data storage
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Get all accounts
    async fn find_all(&self) -> Result<Vec<Account>>;

    /// Get an account by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Account>>;

    /// Store an account under its ID, overwriting any existing record
    async fn save(&self, account: Account) -> Result<Account>;

    /// Remove an account by ID
    async fn delete_by_id(&self, id: &str) -> Result<()>;

    /// Remove all accounts
    async fn clear(&self) -> Result<()>;
}

/// In-memory repository for account data
pub struct InMemoryAccountRepository {
    /// Accounts by ID
    pub accounts: DashMap<String, Account>,
}

impl InMemoryAccountRepository {
    /// Create a new in-memory account repository
    ///
    /// The store starts with two seed accounts. Seeding is a fixed
    /// startup side effect, not a configurable option.
    pub fn new() -> Self {
        let accounts = DashMap::new();
        accounts.insert(
            "A100".to_string(),
            Account::new("A100", "Alice", dec!(1200.50)),
        );
        accounts.insert(
            "A200".to_string(),
            Account::new("A200", "Bob", dec!(380.00)),
        );

        Self { accounts }
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    /// Get all accounts
    async fn find_all(&self) -> Result<Vec<Account>> {
        Ok(self
            .accounts
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    /// Get an account by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Account>> {
        Ok(self.accounts.get(id).map(|a| a.clone()))
    }

    /// Store an account, assigning a fresh ID when the record has none
    ///
    /// Last write wins: saving under an ID that already exists replaces
    /// the stored record entirely.
    async fn save(&self, mut account: Account) -> Result<Account> {
        if account.id.is_empty() {
            account.id = Uuid::new_v4().to_string();
        }

        self.accounts.insert(account.id.clone(), account.clone());
        Ok(account)
    }

    /// Remove an account by ID; removing an absent ID is a no-op
    async fn delete_by_id(&self, id: &str) -> Result<()> {
        self.accounts.remove(id);
        Ok(())
    }

    /// Remove all accounts
    async fn clear(&self) -> Result<()> {
        self.accounts.clear();
        Ok(())
    }
}
