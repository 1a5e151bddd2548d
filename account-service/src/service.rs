//! Account service implementation

use std::sync::Arc;

use common::error::{ErrorExt, Result};
use common::model::account::{Account, AccountUpdate};
use tracing::{debug, info};

use crate::repository::{AccountRepository, InMemoryAccountRepository};

/// Account service providing CRUD operations over the account store
pub struct AccountService {
    /// Repository for account data
    repo: Arc<dyn AccountRepository>,
}

impl AccountService {
    /// Create a new account service backed by the in-memory repository
    pub fn new() -> Self {
        Self {
            repo: Arc::new(InMemoryAccountRepository::new()),
        }
    }

    /// Create a new account service with a specific repository
    pub fn with_repository(repo: Arc<dyn AccountRepository>) -> Self {
        Self { repo }
    }

    /// Get all accounts
    ///
    /// Returns a snapshot of the current records; ordering follows the
    /// iteration order of the underlying map and is not stable across
    /// calls.
    pub async fn list_accounts(&self) -> Result<Vec<Account>> {
        debug!("Listing all accounts");
        self.repo.find_all().await
    }

    /// Get an account by ID
    pub async fn get_account(&self, id: &str) -> Result<Option<Account>> {
        debug!("Getting account {}", id);
        self.repo.find_by_id(id).await
    }

    /// Create a new account
    ///
    /// An empty ID on the incoming record is replaced with a freshly
    /// generated one; a populated ID stores the record under that ID,
    /// replacing any existing record.
    pub async fn create_account(&self, account: Account) -> Result<Account> {
        info!("Creating account for owner {}", account.owner);
        self.repo
            .save(account)
            .await
            .with_context(|| "Failed to store new account")
    }

    /// Apply a partial update to an existing account
    ///
    /// Each field of the patch overwrites the stored value only when it
    /// is present. Returns `Ok(None)` when no account exists for `id`;
    /// nothing is inserted in that case.
    pub async fn update_account(&self, id: &str, update: AccountUpdate) -> Result<Option<Account>> {
        match self.repo.find_by_id(id).await? {
            Some(mut account) => {
                account.merge(update);
                info!("Updating account {}", id);
                let merged = self
                    .repo
                    .save(account)
                    .await
                    .with_context(|| format!("Failed to store merged account {}", id))?;
                Ok(Some(merged))
            }
            None => Ok(None),
        }
    }

    /// Delete an account
    ///
    /// Deleting an ID that is not present is a no-op, not an error.
    pub async fn delete_account(&self, id: &str) -> Result<()> {
        info!("Deleting account {}", id);
        self.repo.delete_by_id(id).await
    }

    /// Remove every account, used for test isolation
    pub async fn clear(&self) -> Result<()> {
        self.repo.clear().await
    }
}
