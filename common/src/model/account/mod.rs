//! Account model and related types

use serde::{Deserialize, Serialize};

use crate::decimal::Amount;
#[cfg(feature = "utoipa")]
use crate::utoipa::ToSchema;

/// Account model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct Account {
    /// Unique account ID, used as the store key
    pub id: String,
    /// Free-form owner name
    pub owner: String,
    /// Current balance
    pub balance: Amount,
}

impl Account {
    /// Create a new account record
    pub fn new(id: impl Into<String>, owner: impl Into<String>, balance: Amount) -> Self {
        Self {
            id: id.into(),
            owner: owner.into(),
            balance,
        }
    }

    /// Apply a partial update, overwriting only the fields the patch carries
    pub fn merge(&mut self, update: AccountUpdate) {
        if let Some(owner) = update.owner {
            self.owner = owner;
        }
        if let Some(balance) = update.balance {
            self.balance = balance;
        }
    }
}

/// Partial update for an account
///
/// `None` fields mean "leave unchanged". An absent field in the request
/// body deserializes to `None`, so a patch touching only `balance` keeps
/// the current `owner`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct AccountUpdate {
    /// New owner, if changing
    pub owner: Option<String>,
    /// New balance, if changing
    pub balance: Option<Amount>,
}
