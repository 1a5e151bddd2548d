//! Account service for managing account records

pub mod service;
pub mod repository;

pub use service::AccountService;
pub use repository::{AccountRepository, InMemoryAccountRepository};
