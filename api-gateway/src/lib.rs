// api-gateway/src/lib.rs
pub mod api;
pub mod error;
pub mod config;

use std::sync::Arc;

use account_service::AccountService;
use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::api::account::{
    create_account, delete_account, get_account, list_accounts, update_account,
};

/// App state shared across handlers
pub struct AppState {
    /// Account service
    pub account_service: Arc<AccountService>,
}

/// Build the application router
///
/// Kept separate from `main` so tests can drive the router directly.
pub fn app(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/accounts", get(list_accounts))
        .route("/accounts", post(create_account))
        .route("/accounts/:id", get(get_account))
        .route("/accounts/:id", put(update_account))
        .route("/accounts/:id", delete(delete_account));

    Router::new().nest("/api", api_routes).with_state(state)
}
