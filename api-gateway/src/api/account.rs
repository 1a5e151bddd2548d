//! Account API handlers
//!
//! Handles endpoints related to account management:
//! - List accounts
//! - Get account details
//! - Create account
//! - Partially update account
//! - Delete account

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use common::decimal::Amount;
use common::model::account::{Account, AccountUpdate};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::AppState;

/// Create account request
///
/// The ID is optional; an absent or empty ID gets a freshly generated
/// one. A populated ID replaces any existing record stored under it.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAccountRequest {
    /// Account ID
    #[serde(default)]
    pub id: Option<String>,
    /// Owner name
    pub owner: String,
    /// Opening balance
    pub balance: Amount,
}

/// List all accounts
#[utoipa::path(
    get,
    path = "/api/accounts",
    responses(
        (status = 200, description = "Accounts retrieved successfully", body = [Account]),
        (status = 500, description = "Internal server error")
    ),
    tag = "account"
)]
pub async fn list_accounts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Account>>, ApiError> {
    let accounts = state
        .account_service
        .list_accounts()
        .await
        .map_err(ApiError::Common)?;

    Ok(Json(accounts))
}

/// Get an account by ID
#[utoipa::path(
    get,
    path = "/api/accounts/{id}",
    params(
        ("id" = String, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Account details retrieved successfully", body = Account),
        (status = 404, description = "Account not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "account"
)]
pub async fn get_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Account>, ApiError> {
    // Request the account from the service
    let account = state
        .account_service
        .get_account(&id)
        .await
        .map_err(ApiError::Common)?
        .ok_or_else(|| ApiError::NotFound(format!("Account not found: {}", id)))?;

    Ok(Json(account))
}

/// Create a new account
#[utoipa::path(
    post,
    path = "/api/accounts",
    request_body = CreateAccountRequest,
    responses(
        (status = 201, description = "Account successfully created", body = Account,
         headers(("Location" = String, description = "URI of the created account"))),
        (status = 400, description = "Bad request"),
        (status = 500, description = "Internal server error")
    ),
    tag = "account"
)]
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let account = Account::new(
        request.id.unwrap_or_default(),
        request.owner,
        request.balance,
    );

    let created = state
        .account_service
        .create_account(account)
        .await
        .map_err(ApiError::Common)?;

    let location = format!("/api/accounts/{}", created.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// Partially update an account
///
/// Fields absent from the body keep their stored value.
#[utoipa::path(
    put,
    path = "/api/accounts/{id}",
    params(
        ("id" = String, Path, description = "Account ID")
    ),
    request_body = AccountUpdate,
    responses(
        (status = 200, description = "Account updated successfully", body = Account),
        (status = 404, description = "Account not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "account"
)]
pub async fn update_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(update): Json<AccountUpdate>,
) -> Result<Json<Account>, ApiError> {
    let merged = state
        .account_service
        .update_account(&id, update)
        .await
        .map_err(ApiError::Common)?
        .ok_or_else(|| ApiError::NotFound(format!("Account not found: {}", id)))?;

    Ok(Json(merged))
}

/// Delete an account
///
/// Deleting an absent ID still returns 204.
#[utoipa::path(
    delete,
    path = "/api/accounts/{id}",
    params(
        ("id" = String, Path, description = "Account ID")
    ),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 500, description = "Internal server error")
    ),
    tag = "account"
)]
pub async fn delete_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .account_service
        .delete_account(&id)
        .await
        .map_err(ApiError::Common)?;

    Ok(StatusCode::NO_CONTENT)
}
