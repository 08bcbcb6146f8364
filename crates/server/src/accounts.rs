//! Account API endpoints

use api_types::account::{
    AccountNew, AccountView, AccountsResponse, ActiveSet, CashFilter, CreditAdjust, DepositNew,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{ServerError, server::ServerState};

pub(crate) fn view(account: ledger::Account) -> AccountView {
    AccountView {
        id: account.id,
        full_name: account.full_name,
        family_name: account.family_name,
        id_number: account.id_number,
        cash_minor: account.cash_minor,
        credit_minor: account.credit_minor,
        is_active: account.is_active,
        created_at: account.created_at,
    }
}

/// Handle requests for listing all accounts
pub async fn list(State(state): State<ServerState>) -> Result<Json<AccountsResponse>, ServerError> {
    let accounts = state.ledger.accounts().await?;

    Ok(Json(AccountsResponse {
        accounts: accounts.into_iter().map(view).collect(),
    }))
}

/// Handle requests for a single account
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AccountView>, ServerError> {
    let account = state.ledger.account(id).await?;
    Ok(Json(view(account)))
}

/// Handle requests for opening a new account
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<AccountNew>,
) -> Result<(StatusCode, Json<AccountView>), ServerError> {
    let account = state
        .ledger
        .create_account(&payload.full_name, &payload.family_name, &payload.id_number)
        .await?;

    Ok((StatusCode::CREATED, Json(view(account))))
}

/// Handle requests for deleting an account
///
/// Only inactive accounts can be deleted.
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state.ledger.delete_account(id).await?;
    Ok(StatusCode::OK)
}

/// Handle requests for depositing cash
pub async fn deposit(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<DepositNew>,
) -> Result<Json<AccountView>, ServerError> {
    let account = state.ledger.deposit_cash(id, payload.amount_minor).await?;
    Ok(Json(view(account)))
}

/// Handle requests for adjusting the credit line
pub async fn credit(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CreditAdjust>,
) -> Result<Json<AccountView>, ServerError> {
    let account = state.ledger.update_credit(id, payload.delta_minor).await?;
    Ok(Json(view(account)))
}

/// Handle requests for toggling the active flag
pub async fn set_active(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ActiveSet>,
) -> Result<Json<AccountView>, ServerError> {
    let account = state.ledger.set_active(id, payload.is_active).await?;
    Ok(Json(view(account)))
}

/// Handle requests for filtering accounts by cash balance
pub async fn filter_by_cash(
    State(state): State<ServerState>,
    Path(amount): Path<i64>,
    Query(filter): Query<CashFilter>,
) -> Result<Json<AccountsResponse>, ServerError> {
    let accounts = state
        .ledger
        .accounts_by_cash(amount, filter.is_greater_than, filter.and_equal)
        .await?;

    Ok(Json(AccountsResponse {
        accounts: accounts.into_iter().map(view).collect(),
    }))
}
