//! Transfer API endpoint

use api_types::transfer::{TransferNew, TransferReceipt};
use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::{ServerError, accounts, server::ServerState};

/// Handle requests for moving money between two accounts
pub async fn transact(
    State(state): State<ServerState>,
    Path((from, to)): Path<(Uuid, Uuid)>,
    Json(payload): Json<TransferNew>,
) -> Result<Json<TransferReceipt>, ServerError> {
    let transfer = state.ledger.transfer(from, to, payload.amount_minor).await?;

    Ok(Json(TransferReceipt {
        amount_minor: transfer.amount_minor,
        sender: accounts::view(transfer.sender),
        receiver: accounts::view(transfer.receiver),
    }))
}
