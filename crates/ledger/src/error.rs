//! The module contains the errors the ledger can return.

use sea_orm::DbErr;
use thiserror::Error;

/// Ledger custom errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Missing field: {0}")]
    MissingField(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("\"{0}\" not found!")]
    KeyNotFound(String),
    #[error("Account is not active: {0}")]
    InactiveAccount(String),
    #[error("{0}")]
    PreconditionFailed(String),
    #[error("\"{0}\" already present!")]
    ExistingKey(String),
    #[error("Insufficient funds: {0}")]
    InsufficientFunds(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for LedgerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::MissingField(a), Self::MissingField(b)) => a == b,
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::InactiveAccount(a), Self::InactiveAccount(b)) => a == b,
            (Self::PreconditionFailed(a), Self::PreconditionFailed(b)) => a == b,
            (Self::ExistingKey(a), Self::ExistingKey(b)) => a == b,
            (Self::InsufficientFunds(a), Self::InsufficientFunds(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
