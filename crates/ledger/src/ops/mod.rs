use sea_orm::{DatabaseConnection, DatabaseTransaction, EntityTrait};
use uuid::Uuid;

use crate::{Account, LedgerError, ResultLedger, accounts};

mod accounts_ops;
mod transfers;

pub use transfers::Transfer;

/// Run a block inside a DB transaction, committing on success and rolling back on error.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

pub(crate) use with_tx;

/// The ledger service.
///
/// Owns the database handle for the process lifetime; every operation runs
/// its read-validate-write cycle inside a single database transaction.
#[derive(Debug)]
pub struct Ledger {
    database: DatabaseConnection,
}

impl Ledger {
    /// Return a builder for `Ledger`. Help to build the struct.
    pub fn builder() -> LedgerBuilder {
        LedgerBuilder::default()
    }

    pub(crate) async fn require_account(
        &self,
        db_tx: &DatabaseTransaction,
        account_id: Uuid,
    ) -> ResultLedger<Account> {
        let model = accounts::Entity::find_by_id(account_id.to_string())
            .one(db_tx)
            .await?
            .ok_or_else(|| LedgerError::KeyNotFound(account_id.to_string()))?;
        Account::try_from(model)
    }
}

fn normalize_required_field(value: &str, label: &str) -> ResultLedger<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::MissingField(format!(
            "{label} must not be empty"
        )));
    }
    Ok(trimmed.to_string())
}

fn nonzero_amount(amount_minor: i64, label: &str) -> ResultLedger<i64> {
    if amount_minor == 0 {
        return Err(LedgerError::InvalidAmount(format!(
            "{label} must not be zero"
        )));
    }
    Ok(amount_minor)
}

/// The builder for `Ledger`
#[derive(Default)]
pub struct LedgerBuilder {
    database: DatabaseConnection,
}

impl LedgerBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> LedgerBuilder {
        self.database = db;
        self
    }

    /// Construct `Ledger`
    pub async fn build(self) -> ResultLedger<Ledger> {
        Ok(Ledger {
            database: self.database,
        })
    }
}
