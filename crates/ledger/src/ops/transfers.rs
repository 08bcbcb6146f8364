use uuid::Uuid;

use sea_orm::{ActiveValue, TransactionTrait, prelude::*};

use crate::{Account, LedgerError, ResultLedger, accounts};

use super::{Ledger, with_tx};

/// Result of a successful transfer: the amount moved plus post-transfer
/// snapshots of both parties.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub amount_minor: i64,
    pub sender: Account,
    pub receiver: Account,
}

impl Ledger {
    /// Move money between two accounts.
    ///
    /// The sender can spend up to `cash + credit`, boundary inclusive. The
    /// amount is drawn from positive cash first, the remainder from the
    /// credit line; the receiver is always credited in cash. Both balance
    /// updates are applied in one database transaction, so a failed write
    /// leaves neither account touched.
    pub async fn transfer(
        &self,
        from_id: Uuid,
        to_id: Uuid,
        amount_minor: i64,
    ) -> ResultLedger<Transfer> {
        if amount_minor <= 0 {
            return Err(LedgerError::InvalidAmount(
                "transfer amount must be > 0".to_string(),
            ));
        }
        if from_id == to_id {
            return Err(LedgerError::InvalidAmount(
                "sender and receiver must differ".to_string(),
            ));
        }

        with_tx!(self, |db_tx| {
            let mut sender = self.require_account(&db_tx, from_id).await?;
            let mut receiver = self.require_account(&db_tx, to_id).await?;

            if !sender.is_active || !receiver.is_active {
                return Err(LedgerError::PreconditionFailed(
                    "transfer requires both parties to be active".to_string(),
                ));
            }

            let split = sender.split_outgoing(amount_minor)?;
            sender.cash_minor -= split.cash_minor;
            sender.credit_minor -= split.credit_minor;
            receiver.cash_minor += amount_minor;

            let sender_model = accounts::ActiveModel {
                id: ActiveValue::Set(from_id.to_string()),
                cash_minor: ActiveValue::Set(sender.cash_minor),
                credit_minor: ActiveValue::Set(sender.credit_minor),
                ..Default::default()
            };
            sender_model.update(&db_tx).await?;

            let receiver_model = accounts::ActiveModel {
                id: ActiveValue::Set(to_id.to_string()),
                cash_minor: ActiveValue::Set(receiver.cash_minor),
                ..Default::default()
            };
            receiver_model.update(&db_tx).await?;

            Ok(Transfer {
                amount_minor,
                sender,
                receiver,
            })
        })
    }
}
