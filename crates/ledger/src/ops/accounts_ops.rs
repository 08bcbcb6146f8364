use uuid::Uuid;

use sea_orm::{ActiveValue, QueryFilter, QueryOrder, TransactionTrait, prelude::*};

use crate::{Account, LedgerError, ResultLedger, accounts};

use super::{Ledger, nonzero_amount, normalize_required_field, with_tx};

impl Ledger {
    /// Open a new account.
    ///
    /// New accounts start active with zero cash and zero credit. `id_number`
    /// must be unique across all accounts.
    pub async fn create_account(
        &self,
        full_name: &str,
        family_name: &str,
        id_number: &str,
    ) -> ResultLedger<Account> {
        let full_name = normalize_required_field(full_name, "full_name")?;
        let family_name = normalize_required_field(family_name, "family_name")?;
        let id_number = normalize_required_field(id_number, "id_number")?;

        with_tx!(self, |db_tx| {
            let exists = accounts::Entity::find()
                .filter(accounts::Column::IdNumber.eq(id_number.clone()))
                .one(&db_tx)
                .await?
                .is_some();
            if exists {
                return Err(LedgerError::ExistingKey(id_number));
            }

            let account = Account::new(full_name, family_name, id_number);
            let model: accounts::ActiveModel = (&account).into();
            model.insert(&db_tx).await?;
            Ok(account)
        })
    }

    /// Return an account snapshot from DB.
    pub async fn account(&self, account_id: Uuid) -> ResultLedger<Account> {
        with_tx!(self, |db_tx| {
            self.require_account(&db_tx, account_id).await
        })
    }

    /// List all accounts, oldest first.
    pub async fn accounts(&self) -> ResultLedger<Vec<Account>> {
        let models = accounts::Entity::find()
            .order_by_asc(accounts::Column::CreatedAt)
            .all(&self.database)
            .await?;

        models.into_iter().map(Account::try_from).collect()
    }

    /// Remove an account.
    ///
    /// Only inactive accounts can be deleted. This is a safety gate against
    /// accidental removal of live accounts: deactivate first, then delete.
    pub async fn delete_account(&self, account_id: Uuid) -> ResultLedger<()> {
        with_tx!(self, |db_tx| {
            let account = self.require_account(&db_tx, account_id).await?;
            if account.is_active {
                return Err(LedgerError::PreconditionFailed(
                    "cannot delete an active account".to_string(),
                ));
            }

            accounts::Entity::delete_by_id(account_id.to_string())
                .exec(&db_tx)
                .await?;
            Ok(())
        })
    }

    /// Deposit cash into an active account.
    ///
    /// The amount must be non-zero; its sign is unrestricted, so a negative
    /// deposit acts as a withdrawal.
    pub async fn deposit_cash(&self, account_id: Uuid, amount_minor: i64) -> ResultLedger<Account> {
        let amount_minor = nonzero_amount(amount_minor, "deposit amount")?;

        with_tx!(self, |db_tx| {
            let mut account = self.require_active_account(&db_tx, account_id).await?;
            account.cash_minor += amount_minor;

            let active = accounts::ActiveModel {
                id: ActiveValue::Set(account_id.to_string()),
                cash_minor: ActiveValue::Set(account.cash_minor),
                ..Default::default()
            };
            active.update(&db_tx).await?;
            Ok(account)
        })
    }

    /// Adjust the credit line of an active account by a non-zero delta.
    pub async fn update_credit(&self, account_id: Uuid, delta_minor: i64) -> ResultLedger<Account> {
        let delta_minor = nonzero_amount(delta_minor, "credit delta")?;

        with_tx!(self, |db_tx| {
            let mut account = self.require_active_account(&db_tx, account_id).await?;
            account.credit_minor += delta_minor;

            let active = accounts::ActiveModel {
                id: ActiveValue::Set(account_id.to_string()),
                credit_minor: ActiveValue::Set(account.credit_minor),
                ..Default::default()
            };
            active.update(&db_tx).await?;
            Ok(account)
        })
    }

    /// Set the active flag of an account.
    ///
    /// Idempotent: setting the current value succeeds without a write and
    /// returns the unchanged account. This is the only mutation allowed on
    /// an inactive account.
    pub async fn set_active(&self, account_id: Uuid, is_active: bool) -> ResultLedger<Account> {
        with_tx!(self, |db_tx| {
            let mut account = self.require_account(&db_tx, account_id).await?;
            if account.is_active == is_active {
                return Ok(account);
            }
            account.is_active = is_active;

            let active = accounts::ActiveModel {
                id: ActiveValue::Set(account_id.to_string()),
                is_active: ActiveValue::Set(is_active),
                ..Default::default()
            };
            active.update(&db_tx).await?;
            Ok(account)
        })
    }

    /// List accounts whose cash balance compares against a threshold.
    ///
    /// Operator selection: `(is_greater_than, and_equal)` maps to
    /// `(true, true)` => `>=`, `(true, false)` => `>`,
    /// `(false, true)` => `<=`, `(false, false)` => `<`.
    pub async fn accounts_by_cash(
        &self,
        threshold_minor: i64,
        is_greater_than: bool,
        and_equal: bool,
    ) -> ResultLedger<Vec<Account>> {
        let condition = match (is_greater_than, and_equal) {
            (true, true) => accounts::Column::CashMinor.gte(threshold_minor),
            (true, false) => accounts::Column::CashMinor.gt(threshold_minor),
            (false, true) => accounts::Column::CashMinor.lte(threshold_minor),
            (false, false) => accounts::Column::CashMinor.lt(threshold_minor),
        };

        let models = accounts::Entity::find()
            .filter(condition)
            .order_by_asc(accounts::Column::CreatedAt)
            .all(&self.database)
            .await?;

        models.into_iter().map(Account::try_from).collect()
    }

    pub(crate) async fn require_active_account(
        &self,
        db_tx: &sea_orm::DatabaseTransaction,
        account_id: Uuid,
    ) -> ResultLedger<Account> {
        let account = self.require_account(db_tx, account_id).await?;
        if !account.is_active {
            return Err(LedgerError::InactiveAccount(account_id.to_string()));
        }
        Ok(account)
    }
}
