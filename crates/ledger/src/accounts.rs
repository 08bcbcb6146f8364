//! The module contains the `Account` struct and its implementation.

use chrono::{DateTime, Utc};

use sea_orm::entity::{ActiveValue, prelude::*};
use uuid::Uuid;

use crate::{LedgerError, ResultLedger};

/// A bank account.
///
/// An account holds a cash balance and a credit line, both in signed minor
/// units. The credit line extends spending capacity beyond cash: an outgoing
/// transfer first consumes positive cash, then credit. Credit can go negative
/// once consumed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    /// Stable identifier, generated once at creation.
    pub id: Uuid,
    pub full_name: String,
    pub family_name: String,
    /// External identifier (passport/national id), unique across accounts.
    pub id_number: String,
    pub cash_minor: i64,
    pub credit_minor: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// How an outgoing transfer amount is drawn from a sender: first from
/// positive cash, the remainder from credit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransferSplit {
    pub cash_minor: i64,
    pub credit_minor: i64,
}

impl Account {
    pub fn new(full_name: String, family_name: String, id_number: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            full_name,
            family_name,
            id_number,
            cash_minor: 0,
            credit_minor: 0,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// Total spending capacity: cash plus credit line.
    ///
    /// A negative credit line (already over-extended) reduces capacity.
    pub fn sendable_minor(&self) -> i64 {
        self.cash_minor + self.credit_minor
    }

    /// Splits an outgoing amount between cash and credit.
    ///
    /// The split consumes positive available cash before touching credit;
    /// negative cash contributes nothing. Amounts up to `sendable_minor()`
    /// are accepted, boundary inclusive.
    pub fn split_outgoing(&self, amount_minor: i64) -> ResultLedger<TransferSplit> {
        if amount_minor > self.sendable_minor() {
            return Err(LedgerError::InsufficientFunds(format!(
                "account {} cannot send {amount_minor}",
                self.id
            )));
        }

        let cash_minor = amount_minor.min(self.cash_minor.max(0));
        Ok(TransferSplit {
            cash_minor,
            credit_minor: amount_minor - cash_minor,
        })
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub full_name: String,
    pub family_name: String,
    #[sea_orm(unique)]
    pub id_number: String,
    pub cash_minor: i64,
    pub credit_minor: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Account> for ActiveModel {
    fn from(value: &Account) -> Self {
        Self {
            id: ActiveValue::Set(value.id.to_string()),
            full_name: ActiveValue::Set(value.full_name.clone()),
            family_name: ActiveValue::Set(value.family_name.clone()),
            id_number: ActiveValue::Set(value.id_number.clone()),
            cash_minor: ActiveValue::Set(value.cash_minor),
            credit_minor: ActiveValue::Set(value.credit_minor),
            is_active: ActiveValue::Set(value.is_active),
            created_at: ActiveValue::Set(value.created_at),
        }
    }
}

impl TryFrom<Model> for Account {
    type Error = LedgerError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&model.id)
            .map_err(|_| LedgerError::KeyNotFound("invalid account id".to_string()))?;
        Ok(Self {
            id,
            full_name: model.full_name,
            family_name: model.family_name,
            id_number: model.id_number,
            cash_minor: model.cash_minor,
            credit_minor: model.credit_minor,
            is_active: model.is_active,
            created_at: model.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(cash_minor: i64, credit_minor: i64) -> Account {
        let mut account = Account::new(
            "Ada".to_string(),
            "Lovelace".to_string(),
            "X1234567".to_string(),
        );
        account.cash_minor = cash_minor;
        account.credit_minor = credit_minor;
        account
    }

    #[test]
    fn split_uses_cash_first() {
        let split = account(30, 20).split_outgoing(45).unwrap();
        assert_eq!(
            split,
            TransferSplit {
                cash_minor: 30,
                credit_minor: 15
            }
        );
    }

    #[test]
    fn split_within_cash_leaves_credit_untouched() {
        let split = account(100, 50).split_outgoing(40).unwrap();
        assert_eq!(
            split,
            TransferSplit {
                cash_minor: 40,
                credit_minor: 0
            }
        );
    }

    #[test]
    fn split_with_negative_cash_consumes_only_credit() {
        let split = account(-10, 100).split_outgoing(50).unwrap();
        assert_eq!(
            split,
            TransferSplit {
                cash_minor: 0,
                credit_minor: 50
            }
        );
    }

    #[test]
    fn split_boundary_is_inclusive() {
        let split = account(30, 20).split_outgoing(50).unwrap();
        assert_eq!(split.cash_minor + split.credit_minor, 50);
    }

    #[test]
    fn split_over_capacity_fails() {
        let err = account(30, 20).split_outgoing(51).unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientFunds(_)));
    }

    #[test]
    fn negative_credit_reduces_capacity() {
        let acc = account(100, -40);
        assert_eq!(acc.sendable_minor(), 60);
        assert!(acc.split_outgoing(61).is_err());
        assert!(acc.split_outgoing(60).is_ok());
    }
}
