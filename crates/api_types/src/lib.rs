use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod account {
    use super::*;

    /// Request body for opening an account.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct AccountNew {
        pub full_name: String,
        pub family_name: String,
        /// External identifier (passport/national id), unique per account.
        pub id_number: String,
    }

    /// An account as returned by the API.
    ///
    /// Monetary fields are signed minor units.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct AccountView {
        pub id: Uuid,
        pub full_name: String,
        pub family_name: String,
        pub id_number: String,
        pub cash_minor: i64,
        pub credit_minor: i64,
        pub is_active: bool,
        /// RFC3339 timestamp (UTC).
        pub created_at: DateTime<Utc>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct AccountsResponse {
        pub accounts: Vec<AccountView>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct DepositNew {
        /// Non-zero; a negative amount withdraws.
        pub amount_minor: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CreditAdjust {
        /// Non-zero delta applied to the credit line.
        pub delta_minor: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ActiveSet {
        pub is_active: bool,
    }

    /// Query parameters for the cash filter endpoint.
    ///
    /// `(is_greater_than, and_equal)` selects the comparison operator:
    /// `(true, true)` => `>=`, `(true, false)` => `>`,
    /// `(false, true)` => `<=`, `(false, false)` => `<`.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct CashFilter {
        #[serde(default)]
        pub is_greater_than: bool,
        #[serde(default)]
        pub and_equal: bool,
    }
}

pub mod transfer {
    use super::*;
    use crate::account::AccountView;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransferNew {
        /// Must be > 0.
        pub amount_minor: i64,
    }

    /// Response for a successful transfer: the amount moved and both
    /// post-transfer account snapshots.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransferReceipt {
        pub amount_minor: i64,
        pub sender: AccountView,
        pub receiver: AccountView,
    }
}
