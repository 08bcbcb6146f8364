pub use accounts::{Account, TransferSplit};
pub use error::LedgerError;
pub use ops::{Ledger, LedgerBuilder, Transfer};

mod accounts;
mod error;
mod ops;

type ResultLedger<T> = Result<T, LedgerError>;
