use thiserror::Error;

use crate::storage::StoreError;

pub mod budget;
pub mod ledger;
pub mod totals;
pub mod transactions;


pub use budget::{BudgetStatus, RemainingPolicy};
pub use ledger::Ledger;
pub use totals::Totals;
pub use transactions::{Transaction, TransactionKind, DEFAULT_CATEGORY};

#[derive(Debug, PartialEq, Error)]
pub enum TransactionError {
    #[error("description is empty")]
    EmptyDescription,
    #[error("invalid amount")]
    InvalidAmount,
    #[error("unknown transaction type `{0}`")]
    InvalidKind(String),
    #[error("invalid budget")]
    InvalidBudget,
}

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("{0}")]
    Rejected(#[from] TransactionError),
    #[error("{0}")]
    Store(#[from] StoreError),
}
