use std::fmt;
use std::str::FromStr;

use getset::{CopyGetters, Getters};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::TransactionError;

/// Category used when the category input is left blank.
pub const DEFAULT_CATEGORY: &str = "general";

/// Amounts are kept to this many decimal places.
pub const PRECISION: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = TransactionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            other => Err(TransactionError::InvalidKind(other.to_string())),
        }
    }
}

/// A single income or expense entry. Entries carry no id or timestamp; they
/// are told apart only by their position in the ledger.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct Transaction {
    #[getset(get = "pub")]
    description: String,
    #[getset(get_copy = "pub")]
    amount: Decimal,
    #[getset(get_copy = "pub")]
    kind: TransactionKind,
    #[getset(get = "pub")]
    category: String,
}

impl Transaction {
    /// Builds a transaction from user input, enforcing the boundary checks:
    /// a non-blank description and a strictly positive amount once rounded
    /// to [`PRECISION`]. A blank category falls back to [`DEFAULT_CATEGORY`].
    pub fn new(
        description: &str,
        amount: Decimal,
        kind: TransactionKind,
        category: &str,
    ) -> Result<Transaction, TransactionError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(TransactionError::EmptyDescription);
        }

        let amount = amount.round_dp(PRECISION);
        if amount <= dec!(0) {
            return Err(TransactionError::InvalidAmount);
        }

        let category = match category.trim() {
            "" => DEFAULT_CATEGORY,
            category => category,
        };

        Ok(Transaction::from_parts(description.to_string(), amount, kind, category.to_string()))
    }

    /// Rebuilds a transaction read back from storage. Stored entries are
    /// trusted and not validated again.
    pub(crate) fn from_parts(description: String, amount: Decimal, kind: TransactionKind, category: String) -> Transaction {
        Transaction {
            description,
            amount,
            kind,
            category,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

/// Parses an amount typed by the user: plain (`12.5`) or scientific (`1e3`)
/// notation, strictly positive.
pub fn parse_amount(input: &str) -> Result<Decimal, TransactionError> {
    let amount = parse_decimal(input).ok_or(TransactionError::InvalidAmount)?;
    if amount <= dec!(0) {
        return Err(TransactionError::InvalidAmount);
    }

    Ok(amount)
}

/// Parses a budget ceiling typed by the user. Zero is accepted and disables
/// budget tracking.
pub fn parse_budget(input: &str) -> Result<Decimal, TransactionError> {
    let budget = parse_decimal(input).ok_or(TransactionError::InvalidBudget)?;
    if budget < dec!(0) {
        return Err(TransactionError::InvalidBudget);
    }

    Ok(budget)
}

pub(crate) fn parse_decimal(input: &str) -> Option<Decimal> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    Decimal::from_str(input)
        .or_else(|_| Decimal::from_scientific(input))
        .ok()
}
