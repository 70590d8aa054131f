//! Input adapter between raw user input and the ledger.
//!
//! Everything typed by the user arrives here as text. Input that fails the
//! boundary checks is logged and dropped; the ledger is left untouched and
//! the caller is told the submission was ignored.

use log::debug;

use crate::accounting::transactions::{parse_amount, parse_budget};
use crate::accounting::{Ledger, LedgerError, Transaction, TransactionError, TransactionKind};
use crate::storage::{KeyValueStore, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Accepted,
    Ignored,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TransactionForm<'a> {
    pub description: &'a str,
    pub amount: &'a str,
    pub kind: &'a str,
    pub category: &'a str,
}

impl TransactionForm<'_> {
    pub fn parse(&self) -> Result<Transaction, TransactionError> {
        if self.description.trim().is_empty() {
            return Err(TransactionError::EmptyDescription);
        }

        let amount = parse_amount(self.amount)?;
        let kind: TransactionKind = self.kind.parse()?;

        Transaction::new(self.description, amount, kind, self.category)
    }
}

pub fn submit_transaction<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    form: &TransactionForm,
) -> Result<Submission, StoreError> {
    let result = form.parse().map_err(LedgerError::from).and_then(|transaction| ledger.add_transaction(transaction));

    match result {
        Ok(()) => Ok(Submission::Accepted),
        Err(LedgerError::Rejected(err)) => {
            debug!("invalid transaction, err={}", err);
            Ok(Submission::Ignored)
        },
        Err(LedgerError::Store(err)) => Err(err),
    }
}

pub fn submit_budget<S: KeyValueStore>(ledger: &mut Ledger<S>, input: &str) -> Result<Submission, StoreError> {
    match parse_budget(input) {
        Ok(budget) => {
            ledger.set_budget(budget)?;
            Ok(Submission::Accepted)
        },
        Err(err) => {
            debug!("invalid budget, input={:?}, err={}", input, err);
            Ok(Submission::Ignored)
        },
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::accounting::{RemainingPolicy, DEFAULT_CATEGORY};
    use crate::storage::{MemoryStore, BUDGET_KEY, TRANSACTIONS_KEY};

    fn form<'a>(description: &'a str, amount: &'a str, kind: &'a str) -> TransactionForm<'a> {
        TransactionForm {
            description,
            amount,
            kind,
            category: "",
        }
    }

    #[test]
    fn test_accepts_valid_form() -> Result<()> {
        let mut ledger = Ledger::initialize(MemoryStore::new(), RemainingPolicy::Ceiling);

        let outcome = submit_transaction(&mut ledger, &form(" Salary ", "1000", "income"))?;

        assert_eq!(outcome, Submission::Accepted);
        assert_eq!(ledger.transactions().len(), 1);
        assert_eq!(ledger.transactions()[0].description(), "Salary");
        assert_eq!(ledger.transactions()[0].category(), DEFAULT_CATEGORY);
        assert_eq!(ledger.total_income(), dec!(1000));

        Ok(())
    }

    #[test]
    fn test_invalid_forms_are_ignored() -> Result<()> {
        let mut ledger = Ledger::initialize(MemoryStore::new(), RemainingPolicy::Ceiling);
        submit_transaction(&mut ledger, &form("Salary", "1000", "income"))?;
        let saved = ledger.store().get(TRANSACTIONS_KEY);

        let invalid = [
            form("", "10", "expense"),
            form("   ", "10", "expense"),
            form("Lunch", "", "expense"),
            form("Lunch", "ten", "expense"),
            form("Lunch", "0", "expense"),
            form("Lunch", "-3", "expense"),
            form("Lunch", "10", "gift"),
        ];
        for form in invalid.iter() {
            assert_eq!(submit_transaction(&mut ledger, form)?, Submission::Ignored, "form {form:?}");
        }

        assert_eq!(ledger.transactions().len(), 1);
        assert_eq!(ledger.total_income(), dec!(1000));
        assert_eq!(ledger.total_expenses(), dec!(0));
        assert_eq!(ledger.store().get(TRANSACTIONS_KEY), saved);

        Ok(())
    }

    #[test]
    fn test_overflowing_amount_is_ignored() -> Result<()> {
        let mut ledger = Ledger::initialize(MemoryStore::new(), RemainingPolicy::Ceiling);
        let jackpot = form("Jackpot", "70000000000000000000000000000", "income");

        assert_eq!(submit_transaction(&mut ledger, &jackpot)?, Submission::Accepted);
        let saved = ledger.store().get(TRANSACTIONS_KEY);

        assert_eq!(submit_transaction(&mut ledger, &jackpot)?, Submission::Ignored);
        assert_eq!(ledger.transactions().len(), 1);
        assert_eq!(ledger.total_income(), dec!(70000000000000000000000000000));
        assert_eq!(ledger.store().get(TRANSACTIONS_KEY), saved);

        Ok(())
    }

    #[test]
    fn test_budget_form() -> Result<()> {
        let mut ledger = Ledger::initialize(MemoryStore::new(), RemainingPolicy::Ceiling);

        assert_eq!(submit_budget(&mut ledger, " 300 ")?, Submission::Accepted);
        assert_eq!(ledger.budget(), dec!(300));

        for input in ["-1", "abc", ""] {
            assert_eq!(submit_budget(&mut ledger, input)?, Submission::Ignored);
        }
        assert_eq!(ledger.budget(), dec!(300));
        assert_eq!(ledger.store().get(BUDGET_KEY), Some("300".to_string()));

        assert_eq!(submit_budget(&mut ledger, "0")?, Submission::Accepted);
        assert_eq!(ledger.budget_status(), None);

        Ok(())
    }
}
