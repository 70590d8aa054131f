use rust_decimal::Decimal;

use super::transactions::{Transaction, TransactionKind, PRECISION};
use super::TransactionError;

/// Running income and expense accumulators.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub income: Decimal,
    pub expenses: Decimal,
}

impl Totals {
    pub fn new() -> Totals {
        Totals {
            income: Decimal::ZERO,
            expenses: Decimal::ZERO,
        }
    }

    pub fn from_transactions<'a, I>(transactions: I) -> Result<Totals, TransactionError>
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut totals = Totals::new();
        for transaction in transactions {
            totals.record(transaction)?;
        }

        Ok(totals)
    }

    /// Adds `transaction` to the matching total. A sum that does not fit in a
    /// `Decimal` is rejected and leaves both totals unchanged.
    pub fn record(&mut self, transaction: &Transaction) -> Result<(), TransactionError> {
        let total = match transaction.kind() {
            TransactionKind::Income => &mut self.income,
            TransactionKind::Expense => &mut self.expenses,
        };

        *total = total
            .checked_add(transaction.amount())
            .ok_or(TransactionError::InvalidAmount)?
            .round_dp(PRECISION);

        Ok(())
    }

    pub fn balance(&self) -> Decimal {
        self.income - self.expenses
    }
}
