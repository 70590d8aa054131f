use std::slice::Iter;

use log::debug;
use rust_decimal::Decimal;

use super::budget::{self, BudgetStatus, RemainingPolicy};
use super::totals::Totals;
use super::transactions::Transaction;
use super::LedgerError;
use crate::data;
use crate::storage::{KeyValueStore, StoreError, BUDGET_KEY, TRANSACTIONS_KEY};

/// The transaction list, its running totals and the budget ceiling, backed by
/// a key-value store that is written after every change.
#[derive(Debug)]
pub struct Ledger<S: KeyValueStore> {
    transactions: Vec<Transaction>,
    totals: Totals,
    budget: Decimal,
    policy: RemainingPolicy,
    store: S,
}

impl<S: KeyValueStore> Ledger<S> {
    /// Loads the ledger from `store`. Missing or malformed entries start out
    /// empty; totals are recomputed from the loaded transactions.
    pub fn initialize(store: S, policy: RemainingPolicy) -> Ledger<S> {
        let mut transactions = data::decode_transactions(store.get(TRANSACTIONS_KEY).as_deref());
        let budget = data::decode_budget(store.get(BUDGET_KEY).as_deref());
        let totals = match Totals::from_transactions(&transactions) {
            Ok(totals) => totals,
            Err(err) => {
                debug!("ignoring transactions entry with unrepresentable totals, err={}", err);
                transactions.clear();
                Totals::new()
            },
        };

        debug!("ledger loaded, transactions={}, budget={}", transactions.len(), budget);

        Ledger {
            transactions,
            totals,
            budget,
            policy,
            store,
        }
    }

    /// Appends `transaction`, updates the matching total and saves the list.
    /// A transaction whose total would overflow is rejected before anything
    /// changes.
    pub fn add_transaction(&mut self, transaction: Transaction) -> Result<(), LedgerError> {
        self.totals.record(&transaction)?;
        self.transactions.push(transaction);

        Ok(self.persist_transactions()?)
    }

    /// Replaces the budget ceiling and saves it.
    pub fn set_budget(&mut self, budget: Decimal) -> Result<(), StoreError> {
        self.budget = budget;

        self.store.set(BUDGET_KEY, &data::encode_budget(budget))
    }

    pub fn budget_status(&self) -> Option<BudgetStatus> {
        budget::status(self.budget, self.totals.expenses, self.policy)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transactions_iter(&self) -> Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn total_income(&self) -> Decimal {
        self.totals.income
    }

    pub fn total_expenses(&self) -> Decimal {
        self.totals.expenses
    }

    pub fn balance(&self) -> Decimal {
        self.totals.balance()
    }

    pub fn budget(&self) -> Decimal {
        self.budget
    }

    pub fn policy(&self) -> RemainingPolicy {
        self.policy
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn persist_transactions(&mut self) -> Result<(), StoreError> {
        let encoded = data::encode_transactions(&self.transactions).map_err(std::io::Error::from)?;
        self.store.set(TRANSACTIONS_KEY, &encoded)?;

        debug!("transactions saved, count={}", self.transactions.len());

        Ok(())
    }
}
