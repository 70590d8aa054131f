use anyhow::Result;
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use tempfile::TempDir;

use finledger::accounting::{BudgetStatus, Ledger, RemainingPolicy};
use finledger::forms::{self, Submission, TransactionForm};
use finledger::storage::{FileStore, KeyValueStore, MemoryStore, Store, TRANSACTIONS_KEY};

fn add(ledger: &mut Ledger<Store>, description: &str, amount: &str, kind: &str, category: &str) -> Result<Submission> {
    let form = TransactionForm {
        description,
        amount,
        kind,
        category,
    };

    Ok(forms::submit_transaction(ledger, &form)?)
}

#[test]
fn test_session_survives_reload() -> Result<()> {
    let dir = TempDir::new()?;

    let mut ledger = Ledger::initialize(Store::from(FileStore::open(dir.path())?), RemainingPolicy::Ceiling);
    assert_eq!(add(&mut ledger, "Salary", "1000", "income", "")?, Submission::Accepted);
    assert_eq!(add(&mut ledger, "Rent", "400", "expense", "housing")?, Submission::Accepted);
    assert_eq!(add(&mut ledger, "", "5", "expense", "")?, Submission::Ignored);
    assert_eq!(forms::submit_budget(&mut ledger, "300")?, Submission::Accepted);
    drop(ledger);

    let reloaded = Ledger::initialize(Store::from(FileStore::open(dir.path())?), RemainingPolicy::Ceiling);

    assert_eq!(reloaded.transactions().len(), 2);
    assert_eq!(reloaded.total_income(), dec!(1000));
    assert_eq!(reloaded.total_expenses(), dec!(400));
    assert_eq!(reloaded.budget(), dec!(300));
    assert_eq!(reloaded.budget_status(), Some(BudgetStatus::Exceeded));

    Ok(())
}

#[test]
fn test_stores_share_layout() -> Result<()> {
    let dir = TempDir::new()?;
    let mut file_ledger = Ledger::initialize(Store::from(FileStore::open(dir.path())?), RemainingPolicy::Ceiling);
    let mut memory_ledger = Ledger::initialize(Store::from(MemoryStore::new()), RemainingPolicy::Ceiling);

    for ledger in [&mut file_ledger, &mut memory_ledger] {
        add(ledger, "Salary", "1000", "income", "general")?;
        add(ledger, "Coffee, large", "4.5", "expense", "food")?;
    }

    assert_eq!(file_ledger.store().get(TRANSACTIONS_KEY), memory_ledger.store().get(TRANSACTIONS_KEY));

    Ok(())
}
