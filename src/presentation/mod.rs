//! Read-only views of the ledger: summary text, the transaction list, the
//! income/expense chart and the CSV/PDF exports.

use std::io::{self, Write};

use rust_decimal::{Decimal, RoundingStrategy};

use crate::accounting::{BudgetStatus, Ledger, Transaction};
use crate::storage::KeyValueStore;

pub mod chart;
pub mod pdf;

pub use chart::ChartData;

pub const EXCEEDED_MESSAGE: &str = "You have exceeded your budget!";

/// Snapshot of the figures shown above the transaction list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub balance: Decimal,
    pub budget_status: Option<BudgetStatus>,
}

impl<S: KeyValueStore> From<&Ledger<S>> for Summary {
    fn from(ledger: &Ledger<S>) -> Self {
        Summary {
            total_income: ledger.total_income(),
            total_expenses: ledger.total_expenses(),
            balance: ledger.balance(),
            budget_status: ledger.budget_status(),
        }
    }
}

impl Summary {
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Total income: {}", money(self.total_income)),
            format!("Total expenses: {}", money(self.total_expenses)),
            format!("Balance: {}", money(self.balance)),
        ];
        if let Some(status) = &self.budget_status {
            lines.push(budget_message(status));
        }

        lines
    }
}

pub fn budget_message(status: &BudgetStatus) -> String {
    match status {
        BudgetStatus::Exceeded => EXCEEDED_MESSAGE.to_string(),
        BudgetStatus::Remaining { remaining } => format!("Budget: ${} remaining", money(*remaining)),
    }
}

/// Two decimals, halves rounded away from zero.
pub fn money(value: Decimal) -> String {
    fixed(value, 2)
}

fn fixed(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", dp as usize, rounded)
}

/// `Salary - $1000 (income - general)`
pub fn transaction_line(transaction: &Transaction) -> String {
    format!(
        "{} - ${} ({} - {})",
        transaction.description(),
        transaction.amount().normalize(),
        transaction.kind(),
        transaction.category()
    )
}

pub trait Presenter {
    fn render_summary(&mut self, summary: &Summary) -> io::Result<()>;
    fn render_transactions(&mut self, transactions: &[Transaction]) -> io::Result<()>;
    fn render_chart(&mut self, chart: &ChartData) -> io::Result<()>;
}

/// Plain text presenter, one item per line.
pub struct TextPresenter<W: Write> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> TextPresenter<W> {
        TextPresenter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn render_summary(&mut self, summary: &Summary) -> io::Result<()> {
        for line in summary.lines() {
            writeln!(self.out, "{}", line)?;
        }

        Ok(())
    }

    fn render_transactions(&mut self, transactions: &[Transaction]) -> io::Result<()> {
        for transaction in transactions {
            writeln!(self.out, "{}", transaction_line(transaction))?;
        }

        Ok(())
    }

    fn render_chart(&mut self, chart: &ChartData) -> io::Result<()> {
        let (income_share, expense_share) = chart.shares();
        writeln!(
            self.out,
            "{}: {}% | {}: {}%",
            chart::INCOME_LABEL,
            fixed(income_share, 1),
            chart::EXPENSES_LABEL,
            fixed(expense_share, 1)
        )
    }
}
