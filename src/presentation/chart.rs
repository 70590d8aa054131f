use charming::{
    component::{Legend, Title},
    element::{Color, Tooltip, Trigger},
    series::Pie,
    Chart,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::accounting::Transaction;

pub const CHART_TITLE: &str = "Total Income vs Expenses";
pub const INCOME_LABEL: &str = "Income";
pub const EXPENSES_LABEL: &str = "Expenses";
pub const INCOME_COLOR: &str = "#4CAF50";
pub const EXPENSES_COLOR: &str = "#F44336";

/// Income and expense sums feeding the pie chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartData {
    pub income: Decimal,
    pub expenses: Decimal,
}

impl ChartData {
    /// Sums straight from the transactions rather than the ledger totals.
    /// Sums past `Decimal::MAX` stop at `Decimal::MAX`.
    pub fn from_transactions(transactions: &[Transaction]) -> ChartData {
        let mut data = ChartData {
            income: Decimal::ZERO,
            expenses: Decimal::ZERO,
        };
        for transaction in transactions {
            if transaction.is_income() {
                data.income = data.income.saturating_add(transaction.amount());
            } else {
                data.expenses = data.expenses.saturating_add(transaction.amount());
            }
        }

        data
    }

    /// Percentage split `(income, expenses)`; `(0, 0)` when both are zero.
    pub fn shares(&self) -> (Decimal, Decimal) {
        let (income, expenses) = match self.income.checked_add(self.expenses) {
            Some(_) => (self.income, self.expenses),
            None => (self.income / dec!(2), self.expenses / dec!(2)),
        };
        let total = income + expenses;
        if total.is_zero() {
            return (Decimal::ZERO, Decimal::ZERO);
        }

        (income / total * dec!(100), expenses / total * dec!(100))
    }
}

/// ECharts pie chart options. `to_string()` yields the JSON configuration.
pub fn pie_chart(data: &ChartData) -> Chart {
    Chart::new()
        .title(Title::new().text(CHART_TITLE))
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .legend(Legend::new().top("bottom"))
        .color::<Color>(vec![INCOME_COLOR.into(), EXPENSES_COLOR.into()])
        .series(Pie::new().name(CHART_TITLE).radius("60%").data(vec![
            (data.income.to_f64().unwrap_or_default(), INCOME_LABEL),
            (data.expenses.to_f64().unwrap_or_default(), EXPENSES_LABEL),
        ]))
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::accounting::TransactionKind;

    #[test]
    fn test_shares() -> Result<()> {
        let data = ChartData::from_transactions(&[
            Transaction::new("Salary", dec!(750), TransactionKind::Income, "")?,
            Transaction::new("Rent", dec!(250), TransactionKind::Expense, "")?,
        ]);

        assert_eq!(data.shares(), (dec!(75), dec!(25)));

        Ok(())
    }

    #[test]
    fn test_shares_near_decimal_max() -> Result<()> {
        let huge = dec!(70000000000000000000000000000);
        let data = ChartData::from_transactions(&[
            Transaction::new("Jackpot", huge, TransactionKind::Income, "")?,
            Transaction::new("Jackpot", huge, TransactionKind::Income, "")?,
            Transaction::new("Yacht", huge, TransactionKind::Expense, "")?,
        ]);

        assert_eq!(data.income, Decimal::MAX);
        let (income_share, expense_share) = data.shares();
        assert!(income_share > expense_share);
        assert_eq!((income_share + expense_share).round_dp(6), dec!(100));

        Ok(())
    }

    #[test]
    fn test_empty_shares() {
        assert_eq!(ChartData::from_transactions(&[]).shares(), (dec!(0), dec!(0)));
    }

    #[test]
    fn test_pie_chart_options() {
        let options = pie_chart(&ChartData {
            income: dec!(1000),
            expenses: dec!(400),
        })
        .to_string();

        assert!(options.contains(CHART_TITLE));
        assert!(options.contains(INCOME_LABEL));
        assert!(options.contains(EXPENSES_COLOR));
        assert!(options.contains("\"pie\""));
    }
}
