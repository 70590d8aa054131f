use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BudgetStatus {
    Exceeded,
    Remaining { remaining: Decimal },
}

/// How the amount left under the ceiling is reported.
///
/// `Ceiling` reports the ceiling itself regardless of spending, which is how
/// the tracker has always displayed it. `Headroom` reports
/// `budget - total_expenses`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RemainingPolicy {
    #[default]
    Ceiling,
    Headroom,
}

/// Returns `None` while no ceiling is set (`budget <= 0`).
pub fn status(budget: Decimal, total_expenses: Decimal, policy: RemainingPolicy) -> Option<BudgetStatus> {
    if budget <= dec!(0) {
        return None;
    }

    if total_expenses > budget {
        return Some(BudgetStatus::Exceeded);
    }

    let remaining = match policy {
        RemainingPolicy::Ceiling => budget,
        RemainingPolicy::Headroom => budget - total_expenses,
    };

    Some(BudgetStatus::Remaining { remaining })
}
