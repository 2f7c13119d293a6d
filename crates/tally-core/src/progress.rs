//! Budget progress calculation
//!
//! Pure functions over a budget set and a transaction snapshot. A budget's
//! spent amount counts expense transactions in its category whose date falls
//! in the *current* calendar month (`today`) and the budget's stored year.
//! The remaining amount is clamped at zero; the percentage is not capped.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{
    Budget, BudgetProgress, BudgetProgressRow, BudgetReport, BudgetStatus, Transaction,
    TransactionKind,
};

/// Compute the full progress report for the given budgets
///
/// The caller is expected to have scoped `budgets` to the month/year it
/// cares about; `transactions` is the complete snapshot.
pub fn budget_report(
    budgets: &[Budget],
    transactions: &[Transaction],
    today: NaiveDate,
) -> BudgetReport {
    let rows: Vec<BudgetProgressRow> = budgets
        .iter()
        .map(|b| progress_row(b, transactions, today))
        .collect();

    let total_budget: f64 = budgets.iter().map(|b| b.amount).sum();
    let total_spent: f64 = rows.iter().map(|r| r.spent).sum();
    let percentage = if total_budget > 0.0 {
        total_spent / total_budget * 100.0
    } else {
        0.0
    };

    BudgetReport {
        budgets: rows,
        total_budget,
        total_spent,
        percentage,
        status: BudgetStatus::from_percentage(percentage),
    }
}

/// The id -> {spent, percentage} mapping used by the budget list UI
pub fn progress_by_budget(
    budgets: &[Budget],
    transactions: &[Transaction],
    today: NaiveDate,
) -> BTreeMap<i64, BudgetProgress> {
    budgets
        .iter()
        .map(|b| {
            let row = progress_row(b, transactions, today);
            (
                b.id,
                BudgetProgress {
                    spent: row.spent,
                    percentage: row.percentage,
                },
            )
        })
        .collect()
}

fn progress_row(
    budget: &Budget,
    transactions: &[Transaction],
    today: NaiveDate,
) -> BudgetProgressRow {
    let spent: f64 = transactions
        .iter()
        .filter(|t| {
            t.category == budget.category
                && t.kind == TransactionKind::Expense
                && t.date.month() == today.month()
                && t.date.year() == budget.year
        })
        .map(|t| t.amount)
        .sum();

    let remaining = (budget.amount - spent).max(0.0);
    let percentage = if budget.amount > 0.0 {
        spent / budget.amount * 100.0
    } else {
        0.0
    };

    BudgetProgressRow {
        budget_id: budget.id,
        category: budget.category,
        budget: budget.amount,
        spent,
        remaining,
        percentage,
        status: BudgetStatus::from_percentage(percentage),
    }
}
