//! Analytics aggregation over the full transaction set
//!
//! Pure functions: they take a snapshot of the transactions plus the current
//! date and compute the dashboard bundle (trailing 6-month expense series,
//! category breakdown, recent transactions, scalar totals). No I/O, no
//! internal state; degenerate inputs produce degenerate-but-defined outputs.

use std::cmp::Ordering;

use chrono::{Datelike, NaiveDate};

use crate::models::{
    AnalyticsSummary, CategoryExpense, Month, MonthlyExpense, Transaction, TransactionKind,
};

/// Number of calendar months in the trailing expense series
pub const TREND_MONTHS: u32 = 6;

/// Number of transactions in the "recent" list
pub const RECENT_LIMIT: usize = 5;

/// Compute the full analytics bundle
///
/// `today` anchors the trailing monthly window to wall-clock time; callers
/// outside of tests pass `Utc::now().date_naive()`.
pub fn summarize(transactions: &[Transaction], today: NaiveDate) -> AnalyticsSummary {
    AnalyticsSummary {
        monthly_expenses: monthly_expense_series(transactions, today),
        category_breakdown: category_breakdown(transactions),
        recent_transactions: recent_transactions(transactions),
        total_transactions: transactions.len() as i64,
        total_expenses: total_of(transactions, TransactionKind::Expense),
        total_income: total_of(transactions, TransactionKind::Income),
    }
}

/// Expense totals for the 6 calendar months ending at `today`'s month,
/// oldest first. Months with no expenses yield a zero bucket, so the series
/// always has exactly [`TREND_MONTHS`] entries.
pub fn monthly_expense_series(
    transactions: &[Transaction],
    today: NaiveDate,
) -> Vec<MonthlyExpense> {
    let mut series = Vec::with_capacity(TREND_MONTHS as usize);

    for back in (0..TREND_MONTHS).rev() {
        let (year, month) = months_back(today, back);
        let amount = transactions
            .iter()
            .filter(|t| {
                t.kind == TransactionKind::Expense
                    && t.date.year() == year
                    && t.date.month() == month
            })
            .map(|t| t.amount)
            .sum();

        series.push(MonthlyExpense {
            month: month_label(year, month),
            amount,
        });
    }

    series
}

/// Expense totals grouped by category, sorted descending by amount
///
/// Grouping preserves first-encounter order, and the sort is stable, so
/// equal-amount categories keep the order they first appeared in.
/// Percentages are rounded half-up to whole percents; when there are no
/// expenses at all every percentage is 0.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategoryExpense> {
    let mut breakdown: Vec<CategoryExpense> = Vec::new();

    for t in transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense)
    {
        match breakdown.iter_mut().find(|e| e.category == t.category) {
            Some(entry) => entry.amount += t.amount,
            None => breakdown.push(CategoryExpense {
                category: t.category,
                amount: t.amount,
                percentage: 0,
            }),
        }
    }

    let total: f64 = breakdown.iter().map(|e| e.amount).sum();
    if total > 0.0 {
        for entry in &mut breakdown {
            // f64::round is round-half-up for the non-negative values here
            entry.percentage = (entry.amount / total * 100.0).round() as i64;
        }
    }

    breakdown.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(Ordering::Equal));
    breakdown
}

/// The 5 most recent transactions by date (stable on ties)
pub fn recent_transactions(transactions: &[Transaction]) -> Vec<Transaction> {
    let mut recent = transactions.to_vec();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(RECENT_LIMIT);
    recent
}

fn total_of(transactions: &[Transaction], kind: TransactionKind) -> f64 {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

/// The (year, month) pair `back` calendar months before `today`'s month
fn months_back(today: NaiveDate, back: u32) -> (i32, u32) {
    let total = today.year() * 12 + today.month0() as i32 - back as i32;
    (total.div_euclid(12), total.rem_euclid(12) as u32 + 1)
}

fn month_label(year: i32, month: u32) -> String {
    match Month::from_number(month) {
        Some(m) => format!("{} {}", m.abbrev(), year),
        // months_back only yields 1..=12
        None => format!("{} {}", month, year),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::{TimeZone, Utc};

    fn tx(
        id: i64,
        amount: f64,
        date: &str,
        category: Category,
        kind: TransactionKind,
    ) -> Transaction {
        let stamp = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Transaction {
            id,
            amount,
            date: date.parse().unwrap(),
            description: format!("tx {}", id),
            category,
            kind,
            created_at: stamp,
            updated_at: stamp,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_months_back_wraps_year() {
        let march = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(months_back(march, 0), (2024, 3));
        assert_eq!(months_back(march, 2), (2024, 1));
        assert_eq!(months_back(march, 3), (2023, 12));
        assert_eq!(months_back(march, 14), (2023, 1));
    }

    #[test]
    fn test_empty_set_yields_six_zero_buckets() {
        let summary = summarize(&[], today());
        assert_eq!(summary.monthly_expenses.len(), 6);
        assert!(summary.monthly_expenses.iter().all(|m| m.amount == 0.0));
        assert!(summary.category_breakdown.is_empty());
        assert!(summary.recent_transactions.is_empty());
        assert_eq!(summary.total_transactions, 0);
        assert_eq!(summary.total_expenses, 0.0);
        assert_eq!(summary.total_income, 0.0);
    }

    #[test]
    fn test_series_labels_and_order() {
        let series = monthly_expense_series(&[], today());
        let labels: Vec<&str> = series.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Jan 2024", "Feb 2024", "Mar 2024", "Apr 2024", "May 2024", "Jun 2024"
            ]
        );
    }

    #[test]
    fn test_series_crosses_year_boundary() {
        let feb = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let series = monthly_expense_series(&[], feb);
        assert_eq!(series[0].month, "Sep 2023");
        assert_eq!(series[5].month, "Feb 2024");
    }

    #[test]
    fn test_series_buckets_by_calendar_month() {
        let transactions = vec![
            tx(1, 100.0, "2024-06-01", Category::Shopping, TransactionKind::Expense),
            tx(2, 25.0, "2024-06-30", Category::Travel, TransactionKind::Expense),
            tx(3, 40.0, "2024-05-10", Category::Shopping, TransactionKind::Expense),
            // Income never shows up in the series
            tx(4, 999.0, "2024-06-15", Category::Other, TransactionKind::Income),
            // Outside the window
            tx(5, 77.0, "2023-12-25", Category::Other, TransactionKind::Expense),
        ];
        let series = monthly_expense_series(&transactions, today());
        assert_eq!(series[5].amount, 125.0); // Jun
        assert_eq!(series[4].amount, 40.0); // May
        assert!(series[..4].iter().all(|m| m.amount == 0.0));
    }

    #[test]
    fn test_window_sum_bounded_by_total_expenses() {
        let transactions = vec![
            tx(1, 60.0, "2024-06-01", Category::Shopping, TransactionKind::Expense),
            tx(2, 40.0, "2023-01-01", Category::Shopping, TransactionKind::Expense),
        ];
        let summary = summarize(&transactions, today());
        let window: f64 = summary.monthly_expenses.iter().map(|m| m.amount).sum();
        assert!(window <= summary.total_expenses);
        assert_eq!(window, 60.0);
        assert_eq!(summary.total_expenses, 100.0);
    }

    #[test]
    fn test_window_sum_equals_total_when_all_inside() {
        let transactions = vec![
            tx(1, 60.0, "2024-06-01", Category::Shopping, TransactionKind::Expense),
            tx(2, 40.0, "2024-02-15", Category::Travel, TransactionKind::Expense),
        ];
        let summary = summarize(&transactions, today());
        let window: f64 = summary.monthly_expenses.iter().map(|m| m.amount).sum();
        assert_eq!(window, summary.total_expenses);
    }

    #[test]
    fn test_breakdown_groups_and_sorts_descending() {
        let transactions = vec![
            tx(1, 30.0, "2024-06-01", Category::Travel, TransactionKind::Expense),
            tx(2, 100.0, "2024-06-02", Category::FoodAndDining, TransactionKind::Expense),
            tx(3, 50.0, "2024-06-03", Category::FoodAndDining, TransactionKind::Expense),
            tx(4, 20.0, "2024-06-04", Category::Travel, TransactionKind::Expense),
        ];
        let breakdown = category_breakdown(&transactions);
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].category, Category::FoodAndDining);
        assert_eq!(breakdown[0].amount, 150.0);
        assert_eq!(breakdown[0].percentage, 75);
        assert_eq!(breakdown[1].category, Category::Travel);
        assert_eq!(breakdown[1].amount, 50.0);
        assert_eq!(breakdown[1].percentage, 25);
    }

    #[test]
    fn test_breakdown_grouping_independent_of_input_order() {
        let forward = vec![
            tx(1, 30.0, "2024-06-01", Category::Travel, TransactionKind::Expense),
            tx(2, 100.0, "2024-06-02", Category::FoodAndDining, TransactionKind::Expense),
            tx(3, 20.0, "2024-06-03", Category::Travel, TransactionKind::Expense),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        let a = category_breakdown(&forward);
        let b = category_breakdown(&reversed);
        assert_eq!(a, b);
    }

    #[test]
    fn test_breakdown_ties_keep_encounter_order() {
        let transactions = vec![
            tx(1, 50.0, "2024-06-01", Category::Travel, TransactionKind::Expense),
            tx(2, 50.0, "2024-06-02", Category::Shopping, TransactionKind::Expense),
        ];
        let breakdown = category_breakdown(&transactions);
        assert_eq!(breakdown[0].category, Category::Travel);
        assert_eq!(breakdown[1].category, Category::Shopping);
    }

    #[test]
    fn test_breakdown_percentages_round_half_up() {
        // 1/3 and 2/3 of 300: 33.33 -> 33, 66.67 -> 67
        let transactions = vec![
            tx(1, 100.0, "2024-06-01", Category::Travel, TransactionKind::Expense),
            tx(2, 200.0, "2024-06-02", Category::Shopping, TransactionKind::Expense),
        ];
        let breakdown = category_breakdown(&transactions);
        assert_eq!(breakdown[0].percentage, 67);
        assert_eq!(breakdown[1].percentage, 33);

        // Exact half rounds up: 12.5% -> 13
        let transactions = vec![
            tx(1, 12.5, "2024-06-01", Category::Travel, TransactionKind::Expense),
            tx(2, 87.5, "2024-06-02", Category::Shopping, TransactionKind::Expense),
        ];
        let breakdown = category_breakdown(&transactions);
        assert_eq!(breakdown[1].percentage, 13);
        assert_eq!(breakdown[0].percentage, 88);
    }

    #[test]
    fn test_breakdown_percentage_drift_bounded() {
        let transactions = vec![
            tx(1, 33.0, "2024-06-01", Category::Travel, TransactionKind::Expense),
            tx(2, 33.0, "2024-06-02", Category::Shopping, TransactionKind::Expense),
            tx(3, 33.0, "2024-06-03", Category::FoodAndDining, TransactionKind::Expense),
        ];
        let breakdown = category_breakdown(&transactions);
        let sum: i64 = breakdown.iter().map(|e| e.percentage).sum();
        assert!((sum - 100).unsigned_abs() as usize <= breakdown.len());
    }

    #[test]
    fn test_recent_takes_newest_five() {
        let transactions = vec![
            tx(1, 1.0, "2024-06-01", Category::Other, TransactionKind::Expense),
            tx(2, 1.0, "2024-06-03", Category::Other, TransactionKind::Expense),
            tx(3, 1.0, "2024-06-02", Category::Other, TransactionKind::Income),
            tx(4, 1.0, "2024-05-20", Category::Other, TransactionKind::Expense),
            tx(5, 1.0, "2024-06-05", Category::Other, TransactionKind::Expense),
            tx(6, 1.0, "2024-06-04", Category::Other, TransactionKind::Expense),
        ];
        let recent = recent_transactions(&transactions);
        assert_eq!(recent.len(), 5);
        let ids: Vec<i64> = recent.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![5, 6, 2, 3, 1]);
    }

    #[test]
    fn test_totals_split_by_kind() {
        let transactions = vec![
            tx(1, 100.0, "2024-06-01", Category::FoodAndDining, TransactionKind::Expense),
            tx(2, 50.0, "2024-06-02", Category::FoodAndDining, TransactionKind::Expense),
            tx(3, 200.0, "2024-06-03", Category::Other, TransactionKind::Income),
        ];
        let summary = summarize(&transactions, today());
        assert_eq!(summary.total_transactions, 3);
        assert_eq!(summary.total_expenses, 150.0);
        assert_eq!(summary.total_income, 200.0);
    }
}
