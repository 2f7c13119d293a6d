//! Tally Core Library
//!
//! Shared functionality for the Tally personal finance tracker:
//! - Database access and migrations (transaction and budget stores)
//! - Input validation for transactions and budgets
//! - Analytics aggregation (monthly trend, category breakdown, totals)
//! - Budget progress calculation (spent/remaining/status per budget)

pub mod analytics;
pub mod db;
pub mod error;
pub mod models;
pub mod progress;
pub mod validate;

pub use analytics::summarize;
pub use db::Database;
pub use error::{Error, Result};
pub use models::{
    AnalyticsSummary, Budget, BudgetProgress, BudgetProgressRow, BudgetReport, BudgetStatus,
    Category, CategoryExpense, Month, MonthlyExpense, NewBudget, NewTransaction, Transaction,
    TransactionKind,
};
pub use progress::{budget_report, progress_by_budget};
pub use validate::{parse_budget, parse_transaction, BudgetInput, TransactionInput};
