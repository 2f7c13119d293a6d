//! Input validation for transactions and budgets
//!
//! Write-path boundary: raw client input is parsed into the typed
//! `NewTransaction`/`NewBudget` models here, collecting every problem into a
//! single `Error::Validation` message list. This is also the one place where
//! a missing transaction category becomes `Category::Other`.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::{Category, Month, NewBudget, NewTransaction, TransactionKind};

/// Raw transaction input as received from a client
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionInput {
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// Raw budget input as received from a client
#[derive(Debug, Clone, Deserialize)]
pub struct BudgetInput {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub year: i32,
}

/// Parse and validate raw transaction input
///
/// Collects all failures rather than stopping at the first one, so the
/// caller can report the complete list.
pub fn parse_transaction(input: &TransactionInput) -> Result<NewTransaction> {
    let mut errors = Vec::new();

    if input.amount <= 0.0 || !input.amount.is_finite() {
        errors.push("Amount must be greater than 0".to_string());
    }

    let date = if input.date.trim().is_empty() {
        errors.push("Date is required".to_string());
        None
    } else {
        match NaiveDate::parse_from_str(input.date.trim(), "%Y-%m-%d") {
            Ok(d) => Some(d),
            Err(_) => {
                errors.push("Invalid date format".to_string());
                None
            }
        }
    };

    if input.description.trim().is_empty() {
        errors.push("Description is required".to_string());
    }

    let kind = match input.kind.parse::<TransactionKind>() {
        Ok(k) => Some(k),
        Err(_) => {
            errors.push("Type must be either income or expense".to_string());
            None
        }
    };

    let category = match input.category.as_deref() {
        None => Category::Other,
        Some(s) if s.trim().is_empty() => Category::Other,
        Some(s) => match s.parse::<Category>() {
            Ok(c) => c,
            Err(msg) => {
                errors.push(msg);
                Category::Other
            }
        },
    };

    if !errors.is_empty() {
        return Err(Error::Validation(errors));
    }

    // Both are Some when errors is empty
    let (date, kind) = match (date, kind) {
        (Some(d), Some(k)) => (d, k),
        _ => return Err(Error::Validation(vec!["Invalid transaction".to_string()])),
    };

    Ok(NewTransaction {
        amount: input.amount,
        date,
        description: input.description.trim().to_string(),
        category,
        kind,
    })
}

/// Parse and validate raw budget input
pub fn parse_budget(input: &BudgetInput) -> Result<NewBudget> {
    let mut errors = Vec::new();

    if input.amount <= 0.0 || !input.amount.is_finite() {
        errors.push("Amount must be greater than 0".to_string());
    }

    let category = match input.category.parse::<Category>() {
        Ok(c) => Some(c),
        Err(msg) => {
            errors.push(if input.category.trim().is_empty() {
                "Category is required".to_string()
            } else {
                msg
            });
            None
        }
    };

    let month = match input.month.parse::<Month>() {
        Ok(m) => Some(m),
        Err(msg) => {
            errors.push(if input.month.trim().is_empty() {
                "Month is required".to_string()
            } else {
                msg
            });
            None
        }
    };

    if !(1900..=9999).contains(&input.year) {
        errors.push("Year must be a four-digit calendar year".to_string());
    }

    if !errors.is_empty() {
        return Err(Error::Validation(errors));
    }

    let (category, month) = match (category, month) {
        (Some(c), Some(m)) => (c, m),
        _ => return Err(Error::Validation(vec!["Invalid budget".to_string()])),
    };

    Ok(NewBudget {
        category,
        amount: input.amount,
        month,
        year: input.year,
    })
}
