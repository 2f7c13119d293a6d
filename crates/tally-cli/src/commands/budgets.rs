//! Budget command implementations

use anyhow::{anyhow, Result};
use chrono::{Datelike, Utc};

use tally_core::db::Database;
use tally_core::models::{BudgetStatus, Month};
use tally_core::progress::budget_report;
use tally_core::validate::{parse_budget, BudgetInput};
use tally_core::Error;

/// Resolve an optional month/year pair, defaulting to the current ones
fn resolve_scope(month: Option<&str>, year: Option<i32>) -> Result<(Month, i32)> {
    let today = Utc::now().date_naive();

    let month = match month {
        Some(name) => name.parse::<Month>().map_err(|e| anyhow!(e))?,
        None => Month::from_number(today.month()).ok_or_else(|| anyhow!("Invalid current month"))?,
    };
    let year = year.unwrap_or_else(|| today.year());

    Ok((month, year))
}

pub fn cmd_budgets_list(db: &Database, month: Option<&str>, year: Option<i32>) -> Result<()> {
    // Scope only applies when both parts are given, like the API
    let scope = match (month, year) {
        (Some(name), Some(year)) => Some((name.parse::<Month>().map_err(|e| anyhow!(e))?, year)),
        _ => None,
    };

    let budgets = db.list_budgets(scope)?;

    if budgets.is_empty() {
        println!("No budgets set. Create one with:");
        println!("  tally budgets set --category \"Food & Dining\" --amount 300");
        return Ok(());
    }

    println!();
    println!("🎯 Budgets");
    println!("   ──────────────────────────────────────────────");
    for budget in &budgets {
        println!(
            "   #{:<5} {:<20} {:>10.2}  {} {}",
            budget.id, budget.category, budget.amount, budget.month, budget.year
        );
    }
    println!();

    Ok(())
}

pub fn cmd_budgets_set(
    db: &Database,
    category: &str,
    amount: f64,
    month: Option<&str>,
    year: Option<i32>,
) -> Result<()> {
    let (resolved_month, resolved_year) = resolve_scope(month, year)?;

    let input = BudgetInput {
        category: category.to_string(),
        amount,
        month: resolved_month.to_string(),
        year: resolved_year,
    };

    let new_budget = match parse_budget(&input) {
        Ok(b) => b,
        Err(Error::Validation(errors)) => {
            for msg in &errors {
                eprintln!("   ❌ {}", msg);
            }
            return Err(anyhow!("Invalid budget"));
        }
        Err(e) => return Err(e.into()),
    };

    match db.create_budget(&new_budget) {
        Ok(stored) => {
            println!(
                "✅ Budget #{}: {:.2} for {} in {} {}",
                stored.id, stored.amount, stored.category, stored.month, stored.year
            );
            Ok(())
        }
        Err(Error::Conflict(msg)) => Err(anyhow!(msg)),
        Err(e) => Err(e.into()),
    }
}

pub fn cmd_budgets_delete(db: &Database, id: i64) -> Result<()> {
    db.delete_budget(id)?;
    println!("✅ Deleted budget #{}", id);
    Ok(())
}

pub fn cmd_budgets_progress(db: &Database, month: Option<&str>, year: Option<i32>) -> Result<()> {
    let scope = resolve_scope(month, year)?;
    let budgets = db.list_budgets(Some(scope))?;
    let transactions = db.list_transactions()?;

    let today = Utc::now().date_naive();
    let report = budget_report(&budgets, &transactions, today);

    if report.budgets.is_empty() {
        println!("No budgets for {} {}.", scope.0, scope.1);
        return Ok(());
    }

    println!();
    println!("🎯 Budget Progress - {} {}", scope.0, scope.1);
    println!("   ──────────────────────────────────────────────────────");

    for row in &report.budgets {
        let icon = match row.status {
            BudgetStatus::Success => "🟢",
            BudgetStatus::Warning => "🟡",
            BudgetStatus::Danger => "🔴",
        };
        println!(
            "   {} {:<20} {:>10.2} of {:>10.2}  ({:.1}%)",
            icon, row.category, row.spent, row.budget, row.percentage
        );
        if row.spent > row.budget {
            println!("      Budget exceeded by {:.2}", row.spent - row.budget);
        }
    }

    println!("   ──────────────────────────────────────────────────────");
    println!(
        "   Total: {:.2} of {:.2} ({:.1}%, {})",
        report.total_spent, report.total_budget, report.percentage, report.status
    );
    println!();

    Ok(())
}
