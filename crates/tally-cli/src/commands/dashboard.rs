//! Dashboard command implementation

use std::path::Path;

use anyhow::Result;
use chrono::Utc;

use super::open_db;
use tally_core::analytics::summarize;

pub fn cmd_dashboard(db_path: &Path) -> Result<()> {
    let db = open_db(db_path)?;
    let transactions = db.list_transactions()?;
    let summary = summarize(&transactions, Utc::now().date_naive());

    println!();
    println!("╭─────────────────────────────────────────╮");
    println!("│           💰 Tally Dashboard            │");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Transactions:   {}", summary.total_transactions);
    println!("  Total income:   {:>12.2}", summary.total_income);
    println!("  Total expenses: {:>12.2}", summary.total_expenses);
    println!();

    println!("  📈 Last 6 months");
    for bucket in &summary.monthly_expenses {
        println!("     {:<10} {:>12.2}", bucket.month, bucket.amount);
    }
    println!();

    if !summary.category_breakdown.is_empty() {
        println!("  🗂  Spending by category");
        for entry in &summary.category_breakdown {
            println!(
                "     {:<20} {:>12.2}  ({:>3}%)",
                entry.category, entry.amount, entry.percentage
            );
        }
        println!();
    }

    if !summary.recent_transactions.is_empty() {
        println!("  🕐 Recent transactions");
        for tx in &summary.recent_transactions {
            println!(
                "     {} {:>10.2}  {:<18} {}",
                tx.date, tx.amount, tx.category, tx.description
            );
        }
        println!();
    }

    Ok(())
}
