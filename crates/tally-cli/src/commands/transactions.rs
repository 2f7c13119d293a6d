//! Transaction command implementations

use anyhow::{anyhow, Result};
use tally_core::db::Database;
use tally_core::validate::{parse_transaction, TransactionInput};
use tally_core::Error;

pub fn cmd_transactions_list(db: &Database, limit: usize) -> Result<()> {
    let transactions = db.list_transactions()?;

    if transactions.is_empty() {
        println!("No transactions recorded. Add one with:");
        println!("  tally transactions add --amount 12.50 --date 2024-06-01 \\");
        println!("    --description \"Lunch\" --type expense");
        return Ok(());
    }

    println!();
    println!("💳 Transactions (showing {} of {})", limit.min(transactions.len()), transactions.len());
    println!("   ──────────────────────────────────────────────────────");

    for tx in transactions.iter().take(limit) {
        let sign = match tx.kind {
            tally_core::models::TransactionKind::Income => "+",
            tally_core::models::TransactionKind::Expense => "-",
        };
        println!(
            "   #{:<5} {} {}{:>10.2}  {:<18} {}",
            tx.id, tx.date, sign, tx.amount, tx.category, tx.description
        );
    }
    println!();

    Ok(())
}

pub fn cmd_transactions_add(
    db: &Database,
    amount: f64,
    date: &str,
    description: &str,
    category: Option<&str>,
    kind: &str,
) -> Result<()> {
    let input = TransactionInput {
        amount,
        date: date.to_string(),
        description: description.to_string(),
        category: category.map(|s| s.to_string()),
        kind: kind.to_string(),
    };

    let new_tx = match parse_transaction(&input) {
        Ok(tx) => tx,
        Err(Error::Validation(errors)) => {
            for msg in &errors {
                eprintln!("   ❌ {}", msg);
            }
            return Err(anyhow!("Invalid transaction"));
        }
        Err(e) => return Err(e.into()),
    };

    let stored = db.insert_transaction(&new_tx)?;
    println!(
        "✅ Recorded {} of {:.2} ({}) as #{}",
        stored.kind, stored.amount, stored.category, stored.id
    );

    Ok(())
}

pub fn cmd_transactions_delete(db: &Database, id: i64) -> Result<()> {
    db.delete_transaction(id)?;
    println!("✅ Deleted transaction #{}", id);
    Ok(())
}
