//! Transaction store operations

use rusqlite::params;

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{Category, NewTransaction, Transaction, TransactionKind};

impl Database {
    /// Insert a transaction and return the stored record
    ///
    /// Input is expected to be validated already (`validate::parse_transaction`).
    pub fn insert_transaction(&self, tx: &NewTransaction) -> Result<Transaction> {
        let conn = self.conn()?;

        conn.execute(
            r#"
            INSERT INTO transactions (date, description, amount, category, kind)
            VALUES (?, ?, ?, ?, ?)
            "#,
            params![
                tx.date.to_string(),
                tx.description,
                tx.amount,
                tx.category.as_str(),
                tx.kind.as_str(),
            ],
        )?;

        let id = conn.last_insert_rowid();
        drop(conn);

        self.get_transaction(id)?
            .ok_or_else(|| Error::NotFound(format!("Transaction {} not found after insert", id)))
    }

    /// Get a single transaction by ID
    pub fn get_transaction(&self, id: i64) -> Result<Option<Transaction>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, date, description, amount, category, kind, created_at, updated_at
             FROM transactions WHERE id = ?",
        )?;

        let tx = stmt
            .query_row(params![id], Self::row_to_transaction)
            .map(Some)
            .or_else(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => Ok(None),
                other => Err(other),
            })?;

        Ok(tx)
    }

    /// List the full transaction collection, newest first
    pub fn list_transactions(&self) -> Result<Vec<Transaction>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, date, description, amount, category, kind, created_at, updated_at
             FROM transactions
             ORDER BY date DESC, id DESC",
        )?;

        let transactions = stmt
            .query_map([], Self::row_to_transaction)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(transactions)
    }

    /// Update a transaction in place
    ///
    /// Returns `Error::NotFound` when the id does not exist.
    pub fn update_transaction(&self, id: i64, tx: &NewTransaction) -> Result<Transaction> {
        let conn = self.conn()?;

        let changed = conn.execute(
            r#"
            UPDATE transactions
            SET date = ?, description = ?, amount = ?, category = ?, kind = ?,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = ?
            "#,
            params![
                tx.date.to_string(),
                tx.description,
                tx.amount,
                tx.category.as_str(),
                tx.kind.as_str(),
                id,
            ],
        )?;
        drop(conn);

        if changed == 0 {
            return Err(Error::NotFound(format!("Transaction {} not found", id)));
        }

        self.get_transaction(id)?
            .ok_or_else(|| Error::NotFound(format!("Transaction {} not found after update", id)))
    }

    /// Delete a transaction
    ///
    /// Returns `Error::NotFound` when the id does not exist.
    pub fn delete_transaction(&self, id: i64) -> Result<()> {
        let conn = self.conn()?;
        let changed = conn.execute("DELETE FROM transactions WHERE id = ?", params![id])?;

        if changed == 0 {
            return Err(Error::NotFound(format!("Transaction {} not found", id)));
        }
        Ok(())
    }

    /// Count total transactions
    pub fn count_transactions(&self) -> Result<i64> {
        let conn = self.conn()?;
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM transactions", [], |row| row.get(0))?;
        Ok(count)
    }

    pub(crate) fn row_to_transaction(row: &rusqlite::Row) -> rusqlite::Result<Transaction> {
        let date_str: String = row.get(1)?;
        let category_str: String = row.get(4)?;
        let kind_str: String = row.get(5)?;
        let created_at_str: String = row.get(6)?;
        let updated_at_str: String = row.get(7)?;

        let kind: TransactionKind = kind_str.parse().map_err(|e: String| {
            rusqlite::Error::FromSqlConversionFailure(5, rusqlite::types::Type::Text, e.into())
        })?;

        Ok(Transaction {
            id: row.get(0)?,
            date: chrono::NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").unwrap_or_default(),
            description: row.get(2)?,
            amount: row.get(3)?,
            // Unknown labels left behind by older data land in Other
            category: category_str.parse().unwrap_or(Category::Other),
            kind,
            created_at: parse_datetime(&created_at_str),
            updated_at: parse_datetime(&updated_at_str),
        })
    }
}
