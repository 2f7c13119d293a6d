//! Budget store operations
//!
//! The store owns the `(category, month, year)` uniqueness invariant: a
//! duplicate create is rejected with `Error::Conflict` and leaves the
//! existing row untouched. A UNIQUE index backs the same invariant for
//! updates.

use rusqlite::params;

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{Budget, Category, Month, NewBudget};

impl Database {
    /// Create a budget, rejecting a duplicate (category, month, year) triple
    pub fn create_budget(&self, budget: &NewBudget) -> Result<Budget> {
        let conn = self.conn()?;

        let existing: Option<i64> = conn
            .query_row(
                "SELECT id FROM budgets WHERE category = ? AND month = ? AND year = ?",
                params![
                    budget.category.as_str(),
                    budget.month.as_str(),
                    budget.year
                ],
                |row| row.get(0),
            )
            .ok();

        if existing.is_some() {
            return Err(Error::Conflict(
                "Budget already exists for this category and month".to_string(),
            ));
        }

        conn.execute(
            "INSERT INTO budgets (category, amount, month, year) VALUES (?, ?, ?, ?)",
            params![
                budget.category.as_str(),
                budget.amount,
                budget.month.as_str(),
                budget.year
            ],
        )
        .map_err(map_unique_violation)?;

        let id = conn.last_insert_rowid();
        drop(conn);

        self.get_budget(id)?
            .ok_or_else(|| Error::NotFound(format!("Budget {} not found after insert", id)))
    }

    /// Get a single budget by ID
    pub fn get_budget(&self, id: i64) -> Result<Option<Budget>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, category, amount, month, year, created_at, updated_at
             FROM budgets WHERE id = ?",
        )?;

        let budget = stmt
            .query_row(params![id], Self::row_to_budget)
            .map(Some)
            .or_else(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => Ok(None),
                other => Err(other),
            })?;

        Ok(budget)
    }

    /// List budgets, optionally scoped to one (month, year)
    pub fn list_budgets(&self, scope: Option<(Month, i32)>) -> Result<Vec<Budget>> {
        let conn = self.conn()?;

        let budgets = match scope {
            Some((month, year)) => {
                let mut stmt = conn.prepare(
                    "SELECT id, category, amount, month, year, created_at, updated_at
                     FROM budgets
                     WHERE month = ? AND year = ?
                     ORDER BY id",
                )?;
                let rows = stmt
                    .query_map(params![month.as_str(), year], Self::row_to_budget)?
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                rows
            }
            None => {
                let mut stmt = conn.prepare(
                    "SELECT id, category, amount, month, year, created_at, updated_at
                     FROM budgets
                     ORDER BY id",
                )?;
                let rows = stmt
                    .query_map([], Self::row_to_budget)?
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                rows
            }
        };

        Ok(budgets)
    }

    /// Update a budget in place
    ///
    /// Returns `Error::NotFound` for an unknown id, and `Error::Conflict`
    /// when the new (category, month, year) would collide with another
    /// budget.
    pub fn update_budget(&self, id: i64, budget: &NewBudget) -> Result<Budget> {
        let conn = self.conn()?;

        let changed = conn
            .execute(
                r#"
                UPDATE budgets
                SET category = ?, amount = ?, month = ?, year = ?,
                    updated_at = CURRENT_TIMESTAMP
                WHERE id = ?
                "#,
                params![
                    budget.category.as_str(),
                    budget.amount,
                    budget.month.as_str(),
                    budget.year,
                    id,
                ],
            )
            .map_err(map_unique_violation)?;
        drop(conn);

        if changed == 0 {
            return Err(Error::NotFound(format!("Budget {} not found", id)));
        }

        self.get_budget(id)?
            .ok_or_else(|| Error::NotFound(format!("Budget {} not found after update", id)))
    }

    /// Delete a budget
    ///
    /// Returns `Error::NotFound` when the id does not exist. Deleting a
    /// budget has no effect on transactions.
    pub fn delete_budget(&self, id: i64) -> Result<()> {
        let conn = self.conn()?;
        let changed = conn.execute("DELETE FROM budgets WHERE id = ?", params![id])?;

        if changed == 0 {
            return Err(Error::NotFound(format!("Budget {} not found", id)));
        }
        Ok(())
    }

    /// Count total budgets
    pub fn count_budgets(&self) -> Result<i64> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM budgets", [], |row| row.get(0))?;
        Ok(count)
    }

    fn row_to_budget(row: &rusqlite::Row) -> rusqlite::Result<Budget> {
        let category_str: String = row.get(1)?;
        let month_str: String = row.get(3)?;
        let created_at_str: String = row.get(5)?;
        let updated_at_str: String = row.get(6)?;

        let month: Month = month_str.parse().map_err(|e: String| {
            rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, e.into())
        })?;

        Ok(Budget {
            id: row.get(0)?,
            category: category_str.parse().unwrap_or(Category::Other),
            amount: row.get(2)?,
            month,
            year: row.get(4)?,
            created_at: parse_datetime(&created_at_str),
            updated_at: parse_datetime(&updated_at_str),
        })
    }
}

/// Map a UNIQUE constraint violation on the budget triple to a conflict error
fn map_unique_violation(e: rusqlite::Error) -> Error {
    match &e {
        rusqlite::Error::SqliteFailure(err, _)
            if err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            Error::Conflict("Budget already exists for this category and month".to_string())
        }
        _ => Error::Database(e),
    }
}
