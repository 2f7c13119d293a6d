//! Budget handlers

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{Datelike, Utc};
use serde::Deserialize;

use super::core_error;
use crate::{AppError, AppState, SuccessResponse};
use tally_core::models::{Budget, BudgetProgress, BudgetReport, Month};
use tally_core::validate::{parse_budget, BudgetInput};
use tally_core::{budget_report, progress_by_budget};

/// Query parameters for budget listing and progress endpoints
#[derive(Debug, Deserialize)]
pub struct BudgetScopeQuery {
    /// Full month name, e.g. "January"
    pub month: Option<String>,
    pub year: Option<i32>,
}

impl BudgetScopeQuery {
    /// Parse the optional (month, year) pair; the filter only applies when
    /// both are given.
    fn scope(&self) -> Result<Option<(Month, i32)>, AppError> {
        match (self.month.as_deref(), self.year) {
            (Some(month), Some(year)) => {
                let month: Month = month
                    .parse()
                    .map_err(|e: String| AppError::bad_request(&e))?;
                Ok(Some((month, year)))
            }
            _ => Ok(None),
        }
    }

    /// Like `scope`, but falls back to the current wall-clock month/year
    fn scope_or_current(&self) -> Result<(Month, i32), AppError> {
        if let Some(scope) = self.scope()? {
            return Ok(scope);
        }
        let today = Utc::now().date_naive();
        let month = Month::from_number(today.month())
            .ok_or_else(|| AppError::bad_request("Invalid current month"))?;
        Ok((month, today.year()))
    }
}

/// GET /api/budgets - List budgets, optionally scoped to a month/year
pub async fn list_budgets(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BudgetScopeQuery>,
) -> Result<Json<Vec<Budget>>, AppError> {
    let scope = params.scope()?;
    let budgets = state.db.list_budgets(scope).map_err(core_error)?;
    Ok(Json(budgets))
}

/// POST /api/budgets - Create a budget
///
/// A duplicate (category, month, year) triple is rejected with 409 and the
/// existing record is left untouched.
pub async fn create_budget(
    State(state): State<Arc<AppState>>,
    Json(input): Json<BudgetInput>,
) -> Result<(StatusCode, Json<Budget>), AppError> {
    let new_budget = parse_budget(&input).map_err(core_error)?;
    let stored = state.db.create_budget(&new_budget).map_err(core_error)?;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// PUT /api/budgets/:id - Update a budget
pub async fn update_budget(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(input): Json<BudgetInput>,
) -> Result<Json<Budget>, AppError> {
    let new_budget = parse_budget(&input).map_err(core_error)?;
    let updated = state
        .db
        .update_budget(id, &new_budget)
        .map_err(core_error)?;
    Ok(Json(updated))
}

/// DELETE /api/budgets/:id - Delete a budget
pub async fn delete_budget(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    state.db.delete_budget(id).map_err(core_error)?;
    Ok(Json(SuccessResponse { success: true }))
}

/// GET /api/budgets/progress - Per-budget spent/percentage mapping
///
/// Scope defaults to the current month/year when not given.
pub async fn budget_progress(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BudgetScopeQuery>,
) -> Result<Json<BTreeMap<i64, BudgetProgress>>, AppError> {
    let scope = params.scope_or_current()?;
    let budgets = state.db.list_budgets(Some(scope)).map_err(core_error)?;
    let transactions = state.db.list_transactions().map_err(core_error)?;

    let today = Utc::now().date_naive();
    Ok(Json(progress_by_budget(&budgets, &transactions, today)))
}

/// GET /api/budgets/overview - Full progress rows plus the roll-up
pub async fn budget_overview(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BudgetScopeQuery>,
) -> Result<Json<BudgetReport>, AppError> {
    let scope = params.scope_or_current()?;
    let budgets = state.db.list_budgets(Some(scope)).map_err(core_error)?;
    let transactions = state.db.list_transactions().map_err(core_error)?;

    let today = Utc::now().date_naive();
    Ok(Json(budget_report(&budgets, &transactions, today)))
}
