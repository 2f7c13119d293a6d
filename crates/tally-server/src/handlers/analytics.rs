//! Analytics handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::Utc;

use super::core_error;
use crate::{AppError, AppState};
use tally_core::models::{AnalyticsSummary, Category, CATEGORIES};
use tally_core::summarize;

/// GET /api/analytics - Full analytics bundle over all transactions
pub async fn get_analytics(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AnalyticsSummary>, AppError> {
    let transactions = state.db.list_transactions().map_err(core_error)?;
    let today = Utc::now().date_naive();
    Ok(Json(summarize(&transactions, today)))
}

/// GET /api/categories - The fixed category vocabulary
pub async fn list_categories() -> Json<Vec<Category>> {
    Json(CATEGORIES.to_vec())
}
