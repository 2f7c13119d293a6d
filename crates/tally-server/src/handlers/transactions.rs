//! Transaction handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::core_error;
use crate::{AppError, AppState, SuccessResponse};
use tally_core::models::Transaction;
use tally_core::validate::{parse_transaction, TransactionInput};

/// GET /api/transactions - Full collection, newest first
pub async fn list_transactions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    let transactions = state.db.list_transactions().map_err(core_error)?;
    Ok(Json(transactions))
}

/// POST /api/transactions - Validate and record a transaction
pub async fn create_transaction(
    State(state): State<Arc<AppState>>,
    Json(input): Json<TransactionInput>,
) -> Result<(StatusCode, Json<Transaction>), AppError> {
    let new_tx = parse_transaction(&input).map_err(core_error)?;
    let stored = state.db.insert_transaction(&new_tx).map_err(core_error)?;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// PUT /api/transactions/:id - Update a transaction
pub async fn update_transaction(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(input): Json<TransactionInput>,
) -> Result<Json<Transaction>, AppError> {
    let new_tx = parse_transaction(&input).map_err(core_error)?;
    let updated = state
        .db
        .update_transaction(id, &new_tx)
        .map_err(core_error)?;
    Ok(Json(updated))
}

/// DELETE /api/transactions/:id - Delete a transaction
pub async fn delete_transaction(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    state.db.delete_transaction(id).map_err(core_error)?;
    Ok(Json(SuccessResponse { success: true }))
}
