//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod analytics;
pub mod budgets;
pub mod transactions;

// Re-export all handlers for use in router
pub use analytics::*;
pub use budgets::*;
pub use transactions::*;

use crate::AppError;
use tally_core::Error;

/// Map a core error onto the matching HTTP error
///
/// Validation, not-found and conflict keep their status codes; everything
/// else (store failures) becomes a sanitized 500.
pub(crate) fn core_error(err: Error) -> AppError {
    match err {
        Error::Validation(details) => AppError::validation(details),
        Error::NotFound(msg) => AppError::not_found(&msg),
        Error::Conflict(msg) => AppError::conflict(&msg),
        other => AppError::from(anyhow::Error::new(other)),
    }
}
