//! Command implementations
//!
//! Organized by area:
//! - `core` - open_db, init, status, serve
//! - `transactions` - transaction management
//! - `budgets` - budget management and progress
//! - `dashboard` - analytics summary

mod budgets;
mod core;
mod dashboard;
mod transactions;

pub use budgets::*;
pub use core::*;
pub use dashboard::*;
pub use transactions::*;
