//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - Track income, expenses and budgets
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Self-hosted personal finance tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "tally.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Directory containing static files to serve (e.g., ui/dist)
        #[arg(long)]
        static_dir: Option<PathBuf>,

        /// Allowed CORS origin (repeatable)
        #[arg(long = "cors-origin")]
        cors_origins: Vec<String>,
    },

    /// Show database status (path, size, record counts)
    Status,

    /// Show the analytics dashboard
    Dashboard,

    /// Manage transactions
    Transactions {
        #[command(subcommand)]
        action: Option<TransactionsAction>,
    },

    /// Manage budgets
    Budgets {
        #[command(subcommand)]
        action: Option<BudgetsAction>,
    },
}

#[derive(Subcommand)]
pub enum TransactionsAction {
    /// List transactions, newest first
    List {
        /// Maximum number to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Record a transaction
    Add {
        /// Amount in currency units (positive)
        #[arg(long)]
        amount: f64,

        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Description
        #[arg(long)]
        description: String,

        /// Category label (defaults to Other)
        #[arg(long)]
        category: Option<String>,

        /// income or expense
        #[arg(long = "type")]
        kind: String,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum BudgetsAction {
    /// List budgets
    List {
        /// Month name, e.g. January (requires --year)
        #[arg(long)]
        month: Option<String>,

        /// Calendar year (requires --month)
        #[arg(long)]
        year: Option<i32>,
    },

    /// Create a budget (defaults to the current month/year)
    Set {
        /// Category label
        #[arg(long)]
        category: String,

        /// Spending cap in currency units
        #[arg(long)]
        amount: f64,

        /// Month name, e.g. January
        #[arg(long)]
        month: Option<String>,

        /// Calendar year
        #[arg(long)]
        year: Option<i32>,
    },

    /// Delete a budget
    Delete {
        /// Budget ID
        id: i64,
    },

    /// Show budget progress (defaults to the current month/year)
    Progress {
        /// Month name, e.g. January
        #[arg(long)]
        month: Option<String>,

        /// Calendar year
        #[arg(long)]
        year: Option<i32>,
    },
}
