//! Tally CLI - Personal finance tracker
//!
//! Usage:
//!   tally init                  Initialize database
//!   tally serve --port 3000     Start web server
//!   tally dashboard             Show analytics summary
//!   tally transactions add ...  Record a transaction
//!   tally budgets set ...       Create a budget

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db),
        Commands::Serve {
            port,
            host,
            static_dir,
            cors_origins,
        } => {
            commands::cmd_serve(&cli.db, &host, port, static_dir.as_deref(), cors_origins).await
        }
        Commands::Status => commands::cmd_status(&cli.db),
        Commands::Dashboard => commands::cmd_dashboard(&cli.db),
        Commands::Transactions { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                None | Some(TransactionsAction::List { limit: 20 }) => {
                    commands::cmd_transactions_list(&db, 20)
                }
                Some(TransactionsAction::List { limit }) => {
                    commands::cmd_transactions_list(&db, limit)
                }
                Some(TransactionsAction::Add {
                    amount,
                    date,
                    description,
                    category,
                    kind,
                }) => commands::cmd_transactions_add(
                    &db,
                    amount,
                    &date,
                    &description,
                    category.as_deref(),
                    &kind,
                ),
                Some(TransactionsAction::Delete { id }) => {
                    commands::cmd_transactions_delete(&db, id)
                }
            }
        }
        Commands::Budgets { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                None => commands::cmd_budgets_list(&db, None, None),
                Some(BudgetsAction::List { month, year }) => {
                    commands::cmd_budgets_list(&db, month.as_deref(), year)
                }
                Some(BudgetsAction::Set {
                    category,
                    amount,
                    month,
                    year,
                }) => commands::cmd_budgets_set(&db, &category, amount, month.as_deref(), year),
                Some(BudgetsAction::Delete { id }) => commands::cmd_budgets_delete(&db, id),
                Some(BudgetsAction::Progress { month, year }) => {
                    commands::cmd_budgets_progress(&db, month.as_deref(), year)
                }
            }
        }
    }
}
