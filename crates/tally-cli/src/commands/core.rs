//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` - Shared utility to open the database
//! - `cmd_init` - Initialize the database
//! - `cmd_status` - Show database status
//! - `cmd_serve` - Start the web server

use std::path::Path;

use anyhow::{Context, Result};
use tally_core::db::Database;
use tally_server::ServerConfig;

/// Open the database, running migrations if needed
pub fn open_db(db_path: &Path) -> Result<Database> {
    let path_str = db_path.to_string_lossy();
    Database::new(&path_str).context("Failed to open database")
}

pub fn cmd_init(db_path: &Path) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    let _db = open_db(db_path)?;

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Record a transaction: tally transactions add --amount 12.50 \\");
    println!("       --date 2024-06-01 --description \"Lunch\" --type expense");
    println!("  2. Start the web UI: tally serve");

    Ok(())
}

pub fn cmd_status(db_path: &Path) -> Result<()> {
    use std::fs;

    println!();
    println!("📊 Tally Status");
    println!("   ─────────────────────────────────────────");

    // Database path
    println!("   Database: {}", db_path.display());

    // Check if database file exists and get size
    if db_path.exists() {
        if let Ok(metadata) = fs::metadata(db_path) {
            let size_kb = metadata.len() as f64 / 1024.0;
            if size_kb < 1024.0 {
                println!("   Size: {:.1} KB", size_kb);
            } else {
                println!("   Size: {:.1} MB", size_kb / 1024.0);
            }
        }

        match open_db(db_path) {
            Ok(db) => {
                println!();
                println!("   Transactions: {}", db.count_transactions()?);
                println!("   Budgets: {}", db.count_budgets()?);
            }
            Err(e) => {
                println!();
                println!("   ❌ Error opening database: {}", e);
            }
        }
    } else {
        println!("   Size: (database not initialized)");
    }

    println!();
    Ok(())
}

pub async fn cmd_serve(
    db_path: &Path,
    host: &str,
    port: u16,
    static_dir: Option<&Path>,
    cors_origins: Vec<String>,
) -> Result<()> {
    let db = open_db(db_path)?;

    let config = ServerConfig {
        allowed_origins: cors_origins,
    };

    let static_dir = static_dir.map(|p| p.to_string_lossy().to_string());
    tally_server::serve(db, host, port, static_dir.as_deref(), config).await
}
