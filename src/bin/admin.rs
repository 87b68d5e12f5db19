//! CLI administration tool for care-records.
//!
//! Provides database diagnostics, record counts and bulk payrun imports
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Server version and database size
//! cargo run --bin admin -- db info
//!
//! # Row counts per table
//! cargo run --bin admin -- stats
//!
//! # Import a payrun batch exported as {"records": [...]}
//! cargo run --bin admin -- payrun import payruns.json
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or the `DB_*` components, as for the server

use care_records::api::dto::payrun::PayrunBatchRequest;
use care_records::application::services::PayrunService;
use care_records::config::Config;
use care_records::infrastructure::persistence::PgPayrunRepository;
use care_records::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::path::PathBuf;
use std::sync::Arc;

/// Tables reported by `stats`, in display order.
const TABLES: [&str; 5] = ["client", "employee", "shiftreport", "invoice", "payrun"];

/// CLI tool for managing care-records.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show row counts per table
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Payrun operations
    Payrun {
        #[command(subcommand)]
        action: PayrunAction,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[derive(Subcommand)]
enum PayrunAction {
    /// Import a JSON batch of payruns atomically
    Import {
        /// Path to a `{"records": [...]}` file
        file: PathBuf,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Payrun { action } => handle_payrun_action(action, pool).await?,
    }

    Ok(())
}

/// Prints the number of rows stored in each record table.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Record counts".bright_blue().bold());
    println!();

    for table in TABLES {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(pool)
            .await
            .with_context(|| format!("Failed to count rows in {table}"))?;

        println!(
            "  {:<13} {}",
            format!("{table}:"),
            count.to_string().bright_green().bold()
        );
    }
    println!();

    Ok(())
}

async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let size: String = sqlx::query_scalar(
                "SELECT pg_size_pretty(pg_database_size(current_database()))",
            )
            .fetch_one(pool)
            .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Size:       {}", size.bright_white());
            println!();
        }
    }

    Ok(())
}

async fn handle_payrun_action(action: PayrunAction, pool: PgPool) -> Result<()> {
    match action {
        PayrunAction::Import { file, yes } => import_payruns(pool, file, yes).await,
    }
}

/// Loads a payrun batch from disk and stores it in one transaction.
///
/// Nothing is written if any record fails to insert.
async fn import_payruns(pool: PgPool, file: PathBuf, skip_confirm: bool) -> Result<()> {
    println!("{}", "📥 Import payruns".bright_blue().bold());
    println!();

    let raw = std::fs::read_to_string(&file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let batch: PayrunBatchRequest = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a valid payrun batch", file.display()))?;
    let records = batch.into_new_payruns();

    if records.is_empty() {
        println!("{}", "  No records in file".yellow());
        return Ok(());
    }

    println!(
        "  File:    {}",
        file.display().to_string().cyan()
    );
    println!(
        "  Records: {}",
        records.len().to_string().bright_white().bold()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Import these payruns?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let service = PayrunService::new(Arc::new(PgPayrunRepository::new(Arc::new(pool))));
    let stored = service
        .store_batch(records)
        .await
        .map_err(|e| anyhow::anyhow!("Import failed, nothing stored: {}", e))?;

    println!();
    println!(
        "{} {}",
        "✅ Imported payruns:".green().bold(),
        stored.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}
