//! CLI administration tool for shortlink.
//!
//! Inspects short links and the database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Show the stored record and recorded clicks for a code
//! cargo run --bin admin -- stats aB3xYz
//!
//! # Check database connectivity and row counts
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Reads the same configuration as the server; only `DATABASE_URL` is
//! required (`DATABASE_AUTH_TOKEN` is honoured when set).

use shortlink::application::services::StatsService;
use shortlink::config;
use shortlink::infrastructure::persistence::{PgClickRepository, PgUrlRepository};
use shortlink::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for inspecting shortlink data.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show statistics for a short code
    Stats {
        /// The short code to inspect
        short_code: String,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and table sizes
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Stats { short_code } => handle_stats(&pool, &short_code).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Prints the stored record for a code alongside the number of click rows.
///
/// The two numbers can differ: the counter is bumped per redirect while click
/// rows are recorded separately, and either write may be dropped under load.
async fn handle_stats(pool: &PgPool, short_code: &str) -> Result<()> {
    let pool = Arc::new(pool.clone());
    let service = StatsService::new(
        Arc::new(PgUrlRepository::new(pool.clone())),
        Arc::new(PgClickRepository::new(pool)),
    );

    println!("{}", "📊 Short URL statistics".bright_blue().bold());
    println!();

    let short_url = match service.get_stats(short_code).await {
        Ok(short_url) => short_url,
        Err(e) if e.is_not_found() => {
            println!("{}", format!("❌ No short URL with code '{short_code}'").red());
            return Ok(());
        }
        Err(e) => return Err(e).context("Failed to load short URL"),
    };

    let recorded = service
        .recorded_clicks(short_code)
        .await
        .context("Failed to count click records")?;

    println!(
        "  Code:           {}",
        short_url.short_code.bright_white().bold()
    );
    println!("  Destination:    {}", short_url.long_url);
    println!("  Created:        {}", short_url.created_at.to_rfc3339());
    match short_url.expires_at {
        Some(expires_at) if short_url.is_expired() => {
            println!(
                "  Expires:        {} {}",
                expires_at.to_rfc3339(),
                "(expired)".yellow()
            );
        }
        Some(expires_at) => println!("  Expires:        {}", expires_at.to_rfc3339()),
        None => println!("  Expires:        {}", "never".dimmed()),
    }
    println!(
        "  Clicks:         {}",
        short_url.clicks.to_string().bright_green().bold()
    );
    println!(
        "  Click records:  {}",
        recorded.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!();

            let urls_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
                .fetch_one(pool)
                .await?;

            let clicks_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clicks")
                .fetch_one(pool)
                .await?;

            println!(
                "  URLs:    {}",
                urls_count.to_string().bright_green().bold()
            );
            println!(
                "  Clicks:  {}",
                clicks_count.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}
