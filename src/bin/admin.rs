//! CLI administration tool for shortlink.
//!
//! Inspects mappings and performs database checks without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Show one mapping, active or not
//! cargo run --bin admin -- show aZ3kQ9pLm2
//!
//! # List active mappings
//! cargo run --bin admin -- list --page 2 --page-size 20
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_HOST`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`: PostgreSQL connection
//! - `BASE_URL`: used to print full short links (default: `http://localhost:3000`)

use shortlink::application::services::MappingService;
use shortlink::config::{self, StorageBackend};
use shortlink::domain::clock::SystemClock;
use shortlink::domain::entities::Mapping;
use shortlink::infrastructure::persistence::PgMappingRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shortlink.
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
    /// Show statistics
    Stats,

    /// Show a single mapping in any state
    Show {
        /// Short code or custom alias
        code: String,
    },

    /// List active mappings
    List {
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: u32,

        /// Items per page (1-100)
        #[arg(short = 's', long, default_value_t = 20)]
        page_size: u32,
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
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::Config::from_env().context("Failed to load configuration")?;
    if config.storage_backend != StorageBackend::Postgres {
        anyhow::bail!("admin only works with STORAGE_BACKEND=postgres");
    }
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Show { code } => show_mapping(&pool, &config.base_url, &code).await?,
        Commands::List { page, page_size } => {
            list_mappings(&pool, &config.base_url, page, page_size).await?
        }
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Displays system statistics.
///
/// Shows:
/// - Total, active and inactive mappings
/// - Sum of recorded clicks
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let (total, active, clicks): (i64, i64, i64) = sqlx::query_as(
        r#"
        SELECT
            COUNT(*),
            COUNT(*) FILTER (WHERE is_active),
            COALESCE(SUM(click_count), 0)::BIGINT
        FROM mappings
        "#,
    )
    .fetch_one(pool)
    .await?;

    println!(
        "  Mappings:      {}",
        total.to_string().bright_green().bold()
    );
    println!(
        "  Active:        {}",
        active.to_string().bright_green().bold()
    );
    println!(
        "  Inactive:      {}",
        (total - active).to_string().bright_black().bold()
    );
    println!(
        "  Clicks:        {}",
        clicks.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Prints every stored field of one mapping.
async fn show_mapping(pool: &PgPool, base_url: &str, code: &str) -> Result<()> {
    let repo = PgMappingRepository::new(Arc::new(pool.clone()));

    let mapping = repo
        .find_by_code(code)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .with_context(|| format!("Mapping '{}' not found", code))?;

    println!("{}", "🔗 Mapping".bright_blue().bold());
    println!();
    println!("  Code:       {}", mapping.short_code.cyan());
    println!("  Short link: {}/{}", base_url, mapping.short_code);
    println!("  Target:     {}", mapping.target_url.bright_white());
    println!("  Custom:     {}", mapping.is_custom_alias);
    println!(
        "  Created:    {}",
        mapping.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("  Expires:    {}", format_expiry(&mapping));
    println!("  Status:     {}", status_label(&mapping));
    println!(
        "  Clicks:     {}",
        mapping.click_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Lists active mappings through the same pagination rules as `GET /urls`.
///
/// # Output Format
///
/// ```text
/// 📋 Active mappings (page 1/3, 42 total)
///
///   Code                 Clicks   Expires              Target
///   ─────────────────────────────────────────────────────────────────────
///   aZ3kQ9pLm2           17       2026-01-08 12:00     https://example.com
/// ```
async fn list_mappings(pool: &PgPool, base_url: &str, page: u32, page_size: u32) -> Result<()> {
    let repo = Arc::new(PgMappingRepository::new(Arc::new(pool.clone())));
    let service = MappingService::new(repo, Arc::new(SystemClock));

    let result = service
        .list(page, page_size)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!(
        "{}",
        format!(
            "📋 Active mappings (page {}/{}, {} total)",
            result.page, result.total_pages, result.total
        )
        .bright_blue()
        .bold()
    );
    println!();

    if result.is_empty() {
        println!("{}", "  No URLs found".yellow());
        return Ok(());
    }

    println!(
        "  {:<20} {:<8} {:<20} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Expires".bright_white().bold(),
        "Target".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for mapping in &result.items {
        println!(
            "  {:<20} {:<8} {:<20} {}",
            mapping.short_code.cyan(),
            mapping.click_count,
            format_expiry(mapping).bright_black(),
            mapping.target_url
        );
    }

    println!();
    println!("  Links are served from {}", base_url.bright_white());
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
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}

fn format_expiry(mapping: &Mapping) -> String {
    mapping
        .expires_at
        .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "never".to_string())
}

/// Stored flag plus a hint when an active mapping is already past its expiry.
fn status_label(mapping: &Mapping) -> ColoredString {
    if !mapping.is_active {
        "INACTIVE".red()
    } else if mapping.is_expired_at(chrono::Utc::now()) {
        "ACTIVE (expired, not yet visited)".yellow()
    } else {
        "ACTIVE".green()
    }
}
