//! CLI administration tool for travel-agency.
//!
//! Manages accounts and inspects the database without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create an administrator (prompts for missing values)
//! cargo run --bin admin -- account create-admin --name ops
//!
//! # List accounts and their roles
//! cargo run --bin admin -- account list
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Show server version and row counts
//! cargo run --bin admin -- db info
//! ```
//!
//! # Environment Variables
//!
//! `DATABASE_URL` or the `DB_*` components, as for the server.

use travel_agency::application::services::AccountService;
use travel_agency::config::{DatabaseConfig, mask_connection_string};
use travel_agency::infrastructure::persistence::PgAccountRepository;
use travel_agency::infrastructure::security::Argon2Hasher;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing travel-agency.
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
    /// Manage accounts
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum AccountAction {
    /// Create an account with USER and ADMIN roles
    CreateAdmin {
        /// Account name
        #[arg(short, long)]
        name: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all accounts
    List,
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

type Accounts = AccountService<PgAccountRepository>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database = DatabaseConfig::from_env()?;
    let pool = PgPool::connect(&database.url).await.with_context(|| {
        format!(
            "Failed to connect to {}",
            mask_connection_string(&database.url)
        )
    })?;

    match cli.command {
        Commands::Account { action } => handle_account_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_account_action(action: AccountAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgAccountRepository::new(Arc::new(pool.clone())));
    let service = AccountService::new(repo, Arc::new(Argon2Hasher::default()));

    match action {
        AccountAction::CreateAdmin { name, yes } => create_admin(&service, name, yes).await?,
        AccountAction::List => list_accounts(&service).await?,
    }

    Ok(())
}

/// Creates an administrator, prompting for the name if not given and always
/// for the password.
async fn create_admin(service: &Accounts, name: Option<String>, skip_confirm: bool) -> Result<()> {
    println!("{}", "👤 Create Administrator".bright_blue().bold());
    println!();

    let username = match name {
        Some(n) => n,
        None => Input::new()
            .with_prompt("Account name")
            .with_initial_text("admin")
            .interact_text()?,
    };

    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()?;

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Create administrator '{username}'?"))
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .create_admin(&username, &password)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create administrator: {e}"))?;

    println!();
    println!("{}", "✅ Administrator created".green().bold());
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -u {}:<password> -X POST http://localhost:8080/hotels/addHotel",
        username.bright_yellow()
    );
    println!();

    Ok(())
}

/// Lists accounts with their roles.
///
/// ```text
/// 📋 Accounts
///
///   ID  Name                           Created              Roles
///   1   admin                          2025-01-15 10:30     USER, ADMIN
/// ```
async fn list_accounts(service: &Accounts) -> Result<()> {
    println!("{}", "📋 Accounts".bright_blue().bold());
    println!();

    let accounts = service
        .list_accounts()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list accounts: {e}"))?;

    if accounts.is_empty() {
        println!("{}", "  No accounts found".yellow());
        println!();
        println!(
            "  Create one with: {} admin account create-admin",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<30} {:<20} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Created".bright_white().bold(),
        "Roles".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for account in &accounts {
        let roles = account
            .roles
            .iter()
            .map(|r| r.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        println!(
            "  {:<4} {:<30} {:<20} {}",
            account.id.to_string().bright_black(),
            account.username.cyan(),
            account
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            roles.green()
        );
    }

    println!();
    println!(
        "  Total: {}",
        accounts.len().to_string().bright_white().bold()
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
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            println!("  PostgreSQL: {}", version.bright_white());
            println!();

            for (label, sql) in [
                ("Accounts", "SELECT COUNT(*) FROM accounts"),
                ("Continents", "SELECT COUNT(*) FROM continents"),
                ("Countries", "SELECT COUNT(*) FROM countries"),
                ("Cities", "SELECT COUNT(*) FROM cities"),
                ("Hotels", "SELECT COUNT(*) FROM hotels"),
                ("Offers", "SELECT COUNT(*) FROM offers"),
                (
                    "Reserved offers",
                    "SELECT COUNT(*) FROM offers WHERE reserved_by IS NOT NULL",
                ),
            ] {
                let count: i64 = sqlx::query_scalar(sql).fetch_one(pool).await?;
                println!(
                    "  {:<16} {}",
                    format!("{label}:"),
                    count.to_string().bright_green().bold()
                );
            }
            println!();
        }
    }

    Ok(())
}
