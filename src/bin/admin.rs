//! CLI administration tool for store-admin.
//!
//! Provides commands for managing API tokens and stores and for checking the
//! database without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Issue a token for a user
//! cargo run --bin admin -- token create --user user_1 --name "Laptop"
//!
//! # List all tokens
//! cargo run --bin admin -- token list
//!
//! # Revoke a token
//! cargo run --bin admin -- token revoke "Laptop"
//!
//! # Create and list stores
//! cargo run --bin admin -- store create --user user_1 --name "Main Street"
//! cargo run --bin admin -- store list --user user_1
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_*` parts (required): PostgreSQL connection
//! - `TOKEN_SIGNING_SECRET` (required for `token create`): must match the server

use store_admin::application::services::{AuthService, StoreService};
use store_admin::config::{Config, mask_connection_string};
use store_admin::domain::entities::Store;
use store_admin::domain::repositories::TokenRepository;
use store_admin::infrastructure::persistence::{PgStoreRepository, PgTokenRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing store-admin.
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
    /// Manage API tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Manage stores
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Token management subcommands.
#[derive(Subcommand)]
enum TokenAction {
    /// Create a new API token
    Create {
        /// User the token authenticates as
        #[arg(short, long)]
        user: Option<String>,

        /// Token name (e.g., "Laptop", "Front desk")
        #[arg(short, long)]
        name: Option<String>,

        /// Custom token value (optional, auto-generated if not provided)
        #[arg(short, long)]
        token: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all tokens
    List,

    /// Revoke a token
    Revoke {
        /// Token name or ID to revoke
        name_or_id: String,
    },
}

/// Store management subcommands.
#[derive(Subcommand)]
enum StoreAction {
    /// Create a store owned by a user
    Create {
        /// Owner user id
        #[arg(short, long)]
        user: String,

        /// Store name
        #[arg(short, long)]
        name: String,
    },

    /// List stores
    List {
        /// Only stores owned by this user
        #[arg(short, long)]
        user: Option<String>,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database at {}",
                mask_connection_string(&database_url)
            )
        })?;

    match cli.command {
        Commands::Token { action } => handle_token_action(action, &pool).await?,
        Commands::Store { action } => handle_store_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches token management commands.
async fn handle_token_action(action: TokenAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgTokenRepository::new(Arc::new(pool.clone())));

    match action {
        TokenAction::Create {
            user,
            name,
            token,
            yes,
        } => {
            let secret = std::env::var("TOKEN_SIGNING_SECRET")
                .context("TOKEN_SIGNING_SECRET must be set")?;
            let auth = AuthService::new(repo, secret);
            create_token(&auth, user, name, token, yes).await?;
        }
        TokenAction::List => list_tokens(repo.as_ref()).await?,
        TokenAction::Revoke { name_or_id } => revoke_token(repo.as_ref(), &name_or_id).await?,
    }

    Ok(())
}

/// Creates a new API token with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for user and token name (or use provided)
/// 2. Generate random token or use provided value
/// 3. Display token details with warning
/// 4. Confirm creation (unless `--yes` flag)
/// 5. Store the HMAC of the token
///
/// The raw token is displayed once and cannot be retrieved later.
async fn create_token(
    auth: &AuthService,
    user: Option<String>,
    name: Option<String>,
    token: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Create API Token".bright_blue().bold());
    println!();

    let user_id = match user {
        Some(u) => u,
        None => Input::new().with_prompt("User id").interact_text()?,
    };

    let token_name = match name {
        Some(n) => n,
        None => Input::new()
            .with_prompt("Token name")
            .with_initial_text("Dashboard")
            .interact_text()?,
    };

    let token_value = match token {
        Some(t) => {
            println!("{}", "Using provided token value".yellow());
            t
        }
        None => {
            println!("{}", "Generated new token".green());
            generate_token()
        }
    };

    println!();
    println!("{}", "Token details:".bright_white().bold());
    println!("  User:  {}", user_id.cyan());
    println!("  Name:  {}", token_name.cyan());
    println!("  Token: {}", token_value.bright_yellow().bold());
    println!();
    println!(
        "{}",
        "IMPORTANT: Save this token now! You won't be able to see it again."
            .red()
            .bold()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this token?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    auth.register_token(&user_id, &token_name, &token_value)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create token: {}", e))?;

    println!();
    println!("{}", "Token created successfully!".green().bold());
    println!();
    println!("{}", "Add this to your requests:".bright_white());
    println!(
        "  {}: Bearer {}",
        "Authorization".bright_cyan(),
        token_value.bright_yellow()
    );
    println!();
    println!("{}", "Or paste it on the dashboard login page.".bright_white());
    println!();

    Ok(())
}

/// Lists all API tokens with status indicators.
///
/// ```text
/// API Tokens
///
///   ID  User         Name                      Created              Status
///   1   user_1       Laptop                    2024-01-15 10:30     ACTIVE
/// ```
async fn list_tokens(repo: &dyn TokenRepository) -> Result<()> {
    println!("{}", "API Tokens".bright_blue().bold());
    println!();

    let tokens = repo
        .list_tokens()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list tokens: {}", e))?;

    if tokens.is_empty() {
        println!("{}", "  No tokens found".yellow());
        println!();
        println!(
            "  Create one with: {} admin token create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<12} {:<25} {:<20} {:<10}",
        "ID".bright_white().bold(),
        "User".bright_white().bold(),
        "Name".bright_white().bold(),
        "Created".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "-".repeat(75).bright_black());

    for token in &tokens {
        let status = if token.is_revoked() {
            "REVOKED".red()
        } else {
            "ACTIVE".green()
        };

        println!(
            "  {:<4} {:<12} {:<25} {:<20} {}",
            token.id.to_string().bright_black(),
            token.user_id,
            token.name.cyan(),
            token
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            status
        );
    }

    println!();
    println!(
        "  Total: {}",
        tokens.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Revokes a token by name or ID with confirmation prompt (default: No).
async fn revoke_token(repo: &dyn TokenRepository, name_or_id: &str) -> Result<()> {
    println!("{}", "Revoke API Token".bright_blue().bold());
    println!();

    let token = repo
        .find_by_name_or_id(name_or_id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Token not found")?;

    if token.is_revoked() {
        println!("{}", "This token is already revoked".yellow());
        return Ok(());
    }

    println!("  Token: {}", token.name.cyan());
    println!("  User:  {}", token.user_id);
    println!("  ID:    {}", token.id.to_string().bright_black());
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Revoke this token?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "Cancelled".red());
        return Ok(());
    }

    repo.revoke(token.id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to revoke token: {}", e))?;

    println!();
    println!("{}", "Token revoked successfully!".green().bold());
    println!();

    Ok(())
}

/// Dispatches store management commands.
async fn handle_store_action(action: StoreAction, pool: &PgPool) -> Result<()> {
    let stores = StoreService::new(Arc::new(PgStoreRepository::new(Arc::new(pool.clone()))));

    match action {
        StoreAction::Create { user, name } => {
            let store = stores
                .create_store(&name, &user)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create store: {}", e))?;

            println!("{}", "Store created successfully!".green().bold());
            println!("  ID:    {}", store.id.bright_yellow());
            println!("  Name:  {}", store.name.cyan());
            println!("  Owner: {}", store.user_id);
        }
        StoreAction::List { user } => {
            let list = match user {
                Some(user_id) => stores.list_for_user(&user_id).await,
                None => stores.list_all().await,
            }
            .map_err(|e| anyhow::anyhow!("Failed to list stores: {}", e))?;

            print_stores(&list);
        }
    }

    Ok(())
}

fn print_stores(stores: &[Store]) {
    println!("{}", "Stores".bright_blue().bold());
    println!();

    if stores.is_empty() {
        println!("{}", "  No stores found".yellow());
        return;
    }

    println!(
        "  {:<38} {:<25} {:<12} {:<20}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Owner".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "-".repeat(95).bright_black());

    for store in stores {
        println!(
            "  {:<38} {:<25} {:<12} {}",
            store.id.bright_black(),
            store.name.cyan(),
            store.user_id,
            store
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        stores.len().to_string().bright_white().bold()
    );
    println!();
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "Database connection OK".green().bold());
            println!("  PostgreSQL: {}", version.bright_white());
        }
    }

    Ok(())
}

/// Generates a cryptographically random token.
///
/// # Format
///
/// - Length: 48 characters
/// - Character set: A-Z, a-z, 0-9
fn generate_token() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const TOKEN_LEN: usize = 48;

    let mut rng = rand::rng();

    (0..TOKEN_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
