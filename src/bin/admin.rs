//! CLI administration tool for bloglist.
//!
//! Provides commands for managing users and inspecting the blog list
//! without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create a user
//! cargo run --bin admin -- user create --username irmeli --name "Irmeli Testaaja"
//!
//! # List all users
//! cargo run --bin admin -- user list
//!
//! # View list statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use bloglist::domain::list_stats;
use bloglist::domain::repositories::{BlogRepository, UserRepository};
use bloglist::infrastructure::persistence::{PgBlogRepository, PgUserRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing bloglist.
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
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show list statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create a new user
    Create {
        /// Username (prompted if not provided)
        #[arg(short, long)]
        username: Option<String>,

        /// Display name (prompted if not provided)
        #[arg(short, long)]
        name: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all users
    List,
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

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgUserRepository::new(Arc::new(pool.clone())));

    match action {
        UserAction::Create {
            username,
            name,
            yes,
        } => {
            let username: String = match username {
                Some(u) => u,
                None => Input::new().with_prompt("Username").interact_text()?,
            };

            let name: String = match name {
                Some(n) => n,
                None => Input::new().with_prompt("Display name").interact_text()?,
            };

            let password = Password::new()
                .with_prompt("Password")
                .with_confirmation("Confirm password", "Passwords do not match")
                .interact()?;

            if username.len() < 3 {
                anyhow::bail!("username should be at least 3 characters");
            }
            if password.len() < 3 {
                anyhow::bail!("password should be at least 3 characters");
            }

            if !yes {
                let proceed = Confirm::new()
                    .with_prompt(format!("Create user '{}'?", username))
                    .default(true)
                    .interact()?;
                if !proceed {
                    println!("{}", "Aborted".yellow());
                    return Ok(());
                }
            }

            let password_hash = bcrypt::hash(&password, bcrypt::DEFAULT_COST)?;

            let user = repo
                .create(bloglist::domain::entities::NewUser {
                    username,
                    name,
                    password_hash,
                })
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create user: {e}"))?;

            println!(
                "{} user '{}' (id {})",
                "Created".green().bold(),
                user.username,
                user.id
            );
        }

        UserAction::List => {
            let users = repo
                .list_all()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list users: {e}"))?;

            if users.is_empty() {
                println!("{}", "No users".yellow());
                return Ok(());
            }

            println!("{:<6} {:<20} {:<24} CREATED", "ID", "USERNAME", "NAME");
            for user in users {
                println!(
                    "{:<6} {:<20} {:<24} {}",
                    user.id,
                    user.username,
                    user.name,
                    user.created_at.format("%Y-%m-%d %H:%M:%S")
                );
            }
        }
    }

    Ok(())
}

/// Prints aggregate statistics over the stored blog list.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    let repo = PgBlogRepository::new(Arc::new(pool.clone()));

    let blogs = repo
        .list_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load blogs: {e}"))?;

    println!("{}", "Blog list statistics".bold());
    println!("  Blogs:       {}", blogs.len());
    println!("  Total likes: {}", list_stats::total_likes(&blogs));

    match list_stats::favorite_blog(&blogs) {
        Some(blog) => println!(
            "  Favorite:    {} by {} ({} likes)",
            blog.title.cyan(),
            blog.author,
            blog.likes
        ),
        None => println!("  Favorite:    {}", "-".dimmed()),
    }

    match list_stats::most_blogs(&blogs) {
        Some(top) => println!("  Most blogs:  {} ({})", top.author.cyan(), top.blogs),
        None => println!("  Most blogs:  {}", "-".dimmed()),
    }

    match list_stats::most_likes(&blogs) {
        Some(top) => println!("  Most likes:  {} ({})", top.author.cyan(), top.likes),
        None => println!("  Most likes:  {}", "-".dimmed()),
    }

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            sqlx::query_scalar::<_, i32>("SELECT 1")
                .fetch_one(pool)
                .await
                .context("Database check failed")?;
            println!("{}", "Database connection OK".green().bold());
        }

        DbAction::Info => {
            let version = sqlx::query_scalar::<_, String>("SELECT version()")
                .fetch_one(pool)
                .await?;

            let users = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
                .fetch_one(pool)
                .await?;

            let blogs = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM blogs")
                .fetch_one(pool)
                .await?;

            println!("{}", "Database info".bold());
            println!("  Server: {}", version);
            println!("  Users:  {}", users);
            println!("  Blogs:  {}", blogs);
        }
    }

    Ok(())
}
