//! CLI administration tool for star-birthdays.
//!
//! Manages the catalog (countries and categories), publication status of
//! stars, and performs database checks without going through the site.
//!
//! # Usage
//!
//! ```bash
//! # Add a country (prompts for missing values)
//! cargo run --bin admin -- country add --name "Россия" --slug russia
//!
//! # List categories
//! cargo run --bin admin -- category list
//!
//! # Hide a star from the site
//! cargo run --bin admin -- star unpublish anna-pavlova
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL` or the `DB_*` components.

use star_birthdays::application::services::{CatalogService, StarService};
use star_birthdays::config::Config;
use star_birthdays::infrastructure::persistence::{
    PgCategoryRepository, PgCountryRepository, PgStarRepository,
};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing star-birthdays.
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
    /// Manage countries
    Country {
        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Manage categories (industries)
    Category {
        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Manage stars
    Star {
        #[command(subcommand)]
        action: StarAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Shared subcommands for countries and categories.
#[derive(Subcommand)]
enum CatalogAction {
    /// Add an entry
    Add {
        /// Display name, e.g. "Россия" or "Кино"
        #[arg(short, long)]
        name: Option<String>,

        /// URL slug, e.g. "russia"
        #[arg(short, long)]
        slug: Option<String>,
    },

    /// List all entries
    List,
}

/// Star subcommands.
#[derive(Subcommand)]
enum StarAction {
    /// Make a star visible on the site
    Publish {
        /// Star slug
        slug: String,
    },

    /// Hide a star from the site
    Unpublish {
        /// Star slug
        slug: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
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

/// Which half of the catalog a [`CatalogAction`] applies to.
#[derive(Clone, Copy)]
enum CatalogKind {
    Country,
    Category,
}

impl CatalogKind {
    fn label(self) -> &'static str {
        match self {
            CatalogKind::Country => "country",
            CatalogKind::Category => "category",
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let pool = star_birthdays::server::connect(&config).await?;

    match cli.command {
        Commands::Country { action } => {
            handle_catalog_action(CatalogKind::Country, action, &pool).await?
        }
        Commands::Category { action } => {
            handle_catalog_action(CatalogKind::Category, action, &pool).await?
        }
        Commands::Star { action } => handle_star_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn catalog_service(pool: &PgPool) -> CatalogService {
    let pool = Arc::new(pool.clone());
    CatalogService::new(
        Arc::new(PgCountryRepository::new(pool.clone())),
        Arc::new(PgCategoryRepository::new(pool)),
    )
}

/// Dispatches country/category commands.
async fn handle_catalog_action(
    kind: CatalogKind,
    action: CatalogAction,
    pool: &PgPool,
) -> Result<()> {
    let service = catalog_service(pool);

    match action {
        CatalogAction::Add { name, slug } => add_catalog_entry(&service, kind, name, slug).await,
        CatalogAction::List => list_catalog(&service, kind).await,
    }
}

/// Adds a country or category, prompting for values not given as flags.
async fn add_catalog_entry(
    service: &CatalogService,
    kind: CatalogKind,
    name: Option<String>,
    slug: Option<String>,
) -> Result<()> {
    println!(
        "{}",
        format!("➕ Add {}", kind.label()).bright_blue().bold()
    );
    println!();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Name").interact_text()?,
    };

    let slug = match slug {
        Some(s) => s,
        None => Input::new().with_prompt("Slug").interact_text()?,
    };

    let (id, shown_name, shown_slug) = match kind {
        CatalogKind::Country => {
            let country = service
                .create_country(name, slug)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to add country: {}", e))?;
            (country.id, country.name, country.slug)
        }
        CatalogKind::Category => {
            let category = service
                .create_category(name, slug)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to add category: {}", e))?;
            (category.id, category.title, category.slug)
        }
    };

    println!(
        "{} {} ({}) id={}",
        "✅ Added".green().bold(),
        shown_name.cyan(),
        shown_slug.bright_black(),
        id
    );
    println!();

    Ok(())
}

/// Lists countries or categories.
///
/// # Output Format
///
/// ```text
/// 📋 Countries
///
///   ID  Name                           Slug
///   ──────────────────────────────────────────────────────
///   1   Россия                         russia
/// ```
async fn list_catalog(service: &CatalogService, kind: CatalogKind) -> Result<()> {
    let menu = service
        .menu()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load catalog: {}", e))?;

    let (heading, rows): (&str, Vec<(i64, String, String)>) = match kind {
        CatalogKind::Country => (
            "📋 Countries",
            menu.countries
                .into_iter()
                .map(|c| (c.id, c.name, c.slug))
                .collect(),
        ),
        CatalogKind::Category => (
            "📋 Categories",
            menu.categories
                .into_iter()
                .map(|c| (c.id, c.title, c.slug))
                .collect(),
        ),
    };

    println!("{}", heading.bright_blue().bold());
    println!();

    if rows.is_empty() {
        println!("{}", "  Nothing here yet".yellow());
        println!();
        println!(
            "  Add one with: {} admin {} add",
            "cargo run --bin".bright_cyan(),
            kind.label()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<30} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Slug".bright_white().bold()
    );
    println!("  {}", "─".repeat(56).bright_black());

    for (id, name, slug) in &rows {
        println!(
            "  {:<4} {:<30} {}",
            id.to_string().bright_black(),
            name.cyan(),
            slug.bright_black()
        );
    }

    println!();
    println!("  Total: {}", rows.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Publishes or hides a star.
async fn handle_star_action(action: StarAction, pool: &PgPool) -> Result<()> {
    let service = StarService::new(Arc::new(PgStarRepository::new(Arc::new(pool.clone()))));

    match action {
        StarAction::Publish { slug } => {
            service
                .set_published(&slug, true)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to publish '{}': {}", slug, e))?;
            println!("{} {}", "✅ Published".green().bold(), slug.cyan());
        }
        StarAction::Unpublish { slug, yes } => {
            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Hide '{}' from the site?", slug))
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "❌ Cancelled".red());
                    return Ok(());
                }
            }

            service
                .set_published(&slug, false)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to unpublish '{}': {}", slug, e))?;
            println!("{} {}", "✅ Hidden".green().bold(), slug.cyan());
        }
    }

    Ok(())
}

/// Displays catalog statistics.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let published: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM stars WHERE is_published = TRUE")
            .fetch_one(pool)
            .await?;

    let hidden: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM stars WHERE is_published = FALSE")
        .fetch_one(pool)
        .await?;

    let countries: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM countries")
        .fetch_one(pool)
        .await?;

    let categories: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
        .fetch_one(pool)
        .await?;

    println!(
        "  Published stars: {}",
        published.to_string().bright_green().bold()
    );
    println!(
        "  Hidden stars:    {}",
        hidden.to_string().bright_black().bold()
    );
    println!(
        "  Countries:       {}",
        countries.to_string().bright_green().bold()
    );
    println!(
        "  Categories:      {}",
        categories.to_string().bright_green().bold()
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
        }
    }

    Ok(())
}
