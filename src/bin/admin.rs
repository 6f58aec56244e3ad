//! CLI administration tool for news-articles.
//!
//! Inspects and removes stored articles and checks the database without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Show an article
//! cargo run --bin news-admin -- article show 5c40b0f1a7b11b0001e1d9a1
//!
//! # Delete an article (asks for confirmation unless -y is given)
//! cargo run --bin news-admin -- article delete 5c40b0f1a7b11b0001e1d9a1
//!
//! # List articles by author or keyword
//! cargo run --bin news-admin -- article author author6
//! cargo run --bin news-admin -- article keyword keywordx
//!
//! # Check database connection
//! cargo run --bin news-admin -- db check
//!
//! # Flatten a nested integer array (no database needed)
//! cargo run --bin news-admin -- flatten '[[1,2,[3]],4]'
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (see [`news_articles::config`]). `article` and `db`
//! require `DATABASE_URL` or the `DB_HOST` components; pending migrations are
//! applied on connect.

use news_articles::application::services::ArticleService;
use news_articles::config::load_from_env;
use news_articles::domain::entities::Article;
use news_articles::domain::repositories::ArticleStore;
use news_articles::domain::validation::ValidationEngine;
use news_articles::infrastructure::persistence::PgArticleStore;
use news_articles::server::connect_database;
use news_articles::utils::array_flattener::flatten_json;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing news-articles.
#[derive(Parser)]
#[command(name = "news-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect and delete articles
    Article {
        #[command(subcommand)]
        action: ArticleAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Flatten a nested JSON integer array
    Flatten {
        /// JSON array, e.g. '[[1,2,[3]],4]'
        json: String,
    },
}

/// Article subcommands.
#[derive(Subcommand)]
enum ArticleAction {
    /// Show all details of an article
    Show {
        /// Article id
        id: String,
    },

    /// Delete an article
    Delete {
        /// Article id
        id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List articles of an author
    Author {
        /// Author name (exact match)
        name: String,
    },

    /// List articles tagged with a keyword
    Keyword {
        /// Keyword (exact match)
        word: String,
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

    match cli.command {
        Commands::Article { action } => handle_article_action(action, &connect().await?).await?,
        Commands::Db { action } => handle_db_action(action, &connect().await?).await?,
        Commands::Flatten { json } => handle_flatten(&json)?,
    }

    Ok(())
}

/// Connects to the database configured for the server.
async fn connect() -> Result<PgPool> {
    let config = load_from_env()?;
    let database_url = config.require_database_url()?;

    connect_database(&config, database_url).await
}

/// Dispatches article commands.
async fn handle_article_action(action: ArticleAction, pool: &PgPool) -> Result<()> {
    let store: Arc<dyn ArticleStore> = Arc::new(PgArticleStore::new(Arc::new(pool.clone())));
    let service = ArticleService::new(store, ValidationEngine::new());

    match action {
        ArticleAction::Show { id } => {
            let article = service
                .find_by_id(&id)
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;
            print_article(&article);
        }
        ArticleAction::Delete { id, yes } => {
            delete_article(&service, &id, yes).await?;
        }
        ArticleAction::Author { name } => {
            let articles = service
                .find_by_author(&name)
                .await
                .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;
            print_article_list(&format!("Articles by {}", name), &articles);
        }
        ArticleAction::Keyword { word } => {
            let articles = service
                .find_by_keyword(&word)
                .await
                .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;
            print_article_list(&format!("Articles tagged {}", word), &articles);
        }
    }

    Ok(())
}

/// Deletes an article after showing it.
///
/// Requires confirmation (default: No) unless `--yes` is given.
async fn delete_article(service: &ArticleService, id: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete Article".bright_blue().bold());
    println!();

    let article = service
        .find_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    print_article(&article);

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this article?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete article: {}", e))?;

    println!();
    println!("{}", "✅ Article deleted".green().bold());
    println!();

    Ok(())
}

fn print_article(article: &Article) {
    let published = article
        .publish_date
        .map(|date| date.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string());

    println!("  Id:          {}", article.id().unwrap_or("-").bright_black());
    println!("  Header:      {}", article.header.cyan().bold());
    println!("  Description: {}", article.short_description);
    println!("  Published:   {}", published.bright_white());
    println!("  Authors:     {}", article.authors.join(", ").cyan());
    println!("  Keywords:    {}", article.keywords.join(", ").cyan());
    println!();
    println!("{}", article.text);
    println!();
}

/// Prints a table of articles.
///
/// # Output Format
///
/// ```text
/// 📋 Articles by author6
///
///   Id                         Published          Header
///   ───────────────────────────────────────────────────────────────────
///   5c40b0f1a7b11b0001e1d9a1   2019-01-10 00:00   header1111
/// ```
fn print_article_list(title: &str, articles: &[Article]) {
    println!("{}", format!("📋 {}", title).bright_blue().bold());
    println!();

    if articles.is_empty() {
        println!("{}", "  No articles found".yellow());
        return;
    }

    println!(
        "  {:<26} {:<18} {}",
        "Id".bright_white().bold(),
        "Published".bright_white().bold(),
        "Header".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for article in articles {
        let published = article
            .publish_date
            .map(|date| date.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());

        println!(
            "  {:<26} {:<18} {}",
            article.id().unwrap_or("-").bright_black(),
            published,
            article.header.cyan()
        );
    }

    println!();
    println!(
        "  Total: {}",
        articles.len().to_string().bright_white().bold()
    );
    println!();
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;
            println!("{}", "✅ Database connection OK".green().bold());

            let count = PgArticleStore::new(Arc::new(pool.clone()))
                .count()
                .await
                .context("Failed to count articles")?;
            println!(
                "  Articles: {}",
                count.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}

/// Prints the flattened integers of a nested JSON array.
fn handle_flatten(json: &str) -> Result<()> {
    let flat = flatten_json(json).context("Failed to flatten input")?;

    let rendered: Vec<String> = flat.iter().map(i64::to_string).collect();
    println!("[{}]", rendered.join(", ").bright_green());

    Ok(())
}
