//! CLI administration tool for url-alias-resolver.
//!
//! Resolves content URLs and inspects a content snapshot without starting
//! the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Resolve the URLs of node 1100 as seen from a request to site.example
//! cargo run --bin admin -- urls 1100 --current http://site.example/
//!
//! # Validate the snapshot and print a summary
//! cargo run --bin admin -- snapshot check
//!
//! # List every aliased node with its alternate URLs
//! cargo run --bin admin -- snapshot aliases
//! ```
//!
//! # Environment Variables
//!
//! Reads the same variables as the server (see `url_alias_resolver::config`);
//! `CONTENT_SNAPSHOT` is overridden by `--snapshot`.

use url_alias_resolver::application::services::URL_ALIAS_PROPERTY;
use url_alias_resolver::config::Config;
use url_alias_resolver::infrastructure::snapshot::ContentSnapshot;
use url_alias_resolver::state::AppState;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use url::Url;

/// CLI tool for url-alias-resolver.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Snapshot file (defaults to CONTENT_SNAPSHOT)
    #[arg(short, long, global = true)]
    snapshot: Option<String>,

    /// Treat alias lookup as enabled regardless of CONTENT_FINDERS
    #[arg(long, global = true)]
    enable_alias: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Resolve the URLs of a content node
    Urls {
        /// Content node id
        id: i64,

        /// Absolute URI of the request the lookup is made for
        #[arg(short, long, default_value = "http://localhost/")]
        current: String,
    },

    /// Snapshot operations
    Snapshot {
        #[command(subcommand)]
        action: SnapshotAction,
    },
}

/// Snapshot subcommands.
#[derive(Subcommand)]
enum SnapshotAction {
    /// Validate the snapshot and print a summary
    Check,

    /// List aliased nodes with their alternate URLs
    Aliases {
        /// Absolute URI of the request the lookup is made for
        #[arg(short, long, default_value = "http://localhost/")]
        current: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(path) = cli.snapshot {
        config.content_snapshot = path;
    }
    config.validate()?;

    let snapshot = ContentSnapshot::load(&config.content_snapshot)
        .await
        .with_context(|| format!("Failed to load snapshot '{}'", config.content_snapshot))?;

    let mut alias_options = config.alias_url_options();
    alias_options.enabled |= cli.enable_alias;
    let state = AppState::from_snapshot(&snapshot, alias_options, false);

    match cli.command {
        Commands::Urls { id, current } => resolve_urls(&state, id, &current).await?,
        Commands::Snapshot { action } => match action {
            SnapshotAction::Check => check_snapshot(&config, &snapshot),
            SnapshotAction::Aliases { current } => list_aliases(&state, &snapshot, &current).await?,
        },
    }

    Ok(())
}

fn parse_current(current: &str) -> Result<Url> {
    Url::parse(current).with_context(|| format!("Invalid --current URI '{current}'"))
}

/// Prints the primary and alternate URLs of one node.
async fn resolve_urls(state: &AppState, id: i64, current: &str) -> Result<()> {
    let current = parse_current(current)?;

    let node = state
        .url_service
        .ensure_exists(id)
        .await
        .map_err(|e| anyhow::anyhow!("Lookup failed: {}", e))?;

    println!("{}", "🔗 Content URLs".bright_blue().bold());
    println!();
    println!("  Node:    {} {}", node.id.to_string().bright_black(), node.name.cyan());
    println!("  Current: {}", current.as_str().bright_black());
    println!();

    match state.url_service.url(id, &current).await {
        Some(url) => println!("  Primary: {}", url.green()),
        None => println!("  Primary: {}", "none".bright_black()),
    }

    let others = state.url_service.other_urls(id, &current).await;
    if others.is_empty() {
        println!("  Other:   {}", "none".bright_black());
    } else {
        for url in &others {
            println!("  Other:   {}", url.bright_yellow());
        }
    }

    if !state.alias_lookup_enabled {
        println!();
        println!(
            "{}",
            "⚠️  Alias lookup is disabled (see CONTENT_FINDERS, or pass --enable-alias)".yellow()
        );
    }
    println!();

    Ok(())
}

/// Prints snapshot counts. The snapshot has already passed validation.
fn check_snapshot(config: &Config, snapshot: &ContentSnapshot) {
    let roots = snapshot.nodes.iter().filter(|n| n.is_root()).count();
    let aliased = snapshot
        .nodes
        .iter()
        .filter(|n| {
            n.property(URL_ALIAS_PROPERTY)
                .is_some_and(|a| !a.trim().is_empty())
        })
        .count();
    let wildcards = snapshot.domains.iter().filter(|d| d.is_wildcard).count();

    println!("{}", "📦 Snapshot".bright_blue().bold());
    println!();
    println!("  File:      {}", config.content_snapshot.cyan());
    println!("  Nodes:     {}", snapshot.nodes.len().to_string().bright_white().bold());
    println!("  Roots:     {}", roots);
    println!("  Aliased:   {}", aliased);
    println!(
        "  Domains:   {} ({} wildcard)",
        snapshot.domains.len().to_string().bright_white().bold(),
        wildcards
    );
    println!();
    println!("{}", "✅ Snapshot is valid".green().bold());
    println!();
}

/// Lists every node carrying an alias with the URLs it resolves to.
async fn list_aliases(state: &AppState, snapshot: &ContentSnapshot, current: &str) -> Result<()> {
    let current = parse_current(current)?;

    println!("{}", "📋 Aliased Nodes".bright_blue().bold());
    println!();

    let aliased: Vec<_> = snapshot
        .nodes
        .iter()
        .filter_map(|n| {
            n.property(URL_ALIAS_PROPERTY)
                .filter(|a| !a.trim().is_empty())
                .map(|a| (n, a))
        })
        .collect();

    if aliased.is_empty() {
        println!("{}", "  No aliased nodes found".yellow());
        println!();
        return Ok(());
    }

    println!(
        "  {:<8} {:<24} {:<24} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Alias".bright_white().bold(),
        "URLs".bright_white().bold()
    );
    println!("  {}", "─".repeat(90).bright_black());

    for (node, alias) in &aliased {
        let urls = state.url_service.other_urls(node.id, &current).await;
        println!(
            "  {:<8} {:<24} {:<24} {}",
            node.id.to_string().bright_black(),
            node.name.cyan(),
            alias,
            urls.join(", ").bright_yellow()
        );
    }

    println!();
    println!("  Total: {}", aliased.len().to_string().bright_white().bold());
    println!();

    Ok(())
}
