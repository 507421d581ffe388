//! gitshelf diagnostic CLI
//!
//! Renders a project listing from a JSON snapshot of the read-model, the
//! same way the web front-end would: aggregate projects, apply the filter
//! query, and mark the repositories a given user could not see. Useful for
//! checking what a filter link or a permission change actually does without
//! driving the web layer.

use anyhow::{Context, bail};
use clap::Parser;
use gitshelf::access_control::{FeedGate, RestrictionGate};
use gitshelf::config::{LogFormat, load_config};
use gitshelf::listing::{
    FilterQuery, InMemoryTeamDirectory, ProjectFilterEngine, SortOrder, project_menu_entries,
};
use gitshelf::model::{RepositoryModel, TeamModel, UserModel, aggregate_projects};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Render a filtered project listing from a read-model snapshot
#[derive(Parser, Debug)]
#[command(name = "gitshelf")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a JSON read-model snapshot
    snapshot: PathBuf,

    /// Path to configuration file
    #[arg(short, long, env = "GITSHELF_CONFIG")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error); overrides configuration
    #[arg(long, env = "GITSHELF_LOG_LEVEL")]
    log_level: Option<String>,

    /// Name filter regex, matched anywhere within project names
    #[arg(long)]
    name: Option<String>,

    /// Comma-separated team names
    #[arg(long)]
    teams: Option<String>,

    /// Recency window in days (0 disables)
    #[arg(long, default_value_t = 0)]
    days_back: i64,

    /// Sort most recently active first instead of by name
    #[arg(long)]
    recent: bool,

    /// Evaluate repository access as this snapshot user (anonymous otherwise)
    #[arg(long)]
    user: Option<String>,

    /// Show the navigation menu subset instead of the full listing
    #[arg(long)]
    menu: bool,
}

/// Read-model snapshot: what the persistence and auth layers would supply
#[derive(Debug, Deserialize)]
struct Snapshot {
    repositories: Vec<RepositoryModel>,
    #[serde(default)]
    teams: Vec<TeamModel>,
    #[serde(default)]
    users: Vec<UserModel>,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Load configuration
    let config = load_config(args.config.as_deref())?;

    // Initialize logging: RUST_LOG wins, then --log-level, then configuration
    let level = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));
    let registry = tracing_subscriber::registry().with(filter);
    match config.logging.format {
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        snapshot = %args.snapshot.display(),
        "Rendering listing"
    );

    // Read the snapshot
    let raw = std::fs::read_to_string(&args.snapshot)
        .with_context(|| format!("failed to read snapshot {}", args.snapshot.display()))?;
    let snapshot: Snapshot = serde_json::from_str(&raw).context("invalid snapshot")?;

    let user = match &args.user {
        Some(username) => match snapshot.users.iter().find(|u| &u.username == username) {
            Some(user) => user.clone(),
            None => bail!("user '{}' not present in snapshot", username),
        },
        None => UserModel::anonymous(),
    };

    let repositories: HashMap<&str, &RepositoryModel> = snapshot
        .repositories
        .iter()
        .map(|repository| (repository.name.as_str(), repository))
        .collect();

    // Aggregate and filter
    let projects = aggregate_projects(&snapshot.repositories);
    let directory = InMemoryTeamDirectory::new(snapshot.teams.clone());
    let engine = ProjectFilterEngine::from_config(directory, &config.listing);

    let mut query = FilterQuery::none().with_days_back(args.days_back);
    if let Some(name) = &args.name {
        query = query.with_name_pattern(name.clone());
    }
    if let Some(teams) = &args.teams {
        query = query.with_teams(teams.clone());
    }

    if args.menu {
        let (entries, truncated) =
            project_menu_entries(&projects, config.listing.project_menu_limit);
        for project in &entries {
            println!("{}", project.display_name());
        }
        if truncated {
            println!("... all projects");
        }
        return Ok(());
    }

    let order = if args.recent {
        SortOrder::MostRecentFirst
    } else {
        SortOrder::DisplayName
    };
    let visible = engine.filter_with(&projects, &query, order, chrono::Utc::now())?;

    let gate = FeedGate;
    for project in &visible {
        println!(
            "{}  (last change {})",
            project.display_name(),
            project.last_change.format("%Y-%m-%d")
        );
        for name in &project.repositories {
            let Some(repository) = repositories.get(name.as_str()) else {
                continue;
            };
            let marker = if gate.requires_authentication(repository)
                && !gate.evaluate(repository, Some(&user), name).is_allowed()
            {
                "  [restricted]"
            } else {
                ""
            };
            println!("    {}{}", name, marker);
        }
    }
    info!(projects = visible.len(), "Listing rendered");

    Ok(())
}
