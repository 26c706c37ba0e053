use anyhow::Context;
use clap::Parser;
use neighborfit::config::{LoggingSettings, Settings};
use neighborfit::core::{MatchAnalytics, Matcher};
use neighborfit::models::{FindMatchesResponse, MatchSummary, NeighborhoodProfile, UserProfile};
use neighborfit::services::{InMemoryMatchStore, InMemoryNeighborhoodStore, MatchingService};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "neighborfit")]
#[command(about = "Rank neighborhoods for a user profile", long_about = None)]
struct Cli {
    /// Path to the user profile JSON
    #[arg(short, long)]
    user: PathBuf,

    /// Path to a JSON array of neighborhoods
    #[arg(short, long)]
    neighborhoods: PathBuf,

    /// Maximum number of matches to return (capped by matching.max_limit)
    #[arg(short, long)]
    limit: Option<usize>,

    /// Configuration file; defaults to config/default.toml and config/local.toml
    #[arg(short, long, env = "NEIGHBORFIT_CONFIG")]
    config: Option<PathBuf>,

    /// Score every neighborhood instead of the filtered candidates
    #[arg(long, default_value_t = false)]
    all: bool,

    /// Pretty-print the JSON output
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .context("Failed to load configuration")?;

    init_tracing(&settings.logging);

    info!("Starting NeighborFit matcher...");

    let user: UserProfile = read_json(&cli.user)?;
    let neighborhoods: Vec<NeighborhoodProfile> = read_json(&cli.neighborhoods)?;

    info!("Loaded user {} and {} neighborhoods", user.display_name(), neighborhoods.len());

    let incomplete = neighborhoods.iter().filter(|n| !n.is_eligible_for_matching()).count();
    if incomplete > 0 {
        tracing::warn!("{} neighborhoods lack the fields needed by the candidate filter", incomplete);
    }

    let store = Arc::new(
        InMemoryNeighborhoodStore::try_new(neighborhoods)
            .with_context(|| format!("Invalid neighborhoods in {}", cli.neighborhoods.display()))?,
    );
    let sink = Arc::new(InMemoryMatchStore::new());

    let matcher = Matcher::new(settings.scoring_weights());
    info!("Matcher initialized with weights: {:?}", matcher.weights());

    let service = MatchingService::new(store.clone(), sink.clone(), matcher, settings.filter_settings());
    let limit = settings.effective_limit(cli.limit);

    let request = async {
        if cli.all {
            service.find_matches_across_all(&user, limit).await
        } else {
            service.find_matches_for_user(&user, limit).await
        }
    };

    let result = tokio::time::timeout(Duration::from_secs(settings.matching.timeout_secs), request)
        .await
        .context("Matching timed out")??;

    if result.skipped_malformed > 0 {
        tracing::warn!("{} neighborhood records were malformed and scored as zero", result.skipped_malformed);
    }

    let mut matches = Vec::with_capacity(result.matches.len());
    for m in &result.matches {
        if let Some(n) = store.get(&m.neighborhood_id).await {
            matches.push(MatchSummary::new(m, &n));
        }
    }

    let response = FindMatchesResponse {
        user_id: user.id.clone(),
        matches,
        total_candidates: result.total_candidates,
        analytics: MatchAnalytics::from_matches(&sink.all().await),
    };

    let output = if cli.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", output);

    Ok(())
}

/// Logs go to stderr so stdout carries only the JSON response
fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {}", path.display()))
}
