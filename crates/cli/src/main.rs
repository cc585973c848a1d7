//! `activity-log` binary: HTTP server plus one-shot log/search/stats commands.

mod commands;

use std::path::PathBuf;
use std::sync::Arc;

use activity_log_core::{AppConfig, SEARCH_RESULT_LIMIT};
use activity_log_embeddings::{Credential, OpenAiEmbedder};
use activity_log_service::ActivityService;
use activity_log_storage::ActivityStore;
use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "activity-log")]
#[command(about = "Timestamped activity log with semantic search", long_about = None)]
struct Cli {
    /// Directory holding the activity database (overrides ACTIVITY_LOG_DB_DIR)
    #[arg(long, global = true)]
    db_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        #[arg(short, long, default_value = "8000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Embed and store one activity
    Log { timestamp: String, app_name: String, description: String },
    /// Print the activities closest to a query
    Search {
        query: String,
        #[arg(short, long, default_value_t = SEARCH_RESULT_LIMIT)]
        limit: usize,
    },
    /// Print collection statistics
    Stats,
    /// Remove the activity logged under a timestamp
    Delete { timestamp: String },
}

pub(crate) fn load_config(db_dir: Option<PathBuf>) -> AppConfig {
    let mut config = AppConfig::from_env();
    if let Some(dir) = db_dir {
        config.store.db_dir = dir;
    }
    config
}

pub(crate) fn open_store(config: &AppConfig) -> Result<ActivityStore> {
    ActivityStore::open(&config.store)
        .with_context(|| format!("failed to open store at {}", config.store.db_path().display()))
}

pub(crate) fn build_service(config: &AppConfig) -> Result<ActivityService> {
    if config.api_key.is_none() {
        tracing::warn!(
            "OPENAI_API_KEY not set; embedding calls fail until a key is supplied via /set-api-key"
        );
    }
    let credential = Credential::from_optional(config.api_key.clone());
    let embedder = OpenAiEmbedder::new(&config.embedding, credential.clone())?;
    let store = open_store(config)?;
    tracing::info!(
        db = %config.store.db_path().display(),
        collection = %config.store.collection,
        model = %config.embedding.model,
        "activity store ready"
    );
    Ok(ActivityService::new(Arc::new(embedder), Arc::new(store), credential))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.db_dir);

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(&config, port, &host).await?,
        Commands::Log { timestamp, app_name, description } => {
            commands::log::run(&config, timestamp, app_name, description).await?;
        },
        Commands::Search { query, limit } => {
            commands::search::run_search(&config, &query, limit).await?;
        },
        Commands::Stats => commands::search::run_stats(&config)?,
        Commands::Delete { timestamp } => commands::search::run_delete(&config, &timestamp)?,
    }

    Ok(())
}
