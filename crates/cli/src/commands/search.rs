use activity_log_core::AppConfig;
use activity_log_http::SearchResponse;
use anyhow::Result;

use crate::{build_service, open_store};

pub(crate) async fn run_search(config: &AppConfig, query: &str, limit: usize) -> Result<()> {
    let service = build_service(config)?;
    let results = service.search(query, limit).await?;
    println!("{}", serde_json::to_string_pretty(&SearchResponse::from(results))?);
    Ok(())
}

pub(crate) fn run_stats(config: &AppConfig) -> Result<()> {
    let store = open_store(config)?;
    let stats = store.stats()?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}

pub(crate) fn run_delete(config: &AppConfig, timestamp: &str) -> Result<()> {
    let store = open_store(config)?;
    if store.delete(timestamp)? {
        println!("Deleted activity {timestamp}");
    } else {
        println!("Activity not found: {timestamp}");
    }
    Ok(())
}
