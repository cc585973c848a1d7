use activity_log_core::{AppConfig, LogActivity};
use anyhow::Result;

use crate::build_service;

pub(crate) async fn run(
    config: &AppConfig,
    timestamp: String,
    app_name: String,
    description: String,
) -> Result<()> {
    let service = build_service(config)?;
    let id = service.log_activity(LogActivity::new(timestamp, app_name, description)).await?;
    println!("Logged activity {id}");
    Ok(())
}
