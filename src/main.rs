use anyhow::Result;
use dotenvy::dotenv;
use meeting_scheduler::infrastructure::config::PreviewConfig;
use meeting_scheduler::infrastructure::preview::run_preview;
use meeting_scheduler::utils;
use tracing::error;

fn main() -> Result<()> {
    dotenv().ok();
    let config = PreviewConfig::from_env()?;
    utils::setup_logging(config.log_level)?;

    if let Err(e) = run_preview(&config) {
        error!("Error running preview: {:#}", e);
        return Err(e);
    }
    Ok(())
}
