use dotenv::dotenv;
use log::info;
use std::fs::OpenOptions;
use std::sync::mpsc;

mod app;
mod config;
mod fetcher;
mod models;
mod services;
mod ui;
mod utils;

use crate::config::Config;
use crate::services::api::ApiClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv().ok();
    let config = Config::from_env();
    init_logging(&config.log_file)?;

    info!("Starting customer dashboard");
    info!("API base URL: {}", config.api_base_url);

    let api = ApiClient::new(&config.api_base_url);
    let (tx, rx) = mpsc::channel();

    // Both fetches run independently; the UI starts immediately and fills in
    // each collection as its event arrives.
    fetcher::spawn_fetches(api, tx);

    tokio::task::spawn_blocking(move || ui::run(rx)).await??;

    info!("Session ended");
    Ok(())
}

// The alternate screen owns the terminal while the dashboard runs, so the
// logger writes to a file instead of stderr.
fn init_logging(path: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
