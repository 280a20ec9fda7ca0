use crate::config::{Config, DEFAULT_CONFIG_PATH};
use crate::errors::TrackerError;
use crate::fetcher::FlintClient;
use crate::notifier::{HttpTransport, Notifier};
use crate::store::JsonFileStore;
use crate::tracker::{run_cycle, BaselineState, CycleReport};
use std::path::PathBuf;

mod config;
mod domain;
mod errors;
mod fetcher;
mod notifier;
mod store;
mod tracker;

#[cfg(test)]
mod tests;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(report) => match report.baseline {
            BaselineState::Created => log::info!("First run, baseline created"),
            BaselineState::Replaced => {
                log::info!("Unreadable baseline replaced, nothing compared this run")
            }
            BaselineState::Compared => {
                log::info!("Done, {} change(s) reported", report.changed_fields.len())
            }
        },
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<CycleReport, TrackerError> {
    // 1️⃣ Configuration comes first; nothing touches the network without it.
    let config_path = std::env::var("TRACKER_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = Config::load(&config_path)?;

    // 2️⃣ Wire the collaborators from explicit config values.
    let source = FlintClient::new(&config.api_base_url, config.request_timeout())
        .map_err(|e| TrackerError::setup("store API client", e))?;
    let store = JsonFileStore::new(config.baseline_path.clone());
    let transport = HttpTransport::new(config.request_timeout())
        .map_err(|e| TrackerError::setup("webhook client", e))?;
    let notifier = Notifier::new(
        transport,
        config.webhook_url.clone(),
        config.site_base_url.clone(),
    );

    // 3️⃣ One poll cycle.
    run_cycle(
        &source,
        &store,
        &notifier,
        &config.modification,
        config.delivery_policy,
    )
}
