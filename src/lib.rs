pub mod cli;
pub mod core;
pub mod providers;

use crate::cli::prompt::{LinePrompter, TerminalPrompter};
use crate::core::config::{API_KEY_ENV, AppConfig};
use crate::providers::ExchangeRateApiProvider;
use anyhow::Result;
use std::io::{self, IsTerminal};
use tracing::{debug, info};

pub enum AppCommand {
    Convert,
}

/// Builds the rate provider, failing if no API key can be found.
pub fn rate_provider(
    config: &AppConfig,
    env_key: Option<String>,
) -> Result<ExchangeRateApiProvider> {
    let api_key = config.resolve_api_key(env_key)?;
    let base_url = config.exchangerate_api_url();
    debug!(base_url, "Using ExchangeRate-API provider");
    Ok(ExchangeRateApiProvider::new(base_url, &api_key))
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("fxconv starting...");

    let config = AppConfig::load(config_path)?;
    let provider = rate_provider(&config, std::env::var(API_KEY_ENV).ok())?;

    match command {
        AppCommand::Convert => {
            let mut stdout = io::stdout();
            if io::stdin().is_terminal() {
                cli::convert::run_session(&mut TerminalPrompter, &mut stdout, &provider).await
            } else {
                let mut prompter = LinePrompter::new(io::stdin().lock(), io::stdout());
                cli::convert::run_session(&mut prompter, &mut stdout, &provider).await
            }
        }
    }
}
