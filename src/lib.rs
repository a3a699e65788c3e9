pub mod cli;
pub mod core;

use crate::cli::ui;
use crate::core::config::AppConfig;
use crate::core::currency::TableRateProvider;
use crate::core::dataset;
use crate::core::record::SuburbSelector;
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Analysis commands the library can run against a loaded dataset.
#[derive(Debug, Clone)]
pub enum AppCommand {
    Summary { suburb: String },
    LandSize { suburb: String },
    Distribution { suburb: String, currency: Option<String> },
    Trend,
    Locate { price: f64, suburb: String },
}

pub fn run_command(
    command: AppCommand,
    config_path: Option<&str>,
    data_path: Option<&str>,
) -> Result<()> {
    info!("Property analyser starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let data_file = data_path
        .map(str::to_string)
        .or_else(|| config.data_file.clone())
        .context("No data file configured; pass --data or set data_file in the config")?;

    let spinner = ui::new_spinner("Loading property records...");
    let store = dataset::load_records(&data_file);
    spinner.finish_and_clear();
    let store = store?;
    info!("Loaded {} property records", store.len());

    match command {
        AppCommand::Summary { suburb } => {
            cli::summary::run(&store, &SuburbSelector::parse(&suburb))
        }
        AppCommand::LandSize { suburb } => {
            cli::landsize::run(&store, &SuburbSelector::parse(&suburb))
        }
        AppCommand::Distribution { suburb, currency } => {
            let rate_provider = TableRateProvider::new(config.rates.clone());
            cli::distribution::run(
                &store,
                &SuburbSelector::parse(&suburb),
                currency.as_deref().unwrap_or(&config.currency),
                &rate_provider,
            )
        }
        AppCommand::Trend => cli::trend::run(&store),
        AppCommand::Locate { price, suburb } => cli::locate::run(&store, price, &suburb),
    }
}
