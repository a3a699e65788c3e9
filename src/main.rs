use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use suburbia::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// Path to the property records CSV, overriding the configured one
    #[arg(short, long, global = true)]
    data: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for suburbia::AppCommand {
    fn from(cmd: Commands) -> suburbia::AppCommand {
        match cmd {
            Commands::Summary { suburb } => suburbia::AppCommand::Summary { suburb },
            Commands::LandSize { suburb } => suburbia::AppCommand::LandSize { suburb },
            Commands::Distribution { suburb, currency } => {
                suburbia::AppCommand::Distribution { suburb, currency }
            }
            Commands::Trend => suburbia::AppCommand::Trend,
            Commands::Locate { price, suburb } => suburbia::AppCommand::Locate { price, suburb },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display descriptive statistics for a suburb or the whole dataset
    Summary {
        /// Suburb name, or "all" for the whole dataset
        #[arg(short, long, default_value = "all")]
        suburb: String,
    },
    /// Display the average land size
    LandSize {
        /// Suburb name, or "all" for the whole dataset
        #[arg(short, long, default_value = "all")]
        suburb: String,
    },
    /// Chart the distribution of property values
    Distribution {
        /// Suburb name, or "all" for the whole dataset
        #[arg(short, long, default_value = "all")]
        suburb: String,
        /// Display currency, e.g. USD (defaults to the configured one)
        #[arg(long)]
        currency: Option<String>,
    },
    /// Chart the number of properties sold per year
    Trend,
    /// Check whether a price is listed in a suburb
    Locate {
        /// Exact sale price to search for
        price: f64,
        /// Suburb to search in
        #[arg(short, long)]
        suburb: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => setup(),
        Some(cmd) => suburbia::run_command(
            cmd.into(),
            cli.config_path.as_deref(),
            cli.data.as_deref(),
        ),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}

fn setup() -> anyhow::Result<()> {
    use anyhow::Context;

    let path = suburbia::core::config::AppConfig::default_config_path()?;

    if path.exists() {
        anyhow::bail!("Configuration file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let default_config = r#"---
data_file: "property_information.csv"

currency: "AUD"

rates:
  AUD: 1.0
  USD: 0.66
  INR: 54.25
  CNY: 4.72
  JPY: 93.87
  HKD: 5.12
  KRW: 860.92
  GBP: 0.51
  EUR: 0.60
  SGD: 0.88
"#;

    std::fs::write(&path, default_config)
        .with_context(|| format!("Failed to write config file to {}", path.display()))?;

    tracing::info!("Created default configuration at {}", path.display());
    Ok(())
}
