//! growi-config CLI Binary
//!
//! Command-line interface for inspecting and editing resolved configuration.

use clap::Parser;
use growi_config::cli::{Cli, RunContext};
use growi_config::logging::init_logging;
use growi_config::settings::Settings;
use std::process;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let settings = match build_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load settings: {:#}", e);
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(Some(&settings.logging)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("growi-config starting");

    let context = match RunContext::new(settings) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error initializing run context: {}", e);
            eprintln!("{}", growi_config::cli::map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command).await {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", growi_config::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Settings from file and environment, then CLI flags on top.
fn build_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let mut settings = Settings::load(cli.settings.as_deref())?;

    if let Some(ref store) = cli.store {
        settings.store_path = store.clone();
    }
    if let Some(ref templates) = cli.templates {
        settings.templates_path = Some(templates.clone());
    }
    if cli.verbose {
        settings.logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        settings.logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        settings.logging.format = format.clone();
    }

    Ok(settings)
}
