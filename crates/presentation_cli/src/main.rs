//! Nimbus CLI
//!
//! Weather lookup for any city: an interactive terminal panel plus
//! one-shot search and theme commands.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;
mod tui;

use std::sync::Arc;

use anyhow::{Context, bail};
use application::{RenderState, SearchController, SearchPipeline, ThemeController, WeatherView};
use clap::Parser;
use cli::{Cli, Commands, ThemeAction};
use infrastructure::{
    AppConfig, FileSettingsStore, ForecastAdapter, GeocodingAdapter, LogTarget, init_telemetry,
};
use tracing::debug;

/// Log file written while the interactive panel owns the terminal
const LOG_FILE: &str = "nimbus.log";

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn build_pipeline(config: &AppConfig) -> anyhow::Result<SearchPipeline> {
    let geocoding = GeocodingAdapter::with_config(config.geocoding.clone())
        .context("Failed to create geocoding client")?;
    let forecast = ForecastAdapter::with_config(config.weather.clone())
        .context("Failed to create forecast client")?;

    Ok(SearchPipeline::new(Arc::new(geocoding), Arc::new(forecast)))
}

fn build_theme(config: &AppConfig) -> ThemeController {
    let store = FileSettingsStore::new(config.storage.resolve_data_dir());
    debug!(path = %store.path().display(), "Using settings file");
    ThemeController::new(Arc::new(store))
}

async fn search(config: &AppConfig, city: &str, json: bool) -> anyhow::Result<()> {
    let mut controller = SearchController::new(build_pipeline(config)?);

    controller.search(city).await;

    match controller.state() {
        RenderState::Content(report) => {
            if json {
                println!("{}", serde_json::to_string_pretty(report)?);
            } else if let WeatherView::Content(view) = WeatherView::project(controller.state()) {
                println!("{}", view.to_text());
            }
        },
        RenderState::Error(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
        RenderState::Idle | RenderState::Loading => bail!("City name must not be blank"),
    }

    Ok(())
}

fn theme(config: &AppConfig, action: ThemeAction) -> anyhow::Result<()> {
    let controller = build_theme(config);

    match action {
        ThemeAction::Show => println!("{}", controller.current()),
        ThemeAction::Toggle => {
            let theme = controller
                .toggle()
                .context("Failed to save theme preference")?;
            println!("Theme set to {theme}");
        },
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Interactive);

    let mut config =
        AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if cli.verbose > 0 {
        config.telemetry.log_filter = log_filter_from_verbosity(cli.verbose).to_string();
    }

    // The panel owns the terminal, so its logs go to a file.
    let target = if matches!(command, Commands::Interactive) {
        LogTarget::File(config.storage.resolve_data_dir().join(LOG_FILE))
    } else {
        LogTarget::Stderr
    };
    init_telemetry(&config.telemetry, &target).context("Failed to initialize logging")?;

    match command {
        Commands::Interactive => {
            let app = tui::App::new(
                SearchController::new(build_pipeline(&config)?),
                build_theme(&config),
            );
            tui::run(app).await?;
        },
        Commands::Search { city, json } => search(&config, &city.join(" "), json).await?,
        Commands::Theme { action } => theme(&config, action.unwrap_or(ThemeAction::Show))?,
    }

    Ok(())
}
