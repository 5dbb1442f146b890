//! Live dashboard command handler.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::ArgMatches;

use super::RunSettings;
use crate::core::fetch::HttpProfileSource;
use crate::core::scheduler::{RefreshScheduler, StopReason};
use crate::ui::dashboard::{Grid, TerminalEvents, TerminalScreen};
use crate::widgets::{WidgetOptions, WidgetRegistry};

/// Execute the dashboard command
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let RunSettings {
        config,
        template_path,
    } = RunSettings::from_matches(matches)?;

    let source = HttpProfileSource::new(&config, template_path)
        .context("Failed to set up profile fetcher")?;
    let screen = TerminalScreen::new(Grid::standard(), config.url.as_str(), config.refresh_interval_ms);
    let events = TerminalEvents::new(Duration::from_millis(config.refresh_interval_ms));
    let registry = WidgetRegistry::with_defaults(WidgetOptions {
        sample_count: config.query_parameters.sample_count,
    });

    let mut scheduler = RefreshScheduler::new(source, screen, events, registry);
    match scheduler.run().context("Dashboard stopped")? {
        StopReason::Quit => log::info!("dashboard closed by user"),
    }
    Ok(())
}
