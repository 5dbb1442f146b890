//! One-shot fetch that prints the decoded profile as JSON (for scripting).

use anyhow::{Context, Result};
use clap::ArgMatches;

use super::RunSettings;
use crate::core::fetch::{HttpProfileSource, ProfileSource};

/// Execute the snapshot command
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let RunSettings {
        config,
        template_path,
    } = RunSettings::from_matches(matches)?;

    let mut source = HttpProfileSource::new(&config, template_path)
        .context("Failed to set up profile fetcher")?;
    let profile = source
        .fetch()
        .with_context(|| format!("Failed to fetch profile from {}", source.url()))?;

    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
}
