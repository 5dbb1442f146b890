// Command handlers module
pub mod dashboard;
pub mod snapshot;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::core::config::Config;

/// Configuration plus the resolved template path for one run
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub config: Config,
    pub template_path: PathBuf,
}

impl RunSettings {
    /// Load the config named on the command line (or the default one) and
    /// resolve the template path: `--template` wins over the config file.
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let config_path = matches
            .get_one::<PathBuf>("config")
            .cloned()
            .unwrap_or_else(Config::default_path);

        let config = Config::load(&config_path)
            .with_context(|| format!("Failed to load configuration from {:?}", config_path))?;
        log::info!("loaded configuration from {:?}", config_path);

        let template_path = matches
            .get_one::<PathBuf>("template")
            .cloned()
            .unwrap_or_else(|| config.template_path());

        Ok(Self {
            config,
            template_path,
        })
    }
}
