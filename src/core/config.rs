use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GprofError, Result};

pub const DEFAULT_CONFIG_FILE: &str = "config.toml";
pub const DEFAULT_TEMPLATE_PATH: &str = "./template/template.json";

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_REFRESH_INTERVAL_MS: u64 = 1000;

/// Dashboard configuration, loaded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Profiling endpoint the query is POSTed to
    pub url: String,
    /// Values substituted into the query template
    #[serde(rename = "gq_param", alias = "query_parameters")]
    pub query_parameters: QueryParameters,
    /// Request timeout for a single fetch
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Query template location (the CLI flag wins over this)
    #[serde(default)]
    pub template_path: Option<PathBuf>,
    #[serde(default = "default_refresh_interval_ms")]
    pub refresh_interval_ms: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParameters {
    #[serde(default)]
    pub disk_path: String,
    #[serde(default)]
    pub file_path: String,
    /// Number of samples requested and number of rows shown per list panel
    #[serde(rename = "num", alias = "sample_count")]
    pub sample_count: usize,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_refresh_interval_ms() -> u64 {
    DEFAULT_REFRESH_INTERVAL_MS
}

impl Config {
    /// Load and validate the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|e| {
            GprofError::config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        Self::from_toml_str(&data).map_err(|e| match e {
            GprofError::Config(msg) => GprofError::config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(s).map_err(|e| GprofError::config(e.message().to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Pick the config file to use when none was given on the command line.
    ///
    /// `./config.toml` wins; otherwise the per-user config directory is tried.
    pub fn default_path() -> PathBuf {
        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        if local.exists() {
            return local;
        }

        dirs::config_dir()
            .map(|dir| dir.join("gprof-client").join(DEFAULT_CONFIG_FILE))
            .filter(|path| path.exists())
            .unwrap_or(local)
    }

    /// Template path from the config file, falling back to the built-in default.
    pub fn template_path(&self) -> PathBuf {
        self.template_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE_PATH))
    }

    fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(GprofError::config("url must be non-empty"));
        }

        let parsed = url::Url::parse(&self.url)
            .map_err(|e| GprofError::config(format!("url {:?} is invalid: {}", self.url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(GprofError::config(format!(
                "url must use http or https, got {:?}",
                parsed.scheme()
            )));
        }

        if self.query_parameters.sample_count == 0 {
            return Err(GprofError::config("gq_param.num must be > 0"));
        }
        if self.timeout_secs == 0 {
            return Err(GprofError::config("timeout_secs must be > 0"));
        }
        if self.refresh_interval_ms == 0 {
            return Err(GprofError::config("refresh_interval_ms must be > 0"));
        }

        Ok(())
    }
}
