// gprof-client library - public API

// Re-export error types
pub mod error;
pub use error::{GprofError, Result};

// Module declarations
pub mod commands;
pub mod core;
pub mod ui;
pub mod widgets;

// Re-export commonly used types
pub use crate::core::config::Config;
pub use crate::core::profile::Profile;

use std::fs::OpenOptions;
use std::path::Path;

/// Initialize logging.
///
/// The dashboard owns the terminal, so with a log file everything from `info`
/// up goes there; without one only errors reach stderr. `RUST_LOG` overrides
/// the level in both cases.
pub fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::new();

    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .filter_level(log::LevelFilter::Info)
                .target(env_logger::Target::Pipe(Box::new(file)));
        }
        None => {
            builder.filter_level(log::LevelFilter::Error);
        }
    }

    builder.parse_default_env();
    // A logger may already be installed (tests, embedding); keep the first one.
    let _ = builder.try_init();
    Ok(())
}
