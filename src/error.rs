use std::io;
use thiserror::Error;

/// Error type for the profiling dashboard
#[derive(Error, Debug)]
pub enum GprofError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("TUI error: {0}")]
    Tui(String),

    #[error("Widget error: {0}")]
    Widget(String),
}

/// Result type alias for the profiling dashboard
pub type Result<T> = std::result::Result<T, GprofError>;

impl GprofError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        GprofError::Config(msg.into())
    }

    /// Create a template error
    pub fn template<S: Into<String>>(msg: S) -> Self {
        GprofError::Template(msg.into())
    }

    /// Create a network error
    pub fn network<S: Into<String>>(msg: S) -> Self {
        GprofError::Network(msg.into())
    }

    pub fn tui<S: Into<String>>(msg: S) -> Self {
        GprofError::Tui(msg.into())
    }

    pub fn widget<S: Into<String>>(msg: S) -> Self {
        GprofError::Widget(msg.into())
    }

    /// Short name of the error kind, used in exit diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            GprofError::Io(_) => "IoError",
            GprofError::Config(_) => "ConfigError",
            GprofError::Template(_) => "TemplateError",
            GprofError::Network(_) => "NetworkError",
            GprofError::Decode(_) => "DecodeError",
            GprofError::Tui(_) => "TuiError",
            GprofError::Widget(_) => "WidgetError",
        }
    }
}
