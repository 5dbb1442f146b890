// Terminal UI and formatting module

pub mod dashboard;
pub mod formatters;

// Re-export commonly used items for cleaner imports
pub use formatters::{format_bytes, format_clock, format_interval};
