// Core business logic module

pub mod config;
pub mod fetch;
pub mod profile;
pub mod query;
pub mod scheduler;

// Re-export commonly used items
pub use config::{Config, QueryParameters};
pub use fetch::{HttpProfileSource, ProfileSource};
pub use profile::{CpuSample, DiskUsage, FileEntry, Profile};
pub use query::QueryBuilder;
pub use scheduler::{
    EventSource, LoopEvent, RefreshScheduler, SchedulerState, Screen, StopReason,
};
