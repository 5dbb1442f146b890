use serde::{Deserialize, Deserializer, Serialize};

/// One decoded response from the profiling endpoint.
///
/// Sections missing from the response (or sent as `null`) decode as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cpu: Vec<CpuSample>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub file: Vec<FileEntry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub disk: Vec<DiskUsage>,
}

/// CPU time split for one sampling instant, in percent
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CpuSample {
    #[serde(default)]
    pub user: f64,
    #[serde(default)]
    pub system: f64,
    #[serde(default)]
    pub idle: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    #[serde(default)]
    pub name: String,
    /// Size in bytes
    #[serde(default)]
    pub size: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiskUsage {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub used: u64,
    #[serde(default)]
    pub free: u64,
    #[serde(default, alias = "usedPercent")]
    pub used_percent: f64,
}

impl Profile {
    pub fn is_empty(&self) -> bool {
        self.cpu.is_empty() && self.file.is_empty() && self.disk.is_empty()
    }
}

impl CpuSample {
    /// Busy share of the sample, clamped to 0..=100
    pub fn utilization(&self) -> f64 {
        (self.user + self.system).clamp(0.0, 100.0)
    }
}

impl DiskUsage {
    /// Used share in percent, derived from byte counts when the server sent none
    pub fn usage_percent(&self) -> f64 {
        if self.used_percent > 0.0 || self.total == 0 {
            return self.used_percent.clamp(0.0, 100.0);
        }
        (self.used as f64 / self.total as f64 * 100.0).clamp(0.0, 100.0)
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
