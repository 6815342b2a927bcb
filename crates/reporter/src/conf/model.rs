//! Model — EngineConfig and related structs.
//!
//! Configuration is an explicit value built once and handed to the
//! pipeline at construction; nothing in the aggregation path fetches
//! configuration on its own.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub storage: StorageConfig,
    pub report: ReportDefaults,
}

/// Connection parameters for the log storage collaborator.
///
/// The engine never opens a connection itself; these values are plumbing
/// for the caller to construct whatever implements
/// [`LogStore`](crate::store::LogStore) before handing it to the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub bucket: String,
    pub region: String,
    pub profile: String,
}

/// Default rendering knobs applied when a caller does not override them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportDefaults {
    /// Minimum percentage share (0–100) for threshold-filtered sections.
    pub percent_threshold: f64,
    /// Requested top-N for the page section.
    pub top_pages: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            report: ReportDefaults::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            bucket: "".to_string(),
            region: "us-east-1".to_string(),
            profile: "default".to_string(),
        }
    }
}

impl Default for ReportDefaults {
    fn default() -> Self {
        Self {
            percent_threshold: 5.0,
            top_pages: 10,
        }
    }
}

impl EngineConfig {
    /// Validate that configuration values are sane.
    pub fn validate(&self) -> Result<(), String> {
        if self.storage.bucket.is_empty() {
            return Err("storage.bucket must not be empty".to_string());
        }
        if self.storage.region.is_empty() {
            return Err("storage.region must not be empty".to_string());
        }
        if !(0.0..=100.0).contains(&self.report.percent_threshold) {
            return Err(format!(
                "report.percent_threshold must be within 0-100, got {}",
                self.report.percent_threshold
            ));
        }
        if self.report.top_pages == 0 {
            return Err("report.top_pages must be > 0".to_string());
        }
        Ok(())
    }
}

// ── Tests ───────────────────────────────────────────────────────
