//! Load — config loading from file and environment variables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::model::{EngineConfig, ReportDefaults, StorageConfig};

impl EngineConfig {
    /// Load configuration from file or environment variables.
    /// Priority: Environment Variables > Config File > Defaults
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = std::env::var("REPORTER_CONFIG_FILE")
            .unwrap_or_else(|_| "/etc/reporter/engine.toml".to_string());

        let mut config = if Path::new(&config_path).exists() {
            tracing::info!("Loading configuration from: {}", config_path);
            Self::from_file(&config_path)?
        } else {
            tracing::info!(
                "Config file not found at {}, using environment variables",
                config_path
            );
            Self::from_env()
        };

        // Environment variables override file config for storage settings
        if let Ok(bucket) = std::env::var("LOG_STORAGE_BUCKET") {
            config.storage.bucket = bucket;
        }
        if let Ok(region) = std::env::var("LOG_STORAGE_REGION") {
            config.storage.region = region;
        }
        if let Ok(profile) = std::env::var("LOG_STORAGE_PROFILE") {
            config.storage.profile = profile;
        }
        if let Ok(threshold) = std::env::var("REPORT_PERCENT_THRESHOLD") {
            if let Ok(threshold) = threshold.parse() {
                config.report.percent_threshold = threshold;
            }
        }
        if let Ok(top_pages) = std::env::var("REPORT_TOP_PAGES") {
            if let Ok(top_pages) = top_pages.parse() {
                config.report.top_pages = top_pages;
            }
        }

        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: EngineConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from environment variables with sensible defaults
    pub fn from_env() -> Self {
        Self {
            storage: StorageConfig {
                bucket: std::env::var("LOG_STORAGE_BUCKET").unwrap_or_default(),
                region: std::env::var("LOG_STORAGE_REGION")
                    .unwrap_or_else(|_| "us-east-1".to_string()),
                profile: std::env::var("LOG_STORAGE_PROFILE")
                    .unwrap_or_else(|_| "default".to_string()),
            },
            report: ReportDefaults {
                percent_threshold: std::env::var("REPORT_PERCENT_THRESHOLD")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5.0),
                top_pages: std::env::var("REPORT_TOP_PAGES")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            },
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────
