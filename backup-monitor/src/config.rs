//! Configuration management for the backup monitor.
//!
//! Loads configuration from a TOML file, then applies environment variable
//! overrides so the check can also run fully configured from the hosting
//! environment.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::utils::errors::{MonitorError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub check: CheckConfig,

    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Bucket holding the dated backup folders
    #[serde(default)]
    pub bucket: String,

    /// Backup folders to check, one per server
    #[serde(default)]
    pub folders: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Where to POST the weekly summary; printed locally when unset
    #[serde(default)]
    pub webhook_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content).map_err(|e| MonitorError::Config(e.to_string()))?;
        Ok(config)
    }

    /// Apply environment variable overrides: `S3_BUCKET_NAME`,
    /// `BACKUP_FOLDERS` (comma-separated), `REPORT_WEBHOOK_URL`,
    /// `LOG_LEVEL`.
    pub fn apply_env(&mut self) {
        let _ = dotenvy::dotenv();

        if let Ok(bucket) = std::env::var("S3_BUCKET_NAME") {
            self.check.bucket = bucket;
        }
        if let Ok(folders) = std::env::var("BACKUP_FOLDERS") {
            self.check.folders = split_folders(&folders);
        }
        if let Ok(url) = std::env::var("REPORT_WEBHOOK_URL") {
            self.report.webhook_url = Some(url);
        }
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            self.log.level = level;
        }
    }

    /// A runnable config names a bucket and at least one folder.
    pub fn validate(&self) -> Result<()> {
        if self.check.bucket.is_empty() {
            return Err(MonitorError::Config(
                "missing bucket name (config `check.bucket` or S3_BUCKET_NAME)".into(),
            ));
        }
        if self.check.folders.is_empty() {
            return Err(MonitorError::Config(
                "no backup folders to check (config `check.folders` or BACKUP_FOLDERS)".into(),
            ));
        }
        Ok(())
    }
}

/// Split a comma-separated folder list, dropping empty entries.
fn split_folders(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|folder| folder.trim().to_string())
        .filter(|folder| !folder.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn loads_a_full_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [check]
            bucket = "my_test_bucket"
            folders = ["a", "b", "c"]

            [report]
            webhook_url = "https://hooks.example.com/backup"

            [log]
            level = "debug"
            "#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.check.bucket, "my_test_bucket");
        assert_eq!(config.check.folders, vec!["a", "b", "c"]);
        assert_eq!(
            config.report.webhook_url.as_deref(),
            Some("https://hooks.example.com/backup")
        );
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[check]\nbucket = \"b\"\n").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert!(config.check.folders.is_empty());
        assert!(config.report.webhook_url.is_none());
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Config::from_file(Path::new("/nonexistent/backup-monitor.toml")).is_err());
    }

    #[test]
    fn validation_requires_bucket_and_folders() {
        let mut config = Config::default();
        assert!(config.validate().is_err());

        config.check.bucket = "bucket".into();
        assert!(config.validate().is_err());

        config.check.folders = vec!["a".into()];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn folder_lists_split_on_commas() {
        assert_eq!(split_folders("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(split_folders(" a , b "), vec!["a", "b"]);
        assert_eq!(split_folders("a,,b,"), vec!["a", "b"]);
        assert!(split_folders("").is_empty());
    }
}
