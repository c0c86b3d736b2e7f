//! Backup Monitor Library
//!
//! Checks that scheduled backups stored as dated folders in an
//! object-storage bucket are present and of a plausible size, and reports
//! anomalies.

pub mod config;
pub mod monitor;
pub mod report;
pub mod storage;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use monitor::{BackupStatus, ServerStats};
pub use utils::errors::MonitorError;
pub type Result<T> = std::result::Result<T, MonitorError>;
