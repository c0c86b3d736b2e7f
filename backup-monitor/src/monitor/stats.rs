//! Per-folder backup statistics.
//!
//! Ties the pieces together for one server: resolve the two expected
//! dated locations, fetch their sizes through the injected store and
//! classify the pair.

use chrono::NaiveDate;
use serde_json::json;

use crate::monitor::status::{evaluate, BackupStatus};
use crate::report::format_backup_size;
use crate::storage::{paths, ObjectStore};
use crate::utils::errors::Result;

/// Everything the check learned about one backup folder.
#[derive(Debug, Clone)]
pub struct ServerStats {
    /// Folder in the bucket holding this server's dated backups.
    pub backup_folder: String,
    /// Classification of the two most recent backups.
    pub status: BackupStatus,
    /// Size of the most recent expected backup, zero when missing.
    pub last_size: u64,
    /// Size of the backup before it, zero when missing.
    pub second_last_size: u64,
}

impl ServerStats {
    /// Fetch the two expected backup sizes for `folder` and classify them.
    ///
    /// `reference_date` anchors the check: the expected locations are the
    /// dated prefixes for one and two days before it.
    pub async fn collect<S: ObjectStore>(
        store: &S,
        folder: &str,
        reference_date: NaiveDate,
    ) -> Result<Self> {
        let (current_prefix, previous_prefix) = paths::expected_locations(folder, reference_date);
        let last_size = store.backup_size(&current_prefix).await?;
        let second_last_size = store.backup_size(&previous_prefix).await?;
        let status = evaluate(last_size, second_last_size)?;

        Ok(Self {
            backup_folder: folder.to_string(),
            status,
            last_size,
            second_last_size,
        })
    }

    pub fn is_healthy(&self) -> bool {
        self.status.is_healthy()
    }

    /// Generates a one-line report of the server status.
    pub fn report_line(&self) -> String {
        let health_status = if self.is_healthy() { "Yes" } else { "No" };
        format!(
            "- Server: {}, healthy: {}, last backup size: {}, 2nd last backup size: {}.",
            self.backup_folder,
            health_status,
            format_backup_size(self.last_size),
            format_backup_size(self.second_last_size),
        )
    }

    /// JSON object for machine consumers.
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "backup_folder": self.backup_folder,
            "backup_status": self.status.message(self.last_size, self.second_last_size),
            "last_backup_size": self.last_size,
            "previous_backup_size": self.second_last_size,
        })
    }
}
