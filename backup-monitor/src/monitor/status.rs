//! Backup status classification.
//!
//! Turns a pair of observed sizes (most recent backup, the one before it)
//! into one of a fixed set of outcomes using the tolerance model. A size of
//! zero means "no backup found at that location": a dated folder with no
//! objects under it sums to zero, so zero never occurs for a real backup.

use crate::monitor::tolerance::{allowed_size_change, relative_size_change};
use crate::utils::errors::Result;

/// Sizes observed for one backup folder at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackupObservation {
    /// Total size of the most recent expected backup, zero when missing.
    pub current_size: u64,
    /// Total size of the backup before it, zero when missing.
    pub previous_size: u64,
}

impl BackupObservation {
    pub fn new(current_size: u64, previous_size: u64) -> Self {
        Self {
            current_size,
            previous_size,
        }
    }

    /// Classify this observation. See [`evaluate`].
    pub fn evaluate(&self) -> Result<BackupStatus> {
        evaluate(self.current_size, self.previous_size)
    }
}

/// Outcome of comparing the two most recent backups of a folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupStatus {
    /// Neither expected date had any objects.
    MissingBoth,
    /// Only the most recent backup exists; nothing to compare against.
    MissingPrevious,
    /// The most recent backup is absent while the previous one exists.
    MissingCurrent,
    /// Both exist but the size moved more than the scale allows.
    OutsideTolerance { change_pct: u64, allowed_pct: u64 },
    /// Both exist and the size change is within the allowed bound.
    Ok { change_pct: u64, allowed_pct: u64 },
}

/// Classify a pair of observed sizes.
///
/// Checks run in order: both missing, missing previous, missing current,
/// size comparison. A change exactly equal to the allowed bound still
/// counts as within tolerance.
pub fn evaluate(current_size: u64, previous_size: u64) -> Result<BackupStatus> {
    match (current_size, previous_size) {
        (0, 0) => Ok(BackupStatus::MissingBoth),
        (_, 0) => Ok(BackupStatus::MissingPrevious),
        (0, _) => Ok(BackupStatus::MissingCurrent),
        (current, previous) => {
            let change_pct = relative_size_change(current, previous)?;
            let allowed_pct = allowed_size_change(previous)?;
            if change_pct > allowed_pct {
                Ok(BackupStatus::OutsideTolerance {
                    change_pct,
                    allowed_pct,
                })
            } else {
                Ok(BackupStatus::Ok {
                    change_pct,
                    allowed_pct,
                })
            }
        }
    }
}

impl BackupStatus {
    /// Short machine-readable tag for logs and JSON.
    pub fn tag(&self) -> &'static str {
        match self {
            BackupStatus::MissingBoth => "missing_both",
            BackupStatus::MissingPrevious => "missing_previous",
            BackupStatus::MissingCurrent => "missing_current",
            BackupStatus::OutsideTolerance { .. } => "outside_tolerance",
            BackupStatus::Ok { .. } => "ok",
        }
    }

    /// Whether the folder counts as healthy.
    ///
    /// A first-ever backup (no previous one to compare against) is healthy;
    /// everything else requires the current backup to exist and to be
    /// within tolerance.
    pub fn is_healthy(&self) -> bool {
        matches!(
            self,
            BackupStatus::Ok { .. } | BackupStatus::MissingPrevious
        )
    }

    /// Human sentence for reports. `current_size` and `previous_size` are
    /// the raw observed byte counts this status was derived from.
    pub fn message(&self, current_size: u64, previous_size: u64) -> String {
        match self {
            BackupStatus::MissingBoth => {
                "No backup found for either expected date.".to_string()
            }
            BackupStatus::MissingPrevious => "Missing previous backup.".to_string(),
            BackupStatus::MissingCurrent => "Missing current backup.".to_string(),
            BackupStatus::OutsideTolerance { .. } => format!(
                "Backup size is outside tolerance, now: {current_size}, previous: {previous_size}."
            ),
            BackupStatus::Ok { .. } => "Backup OK.".to_string(),
        }
    }
}
