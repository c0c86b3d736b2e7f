//! Report rendering.
//!
//! Human-readable sizes, the weekly summary text and the JSON payload the
//! delivery side posts out.

pub mod webhook;

use chrono::{Datelike, NaiveDate};
use serde_json::json;

use crate::monitor::ServerStats;

/// Formats the size of a backup folder in a human readable format,
/// e.g. `1048576` → `1.0 MiB`.
///
/// Byte counts below one KiB are spelled out (`0 Bytes`, `1 Byte`,
/// `1023 Bytes`); everything above uses binary units with one decimal.
pub fn format_backup_size(backup_size: u64) -> String {
    const UNITS: [&str; 5] = ["KiB", "MiB", "GiB", "TiB", "PiB"];

    if backup_size == 1 {
        return "1 Byte".to_string();
    }
    if backup_size < 1024 {
        return format!("{backup_size} Bytes");
    }

    let mut size = backup_size as f64 / 1024.0;
    for unit in &UNITS[..UNITS.len() - 1] {
        if size < 1024.0 {
            return format!("{size:.1} {unit}");
        }
        size /= 1024.0;
    }
    format!("{:.1} {}", size, UNITS[UNITS.len() - 1])
}

/// Weekly summary over every checked folder.
#[derive(Debug, Clone)]
pub struct CheckSummary {
    /// ISO week number the report covers.
    pub week: u32,
    pub stats: Vec<ServerStats>,
}

impl CheckSummary {
    pub fn new(stats: Vec<ServerStats>, reference_date: NaiveDate) -> Self {
        Self {
            week: reference_date.iso_week().week(),
            stats,
        }
    }

    pub fn healthy_count(&self) -> usize {
        self.stats.iter().filter(|s| s.is_healthy()).count()
    }

    /// Plain-text report, one line per server.
    pub fn to_text(&self) -> String {
        generate_report(&self.stats, self.week)
    }

    /// JSON payload: headline counts, per-server objects and the rendered
    /// text report.
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "week": self.week,
            "checked": self.stats.len(),
            "healthy": self.healthy_count(),
            "servers": self.stats.iter().map(|s| s.to_json()).collect::<Vec<_>>(),
            "report": self.to_text(),
        })
    }
}

/// Generates the weekly report text.
pub fn generate_report(stats: &[ServerStats], week_nr: u32) -> String {
    let mut report = format!("Weekly backup report for week {week_nr}.\n\n");
    report.push_str("List of backupped servers:\n\n");
    report.push_str(
        &stats
            .iter()
            .map(|s| s.report_line())
            .collect::<Vec<_>>()
            .join("\n"),
    );
    report.push_str("\n\nSincerely,\n\nYour serverless backup service.\n");
    report
}
