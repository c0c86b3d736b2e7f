//! Summary delivery over HTTP.
//!
//! POSTs the weekly summary as JSON to a configured endpoint, typically a
//! chat webhook or an internal mail bridge. Failures surface to the caller;
//! a monitoring run is not worth retrying.

use crate::report::CheckSummary;
use crate::utils::errors::{MonitorError, Result};

/// Deliver `summary` to `url`.
pub async fn send_summary(
    client: &reqwest::Client,
    url: &str,
    summary: &CheckSummary,
) -> Result<()> {
    let response = client.post(url).json(&summary.to_json()).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(MonitorError::Delivery(format!(
            "webhook returned {status} for {url}"
        )));
    }

    tracing::info!("Summary for week {} delivered", summary.week);
    Ok(())
}
