//! S3-backed [`ObjectStore`] implementation.
//!
//! Credentials and region come from the ambient AWS environment (profile,
//! instance role, or env vars), matching how the check runs in its hosting
//! environment.

use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::Client;

use super::ObjectStore;
use crate::utils::errors::{MonitorError, Result};

/// Sums object sizes under dated prefixes of a single bucket.
#[derive(Debug, Clone)]
pub struct S3Store {
    client: Client,
    bucket: String,
}

impl S3Store {
    /// Build a store from the default AWS credential chain.
    pub async fn from_env(bucket: impl Into<String>) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&config), bucket)
    }

    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

impl ObjectStore for S3Store {
    async fn backup_size(&self, prefix: &str) -> Result<u64> {
        let mut total: u64 = 0;
        let mut pages = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .prefix(prefix)
            .into_paginator()
            .send();

        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| {
                MonitorError::Storage(format!(
                    "failed to list s3://{}/{}: {}",
                    self.bucket,
                    prefix,
                    DisplayErrorContext(&e)
                ))
            })?;
            for object in page.contents() {
                total += object.size().unwrap_or(0).max(0) as u64;
            }
        }

        tracing::debug!("{} bytes under s3://{}/{}", total, self.bucket, prefix);
        Ok(total)
    }
}
