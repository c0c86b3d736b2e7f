//! Object-storage access.
//!
//! The monitor only ever needs one question answered: how many bytes live
//! under a given prefix. The trait keeps the evaluator testable without a
//! bucket and the S3 client swappable.

use std::future::Future;

use crate::utils::errors::Result;

pub mod paths;
pub mod s3;

pub use s3::S3Store;

/// Read-only view of an object-storage bucket.
pub trait ObjectStore {
    /// Total size in bytes of all objects under `prefix`.
    ///
    /// Returns zero when nothing matches. Storage errors propagate to the
    /// caller untouched; retry policy belongs to the implementation, not
    /// the evaluator.
    fn backup_size(&self, prefix: &str) -> impl Future<Output = Result<u64>> + Send;
}
