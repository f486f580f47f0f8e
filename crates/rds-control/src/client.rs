//! Control-plane collaborator trait.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::RdsApiError;
use crate::model::DbInstanceSummary;

/// Narrow interface to the database control plane.
///
/// Implement this trait to connect the engine to a real provider SDK or to
/// a scripted fake in tests. Implementations own transport concerns such as
/// credentials and retry-on-blip behavior; callers only see either a raw
/// response or an [`RdsApiError`].
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use stopkeeper_rds_control::{DbInstanceSummary, RdsApiError, RdsControl};
///
/// struct SdkClient { /* provider SDK handle */ }
///
/// #[async_trait]
/// impl RdsControl for SdkClient {
///     async fn stop_db_cluster(&self, identifier: &str) -> Result<serde_json::Value, RdsApiError> {
///         // call the SDK, map its service faults to RdsApiError::Service
///         # unimplemented!()
///     }
///
///     // ... stop_db_instance, describe_db_instances
/// }
/// ```
#[async_trait]
pub trait RdsControl: Send + Sync {
    /// Request a stop of an Aurora cluster.
    ///
    /// A successful return means the provider accepted the request, not that
    /// the cluster has reached `stopped`. The raw acceptance response is
    /// passed through for logging.
    async fn stop_db_cluster(&self, identifier: &str) -> Result<Value, RdsApiError>;

    /// Request a stop of a standalone database instance.
    ///
    /// Same acceptance semantics as [`stop_db_cluster`](Self::stop_db_cluster).
    async fn stop_db_instance(&self, identifier: &str) -> Result<Value, RdsApiError>;

    /// Look up instances matching an identifier.
    ///
    /// May legitimately return zero, one, or several records; the caller
    /// decides what ambiguity means.
    async fn describe_db_instances(
        &self,
        identifier: &str,
    ) -> Result<Vec<DbInstanceSummary>, RdsApiError>;
}
