//! Outcome classification for stop attempts.
//!
//! The heart of the engine: given what the stop call came back with, decide
//! how loudly to log the outcome and whether the queue should redeliver the
//! item. Most failures answer from the fault alone; an instance-state
//! conflict on an instance stop consults the prober for the live status.

use serde_json::Value;

use stopkeeper_rds_control::{RdsApiError, ResourceType, StopRequest};

use crate::failure;
use crate::probe::StatusProber;
use crate::status::{Assessment, Severity, StatusCategory};

/// Assessment of one stop attempt, keeping the status evidence the decision
/// rested on when the outcome exposed any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopAssessment {
    /// How loudly to log the outcome.
    pub severity: Severity,
    /// Whether the item should be redelivered.
    pub retry: bool,
    /// Status token behind the decision, when one was available.
    pub status: Option<String>,
}

impl StopAssessment {
    /// A decision made without status evidence.
    pub fn new(severity: Severity, retry: bool) -> Self {
        Self {
            severity,
            retry,
            status: None,
        }
    }

    /// Classify a status token and keep it as evidence.
    fn from_status(status: Option<String>) -> Self {
        let Assessment { severity, retry } = assess_status(status.as_deref());
        Self {
            severity,
            retry,
            status,
        }
    }
}

/// Severity/retry semantics of a status token, `None` meaning indeterminate.
pub fn assess_status(status: Option<&str>) -> Assessment {
    StatusCategory::classify(status).assessment()
}

/// Decide severity, retry, and evidence for one stop outcome.
///
/// A successful call only proves the provider accepted the request, so with
/// `follow_until_stopped` the item stays live until a later delivery
/// observes a terminal status.
pub async fn assess_stop_outcome(
    request: &StopRequest,
    outcome: &Result<Value, RdsApiError>,
    follow_until_stopped: bool,
    prober: &StatusProber,
) -> StopAssessment {
    match outcome {
        Ok(_) => StopAssessment::new(Severity::Info, follow_until_stopped),
        Err(error) => assess_stop_failure(request, error, prober).await,
    }
}

/// Decide severity and retry for one failed stop attempt.
pub async fn assess_stop_failure(
    request: &StopRequest,
    error: &RdsApiError,
    prober: &StatusProber,
) -> StopAssessment {
    let RdsApiError::Service { code, message } = error else {
        // Transport failures are the delivery layer's business; classify as
        // a plain error and let redelivery happen upstream.
        return StopAssessment::new(Severity::Error, false);
    };

    match code.as_str() {
        failure::INVALID_DB_CLUSTER_STATE => {
            let state = failure::extract_cluster_state(message).map(str::to_string);
            StopAssessment::from_status(state)
        }
        failure::INVALID_DB_INSTANCE_STATE => match request.resource {
            ResourceType::Instance => {
                StopAssessment::from_status(prober.probe(&request.identifier).await)
            }
            // Reported for member instances of the cluster, not the cluster
            // itself. Retry and let the members settle rather than describe
            // every one of them.
            ResourceType::Cluster => StopAssessment::new(Severity::Info, true),
        },
        failure::INVALID_PARAMETER_COMBINATION => {
            if failure::is_aurora_stop_ineligible(message) {
                // An Aurora member instance cannot stop on its own; the
                // cluster-level notification covers it.
                StopAssessment::new(Severity::Info, false)
            } else {
                StopAssessment::new(Severity::Error, false)
            }
        }
        _ => StopAssessment::new(Severity::Error, false),
    }
}
