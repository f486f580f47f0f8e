//! Structured log entries.
//!
//! Every observable event leaves the engine as a JSON entry of the shape
//! `{"type": <kind>, "value": <payload>}`, pushed through an [`OpReporter`].
//! The default reporter writes entries through the `log` facade; hosts pick
//! the backend, or swap in their own sink entirely.

use serde_json::{json, Value};

use stopkeeper_rds_control::RdsApiError;

use crate::status::Severity;

/// One entry per processed batch, carrying the record count.
pub const BATCH: &str = "BATCH";
/// A control-plane call: operation name plus parameters.
pub const REQUEST: &str = "REQUEST";
/// Raw provider response to the preceding request.
pub const API_RESPONSE: &str = "API_RESPONSE";
/// Structured fault or transport failure of the preceding request.
pub const API_ERROR: &str = "API_ERROR";
/// Final decision for one batch item.
pub const OUTCOME: &str = "OUTCOME";
/// Raw queue record that could not be turned into a work item.
pub const QUEUE_RECORD: &str = "QUEUE_RECORD";
/// Why a queue record could not be turned into a work item.
pub const PARSE_ERROR: &str = "PARSE_ERROR";

/// Sink for structured log entries.
pub trait OpReporter: Send + Sync {
    /// Emit one entry at the given severity.
    fn report(&self, kind: &str, value: Value, severity: Severity);
}

/// Reporter that writes entries through the `log` facade as single-line JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl OpReporter for LogReporter {
    fn report(&self, kind: &str, value: Value, severity: Severity) {
        log::log!(severity.level(), "{}", json!({ "type": kind, "value": value }));
    }
}

/// REQUEST entry payload.
pub(crate) fn request_value(operation: &str, params: Value) -> Value {
    json!({ "operation": operation, "params": params })
}

/// API_ERROR entry payload.
pub(crate) fn error_value(error: &RdsApiError) -> Value {
    match error {
        RdsApiError::Service { code, message } => json!({ "code": code, "message": message }),
        RdsApiError::Transport(message) => json!({ "transport": message }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_fault_payload_keeps_code_and_message() {
        let error = RdsApiError::Service {
            code: "InvalidDBClusterStateFault".to_string(),
            message: "DbCluster db1 is in stopping state ".to_string(),
        };
        assert_eq!(
            error_value(&error),
            json!({
                "code": "InvalidDBClusterStateFault",
                "message": "DbCluster db1 is in stopping state "
            })
        );
    }

    #[test]
    fn test_transport_failure_payload_is_distinct() {
        let error = RdsApiError::Transport("connection reset".to_string());
        assert_eq!(error_value(&error), json!({ "transport": "connection reset" }));
    }

    #[test]
    fn test_request_payload_shape() {
        assert_eq!(
            request_value("StopDBCluster", json!({ "DBClusterIdentifier": "db1" })),
            json!({
                "operation": "StopDBCluster",
                "params": { "DBClusterIdentifier": "db1" }
            })
        );
    }
}
