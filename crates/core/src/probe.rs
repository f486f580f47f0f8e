//! Live status lookup.
//!
//! An instance-state conflict on an instance stop does not say which state
//! the instance is in; the prober asks the control plane directly so the
//! taxonomy has something to classify.

use std::sync::Arc;

use log::debug;
use serde_json::{json, Value};

use stopkeeper_rds_control::{RdsControl, ResourceType};

use crate::report::{self, OpReporter};
use crate::status::Severity;

/// Operation name used in request log entries.
const DESCRIBE_OPERATION: &str = "DescribeDBInstances";

/// Looks up the live status of one instance through the control plane.
///
/// The describe request and its response are reported only once it is known
/// whether the lookup was determinate, so an indeterminate lookup surfaces
/// at Error and a clean one at Info.
pub struct StatusProber {
    client: Arc<dyn RdsControl>,
    reporter: Arc<dyn OpReporter>,
}

impl StatusProber {
    pub fn new(client: Arc<dyn RdsControl>, reporter: Arc<dyn OpReporter>) -> Self {
        Self { client, reporter }
    }

    /// Fetch the current status of one instance.
    ///
    /// `None` means the status could not be determined: the call failed, the
    /// identifier matched zero or several records, or the single record
    /// carried no status field.
    pub async fn probe(&self, identifier: &str) -> Option<String> {
        debug!("Probing live status of instance {}", identifier);
        let param = ResourceType::Instance.identifier_param();
        let request = report::request_value(DESCRIBE_OPERATION, json!({ param: identifier }));

        match self.client.describe_db_instances(identifier).await {
            Ok(records) => {
                let status = match records.as_slice() {
                    [record] => record.status.clone(),
                    // Zero or several matches: indeterminate.
                    _ => None,
                };
                let severity = if status.is_none() {
                    Severity::Error
                } else {
                    Severity::Info
                };
                self.reporter.report(report::REQUEST, request, severity);
                let response = serde_json::to_value(&records).unwrap_or(Value::Null);
                self.reporter.report(report::API_RESPONSE, response, severity);
                status
            }
            Err(error) => {
                self.reporter.report(report::REQUEST, request, Severity::Error);
                self.reporter
                    .report(report::API_ERROR, report::error_value(&error), Severity::Error);
                None
            }
        }
    }
}
