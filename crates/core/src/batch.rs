//! Batch orchestration.
//!
//! Walks one queue delivery record by record: parse, dispatch the stop call,
//! classify the outcome, and collect the message ids the queue should
//! redeliver. One bad record never disturbs the rest of the batch.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use serde_json::{json, Value};

use stopkeeper_rds_control::{RdsApiError, RdsControl, ResourceType, StopRequest};

use crate::assess::{assess_stop_outcome, StopAssessment};
use crate::config::Config;
use crate::errors::Error;
use crate::notification::{BatchItem, QueueRecord};
use crate::probe::StatusProber;
use crate::report::{self, OpReporter};
use crate::status::{Severity, StatusCategory};

/// Batch-processing surface exposed to the host.
#[async_trait]
pub trait StopServiceTrait: Send + Sync {
    /// Process one queue delivery.
    ///
    /// Returns the message ids that should be redelivered; ids absent from
    /// the set are finished, successfully or not. The host translates the
    /// set into its queue's partial-failure acknowledgment protocol.
    async fn process_batch(&self, records: &[QueueRecord]) -> HashSet<String>;
}

/// Re-stops force-started databases and decides redelivery per record.
pub struct StopService {
    /// Injected control-plane client, shared with the prober.
    client: Arc<dyn RdsControl>,
    /// Structured log sink.
    reporter: Arc<dyn OpReporter>,
    /// Live status lookup for instance-state conflicts.
    prober: StatusProber,
    /// Keep successfully stopped items retrying until observed stopped.
    follow_until_stopped: bool,
}

impl StopService {
    /// Create a new service around an injected control-plane client.
    pub fn new(
        client: Arc<dyn RdsControl>,
        reporter: Arc<dyn OpReporter>,
        config: &Config,
    ) -> Self {
        let prober = StatusProber::new(client.clone(), reporter.clone());
        Self {
            client,
            reporter,
            prober,
            follow_until_stopped: config.follow_until_stopped,
        }
    }

    /// Dispatch the stop call for one request.
    async fn dispatch(&self, request: &StopRequest) -> Result<Value, RdsApiError> {
        debug!("Dispatching {} for {}", request.operation(), request.identifier);
        match request.resource {
            ResourceType::Cluster => self.client.stop_db_cluster(&request.identifier).await,
            ResourceType::Instance => self.client.stop_db_instance(&request.identifier).await,
        }
    }

    /// Stop one resource and decide whether its record should be redelivered.
    async fn handle_item(&self, item: &BatchItem) -> bool {
        let request = &item.request;
        let outcome = self.dispatch(request).await;
        let assessment =
            assess_stop_outcome(request, &outcome, self.follow_until_stopped, &self.prober).await;

        self.reporter.report(
            report::REQUEST,
            report::request_value(request.operation(), request.params()),
            assessment.severity,
        );
        match &outcome {
            Ok(response) => {
                self.reporter
                    .report(report::API_RESPONSE, response.clone(), assessment.severity)
            }
            Err(error) => self.reporter.report(
                report::API_ERROR,
                report::error_value(error),
                assessment.severity,
            ),
        }
        self.reporter
            .report(report::OUTCOME, outcome_value(item, &assessment), assessment.severity);

        assessment.retry
    }

    /// Report a record that could not be turned into a work item.
    fn report_unusable(&self, record: &QueueRecord, error: &Error) {
        self.reporter.report(
            report::QUEUE_RECORD,
            serde_json::to_value(record).unwrap_or(Value::Null),
            Severity::Error,
        );
        self.reporter
            .report(report::PARSE_ERROR, json!(error.to_string()), Severity::Error);
    }
}

#[async_trait]
impl StopServiceTrait for StopService {
    async fn process_batch(&self, records: &[QueueRecord]) -> HashSet<String> {
        debug!("Processing batch of {} records", records.len());
        self.reporter
            .report(report::BATCH, json!({ "records": records.len() }), Severity::Info);

        let mut retryable = HashSet::new();
        for record in records {
            match BatchItem::parse(record) {
                Ok(item) => {
                    if self.handle_item(&item).await {
                        retryable.insert(item.message_id);
                    }
                }
                // A record we cannot even parse has no identifier worth
                // retrying; report it and move on.
                Err(error) => self.report_unusable(record, &error),
            }
        }
        retryable
    }
}

/// OUTCOME entry payload: enough to reconstruct the decision without
/// re-running it.
fn outcome_value(item: &BatchItem, assessment: &StopAssessment) -> Value {
    let mut value = json!({
        "messageId": item.message_id,
        "resourceType": item.request.resource.as_str(),
        "identifier": item.request.identifier,
        "retry": assessment.retry,
    });
    if let Some(status) = &assessment.status {
        value["status"] = json!(status);
        value["recognized"] = json!(StatusCategory::recognized(status));
    }
    if let Some(time) = item.event_time {
        value["eventTime"] = json!(time);
    }
    value
}
