//! Inbound notification model.
//!
//! Queue records deliver provider events as JSON text. This module turns one
//! record into an actionable work item; anything malformed surfaces as a
//! typed error for the orchestrator to report and drop.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stopkeeper_rds_control::{ResourceType, StopRequest};

use crate::errors::Result;

/// One message pulled off the queue: delivery id plus opaque body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueRecord {
    /// Queue message id; the token that marks the item for redelivery.
    pub message_id: String,
    /// Raw notification body, JSON text.
    pub body: String,
}

/// Provider event envelope carried in a record body.
#[derive(Debug, Clone, Deserialize)]
pub struct DbEvent {
    /// Event payload.
    pub detail: DbEventDetail,
    /// When the provider emitted the event.
    #[serde(default)]
    pub time: Option<DateTime<Utc>>,
}

/// The two event fields this service acts on.
#[derive(Debug, Clone, Deserialize)]
pub struct DbEventDetail {
    /// Source-type token, e.g. "RDS_DB_CLUSTER" or "RDS_DB_INSTANCE".
    #[serde(rename = "SourceType")]
    pub source_type: String,
    /// Identifier of the cluster or instance the event refers to.
    #[serde(rename = "SourceIdentifier")]
    pub source_identifier: String,
}

/// One parsed notification, ready to act on.
#[derive(Debug, Clone)]
pub struct BatchItem {
    /// Queue message id to hand back if the item needs redelivery.
    pub message_id: String,
    /// The stop call this notification asks for.
    pub request: StopRequest,
    /// Event emission time, passed through to outcome entries.
    pub event_time: Option<DateTime<Utc>>,
}

impl BatchItem {
    /// Parse one queue record into a work item.
    pub fn parse(record: &QueueRecord) -> Result<Self> {
        let event: DbEvent = serde_json::from_str(&record.body)?;
        let resource = ResourceType::from_source_type(&event.detail.source_type)?;
        Ok(Self {
            message_id: record.message_id.clone(),
            request: StopRequest::new(resource, event.detail.source_identifier),
            event_time: event.time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use serde_json::json;

    fn record(body: serde_json::Value) -> QueueRecord {
        QueueRecord {
            message_id: "m1".to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_parses_cluster_notification() {
        let item = BatchItem::parse(&record(json!({
            "detail": {
                "SourceType": "RDS_DB_CLUSTER",
                "SourceIdentifier": "db1",
                "Message": "DB cluster started"
            }
        })))
        .unwrap();

        assert_eq!(item.message_id, "m1");
        assert_eq!(item.request.resource, ResourceType::Cluster);
        assert_eq!(item.request.identifier, "db1");
        assert_eq!(item.event_time, None);
    }

    #[test]
    fn test_parses_instance_notification_with_time() {
        let item = BatchItem::parse(&record(json!({
            "time": "2026-05-04T03:02:01Z",
            "detail": {
                "SourceType": "RDS_DB_INSTANCE",
                "SourceIdentifier": "db2"
            }
        })))
        .unwrap();

        assert_eq!(item.request.resource, ResourceType::Instance);
        assert_eq!(
            item.event_time.map(|time| time.to_rfc3339()),
            Some("2026-05-04T03:02:01+00:00".to_string())
        );
    }

    #[test]
    fn test_rejects_bodies_that_are_not_json() {
        let record = QueueRecord {
            message_id: "m1".to_string(),
            body: "{not json".to_string(),
        };
        assert!(matches!(
            BatchItem::parse(&record),
            Err(Error::MalformedBody(_))
        ));
    }

    #[test]
    fn test_rejects_events_without_detail() {
        assert!(matches!(
            BatchItem::parse(&record(json!({ "source": "aws.rds" }))),
            Err(Error::MalformedBody(_))
        ));
    }

    #[test]
    fn test_rejects_unmanaged_source_types() {
        let result = BatchItem::parse(&record(json!({
            "detail": {
                "SourceType": "RDS_DB_SNAPSHOT",
                "SourceIdentifier": "snap1"
            }
        })));
        assert!(matches!(result, Err(Error::UnknownSourceType(_))));
    }
}
