//! Stopkeeper Core Crate
//!
//! This crate decides what happens after a forced database start: it re-stops
//! RDS instances and Aurora clusters named by queue-delivered notifications
//! and classifies each attempt's outcome into a log severity and a retry
//! decision.
//!
//! # Overview
//!
//! The core supports:
//! - A closed taxonomy of provider resource statuses with fixed
//!   severity/retry semantics, failing closed on anything unfamiliar
//! - Decoding of the provider's stop-refusal faults, including the
//!   cluster-state message parse and the Aurora member-instance refusal
//! - A live-status probe for instance-state conflicts that do not say which
//!   state the instance is in
//! - Per-record isolation: one malformed or failing record never disturbs
//!   the rest of the batch
//!
//! # Architecture
//!
//! ```text
//! +--------------+     +--------------+
//! | QueueRecord  | --> |  BatchItem   |  (parse; bad records drop out)
//! +--------------+     +--------------+
//!                             |
//!                             v
//!                      +--------------+
//!                      | StopService  |  (dispatch via RdsControl)
//!                      +--------------+
//!                             |
//!                             v
//!                      +--------------+     +--------------+
//!                      |  Classifier  | --> | StatusProber |  (when the
//!                      +--------------+     +--------------+   fault hides
//!                             |                                the status)
//!                             v
//!                      +--------------+
//!                      |  retry set   |  (message ids to redeliver)
//!                      +--------------+
//! ```
//!
//! # Core Types
//!
//! - [`StopService`] - Batch orchestrator; the host-facing entry point
//! - [`StatusCategory`] - Taxonomy of provider resource statuses
//! - [`StopAssessment`] - Severity, retry flag, and status evidence
//! - [`StatusProber`] - Live status lookup through the control plane
//! - [`QueueRecord`] / [`BatchItem`] - Inbound notification model
//! - [`OpReporter`] / [`LogReporter`] - Structured JSON log sink
//! - [`Config`] - Process-wide configuration, read once at startup

pub mod assess;
pub mod batch;
pub mod config;
pub mod errors;
pub mod failure;
pub mod notification;
pub mod probe;
pub mod report;
pub mod status;


// Re-export commonly used types for convenience
pub use assess::{assess_status, assess_stop_failure, assess_stop_outcome, StopAssessment};
pub use batch::{StopService, StopServiceTrait};
pub use config::Config;
pub use errors::{Error, Result};
pub use notification::{BatchItem, DbEvent, DbEventDetail, QueueRecord};
pub use probe::StatusProber;
pub use report::{LogReporter, OpReporter};
pub use status::{Assessment, Severity, StatusCategory};

// Re-export the control-plane surface so hosts wiring a client need only
// this crate.
pub use stopkeeper_rds_control::{
    DbInstanceSummary, RdsApiError, RdsControl, ResourceType, StopRequest, UnknownSourceType,
};
