//! Core error types.

use thiserror::Error;

use stopkeeper_rds_control::UnknownSourceType;

/// Errors produced while turning queue records into work items.
///
/// Control-plane failures are not errors at this level; they travel as data
/// into the classifier.
#[derive(Error, Debug)]
pub enum Error {
    /// The record body was not the JSON event shape we expect.
    #[error("Malformed notification body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// The event names a source type this service does not manage.
    #[error(transparent)]
    UnknownSourceType(#[from] UnknownSourceType),
}

/// Result alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
