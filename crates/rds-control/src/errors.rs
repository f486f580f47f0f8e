//! Error types for control-plane operations.

use thiserror::Error;

/// Errors surfaced by [`RdsControl`](crate::client::RdsControl) implementations.
///
/// Service faults carry the provider's error code and message verbatim so
/// callers can classify them. Everything that never produced a structured
/// provider response (DNS trouble, timeouts, connection resets) collapses
/// into [`Transport`](Self::Transport).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RdsApiError {
    /// The provider received the call and answered with a structured fault.
    #[error("{code}: {message}")]
    Service {
        /// Provider error code, e.g. "InvalidDBClusterStateFault".
        code: String,
        /// Human-readable fault message.
        message: String,
    },

    /// The call failed before a structured provider response existed.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl RdsApiError {
    /// Provider error code, when the provider reported one.
    pub fn service_code(&self) -> Option<&str> {
        match self {
            Self::Service { code, .. } => Some(code.as_str()),
            Self::Transport(_) => None,
        }
    }
}

/// A notification named a source type this service does not manage.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unrecognized source type: {0}")]
pub struct UnknownSourceType(pub String);
