//! Resource status taxonomy.
//!
//! The provider reports resource statuses as free-form strings. This module
//! classifies every status we know about into a category with fixed
//! severity/retry semantics, and treats everything else conservatively:
//! a status nobody has characterized must not keep an item retrying forever.

use log::Level;

/// Severity attached to a classified outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Expected outcome; nothing needs operator attention.
    Info,
    /// Surfaced for operator attention through the log stream.
    Error,
}

impl Severity {
    /// Level to emit log entries at.
    pub fn level(self) -> Level {
        match self {
            Self::Info => Level::Info,
            Self::Error => Level::Error,
        }
    }
}

/// Severity and retry decision for one classified outcome.
///
/// Computed fresh per batch item; never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assessment {
    /// How loudly to log the outcome.
    pub severity: Severity,
    /// Whether the batch item should be redelivered.
    pub retry: bool,
}

impl Assessment {
    pub const fn new(severity: Severity, retry: bool) -> Self {
        Self { severity, retry }
    }
}

/// Category of a provider-reported resource status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    /// Stopped, or on its way out entirely; the goal needs no further action.
    TerminalSuccess,
    /// An in-flight state expected to clear on its own; try again later.
    TransientRetry,
    /// A state that will not change by itself; retrying is pointless.
    PermanentError,
    /// Status indeterminate, or an error state that occasionally clears;
    /// worth another attempt.
    UnknownRetry,
}

impl StatusCategory {
    /// Classify a status token, `None` meaning the status could not be
    /// determined. Matching is case-insensitive.
    pub fn classify(status: Option<&str>) -> Self {
        match status {
            None => Self::UnknownRetry,
            Some(value) => lookup(value.to_lowercase().as_str()).unwrap_or(Self::PermanentError),
        }
    }

    /// Whether a status token appears in the taxonomy at all.
    ///
    /// Unfamiliar statuses classify as [`PermanentError`](Self::PermanentError)
    /// like the listed ones do, but outcome entries flag them so whoever
    /// maintains the lists can tell the two apart.
    pub fn recognized(status: &str) -> bool {
        lookup(status.to_lowercase().as_str()).is_some()
    }

    /// Severity/retry semantics of this category.
    pub fn assessment(self) -> Assessment {
        match self {
            Self::TerminalSuccess => Assessment::new(Severity::Info, false),
            Self::TransientRetry => Assessment::new(Severity::Info, true),
            Self::PermanentError => Assessment::new(Severity::Error, false),
            Self::UnknownRetry => Assessment::new(Severity::Error, true),
        }
    }
}

/// Closed lookup over every status the taxonomy lists.
///
/// Unless noted, the same status values (normalized to lower case) apply to
/// both Aurora clusters and RDS instances.
fn lookup(status: &str) -> Option<StatusCategory> {
    let category = match status {
        "deleting" | "deleted" | "stopped" => StatusCategory::TerminalSuccess,

        "starting"
        | "stopping" // watch this one for successful completion
        | "backing-up"
        | "maintenance"
        | "modifying"
        | "renaming"
        | "resetting-master-credentials"
        | "storage-optimization"
        | "upgrading"
        // Aurora cluster only:
        | "backtracking"
        | "failing-over"
        | "migrating"
        | "promoting"
        | "update-iam-db-auth"
        // RDS instance only:
        | "configuring-enhanced-monitoring"
        | "configuring-iam-database-auth"
        | "configuring-log-exports"
        | "converting-to-vpc"
        | "delete-precheck"
        | "moving-to-vpc"
        | "rebooting"
        | "storage-config-upgrade"
        | "storage-initialization" => StatusCategory::TransientRetry,

        // Error states that occasionally clear on their own; keep trying.
        "inaccessible-encryption-credentials-recoverable"
        | "incompatible-network"
        | "incompatible-option-group"
        | "incompatible-parameters" => StatusCategory::UnknownRetry,

        // Stuck for good; a human has to step in.
        "inaccessible-encryption-credentials"
        | "cloning-failed"
        | "failed"
        | "incompatible-restore"
        | "insufficient-capacity"
        | "migration-failed"
        | "preparing-data-migration"
        | "restore-error"
        | "storage-full" => StatusCategory::PermanentError,

        _ => return None,
    };
    Some(category)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TERMINAL: &[&str] = &["deleting", "deleted", "stopped"];

    const TRANSIENT: &[&str] = &[
        "starting",
        "stopping",
        "backing-up",
        "maintenance",
        "modifying",
        "renaming",
        "resetting-master-credentials",
        "storage-optimization",
        "upgrading",
        "backtracking",
        "failing-over",
        "migrating",
        "promoting",
        "update-iam-db-auth",
        "configuring-enhanced-monitoring",
        "configuring-iam-database-auth",
        "configuring-log-exports",
        "converting-to-vpc",
        "delete-precheck",
        "moving-to-vpc",
        "rebooting",
        "storage-config-upgrade",
        "storage-initialization",
    ];

    const RECOVERABLE: &[&str] = &[
        "inaccessible-encryption-credentials-recoverable",
        "incompatible-network",
        "incompatible-option-group",
        "incompatible-parameters",
    ];

    const PERMANENT: &[&str] = &[
        "inaccessible-encryption-credentials",
        "cloning-failed",
        "failed",
        "incompatible-restore",
        "insufficient-capacity",
        "migration-failed",
        "preparing-data-migration",
        "restore-error",
        "storage-full",
    ];

    #[test]
    fn test_terminal_statuses_are_info_without_retry() {
        for status in TERMINAL {
            let assessment = StatusCategory::classify(Some(status)).assessment();
            assert_eq!(assessment, Assessment::new(Severity::Info, false), "{}", status);
        }
    }

    #[test]
    fn test_transient_statuses_retry_at_info() {
        for status in TRANSIENT {
            let assessment = StatusCategory::classify(Some(status)).assessment();
            assert_eq!(assessment, Assessment::new(Severity::Info, true), "{}", status);
        }
    }

    #[test]
    fn test_recoverable_statuses_retry_at_error() {
        for status in RECOVERABLE {
            let assessment = StatusCategory::classify(Some(status)).assessment();
            assert_eq!(assessment, Assessment::new(Severity::Error, true), "{}", status);
        }
    }

    #[test]
    fn test_permanent_statuses_are_error_without_retry() {
        for status in PERMANENT {
            let assessment = StatusCategory::classify(Some(status)).assessment();
            assert_eq!(assessment, Assessment::new(Severity::Error, false), "{}", status);
        }
    }

    #[test]
    fn test_missing_status_retries_at_error() {
        assert_eq!(StatusCategory::classify(None), StatusCategory::UnknownRetry);
        assert_eq!(
            StatusCategory::classify(None).assessment(),
            Assessment::new(Severity::Error, true)
        );
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        assert_eq!(
            StatusCategory::classify(Some("STOPPED")),
            StatusCategory::TerminalSuccess
        );
        assert_eq!(
            StatusCategory::classify(Some("Rebooting")),
            StatusCategory::TransientRetry
        );
        assert_eq!(
            StatusCategory::classify(Some("Storage-Full")),
            StatusCategory::PermanentError
        );
    }

    #[test]
    fn test_unfamiliar_statuses_fail_closed() {
        // "available" is not in any list: a stop call that bounced off an
        // available database is not making progress toward stopped.
        for status in ["available", "some-future-status", ""] {
            let assessment = StatusCategory::classify(Some(status)).assessment();
            assert_eq!(assessment, Assessment::new(Severity::Error, false), "{}", status);
            assert!(!StatusCategory::recognized(status), "{}", status);
        }
    }

    #[test]
    fn test_recognized_tracks_the_lists() {
        for status in TERMINAL.iter().chain(TRANSIENT).chain(RECOVERABLE).chain(PERMANENT) {
            assert!(StatusCategory::recognized(status), "{}", status);
        }
        assert!(StatusCategory::recognized("STOPPED"));
    }

    #[test]
    fn test_severity_maps_to_log_levels() {
        assert_eq!(Severity::Info.level(), Level::Info);
        assert_eq!(Severity::Error.level(), Level::Error);
    }
}
