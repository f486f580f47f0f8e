//! Environment configuration.

use log::warn;

/// Name of the flag that keeps successfully stopped items retrying until a
/// later delivery observes the resource in a terminal status.
pub const FOLLOW_UNTIL_STOPPED_VAR: &str = "FOLLOW_UNTIL_STOPPED";

/// Process-wide configuration, read once at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Treat an accepted stop request as unfinished business: keep the item
    /// in the retry set until the resource is seen stopped.
    pub follow_until_stopped: bool,
}

impl Config {
    /// Read configuration from the environment.
    pub fn from_env() -> Self {
        Self {
            follow_until_stopped: env_flag(FOLLOW_UNTIL_STOPPED_VAR),
        }
    }
}

/// Parse a boolean environment flag. Unset or empty means false; anything
/// outside the known true/false tokens logs a warning and means false.
fn env_flag(name: &str) -> bool {
    match std::env::var(name) {
        Ok(raw) => match raw.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "" | "0" | "false" | "no" | "off" => false,
            other => {
                warn!("Ignoring unrecognized value {:?} for {}", other, name);
                false
            }
        },
        Err(_) => false,
    }
}
