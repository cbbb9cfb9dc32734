//! Client configuration: base URL and transport timeouts.

use std::time::Duration;

use crate::error::ApiError;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

pub const BASE_URL_VAR: &str = "MOVIES_BASE_URL";
pub const CONNECT_TIMEOUT_VAR: &str = "MOVIES_CONNECT_TIMEOUT_MS";
pub const READ_TIMEOUT_VAR: &str = "MOVIES_READ_TIMEOUT_MS";
pub const WRITE_TIMEOUT_VAR: &str = "MOVIES_WRITE_TIMEOUT_MS";

/// Deadlines handed to the transport. `read` covers waiting for the response
/// head and body, `write` covers sending the request head and body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub connect: Duration,
    pub read: Duration,
    pub write: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            connect: DEFAULT_TIMEOUT,
            read: DEFAULT_TIMEOUT,
            write: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeouts: Timeouts,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            timeouts: Timeouts::default(),
        }
    }

    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Read configuration from `MOVIES_*` environment variables.
    ///
    /// `MOVIES_BASE_URL` is required; the timeout variables are optional
    /// millisecond counts.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        let base_url = lookup(BASE_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ApiError::ConfigError(format!("{BASE_URL_VAR} is not set")))?;

        let defaults = Timeouts::default();
        let timeouts = Timeouts {
            connect: millis(&lookup, CONNECT_TIMEOUT_VAR)?.unwrap_or(defaults.connect),
            read: millis(&lookup, READ_TIMEOUT_VAR)?.unwrap_or(defaults.read),
            write: millis(&lookup, WRITE_TIMEOUT_VAR)?.unwrap_or(defaults.write),
        };

        Ok(Self { base_url, timeouts })
    }
}

fn millis(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<Duration>, ApiError> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<u64>()
        .map(|ms| Some(Duration::from_millis(ms)))
        .map_err(|e| ApiError::ConfigError(format!("{key}={raw:?}: {e}")))
}
