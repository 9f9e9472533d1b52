//! API error type and endpoint definitions
//!
//! Shared between any client of the insights API. The error intentionally
//! carries only a message: the dashboard surfaces one uniform failure and
//! does not branch on status codes.

use serde::{Deserialize, Serialize};

/// Error returned when fetching from the insights API fails.
///
/// Covers connection failures, non-2xx responses, and unparseable bodies
/// alike; callers render the message and nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchError {
    pub message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for FetchError {}

/// API endpoint definitions
pub mod endpoints {
    pub const EXPERIMENTS: &str = "/api/insights/experiments";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_displays_message() {
        let err = FetchError::new("Failed to fetch experiments");
        assert_eq!(err.to_string(), "Failed to fetch experiments");
    }

    #[test]
    fn experiments_endpoint_path() {
        assert_eq!(endpoints::EXPERIMENTS, "/api/insights/experiments");
    }
}
