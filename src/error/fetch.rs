//! Errors produced by simulated fetches.

use thiserror::Error;

/// Failure of a simulated backend fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The fetch was configured to fail on this attempt.
    #[error("fetch #{attempt} failed: backend unavailable")]
    SimulatedFailure { attempt: u32 },
}

impl FetchError {
    /// Attempt number the error belongs to.
    pub fn attempt(&self) -> u32 {
        match self {
            FetchError::SimulatedFailure { attempt } => *attempt,
        }
    }

    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FetchError::SimulatedFailure { .. } => "FETCH_SIMULATED_FAILURE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::SimulatedFailure { attempt: 3 };
        assert_eq!(err.to_string(), "fetch #3 failed: backend unavailable");
        assert_eq!(err.attempt(), 3);
        assert_eq!(err.error_code(), "FETCH_SIMULATED_FAILURE");
    }
}
