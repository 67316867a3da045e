//! Errors recorded by debug actions.

use thiserror::Error;

/// Error placed in the history by `DebugAction::Error`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DebugError {
    #[error("mock error (code {code})")]
    Mock { code: i32 },
}

impl DebugError {
    /// The mock error used by the debug controls.
    pub const DEFAULT: DebugError = DebugError::Mock { code: 12 };
}
