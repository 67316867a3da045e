//! Error types for the view state controller.
//!
//! The controller itself never fails. It stores caller-supplied errors as an
//! opaque [`ErrorValue`] and hands them back through its queries. The typed
//! errors below belong to the code around it:
//!
//! | Type | Raised by |
//! |------|-----------|
//! | [`ConfigError`] | `DemoConfig::from_env` on malformed variables |
//! | [`DebugError`] | `DebugAction::Error`, the mock error it records |
//! | [`FetchError`] | the demo's simulated fetches |

mod config;
mod debug;
mod fetch;

use std::sync::Arc;

pub use config::ConfigError;
pub use debug::DebugError;
pub use fetch::FetchError;

/// Opaque, shareable error stored in an `Errored` view state.
///
/// Callers that know the concrete type can `downcast_ref` it.
pub type ErrorValue = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias for operations that fail with a [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;
