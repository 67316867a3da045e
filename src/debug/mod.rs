//! Debug controls for forcing a controller into a given state.
//!
//! Lets a developer drive a view through loading, loaded, errored and reset
//! by hand, without a backend. The demo binds them to `l`, `d`, `e` and `x`.

use std::fmt;
use std::sync::Arc;

use crate::error::DebugError;
use crate::view_state::{ViewState, ViewStateController};

/// A manual state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugAction {
    /// Append `Loading`.
    Loading,
    /// Append `Loaded` with the mock info.
    Loaded,
    /// Append `Errored` with [`DebugError::DEFAULT`].
    Error,
    /// Reset the controller.
    Reset,
}

impl DebugAction {
    pub const ALL: [DebugAction; 4] = [
        DebugAction::Loading,
        DebugAction::Loaded,
        DebugAction::Error,
        DebugAction::Reset,
    ];

    /// Key bound to this action.
    pub fn key(self) -> char {
        match self {
            DebugAction::Loading => 'l',
            DebugAction::Loaded => 'd',
            DebugAction::Error => 'e',
            DebugAction::Reset => 'x',
        }
    }

    /// Action bound to `key`, if any.
    pub fn from_key(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            DebugAction::Loading => "Loading",
            DebugAction::Loaded => "Loaded",
            DebugAction::Error => "Error",
            DebugAction::Reset => "Reset",
        }
    }

    /// Apply the action to `controller`, cloning `mock_info` for `Loaded`.
    pub fn apply<Info: Clone>(self, controller: &mut ViewStateController<Info>, mock_info: &Info) {
        tracing::debug!(action = self.label(), "debug action");
        match self {
            DebugAction::Loading => controller.set_state(ViewState::Loading),
            DebugAction::Loaded => controller.set_state(ViewState::Loaded(mock_info.clone())),
            DebugAction::Error => {
                controller.set_state(ViewState::Errored(Arc::new(DebugError::DEFAULT)))
            }
            DebugAction::Reset => controller.reset(),
        }
    }

    /// Key hint line, e.g. `[l] Loading  [d] Loaded  [e] Error  [x] Reset`.
    pub fn hint_line() -> String {
        Self::ALL
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("  ")
    }
}

impl fmt::Display for DebugAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.key(), self.label())
    }
}
