//! Lifecycle states recorded by a [`ViewStateController`].
//!
//! [`ViewStateController`]: super::ViewStateController

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ErrorValue;

/// State of a view that loads information from a backend.
#[derive(Clone)]
pub enum ViewState<Info> {
    /// No lifecycle event has happened yet.
    Initial,
    /// A fetch is in flight.
    Loading,
    /// The fetch completed and produced `Info`.
    Loaded(Info),
    /// The fetch failed.
    Errored(ErrorValue),
}

impl<Info> ViewState<Info> {
    /// Build an `Errored` state from any error, or from a plain message.
    ///
    /// ```
    /// use view_state_controller::ViewState;
    ///
    /// let state: ViewState<u32> = ViewState::errored("net-fail");
    /// assert_eq!(state.error().map(|e| e.to_string()).as_deref(), Some("net-fail"));
    /// ```
    pub fn errored<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        ViewState::Errored(Arc::from(error.into()))
    }

    /// Payload-free discriminant of this state.
    pub fn kind(&self) -> ViewStateKind {
        match self {
            ViewState::Initial => ViewStateKind::Initial,
            ViewState::Loading => ViewStateKind::Loading,
            ViewState::Loaded(_) => ViewStateKind::Loaded,
            ViewState::Errored(_) => ViewStateKind::Errored,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// True for `Loaded` and `Errored`, the states that settle a fetch.
    pub fn is_settled(&self) -> bool {
        matches!(self, ViewState::Loaded(_) | ViewState::Errored(_))
    }

    /// Payload of a `Loaded` state.
    pub fn info(&self) -> Option<&Info> {
        match self {
            ViewState::Loaded(info) => Some(info),
            _ => None,
        }
    }

    /// Error carried by an `Errored` state.
    pub fn error(&self) -> Option<&ErrorValue> {
        match self {
            ViewState::Errored(error) => Some(error),
            _ => None,
        }
    }
}

/// Equality looks at the variant only. Two `Loaded` states holding different
/// payloads compare equal, as do two `Errored` states with different errors.
impl<Info> PartialEq for ViewState<Info> {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind()
    }
}

impl<Info> Eq for ViewState<Info> {}

impl<Info: fmt::Debug> fmt::Debug for ViewState<Info> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewState::Initial => f.write_str("Initial"),
            ViewState::Loading => f.write_str("Loading"),
            ViewState::Loaded(info) => f.debug_tuple("Loaded").field(info).finish(),
            ViewState::Errored(error) => f
                .debug_tuple("Errored")
                .field(&format_args!("{}", error))
                .finish(),
        }
    }
}

/// Discriminant of a [`ViewState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewStateKind {
    Initial,
    Loading,
    Loaded,
    Errored,
}

impl ViewStateKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewStateKind::Initial => "initial",
            ViewStateKind::Loading => "loading",
            ViewStateKind::Loaded => "loaded",
            ViewStateKind::Errored => "errored",
        }
    }
}

impl fmt::Display for ViewStateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
