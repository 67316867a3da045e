//! History-backed controller for a loadable view.

use std::fmt;

use super::state::ViewState;
use crate::error::ErrorValue;

/// Tracks the lifecycle of a view that loads remote data.
///
/// Every state ever set is kept, oldest first. Queries scan that history
/// instead of storing derived flags, so the answer to "is this the first
/// load?" or "is the error still relevant?" always reflects what actually
/// happened.
///
/// The controller is a plain value with a single owner. Fetches running
/// elsewhere must hand their results to that owner, which calls
/// [`set_state`](Self::set_state).
#[derive(Clone)]
pub struct ViewStateController<Info> {
    /// Historical states, oldest first.
    states: Vec<ViewState<Info>>,
    /// Ids of sub-items currently being modified (e.g. a row being deleted).
    modifying_ids: Option<Vec<String>>,
}

impl<Info> Default for ViewStateController<Info> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Info> ViewStateController<Info> {
    /// Create a controller whose history is `[Initial]`.
    pub fn new() -> Self {
        Self {
            states: vec![ViewState::Initial],
            modifying_ids: None,
        }
    }

    /// Append `state` to the history.
    ///
    /// No transition is rejected and nothing is deduplicated.
    pub fn set_state(&mut self, state: ViewState<Info>) {
        let kind = state.kind();
        self.states.push(state);
        tracing::trace!(state = %kind, len = self.states.len(), "view state appended");
    }

    /// Clear the history and the modifying ids.
    ///
    /// Unlike [`new`](Self::new) this leaves the history empty, not
    /// `[Initial]`. Every query answers false/`None` until the next
    /// [`set_state`](Self::set_state).
    pub fn reset(&mut self) {
        tracing::debug!(dropped = self.states.len(), "view state history reset");
        self.states.clear();
        self.modifying_ids = None;
    }

    /// Recorded states, oldest first.
    pub fn history(&self) -> &[ViewState<Info>] {
        &self.states
    }

    /// True if the most recent state is `Loading`.
    pub fn is_loading(&self) -> bool {
        self.states.last().is_some_and(ViewState::is_loading)
    }

    /// True only if `Loading` was set exactly once and no info or error has
    /// been recorded anywhere in the history.
    pub fn is_initial_loading(&self) -> bool {
        self.states.iter().filter(|s| s.is_loading()).count() == 1
            && !self.states.iter().any(|s| s.info().is_some())
            && !self.states.iter().any(|s| s.error().is_some())
    }

    /// Info of the most recent settled state.
    ///
    /// `None` if an error was recorded after the latest info.
    pub fn latest_valid_info(&self) -> Option<&Info> {
        self.find_last(ViewState::is_settled, ViewState::info)
    }

    /// Info of the most recent `Loaded` state, even if an error came after it.
    pub fn latest_info(&self) -> Option<&Info> {
        self.find_last(|s| s.info().is_some(), ViewState::info)
    }

    /// Error of the most recent settled state.
    ///
    /// `None` if info was loaded after the latest error.
    pub fn latest_valid_error(&self) -> Option<&ErrorValue> {
        self.find_last(ViewState::is_settled, ViewState::error)
    }

    /// Error of the most recent `Errored` state, even if info came after it.
    pub fn latest_error(&self) -> Option<&ErrorValue> {
        self.find_last(|s| s.error().is_some(), ViewState::error)
    }

    /// The latest informational state: info if valid, else the valid error.
    pub fn latest_non_loading(&self) -> Option<Result<&Info, &ErrorValue>> {
        if let Some(info) = self.latest_valid_info() {
            Some(Ok(info))
        } else {
            self.latest_valid_error().map(Err)
        }
    }

    /// Ids of the sub-items currently being modified, if any.
    pub fn modifying_ids(&self) -> Option<&[String]> {
        self.modifying_ids.as_deref()
    }

    /// Replace the modifying ids. Independent of the state history.
    pub fn set_modifying_ids(&mut self, ids: Option<Vec<String>>) {
        self.modifying_ids = ids;
    }

    /// True if `id` is among the modifying ids.
    pub fn is_modifying(&self, id: &str) -> bool {
        self.modifying_ids
            .as_ref()
            .is_some_and(|ids| ids.iter().any(|m| m == id))
    }

    /// Scan the history backwards for the first state matching `pred` and
    /// pull a field out of it.
    fn find_last<'a, T: ?Sized>(
        &'a self,
        pred: impl Fn(&ViewState<Info>) -> bool,
        extract: impl FnOnce(&'a ViewState<Info>) -> Option<&'a T>,
    ) -> Option<&'a T> {
        self.states.iter().rev().find(|&s| pred(s)).and_then(extract)
    }
}

impl<Info: fmt::Debug> fmt::Debug for ViewStateController<Info> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewStateController")
            .field("states", &self.states)
            .field("modifying_ids", &self.modifying_ids)
            .finish()
    }
}
