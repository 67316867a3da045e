//! State history for views that load remote data.
//!
//! A view records every lifecycle event it goes through (start of a fetch,
//! success, failure) in a [`ViewStateController`]. Rendering code never keeps
//! its own flags; it asks the controller instead:
//!
//! ```text
//!  fetch starts ──► set_state(Loading)
//!  fetch ok     ──► set_state(Loaded(info))
//!  fetch failed ──► set_state(Errored(err))
//!                        │
//!                        ▼
//!        ┌───────────────────────────────┐
//!        │ [Initial, Loading, Loaded, …] │
//!        └───────────────┬───────────────┘
//!                        │ backward scans
//!                        ▼
//!   is_loading · is_initial_loading · latest_valid_info · latest_error …
//! ```
//!
//! ## Components
//!
//! - [`ViewState`]: a single recorded state
//! - [`ViewStateKind`]: its payload-free discriminant
//! - [`ViewStateController`]: the history and its derived queries
//! - [`ControllerSnapshot`]: serializable summary for debug logging

mod controller;
mod snapshot;
mod state;

pub use controller::ViewStateController;
pub use snapshot::ControllerSnapshot;
pub use state::{ViewState, ViewStateKind};
