//! Deciding what a loadable view should show.
//!
//! Rendering code is expected to branch on [`Presentation`] rather than on
//! the raw queries, so every frontend resolves the history the same way:
//!
//! | Situation | Presentation |
//! |-----------|--------------|
//! | first fetch in flight, nothing settled yet | `InitialLoading` |
//! | latest settled state is `Loaded` | `Loaded { reloading }` |
//! | latest settled state is `Errored` | `Errored { reloading }` |
//! | nothing settled, not loading (or history reset) | `Content` |

mod style;

pub use style::{ErrorViewStyle, LoadingStyle, PresentationConfig};

use crate::error::ErrorValue;
use crate::view_state::ViewStateController;

/// What a view backed by a [`ViewStateController`] should render.
#[derive(Debug)]
pub enum Presentation<'a, Info> {
    /// First fetch in flight, nothing to show yet.
    InitialLoading,
    /// Show `info`; `reloading` is set while a later fetch is in flight.
    Loaded { info: &'a Info, reloading: bool },
    /// Show `error`; `reloading` is set while a retry is in flight.
    Errored { error: &'a ErrorValue, reloading: bool },
    /// Nothing loaded yet and nothing in flight: show the view's own content.
    Content,
}

impl<Info> Clone for Presentation<'_, Info> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Info> Copy for Presentation<'_, Info> {}

impl<'a, Info> Presentation<'a, Info> {
    /// Resolve the presentation for `controller`.
    pub fn of(controller: &'a ViewStateController<Info>) -> Self {
        if controller.is_initial_loading() {
            return Presentation::InitialLoading;
        }

        let reloading = controller.is_loading();
        if let Some(info) = controller.latest_valid_info() {
            Presentation::Loaded { info, reloading }
        } else if let Some(error) = controller.latest_valid_error() {
            Presentation::Errored { error, reloading }
        } else {
            Presentation::Content
        }
    }

    /// Whether a loading indicator belongs on screen.
    pub fn is_loading(&self) -> bool {
        match self {
            Presentation::InitialLoading => true,
            Presentation::Loaded { reloading, .. } | Presentation::Errored { reloading, .. } => {
                *reloading
            }
            Presentation::Content => false,
        }
    }

    /// Short label, mostly for logs and status lines.
    pub fn label(&self) -> &'static str {
        match self {
            Presentation::InitialLoading => "initial-loading",
            Presentation::Loaded { reloading: false, .. } => "loaded",
            Presentation::Loaded { reloading: true, .. } => "loaded+reloading",
            Presentation::Errored { reloading: false, .. } => "errored",
            Presentation::Errored { reloading: true, .. } => "errored+reloading",
            Presentation::Content => "content",
        }
    }
}

impl<Info> ViewStateController<Info> {
    /// Shorthand for [`Presentation::of`].
    pub fn presentation(&self) -> Presentation<'_, Info> {
        Presentation::of(self)
    }
}
