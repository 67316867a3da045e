//! Prelude module for convenient imports.
//!
//! ```
//! use view_state_controller::prelude::*;
//!
//! let mut controller: ViewStateController<u32> = ViewStateController::new();
//! controller.set_state(ViewState::Loading);
//! assert!(matches!(controller.presentation(), Presentation::InitialLoading));
//! ```

// Core types
pub use crate::error::ErrorValue;
pub use crate::view_state::{ControllerSnapshot, ViewState, ViewStateController, ViewStateKind};

// Presentation
pub use crate::presentation::{ErrorViewStyle, LoadingStyle, Presentation, PresentationConfig};

// Rendering
pub use crate::ui::{ListRow, ModifyingList, StateView};

// Debug controls
pub use crate::debug::DebugAction;
