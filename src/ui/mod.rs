//! Terminal rendering of view states.
//!
//! - [`StateView`]: renders a controller through its [`Presentation`]
//! - [`ModifyingList`]: list rows with a per-row indicator for ids the
//!   controller marks as modifying
//! - [`theme`]: colours and spinner frames
//!
//! [`Presentation`]: crate::presentation::Presentation

mod modifying_list;
mod state_view;
pub mod theme;

pub use modifying_list::{ListRow, ModifyingList};
pub use state_view::StateView;
