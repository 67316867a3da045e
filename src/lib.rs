//! View state controller - history-based loading/loaded/errored tracking for
//! views backed by remote data, with ratatui rendering helpers.
//!
//! The core lives in [`view_state`]; [`presentation`] and [`ui`] turn a
//! controller into something to draw. The remaining modules support the
//! `vsc-demo` binary.

pub mod app;
pub mod config;
pub mod debug;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod presentation;
pub mod terminal;
pub mod ui;
pub mod view_state;

pub use error::ErrorValue;
pub use view_state::{ViewState, ViewStateController, ViewStateKind};
