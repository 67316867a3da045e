//! Colour and glyph constants for rendering view states.

use ratatui::style::Color;

/// Border colour for state panels
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Titles and selected rows
pub const COLOR_ACCENT: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Loading indicators
pub const COLOR_LOADING: Color = Color::Cyan;

/// Error panel title
pub const COLOR_ERROR: Color = Color::Red;

/// Loaded-state markers in the status line
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117);

/// Braille spinner, one frame per tick.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner frame for `tick`.
pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick % SPINNER_FRAMES.len() as u64) as usize]
}
