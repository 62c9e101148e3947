//! Color theme constants for the login UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and focused elements
pub const COLOR_ACCENT: Color = Color::White;

/// Dim text for labels and hints
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for input boxes
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

/// Warning color for the inline error banner
pub const COLOR_WARNING: Color = Color::Yellow;

/// Success color for the welcome screen
pub const COLOR_SUCCESS: Color = Color::LightGreen;

/// Link-styled text (forgot password, register here)
pub const COLOR_LINK: Color = Color::Cyan;
