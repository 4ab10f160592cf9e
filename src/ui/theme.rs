//! Color theme constants for the MindSpoke UI
//!
//! A calm teal palette shared with the share card.

use ratatui::style::Color;

// ============================================================================
// Base palette
// ============================================================================

/// Deep teal, primary text and active borders
pub const COLOR_DEEP_TEAL: Color = Color::Rgb(0, 60, 67); // #003C43

/// Light teal, accents and focused controls
pub const COLOR_LIGHT_TEAL: Color = Color::Rgb(19, 93, 102); // #135D66

/// Soft green, affirmation and success feedback
pub const COLOR_SOFT_GREEN: Color = Color::Rgb(168, 216, 185);

/// Calm beige, the header title
pub const COLOR_BEIGE: Color = Color::Rgb(245, 245, 220); // #F5F5DC

// ============================================================================
// Roles
// ============================================================================

/// Panel borders
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Focused control marker and border
pub const COLOR_ACCENT: Color = Color::Rgb(119, 176, 170);

/// Header text
pub const COLOR_HEADER: Color = COLOR_BEIGE;

/// Less important info and hints
pub const COLOR_DIM: Color = Color::DarkGray;

/// Regular body text
pub const COLOR_TEXT: Color = Color::White;

/// Error text in the result panel
pub const COLOR_ERROR: Color = Color::Rgb(229, 115, 115);

/// Skeleton bars, two shades for the pulse
pub const COLOR_SKELETON: Color = Color::Rgb(50, 60, 64);
pub const COLOR_SKELETON_PULSE: Color = Color::Rgb(70, 84, 88);

/// Background for dialog boxes
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);
