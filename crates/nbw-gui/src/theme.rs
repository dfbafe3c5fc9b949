//! Color palette and spacing constants for the in-app chrome.

use iced::Color;

// =============================================================================
// GRAYSCALE PALETTE
// =============================================================================

pub const WHITE: Color = Color::from_rgb(1.0, 1.0, 1.0);
/// Menu bar background
pub const GRAY_100: Color = Color::from_rgb(0.96, 0.96, 0.97);
/// Borders, separators, active menu button background
pub const GRAY_200: Color = Color::from_rgb(0.90, 0.90, 0.92);
/// Secondary text, disabled items, shortcuts
pub const GRAY_600: Color = Color::from_rgb(0.45, 0.45, 0.50);
/// Primary text
pub const GRAY_800: Color = Color::from_rgb(0.15, 0.15, 0.18);

// =============================================================================
// SPACING
// =============================================================================

pub const SPACING_XS: f32 = 4.0;
pub const SPACING_SM: f32 = 8.0;

pub const BORDER_RADIUS_MD: f32 = 6.0;
