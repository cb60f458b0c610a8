//! Theme and Colors
//!
//! The sortviz palette. Bars take a gradient color by height; highlighted
//! bars take the color of their marker role instead.

use ratatui::style::Color;
use sorter_core::Marker;

// ============================================================================
// Bar Gradient (low values first)
// ============================================================================

/// Coral - lowest quarter of the value domain
pub const GRADIENT_CORAL: Color = Color::Rgb(255, 107, 107);

/// Sunflower
pub const GRADIENT_SUN: Color = Color::Rgb(255, 230, 109);

/// Teal
pub const GRADIENT_TEAL: Color = Color::Rgb(78, 205, 196);

/// Slate - highest quarter of the value domain
pub const GRADIENT_SLATE: Color = Color::Rgb(85, 98, 112);

pub const GRADIENT: [Color; 4] = [GRADIENT_CORAL, GRADIENT_SUN, GRADIENT_TEAL, GRADIENT_SLATE];

// ============================================================================
// Marker Colors
// ============================================================================

// Marker colors stay outside the gradient so a highlighted bar never blends in

/// Primary marker - the index being worked on
pub const MARKER_PRIMARY: Color = Color::Rgb(255, 255, 255);

/// Secondary marker - the index it was exchanged with
pub const MARKER_SECONDARY: Color = Color::Rgb(199, 125, 255);

// ============================================================================
// UI Colors
// ============================================================================

/// Title and accents
pub const ACCENT: Color = Color::Magenta;

/// System/dim text
pub const DIM_GRAY: Color = Color::Rgb(100, 100, 100);

/// Completion message
pub const SUCCESS_GREEN: Color = Color::Rgb(120, 230, 120);

/// Color for a marker role
pub fn marker_color(marker: Marker) -> Color {
    match marker {
        Marker::Primary => MARKER_PRIMARY,
        Marker::Secondary => MARKER_SECONDARY,
    }
}

/// Gradient color for a bar of `value` in `min..=max`
pub fn bar_color(value: u32, min: u32, max: u32) -> Color {
    let span = max.saturating_sub(min);
    if span == 0 {
        return GRADIENT[0];
    }
    let offset = value.clamp(min, max) - min;
    let bucket = (offset as usize * GRADIENT.len()) / (span as usize + 1);
    GRADIENT[bucket.min(GRADIENT.len() - 1)]
}
