//! Centralized banner color palette & helpers.
//! Single source of truth for bubble fills and the CTA button styling.

use bevy::prelude::*;

/// Alternating bubble fills (pastel cyan / pastel blue).
pub const BUBBLE_COLORS: [Color; 2] = [
    Color::srgb(0.773, 0.965, 0.980), // #c5f6fa
    Color::srgb(0.816, 0.922, 1.0),   // #d0ebff
];

/// CTA button fill + label color.
pub const BUTTON_FILL: Color = Color::srgb(0.133, 0.545, 0.902); // #228be6
pub const BUTTON_TEXT: Color = Color::WHITE;

/// Even serials take the first fill, odd serials the second.
#[inline]
pub fn color_for_serial(n: usize) -> Color {
    BUBBLE_COLORS[n % BUBBLE_COLORS.len()]
}
