//! Theme module for trivia-tui
//!
//! Centralized color palette and styling constants. The dark palette keeps
//! the charts readable.

use ratatui::style::Color;
use ratatui::symbols::border;

// ============================================================================
// Background Colors
// ============================================================================

/// Primary background color (#0a0e14)
pub const BG_PRIMARY: Color = Color::Rgb(10, 14, 20);

/// Secondary background color, used for cards (#12161c)
pub const BG_SECONDARY: Color = Color::Rgb(18, 22, 28);

/// Tertiary background color, used for the selected option (#1a1f26)
pub const BG_TERTIARY: Color = Color::Rgb(26, 31, 38);

/// Subtle border color (#1e2530)
pub const BORDER_SUBTLE: Color = Color::Rgb(30, 37, 48);

// ============================================================================
// Accent Colors
// ============================================================================

/// Primary cyan accent color (#00d4aa)
pub const CYAN_PRIMARY: Color = Color::Rgb(0, 212, 170);

/// Dimmed cyan for secondary elements (#0a8a6e)
pub const CYAN_DIM: Color = Color::Rgb(10, 138, 110);

/// Category chart bars (#8884d8)
pub const BAR_CATEGORY: Color = Color::Rgb(136, 132, 216);

/// Difficulty chart bars (#82ca9d)
pub const BAR_DIFFICULTY: Color = Color::Rgb(130, 202, 157);

// ============================================================================
// Status Colors
// ============================================================================

/// Amber warning color (#fbbf24)
pub const AMBER_WARNING: Color = Color::Rgb(251, 191, 36);

/// Red error color (#f87171)
pub const RED_ERROR: Color = Color::Rgb(248, 113, 113);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Secondary text color (#94a3b8)
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);

/// Muted text color, for labels and hints (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

/// Rounded corners for cards and panels
pub const ROUNDED_BORDERS: border::Set = border::ROUNDED;

/// Alternate between two colors every few animation ticks
pub fn get_pulse_color(tick: u64, bright: Color, dim: Color) -> Color {
    if (tick / 4) % 2 == 0 { bright } else { dim }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_color_alternates() {
        assert_eq!(get_pulse_color(0, CYAN_PRIMARY, CYAN_DIM), CYAN_PRIMARY);
        assert_eq!(get_pulse_color(3, CYAN_PRIMARY, CYAN_DIM), CYAN_PRIMARY);
        assert_eq!(get_pulse_color(4, CYAN_PRIMARY, CYAN_DIM), CYAN_DIM);
        assert_eq!(get_pulse_color(8, CYAN_PRIMARY, CYAN_DIM), CYAN_PRIMARY);
    }
}
