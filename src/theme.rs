//! Color palette definitions for Kiosko's TUI.
//!
//! The clinic brand colors used across every screen live in this single
//! table of semantic roles. Rendering code never hard-codes RGB values;
//! it asks for a role (`brand`, `success`, `subtext`, ...) so the palette
//! can be adjusted in one place.
use ratatui::style::Color;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind panels.
    pub mantle: Color,
    /// Subtle surface color for card and modal backgrounds.
    pub surface: Color,
    /// Muted line/border color.
    pub border: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext: Color,
    /// Tertiary text for captions and low-emphasis content.
    pub faint: Color,
    /// Clinic brand color: headings, active navigation, selection.
    pub brand: Color,
    /// Dimmed brand shade for inactive accents and pagination dots.
    pub brand_dim: Color,
    /// Warm accent for calls to action and the hero eyebrow.
    pub accent: Color,
    /// Success/positive state color (form submitted, plan accepted).
    pub success: Color,
    /// Warning/attention state color.
    pub warning: Color,
    /// Error/danger state color (validation and relay failures).
    pub danger: Color,
}

/// Construct a [`Color::Rgb`] from an 8-bit RGB triplet.
///
/// This is a small helper to keep the palette definition concise.
fn hex(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Return the application's default theme palette.
///
/// Example
///
/// ```rust
/// use kiosko::theme::theme;
/// let t = theme();
/// let primary_text = t.text;
/// ```
pub fn theme() -> Theme {
    Theme {
        base: hex((0x10, 0x1a, 0x1e)),
        mantle: hex((0x0b, 0x13, 0x17)),
        surface: hex((0x1b, 0x2b, 0x31)),
        border: hex((0x2f, 0x45, 0x4c)),
        text: hex((0xe6, 0xf1, 0xf2)),
        subtext: hex((0xa9, 0xc0, 0xc4)),
        faint: hex((0x76, 0x91, 0x96)),
        brand: hex((0x3f, 0xb6, 0xb2)),
        brand_dim: hex((0x2a, 0x6f, 0x6d)),
        accent: hex((0xf2, 0xa1, 0x6d)),
        success: hex((0x8f, 0xd6, 0xa0)),
        warning: hex((0xf4, 0xd5, 0x8a)),
        danger: hex((0xef, 0x8b, 0x8b)),
    }
}
