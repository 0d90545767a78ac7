//! Color theme definitions for the UI.
//!
//! All palette entries are compile-time constants; gradients are computed
//! from them on every draw.

use std::fmt;

use ratatui::style::Color;

/// A 24-bit color that can be interpolated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Linear interpolation between two colors, channel by channel.
///
/// `t` is clamped to `[0, 1]`, so the endpoints are returned exactly.
pub fn lerp(from: Rgb, to: Rgb, t: f64) -> Rgb {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let channel = |a: u8, b: u8| {
        let a = f64::from(a);
        let b = f64::from(b);
        (a + t * (b - a)).round().clamp(0.0, 255.0) as u8
    };
    Rgb::new(
        channel(from.r, to.r),
        channel(from.g, to.g),
        channel(from.b, to.b),
    )
}

// Brand colors
pub const ORANGE: Color = Color::Rgb(0xFC, 0x6D, 0x26);
pub const PURPLE: Color = Color::Rgb(0x6B, 0x4F, 0xBB);
pub const WHITE: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
pub const GRAY: Color = Color::Rgb(0x8B, 0x8F, 0xA8);
/// Rules and empty bar cells
pub const DIM: Color = Color::Rgb(0x2D, 0x2B, 0x55);

// Zone endpoints: each zone has a dark start and a bright end
pub const RED_START: Rgb = Rgb::new(0x6B, 0x00, 0x00);
pub const RED_END: Rgb = Rgb::new(0xDD, 0x41, 0x32);
pub const ORANGE_START: Rgb = Rgb::new(0xC0, 0x5A, 0x00);
pub const ORANGE_END: Rgb = Rgb::new(0xFC, 0x6D, 0x26);
pub const GREEN_START: Rgb = Rgb::new(0x0A, 0x52, 0x30);
pub const GREEN_END: Rgb = Rgb::new(0x2D, 0xA1, 0x60);
pub const BRIGHT_GREEN_START: Rgb = Rgb::new(0x1A, 0x7A, 0x40);
pub const BRIGHT_GREEN_END: Rgb = Rgb::new(0x3E, 0xE0, 0x7F);

/// Empty bar cell color
pub const BAR_EMPTY: Rgb = Rgb::new(0x2D, 0x2B, 0x55);

// Flat percentage label colors
pub const LABEL_DANGER: Rgb = Rgb::new(0xDD, 0x41, 0x32);
pub const LABEL_WARNING: Rgb = Rgb::new(0xFC, 0x6D, 0x26);
pub const LABEL_SUCCESS: Rgb = Rgb::new(0x2D, 0xA1, 0x60);

// Banner ramp: yellow -> orange -> red
pub const BANNER_YELLOW: Rgb = Rgb::new(0xFF, 0xD7, 0x00);
pub const BANNER_ORANGE: Rgb = Rgb::new(0xFF, 0x6B, 0x00);
pub const BANNER_RED: Rgb = Rgb::new(0xCC, 0x00, 0x00);
