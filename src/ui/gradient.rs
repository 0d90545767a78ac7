//! Percentage-driven color selection.

use super::colors::{self, lerp, Rgb};

/// Upper bound of the danger zone.
pub const DANGER_LIMIT: f64 = 0.4;
/// Upper bound of the warning zone.
pub const WARNING_LIMIT: f64 = 0.7;

/// Which band a percentage falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Danger,
    Warning,
    Success,
}

impl Zone {
    pub fn of(p: f64) -> Self {
        if p < DANGER_LIMIT {
            Zone::Danger
        } else if p < WARNING_LIMIT {
            Zone::Warning
        } else {
            Zone::Success
        }
    }
}

/// Gradient endpoints for a bar at percentage `p`.
///
/// Each zone fades linearly into the next so the colors are continuous at
/// the zone boundaries.
pub fn zone_colors(p: f64) -> (Rgb, Rgb) {
    match Zone::of(p) {
        Zone::Danger => {
            let t = p / DANGER_LIMIT;
            (
                lerp(colors::RED_START, colors::ORANGE_START, t),
                lerp(colors::RED_END, colors::ORANGE_END, t),
            )
        }
        Zone::Warning => {
            let t = (p - DANGER_LIMIT) / (WARNING_LIMIT - DANGER_LIMIT);
            (
                lerp(colors::ORANGE_START, colors::GREEN_START, t),
                lerp(colors::ORANGE_END, colors::GREEN_END, t),
            )
        }
        Zone::Success => {
            let t = (p - WARNING_LIMIT) / (1.0 - WARNING_LIMIT);
            (
                lerp(colors::GREEN_START, colors::BRIGHT_GREEN_START, t),
                lerp(colors::GREEN_END, colors::BRIGHT_GREEN_END, t),
            )
        }
    }
}

/// Flat color for the percentage label.
pub fn label_color(p: f64) -> Rgb {
    match Zone::of(p) {
        Zone::Danger => colors::LABEL_DANGER,
        Zone::Warning => colors::LABEL_WARNING,
        Zone::Success => colors::LABEL_SUCCESS,
    }
}

/// Banner color at horizontal position `t` (0 = left edge, 1 = right edge).
pub fn banner_color(t: f64) -> Rgb {
    if t < 0.5 {
        lerp(colors::BANNER_YELLOW, colors::BANNER_ORANGE, t * 2.0)
    } else {
        lerp(colors::BANNER_ORANGE, colors::BANNER_RED, (t - 0.5) * 2.0)
    }
}
