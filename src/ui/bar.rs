//! Gradient progress bars.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use super::colors::{self, lerp};
use super::gradient::zone_colors;

/// Solid cell glyph.
pub const FILLED_GLYPH: &str = "█";
/// Muted cell glyph.
pub const EMPTY_GLYPH: &str = "░";

/// Number of solid cells for a bar of `width` at percentage `p`.
pub fn filled_cells(p: f64, width: usize) -> usize {
    let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
    ((p * width as f64).floor() as usize).min(width)
}

/// Renders a bar of `width` cells at percentage `p`.
///
/// Solid cells ramp between the zone colors for `p`, left to right across
/// the full bar width, so a bar's color at a given column does not depend on
/// how much of it is filled.
pub fn bar_line(p: f64, width: usize) -> Line<'static> {
    let filled = filled_cells(p, width);
    let (from, to) = zone_colors(p);
    let span_of = width.saturating_sub(1).max(1) as f64;

    let cells = (0..width).map(|i| {
        if i < filled {
            let color = lerp(from, to, i as f64 / span_of);
            Span::styled(FILLED_GLYPH, Style::default().fg(color.into()))
        } else {
            Span::styled(EMPTY_GLYPH, Style::default().fg(colors::BAR_EMPTY.into()))
        }
    });

    Line::from(cells.collect::<Vec<_>>())
}
