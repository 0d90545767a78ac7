//! "DEV-STATS" banner with a left-to-right color ramp.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::constants::layout::BANNER_WIDTH;

use super::gradient::banner_color;

const BANNER: [&str; 6] = [
    "██████╗ ███████╗██╗   ██╗         ███████╗████████╗ █████╗ ████████╗███████╗",
    "██╔══██╗██╔════╝██║   ██║         ██╔════╝╚══██╔══╝██╔══██╗╚══██╔══╝██╔════╝",
    "██║  ██║█████╗  ██║   ██║ ─────── ███████╗   ██║   ███████║   ██║   ███████╗",
    "██║  ██║██╔══╝  ╚██╗ ██╔╝         ╚════██║   ██║   ██╔══██║   ██║   ╚════██║",
    "██████╔╝███████╗ ╚████╔╝          ███████║   ██║   ██║  ██║   ██║   ███████║",
    "╚═════╝ ╚══════╝  ╚═══╝           ╚══════╝   ╚═╝   ╚═╝  ╚═╝   ╚═╝   ╚══════╝",
];

/// Left padding that centers the banner in a terminal `width` columns wide.
///
/// An unknown (zero) or narrow width leaves the banner left-aligned.
pub fn banner_padding(width: u16) -> u16 {
    if width > BANNER_WIDTH {
        (width - BANNER_WIDTH) / 2
    } else {
        0
    }
}

/// Banner rows, each character colored by its column.
pub fn banner_lines(width: u16) -> Vec<Line<'static>> {
    let pad = " ".repeat(banner_padding(width) as usize);

    BANNER
        .iter()
        .map(|row| {
            let chars: Vec<char> = row.chars().collect();
            let last = chars.len().saturating_sub(1).max(1) as f64;

            let mut spans = Vec::with_capacity(chars.len() + 1);
            spans.push(Span::raw(pad.clone()));
            spans.extend(chars.iter().enumerate().map(|(j, ch)| {
                let color = banner_color(j as f64 / last);
                Span::styled(ch.to_string(), Style::default().fg(color.into()))
            }));
            Line::from(spans)
        })
        .collect()
}
