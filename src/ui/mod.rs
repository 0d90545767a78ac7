//! UI rendering module.
//!
//! This module handles all the terminal UI rendering using Ratatui.
//! Drawing is a pure function of the application state.

pub mod animation;
mod banner;
mod bar;
pub mod colors;
pub mod gradient;
mod panels;
mod status;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::constants::layout;

use banner::banner_lines;
use panels::draw_panels;
use status::{draw_commands_bar, draw_status_bar, draw_title};

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App) {
    let banner_height = if app.variant.shows_banner() {
        layout::BANNER_HEIGHT
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(layout::TOP_MARGIN),
            Constraint::Length(banner_height),
            Constraint::Length(layout::TITLE_HEIGHT),
            Constraint::Length(layout::BODY_HEIGHT),
            Constraint::Length(layout::STATUS_HEIGHT),
            Constraint::Length(layout::HELP_HEIGHT),
            Constraint::Min(0),
        ])
        .split(frame.area());

    if app.variant.shows_banner() {
        frame.render_widget(Paragraph::new(banner_lines(app.width)), chunks[1]);
    }

    draw_title(frame, chunks[2], app);
    draw_panels(frame, body_area(chunks[3]), app);
    draw_status_bar(frame, chunks[4], app);
    draw_commands_bar(frame, chunks[5]);
}

/// The body keeps its natural width and hugs the left edge.
fn body_area(area: Rect) -> Rect {
    // Two panels plus border and inner padding on each side.
    let width = layout::PANEL_WIDTH * 2 + 4;
    Rect {
        width: width.min(area.width),
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    use crate::event::Action;
    use crate::variant::Variant;

    fn render(app: &App, width: u16, height: u16) -> Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn rows(buffer: &Buffer) -> Vec<String> {
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn app(variant: Variant) -> App {
        let at = Local.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();
        App::new(variant, 120, 40, at)
    }

    #[test]
    fn test_fast_layout() {
        let app = app(Variant::Fast);
        let screen = rows(&render(&app, 120, 40)).join("\n");

        assert!(screen.contains("Dev Stats — 14/03/2026"));
        assert!(screen.contains("Today"));
        assert!(screen.contains("This Month"));
        assert!(screen.contains("2 / 20  10%"));
        assert!(screen.contains("300 / 10000  3%"));
        assert!(screen.contains("updated at 09:26:53"));
        assert!(screen.contains("q quit   r reset"));
        assert!(screen.contains("╚═════╝"));
    }

    #[test]
    fn test_eased_layout_has_no_banner() {
        let app = app(Variant::Eased);
        let screen = rows(&render(&app, 120, 40)).join("\n");

        assert!(!screen.contains("╚═════╝"));
        assert!(screen.contains("5 / 20  25%"));
        assert!(screen.contains("mode: eased"));
    }

    #[test]
    fn test_banner_centered_on_known_width() {
        let app = app(Variant::Fast);
        let buffer = render(&app, 120, 40);
        let banner_row = &rows(&buffer)[1];

        // (120 - 76) / 2 columns of padding before the art starts.
        assert!(banner_row.starts_with(&" ".repeat(22)));
        assert!(!banner_row.starts_with(&" ".repeat(23)));
    }

    #[test]
    fn test_banner_left_aligned_after_shrinking() {
        let mut app = app(Variant::Fast);
        app.handle_action(Action::Resize(70, 40));
        let buffer = render(&app, 120, 40);

        assert!(rows(&buffer)[1].starts_with('█'));
    }

    #[test]
    fn test_full_bar_after_target_reached() {
        let mut app = app(Variant::Fast);
        for _ in 0..18 {
            app.on_tick(Local::now());
        }
        let screen = rows(&render(&app, 120, 40)).join("\n");

        assert!(screen.contains("20 / 20  100%"));
        assert!(screen.contains(&"█".repeat(30)));
    }

    #[test]
    fn test_small_terminal_does_not_panic() {
        let app = app(Variant::Fast);
        render(&app, 20, 5);
    }
}
