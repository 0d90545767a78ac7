//! Title bar, status line and help line.

use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

use super::colors;

/// Draws the title bar with today's date on a solid background.
pub fn draw_title(frame: &mut Frame, area: Rect, app: &App) {
    let style = Style::default().fg(colors::WHITE).bg(colors::ORANGE).bold();
    let title = format!(
        "     Dev Stats — {}     ",
        app.last_update.format("%d/%m/%Y")
    );

    frame.render_widget(Paragraph::new(Line::from(Span::styled(title, style))), area);
}

/// Draws the status line (data source, variant, last update).
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let text = format!(
        "  source: mock  •  mode: {}  •  updated at {}",
        app.variant,
        app.last_update.format("%H:%M:%S")
    );
    let status = Paragraph::new(text).style(Style::default().fg(colors::GRAY).italic());
    frame.render_widget(status, area);
}

/// Draws the key help below a one-row margin.
pub fn draw_commands_bar(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(colors::WHITE).bold();
    let desc = Style::default().fg(colors::GRAY);

    let commands = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled("q", key),
            Span::styled(" quit   ", desc),
            Span::styled("r", key),
            Span::styled(" reset", desc),
        ]),
    ]);
    frame.render_widget(commands, area);
}
