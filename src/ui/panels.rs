//! The two metric panels ("Today" and "This Month").

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::app::App;
use crate::constants::{layout, BAR_WIDTH};
use crate::metrics::{Category, Counter, MetricId, Period};

use super::bar::bar_line;
use super::colors;
use super::gradient::label_color;

/// Draws the bordered body with both panels side by side.
pub fn draw_panels(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::PURPLE))
        .border_set(symbols::border::ROUNDED)
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(layout::PANEL_WIDTH),
            Constraint::Length(layout::PANEL_WIDTH),
        ])
        .split(inner);

    frame.render_widget(panel(Period::Daily, app), columns[0]);
    frame.render_widget(panel(Period::Monthly, app), columns[1]);
}

/// Builds one panel: a section title followed by the three metrics.
fn panel(period: Period, app: &App) -> Paragraph<'static> {
    let mut lines = vec![
        Line::from(Span::styled(
            period_title(period),
            Style::default().fg(colors::PURPLE).bold(),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            "━".repeat(layout::RULE_WIDTH as usize),
            Style::default().fg(colors::ORANGE),
        )),
        Line::from(""),
    ];

    for (i, category) in Category::ALL.into_iter().enumerate() {
        if i > 0 {
            lines.push(rule());
        }
        let id = MetricId::new(period, category);
        lines.extend(metric_lines(category, app.counter(id), app.bar_percentage(id)));
    }

    Paragraph::new(lines).block(Block::default().padding(Padding::new(3, 3, 1, 1)))
}

/// Label, bar and numbers for one metric.
///
/// `bar_p` is the percentage the bar shows, which may lag the counter while
/// an eased animation plays.
pub fn metric_lines(category: Category, counter: Counter, bar_p: f64) -> [Line<'static>; 3] {
    let p = counter.percentage();
    let (icon, label) = category_label(category);

    let label = Line::from(Span::styled(
        format!("{icon}  {label}"),
        Style::default().fg(colors::GRAY).bold(),
    ));

    let info = Line::from(vec![
        Span::styled(
            format!("{} / {}", counter.current, counter.target),
            Style::default().fg(colors::WHITE),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{:.0}%", p * 100.0),
            Style::default().fg(label_color(p).into()).bold(),
        ),
    ]);

    [label, bar_line(bar_p, BAR_WIDTH), info]
}

fn rule() -> Line<'static> {
    Line::from(Span::styled(
        "─".repeat(layout::RULE_WIDTH as usize),
        Style::default().fg(colors::DIM),
    ))
}

fn period_title(period: Period) -> &'static str {
    match period {
        Period::Daily => "📅  Today",
        Period::Monthly => "📆  This Month",
    }
}

fn category_label(category: Category) -> (&'static str, &'static str) {
    match category {
        Category::Commits => ("⎇", "Commits"),
        Category::Issues => ("◈", "Issues"),
        Category::Lines => ("≡", "Lines of Code"),
    }
}
