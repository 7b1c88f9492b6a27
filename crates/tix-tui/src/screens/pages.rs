//! Render-only informational screens: home, events, hotels, contact, about.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Row, Table};
use tix_core::content::{self, Page};

/// Renders a static text page.
pub fn render_page(frame: &mut Frame, area: Rect, page: &Page) {
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            page.title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    lines.extend(page.body.lines().map(Line::from));
    frame.render_widget(Paragraph::new(lines), area);
}

/// Renders the event listing as a table.
pub fn render_events(frame: &mut Frame, area: Rect) {
    let header = Row::new(["Event", "Venue", "City", "Date", "Price"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = content::events()
        .iter()
        .map(|event| Row::new([event.name, event.venue, event.city, event.date, event.price]))
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(22),
            Constraint::Min(18),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(6),
        ],
    )
    .header(header)
    .column_spacing(2);

    frame.render_widget(table, area);
}

/// Renders the partner hotel listing as a table.
pub fn render_hotels(frame: &mut Frame, area: Rect) {
    let header = Row::new(["Hotel", "City", "Location", "Rate"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = content::hotels()
        .iter()
        .map(|hotel| Row::new([hotel.name, hotel.city, hotel.distance, hotel.rate]))
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(16),
            Constraint::Length(10),
            Constraint::Min(26),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .column_spacing(2);

    frame.render_widget(table, area);
}

/// Renders the home screen, including login status.
pub fn render_home(frame: &mut Frame, area: Rect, username: Option<&str>) {
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            content::HOME.title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    lines.extend(content::HOME.body.lines().map(Line::from));
    lines.push(Line::default());
    match username {
        Some(name) => lines.push(Line::from(Span::styled(
            format!("Logged in as {name}."),
            Style::default().fg(Color::Green),
        ))),
        None => lines.push(Line::from(Span::styled(
            "Not logged in. Open the Login tab to sign in.",
            Style::default().fg(Color::DarkGray),
        ))),
    }
    frame.render_widget(Paragraph::new(lines), area);
}
