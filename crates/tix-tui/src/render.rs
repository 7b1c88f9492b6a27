//! Top-level rendering: tab bar, active screen body, footer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Tabs};
use tix_core::content;

use crate::screens::pages;
use crate::state::{AppState, Screen};

/// Renders the whole UI.
pub fn render(app: &AppState, frame: &mut Frame) {
    let [tabs_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_tabs(app, frame, tabs_area);
    render_body(app, frame, pad(body_area));
    render_footer(app, frame, footer_area);
}

/// Insets the body area by one column on each side.
fn pad(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y,
        width: area.width.saturating_sub(2),
        height: area.height,
    }
}

fn render_tabs(app: &AppState, frame: &mut Frame, area: Rect) {
    let titles: Vec<Line> = Screen::all().iter().map(|s| Line::from(s.title())).collect();
    let selected = Screen::all()
        .iter()
        .position(|s| *s == app.screen)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::styled("|", Style::default().fg(Color::DarkGray)));

    frame.render_widget(tabs, pad(area));
}

fn render_body(app: &AppState, frame: &mut Frame, area: Rect) {
    match app.screen {
        Screen::Home => pages::render_home(
            frame,
            area,
            app.session.as_ref().and_then(|s| s.username.as_deref()),
        ),
        Screen::Events => pages::render_events(frame, area),
        Screen::Hotels => pages::render_hotels(frame, area),
        Screen::Contact => pages::render_page(frame, area, &content::CONTACT),
        Screen::About => pages::render_page(frame, area, &content::ABOUT),
        Screen::Login => app.login.render(frame, area),
        Screen::Signup => app.signup.render(frame, area),
    }
}

fn render_footer(app: &AppState, frame: &mut Frame, area: Rect) {
    let user = app
        .session
        .as_ref()
        .and_then(|s| s.username.as_deref())
        .unwrap_or("not logged in");

    let hints = if app.screen.is_form() {
        "Tab next page · Ctrl+C quit"
    } else {
        "Tab next page · q quit"
    };

    let line = Line::from(vec![
        Span::styled(format!(" {user} "), Style::default().fg(Color::Green)),
        Span::styled("· ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.base_url.clone(), Style::default().fg(Color::DarkGray)),
        Span::styled(" · ", Style::default().fg(Color::DarkGray)),
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
