//! Shared form rendering.
//!
//! Both auth forms render as a centered column of labeled input lines with
//! a banner line for the submit lifecycle underneath.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::state::SubmitState;

/// One input line of a form.
pub struct FieldView<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub secret: bool,
    pub focused: bool,
}

/// Maximum width of the centered form column.
const FORM_WIDTH: u16 = 56;

/// Renders a form: title, subtitle, fields, banner, and key hints.
pub fn render_form(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    subtitle: &str,
    fields: &[FieldView<'_>],
    submit: &SubmitState,
    submit_label: &str,
) {
    let width = FORM_WIDTH.min(area.width);
    let x = area.x + (area.width.saturating_sub(width)) / 2;

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        title.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        subtitle.to_string(),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::default());

    let label_width = fields
        .iter()
        .map(|f| f.label.width())
        .max()
        .unwrap_or(0);

    for field in fields {
        lines.push(field_line(field, label_width, width as usize));
    }

    lines.push(Line::default());
    lines.push(banner_line(submit, submit_label));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Up/Down select field · Enter submit · Tab switch page",
        Style::default().fg(Color::DarkGray),
    )));

    let height = (lines.len() as u16).min(area.height);
    let form_area = Rect::new(x, area.y, width, height);
    frame.render_widget(Paragraph::new(lines), form_area);
}

/// Renders one labeled input line with focus marker and cursor.
fn field_line<'a>(field: &FieldView<'a>, label_width: usize, total_width: usize) -> Line<'a> {
    let marker = if field.focused { "> " } else { "  " };
    let label = format!("{:label_width$}  ", field.label);

    let shown = if field.secret {
        "\u{2022}".repeat(field.value.chars().count())
    } else {
        field.value.to_string()
    };

    // Keep the tail visible when the value outgrows the line.
    let value_width = total_width.saturating_sub(2 + label_width + 2 + 1);
    let shown = truncate_to_tail(&shown, value_width);

    let value_style = if field.focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let mut spans = vec![
        Span::styled(
            marker,
            Style::default().fg(if field.focused {
                Color::Yellow
            } else {
                Color::DarkGray
            }),
        ),
        Span::styled(label, Style::default().fg(Color::DarkGray)),
        Span::styled(shown, value_style),
    ];
    if field.focused {
        spans.push(Span::styled("\u{2588}", Style::default().fg(Color::Yellow)));
    }
    Line::from(spans)
}

/// Banner line for the submit lifecycle.
fn banner_line<'a>(submit: &SubmitState, submit_label: &'a str) -> Line<'a> {
    match submit {
        SubmitState::Idle => Line::from(Span::styled(
            format!("[ {submit_label} ]"),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        SubmitState::Submitting => Line::from(Span::styled(
            "Submitting...",
            Style::default().fg(Color::Cyan),
        )),
        SubmitState::Succeeded { .. } => Line::from(Span::styled(
            format!("{submit_label} successful!"),
            Style::default().fg(Color::Green),
        )),
        SubmitState::Failed { message, .. } => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red),
        )),
    }
}

/// Truncates a string to its trailing `max_width` columns.
fn truncate_to_tail(value: &str, max_width: usize) -> String {
    if value.width() <= max_width {
        return value.to_string();
    }
    let mut tail = String::new();
    let mut width = 0;
    for c in value.chars().rev() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width.saturating_sub(1) {
            break;
        }
        width += w;
        tail.insert(0, c);
    }
    format!("\u{2026}{tail}")
}
