use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::app_state::TuiState;
use super::form::FormField;
use super::ui::accent_color;

const LABEL_WIDTH: usize = 13;

/// Draw the add-category form as a centered popup over `area`.
pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    let form = &state.form;
    let fields = form.fields();
    let focused = form.focused();

    let mut lines = Vec::new();
    let mut cursor = None;

    for field in &fields {
        let is_focused = *field == focused;
        if matches!(field, FormField::Question(_)) {
            lines.push(Line::from(""));
        }

        let marker = if is_focused { "> " } else { "  " };
        let label = format!("{}{:<width$}", marker, field.label(), width = LABEL_WIDTH);
        let label_style = if is_focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let value = form.value(*field);
        let value_span = match field {
            FormField::Accent => Span::styled(
                format!("\u{25a0} {}  \u{2190}/\u{2192}", value),
                Style::default().fg(accent_color(value, Color::White)),
            ),
            FormField::Department if value.is_empty() && is_focused => Span::styled(
                "type, or \u{2190}/\u{2192} for suggestions",
                Style::default().fg(Color::DarkGray),
            ),
            _ => Span::raw(value.to_string()),
        };

        if is_focused && *field != FormField::Accent {
            cursor = Some((lines.len(), label.chars().count() + value.chars().count()));
        }

        lines.push(Line::from(vec![Span::styled(label, label_style), value_span]));

        if let Some(message) = form.error_for(*field) {
            lines.push(Line::from(Span::styled(
                format!("{:width$}{}", "", message, width = LABEL_WIDTH + 2),
                Style::default().fg(Color::Red),
            )));
        }
    }

    let width = 72.min(area.width);
    let height = (lines.len() as u16 + 2).min(area.height);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    f.render_widget(Clear, popup);
    let block = Block::default()
        .title(format!(" New category ({} card{}) ", form.cards.len(), if form.cards.len() == 1 { "" } else { "s" }))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent_color(form.accent(), Color::Cyan)));
    let inner = block.inner(popup);
    f.render_widget(Paragraph::new(lines).block(block), popup);

    if let Some((row, col)) = cursor {
        let (row, col) = (row as u16, col as u16);
        if row < inner.height && col < inner.width {
            f.set_cursor_position(Position::new(inner.x + col, inner.y + row));
        }
    }
}
