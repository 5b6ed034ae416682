use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::app_state::TuiState;

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    let query = state.browser.query();
    let shown = state.browser.filtered().len();

    let input_text = format!("/{}", query);
    let count = format!("{} match{} ", shown, if shown == 1 { "" } else { "es" });
    let padding = (area.width as usize)
        .saturating_sub(input_text.chars().count() + count.chars().count());

    let style = if shown == 0 {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let line = Line::from(vec![
        Span::styled(input_text, style),
        Span::raw(" ".repeat(padding)),
        Span::styled(count, Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(line), area);

    // Set cursor position
    let cursor_x = area.x + 1 + query.chars().count() as u16;
    f.set_cursor_position(Position::new(cursor_x.min(area.x + area.width.saturating_sub(1)), area.y));
}
