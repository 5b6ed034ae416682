use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::app_state::{Mode, TuiState};
use super::ui::accent_color;

/// Columns taken by the outer border and the two arrow gutters
pub const CHROME_WIDTH: u16 = 2 + 2 * ARROW_WIDTH;
const ARROW_WIDTH: u16 = 2;

pub fn draw(f: &mut Frame, area: Rect, state: &mut TuiState) {
    let is_active = matches!(state.mode, Mode::Browse | Mode::Search);

    let block = Block::default()
        .title(" Categories ")
        .borders(Borders::ALL)
        .border_style(if is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        });
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width <= 2 * ARROW_WIDTH || inner.height == 0 {
        return;
    }

    let viewport = state.browser.viewport();
    let step = viewport.step_width();
    let range = viewport.visible_range();
    let (can_left, can_right) = (viewport.can_scroll_left(), viewport.can_scroll_right());

    let arrow_style = |enabled: bool| {
        if enabled {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };
    let mid = inner.y + inner.height / 2;
    f.render_widget(
        Paragraph::new("\u{25c0}").style(arrow_style(can_left)),
        Rect { x: inner.x, y: mid, width: 1, height: 1 },
    );
    f.render_widget(
        Paragraph::new("\u{25b6}").style(arrow_style(can_right)),
        Rect { x: inner.x + inner.width - 1, y: mid, width: 1, height: 1 },
    );

    let cards_area = Rect {
        x: inner.x + ARROW_WIDTH,
        y: inner.y,
        width: inner.width - 2 * ARROW_WIDTH,
        height: inner.height,
    };

    let view = state.browser.filtered();
    if view.is_empty() {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  No categories match \"{}\".", state.browser.query()),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "  Esc clears the search.",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        f.render_widget(Paragraph::new(text), cards_area);
        return;
    }

    let card_width = step.saturating_sub(1).max(1);
    let mut hitboxes = Vec::new();

    for (slot, index) in range.enumerate() {
        let Some(category) = view.get(index) else { break };
        let x = cards_area.x + slot as u16 * step;
        if x >= cards_area.x + cards_area.width {
            break;
        }
        let card_area = Rect {
            x,
            y: cards_area.y,
            width: card_width.min(cards_area.x + cards_area.width - x),
            height: cards_area.height,
        };

        let accent = accent_color(&category.accent_color, Color::Magenta);
        let highlighted = is_active && index == state.highlighted;

        let card_block = Block::default()
            .title(format!(" {} ", slot + 1))
            .borders(Borders::ALL)
            .border_style(if highlighted {
                Style::default().fg(accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            });

        let cards = match category.card_count() {
            1 => "1 card".to_string(),
            n => format!("{} cards", n),
        };
        let text = vec![
            Line::from(Span::styled(
                category.name.clone(),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                category.department.clone(),
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            Line::from(Span::styled(cards, Style::default().fg(Color::DarkGray))),
        ];

        f.render_widget(
            Paragraph::new(text).block(card_block).wrap(Wrap { trim: true }),
            card_area,
        );
        hitboxes.push((card_area, category.id));
    }

    state.card_hitboxes = hitboxes;
}
