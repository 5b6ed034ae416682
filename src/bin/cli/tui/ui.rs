use ratatui::prelude::*;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::render::terminal::parse_hex;

use super::app_state::{Mode, TuiState};
use super::{carousel_widget, detail_widget, form_widget, search_bar, status_bar};

/// ratatui color for a `#rrggbb` accent, falling back when it does not parse
pub fn accent_color(hex: &str, fallback: Color) -> Color {
    parse_hex(hex).map_or(fallback, |(r, g, b)| Color::Rgb(r, g, b))
}

pub fn draw(f: &mut Frame, state: &mut TuiState) {
    let size = f.area();

    // Header, main area, status bar
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(size);

    let header_area = outer[0];
    let main_area = outer[1];
    let status_area = outer[2];

    // The carousel spans the main area minus its border and arrow columns
    let carousel_width = main_area.width.saturating_sub(carousel_widget::CHROME_WIDTH);
    state.on_measure(size.width, carousel_width);

    draw_header(f, header_area, state);

    state.card_hitboxes.clear();
    state.flashcard_area = None;
    if state.mode == Mode::Detail && state.browser.is_open() {
        state.carousel_area = None;
        detail_widget::draw(f, main_area, state);
    } else {
        state.carousel_area = Some(main_area);
        carousel_widget::draw(f, main_area, state);
    }

    if state.mode == Mode::Search {
        search_bar::draw(f, status_area, state);
    } else {
        status_bar::draw(f, status_area, state);
    }

    if state.mode == Mode::AddCategory {
        form_widget::draw(f, main_area, state);
    }

    if state.show_help {
        draw_help(f, size, state);
    }
}

fn draw_header(f: &mut Frame, area: Rect, state: &TuiState) {
    let browser = &state.browser;
    let background = accent_color(browser.background_color(), Color::Reset);
    let total = browser.registry().len();
    let shown = browser.filtered().len();

    let title = match browser.selected_category() {
        Some(category) => format!(" flashdeck \u{2022} {} ", category.name),
        None => " flashdeck ".to_string(),
    };
    let counts = if browser.query().is_empty() {
        format!("{} categories ", total)
    } else {
        format!("{} of {} categories ", shown, total)
    };

    let padding = (area.width as usize).saturating_sub(title.chars().count() + counts.chars().count());
    let line = Line::from(vec![
        Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" ".repeat(padding)),
        Span::raw(counts),
    ]);

    let style = if browser.is_open() {
        Style::default().bg(background).fg(Color::White)
    } else {
        Style::default().bg(Color::White).fg(Color::Black)
    };
    f.render_widget(Paragraph::new(line).style(style), area);
}

fn draw_help(f: &mut Frame, area: Rect, state: &TuiState) {
    let lines: Vec<&str> = match state.mode {
        Mode::Detail => vec![
            "Esc          close",
            "Left/Right   previous/next category",
            "Up/Down      previous/next flashcard",
            "Tab          switch pane (narrow layout)",
            "Space/Enter  flip card",
            "y / n        I know / I don't know",
            "q            quit",
        ],
        _ => vec![
            "Left/Right   move highlight",
            "[ / ]        scroll carousel",
            "Enter        open category",
            "1-9          open visible card",
            "/            search",
            "Esc          clear search",
            "a            add category",
            "q            quit",
        ],
    };

    let width = 48.min(area.width);
    let height = (lines.len() as u16 + 2).min(area.height);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    f.render_widget(Clear, popup);
    let block = Block::default()
        .title(" Keys (? to close) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let text: Vec<Line> = lines.into_iter().map(|l| Line::from(format!(" {}", l))).collect();
    f.render_widget(Paragraph::new(text).block(block), popup);
}
