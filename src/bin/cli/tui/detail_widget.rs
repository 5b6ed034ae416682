use ratatui::prelude::*;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use flashdeck_lib::deck::Category;
use flashdeck_lib::review::{Face, Judgment, ReviewSession};
use flashdeck_lib::DetailPane;

use super::app_state::TuiState;
use super::ui::accent_color;

pub fn draw(f: &mut Frame, area: Rect, state: &mut TuiState) {
    let browser = &state.browser;
    let Some(category) = browser.selected_category() else {
        return;
    };
    let accent = accent_color(browser.background_color(), Color::Magenta);

    let (info_area, card_area) = if browser.is_narrow() {
        match browser.detail_pane() {
            DetailPane::Info => (Some(area), None),
            DetailPane::Flashcards => (None, Some(area)),
        }
    } else {
        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);
        (Some(panels[0]), Some(panels[1]))
    };

    if let Some(info_area) = info_area {
        draw_info(f, info_area, state, category, accent);
    }
    if let Some(card_area) = card_area {
        if let Some(session) = browser.review() {
            draw_flashcard(f, card_area, state, session, accent);
        }
    }

    state.flashcard_area = card_area;
}

fn draw_info(f: &mut Frame, area: Rect, state: &TuiState, category: &Category, accent: Color) {
    let browser = &state.browser;
    let mut title = format!(" {} ", category.name);
    if browser.is_narrow() {
        title.push_str("[Tab: flashcards] ");
    }

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent).add_modifier(Modifier::BOLD));

    let dim = Style::default().fg(Color::DarkGray);
    let nav = |enabled: bool, label: &'static str| {
        Span::styled(label, if enabled { Style::default().fg(Color::White) } else { dim })
    };

    let mut text = vec![
        Line::from(Span::styled(
            category.department.clone(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(category.description.clone()),
        Line::from(""),
        Line::from(vec![Span::styled("Image: ", dim), Span::raw(category.image_ref.clone())]),
    ];

    if let Some(session) = browser.review() {
        let summary = session.summary();
        text.push(Line::from(""));
        text.push(Line::from(vec![
            Span::styled(format!("{} known", summary.known), Style::default().fg(Color::Green)),
            Span::raw("  "),
            Span::styled(format!("{} not yet", summary.not_known), Style::default().fg(Color::Red)),
            Span::raw("  "),
            Span::styled(format!("{} unanswered", summary.unanswered), dim),
        ]));
    }

    text.push(Line::from(""));
    text.push(Line::from(vec![
        nav(browser.has_prev(), "\u{2190} previous"),
        Span::raw("   "),
        nav(browser.has_next(), "next \u{2192}"),
    ]));

    let paragraph = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn draw_flashcard(
    f: &mut Frame,
    area: Rect,
    state: &TuiState,
    session: &ReviewSession,
    accent: Color,
) {
    let browser = &state.browser;
    let mut title = format!(" Card {} of {} ", session.cursor() + 1, session.card_count());
    if browser.is_narrow() {
        title.push_str("[Tab: info] ");
    }

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    let card = browser.current_flashcard();
    let (label, body, body_style) = match session.face() {
        Face::Question => (
            "Question",
            card.map_or("", |c| c.question.as_str()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Face::Answer => (
            "Answer",
            card.map_or("", |c| c.answer.as_str()),
            Style::default().fg(accent),
        ),
    };

    let mut text = vec![
        Line::from(Span::styled(label, Style::default().fg(Color::DarkGray))),
        Line::from(""),
        Line::from(Span::styled(body.to_string(), body_style)),
        Line::from(""),
    ];

    match session.current_judgment() {
        Some(Judgment::Know) => text.push(Line::from(Span::styled(
            "\u{2713} I know this",
            Style::default().fg(Color::Green),
        ))),
        Some(Judgment::DontKnow) => text.push(Line::from(Span::styled(
            "\u{2717} Not yet",
            Style::default().fg(Color::Red),
        ))),
        None => {}
    }

    let hint = if session.reset_pending() {
        "Flipping back..."
    } else if session.is_flipped() {
        "y: I know  n: I don't know"
    } else {
        "Space or click: show answer"
    };
    text.push(Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))));

    let paragraph = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
