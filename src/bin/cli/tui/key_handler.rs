use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use flashdeck_lib::review::Judgment;
use flashdeck_lib::DetailKey;

use super::app_state::{Mode, TuiState};

pub fn handle_key(state: &mut TuiState, key: KeyEvent) {
    // Clear flash message on any keypress
    state.flash_message = None;

    match state.mode {
        Mode::Browse => handle_browse_key(state, key),
        Mode::Search => handle_search_key(state, key),
        Mode::Detail => handle_detail_key(state, key),
        Mode::AddCategory => handle_form_key(state, key),
    }
}

fn handle_browse_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => state.quit = true,
        KeyCode::Char('l') | KeyCode::Right => state.highlight_next(),
        KeyCode::Char('h') | KeyCode::Left => state.highlight_prev(),
        KeyCode::Char('g') | KeyCode::Home => state.highlight_first(),
        KeyCode::Char('G') | KeyCode::End => state.highlight_last(),
        KeyCode::Char('[') => state.scroll_window(false),
        KeyCode::Char(']') => state.scroll_window(true),
        KeyCode::Enter | KeyCode::Char(' ') => state.open_highlighted(),
        KeyCode::Char(c @ '1'..='9') => {
            let offset = c as usize - '1' as usize;
            state.open_visible(offset);
        }
        KeyCode::Char('/') => {
            state.mode = Mode::Search;
        }
        KeyCode::Char('a') => state.start_add(),
        KeyCode::Esc => {
            if !state.browser.query().is_empty() {
                state.clear_query();
            }
        }
        KeyCode::Char('?') => {
            state.show_help = !state.show_help;
        }
        _ => {}
    }
}

fn handle_search_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            state.mode = Mode::Browse;
        }
        KeyCode::Backspace => state.pop_query_char(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.clear_query();
        }
        KeyCode::Char(c) => state.push_query_char(c),
        KeyCode::Right => state.highlight_next(),
        KeyCode::Left => state.highlight_prev(),
        _ => {}
    }
}

fn handle_detail_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => state.quit = true,
        KeyCode::Esc => state.detail_key(DetailKey::Escape),
        KeyCode::Left => state.detail_key(DetailKey::ArrowLeft),
        KeyCode::Right => state.detail_key(DetailKey::ArrowRight),
        KeyCode::Up => state.detail_key(DetailKey::ArrowUp),
        KeyCode::Down => state.detail_key(DetailKey::ArrowDown),
        KeyCode::Tab => state.detail_key(DetailKey::Tab),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('f') => state.flip(),
        KeyCode::Char('y') => state.judge(Judgment::Know),
        KeyCode::Char('n') => state.judge(Judgment::DontKnow),
        KeyCode::Char('?') => {
            state.show_help = !state.show_help;
        }
        _ => {}
    }
}

fn handle_form_key(state: &mut TuiState, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => state.cancel_add(),
        KeyCode::Enter => state.submit_add(),
        KeyCode::Tab | KeyCode::Down => state.form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => state.form.focus_prev(),
        KeyCode::Left => state.form.cycle(false),
        KeyCode::Right => state.form.cycle(true),
        KeyCode::Backspace => state.form.backspace(),
        KeyCode::Char('n') if ctrl => state.form.add_card(),
        KeyCode::Char('d') if ctrl => state.form.remove_card(),
        KeyCode::Char(c) if !ctrl => state.form.insert_char(c),
        _ => {}
    }
}

fn contains(area: &ratatui::prelude::Rect, col: u16, row: u16) -> bool {
    col >= area.x && col < area.x + area.width && row >= area.y && row < area.y + area.height
}

pub fn handle_mouse(state: &mut TuiState, mouse: MouseEvent) {
    let (col, row) = (mouse.column, mouse.row);
    let step = i32::from(state.config.scroll_step);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => match state.mode {
            Mode::Browse | Mode::Search => {
                let hit = state.card_hitboxes.iter()
                    .find(|(area, _)| contains(area, col, row))
                    .map(|(_, id)| *id);
                if let Some(id) = hit {
                    state.open(id);
                }
            }
            Mode::Detail => {
                if let Some(ref area) = state.flashcard_area {
                    if contains(area, col, row) {
                        state.flip();
                    }
                }
            }
            Mode::AddCategory => {}
        },
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => {
            if in_carousel(state, col, row) {
                state.user_scroll(step);
            }
        }
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => {
            if in_carousel(state, col, row) {
                state.user_scroll(-step);
            }
        }
        _ => {}
    }
}

fn in_carousel(state: &TuiState, col: u16, row: u16) -> bool {
    matches!(state.mode, Mode::Browse | Mode::Search)
        && state.carousel_area.as_ref().map_or(false, |area| contains(area, col, row))
}
