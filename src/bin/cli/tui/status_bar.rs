use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::app_state::{Mode, TuiState};

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    // Show flash message if present
    if let Some(ref msg) = state.flash_message {
        let flash = Paragraph::new(format!(" {}", msg))
            .style(Style::default().bg(Color::Green).fg(Color::Black));
        f.render_widget(flash, area);
        return;
    }

    let hints = match state.mode {
        Mode::Browse if !state.browser.query().is_empty() => {
            " /: edit search  Esc: clear search  h/l: move  Enter: open  a: add  ?: help  q: quit "
        }
        Mode::Browse => {
            " /: search  h/l: move  [/]: scroll  Enter: open  a: add  ?: help  q: quit "
        }
        Mode::Search => " Type to filter  Ctrl-U: clear  Enter/Esc: done ",
        Mode::Detail if state.browser.is_narrow() => {
            " Esc: close  \u{2190}/\u{2192}: category  \u{2191}/\u{2193}: card  Tab: pane  Space: flip  y/n: judge "
        }
        Mode::Detail => {
            " Esc: close  \u{2190}/\u{2192}: category  \u{2191}/\u{2193}: card  Space: flip  y/n: judge  q: quit "
        }
        Mode::AddCategory => {
            " Tab: next field  \u{2190}/\u{2192}: choose  Ctrl-N: add card  Ctrl-D: remove card  Enter: save  Esc: cancel "
        }
    };

    let status = Paragraph::new(hints)
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(status, area);
}
