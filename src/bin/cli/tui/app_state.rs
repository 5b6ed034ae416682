use std::time::Instant;

use ratatui::prelude::Rect;

use flashdeck_lib::deck::{CategoryId, RegistryError};
use flashdeck_lib::review::Judgment;
use flashdeck_lib::{Browser, Config, DetailKey};

use super::form::AddForm;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Browse,
    Search,
    Detail,
    AddCategory,
}

pub struct TuiState {
    pub browser: Browser,
    pub config: Config,
    pub mode: Mode,

    // Carousel focus, as an index into the filtered view
    pub highlighted: usize,
    // Horizontal scroll position in columns, driven by the mouse wheel
    pub scroll_offset: f64,

    // Areas for mouse hit-testing (updated each draw)
    pub carousel_area: Option<Rect>,
    pub card_hitboxes: Vec<(Rect, CategoryId)>,
    pub flashcard_area: Option<Rect>,

    pub form: AddForm,
    pub flash_message: Option<String>,

    pub show_help: bool,
    pub quit: bool,
}

impl TuiState {
    pub fn new(browser: Browser, config: Config) -> Self {
        Self {
            browser,
            config,
            mode: Mode::Browse,
            highlighted: 0,
            scroll_offset: 0.0,
            carousel_area: None,
            card_hitboxes: Vec::new(),
            flashcard_area: None,
            form: AddForm::default(),
            flash_message: None,
            show_help: false,
            quit: false,
        }
    }

    /// Feed measured sizes into the browser. Called before every draw.
    pub fn on_measure(&mut self, terminal_width: u16, carousel_width: u16) {
        self.browser.set_narrow(terminal_width < self.config.narrow_width);

        let before = self.browser.viewport_state();
        self.browser.set_container_width(carousel_width);
        if self.browser.viewport_state().window_start != before.window_start {
            self.sync_scroll_offset();
            self.follow_window();
        }
    }

    /// Apply a due auto-reset. Returns true when the screen changed.
    pub fn tick(&mut self) -> bool {
        self.browser.tick(Instant::now())
    }

    // ==================== Carousel ====================

    fn filtered_len(&self) -> usize {
        self.browser.filtered().len()
    }

    fn clamp_highlight(&mut self) {
        let len = self.filtered_len();
        if self.highlighted >= len {
            self.highlighted = len.saturating_sub(1);
        }
    }

    fn sync_scroll_offset(&mut self) {
        self.scroll_offset = self.browser.viewport().scroll_offset();
    }

    /// Keep the highlight inside the visible window after a scroll.
    fn follow_window(&mut self) {
        let range = self.browser.viewport().visible_range();
        if range.is_empty() {
            return;
        }
        if self.highlighted < range.start {
            self.highlighted = range.start;
        } else if self.highlighted >= range.end {
            self.highlighted = range.end - 1;
        }
    }

    pub fn highlight_next(&mut self) {
        let len = self.filtered_len();
        if len > 0 && self.highlighted + 1 < len {
            self.highlighted += 1;
        }
        self.browser.reveal(self.highlighted);
        self.sync_scroll_offset();
    }

    pub fn highlight_prev(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
        self.browser.reveal(self.highlighted);
        self.sync_scroll_offset();
    }

    pub fn highlight_first(&mut self) {
        self.highlighted = 0;
        self.browser.scroll_to_index(0);
        self.sync_scroll_offset();
    }

    pub fn highlight_last(&mut self) {
        self.highlighted = self.filtered_len().saturating_sub(1);
        self.browser.reveal(self.highlighted);
        self.sync_scroll_offset();
    }

    /// The carousel's arrow buttons: shift the window by one card.
    pub fn scroll_window(&mut self, forward: bool) {
        if forward {
            self.browser.scroll_right();
        } else {
            self.browser.scroll_left();
        }
        self.sync_scroll_offset();
        self.follow_window();
    }

    /// Mouse wheel scrolling by raw column deltas.
    pub fn user_scroll(&mut self, delta_columns: i32) {
        let viewport = self.browser.viewport();
        let max_offset = viewport.max_start() as f64 * f64::from(viewport.step_width());
        self.scroll_offset = (self.scroll_offset + f64::from(delta_columns)).clamp(0.0, max_offset);
        self.browser.on_user_scroll(self.scroll_offset);
        self.follow_window();
    }

    // ==================== Search ====================

    pub fn push_query_char(&mut self, c: char) {
        let mut query = self.browser.query().to_string();
        query.push(c);
        self.apply_query(query);
    }

    pub fn pop_query_char(&mut self) {
        let mut query = self.browser.query().to_string();
        query.pop();
        self.apply_query(query);
    }

    pub fn clear_query(&mut self) {
        self.apply_query(String::new());
    }

    fn apply_query(&mut self, query: String) {
        self.browser.set_query(query);
        self.clamp_highlight();
        self.browser.reveal(self.highlighted);
        self.sync_scroll_offset();
    }

    // ==================== Detail ====================

    pub fn open_highlighted(&mut self) {
        let id = self.browser.filtered().get(self.highlighted).map(|c| c.id);
        if let Some(id) = id {
            self.open(id);
        }
    }

    /// Open the n-th card of the visible window (0-based)
    pub fn open_visible(&mut self, offset: usize) {
        let index = self.browser.viewport().window_start() + offset;
        if self.browser.viewport().visible_range().contains(&index) {
            self.highlighted = index;
            self.open_highlighted();
        }
    }

    pub fn open(&mut self, id: CategoryId) {
        if self.browser.select(id) {
            self.mode = Mode::Detail;
            self.follow_selection();
        }
    }

    pub fn detail_key(&mut self, key: DetailKey) {
        if self.browser.handle_detail_key(key) {
            if self.browser.is_open() {
                self.follow_selection();
            } else {
                self.mode = Mode::Browse;
            }
        }
    }

    /// Keep the carousel focus on the open category while stepping through.
    fn follow_selection(&mut self) {
        if let Some(index) = self.browser.selection_index() {
            self.highlighted = index;
            self.browser.reveal(index);
            self.sync_scroll_offset();
        }
    }

    pub fn flip(&mut self) {
        self.browser.flip();
    }

    pub fn judge(&mut self, judgment: Judgment) {
        if !self.browser.judge(judgment, Instant::now()) {
            self.flash_message = Some("Flip the card before judging it".to_string());
        }
    }

    // ==================== Add category ====================

    pub fn start_add(&mut self) {
        self.form.reset();
        self.mode = Mode::AddCategory;
    }

    pub fn cancel_add(&mut self) {
        self.form.reset();
        self.mode = Mode::Browse;
    }

    pub fn submit_add(&mut self) {
        match self.browser.add_category(self.form.to_draft()) {
            Ok(_) => {
                self.flash_message = Some(format!("Added \"{}\"", self.form.name.trim()));
                self.form.reset();
                self.mode = Mode::Browse;
            }
            Err(RegistryError::Validation(errors)) => {
                self.flash_message = Some(format!("{} field(s) need attention", errors.fields.len()));
                self.form.errors = errors;
            }
            Err(e) => {
                self.flash_message = Some(format!("Error: {}", e));
            }
        }
    }
}
