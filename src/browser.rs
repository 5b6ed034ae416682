//! Interactive state for one browsing session
//!
//! `Browser` ties the registry, the search query, the carousel viewport,
//! the selection and the open review session together. Every input event
//! from the UI maps to one method here, and every method runs to completion
//! synchronously. The only deferred effect is the review auto-reset, which
//! the UI drives by calling [`Browser::tick`] from its event loop.

use std::time::{Duration, Instant};

use crate::carousel::{CarouselViewport, ViewportState};
use crate::config::Config;
use crate::deck::registry::Result as RegistryResult;
use crate::deck::{Category, CategoryId, CategoryRegistry, Flashcard, NewCategory};
use crate::navigator::SelectionNavigator;
use crate::review::{Judgment, ReviewSession};
use crate::search::{filter, FilteredView};

/// Surface color when no category is open
pub const NEUTRAL_BACKGROUND: &str = "#FFFFFF";

/// Keys the detail surface responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailKey {
    Escape,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Tab,
}

/// What the narrow detail layout is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailPane {
    #[default]
    Info,
    Flashcards,
}

pub struct Browser {
    registry: CategoryRegistry,
    query: String,
    navigator: SelectionNavigator,
    viewport: CarouselViewport,
    review: Option<ReviewSession>,
    reset_delay: Duration,
    narrow: bool,
    pane: DetailPane,
}

impl Browser {
    pub fn new(registry: CategoryRegistry, step_width: u16, reset_delay: Duration) -> Self {
        let mut viewport = CarouselViewport::new(step_width);
        viewport.set_item_count(registry.len());
        Self {
            registry,
            query: String::new(),
            navigator: SelectionNavigator::new(),
            viewport,
            review: None,
            reset_delay,
            narrow: false,
            pane: DetailPane::Info,
        }
    }

    pub fn from_config(registry: CategoryRegistry, config: &Config) -> Self {
        Self::new(registry, config.step_width, config.reset_delay())
    }

    // ==================== Registry ====================

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    /// Append a category. The current query, selection and review are kept.
    pub fn add_category(&mut self, draft: NewCategory) -> RegistryResult<CategoryId> {
        let id = self.registry.add(draft)?;
        self.sync_viewport();
        Ok(id)
    }

    // ==================== Search ====================

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.sync_viewport();
    }

    pub fn filtered(&self) -> FilteredView<'_> {
        filter(&self.registry, &self.query)
    }

    // ==================== Carousel ====================

    pub fn viewport(&self) -> &CarouselViewport {
        &self.viewport
    }

    pub fn viewport_state(&self) -> ViewportState {
        self.viewport.state()
    }

    pub fn set_container_width(&mut self, width: u16) {
        self.viewport.set_container_width(width);
    }

    pub fn scroll_to_index(&mut self, target: i64) {
        self.viewport.scroll_to_index(target);
    }

    pub fn on_user_scroll(&mut self, raw_offset: f64) {
        self.viewport.on_user_scroll(raw_offset);
    }

    pub fn scroll_left(&mut self) {
        self.viewport.scroll_left();
    }

    pub fn scroll_right(&mut self) {
        self.viewport.scroll_right();
    }

    /// Bring a filtered-view index into the carousel window.
    pub fn reveal(&mut self, index: usize) {
        self.viewport.reveal(index);
    }

    fn sync_viewport(&mut self) {
        let len = self.filtered().len();
        self.viewport.set_item_count(len);
    }

    // ==================== Selection ====================

    pub fn selected_id(&self) -> Option<CategoryId> {
        self.navigator.selected()
    }

    pub fn selected_category(&self) -> Option<&Category> {
        self.navigator.selected().and_then(|id| self.registry.get(id))
    }

    pub fn is_open(&self) -> bool {
        self.navigator.selected().is_some()
    }

    /// Position of the open category in the filtered view
    pub fn selection_index(&self) -> Option<usize> {
        self.navigator.index(&self.filtered())
    }

    pub fn has_prev(&self) -> bool {
        self.navigator.has_prev(&self.filtered())
    }

    pub fn has_next(&self) -> bool {
        self.navigator.has_next(&self.filtered())
    }

    /// Open a category. Unknown ids are ignored.
    ///
    /// Re-opening the category that is already open restarts at its first
    /// question but keeps the judgments recorded so far.
    pub fn select(&mut self, id: CategoryId) -> bool {
        let Some(category) = self.registry.get(id) else {
            log::warn!("Ignoring selection of unknown category {}", id);
            return false;
        };

        match self.review.as_mut() {
            Some(session) if session.category_id() == id => session.reopen(),
            _ => {
                let session = ReviewSession::new(category, self.reset_delay);
                self.review = Some(session);
            }
        }

        self.navigator.select(id);
        self.pane = DetailPane::Info;
        true
    }

    /// Close the detail surface and drop its review session.
    pub fn close(&mut self) {
        self.navigator.close();
        self.review = None;
        self.pane = DetailPane::Info;
    }

    pub fn select_prev(&mut self) -> bool {
        let target = {
            let view = filter(&self.registry, &self.query);
            self.navigator.select_prev(&view)
        };
        match target {
            Some(id) => self.select(id),
            None => false,
        }
    }

    pub fn select_next(&mut self) -> bool {
        let target = {
            let view = filter(&self.registry, &self.query);
            self.navigator.select_next(&view)
        };
        match target {
            Some(id) => self.select(id),
            None => false,
        }
    }

    /// Accent color of the open category, white when none is open
    pub fn background_color(&self) -> &str {
        self.selected_category()
            .map(|c| c.accent_color.as_str())
            .unwrap_or(NEUTRAL_BACKGROUND)
    }

    // ==================== Review ====================

    pub fn review(&self) -> Option<&ReviewSession> {
        self.review.as_ref()
    }

    pub fn current_flashcard(&self) -> Option<&Flashcard> {
        let session = self.review.as_ref()?;
        self.registry
            .get(session.category_id())?
            .flashcards
            .get(session.cursor())
    }

    pub fn flip(&mut self) -> bool {
        self.review.as_mut().map_or(false, |s| s.flip())
    }

    pub fn judge(&mut self, judgment: Judgment, now: Instant) -> bool {
        self.review.as_mut().map_or(false, |s| s.judge(judgment, now))
    }

    pub fn cursor_next(&mut self) {
        if let Some(session) = self.review.as_mut() {
            session.cursor_next();
        }
    }

    pub fn cursor_prev(&mut self) {
        if let Some(session) = self.review.as_mut() {
            session.cursor_prev();
        }
    }

    /// Drive the pending auto-reset. Call from the event loop.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.review.as_mut().map_or(false, |s| s.tick(now))
    }

    // ==================== Layout ====================

    pub fn set_narrow(&mut self, narrow: bool) {
        if self.narrow != narrow {
            self.narrow = narrow;
            self.pane = DetailPane::Info;
        }
    }

    pub fn is_narrow(&self) -> bool {
        self.narrow
    }

    pub fn detail_pane(&self) -> DetailPane {
        self.pane
    }

    /// Apply a key pressed while the detail surface is open.
    ///
    /// Returns false when the key had no effect (including every key while
    /// nothing is open).
    pub fn handle_detail_key(&mut self, key: DetailKey) -> bool {
        if !self.is_open() {
            return false;
        }

        match key {
            DetailKey::Escape => {
                self.close();
                true
            }
            DetailKey::ArrowLeft => self.has_prev() && self.select_prev(),
            DetailKey::ArrowRight => self.has_next() && self.select_next(),
            DetailKey::ArrowUp => {
                self.cursor_prev();
                true
            }
            DetailKey::ArrowDown => {
                self.cursor_next();
                true
            }
            DetailKey::Tab if self.narrow => {
                self.pane = match self.pane {
                    DetailPane::Info => DetailPane::Flashcards,
                    DetailPane::Flashcards => DetailPane::Info,
                };
                true
            }
            DetailKey::Tab => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::seed::builtin_registry;
    use crate::review::{Face, DEFAULT_RESET_DELAY};

    const STEP: u16 = 10;

    fn browser() -> Browser {
        Browser::new(builtin_registry().unwrap(), STEP, DEFAULT_RESET_DELAY)
    }

    fn id_of(browser: &Browser, name: &str) -> CategoryId {
        browser
            .registry()
            .categories()
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.id)
            .unwrap()
    }

    fn poetry() -> NewCategory {
        NewCategory::new("Poetry", "Literature")
            .with_image("poetry.png")
            .with_description("Verse")
            .with_card("Author of The Raven?", "Edgar Allan Poe")
    }

    #[test]
    fn test_search_then_select_single_result() {
        let mut b = browser();
        b.set_query("harry");
        let names: Vec<String> = b.filtered().iter().map(|c| c.name.clone()).collect();
        assert_eq!(names, vec!["Harry Potter"]);

        let id = id_of(&b, "Harry Potter");
        assert!(b.select(id));
        assert!(!b.has_prev());
        assert!(!b.has_next());
    }

    #[test]
    fn test_scroll_clamps_to_filtered_length() {
        let mut b = browser();
        b.set_container_width(3 * STEP);
        b.scroll_to_index(5);
        assert_eq!(
            b.viewport_state(),
            ViewportState {
                window_start: 3,
                capacity: 3
            }
        );

        b.set_query("harry");
        assert_eq!(b.viewport_state().window_start, 0);
    }

    #[test]
    fn test_select_unknown_id_is_ignored() {
        let mut b = browser();
        assert!(!b.select(uuid::Uuid::new_v4()));
        assert!(!b.is_open());
        assert!(b.review().is_none());
    }

    #[test]
    fn test_select_next_opens_fresh_session() {
        let start = Instant::now();
        let mut b = browser();
        b.select(id_of(&b, "Medical"));
        b.flip();
        b.judge(Judgment::Know, start);

        assert!(b.select_next());
        let session = b.review().unwrap();
        assert_eq!(session.category_id(), id_of(&b, "Harry Potter"));
        assert!(session.judgments().is_empty());
        assert_eq!(session.face(), Face::Question);
        assert!(!session.reset_pending());
    }

    #[test]
    fn test_reselecting_open_category_keeps_judgments() {
        let start = Instant::now();
        let mut b = browser();
        let medical = id_of(&b, "Medical");
        b.select(medical);
        b.cursor_next();
        b.flip();
        b.judge(Judgment::DontKnow, start);

        b.select(medical);
        let session = b.review().unwrap();
        assert_eq!(session.cursor(), 0);
        assert!(!session.is_flipped());
        assert_eq!(session.judgment(1), Some(Judgment::DontKnow));
    }

    #[test]
    fn test_stale_timer_does_not_touch_new_card() {
        let start = Instant::now();
        let mut b = browser();
        b.select(id_of(&b, "Medical"));
        b.flip();
        b.judge(Judgment::Know, start);
        b.cursor_next();
        b.flip();

        assert!(!b.tick(start + DEFAULT_RESET_DELAY));
        assert!(b.review().unwrap().is_flipped());
        assert_eq!(b.review().unwrap().cursor(), 1);
    }

    #[test]
    fn test_closing_discards_pending_reset() {
        let start = Instant::now();
        let mut b = browser();
        let medical = id_of(&b, "Medical");
        b.select(medical);
        b.flip();
        b.judge(Judgment::Know, start);
        b.close();

        assert!(!b.tick(start + DEFAULT_RESET_DELAY));
        b.select(medical);
        assert!(b.review().unwrap().judgments().is_empty());
    }

    #[test]
    fn test_current_flashcard_follows_cursor() {
        let mut b = browser();
        assert!(b.current_flashcard().is_none());

        b.select(id_of(&b, "General-Knowledge"));
        b.cursor_prev();
        assert_eq!(b.current_flashcard().unwrap().answer, "Leo Tolstoy");
    }

    #[test]
    fn test_filtered_out_selection_stays_open() {
        let mut b = browser();
        b.select(id_of(&b, "Lawyer"));
        b.set_query("harry");

        assert!(b.is_open());
        assert_eq!(b.selection_index(), None);
        assert!(!b.handle_detail_key(DetailKey::ArrowLeft));
        assert!(!b.handle_detail_key(DetailKey::ArrowRight));
        assert_eq!(b.selected_category().unwrap().name, "Lawyer");

        b.set_query("");
        assert_eq!(b.selection_index(), Some(5));
    }

    #[test]
    fn test_add_category_keeps_state() {
        let mut b = browser();
        b.set_container_width(3 * STEP);
        b.scroll_to_index(3);
        let lawyer = id_of(&b, "Lawyer");
        b.select(lawyer);
        assert!(!b.has_next());

        let id = b.add_category(poetry()).unwrap();
        assert_eq!(b.selected_id(), Some(lawyer));
        assert_eq!(b.viewport_state().window_start, 3);
        assert!(b.viewport().can_scroll_right());
        assert!(b.has_next());

        assert!(b.select_next());
        assert_eq!(b.selected_id(), Some(id));
    }

    #[test]
    fn test_invalid_add_leaves_state_untouched() {
        let mut b = browser();
        b.set_query("law");
        assert!(b.add_category(NewCategory::new("", "")).is_err());
        assert_eq!(b.registry().len(), 6);
        assert_eq!(b.query(), "law");
    }

    #[test]
    fn test_detail_keys() {
        let mut b = browser();
        assert!(!b.handle_detail_key(DetailKey::ArrowDown));

        b.select(id_of(&b, "Medical"));
        assert!(!b.handle_detail_key(DetailKey::ArrowLeft));
        assert!(b.handle_detail_key(DetailKey::ArrowUp));
        assert_eq!(b.review().unwrap().cursor(), 2);
        assert!(b.handle_detail_key(DetailKey::ArrowDown));
        assert_eq!(b.review().unwrap().cursor(), 0);

        assert!(b.handle_detail_key(DetailKey::ArrowRight));
        assert_eq!(b.selected_category().unwrap().name, "Harry Potter");

        assert!(b.handle_detail_key(DetailKey::Escape));
        assert!(!b.is_open());
        assert!(b.review().is_none());
    }

    #[test]
    fn test_tab_toggles_pane_only_when_narrow() {
        let mut b = browser();
        b.select(id_of(&b, "Medical"));
        assert!(!b.handle_detail_key(DetailKey::Tab));
        assert_eq!(b.detail_pane(), DetailPane::Info);

        b.set_narrow(true);
        assert!(b.handle_detail_key(DetailKey::Tab));
        assert_eq!(b.detail_pane(), DetailPane::Flashcards);

        b.select_next();
        assert_eq!(b.detail_pane(), DetailPane::Info);
    }

    #[test]
    fn test_background_follows_selection() {
        let mut b = browser();
        assert_eq!(b.background_color(), NEUTRAL_BACKGROUND);
        b.select(id_of(&b, "Medical"));
        assert_eq!(b.background_color(), "#F42C38");
        b.close();
        assert_eq!(b.background_color(), NEUTRAL_BACKGROUND);
    }
}
