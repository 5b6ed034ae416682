//! Review state for one open category
//!
//! Each card shows its question until flipped. On the answer side the user
//! records a judgment, which schedules a flip back to the question after
//! the reset delay. Moving the cursor cancels that pending flip, so a late
//! reset can never land on a different card than the one that was judged.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::timer::ResetTimer;
use crate::deck::{Category, CategoryId};

/// Delay between a judgment and the card flipping back
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(1000);

/// Self-assessment of a flashcard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Judgment {
    Know,
    DontKnow,
}

/// Which side of the current card is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Face {
    #[default]
    Question,
    Answer,
}

/// Tally of the judgments recorded in a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    pub known: usize,
    pub not_known: usize,
    pub unanswered: usize,
}

#[derive(Debug, Clone)]
pub struct ReviewSession {
    category_id: CategoryId,
    card_count: usize,
    cursor: usize,
    face: Face,
    judgments: BTreeMap<usize, Judgment>,
    reset: ResetTimer,
}

impl ReviewSession {
    pub fn new(category: &Category, reset_delay: Duration) -> Self {
        log::debug!(
            "Review session for {} ({} cards)",
            category.name,
            category.card_count()
        );
        Self {
            category_id: category.id,
            card_count: category.card_count(),
            cursor: 0,
            face: Face::Question,
            judgments: BTreeMap::new(),
            reset: ResetTimer::new(reset_delay),
        }
    }

    pub fn category_id(&self) -> CategoryId {
        self.category_id
    }

    pub fn card_count(&self) -> usize {
        self.card_count
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn face(&self) -> Face {
        self.face
    }

    pub fn is_flipped(&self) -> bool {
        self.face == Face::Answer
    }

    pub fn reset_pending(&self) -> bool {
        self.reset.is_pending()
    }

    pub fn reset_due_at(&self) -> Option<Instant> {
        self.reset.due_at()
    }

    /// Back to the first card's question, keeping recorded judgments.
    pub fn reopen(&mut self) {
        self.cancel_reset();
        self.cursor = 0;
        self.face = Face::Question;
    }

    /// Show the answer. No-op when it is already showing.
    pub fn flip(&mut self) -> bool {
        if self.face == Face::Answer {
            return false;
        }
        self.face = Face::Answer;
        true
    }

    /// Record a judgment for the current card and schedule the flip back.
    ///
    /// Only accepted while the answer is showing. A second judgment on the
    /// same card replaces the first and restarts the delay.
    pub fn judge(&mut self, judgment: Judgment, now: Instant) -> bool {
        if self.face != Face::Answer {
            return false;
        }
        self.judgments.insert(self.cursor, judgment);
        self.reset.schedule(now);
        log::debug!("Card {} judged {:?}, reset scheduled", self.cursor, judgment);
        true
    }

    /// Apply the scheduled flip back if it is due. Returns true when it fired.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.reset.fire_if_due(now) {
            self.face = Face::Question;
            return true;
        }
        false
    }

    /// Next card, wrapping from the last to the first.
    pub fn cursor_next(&mut self) {
        if self.card_count == 0 {
            return;
        }
        self.move_cursor((self.cursor + 1) % self.card_count);
    }

    /// Previous card, wrapping from the first to the last.
    pub fn cursor_prev(&mut self) {
        if self.card_count == 0 {
            return;
        }
        let target = if self.cursor == 0 {
            self.card_count - 1
        } else {
            self.cursor - 1
        };
        self.move_cursor(target);
    }

    fn move_cursor(&mut self, target: usize) {
        self.cancel_reset();
        self.cursor = target;
        self.face = Face::Question;
    }

    fn cancel_reset(&mut self) {
        if self.reset.cancel() {
            log::debug!("Pending reset cancelled");
        }
    }

    pub fn judgment(&self, index: usize) -> Option<Judgment> {
        self.judgments.get(&index).copied()
    }

    pub fn current_judgment(&self) -> Option<Judgment> {
        self.judgment(self.cursor)
    }

    /// Latest judgment per card index
    pub fn judgments(&self) -> &BTreeMap<usize, Judgment> {
        &self.judgments
    }

    pub fn summary(&self) -> ReviewSummary {
        let known = self
            .judgments
            .values()
            .filter(|j| **j == Judgment::Know)
            .count();
        let not_known = self.judgments.len() - known;
        ReviewSummary {
            known,
            not_known,
            unanswered: self.card_count.saturating_sub(self.judgments.len()),
        }
    }
}
