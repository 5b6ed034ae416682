//! Flashcard review for an open category
//!
//! This module provides:
//! - The per-category review session (cursor, flip state, judgments)
//! - The cancellable auto-reset timer used after a judgment

pub mod session;
pub mod timer;

pub use session::{Face, Judgment, ReviewSession, ReviewSummary, DEFAULT_RESET_DELAY};
pub use timer::ResetTimer;
