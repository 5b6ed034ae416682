//! State core for the flashdeck category browser
//!
//! Registry, search filtering, carousel windowing, selection navigation and
//! flashcard review. Everything here is in-memory and synchronous; the
//! terminal front end lives in the `flashdeck` binary.

pub mod browser;
pub mod carousel;
pub mod config;
pub mod deck;
pub mod navigator;
pub mod review;
pub mod search;

pub use browser::{Browser, DetailKey, DetailPane};
pub use config::Config;
