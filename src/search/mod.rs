//! Query filtering over the category registry

pub mod filter;

pub use filter::{filter, FilteredView};
