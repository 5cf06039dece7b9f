//! Word lists
//!
//! Embedded lists are compiled in from `data/`; `loader` reads flat or JSON
//! lists from disk and normalizes them into a `WordLists` pair.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
pub use loader::{WordListError, WordLists};
