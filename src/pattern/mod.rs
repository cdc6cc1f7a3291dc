// Mon Feb 02 2026 - Alex

pub mod pattern;
pub mod generator;

pub use pattern::Pattern;
pub use generator::{random_pattern, MAX_PATTERN_LENGTH, MIN_PATTERN_LENGTH};
