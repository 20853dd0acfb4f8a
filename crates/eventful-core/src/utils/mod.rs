//! Utility functions for string matching and cleanup.

pub mod format;

// Re-export commonly used functions at module level
pub use format::{contains_ignore_case, normalize_whitespace};
