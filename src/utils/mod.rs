//! Utility functions.
//!
//! This module provides:
//! - Regex compilation for static patterns
//! - Character-aware string helpers

mod pattern;
pub mod text;

pub use pattern::compile_regex_unsafe;
pub use text::{char_len, non_blank, truncate_chars};
