//! Regex compilation utilities.

use regex::Regex;

/// Compiles a regex pattern that must succeed (for compile-time constants).
///
/// This function panics if compilation fails, which is appropriate for static
/// patterns held in `LazyLock`s: a failure is a programming error caught by the
/// first test that touches the pattern.
///
/// # Arguments
///
/// * `pattern` - The regex source
/// * `context` - Name of the static, for the panic message
pub fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}
