//! Report rendering.
//!
//! Two outputs are supported:
//! - JSON (`--json`): `{ url, valid, tags, issues, summary }`, or `{ error }` on failure
//! - Terminal: tag table, platform preview boxes and the issue list
//!
//! Renderers return strings; writing them to stdout is left to the caller.

mod failure;
mod json;
mod preview;
mod terminal;

// Re-export public API
pub use failure::{render_failure, Stream};
pub use json::{render_json, render_json_error};
pub use preview::{build_previews, render_preview_box, PreviewCard};
pub use terminal::{render_counts, render_issues, render_tag_table, render_terminal};
