//! JSON serialization for the settings file.
//!
//! Output is pretty-printed with 2-space indentation and a trailing newline
//! so hand edits and diffs stay readable.

mod json;

pub use json::*;
