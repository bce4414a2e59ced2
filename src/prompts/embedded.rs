//! Embedded prompt templates
//!
//! Compiled into the library from the repo's prompts/ directory so the
//! flows work without any template files on disk.

use tracing::debug;

/// Option-generation prompt
pub const GUIDE_OPTIONS: &str = include_str!("../../prompts/guide-options.pmt");

/// Follow-up question prompt
pub const GUIDE_QUESTIONS: &str = include_str!("../../prompts/guide-questions.pmt");

/// Final recommendation prompt
pub const GUIDE_FINAL: &str = include_str!("../../prompts/guide-final.pmt");

/// Get an embedded template by name
pub fn get_embedded(name: &str) -> Option<&'static str> {
    debug!(%name, "get_embedded: called");
    match name {
        "guide-options" => Some(GUIDE_OPTIONS),
        "guide-questions" => Some(GUIDE_QUESTIONS),
        "guide-final" => Some(GUIDE_FINAL),
        _ => None,
    }
}
