//! Prompt Template System
//!
//! Loads and renders `.pmt` (prompt template) files for the guide flows.
//!
//! Template loading chain:
//! 1. `{prompts.dir}/{name}.pmt` (directory override, `prompt_templates/` by default)
//! 2. Embedded fallback compiled into the library
//!
//! Templates use Handlebars syntax for variable substitution.

pub mod embedded;
mod loader;

pub use loader::{GuideTemplate, PromptError, PromptLoader};
