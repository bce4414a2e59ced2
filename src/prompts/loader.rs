//! Prompt Loader
//!
//! Loads prompt templates from a directory or falls back to embedded
//! defaults, then renders them with Handlebars.

use std::path::{Path, PathBuf};

use handlebars::Handlebars;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use super::embedded;

/// The three guide prompt templates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideTemplate {
    /// Option choices from free-form user input
    Options,
    /// Follow-up questions for the selected options
    Questions,
    /// Final recommendation from the answer transcript
    FinalOutput,
}

impl GuideTemplate {
    /// Template file name (without the .pmt extension)
    pub fn name(&self) -> &'static str {
        match self {
            Self::Options => "guide-options",
            Self::Questions => "guide-questions",
            Self::FinalOutput => "guide-final",
        }
    }
}

impl std::fmt::Display for GuideTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Errors from loading or rendering prompt templates
///
/// All of these are fatal to the calling flow: there is no retry and no
/// default template.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Failed to read template {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Prompt template not found: {0}")]
    NotFound(String),

    #[error("Failed to render template {name}: {source}")]
    Render {
        name: String,
        #[source]
        source: handlebars::RenderError,
    },
}

/// Loads and renders prompt templates
///
/// Templates are looked up in the configured directory first
/// (`{dir}/{name}.pmt`), then in the embedded defaults.
pub struct PromptLoader {
    hbs: Handlebars<'static>,
    dir: Option<PathBuf>,
}

impl PromptLoader {
    /// Create a loader reading overrides from the given directory
    pub fn new(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref().to_path_buf();
        Self {
            hbs: Self::engine(),
            dir: if dir.exists() { Some(dir) } else { None },
        }
    }

    /// Create a loader that only uses embedded templates (for testing)
    pub fn embedded_only() -> Self {
        Self {
            hbs: Self::engine(),
            dir: None,
        }
    }

    fn engine() -> Handlebars<'static> {
        let mut hbs = Handlebars::new();
        // Prompts are plain text, not HTML
        hbs.register_escape_fn(handlebars::no_escape);
        // An unbound placeholder is a template bug, not empty output
        hbs.set_strict_mode(true);
        hbs
    }

    /// Load a template's raw text
    fn load_template(&self, template: GuideTemplate) -> Result<String, PromptError> {
        if let Some(ref dir) = self.dir {
            let path = dir.join(format!("{}.pmt", template.name()));
            if path.exists() {
                debug!(?path, "load_template: using directory override");
                return std::fs::read_to_string(&path).map_err(|source| PromptError::Io { path, source });
            }
        }

        if let Some(content) = embedded::get_embedded(template.name()) {
            debug!(name = %template.name(), "load_template: using embedded template");
            return Ok(content.to_string());
        }

        Err(PromptError::NotFound(template.name().to_string()))
    }

    /// Render a template with the given bindings
    ///
    /// Every occurrence of a placeholder is substituted; an unbound
    /// placeholder fails the render.
    pub fn render<T: Serialize>(&self, template: GuideTemplate, bindings: &T) -> Result<String, PromptError> {
        let text = self.load_template(template)?;
        debug!(name = %template.name(), "render: called");
        self.hbs.render_template(&text, bindings).map_err(|source| PromptError::Render {
            name: template.name().to_string(),
            source,
        })
    }
}
