//! Rendering configuration.
//!
//! [`RenderConfig`] implements [`serde::Deserialize`] so callers can embed it
//! in their own configuration files. Missing fields fall back to defaults.
//!
//! # Example
//!
//! ```
//! # use minisvg::config::RenderConfig;
//! let config = RenderConfig::default();
//! assert_eq!(config.indent_step(), 2);
//! ```

use serde::Deserialize;

const DEFAULT_INDENT_STEP: usize = 2;

fn default_indent_step() -> usize {
    DEFAULT_INDENT_STEP
}

/// Controls the layout of rendered documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RenderConfig {
    /// Spaces written before each child element line.
    #[serde(default = "default_indent_step")]
    indent_step: usize,
}

impl RenderConfig {
    /// Creates a new [`RenderConfig`] with the given indent step.
    ///
    /// # Arguments
    ///
    /// * `indent_step` - Number of spaces per nesting level. Zero disables indentation.
    pub fn new(indent_step: usize) -> Self {
        Self { indent_step }
    }

    /// Returns the number of spaces per nesting level.
    pub fn indent_step(&self) -> usize {
        self.indent_step
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_step: DEFAULT_INDENT_STEP,
        }
    }
}
