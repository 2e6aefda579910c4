//! Markdown format implementation
//!
//! This module renders the small Markdown dialect used by the site's content pages into an
//! HTML fragment.
//!
//! # Library Choice
//!
//! The dialect is deliberately tiny and its output has to match the existing pages exactly,
//! including a few quirks. A CommonMark engine would render the same sources differently, so
//! the conversion is a fixed list of `regex` rewrites (see [`converter`]).
//!
//! # Element Mapping Table
//!
//! | Markdown                 | HTML                                                          | Notes                                  |
//! |--------------------------|---------------------------------------------------------------|----------------------------------------|
//! | `# ` / `## ` / `### `    | `<h1>` / `<h2>` / `<h3>`                                      | Levels 4-6 stay literal text           |
//! | `**x**`, `__x__`         | `<strong>x</strong>`                                          | Non-greedy, single line                |
//! | `*x*`, `_x_`             | `<em>x</em>`                                                  | Runs after bold                        |
//! | `[label](url)`           | `<a href="url" target="_blank" rel="noopener noreferrer">`    | No escaping of label or url            |
//! | `- item`                 | `<li>item</li>` inside `<ul>`                                 | First run only, unless `every-run`     |
//! | any other text line      | `<p>line</p>`                                                 | Lines opening with block markup kept   |
//!
//! # Options
//!
//! - `list-wrap`: `first-run` (default) or `every-run`.
//!
//! # Lossy Conversions
//!
//! - Underscores inside URLs are consumed by the italic pass before links are rewritten.
//! - `\r\n` line endings come back as `\n`.
//! - Re-running the converter on its own output is not guaranteed to be stable.

pub mod converter;

use crate::error::FormatError;
use crate::format::Format;
use std::collections::HashMap;

pub use converter::{convert, convert_with_options, ListWrap, MarkdownOptions};

/// Format implementation for Markdown
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormat {
    options: MarkdownOptions,
}

impl MarkdownFormat {
    pub fn new(options: MarkdownOptions) -> Self {
        Self { options }
    }

    pub fn with_list_wrap(list_wrap: ListWrap) -> Self {
        Self::new(MarkdownOptions { list_wrap })
    }

    pub fn options(&self) -> &MarkdownOptions {
        &self.options
    }
}

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Site Markdown dialect rendered to an HTML fragment"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn render(&self, source: &str) -> String {
        convert_with_options(source, &self.options)
    }

    fn render_with_options(
        &self,
        source: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut effective = self.options;
        for (key, value) in options {
            match key.as_str() {
                "list-wrap" => {
                    effective.list_wrap = value.parse().map_err(|value| FormatError::InvalidOption {
                        format: self.name().to_string(),
                        option: key.clone(),
                        value,
                    })?;
                }
                _ => {
                    return Err(FormatError::UnknownOption {
                        format: self.name().to_string(),
                        option: key.clone(),
                    })
                }
            }
        }

        Ok(convert_with_options(source, &effective))
    }
}
