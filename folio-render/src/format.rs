//! Format trait definition
//!
//! This module defines the Format trait that every renderer implements. A format turns the
//! full text of one source document into an HTML fragment ready to be embedded in a page.

use crate::error::FormatError;
use std::collections::HashMap;

/// Trait for source formats
///
/// Rendering itself never fails: malformed input degrades to literal text. Only option
/// handling can be rejected.
///
/// # Examples
///
/// ```ignore
/// struct Shout;
///
/// impl Format for Shout {
///     fn name(&self) -> &str {
///         "shout"
///     }
///
///     fn render(&self, source: &str) -> String {
///         format!("<p>{}</p>", source.to_uppercase())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "markdown", "news")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// File name prefixes that identify this format regardless of extension
    /// (e.g. `news-` for `news-work-de.md`). Checked before extensions.
    fn file_prefixes(&self) -> &[&str] {
        &[]
    }

    /// Render the source text into an HTML fragment.
    fn render(&self, source: &str) -> String;

    /// Render with extra parameters.
    ///
    /// The default implementation accepts no parameters and delegates to
    /// [`Format::render`]. Formats with knobs override this.
    fn render_with_options(
        &self,
        source: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        match options.keys().next() {
            None => Ok(self.render(source)),
            Some(key) => Err(FormatError::UnknownOption {
                format: self.name().to_string(),
                option: key.clone(),
            }),
        }
    }
}
