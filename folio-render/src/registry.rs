//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available formats.
//! Formats can be registered and retrieved by name.

use crate::error::FormatError;
use crate::format::Format;
use std::collections::HashMap;
use std::path::Path;

/// Registry of source formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::default();
/// let html = registry.render("# Hello", "markdown")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect format from a filename
    ///
    /// File name prefixes win over extensions, so `news-work-de.md` is a news file even
    /// though it carries the Markdown extension.
    ///
    /// ```ignore
    /// let registry = FormatRegistry::default();
    /// assert_eq!(registry.detect_format_from_filename("work-de.md"), Some("markdown".to_string()));
    /// assert_eq!(registry.detect_format_from_filename("news-work-de.md"), Some("news".to_string()));
    /// ```
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let path = Path::new(filename);

        if let Some(file_name) = path.file_name().and_then(|name| name.to_str()) {
            for format in self.formats.values() {
                if format
                    .file_prefixes()
                    .iter()
                    .any(|prefix| file_name.starts_with(prefix))
                {
                    return Some(format.name().to_string());
                }
            }
        }

        let extension = path.extension().and_then(|ext| ext.to_str())?;
        self.formats
            .values()
            .find(|format| format.file_extensions().contains(&extension))
            .map(|format| format.name().to_string())
    }

    /// Render source text using the specified format
    pub fn render(&self, source: &str, format: &str) -> Result<String, FormatError> {
        Ok(self.get(format)?.render(source))
    }

    /// Render source text using the specified format and options
    pub fn render_with_options(
        &self,
        source: &str,
        format: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        self.get(format)?.render_with_options(source, options)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::markdown::MarkdownFormat::default());
        registry.register(crate::formats::news::NewsFormat::default());

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::markdown::{ListWrap, MarkdownFormat};

    struct TestFormat;
    impl Format for TestFormat {
        fn name(&self) -> &str {
            "test"
        }
        fn description(&self) -> &str {
            "Test format"
        }
        fn file_extensions(&self) -> &[&str] {
            &["tst"]
        }
        fn render(&self, _source: &str) -> String {
            "test output".to_string()
        }
    }

    #[test]
    fn test_registry_creation() {
        let registry = FormatRegistry::new();
        assert_eq!(registry.formats.len(), 0);
    }

    #[test]
    fn test_registry_register() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        assert!(registry.has("test"));
        assert_eq!(registry.list_formats(), vec!["test"]);
    }

    #[test]
    fn test_registry_get_nonexistent() {
        let registry = FormatRegistry::new();
        match registry.get("nonexistent") {
            Err(FormatError::FormatNotFound(name)) => assert_eq!(name, "nonexistent"),
            _ => panic!("Expected FormatNotFound error"),
        }
    }

    #[test]
    fn test_registry_render() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        assert_eq!(registry.render("input", "test").unwrap(), "test output");
    }

    #[test]
    fn test_registry_render_not_found() {
        let registry = FormatRegistry::new();
        assert_eq!(
            registry.render("input", "nonexistent"),
            Err(FormatError::FormatNotFound("nonexistent".to_string()))
        );
    }

    #[test]
    fn test_default_render_with_options_rejects_options() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        let mut options = HashMap::new();
        options.insert("unused".to_string(), "true".to_string());

        assert!(registry
            .render_with_options("input", "test", &options)
            .is_err());
        assert!(registry
            .render_with_options("input", "test", &HashMap::new())
            .is_ok());
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = FormatRegistry::default();
        assert_eq!(registry.list_formats(), vec!["markdown", "news"]);
    }

    #[test]
    fn test_registry_replace_format() {
        let mut registry = FormatRegistry::with_defaults();
        registry.register(MarkdownFormat::with_list_wrap(ListWrap::EveryRun));

        assert_eq!(registry.list_formats().len(), 2);
        let html = registry.render("- a\n\n- b", "markdown").unwrap();
        assert_eq!(html.matches("<ul>").count(), 2);
    }

    #[test]
    fn test_detect_format_from_filename() {
        let mut registry = FormatRegistry::with_defaults();
        registry.register(TestFormat);

        assert_eq!(
            registry.detect_format_from_filename("content/work/work-de.md"),
            Some("markdown".to_string())
        );
        assert_eq!(
            registry.detect_format_from_filename("notes.markdown"),
            Some("markdown".to_string())
        );
        assert_eq!(
            registry.detect_format_from_filename("content/news/news-work-de.md"),
            Some("news".to_string())
        );
        assert_eq!(
            registry.detect_format_from_filename("digest.news"),
            Some("news".to_string())
        );
        assert_eq!(
            registry.detect_format_from_filename("doc.tst"),
            Some("test".to_string())
        );
        assert_eq!(registry.detect_format_from_filename("doc.unknown"), None);
        assert_eq!(registry.detect_format_from_filename("doc"), None);
    }
}
