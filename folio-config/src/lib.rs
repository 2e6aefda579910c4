//! Shared configuration loader for folio.
//!
//! `defaults/folio.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`FolioConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use folio_render::formats::{ListWrap, MarkdownFormat, MarkdownOptions, NewsFormat, RecordLayout};
use folio_render::{
    ContentLoader, DocumentStore, FallbackMessages, Fallbacks, FormatRegistry,
    IdentifierTemplates,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/folio.default.toml");

/// Top-level configuration consumed by folio applications.
#[derive(Debug, Clone, Deserialize)]
pub struct FolioConfig {
    pub content: ContentConfig,
    pub markdown: MarkdownConfig,
    pub news: NewsConfig,
    pub fallback: HashMap<String, FallbackMessages>,
}

/// Where content lives and which pages exist.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    pub root: PathBuf,
    pub modes: Vec<String>,
    pub languages: Vec<String>,
    pub default_language: String,
    pub content_template: String,
    pub news_template: String,
    pub imprint_template: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarkdownConfig {
    pub list_wrap: ListWrap,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewsConfig {
    pub layout: RecordLayout,
}

impl From<&ContentConfig> for IdentifierTemplates {
    fn from(config: &ContentConfig) -> Self {
        IdentifierTemplates {
            content: config.content_template.clone(),
            news: config.news_template.clone(),
            imprint: config.imprint_template.clone(),
        }
    }
}

impl From<&MarkdownConfig> for MarkdownOptions {
    fn from(config: &MarkdownConfig) -> Self {
        MarkdownOptions {
            list_wrap: config.list_wrap,
        }
    }
}

impl FolioConfig {
    pub fn fallbacks(&self) -> Fallbacks {
        Fallbacks::new(
            self.content.default_language.clone(),
            self.fallback.clone(),
        )
    }

    /// A registry whose formats use the configured defaults.
    pub fn registry(&self) -> FormatRegistry {
        let mut registry = FormatRegistry::new();
        registry.register(MarkdownFormat::new((&self.markdown).into()));
        registry.register(NewsFormat::new(self.news.layout));
        registry
    }

    /// A content loader over `store` with every configured knob applied.
    pub fn content_loader<S: DocumentStore>(&self, store: S) -> ContentLoader<S> {
        ContentLoader::new(store)
            .with_markdown_options((&self.markdown).into())
            .with_news_layout(self.news.layout)
            .with_templates((&self.content).into())
            .with_fallbacks(self.fallbacks())
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<FolioConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<FolioConfig, ConfigError> {
    Loader::new().build()
}
