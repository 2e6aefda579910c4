//! Content loading.
//!
//! The loader sits between a [`DocumentStore`] and the renderers. It builds identifiers from
//! a mode and a language, fetches the full text, renders it, and on any retrieval failure
//! logs the error and substitutes a short localized fallback fragment. The renderers are
//! never called with partial text or with an error.

use crate::catalog::ContentCatalog;
use crate::error::RetrievalError;
use crate::formats::markdown::{convert_with_options, MarkdownOptions};
use crate::formats::news::{parse_with_layout, RecordLayout};
use crate::store::DocumentStore;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, error, info};

/// Message used when neither the requested nor the default language has one configured.
const LAST_RESORT_CONTENT: &str = "Failed to load content.";
const LAST_RESORT_NEWS: &str = "Failed to load news.";

/// Identifier patterns with `{mode}` and `{lang}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierTemplates {
    pub content: String,
    pub news: String,
    pub imprint: String,
}

impl Default for IdentifierTemplates {
    fn default() -> Self {
        Self {
            content: "content/{mode}/{mode}-{lang}.md".to_string(),
            news: "content/news/news-{mode}-{lang}.md".to_string(),
            imprint: "content/imprint/imprint-{lang}.md".to_string(),
        }
    }
}

impl IdentifierTemplates {
    pub fn content_for(&self, mode: &str, lang: &str) -> String {
        fill(&self.content, mode, lang)
    }

    pub fn news_for(&self, mode: &str, lang: &str) -> String {
        fill(&self.news, mode, lang)
    }

    pub fn imprint_for(&self, lang: &str) -> String {
        fill(&self.imprint, "", lang)
    }
}

fn fill(template: &str, mode: &str, lang: &str) -> String {
    template.replace("{mode}", mode).replace("{lang}", lang)
}

/// User-facing messages shown in place of a document that failed to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackMessages {
    pub content: String,
    pub news: String,
}

impl FallbackMessages {
    pub fn new(content: impl Into<String>, news: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            news: news.into(),
        }
    }
}

/// Fallback messages per language, with a default language to fall back on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fallbacks {
    default_language: String,
    messages: HashMap<String, FallbackMessages>,
}

impl Default for Fallbacks {
    fn default() -> Self {
        let mut messages = HashMap::new();
        messages.insert(
            "de".to_string(),
            FallbackMessages::new("Fehler beim Laden des Inhalts.", "Fehler beim Laden der News."),
        );
        messages.insert(
            "en".to_string(),
            FallbackMessages::new(LAST_RESORT_CONTENT, LAST_RESORT_NEWS),
        );
        Self::new("de", messages)
    }
}

impl Fallbacks {
    pub fn new(
        default_language: impl Into<String>,
        messages: HashMap<String, FallbackMessages>,
    ) -> Self {
        Self {
            default_language: default_language.into(),
            messages,
        }
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    fn messages_for(&self, lang: &str) -> Option<&FallbackMessages> {
        self.messages
            .get(lang)
            .or_else(|| self.messages.get(&self.default_language))
    }

    pub fn content_message(&self, lang: &str) -> &str {
        self.messages_for(lang)
            .map_or(LAST_RESORT_CONTENT, |m| m.content.as_str())
    }

    pub fn news_message(&self, lang: &str) -> &str {
        self.messages_for(lang)
            .map_or(LAST_RESORT_NEWS, |m| m.news.as_str())
    }
}

fn fallback_fragment(message: &str) -> String {
    format!("<p>{message}</p>")
}

/// Loads and renders site content from a [`DocumentStore`].
#[derive(Debug, Clone)]
pub struct ContentLoader<S> {
    store: S,
    markdown: MarkdownOptions,
    news_layout: RecordLayout,
    templates: IdentifierTemplates,
    fallbacks: Fallbacks,
}

impl<S: DocumentStore> ContentLoader<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            markdown: MarkdownOptions::default(),
            news_layout: RecordLayout::default(),
            templates: IdentifierTemplates::default(),
            fallbacks: Fallbacks::default(),
        }
    }

    pub fn with_markdown_options(mut self, options: MarkdownOptions) -> Self {
        self.markdown = options;
        self
    }

    pub fn with_news_layout(mut self, layout: RecordLayout) -> Self {
        self.news_layout = layout;
        self
    }

    pub fn with_templates(mut self, templates: IdentifierTemplates) -> Self {
        self.templates = templates;
        self
    }

    pub fn with_fallbacks(mut self, fallbacks: Fallbacks) -> Self {
        self.fallbacks = fallbacks;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn templates(&self) -> &IdentifierTemplates {
        &self.templates
    }

    fn fetch(&self, identifier: &str) -> Result<String, RetrievalError> {
        debug!(identifier, "fetching document");
        self.store.fetch_text(identifier)
    }

    /// Render the Markdown document behind `identifier`, or the content fallback for `lang`.
    pub fn load_markdown(&self, identifier: &str, lang: &str) -> String {
        match self.fetch(identifier) {
            Ok(text) => convert_with_options(&text, &self.markdown),
            Err(err) => {
                error!(identifier, error = %err, "error loading markdown file");
                fallback_fragment(self.fallbacks.content_message(lang))
            }
        }
    }

    /// Render the news document behind `identifier`, or the news fallback for `lang`.
    pub fn load_news(&self, identifier: &str, lang: &str) -> String {
        match self.fetch(identifier) {
            Ok(text) => parse_with_layout(&text, self.news_layout),
            Err(err) => {
                error!(identifier, error = %err, "error loading news file");
                fallback_fragment(self.fallbacks.news_message(lang))
            }
        }
    }

    pub fn load_content(&self, mode: &str, lang: &str) -> String {
        self.load_markdown(&self.templates.content_for(mode, lang), lang)
    }

    pub fn load_news_for(&self, mode: &str, lang: &str) -> String {
        self.load_news(&self.templates.news_for(mode, lang), lang)
    }

    pub fn load_imprint(&self, lang: &str) -> String {
        self.load_markdown(&self.templates.imprint_for(lang), lang)
    }

    /// Load content and news for every mode/language pair and the imprint for every
    /// language.
    pub fn load_catalog<M, L>(&self, modes: &[M], languages: &[L]) -> ContentCatalog
    where
        M: AsRef<str>,
        L: AsRef<str>,
    {
        let mut catalog = ContentCatalog::new();

        for mode in modes.iter().map(AsRef::as_ref) {
            for lang in languages.iter().map(AsRef::as_ref) {
                catalog.insert_content(mode, lang, self.load_content(mode, lang));
            }
        }

        for mode in modes.iter().map(AsRef::as_ref) {
            for lang in languages.iter().map(AsRef::as_ref) {
                catalog.insert_news(mode, lang, self.load_news_for(mode, lang));
            }
        }

        for lang in languages.iter().map(AsRef::as_ref) {
            catalog.insert_imprint(lang, self.load_imprint(lang));
        }

        info!(fragments = catalog.len(), "content catalog loaded");
        catalog
    }
}
