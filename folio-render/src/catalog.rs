//! Rendered site content, keyed by mode and language.
//!
//! A [`ContentCatalog`] is built once per load cycle by the
//! [`ContentLoader`](crate::loader::ContentLoader) and handed to whatever displays the
//! pages. It is plain owned data: switching the display language is a lookup, not a reload.

use serde::Serialize;
use std::collections::BTreeMap;

type ByLanguage = BTreeMap<String, String>;

/// Content, news and imprint fragments for every loaded mode and language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentCatalog {
    content: BTreeMap<String, ByLanguage>,
    news: BTreeMap<String, ByLanguage>,
    imprint: ByLanguage,
}

impl ContentCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_content(&mut self, mode: &str, lang: &str, html: String) {
        self.content
            .entry(mode.to_string())
            .or_default()
            .insert(lang.to_string(), html);
    }

    pub fn insert_news(&mut self, mode: &str, lang: &str, html: String) {
        self.news
            .entry(mode.to_string())
            .or_default()
            .insert(lang.to_string(), html);
    }

    pub fn insert_imprint(&mut self, lang: &str, html: String) {
        self.imprint.insert(lang.to_string(), html);
    }

    pub fn content(&self, mode: &str, lang: &str) -> Option<&str> {
        self.content
            .get(mode)
            .and_then(|by_lang| by_lang.get(lang))
            .map(String::as_str)
    }

    pub fn news(&self, mode: &str, lang: &str) -> Option<&str> {
        self.news
            .get(mode)
            .and_then(|by_lang| by_lang.get(lang))
            .map(String::as_str)
    }

    pub fn imprint(&self, lang: &str) -> Option<&str> {
        self.imprint.get(lang).map(String::as_str)
    }

    /// Modes that have content or news, sorted.
    pub fn modes(&self) -> Vec<&str> {
        let mut modes: Vec<&str> = self
            .content
            .keys()
            .chain(self.news.keys())
            .map(String::as_str)
            .collect();
        modes.sort_unstable();
        modes.dedup();
        modes
    }

    /// Total number of stored fragments.
    pub fn len(&self) -> usize {
        let nested = |map: &BTreeMap<String, ByLanguage>| -> usize {
            map.values().map(BTreeMap::len).sum()
        };
        nested(&self.content) + nested(&self.news) + self.imprint.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
