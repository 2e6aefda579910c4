//! Document stores.
//!
//! The renderers never perform I/O. Whoever loads site content goes through a
//! [`DocumentStore`], which hands back the complete text behind an identifier or a
//! [`RetrievalError`]. Identifiers are `/`-separated relative paths such as
//! `content/work/work-de.md`; how they are resolved is up to the store.

use crate::error::RetrievalError;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Source of raw document text.
pub trait DocumentStore: Send + Sync {
    /// Fetch the full text stored under `identifier`.
    fn fetch_text(&self, identifier: &str) -> Result<String, RetrievalError>;
}

impl<S: DocumentStore + ?Sized> DocumentStore for &S {
    fn fetch_text(&self, identifier: &str) -> Result<String, RetrievalError> {
        (**self).fetch_text(identifier)
    }
}

impl<S: DocumentStore + ?Sized> DocumentStore for Box<S> {
    fn fetch_text(&self, identifier: &str) -> Result<String, RetrievalError> {
        (**self).fetch_text(identifier)
    }
}

/// Reads documents from a directory tree.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map an identifier to a path under the root. Identifiers that would escape the root
    /// are rejected.
    pub fn resolve(&self, identifier: &str) -> Result<PathBuf, RetrievalError> {
        let relative = Path::new(identifier);
        let invalid = || RetrievalError::InvalidIdentifier(identifier.to_string());

        if identifier.trim().is_empty() {
            return Err(invalid());
        }

        let mut resolved = self.root.clone();
        for component in relative.components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(invalid())
                }
            }
        }

        Ok(resolved)
    }
}

impl DocumentStore for FsStore {
    fn fetch_text(&self, identifier: &str) -> Result<String, RetrievalError> {
        let path = self.resolve(identifier)?;
        fs::read_to_string(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => RetrievalError::NotFound(identifier.to_string()),
            _ => RetrievalError::Io {
                identifier: identifier.to_string(),
                source,
            },
        })
    }
}

/// Keeps documents in memory. Handy for tests and for embedding content in a binary.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, identifier: impl Into<String>, text: impl Into<String>) {
        self.documents.insert(identifier.into(), text.into());
    }

    pub fn with_document(mut self, identifier: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(identifier, text);
        self
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentStore for MemoryStore {
    fn fetch_text(&self, identifier: &str) -> Result<String, RetrievalError> {
        self.documents
            .get(identifier)
            .cloned()
            .ok_or_else(|| RetrievalError::NotFound(identifier.to_string()))
    }
}
