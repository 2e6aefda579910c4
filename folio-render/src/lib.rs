//! Rendering of folio site content
//!
//!     This crate turns the raw text of the site's content files into HTML fragments that a
//!     page embeds as-is. There are two renderers:
//!
//!     - Markdown: the content and imprint pages, written in a small Markdown dialect
//!       (headings up to level 3, bold, italic, links, one level of bullet list).
//!     - News: the per-section digest, written as date / title / blank line records.
//!
//!     Both are pure functions over strings. They never fail and never perform I/O: any input,
//!     including the empty string, produces a best-effort fragment.
//!
//! Architecture
//!
//!     .
//!     ├── error.rs                # FormatError, RetrievalError
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── markdown            # Ordered regex rewrite passes
//!     │   └── news                # Record parsing and digest item rendering
//!     ├── store.rs                # DocumentStore capability (filesystem, memory)
//!     ├── loader.rs               # ContentLoader: fetch, render, localized fallbacks
//!     └── catalog.rs              # ContentCatalog: (mode, language) -> fragment
//!
//!     The loader is the only place that deals with retrieval. It fetches the full text of a
//!     document through a [`DocumentStore`], hands it to a renderer, and replaces failed
//!     fetches with a one-line fallback paragraph in the requested language. The result of a
//!     load cycle is a [`ContentCatalog`] owned by the caller.
//!
//!     This is a pure lib: nothing here assumes a shell, prints, or reads the environment.
//!     Diagnostics go through `tracing`; installing a subscriber is the application's job.
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── markdown/<topic>.rs
//!     ├── news/<topic>.rs
//!     └── site/            # loader + FsStore against a temporary site tree
//!
//!     Rust does not discover tests in subdirectories on its own, so `tests/lib.rs` declares
//!     the modules.

pub mod catalog;
pub mod error;
pub mod format;
pub mod formats;
pub mod loader;
pub mod registry;
pub mod store;

pub use catalog::ContentCatalog;
pub use error::{FormatError, RetrievalError};
pub use format::Format;
pub use formats::markdown::convert;
pub use formats::news::parse;
pub use loader::{ContentLoader, FallbackMessages, Fallbacks, IdentifierTemplates};
pub use registry::FormatRegistry;
pub use store::{DocumentStore, FsStore, MemoryStore};
