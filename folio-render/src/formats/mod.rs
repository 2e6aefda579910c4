//! Format implementations
//!
//! Each format turns the text of one source document into an HTML fragment.

pub mod markdown;
pub mod news;

pub use markdown::{ListWrap, MarkdownFormat, MarkdownOptions};
pub use news::{NewsFormat, NewsRecord, RecordLayout};
