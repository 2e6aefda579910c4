//! News digest format implementation
//!
//! Renders a news file (date / title / blank line records) into a list of digest items:
//!
//! ```html
//! <div class="feed-item">
//!     <span class="feed-date">2024-01-01</span>
//!     <p>Launched the new site</p>
//! </div>
//! ```
//!
//! # Options
//!
//! - `layout`: `stride` (default) or `blocks`. See [`RecordLayout`].

pub mod parser;

use crate::error::FormatError;
use crate::format::Format;
use std::collections::HashMap;

pub use parser::{
    parse, parse_with_layout, records, records_with_layout, render_record, NewsRecord,
    RecordLayout,
};

/// Format implementation for news digests
#[derive(Debug, Clone, Copy, Default)]
pub struct NewsFormat {
    layout: RecordLayout,
}

impl NewsFormat {
    pub fn new(layout: RecordLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> RecordLayout {
        self.layout
    }
}

impl Format for NewsFormat {
    fn name(&self) -> &str {
        "news"
    }

    fn description(&self) -> &str {
        "Date / title news records rendered as digest items"
    }

    fn file_extensions(&self) -> &[&str] {
        &["news"]
    }

    fn file_prefixes(&self) -> &[&str] {
        &["news-"]
    }

    fn render(&self, source: &str) -> String {
        parse_with_layout(source, self.layout)
    }

    fn render_with_options(
        &self,
        source: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut layout = self.layout;
        for (key, value) in options {
            if key != "layout" {
                return Err(FormatError::UnknownOption {
                    format: self.name().to_string(),
                    option: key.clone(),
                });
            }
            layout = value.parse().map_err(|value| FormatError::InvalidOption {
                format: self.name().to_string(),
                option: key.clone(),
                value,
            })?;
        }

        Ok(parse_with_layout(source, layout))
    }
}
