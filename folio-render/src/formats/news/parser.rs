//! News digest record parsing
//!
//! A news file is a flat list of records:
//!
//! ```text
//! 2024-01-01
//! Launched the new site
//!
//! 2024-02-02
//! Talk at the local meetup
//! ```
//!
//! Records are read positionally. Nothing is validated: dates are opaque strings and a
//! record with a missing field is simply dropped.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One entry of the digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsRecord {
    pub date: String,
    pub title: String,
}

impl NewsRecord {
    pub fn new(date: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            title: title.into(),
        }
    }
}

/// How records are laid out in the source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordLayout {
    /// Groups of three lines: date, title, blank separator. A group with a missing
    /// separator shifts every later group; this is not detected.
    #[default]
    #[serde(alias = "stride")]
    FixedStride,
    /// Blocks separated by blank lines: the first line is the date, the remaining lines
    /// joined by a space form the title.
    #[serde(alias = "blocks")]
    BlankLineSeparated,
}

impl RecordLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordLayout::FixedStride => "stride",
            RecordLayout::BlankLineSeparated => "blocks",
        }
    }
}

impl fmt::Display for RecordLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stride" | "fixed-stride" => Ok(RecordLayout::FixedStride),
            "blocks" | "blank-line-separated" => Ok(RecordLayout::BlankLineSeparated),
            other => Err(other.to_string()),
        }
    }
}

const STRIDE: usize = 3;

/// Extract records using the default fixed-stride layout.
pub fn records(source: &str) -> Vec<NewsRecord> {
    records_with_layout(source, RecordLayout::FixedStride)
}

/// Extract records in input order.
pub fn records_with_layout(source: &str, layout: RecordLayout) -> Vec<NewsRecord> {
    let lines: Vec<&str> = source.trim().split('\n').collect();

    match layout {
        RecordLayout::FixedStride => lines
            .chunks(STRIDE)
            .filter_map(|group| {
                let date = group.first().map(|line| line.trim()).unwrap_or_default();
                let title = group.get(1).map(|line| line.trim()).unwrap_or_default();
                record_from(date, title)
            })
            .collect(),
        RecordLayout::BlankLineSeparated => lines
            .split(|line| line.trim().is_empty())
            .filter_map(|block| {
                let (first, rest) = block.split_first()?;
                let title = rest
                    .iter()
                    .map(|line| line.trim())
                    .collect::<Vec<_>>()
                    .join(" ");
                record_from(first.trim(), &title)
            })
            .collect(),
    }
}

fn record_from(date: &str, title: &str) -> Option<NewsRecord> {
    if date.is_empty() || title.is_empty() {
        None
    } else {
        Some(NewsRecord::new(date, title))
    }
}

/// Render one digest item.
pub fn render_record(record: &NewsRecord) -> String {
    format!(
        "<div class=\"feed-item\">\n    <span class=\"feed-date\">{}</span>\n    <p>{}</p>\n</div>\n",
        record.date, record.title
    )
}

/// Parse a news document with the fixed-stride layout and render every record.
pub fn parse(source: &str) -> String {
    parse_with_layout(source, RecordLayout::FixedStride)
}

pub fn parse_with_layout(source: &str, layout: RecordLayout) -> String {
    records_with_layout(source, layout)
        .iter()
        .map(render_record)
        .collect()
}
