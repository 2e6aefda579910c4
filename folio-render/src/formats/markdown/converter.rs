//! Markdown → HTML fragment conversion
//!
//! The conversion is a fixed sequence of rewrite passes over the whole text. Order matters:
//! headings run from `###` down to `#` so a longer marker is never eaten by a shorter one,
//! bold runs before italic so `**x**` is not read as two empty emphasis spans, and paragraph
//! wrapping runs last so it can tell already-produced block markup from plain text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How unordered list items are grouped into `<ul>` containers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListWrap {
    /// Only the first contiguous run of items in the document gets a container.
    #[default]
    FirstRun,
    /// Every contiguous run of items gets its own container.
    EveryRun,
}

impl ListWrap {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListWrap::FirstRun => "first-run",
            ListWrap::EveryRun => "every-run",
        }
    }
}

impl fmt::Display for ListWrap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListWrap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first-run" | "first" => Ok(ListWrap::FirstRun),
            "every-run" | "every" | "all" => Ok(ListWrap::EveryRun),
            other => Err(other.to_string()),
        }
    }
}

/// Knobs for [`convert_with_options`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkdownOptions {
    pub list_wrap: ListWrap,
}

/// A single ordered rewrite: every match of `pattern` is replaced by `replacement`.
struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Rule {
            pattern: Regex::new(pattern).expect("rewrite rule pattern is valid"),
            replacement,
        }
    }

    fn apply(&self, text: &str) -> String {
        self.pattern.replace_all(text, self.replacement).into_owned()
    }
}

/// Inline and line-level rewrites, in the order they must run.
static REWRITE_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        // Headings, longest marker first
        Rule::new(r"(?mi)^### (.*)$", "<h3>${1}</h3>"),
        Rule::new(r"(?mi)^## (.*)$", "<h2>${1}</h2>"),
        Rule::new(r"(?mi)^# (.*)$", "<h1>${1}</h1>"),
        // Bold
        Rule::new(r"\*\*(.*?)\*\*", "<strong>${1}</strong>"),
        Rule::new(r"__(.*?)__", "<strong>${1}</strong>"),
        // Italic
        Rule::new(r"\*(.*?)\*", "<em>${1}</em>"),
        Rule::new(r"_(.*?)_", "<em>${1}</em>"),
        // Links
        Rule::new(
            r"\[([^\]]+)\]\(([^)]+)\)",
            r#"<a href="${2}" target="_blank" rel="noopener noreferrer">${1}</a>"#,
        ),
        // List items
        Rule::new(r"(?m)^- (.*)$", "<li>${1}</li>"),
    ]
});

/// A contiguous run of lines that are exactly one list item each.
static LIST_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^<li>.*</li>$(?:\n<li>.*</li>$)*").expect("list run pattern is valid")
});

static EMPTY_PARAGRAPH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<p>\s*</p>").expect("empty paragraph pattern is valid"));

/// Phrasing elements. A line opening with one of these is still running text and gets a
/// paragraph; any other leading tag marks the line as block markup.
const INLINE_TAGS: &[&str] = &[
    "a", "abbr", "b", "cite", "code", "em", "i", "img", "kbd", "mark", "q", "s", "small",
    "span", "strong", "sub", "sup", "u",
];

/// Convert a Markdown document into an HTML fragment using the default options.
///
/// Never fails: anything that is not recognised ends up as paragraph text.
pub fn convert(source: &str) -> String {
    convert_with_options(source, &MarkdownOptions::default())
}

/// Convert a Markdown document into an HTML fragment.
pub fn convert_with_options(source: &str, options: &MarkdownOptions) -> String {
    let mut html = source.replace("\r\n", "\n");

    for rule in REWRITE_RULES.iter() {
        html = rule.apply(&html);
    }

    let html = wrap_list_runs(&html, options.list_wrap);
    let html = wrap_paragraphs(&html);

    EMPTY_PARAGRAPH.replace_all(&html, "").into_owned()
}

fn wrap_list_runs(text: &str, mode: ListWrap) -> String {
    let limit = match mode {
        ListWrap::FirstRun => 1,
        ListWrap::EveryRun => 0,
    };
    LIST_RUN
        .replacen(text, limit, "<ul>${0}</ul>")
        .into_owned()
}

fn wrap_paragraphs(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                String::new()
            } else if opens_with_block_tag(trimmed) {
                line.to_string()
            } else {
                format!("<p>{line}</p>")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn opens_with_block_tag(trimmed: &str) -> bool {
    let Some(rest) = trimmed.strip_prefix('<') else {
        return false;
    };
    let rest = rest.strip_prefix('/').unwrap_or(rest);
    let name = rest
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();

    !INLINE_TAGS.contains(&name.as_str())
}
