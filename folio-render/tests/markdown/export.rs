//! Export tests for the Markdown format (Markdown → HTML fragment)
//!
//! These tests render whole pages and individual constructs and check the resulting
//! markup, including the quirks existing pages depend on.

use folio_render::format::Format;
use folio_render::formats::markdown::{convert, ListWrap, MarkdownFormat};
use insta::assert_snapshot;

const ABOUT_PAGE: &str = "# Über mich

Ich bin **Systemadministrator** und _Politiker_.

## Projekte

- Betrieb von [Servern](https://example.org/ops)
- Automatisierung mit *Ansible*

### Kontakt
Schreib mir eine Mail.
";

// ============================================================================
// WHOLE PAGES
// ============================================================================

#[test]
fn test_about_page() {
    assert_snapshot!(convert(ABOUT_PAGE.trim_end()), @r#"
<h1>Über mich</h1>

<p>Ich bin <strong>Systemadministrator</strong> und <em>Politiker</em>.</p>

<h2>Projekte</h2>

<ul><li>Betrieb von <a href="https://example.org/ops" target="_blank" rel="noopener noreferrer">Servern</a></li>
<li>Automatisierung mit <em>Ansible</em></li></ul>

<h3>Kontakt</h3>
<p>Schreib mir eine Mail.</p>
"#);
}

#[test]
fn test_page_through_format_trait_matches_convert() {
    let format = MarkdownFormat::default();
    assert_eq!(format.render(ABOUT_PAGE), convert(ABOUT_PAGE));
}

// ============================================================================
// BASIC ELEMENT TESTS
// ============================================================================

#[test]
fn test_heading_exact() {
    assert_eq!(convert("# Title"), "<h1>Title</h1>");
}

#[test]
fn test_inline_emphasis_exact() {
    assert_eq!(
        convert("**bold** and *italic*"),
        "<p><strong>bold</strong> and <em>italic</em></p>"
    );
}

#[test]
fn test_link_exact() {
    assert_eq!(
        convert("[x](http://y)"),
        "<p><a href=\"http://y\" target=\"_blank\" rel=\"noopener noreferrer\">x</a></p>"
    );
}

#[test]
fn test_list_contains_wrapped_items() {
    let html = convert("- a\n- b");
    assert!(html.contains("<ul><li>a</li>\n<li>b</li></ul>"));
}

#[test]
fn test_empty_document() {
    assert_eq!(convert(""), "");
}

#[test]
fn test_stray_bracket_in_label_prevents_link() {
    assert_eq!(convert("[a]b](http://y)"), "<p>[a]b](http://y)</p>");
}

#[test]
fn test_nested_bold_inside_link_label() {
    let html = convert("[**Docs**](https://example.org)");
    assert_eq!(
        html,
        "<p><a href=\"https://example.org\" target=\"_blank\" rel=\"noopener noreferrer\"><strong>Docs</strong></a></p>"
    );
}

#[test]
fn test_list_item_content_is_inline_rendered() {
    let html = convert("- **Rust** and _Go_");
    assert_eq!(html, "<ul><li><strong>Rust</strong> and <em>Go</em></li></ul>");
}

#[test]
fn test_dash_without_space_is_not_a_list_item() {
    assert_eq!(convert("-not a list"), "<p>-not a list</p>");
}

// ============================================================================
// KNOWN QUIRKS
// ============================================================================

#[test]
fn test_underscores_in_urls_are_read_as_emphasis() {
    let html = convert("[x](http://a_b_c)");
    assert!(html.contains("<em>b</em>"));
}

#[test]
fn test_second_bullet_run_left_unwrapped_by_default() {
    let html = convert("- one\n\nBetween\n\n- two");
    assert_eq!(html.matches("<ul>").count(), 1);
    assert!(html.ends_with("\n<li>two</li>"));
}

#[test]
fn test_every_run_option_wraps_all_bullet_runs() {
    let format = MarkdownFormat::with_list_wrap(ListWrap::EveryRun);
    let html = format.render("- one\n\nBetween\n\n- two");
    assert_eq!(html.matches("<ul>").count(), 2);
}

#[test]
fn test_bold_does_not_span_lines() {
    // Each unpaired `**` is read by the italic pass as an empty emphasis span.
    assert_eq!(
        convert("**open\nclose**"),
        "<p><em></em>open</p>\n<p>close<em></em></p>"
    );
}
