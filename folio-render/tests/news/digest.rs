//! Digest rendering tests (news text → feed items)

use folio_render::format::Format;
use folio_render::formats::news::{
    parse, parse_with_layout, records, render_record, NewsFormat, NewsRecord, RecordLayout,
};
use insta::assert_snapshot;
use proptest::prelude::*;

#[test]
fn test_two_items_in_input_order() {
    let html = parse("2024-01-01\nHello\n\n2024-02-02\nWorld\n");

    assert_eq!(html.matches("<div class=\"feed-item\">").count(), 2);
    let first = html.find("2024-01-01").unwrap();
    let hello = html.find("Hello").unwrap();
    let second = html.find("2024-02-02").unwrap();
    let world = html.find("World").unwrap();
    assert!(first < hello && hello < second && second < world);
}

#[test]
fn test_empty_document() {
    assert_eq!(parse(""), "");
    assert_eq!(parse("\n\n  \n"), "");
}

#[test]
fn test_digest_markup() {
    assert_snapshot!(parse("2024-03-01\nNeue Website online\n\n2024-03-15\nVortrag beim Meetup\n").trim_end(), @r#"
<div class="feed-item">
    <span class="feed-date">2024-03-01</span>
    <p>Neue Website online</p>
</div>
<div class="feed-item">
    <span class="feed-date">2024-03-15</span>
    <p>Vortrag beim Meetup</p>
</div>
"#);
}

#[test]
fn test_dates_are_opaque() {
    let html = parse("sometime soon\nMaybe\n");
    assert!(html.contains("<span class=\"feed-date\">sometime soon</span>"));
}

#[test]
fn test_windows_line_endings() {
    let parsed = records("2024-01-01\r\nHello\r\n\r\n2024-02-02\r\nWorld\r\n");
    assert_eq!(
        parsed,
        vec![
            NewsRecord::new("2024-01-01", "Hello"),
            NewsRecord::new("2024-02-02", "World"),
        ]
    );
}

#[test]
fn test_trailing_date_without_title_is_dropped() {
    let html = parse("2024-01-01\nHello\n\n2024-02-02\n");
    assert_eq!(html.matches("feed-item").count(), 1);
}

#[test]
fn test_blocks_layout_handles_variable_length_entries() {
    let source = "2024-01-01\nA long\ntitle\n\n\n2024-02-02\nShort\n";
    let html = parse_with_layout(source, RecordLayout::BlankLineSeparated);

    assert!(html.contains("<p>A long title</p>"));
    assert!(html.contains("<p>Short</p>"));
}

#[test]
fn test_format_trait_renders_same_as_parse() {
    let source = "2024-01-01\nHello\n";
    assert_eq!(NewsFormat::default().render(source), parse(source));
}

#[test]
fn test_render_record_matches_parse_of_single_record() {
    let record = NewsRecord::new("2024-01-01", "Hello");
    assert_eq!(render_record(&record), parse("2024-01-01\nHello"));
}

proptest! {
    #[test]
    fn stride_records_round_out_in_order(
        entries in prop::collection::vec(("[0-9]{4}-[0-9]{2}-[0-9]{2}", "[A-Za-z][A-Za-z ]{0,20}"), 0..12)
    ) {
        let source: String = entries
            .iter()
            .map(|(date, title)| format!("{date}\n{title}\n\n"))
            .collect();

        let expected: Vec<NewsRecord> = entries
            .iter()
            .map(|(date, title)| NewsRecord::new(date.as_str(), title.trim()))
            .collect();

        prop_assert_eq!(records(&source), expected);
    }

    #[test]
    fn parse_accepts_any_input(source in any::<String>()) {
        let _ = parse(&source);
        let _ = parse_with_layout(&source, RecordLayout::BlankLineSeparated);
    }
}
