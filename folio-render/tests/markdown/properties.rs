//! Property tests for the Markdown converter.

use folio_render::formats::markdown::{convert, convert_with_options, ListWrap, MarkdownOptions};
use proptest::prelude::*;

/// A line built from plain words and correctly paired `**bold**` spans.
fn paired_bold_line() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-z]{1,8}",
            "[a-z]{1,8}".prop_map(|word| format!("**{word}**")),
        ],
        0..8,
    )
    .prop_map(|parts| parts.join(" "))
}

proptest! {
    #[test]
    fn convert_accepts_any_input(source in any::<String>()) {
        let _ = convert(&source);
        let _ = convert_with_options(&source, &MarkdownOptions { list_wrap: ListWrap::EveryRun });
    }

    #[test]
    fn paired_bold_markers_never_survive(lines in prop::collection::vec(paired_bold_line(), 1..6)) {
        let html = convert(&lines.join("\n"));
        prop_assert!(!html.contains("**"), "stray delimiter in {html:?}");
    }

    #[test]
    fn no_empty_paragraphs_in_output(source in "[a-z *_#\\-\n]{0,64}") {
        let html = convert(&source);
        prop_assert!(!html.contains("<p></p>"));
    }

    #[test]
    fn plain_lines_become_one_paragraph_each(words in prop::collection::vec("[a-z]{1,10}", 1..10)) {
        let html = convert(&words.join("\n"));
        prop_assert_eq!(html.matches("<p>").count(), words.len());
    }
}
