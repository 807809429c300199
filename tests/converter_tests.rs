// Properties of the rule-based text to HTML converter, through the public API.

use text_publisher::convert::{render_fragment, wrap_document};
use text_publisher::{convert_text_to_html, Document, DEFAULT_TITLE};

#[test]
fn test_single_doctype_for_any_input() {
    let inputs = [
        "",
        "plain",
        "<!DOCTYPE html>",
        "<html><body>hi</body></html>",
        "a < b > c & d",
        "- <li>x</li>\n- y",
    ];

    for input in inputs {
        let html = convert_text_to_html(input);
        assert_eq!(html.matches("<!DOCTYPE html>").count(), 1, "input: {input:?}");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>"));
    }
}

#[test]
fn test_user_markup_never_becomes_tags() {
    let html = convert_text_to_html("a < b > c\n\n<b>bold</b>");
    assert!(html.contains("<p>a &lt; b &gt; c</p>"));
    assert!(html.contains("<p>&lt;b&gt;bold&lt;/b&gt;</p>"));
    assert!(!html.contains("<b>"));
}

#[test]
fn test_empty_input_is_bare_shell() {
    assert_eq!(convert_text_to_html(""), wrap_document("", DEFAULT_TITLE));
}

#[test]
fn test_link_with_trailing_word() {
    let html = convert_text_to_html("Visit https://example.com now");
    assert!(html.contains(r#"<a href="https://example.com">https://example.com</a> now"#));
}

#[test]
fn test_no_relinkification_within_call() {
    let fragment = render_fragment("https://a.io https://b.io");
    assert_eq!(
        fragment,
        r#"<p><a href="https://a.io">https://a.io</a> <a href="https://b.io">https://b.io</a></p>"#
    );
}

#[test]
fn test_two_item_list_in_order() {
    let html = convert_text_to_html("- a\n- b");
    let start = html.find("<ul>").unwrap();
    let end = html.find("</ul>").unwrap();
    let list = &html[start..end];

    assert_eq!(list.matches("<li>").count(), 2);
    assert!(list.find("<li>a</li>").unwrap() < list.find("<li>b</li>").unwrap());
}

#[test]
fn test_single_block_paragraph_with_break() {
    let html = convert_text_to_html("line one\nline two");
    assert_eq!(html.matches("<p>").count(), 1);
    assert!(html.contains("<p>line one<br>line two</p>"));
}

#[test]
fn test_two_blocks_two_paragraphs() {
    let html = convert_text_to_html("A\n\nB");
    assert!(html.contains("<p>A</p>\n\n<p>B</p>"));
}

#[test]
fn test_sample_post() {
    let text = "Welcome to my blog post!\n\nHere's a list of features:\n- Automatic paragraph detection\n- GitHub integration\n\nVisit https://example.com for more.";

    assert_eq!(
        render_fragment(text),
        "<p>Welcome to my blog post!</p>\n\n\
         <ul>\n<li>Automatic paragraph detection</li>\n<li>GitHub integration</li>\n</ul>\n\n\
         <p>Visit <a href=\"https://example.com\">https://example.com</a> for more.</p>"
    );
}

#[test]
fn test_document_matches_function() {
    let doc = Document::convert("x");
    assert_eq!(doc.html_output, convert_text_to_html("x"));
}

#[test]
fn test_concurrent_calls_agree() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| convert_text_to_html("- a\n\nhttps://x.io")))
        .collect();

    let expected = convert_text_to_html("- a\n\nhttps://x.io");
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
