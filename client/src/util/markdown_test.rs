use super::*;

#[test]
fn renders_emphasis_and_lists() {
    let html = render_markdown_html("**Pegasus 41** is great:\n\n- light\n- fast");
    assert!(html.contains("<strong>Pegasus 41</strong>"));
    assert!(html.contains("<li>light</li>"));
}

#[test]
fn strips_raw_html() {
    let html = render_markdown_html("hello <script>alert(1)</script> <b>bold</b>");
    assert!(!html.contains("<script>"));
    assert!(!html.contains("<b>"));
    assert!(html.contains("hello"));
}

#[test]
fn strips_block_html() {
    let html = render_markdown_html("<div onclick=\"x()\">hi</div>\n\ntext");
    assert!(!html.contains("<div"));
    assert!(html.contains("<p>text</p>"));
}

#[test]
fn unterminated_fence_still_renders() {
    let html = render_markdown_html("```\nsize chart");
    assert!(html.contains("<code>"));
    assert!(html.contains("size chart"));
}

#[test]
fn plain_text_is_escaped() {
    let html = render_markdown_html("5 < 6 & 7");
    assert!(html.contains("5 &lt; 6 &amp; 7"));
}
