//! Integration tests for the HTML renderer.

use brick_html::tags::{a, body, br, button, div, head, input, p, span, strong, title};
use brick_html::{
    AttributeValue, DOCTYPE, Element, Node, RenderError, Renderer, document, element, fragment,
    raw, render, text, write_attribute,
};

/// Helper to render something that is expected to render
fn html<R: brick_html::Render + ?Sized>(item: &R) -> String {
    render(item).expect("render should succeed")
}

/// Helper to render a single attribute on its own
fn attribute(name: &str, value: impl Into<AttributeValue>) -> String {
    let mut out = String::new();
    write_attribute(&mut out, name, &value.into()).expect("attribute should render");
    out
}

// ========== basic elements ==========

#[test]
fn test_element_without_attrs() {
    let element = element("div").expect("valid tag").child("test");
    assert_eq!(html(&element), "<div>test</div>");
}

#[test]
fn test_element_with_attrs() {
    let element = div().attr("style", "test").expect("valid attribute").child("test");
    assert_eq!(html(&element), r#"<div style="test">test</div>"#);
}

#[test]
fn test_multiple_attributes_and_content() {
    let element = p()
        .attrs([("class_", "paragraph"), ("id", "my-id")])
        .expect("valid attributes")
        .child("This is a paragraph.");
    assert_eq!(
        html(&element),
        r#"<p class="paragraph" id="my-id">This is a paragraph.</p>"#
    );
}

#[test]
fn test_button_with_mixed_attributes() {
    let element = button()
        .attr("type_", "button")
        .and_then(|e| e.attr("disabled", true))
        .and_then(|e| e.attr("custom_data_value", "123"))
        .expect("valid attributes")
        .child("Click me");
    assert_eq!(
        html(&element),
        r#"<button type="button" disabled custom-data-value="123">Click me</button>"#
    );
}

#[test]
fn test_attribute_formatting() {
    let element = a()
        .attrs([("href", "https://example.com"), ("aria_label", "Link")])
        .expect("valid attributes")
        .child("Click me");
    assert_eq!(
        html(&element),
        r#"<a href="https://example.com" aria-label="Link">Click me</a>"#
    );
}

#[test]
fn test_nested_elements() {
    let container = div()
        .child(p().child("Paragraph 1"))
        .child(p().child("Paragraph 2"));
    assert_eq!(
        html(&container),
        "<div><p>Paragraph 1</p><p>Paragraph 2</p></div>"
    );
}

#[test]
fn test_nested_elements_with_raw_markup() {
    let element = div()
        .child(p().child("Paragraph 1"))
        .child(span().attr("class_", "highlight").expect("valid attribute").child("Nested Span"))
        .child(raw(r#"<a href="https://example.com">Link</a>"#))
        .child(div().child(strong().child("Nested Strong")));
    assert_eq!(
        html(&element),
        concat!(
            "<div>",
            "<p>Paragraph 1</p>",
            r#"<span class="highlight">Nested Span</span>"#,
            r#"<a href="https://example.com">Link</a>"#,
            "<div><strong>Nested Strong</strong></div>",
            "</div>",
        )
    );
}

// ========== empty elements ==========

#[test]
fn test_empty_element_is_start_tag_only() {
    assert_eq!(html(&br()), "<br>");
    assert_eq!(html(&div()), "<div>");
}

#[test]
fn test_empty_element_with_attributes() {
    let element = input()
        .attrs([("type_", "text"), ("placeholder", "Enter text")])
        .expect("valid attributes");
    assert_eq!(html(&element), r#"<input type="text" placeholder="Enter text">"#);
}

#[test]
fn test_child_that_renders_nothing_still_closes() {
    assert_eq!(html(&div().child(Node::Empty)), "<div></div>");
    assert_eq!(html(&div().child("")), "<div></div>");
}

// ========== escaping ==========

#[test]
fn test_text_is_escaped() {
    let element = p().child("a < b && c > d \"quoted\" 'single'");
    assert_eq!(
        html(&element),
        "<p>a &lt; b &amp;&amp; c &gt; d \"quoted\" 'single'</p>"
    );
}

#[test]
fn test_markup_in_text_is_not_injected() {
    let element = div().child("<script>alert(1)</script>");
    assert_eq!(
        html(&element),
        "<div>&lt;script&gt;alert(1)&lt;/script&gt;</div>"
    );
}

#[test]
fn test_raw_is_verbatim() {
    assert_eq!(html(&raw("<b>&amp;</b>")), "<b>&amp;</b>");
}

#[test]
fn test_attribute_value_is_escaped() {
    let element = div()
        .attr("title", r#""><script>x</script> & "#)
        .expect("valid attribute");
    assert_eq!(
        html(&element),
        r#"<div title="&quot;&gt;&lt;script&gt;x&lt;/script&gt; &amp; ">"#
    );
}

#[test]
fn test_existing_entities_are_escaped_once() {
    assert_eq!(attribute("title", "&quot;"), r#" title="&amp;quot;""#);
}

// ========== attribute values ==========

#[test]
fn test_boolean_attributes() {
    assert_eq!(attribute("disabled", true), " disabled");
    assert_eq!(attribute("disabled", false), "");
}

#[test]
fn test_null_and_empty_lists_are_omitted() {
    assert_eq!(attribute("title", None::<&str>), "");
    assert_eq!(attribute("class", Vec::<&str>::new()), "");
    assert_eq!(attribute("class", vec![None::<&str>, None]), "");
}

#[test]
fn test_empty_string_is_bare() {
    assert_eq!(attribute("value", ""), " value");
}

#[test]
fn test_integer_attribute() {
    assert_eq!(attribute("tabindex", -1), r#" tabindex="-1""#);
    assert_eq!(attribute("colspan", 2_u8), r#" colspan="2""#);
}

#[test]
fn test_list_attribute_is_space_joined() {
    assert_eq!(attribute("class", ["btn", "primary"]), r#" class="btn primary""#);
    assert_eq!(attribute("data-ids", [1, 2, 3]), r#" data-ids="1 2 3""#);
    assert_eq!(
        attribute("class", vec![Some("a"), None, Some("b<c")]),
        r#" class="a b&lt;c""#
    );
}

#[test]
fn test_omitted_attributes_leave_no_gaps() {
    let element = div()
        .attr("id", "x")
        .and_then(|e| e.attr("hidden", false))
        .and_then(|e| e.attr("title", None::<&str>))
        .and_then(|e| e.attr("data_n", 3))
        .expect("valid attributes")
        .child("y");
    assert_eq!(html(&element), r#"<div id="x" data-n="3">y</div>"#);
}

#[test]
fn test_bytes_attribute_fails_at_render_time() {
    let element = div()
        .attr("data_blob", AttributeValue::bytes(vec![0xde_u8, 0xad]))
        .expect("bytes are accepted while building");
    let err = render(&element).unwrap_err();
    assert_eq!(
        err,
        RenderError::UnsupportedAttributeType {
            name: "data-blob".to_string(),
            kind: "bytes",
        }
    );
    assert_eq!(
        err.to_string(),
        "cannot render bytes as value of html attribute `data-blob`"
    );
}

#[test]
fn test_nested_bytes_attribute_aborts_whole_render() {
    let inner = span()
        .attr("data_x", AttributeValue::bytes(b"x".as_slice()))
        .expect("bytes are accepted while building");
    let tree = div().child("before").child(inner).child("after");
    assert!(matches!(
        render(&tree),
        Err(RenderError::UnsupportedAttributeType { .. })
    ));
}

// ========== composition ==========

#[test]
fn test_extend_after_first_render() {
    let mut element = div().attr("id", "a").expect("valid attribute").child("one");
    assert_eq!(html(&element), r#"<div id="a">one</div>"#);

    let _ = element
        .extend(["two"], [("class_", "c"), ("id", "b")])
        .expect("valid attributes");
    assert_eq!(html(&element), r#"<div id="b" class="c">onetwo</div>"#);
}

#[test]
fn test_fragments_render_without_wrapper() {
    let node = fragment([p().child("A"), p().child("B")]);
    assert_eq!(html(&node), "<p>A</p><p>B</p>");
}

#[test]
fn test_nested_sequences_flatten() {
    let nested: Vec<Vec<Node>> = vec![
        vec![text("a"), Node::Empty],
        vec![],
        vec![fragment(["b", "c"]), raw("<hr>")],
    ];
    assert_eq!(html(&nested), "abc<hr>");
    assert_eq!(html(&Node::from(nested)), "abc<hr>");
}

#[test]
fn test_bare_scalars_render() {
    assert_eq!(html("x & y"), "x &amp; y");
    assert_eq!(html(&String::from("<")), "&lt;");
    assert_eq!(html(&42), "42");
    assert_eq!(html(&-7_i64), "-7");
    assert_eq!(html(&None::<Element>), "");
    assert_eq!(html(&Some("s")), "s");
    assert_eq!(html(&["a", "b"][..]), "ab");
}

#[test]
fn test_render_is_repeatable() {
    let tree = div()
        .attr("class_", ["a", "b"])
        .expect("valid attribute")
        .child(p().child("x < y"))
        .child(raw("<i>r</i>"));
    let first = html(&tree);
    let second = html(&tree);
    assert_eq!(first, second);
}

// ========== document root ==========

#[test]
fn test_default_document() {
    let output = html(&document(None, None, Vec::<Node>::new()));
    assert!(output.starts_with(DOCTYPE));
    assert_eq!(output, "<!DOCTYPE html><html><head><body></html>");
}

#[test]
fn test_document_with_sections() {
    let root = document(
        Some(head().child(title().child("Title"))),
        Some(body().child(p().child("Hello"))),
        Vec::<Node>::new(),
    )
    .attr("lang", "en")
    .expect("valid attribute");
    assert_eq!(
        html(&root),
        concat!(
            "<!DOCTYPE html>",
            r#"<html lang="en">"#,
            "<head><title>Title</title></head>",
            "<body><p>Hello</p></body>",
            "</html>",
        )
    );
}

#[test]
fn test_document_content_fills_default_body() {
    let root = document(None, None, [p().child("Hi")]);
    assert_eq!(
        html(&root),
        "<!DOCTYPE html><html><head><body><p>Hi</p></body></html>"
    );
}

#[test]
fn test_document_content_follows_given_body() {
    let root = document(
        None,
        Some(body().attr("class", "page").expect("valid attribute").child("A")),
        [Node::from(p().child("B")), text("C")],
    );
    assert_eq!(
        html(&root),
        r#"<!DOCTYPE html><html><head><body class="page">A<p>B</p>C</body></html>"#
    );
}

#[test]
fn test_doctype_only_for_document_root() {
    assert_eq!(html(&brick_html::tags::html()), "<html>");
}

// ========== renderer ==========

#[test]
fn test_renderer_accumulates_into_one_buffer() {
    let mut renderer = Renderer::with_capacity(64);
    renderer.write_text("a<");
    renderer.write_raw("<b>");
    renderer
        .write_node(&Node::from(p().child("c")))
        .expect("node should render");
    renderer.write_end_tag("b");
    assert_eq!(renderer.as_str(), "a&lt;<b><p>c</p></b>");
    assert_eq!(renderer.finish(), "a&lt;<b><p>c</p></b>");
}
