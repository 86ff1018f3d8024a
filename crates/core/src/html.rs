//! HTML serializer: converts `Node` trees into escaped markup strings.

use folio_protocol::{Element, Node};

/// Elements that never carry children or a closing tag.
const VOID_TAGS: &[&str] = &["img", "br", "hr", "input", "meta", "link"];

/// Render a node as an HTML fragment.
///
/// Text and attribute values are escaped, so content strings are never
/// interpreted as markup.
pub fn to_html(node: &Node) -> String {
    let mut out = String::with_capacity(256);
    write_node(node, &mut out);
    out
}

pub fn element_to_html(element: &Element) -> String {
    let mut out = String::with_capacity(256);
    write_element(element, &mut out);
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&escape_html(text)),
        Node::Element(element) => write_element(element, out),
    }
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);
    if !element.classes.is_empty() {
        out.push_str(&format!(
            r#" class="{}""#,
            escape_html(&element.classes.join(" "))
        ));
    }
    for (name, value) in &element.attributes {
        out.push_str(&format!(r#" {name}="{}""#, escape_html(value)));
    }
    if !element.style.is_empty() {
        out.push_str(&format!(
            r#" style="{}""#,
            escape_html(&element.style_text())
        ));
    }
    out.push('>');

    if VOID_TAGS.contains(&element.tag.as_str()) {
        return;
    }
    for child in &element.children {
        write_node(child, out);
    }
    out.push_str(&format!("</{}>", element.tag));
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_output() {
        let el = Element::new("div")
            .class("timeline-item")
            .attr("role", "listitem")
            .style("transition-delay", "0.2s")
            .child(Element::new("h3").text("Title"));
        assert_eq!(
            element_to_html(&el),
            r#"<div class="timeline-item" role="listitem" style="transition-delay: 0.2s;"><h3>Title</h3></div>"#
        );
    }

    #[test]
    fn void_elements_do_not_close() {
        let el = Element::new("img").attr("src", "a.png");
        assert_eq!(element_to_html(&el), r#"<img src="a.png">"#);
    }

    #[test]
    fn escapes_entities() {
        let node = Node::Element(
            Element::new("p")
                .attr("title", r#"say "hi""#)
                .text("<script>alert('x')</script> & more"),
        );
        let html = to_html(&node);
        assert_eq!(
            html,
            r#"<p title="say &quot;hi&quot;">&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; more</p>"#
        );
    }
}
