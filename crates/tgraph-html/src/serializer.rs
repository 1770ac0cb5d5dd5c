//! Canonical markup output for content node trees.

use crate::node::Node;
use crate::tags;

/// Serialize content nodes back to markup.
///
/// Total over any structurally valid document: the builder's construction
/// invariants (allow-listed tags only, void elements without children) are
/// what make re-checking unnecessary here. Walks iteratively with an
/// explicit frame stack, so nesting depth is bounded by memory rather than
/// the call stack.
#[must_use]
pub fn nodes_to_html(nodes: &[Node]) -> String {
    let mut out = String::with_capacity(4096);
    let mut stack: Vec<(&[Node], usize)> = Vec::new();
    let mut list = nodes;
    let mut index = 0;

    loop {
        if index < list.len() {
            match &list[index] {
                Node::Text(text) => escape_into(text, &mut out),
                Node::Element(element) => {
                    out.push('<');
                    out.push_str(&element.tag);
                    if let Some(attrs) = &element.attrs {
                        for (name, value) in attrs.iter() {
                            out.push(' ');
                            out.push_str(name);
                            out.push_str("=\"");
                            escape_into(value, &mut out);
                            out.push('"');
                        }
                    }
                    if tags::is_void(&element.tag) {
                        // Void elements self-close no matter what a caller
                        // managed to stuff into the children field.
                        out.push_str("/>");
                    } else if let Some(children) =
                        element.children.as_deref().filter(|c| !c.is_empty())
                    {
                        out.push('>');
                        stack.push((list, index));
                        list = children;
                        index = 0;
                        continue;
                    } else {
                        out.push_str("></");
                        out.push_str(&element.tag);
                        out.push('>');
                    }
                }
            }
            index += 1;
        } else {
            let Some((parent_list, parent_index)) = stack.pop() else {
                break;
            };
            if let Node::Element(element) = &parent_list[parent_index] {
                out.push_str("</");
                out.push_str(&element.tag);
                out.push('>');
            }
            list = parent_list;
            index = parent_index + 1;
        }
    }

    out
}

/// Escape markup-significant characters in text and attribute values.
fn escape_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::node::{Attrs, NodeElement};

    #[test]
    fn test_blank_document() {
        assert_eq!(nodes_to_html(&[]), "");
    }

    #[test]
    fn test_text_only_document() {
        assert_eq!(nodes_to_html(&["just text".into()]), "just text");
    }

    #[test]
    fn test_nested_empty_elements() {
        let doc = vec![Node::Element(NodeElement::new("a").with_children(vec![
            NodeElement::new("b")
                .with_children(vec![
                    NodeElement::new("c")
                        .with_children(vec![NodeElement::new("d").with_children(vec![]).into()])
                        .into(),
                ])
                .into(),
        ]))];
        assert_eq!(nodes_to_html(&doc), "<a><b><c><d></d></c></b></a>");
    }

    #[test]
    fn test_void_element_self_closes() {
        let doc = vec![Node::Element(NodeElement::new("p").with_children(vec![
            "Hello, world!".into(),
            NodeElement::new("br").into(),
        ]))];
        assert_eq!(nodes_to_html(&doc), "<p>Hello, world!<br/></p>");
    }

    #[test]
    fn test_void_element_with_stray_children_still_self_closes() {
        // The builder never produces this shape; the output stays void
        // regardless.
        let doc = vec![Node::Element(
            NodeElement::new("img").with_children(vec!["nope".into()]),
        )];
        assert_eq!(nodes_to_html(&doc), "<img/>");
    }

    #[test]
    fn test_attributes_in_stored_order() {
        let mut attrs = Attrs::new();
        attrs.insert("src", "/x.mp4");
        attrs.insert("preload", "auto");
        let doc = vec![Node::Element(NodeElement::new("video").with_attrs(attrs))];
        assert_eq!(
            nodes_to_html(&doc),
            r#"<video src="/x.mp4" preload="auto"></video>"#
        );
    }

    #[test]
    fn test_text_escaping() {
        let doc = vec![Node::Text("a < b & \"c\" > 'd'".to_owned())];
        assert_eq!(
            nodes_to_html(&doc),
            "a &lt; b &amp; &quot;c&quot; &gt; &#39;d&#39;"
        );
    }

    #[test]
    fn test_attribute_value_escaping() {
        let mut attrs = Attrs::new();
        attrs.insert("href", "/?a=1&b=\"2\"");
        let doc = vec![Node::Element(
            NodeElement::new("a")
                .with_attrs(attrs)
                .with_children(vec!["x".into()]),
        )];
        assert_eq!(
            nodes_to_html(&doc),
            r#"<a href="/?a=1&amp;b=&quot;2&quot;">x</a>"#
        );
    }

    #[test]
    fn test_deep_nesting_does_not_recurse() {
        // 10k levels would overflow a recursive serializer's call stack.
        let mut node: Node = "x".into();
        for _ in 0..10_000 {
            node = NodeElement::new("b").with_children(vec![node]).into();
        }
        let html = nodes_to_html(&[node]);
        assert!(html.starts_with("<b><b>"));
        assert!(html.ends_with("</b></b>"));
        assert_eq!(html.len(), 10_000 * 7 + 1);
    }
}
