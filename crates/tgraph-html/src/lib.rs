//! Restricted-HTML to Telegraph node tree conversion.
//!
//! Telegraph stores page content as a tree of nodes: a top-level JSON array
//! mixing text strings and `{tag, attrs?, children?}` objects. This crate
//! converts between that tree and the restricted HTML dialect the service
//! accepts, in both directions:
//!
//! - [`html_to_nodes`] tokenizes markup, validates every tag against the
//!   allow-list, rejects malformed nesting, and normalizes whitespace into
//!   canonical text runs.
//! - [`nodes_to_html`] walks a document back out to markup; it cannot fail
//!   on trees the builder produced.
//!
//! Canonical output is a fixed point: building the serialized form again
//! yields the same document.
//!
//! ```
//! use tgraph_html::{html_to_nodes, nodes_to_html};
//!
//! let nodes = html_to_nodes("<p>Hello,\n   <b>world</b>!</p>")?;
//! assert_eq!(nodes_to_html(&nodes), "<p>Hello, <b>world</b>!</p>");
//! # Ok::<(), tgraph_html::ParseError>(())
//! ```
//!
//! Both directions are pure, synchronous functions; independent documents
//! can be converted on separate threads without any shared state.

mod builder;
mod entities;
mod error;
mod node;
mod serializer;
mod tags;
mod token;

pub use builder::{NodeBuilder, html_to_nodes};
pub use error::{InvalidHtml, ParseError};
pub use node::{Attrs, Node, NodeElement};
pub use serializer::nodes_to_html;
pub use tags::{ALLOWED_TAGS, BLOCK_ELEMENTS, VOID_ELEMENTS, is_allowed, is_block, is_void};
pub use token::{Token, Tokenizer};

#[cfg(test)]
mod round_trip_tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const REFERENCE_HTML: &str = concat!(
        "<p>Hello, world!<br/></p>",
        "<p><a href=\"https://telegra.ph/\">Test link&lt;/a&gt;</a></p>",
        "<figure><img src=\"/file/6c2ecfdfd6881d37913fa.png\"/>",
        "<figcaption></figcaption></figure>",
    );

    #[test]
    fn test_reference_article_round_trips_byte_for_byte() {
        let nodes = html_to_nodes(REFERENCE_HTML).unwrap();
        assert_eq!(nodes_to_html(&nodes), REFERENCE_HTML);
    }

    #[test]
    fn test_canonical_form_is_a_fixed_point() {
        let inputs = [
            "<p>  Hello   <b>big </b> world </p>",
            "<p>a</p>\n<p>b</p>",
            "<pre>  keep   this  </pre>",
            "<p>a<br> b</p>",
            "<ul><li>one</li> <li>two</li></ul>",
        ];
        for input in inputs {
            let first = html_to_nodes(input).unwrap();
            let second = html_to_nodes(&nodes_to_html(&first)).unwrap();
            assert_eq!(second, first, "not a fixed point for {input:?}");
        }
    }

    #[test]
    fn test_no_stray_spaces_between_block_siblings() {
        let nodes = html_to_nodes("<blockquote>q</blockquote>\n\t<p>p</p>").unwrap();
        assert_eq!(nodes_to_html(&nodes), "<blockquote>q</blockquote><p>p</p>");
    }

    #[test]
    fn test_wire_format_matches_api_shape() {
        let nodes = html_to_nodes("<p>Hello, world!<br/></p>").unwrap();
        assert_eq!(
            serde_json::to_string(&nodes).unwrap(),
            r#"[{"tag":"p","children":["Hello, world!",{"tag":"br"}]}]"#
        );
    }

    #[test]
    fn test_document_from_api_json_serializes() {
        let json = r#"[{"tag":"p","children":["Hi ",{"tag":"a","attrs":{"href":"/x"},"children":["there"]}]}]"#;
        let nodes: Vec<Node> = serde_json::from_str(json).unwrap();
        assert_eq!(nodes_to_html(&nodes), r#"<p>Hi <a href="/x">there</a></p>"#);
    }
}
