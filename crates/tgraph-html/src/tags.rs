//! Static tag policy tables.
//!
//! Three constant sets drive the converter: the tags Telegraph accepts, the
//! void elements that can never hold content, and the block-level elements
//! that act as hard boundaries for whitespace collapsing. All three are
//! sorted so membership is a binary search over a compile-time slice.

/// Tags accepted by the Telegraph API.
pub const ALLOWED_TAGS: &[&str] = &[
    "a", "aside", "b", "blockquote", "br", "code", "em", "figcaption", "figure", "h3", "h4", "hr",
    "i", "iframe", "img", "li", "ol", "p", "pre", "s", "strong", "u", "ul", "video",
];

/// Elements that cannot hold content and have no closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "keygen", "link", "menuitem",
    "meta", "param", "source", "track", "wbr",
];

/// Block-level elements.
///
/// Deliberately a superset of [`ALLOWED_TAGS`]: a block tag resets the
/// whitespace-collapsing state even when the tag itself is rejected later,
/// and the source tokenizer's vocabulary is wider than Telegraph's.
pub const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "canvas", "dd", "div", "dl", "dt", "fieldset",
    "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header",
    "hgroup", "hr", "li", "main", "nav", "noscript", "ol", "output", "p", "pre", "section",
    "table", "tfoot", "ul", "video",
];

/// Whether the tag is accepted by Telegraph.
#[must_use]
pub fn is_allowed(tag: &str) -> bool {
    ALLOWED_TAGS.binary_search(&tag).is_ok()
}

/// Whether the tag is a void element.
#[must_use]
pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.binary_search(&tag).is_ok()
}

/// Whether the tag is block-level.
#[must_use]
pub fn is_block(tag: &str) -> bool {
    BLOCK_ELEMENTS.binary_search(&tag).is_ok()
}
