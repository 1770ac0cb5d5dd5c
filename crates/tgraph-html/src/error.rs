//! Error types for HTML to node tree conversion.

/// Error raised while converting markup to a node tree.
///
/// The first violation aborts the whole conversion; there is no partial
/// output. Callers should match on variants and their fields, never on
/// rendered messages.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    /// A tag outside the Telegraph allow-list was encountered.
    #[error("{tag} tag is not allowed")]
    NotAllowedTag {
        /// The offending tag name.
        tag: String,
    },

    /// The markup nesting is malformed.
    #[error(transparent)]
    InvalidHtml(#[from] InvalidHtml),

    /// Low-level markup reader error.
    #[error("markup reader error")]
    Xml(#[from] quick_xml::Error),

    /// Encoding error while decoding reader output.
    #[error("encoding error")]
    Encoding(#[from] quick_xml::encoding::EncodingError),

    /// Malformed attribute list on a start tag.
    #[error("attribute error")]
    Attr(#[from] quick_xml::events::attributes::AttrError),
}

/// Nesting violation detected by the tree builder.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum InvalidHtml {
    /// A closing tag arrived with no element open.
    #[error("\"{found}\" missing start tag")]
    MissingStartTag {
        /// The closing tag that had no matching open element.
        found: String,
    },

    /// A closing tag did not match the innermost open element,
    /// e.g. `<b><i></b></i>`.
    #[error("expected \"{expected}\" closing tag, found \"{found}\"")]
    MismatchedTag {
        /// Tag of the innermost open element.
        expected: String,
        /// The closing tag actually seen.
        found: String,
    },

    /// The stream ended while an element was still open.
    #[error("\"{tag}\" tag is never closed")]
    UnclosedTag {
        /// Tag of the innermost element left open.
        tag: String,
    },
}
