//! Tree builder: token stream to content nodes.
//!
//! Consumes the five-event token stream and produces the ordered forest the
//! API understands, enforcing the tag allow-list and rejecting malformed
//! nesting. Text is normalized on the way in: runs of whitespace collapse to
//! a single space, boundary spaces are dropped at block edges, and anything
//! inside `<pre>` is kept verbatim. All state is local to one build, so
//! independent documents can be converted concurrently without locking.

use crate::entities::entity_to_char;
use crate::error::{InvalidHtml, ParseError};
use crate::node::{Attrs, Node, NodeElement};
use crate::tags;
use crate::token::{Token, Tokenizer};

/// Convert restricted HTML markup into Telegraph content nodes.
///
/// Fails fast on the first violation; no partial document is returned.
///
/// # Errors
///
/// [`ParseError::NotAllowedTag`] for tags outside the allow-list,
/// [`ParseError::InvalidHtml`] for nesting faults, and reader variants for
/// markup the tokenizer itself cannot scan.
pub fn html_to_nodes(html: &str) -> Result<Vec<Node>, ParseError> {
    let mut builder = NodeBuilder::new();
    for token in Tokenizer::new(html) {
        builder.feed(token?)?;
    }
    builder.finish()
}

/// Streaming tree builder over [`Token`] events.
///
/// Feed every token of one complete stream, then call
/// [`NodeBuilder::finish`]. A builder that returned an error is spent.
#[derive(Debug, Default)]
pub struct NodeBuilder {
    /// Completed top-level entries.
    nodes: Vec<Node>,
    /// Currently open elements, innermost last; each owns the sibling list
    /// receiving new entries while it is the innermost frame.
    open: Vec<OpenElement>,
    /// Last text fragment emitted outside `<pre>`, for whitespace collapsing.
    last_text: Option<String>,
}

#[derive(Debug)]
struct OpenElement {
    tag: String,
    attrs: Option<Attrs>,
    children: Vec<Node>,
}

impl NodeBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one token.
    ///
    /// # Errors
    ///
    /// Fails on disallowed tags and on closing tags that do not match the
    /// innermost open element.
    pub fn feed(&mut self, token: Token) -> Result<(), ParseError> {
        match token {
            Token::StartTag { name, attrs } => self.start_tag(name, attrs),
            Token::EndTag { name } => self.end_tag(&name),
            Token::Text(text) => {
                self.text(&text);
                Ok(())
            }
            Token::EntityRef(name) => {
                match entity_to_char(&name) {
                    Some(ch) => self.text(&ch.to_string()),
                    // Unknown entity, keep it literally.
                    None => self.text(&format!("&{name};")),
                }
                Ok(())
            }
            Token::CharRef(code) => {
                match char::from_u32(code) {
                    Some(ch) => self.text(&ch.to_string()),
                    None => self.text(&format!("&#{code};")),
                }
                Ok(())
            }
        }
    }

    /// Signal end of stream and return the document.
    ///
    /// # Errors
    ///
    /// [`InvalidHtml::UnclosedTag`] if any element is still open.
    pub fn finish(self) -> Result<Vec<Node>, ParseError> {
        if let Some(open) = self.open.last() {
            return Err(InvalidHtml::UnclosedTag {
                tag: open.tag.clone(),
            }
            .into());
        }
        Ok(self.nodes)
    }

    fn start_tag(&mut self, name: String, attrs: Vec<(String, String)>) -> Result<(), ParseError> {
        if !tags::is_allowed(&name) {
            return Err(ParseError::NotAllowedTag { tag: name });
        }
        if tags::is_block(&name) {
            self.last_text = None;
        }

        let attrs = if attrs.is_empty() {
            None
        } else {
            Some(attrs.into_iter().collect::<Attrs>())
        };

        if tags::is_void(&name) {
            // Void elements take no content; nothing is opened for them.
            self.current_list().push(Node::Element(NodeElement {
                tag: name,
                attrs,
                children: None,
            }));
        } else {
            self.open.push(OpenElement {
                tag: name,
                attrs,
                children: Vec::new(),
            });
        }
        Ok(())
    }

    fn end_tag(&mut self, name: &str) -> Result<(), ParseError> {
        if tags::is_void(name) {
            // A void element has no matching close; tolerate one anyway.
            return Ok(());
        }
        let Some(open) = self.open.pop() else {
            return Err(InvalidHtml::MissingStartTag {
                found: name.to_owned(),
            }
            .into());
        };
        if open.tag != name {
            return Err(InvalidHtml::MismatchedTag {
                expected: open.tag,
                found: name.to_owned(),
            }
            .into());
        }
        if tags::is_block(name) {
            self.last_text = None;
        }
        let element = NodeElement {
            tag: open.tag,
            attrs: open.attrs,
            // An empty list is normalized to the absent field.
            children: if open.children.is_empty() {
                None
            } else {
                Some(open.children)
            },
        };
        self.current_list().push(Node::Element(element));
        Ok(())
    }

    fn text(&mut self, raw: &str) {
        if raw.is_empty() {
            return;
        }
        if self.in_pre() {
            self.append_text(raw);
            return;
        }

        let collapsed = collapse_whitespace(raw);
        let text = if self
            .last_text
            .as_deref()
            .is_none_or(|last| last.ends_with(' '))
        {
            collapsed.strip_prefix(' ').unwrap_or(&collapsed)
        } else {
            &collapsed
        };

        if text.is_empty() {
            self.last_text = None;
            return;
        }
        self.last_text = Some(text.to_owned());
        self.append_text(text);
    }

    /// Append text to the current list, merging with a trailing text entry.
    fn append_text(&mut self, text: &str) {
        let list = self.current_list();
        if let Some(Node::Text(last)) = list.last_mut() {
            last.push_str(text);
        } else {
            list.push(Node::Text(text.to_owned()));
        }
    }

    fn current_list(&mut self) -> &mut Vec<Node> {
        match self.open.last_mut() {
            Some(open) => &mut open.children,
            None => &mut self.nodes,
        }
    }

    /// Whitespace is preserved verbatim anywhere inside a `<pre>` element.
    fn in_pre(&self) -> bool {
        self.open.iter().any(|open| open.tag == "pre")
    }
}

/// Collapse every run of whitespace to a single space.
fn collapse_whitespace(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_run = false;
    for ch in input.chars() {
        if ch.is_whitespace() {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}
