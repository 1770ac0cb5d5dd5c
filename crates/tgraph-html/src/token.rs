//! Lexical event stream over restricted HTML markup.
//!
//! The tree builder consumes exactly five event kinds; this module defines
//! them as [`Token`] and adapts `quick-xml`'s pull reader into that stream.
//! Nesting is deliberately not validated here: end-name checking is switched
//! off so that unmatched or mismatched closing tags flow through as plain
//! [`Token::EndTag`] events and the builder owns every structural check.

use std::borrow::Cow;
use std::collections::VecDeque;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::ParseError;

/// One lexical event from the markup front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Opening tag with its attributes in source order.
    StartTag {
        /// Lowercased tag name.
        name: String,
        /// Attribute name/value pairs in source order.
        attrs: Vec<(String, String)>,
    },
    /// Closing tag.
    EndTag {
        /// Lowercased tag name.
        name: String,
    },
    /// Text run between tags, entities not included.
    Text(String),
    /// Named entity reference, e.g. `nbsp` for `&nbsp;`.
    EntityRef(String),
    /// Numeric character reference, e.g. `&#8212;` or `&#x2014;`.
    CharRef(u32),
}

/// Tokenizer over a markup string.
///
/// Tag and attribute names are ASCII-lowercased (HTML names are
/// case-insensitive). Self-closing syntax expands to a start token followed
/// by an end token; comments, processing instructions and doctypes are
/// skipped; CDATA is routed as text.
pub struct Tokenizer<'a> {
    reader: Reader<&'a [u8]>,
    pending: VecDeque<Token>,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer over the given markup.
    #[must_use]
    pub fn new(html: &'a str) -> Self {
        let mut reader = Reader::from_reader(html.as_bytes());
        let config = reader.config_mut();
        // The builder detects and reports nesting faults itself.
        config.check_end_names = false;
        config.allow_unmatched_ends = true;
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn start_tag(&self, e: &BytesStart) -> Result<Token, ParseError> {
        let name = self.decode_name(e.name().as_ref());
        let mut attrs = Vec::new();
        for attr in e.attributes() {
            let attr = attr?;
            let key = self.decode_name(attr.key.as_ref());
            let value = attr.unescape_value().map_or_else(
                |_| String::from_utf8_lossy(&attr.value).into_owned(),
                Cow::into_owned,
            );
            attrs.push((key, value));
        }
        Ok(Token::StartTag { name, attrs })
    }

    fn decode_name(&self, raw: &[u8]) -> String {
        self.reader
            .decoder()
            .decode(raw)
            .map_or_else(
                |_| String::from_utf8_lossy(raw).into_owned(),
                Cow::into_owned,
            )
            .to_ascii_lowercase()
    }

    fn text(&self, raw: &[u8]) -> Result<Token, ParseError> {
        let text = self.reader.decoder().decode(raw)?.into_owned();
        Ok(Token::Text(text))
    }

    fn reference(&self, raw: &[u8]) -> Result<Token, ParseError> {
        let name = self.reader.decoder().decode(raw)?.into_owned();
        if let Some(digits) = name.strip_prefix('#') {
            let code = if let Some(hex) = digits.strip_prefix('x').or_else(|| digits.strip_prefix('X')) {
                u32::from_str_radix(hex, 16).ok()
            } else {
                digits.parse::<u32>().ok()
            };
            // Unparseable references fall back to the named path, which
            // preserves them as literal text.
            if let Some(code) = code {
                return Ok(Token::CharRef(code));
            }
        }
        Ok(Token::EntityRef(name))
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.pending.pop_front() {
            return Some(Ok(token));
        }
        loop {
            match self.reader.read_event() {
                Err(err) => return Some(Err(err.into())),
                Ok(Event::Start(e)) => return Some(self.start_tag(&e)),
                Ok(Event::Empty(e)) => {
                    let token = match self.start_tag(&e) {
                        Ok(token) => token,
                        Err(err) => return Some(Err(err)),
                    };
                    if let Token::StartTag { name, .. } = &token {
                        self.pending.push_back(Token::EndTag { name: name.clone() });
                    }
                    return Some(Ok(token));
                }
                Ok(Event::End(e)) => {
                    let name = self.decode_name(e.name().as_ref());
                    return Some(Ok(Token::EndTag { name }));
                }
                Ok(Event::Text(e)) => return Some(self.text(&e)),
                Ok(Event::CData(e)) => {
                    return Some(Ok(Token::Text(
                        String::from_utf8_lossy(&e).into_owned(),
                    )));
                }
                Ok(Event::GeneralRef(e)) => return Some(self.reference(&e)),
                Ok(Event::Eof) => return None,
                Ok(Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_)) => {}
            }
        }
    }
}
