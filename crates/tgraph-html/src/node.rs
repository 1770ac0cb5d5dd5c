//! Node tree model for Telegraph page content.
//!
//! A document is an ordered forest of [`Node`] entries, not a single rooted
//! tree: the API wraps an article body with no enclosing root element. The
//! model serializes losslessly to the wire format the API exchanges: a
//! top-level JSON array mixing strings and `{tag, attrs?, children?}`
//! objects.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One entry in a content tree: a text run or a markup element.
///
/// Adjacent text entries under the same parent are always merged by the
/// builder, and a text entry is never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// Plain text run.
    Text(String),
    /// Markup element.
    Element(NodeElement),
}

impl From<NodeElement> for Node {
    fn from(element: NodeElement) -> Self {
        Self::Element(element)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

/// A markup element.
///
/// `attrs` and `children` are omitted from JSON when `None`, which keeps
/// `<br>` (void, never has children), `<p></p>` (non-void but empty, field
/// dropped) and `<p>x</p>` (field present) distinguishable on the wire. The
/// builder never attaches a children list to a void element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeElement {
    /// Tag name. The builder only ever produces allow-listed tags.
    pub tag: String,

    /// Attributes in source order; absent when the element had none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Attrs>,

    /// Child entries; absent when the element has no content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,
}

impl NodeElement {
    /// Create an element with no attributes or children.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: None,
            children: None,
        }
    }

    /// Attach attributes; an empty map is normalized to the absent field.
    #[must_use]
    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = if attrs.is_empty() { None } else { Some(attrs) };
        self
    }

    /// Attach children.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = Some(children);
        self
    }
}

/// Attribute map preserving insertion order.
///
/// Serializes to a JSON object whose keys keep source order, which is what
/// makes markup serialization deterministic. Names are unique; inserting an
/// existing name replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs(Vec<(String, String)>);

impl Attrs {
    /// Create an empty attribute map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attribute, replacing any existing value for the name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.0.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.0.push((name, value));
        }
    }

    /// Look up an attribute value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for Attrs {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (name, value) in iter {
            attrs.insert(name, value);
        }
        attrs
    }
}

impl Serialize for Attrs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Attrs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AttrsVisitor;

        impl<'de> Visitor<'de> for AttrsVisitor {
            type Value = Attrs;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of attribute names to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut attrs = Attrs::new();
                while let Some((name, value)) = access.next_entry::<String, String>()? {
                    attrs.insert(name, value);
                }
                Ok(attrs)
            }
        }

        deserializer.deserialize_map(AttrsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_void_element_serializes_without_children() {
        let node = Node::Element(NodeElement::new("br"));
        assert_eq!(serde_json::to_string(&node).unwrap(), r#"{"tag":"br"}"#);
    }

    #[test]
    fn test_empty_element_omits_children_field() {
        let json = serde_json::to_string(&NodeElement::new("p")).unwrap();
        assert_eq!(json, r#"{"tag":"p"}"#);
    }

    #[test]
    fn test_element_with_text_child() {
        let node = NodeElement::new("p").with_children(vec!["Hello".into()]);
        assert_eq!(
            serde_json::to_string(&node).unwrap(),
            r#"{"tag":"p","children":["Hello"]}"#
        );
    }

    #[test]
    fn test_attrs_preserve_insertion_order() {
        let mut attrs = Attrs::new();
        attrs.insert("src", "/file/x.png");
        attrs.insert("width", "640");
        attrs.insert("alt", "diagram");
        let node = NodeElement::new("img").with_attrs(attrs);
        assert_eq!(
            serde_json::to_string(&node).unwrap(),
            r#"{"tag":"img","attrs":{"src":"/file/x.png","width":"640","alt":"diagram"}}"#
        );
    }

    #[test]
    fn test_attrs_insert_replaces_existing_name() {
        let mut attrs = Attrs::new();
        attrs.insert("href", "a");
        attrs.insert("href", "b");
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.get("href"), Some("b"));
    }

    #[test]
    fn test_empty_attrs_normalized_to_absent() {
        let node = NodeElement::new("p").with_attrs(Attrs::new());
        assert_eq!(node.attrs, None);
    }

    #[test]
    fn test_document_round_trips_through_json() {
        let doc = vec![
            Node::Element(
                NodeElement::new("p").with_children(vec![
                    "Hello, world!".into(),
                    NodeElement::new("br").into(),
                ]),
            ),
            Node::Text("tail".to_owned()),
        ];
        let json = serde_json::to_string(&doc).unwrap();
        assert_eq!(
            json,
            r#"[{"tag":"p","children":["Hello, world!",{"tag":"br"}]},"tail"]"#
        );
        let back: Vec<Node> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_deserialize_from_api_payload() {
        let json = r#"[{"tag":"a","attrs":{"href":"https://telegra.ph/","target":"_blank"},"children":["link"]}]"#;
        let doc: Vec<Node> = serde_json::from_str(json).unwrap();
        let Node::Element(el) = &doc[0] else {
            panic!("expected element");
        };
        assert_eq!(el.tag, "a");
        let attrs = el.attrs.as_ref().unwrap();
        assert_eq!(
            attrs.iter().collect::<Vec<_>>(),
            vec![("href", "https://telegra.ph/"), ("target", "_blank")]
        );
    }
}
