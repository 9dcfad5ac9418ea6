//! YAML document tree.
//!
//! An owned tree of [`Node`]s built from parser events. Mappings keep their
//! insertion order and use plain string keys, so a key such as `db.host` is
//! just a key that happens to contain a dot. Scalars keep the text and style
//! they were written with, so re-serialization does not alter untouched
//! values.
//!
//! Parsing lives in [`parse`], serialization in [`emit`], indentation
//! detection in [`indent`].

pub mod emit;
pub mod indent;
mod parse;
mod resolve;

use crate::error::DocumentError;

pub use emit::to_yaml;
pub use indent::{detect_indent, DEFAULT_INDENT};
pub use parse::parse;

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Mapping(Mapping),
    Scalar(Scalar),
    Sequence(Vec<Node>),
}

impl Node {
    /// Human-readable kind, used in previews and error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Mapping(_) => "mapping",
            Node::Sequence(_) => "sequence",
            Node::Scalar(s) => s.kind.name(),
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Node::Mapping(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Node::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Convert to JSON, resolving scalar kinds to JSON types.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Node::Mapping(m) => serde_json::Value::Object(
                m.iter().map(|(k, v)| (k.to_string(), v.to_json())).collect(),
            ),
            Node::Sequence(items) => {
                serde_json::Value::Array(items.iter().map(Node::to_json).collect())
            }
            Node::Scalar(s) => s.to_json(),
        }
    }
}

impl From<Mapping> for Node {
    fn from(m: Mapping) -> Self {
        Node::Mapping(m)
    }
}

impl From<Scalar> for Node {
    fn from(s: Scalar) -> Self {
        Node::Scalar(s)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    key: String,
    style: Style,
    value: Node,
}

/// Ordered mapping with unique string keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mapping {
    entries: Vec<Entry>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|e| (e.key.as_str(), &e.value))
    }

    /// Keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.iter().find(|e| e.key == key).map(|e| &e.value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.entries
            .iter_mut()
            .find(|e| e.key == key)
            .map(|e| &mut e.value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Set `key` to `value`.
    ///
    /// An existing entry keeps its position and key style; a new key is
    /// appended. Returns the previous value if there was one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Node>) -> Option<Node> {
        let key = key.into();
        let value = value.into();
        match self.get_mut(&key) {
            Some(slot) => Some(std::mem::replace(slot, value)),
            None => {
                self.push_styled(key, Style::Plain, value);
                None
            }
        }
    }

    fn push_styled(&mut self, key: String, style: Style, value: Node) {
        self.entries.push(Entry { key, style, value });
    }
}

impl<K: Into<String>, V: Into<Node>> FromIterator<(K, V)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Mapping::new();
        for (k, v) in iter {
            mapping.insert(k, v);
        }
        mapping
    }
}

/// Resolved type of a scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Str,
    Int,
    Float,
    Bool,
    Null,
}

impl ScalarKind {
    pub fn name(self) -> &'static str {
        match self {
            ScalarKind::Str => "string",
            ScalarKind::Int => "int",
            ScalarKind::Float => "float",
            ScalarKind::Bool => "bool",
            ScalarKind::Null => "null",
        }
    }
}

/// How a scalar is written in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    SingleQuoted,
    DoubleQuoted,
    Literal,
    Folded,
}

/// A leaf value, kept as text.
#[derive(Debug, Clone, PartialEq)]
pub struct Scalar {
    text: String,
    kind: ScalarKind,
    style: Style,
    tag: Option<String>,
}

impl Scalar {
    /// A string scalar, plain unless it would read back as something else.
    pub fn string(text: impl Into<String>) -> Self {
        let text = text.into();
        let plain = !emit::needs_syntax_quotes(&text)
            && resolve::resolve_plain(&text) == ScalarKind::Str;
        Self {
            text,
            kind: ScalarKind::Str,
            style: if plain { Style::Plain } else { Style::DoubleQuoted },
            tag: None,
        }
    }

    pub fn null() -> Self {
        Self {
            text: "null".to_string(),
            kind: ScalarKind::Null,
            style: Style::Plain,
            tag: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> ScalarKind {
        self.kind
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn is_null(&self) -> bool {
        self.kind == ScalarKind::Null
    }

    fn to_json(&self) -> serde_json::Value {
        use serde_json::Value as Json;
        let text = || Json::String(self.text.clone());
        match self.kind {
            ScalarKind::Null => Json::Null,
            ScalarKind::Bool => Json::Bool(self.text.eq_ignore_ascii_case("true")),
            ScalarKind::Int => resolve::int_value(&self.text).map_or_else(text, Json::from),
            ScalarKind::Float => self
                .text
                .parse::<f64>()
                .ok()
                .and_then(serde_json::Number::from_f64)
                .map_or_else(text, Json::Number),
            ScalarKind::Str => text(),
        }
    }
}

/// Require the document root to be a mapping.
pub fn into_mapping(node: Node) -> Result<Mapping, DocumentError> {
    match node {
        Node::Mapping(m) => Ok(m),
        other => Err(DocumentError::NotAMapping {
            found: other.kind_name(),
        }),
    }
}
