//! Build a document tree from `saphyr_parser` events.
//!
//! Scalars keep the text and presentation style they were written with.
//! Anchored nodes are remembered so that aliases expand to a copy.

use std::collections::HashMap;

use saphyr_parser::{Event, Parser, ScalarStyle, ScanError, Span};
use tracing::debug;

use super::resolve::resolve_plain;
use super::{Mapping, Node, Scalar, ScalarKind, Style};
use crate::error::DocumentError;

const CORE_TAG_PREFIX: &str = "tag:yaml.org,2002:";

/// Parse YAML text into a document tree.
///
/// An empty stream parses to a null scalar. Only single-document streams
/// are accepted.
pub fn parse(text: &str) -> Result<Node, DocumentError> {
    let mut builder = Builder {
        events: Parser::new_from_str(text),
        anchors: HashMap::new(),
    };
    builder.stream()
}

struct Builder<I> {
    events: I,
    anchors: HashMap<usize, Node>,
}

impl<'a, I> Builder<I>
where
    I: Iterator<Item = Result<(Event<'a>, Span), ScanError>>,
{
    fn next(&mut self) -> Result<Event<'a>, DocumentError> {
        match self.events.next() {
            Some(Ok((event, _))) => Ok(event),
            Some(Err(e)) => Err(DocumentError::Parse(e.to_string())),
            None => Err(DocumentError::Parse("unexpected end of input".to_string())),
        }
    }

    fn stream(&mut self) -> Result<Node, DocumentError> {
        let root = loop {
            match self.next()? {
                Event::DocumentStart(..) => {
                    let event = self.next()?;
                    break self.node(event)?;
                }
                Event::StreamEnd => return Ok(Node::Scalar(Scalar::null())),
                _ => {}
            }
        };

        loop {
            match self.next()? {
                Event::DocumentEnd | Event::Nothing => {}
                Event::StreamEnd => return Ok(root),
                Event::DocumentStart(..) => return Err(DocumentError::MultipleDocuments),
                other => return Err(unexpected(&other)),
            }
        }
    }

    fn node(&mut self, event: Event<'a>) -> Result<Node, DocumentError> {
        match event {
            Event::Scalar(value, style, anchor, tag) => {
                let tag = tag.as_ref().map(|t| tag_text(&t.handle, &t.suffix));
                let node = Node::Scalar(scalar(String::from(value), style, tag));
                Ok(self.remember(anchor, node))
            }
            Event::SequenceStart(anchor, tag) => {
                drop_collection_tag(tag.as_ref().map(|t| tag_text(&t.handle, &t.suffix)));
                let mut items = Vec::new();
                loop {
                    match self.next()? {
                        Event::SequenceEnd => break,
                        event => items.push(self.node(event)?),
                    }
                }
                Ok(self.remember(anchor, Node::Sequence(items)))
            }
            Event::MappingStart(anchor, tag) => {
                drop_collection_tag(tag.as_ref().map(|t| tag_text(&t.handle, &t.suffix)));
                let mut map = Mapping::new();
                loop {
                    let (key, style) = match self.next()? {
                        Event::MappingEnd => break,
                        event => self.key(event)?,
                    };
                    let event = self.next()?;
                    let value = self.node(event)?;
                    if map.contains_key(&key) {
                        return Err(DocumentError::DuplicateKey(key));
                    }
                    map.push_styled(key, style, value);
                }
                Ok(self.remember(anchor, Node::Mapping(map)))
            }
            Event::Alias(id) => self
                .anchors
                .get(&id)
                .cloned()
                .ok_or_else(|| DocumentError::Parse(format!("unknown alias (anchor id {})", id))),
            other => Err(unexpected(&other)),
        }
    }

    fn key(&mut self, event: Event<'a>) -> Result<(String, Style), DocumentError> {
        match self.node(event)? {
            Node::Scalar(s) => Ok((s.text, s.style)),
            other => Err(DocumentError::UnsupportedKey {
                found: other.kind_name(),
            }),
        }
    }

    fn remember(&mut self, anchor: usize, node: Node) -> Node {
        // id 0 means the node carries no anchor
        if anchor != 0 {
            self.anchors.insert(anchor, node.clone());
        }
        node
    }
}

fn scalar(text: String, style: ScalarStyle, tag: Option<String>) -> Scalar {
    let style = match style {
        ScalarStyle::Plain => Style::Plain,
        ScalarStyle::SingleQuoted => Style::SingleQuoted,
        ScalarStyle::DoubleQuoted => Style::DoubleQuoted,
        ScalarStyle::Literal => Style::Literal,
        ScalarStyle::Folded => Style::Folded,
    };
    let kind = match tag.as_deref().and_then(|t| t.strip_prefix("!!")) {
        Some("str") => ScalarKind::Str,
        Some("int") => ScalarKind::Int,
        Some("float") => ScalarKind::Float,
        Some("bool") => ScalarKind::Bool,
        Some("null") => ScalarKind::Null,
        _ if style == Style::Plain => resolve_plain(&text),
        _ => ScalarKind::Str,
    };
    Scalar {
        text,
        kind,
        style,
        tag,
    }
}

/// Source form of a tag, with the core schema prefix shortened to `!!`.
fn tag_text(handle: &str, suffix: &str) -> String {
    match handle {
        CORE_TAG_PREFIX | "!!" => format!("!!{}", suffix),
        "" => format!("!<{}>", suffix),
        handle => format!("{}{}", handle, suffix),
    }
}

fn drop_collection_tag(tag: Option<String>) {
    if let Some(tag) = tag {
        debug!(%tag, "dropping tag on collection");
    }
}

fn unexpected(event: &Event<'_>) -> DocumentError {
    DocumentError::Parse(format!("unexpected event {:?}", event))
}
