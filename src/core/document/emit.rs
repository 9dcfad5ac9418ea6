//! Block-style YAML serialization with a configurable indent width.

use super::{Mapping, Node, Scalar, Style};

/// Serialize a document tree as block-style YAML.
///
/// Nested mappings and sequences are indented by `indent` spaces per level.
/// Sequence items that are themselves collections start on the `- ` line.
/// Scalars are written in the style they were parsed with.
pub fn to_yaml(node: &Node, indent: usize) -> String {
    let mut emitter = Emitter {
        out: String::new(),
        indent: indent.max(1),
    };
    match node {
        Node::Mapping(m) if m.is_empty() => emitter.out.push_str("{}\n"),
        Node::Sequence(items) if items.is_empty() => emitter.out.push_str("[]\n"),
        Node::Mapping(m) => emitter.mapping(m, 0, false),
        Node::Sequence(items) => emitter.sequence(items, 0, false),
        Node::Scalar(s) => {
            emitter.scalar(s, 0);
            if emitter.out.starts_with(' ') {
                emitter.out.remove(0);
            }
        }
    }
    emitter.out
}

struct Emitter {
    out: String,
    indent: usize,
}

impl Emitter {
    fn pad(&mut self, col: usize) {
        self.out.extend(std::iter::repeat(' ').take(col));
    }

    /// Write mapping entries at column `col`. With `inline`, the first entry
    /// continues the current line (after a `- `).
    fn mapping(&mut self, map: &Mapping, col: usize, mut inline: bool) {
        for entry in &map.entries {
            if inline {
                inline = false;
            } else {
                self.pad(col);
            }
            self.key(&entry.key, entry.style);
            self.out.push(':');
            self.value(&entry.value, col, false);
        }
    }

    fn sequence(&mut self, items: &[Node], col: usize, mut inline: bool) {
        for item in items {
            if inline {
                inline = false;
            } else {
                self.pad(col);
            }
            self.out.push('-');
            self.value(item, col, true);
        }
    }

    /// Write the remainder of a line ending in `:` or `-` at column `col`.
    ///
    /// Collections under a sequence item start on the item line, two
    /// columns in; under a mapping key they start on the next line.
    fn value(&mut self, node: &Node, col: usize, in_sequence: bool) {
        match node {
            Node::Scalar(s) => self.scalar(s, col),
            Node::Mapping(m) if m.is_empty() => self.out.push_str(" {}\n"),
            Node::Sequence(items) if items.is_empty() => self.out.push_str(" []\n"),
            Node::Mapping(m) if in_sequence => {
                self.out.push(' ');
                self.mapping(m, col + 2, true);
            }
            Node::Sequence(items) if in_sequence => {
                self.out.push(' ');
                self.sequence(items, col + 2, true);
            }
            Node::Mapping(m) => {
                self.out.push('\n');
                self.mapping(m, col + self.indent, false);
            }
            Node::Sequence(items) => {
                self.out.push('\n');
                self.sequence(items, col + self.indent, false);
            }
        }
    }

    fn key(&mut self, key: &str, style: Style) {
        match style {
            Style::Plain if !needs_syntax_quotes(key) => self.out.push_str(key),
            Style::SingleQuoted if !key.contains('\n') => self.out.push_str(&single_quote(key)),
            _ => self.out.push_str(&double_quote(key)),
        }
    }

    /// Write a scalar value, including its leading space and the line end.
    fn scalar(&mut self, scalar: &Scalar, col: usize) {
        if let Some(tag) = scalar.tag() {
            self.out.push(' ');
            self.out.push_str(tag);
        }
        let text = scalar.text();
        match scalar.style() {
            Style::Plain if text.is_empty() => {}
            Style::Plain if !text.contains('\n') && !needs_syntax_quotes(text) => {
                self.out.push(' ');
                self.out.push_str(text);
            }
            Style::SingleQuoted if !text.contains('\n') => {
                self.out.push(' ');
                self.out.push_str(&single_quote(text));
            }
            Style::Literal if !text.trim_end_matches('\n').is_empty() => {
                return self.block(text, col, false);
            }
            Style::Folded if !text.trim_end_matches('\n').is_empty() => {
                return self.block(text, col, foldable(text));
            }
            _ => {
                self.out.push(' ');
                self.out.push_str(&double_quote(text));
            }
        }
        self.out.push('\n');
    }

    /// Write a literal (`|`) or folded (`>`) block scalar whose content
    /// starts at `col + indent`.
    fn block(&mut self, text: &str, col: usize, folded: bool) {
        let body = text.trim_end_matches('\n');
        let trailing = text.len() - body.len();
        let content = col + self.indent;

        self.out.push_str(if folded { " >" } else { " |" });
        if body.trim_start_matches('\n').starts_with(' ') {
            self.out.push_str(&self.indent.min(9).to_string());
        }
        match trailing {
            0 => self.out.push('-'),
            1 => {}
            _ => self.out.push('+'),
        }
        self.out.push('\n');

        for (i, line) in body.split('\n').enumerate() {
            // a folded line break is written as an empty line
            if folded && i > 0 {
                self.out.push('\n');
            }
            if !line.is_empty() {
                self.pad(content);
                self.out.push_str(line);
            }
            if !folded || !line.is_empty() {
                self.out.push('\n');
            }
        }
        for _ in 1..trailing {
            self.out.push('\n');
        }
    }
}

/// Whether folded text can be written back without changing its content.
fn foldable(text: &str) -> bool {
    let mut lines = text.trim_end_matches('\n').split('\n');
    let first_ok = lines.next().is_some_and(|l| !l.is_empty());
    first_ok
        && text
            .split('\n')
            .all(|l| !l.starts_with([' ', '\t']) && !l.ends_with([' ', '\t']))
}

/// Whether a plain scalar would be misparsed or break the block structure.
pub(super) fn needs_syntax_quotes(s: &str) -> bool {
    let Some(first) = s.chars().next() else {
        return true;
    };
    if s.trim() != s || s.starts_with("---") || s.starts_with("...") {
        return true;
    }
    if s.chars().any(|c| c.is_control()) {
        return true;
    }
    if s.contains(": ") || s.contains(" #") || s.ends_with(':') {
        return true;
    }
    match first {
        '-' | '?' | ':' => s.len() == 1 || s[1..].starts_with(' '),
        ',' | '[' | ']' | '{' | '}' | '#' | '&' | '*' | '!' | '|' | '>' | '\'' | '"' | '%'
        | '@' | '`' => true,
        _ => false,
    }
}

fn single_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

fn double_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
