//! Dry-run rendering.
//!
//! Secret values are never printed, only their kind and, for strings,
//! their length in characters.

use std::path::Path;

use crate::core::document::{Node, ScalarKind};
use crate::core::flatten::FlatMap;
use crate::core::location::SecretLocation;

/// Masked description of a value, e.g. `<string, 12 chars>` or `<int>`.
pub fn describe(value: &Node) -> String {
    match value {
        Node::Scalar(s) if s.kind() == ScalarKind::Str => {
            format!("<string, {} chars>", s.text().chars().count())
        }
        other => format!("<{}>", other.kind_name()),
    }
}

/// Preview of the store writes.
pub fn render_writes(location: &SecretLocation, secrets: &FlatMap) -> String {
    let mut lines = vec![
        format!("[dry-run] Would write to Vault path: {}", location.root()),
        format!("[dry-run] {} secrets:", secrets.len()),
    ];
    lines.extend(
        secrets
            .iter()
            .map(|(key, value)| format!("  {} = {}", key, describe(value))),
    );
    join_lines(lines)
}

/// Preview of the companion update.
///
/// Only references are listed, they contain no secret material.
pub fn render_companion(
    path: &Path,
    exists: bool,
    location: &SecretLocation,
    secrets: &FlatMap,
) -> String {
    if !exists {
        return format!(
            "[dry-run] Counterpart file {} does not exist, skipping\n",
            path.display()
        );
    }
    let mut lines = vec![format!(
        "[dry-run] Would update {} with vault references:",
        path.display()
    )];
    lines.extend(
        secrets
            .keys()
            .map(|key| format!("  {}: {}", key, location.reference(key))),
    );
    join_lines(lines)
}

fn join_lines(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
