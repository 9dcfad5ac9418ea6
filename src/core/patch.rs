//! Rewrite document values with vault references.
//!
//! A document can spell the same logical key as nested mappings
//! (`admin: {password: x}`) or as one flat key (`admin.password: x`), and
//! both styles can be mixed at different levels. For each dotted key the
//! patcher walks the document from the root and, at every level, tries in
//! order:
//!
//! 1. an entry whose key equals all remaining segments joined with `.`;
//! 2. an entry whose key equals the first remaining segment, replacing it if
//!    it is the last segment or descending if its value is a mapping;
//! 3. otherwise a new entry, flat if any sibling key contains a `.`,
//!    nested otherwise.
//!
//! The order matters on mixed documents. A key whose first segment matches a
//! non-mapping value is left untouched.

use tracing::{debug, trace};

use crate::core::document::{Mapping, Node, Scalar};
use crate::core::location;

/// What happened to a single key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// An existing value was overwritten.
    Replaced,
    /// A new entry was added.
    Appended,
    /// The path ran into a non-mapping value; nothing changed.
    Skipped,
}

/// Counts of per-key outcomes of a [`patch`] pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatchSummary {
    pub replaced: usize,
    pub appended: usize,
    pub skipped: usize,
}

impl PatchSummary {
    fn record(&mut self, outcome: Upsert) {
        match outcome {
            Upsert::Replaced => self.replaced += 1,
            Upsert::Appended => self.appended += 1,
            Upsert::Skipped => self.skipped += 1,
        }
    }
}

/// Point each dotted key in `root` at its reference under `storage_root`.
///
/// Keys are applied in the given order and later keys see earlier changes,
/// so two new keys sharing a parent end up in the same new mapping.
pub fn patch<S: AsRef<str>>(root: &mut Mapping, storage_root: &str, keys: &[S]) -> PatchSummary {
    let mut summary = PatchSummary::default();
    for key in keys {
        let key = key.as_ref();
        let value = location::reference(storage_root, key);
        let segments: Vec<&str> = key.split('.').collect();
        let outcome = upsert(root, &segments, &value);
        trace!(key, ?outcome, "patched key");
        if outcome == Upsert::Skipped {
            debug!(key, "path blocked by a non-mapping value, left unchanged");
        }
        summary.record(outcome);
    }
    summary
}

/// Set the value at `segments` below `map`, creating structure as needed.
pub fn upsert(map: &mut Mapping, segments: &[&str], value: &str) -> Upsert {
    let Some((first, rest)) = segments.split_first() else {
        return Upsert::Skipped;
    };

    let joined = segments.join(".");
    if let Some(slot) = map.get_mut(&joined) {
        *slot = reference_node(value);
        return Upsert::Replaced;
    }

    if let Some(slot) = map.get_mut(first) {
        if rest.is_empty() {
            *slot = reference_node(value);
            return Upsert::Replaced;
        }
        return match slot {
            Node::Mapping(child) => upsert(child, rest, value),
            _ => Upsert::Skipped,
        };
    }

    if has_flat_keys(map) {
        map.insert(joined, reference_node(value));
    } else {
        map.insert(*first, nested_chain(rest, value));
    }
    Upsert::Appended
}

/// Whether any key at this level contains a dot.
fn has_flat_keys(map: &Mapping) -> bool {
    map.keys().any(|k| k.contains('.'))
}

/// Build `{rest[0]: {rest[1]: ... value}}`, or the bare value when `rest` is empty.
fn nested_chain(rest: &[&str], value: &str) -> Node {
    rest.iter().rev().fold(reference_node(value), |child, segment| {
        let mut map = Mapping::new();
        map.insert(*segment, child);
        Node::Mapping(map)
    })
}

fn reference_node(value: &str) -> Node {
    Node::Scalar(Scalar::string(value))
}
