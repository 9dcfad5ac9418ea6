//! Flatten nested mappings into dotted keys.
//!
//! `{admin: {oauth2: {clientID: x}}}` becomes `{"admin.oauth2.clientID": x}`.

use std::collections::BTreeMap;

use crate::core::document::{Mapping, Node};

/// Flattened secrets keyed by dotted path.
///
/// A `BTreeMap`, so iteration is always in sorted key order.
pub type FlatMap = BTreeMap<String, Node>;

/// Flatten a mapping into dotted-path keys.
///
/// Only mapping values are descended into; scalars and sequences are leaves.
/// Empty nested mappings contribute nothing.
pub fn flatten(map: &Mapping) -> FlatMap {
    let mut out = FlatMap::new();
    flatten_into(map, None, &mut out);
    out
}

fn flatten_into(map: &Mapping, prefix: Option<&str>, out: &mut FlatMap) {
    for (key, value) in map.iter() {
        let path = match prefix {
            Some(prefix) => format!("{}.{}", prefix, key),
            None => key.to_string(),
        };
        match value {
            Node::Mapping(child) => flatten_into(child, Some(path.as_str()), out),
            leaf => {
                out.insert(path, leaf.clone());
            }
        }
    }
}
