//! Secret import pipeline.
//!
//! Decrypt → parse → flatten → write each key to the store.

use std::path::Path;
use tracing::debug;

use crate::core::decrypt::Decrypt;
use crate::core::document::{self, Mapping, Node};
use crate::core::flatten::{self, FlatMap};
use crate::core::location::SecretLocation;
use crate::core::store::{self, SecretStore};
use crate::error::Result;

/// Decrypt a secret file and flatten it into dotted keys.
///
/// An empty document yields no secrets.
///
/// # Errors
///
/// Returns `DecryptError` if decryption fails, or `DocumentError` if the
/// cleartext is not YAML with a mapping at the root.
pub fn load_secrets(decryptor: &dyn Decrypt, path: &Path) -> Result<FlatMap> {
    debug!(path = %path.display(), backend = decryptor.name(), "loading secrets");
    let cleartext = decryptor.decrypt(path)?;
    let root = match document::parse(&cleartext)? {
        Node::Scalar(s) if s.is_null() => Mapping::new(),
        node => document::into_mapping(node)?,
    };
    let secrets = flatten::flatten(&root);
    debug!(count = secrets.len(), "flattened secrets");
    Ok(secrets)
}

/// Write every secret under `location`, in sorted key order.
///
/// Stops at the first failed write. Secrets written before the failure stay
/// in the store.
///
/// # Returns
///
/// Number of secrets written.
///
/// # Errors
///
/// Returns the first `StoreError` encountered.
pub fn write_secrets(
    store: &dyn SecretStore,
    location: &SecretLocation,
    secrets: &FlatMap,
) -> Result<usize> {
    for (key, value) in secrets {
        let path = location.secret_path(key);
        store.write(&path, &store::value_text(value))?;
    }
    Ok(secrets.len())
}
