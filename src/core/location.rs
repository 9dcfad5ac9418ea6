//! Secret storage locations and vault reference strings.

use crate::core::constants;

/// Build the reference string for a secret stored under `storage_root`.
///
/// `storage_root` already includes the mount and base path, e.g.
/// `secret/myapp`. Produces `ref+vault://secret/myapp/db.password#value`.
pub fn reference(storage_root: &str, dotted_key: &str) -> String {
    format!(
        "{}{}/{}#{}",
        constants::REFERENCE_SCHEME,
        storage_root,
        dotted_key,
        constants::VALUE_FIELD
    )
}

/// Where a batch of secrets is written: a KV mount plus a base path under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretLocation {
    mount: String,
    path: String,
}

impl SecretLocation {
    pub fn new(mount: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            mount: mount.into(),
            path: path.into(),
        }
    }

    pub fn mount(&self) -> &str {
        &self.mount
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// `mount/path`, the prefix used in reference strings.
    pub fn root(&self) -> String {
        format!("{}/{}", self.mount, self.path)
    }

    /// Path of a single secret relative to the mount.
    pub fn secret_path(&self, dotted_key: &str) -> String {
        format!("{}/{}", self.path, dotted_key)
    }

    pub fn reference(&self, dotted_key: &str) -> String {
        reference(&self.root(), dotted_key)
    }
}
