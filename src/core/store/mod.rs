//! Secret storage backends.
//!
//! ## Adding a New Storage Backend
//!
//! 1. Implement the `SecretStore` trait
//! 2. Add the implementation in a new file (e.g., `consul.rs`)
//! 3. Re-export from this module

use crate::core::document::Node;
use crate::error::Result;

mod vault;

pub use vault::{Vault, VaultCredentials};

/// Secret storage trait.
///
/// One call stores one value. Writes are independent: there is no batch
/// atomicity, a failure leaves earlier writes in place.
pub trait SecretStore {
    /// Store `value` at `path` (relative to the backend's mount).
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails.
    fn write(&self, path: &str, value: &str) -> Result<()>;
}

/// String form of a flattened value as stored in the backend.
///
/// Scalars use their text, null becomes an empty string, and collections
/// are encoded as JSON.
pub fn value_text(node: &Node) -> String {
    match node {
        Node::Scalar(s) if s.is_null() => String::new(),
        Node::Scalar(s) => s.text().to_string(),
        other => other.to_json().to_string(),
    }
}
