//! Decryption of secret files.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Decrypt` trait
//! 2. Add the implementation in a new file (e.g., `age.rs`)
//! 3. Re-export from this module

use std::path::Path;
use zeroize::Zeroizing;

use crate::error::Result;

mod sops;

pub use sops::Sops;

/// Turns an encrypted file into cleartext YAML.
pub trait Decrypt {
    /// Backend name for log output.
    fn name(&self) -> &'static str;

    /// Decrypt the file at `path`.
    ///
    /// The cleartext is wiped from memory when dropped.
    ///
    /// # Errors
    ///
    /// Returns `DecryptError` if the file cannot be decrypted.
    fn decrypt(&self, path: &Path) -> Result<Zeroizing<String>>;
}
