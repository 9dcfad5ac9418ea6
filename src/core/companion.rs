//! Companion document handling.
//!
//! A secret file such as `app-secrets.enc.yaml` usually sits next to a plain
//! `app.yaml` holding placeholders for the same keys. After an import, those
//! placeholders are replaced with vault references.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::document::{self, Node};
use crate::core::patch;
use crate::error::{DocumentError, Result};

/// Clean name derived from a secret filename.
///
/// - `app-secrets.enc.yaml` -> `app`
/// - `myapp.sops.yaml` -> `myapp`
/// - `/path/to/config-secrets.yaml` -> `config`
pub fn clean_name(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if let Some(idx) = name.find(constants::SECRETS_MARKER) {
        return name[..idx].to_string();
    }
    match name.find('.') {
        Some(idx) => name[..idx].to_string(),
        None => name,
    }
}

/// Path of the companion document for a secret file, in the same directory.
pub fn companion_path(secret_file: &Path) -> PathBuf {
    let file = format!(
        "{}.{}",
        clean_name(secret_file),
        constants::COMPANION_EXTENSION
    );
    match secret_file.parent() {
        Some(dir) => dir.join(file),
        None => PathBuf::from(file),
    }
}

/// Replace the given keys in the companion document with vault references.
///
/// Returns `Ok(false)` without touching anything if the file does not exist.
/// The document is re-serialized with its original indentation; nothing is
/// written if it cannot be read or parsed.
///
/// # Errors
///
/// Returns `DocumentError` if the file cannot be read, parsed or written,
/// or if its root is not a mapping.
pub fn update<S: AsRef<str>>(path: &Path, storage_root: &str, keys: &[S]) -> Result<bool> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "companion file not found");
            return Ok(false);
        }
        Err(source) => {
            return Err(DocumentError::Read {
                path: path.to_path_buf(),
                source,
            }
            .into())
        }
    };
    let text =
        String::from_utf8(bytes).map_err(|_| DocumentError::InvalidUtf8(path.to_path_buf()))?;

    let indent = document::detect_indent(&text);
    let mut root = document::into_mapping(document::parse(&text)?)?;

    let summary = patch::patch(&mut root, storage_root, keys);
    debug!(
        path = %path.display(),
        indent,
        replaced = summary.replaced,
        appended = summary.appended,
        skipped = summary.skipped,
        "patched companion file"
    );

    let output = document::to_yaml(&Node::Mapping(root), indent);
    std::fs::write(path, output).map_err(|source| DocumentError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(true)
}
