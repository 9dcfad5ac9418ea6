//! Error types.
//!
//! Errors are grouped by concern and wrapped by the top-level [`Error`].

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Decrypt(#[from] DecryptError),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Missing or invalid configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Vault address required (--vault-addr or VAULT_ADDR)")]
    MissingAddress,

    #[error("Vault token required (--vault-token or VAULT_TOKEN)")]
    MissingToken,

    #[error("invalid {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Failures of the external decryption tool.
#[derive(Error, Debug)]
pub enum DecryptError {
    #[error("{0} not found on PATH")]
    ToolNotFound(String),

    #[error("failed to decrypt {path}: {reason}")]
    Failed { path: PathBuf, reason: String },

    #[error("decrypted content of {0} is not valid UTF-8")]
    InvalidUtf8(PathBuf),
}

/// Reading, parsing or writing a YAML document.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing YAML: {0}")]
    Parse(String),

    #[error("expected a single YAML document")]
    MultipleDocuments,

    #[error("duplicate mapping key {0:?}")]
    DuplicateKey(String),

    #[error("unsupported {found} used as a mapping key")]
    UnsupportedKey { found: &'static str },

    #[error("expected YAML mapping at root, got {found}")]
    NotAMapping { found: &'static str },

    #[error("{0} is not valid UTF-8")]
    InvalidUtf8(PathBuf),

    #[error("writing {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Secret store write failures.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to create vault client: {0}")]
    Client(String),

    #[error("failed to write to vault path {path}: {reason}")]
    Request { path: String, reason: String },

    #[error("vault rejected write to {path}: {status} {body}")]
    Rejected {
        path: String,
        status: u16,
        body: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
