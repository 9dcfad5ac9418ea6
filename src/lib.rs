//! vault-import - move SOPS-encrypted secrets into Vault.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── import        # The import command
//! │   ├── preview       # Masked dry-run rendering
//! │   └── output        # Console helpers
//! └── core/             # Core library components
//!     ├── config        # Flag/env resolution into Settings
//!     ├── document/     # YAML tree, event parser, emitter, indent detection
//!     ├── flatten       # Nested mapping -> dotted keys
//!     ├── patch         # Rewrite documents with vault references
//!     ├── location      # Mount/path handling, reference strings
//!     ├── companion     # Companion file naming and update
//!     ├── decrypt/      # Decrypt trait, sops backend
//!     ├── store/        # SecretStore trait, Vault KV v2 backend
//!     └── import        # Load and write pipeline
//! ```
//!
//! # Example
//!
//! ```
//! use vault_import::core::document::{self, Node};
//! use vault_import::core::patch;
//!
//! let text = "admin:\n    password: changeme\n";
//! let indent = document::detect_indent(text);
//! let mut root = document::into_mapping(document::parse(text).unwrap()).unwrap();
//! patch::patch(&mut root, "secret/app", &["admin.password"]);
//!
//! assert_eq!(
//!     document::to_yaml(&Node::Mapping(root), indent),
//!     "admin:\n    password: ref+vault://secret/app/admin.password#value\n"
//! );
//! ```

pub mod cli;
pub mod core;
pub mod error;
