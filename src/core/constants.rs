//! Constants used throughout vault-import.
//!
//! Centralizes magic strings and configuration values.

/// Default KV v2 mount path.
pub const DEFAULT_MOUNT: &str = "secret";

/// Field each secret value is stored under in Vault.
pub const VALUE_FIELD: &str = "value";

/// Scheme prefix of vault reference strings.
pub const REFERENCE_SCHEME: &str = "ref+vault://";

/// Marker stripped from secret filenames when deriving names
/// (`app-secrets.enc.yaml` -> `app`).
pub const SECRETS_MARKER: &str = "-secrets";

/// Extension of derived companion files.
pub const COMPANION_EXTENSION: &str = "yaml";

/// Default decryption tool.
pub const SOPS_BINARY: &str = "sops";

/// Timeout for a single Vault request, in seconds.
pub const VAULT_TIMEOUT_SECS: u64 = 60;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "VAULT_IMPORT_LOG";
