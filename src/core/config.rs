//! Run configuration.
//!
//! Flags and environment variables are merged by the CLI and resolved here
//! into a [`Settings`] value that is passed explicitly to each component.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::companion;
use crate::core::location::SecretLocation;
use crate::core::store::VaultCredentials;
use crate::error::{ConfigError, Result};

/// Raw options as collected from flags and environment.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub secret_file: PathBuf,
    pub vault_path: String,
    pub mount: String,
    pub vault_addr: Option<String>,
    pub vault_token: Option<String>,
    pub vault_namespace: Option<String>,
    pub append_name: bool,
    pub name: Option<String>,
    pub update_counterpart: bool,
    pub dry_run: bool,
    pub sops_binary: Option<PathBuf>,
}

/// Validated settings for one import run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub secret_file: PathBuf,
    pub location: SecretLocation,
    /// `None` in dry-run mode.
    pub credentials: Option<VaultCredentials>,
    pub update_counterpart: bool,
    pub dry_run: bool,
    pub sops_binary: Option<PathBuf>,
}

impl Settings {
    /// Validate options and derive the target location.
    ///
    /// Credentials are only required when actually writing.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for a missing address/token outside dry-run
    /// mode, or for an empty mount or path.
    pub fn resolve(options: Options) -> Result<Self> {
        let credentials = if options.dry_run {
            None
        } else {
            Some(VaultCredentials::resolve(
                options.vault_addr,
                options.vault_token,
                options.vault_namespace,
            )?)
        };

        let mount = options.mount.trim_matches('/').to_string();
        if mount.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "mount",
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        let path = base_path(
            &options.vault_path,
            &options.secret_file,
            options.append_name,
            options.name.as_deref(),
        );
        if path.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "vault path",
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        let location = SecretLocation::new(mount, path);
        debug!(root = %location.root(), dry_run = options.dry_run, "resolved settings");

        Ok(Self {
            secret_file: options.secret_file,
            location,
            credentials,
            update_counterpart: options.update_counterpart,
            dry_run: options.dry_run,
            sops_binary: options.sops_binary,
        })
    }

    /// Companion document derived from the secret filename.
    pub fn companion_path(&self) -> PathBuf {
        companion::companion_path(&self.secret_file)
    }
}

/// Vault path with the optional name segment appended.
///
/// With `append_name`, the explicit `name` wins over the one derived from
/// the secret filename.
pub fn base_path(
    vault_path: &str,
    secret_file: &Path,
    append_name: bool,
    name: Option<&str>,
) -> String {
    let vault_path = vault_path.trim_matches('/');
    if !append_name {
        return vault_path.to_string();
    }
    let name = match name.filter(|n| !n.is_empty()) {
        Some(name) => name.to_string(),
        None => companion::clean_name(secret_file),
    };
    if vault_path.is_empty() {
        name
    } else {
        format!("{}/{}", vault_path, name)
    }
}
