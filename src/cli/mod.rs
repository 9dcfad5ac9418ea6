//! Command-line interface.

pub mod import;
pub mod output;
pub mod preview;

use clap::Parser;
use std::path::PathBuf;

use crate::core::config::Options;
use crate::core::constants;

/// Import secrets from a SOPS-encrypted YAML file to Vault KV v2.
#[derive(Parser, Debug)]
#[command(name = "vault-import", version, about)]
pub struct Cli {
    /// Path to SOPS-encrypted YAML file
    pub sops_file: PathBuf,

    /// Destination path in Vault (under the mount)
    pub vault_path: String,

    /// Vault server address
    #[arg(long, env = "VAULT_ADDR")]
    pub vault_addr: Option<String>,

    /// Vault token
    #[arg(long, env = "VAULT_TOKEN", hide_env_values = true)]
    pub vault_token: Option<String>,

    /// Vault Enterprise namespace
    #[arg(long, env = "VAULT_NAMESPACE")]
    pub vault_namespace: Option<String>,

    /// Vault KV v2 mount path
    #[arg(long, default_value = constants::DEFAULT_MOUNT)]
    pub mount: String,

    /// Print secrets without writing to Vault
    #[arg(long)]
    pub dry_run: bool,

    /// Append cleaned filename to vault path
    #[arg(long)]
    pub append_name: bool,

    /// Override the derived name (use with --append-name)
    #[arg(long, requires = "append_name")]
    pub name: Option<String>,

    /// Update counterpart YAML file with vault references
    #[arg(long)]
    pub update_counterpart: bool,

    /// sops binary to decrypt with (default: sops on PATH)
    #[arg(long, env = "SOPS_BINARY")]
    pub sops_binary: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Collected options for [`crate::core::config::Settings::resolve`].
    pub fn options(&self) -> Options {
        Options {
            secret_file: self.sops_file.clone(),
            vault_path: self.vault_path.clone(),
            mount: self.mount.clone(),
            vault_addr: self.vault_addr.clone(),
            vault_token: self.vault_token.clone(),
            vault_namespace: self.vault_namespace.clone(),
            append_name: self.append_name,
            name: self.name.clone(),
            update_counterpart: self.update_counterpart,
            dry_run: self.dry_run,
            sops_binary: self.sops_binary.clone(),
        }
    }
}

/// Execute the import.
pub fn execute(cli: &Cli) -> crate::error::Result<()> {
    import::execute(cli.options())
}
