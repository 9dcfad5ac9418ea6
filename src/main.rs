//! vault-import - move SOPS-encrypted secrets into Vault.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vault_import::cli::output;
use vault_import::cli::{execute, Cli};
use vault_import::core::constants;
use vault_import::error::{ConfigError, DecryptError, Error};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("vault_import=debug")
        } else {
            EnvFilter::new("vault_import=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(&cli) {
        let suggestion = match &e {
            Error::Config(ConfigError::MissingAddress) => {
                Some("export VAULT_ADDR or pass --vault-addr")
            }
            Error::Config(ConfigError::MissingToken) => {
                Some("export VAULT_TOKEN or pass --vault-token")
            }
            Error::Decrypt(DecryptError::ToolNotFound(_)) => {
                Some("install sops or pass --sops-binary")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
