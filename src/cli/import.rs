//! Import command - decrypt, write to Vault, update the companion file.

use tracing::debug;

use crate::cli::{output, preview};
use crate::core::companion;
use crate::core::config::{Options, Settings};
use crate::core::decrypt::Sops;
use crate::core::flatten::FlatMap;
use crate::core::import;
use crate::core::store::Vault;
use crate::error::Result;

/// Run an import with the given options.
///
/// Configuration and decryption errors abort before anything is written.
/// A failed companion update is only a warning.
pub fn execute(options: Options) -> Result<()> {
    let settings = Settings::resolve(options)?;

    let decryptor = match &settings.sops_binary {
        Some(binary) => Sops::new(binary),
        None => Sops::locate()?,
    };
    let secrets = import::load_secrets(&decryptor, &settings.secret_file)?;

    let credentials = match settings.credentials.clone() {
        Some(credentials) if !settings.dry_run => credentials,
        _ => {
            dry_run(&settings, &secrets);
            return Ok(());
        }
    };
    let vault = Vault::new(credentials, settings.location.mount())?;
    let written = import::write_secrets(&vault, &settings.location, &secrets)?;
    output::success(&format!(
        "Successfully wrote {} secrets to {}/*",
        written,
        settings.location.root()
    ));

    if settings.update_counterpart {
        update_companion(&settings, &secrets);
    }

    Ok(())
}

fn dry_run(settings: &Settings, secrets: &FlatMap) {
    print!("{}", preview::render_writes(&settings.location, secrets));
    if settings.update_counterpart {
        let path = settings.companion_path();
        print!(
            "{}",
            preview::render_companion(&path, path.exists(), &settings.location, secrets)
        );
    }
}

fn update_companion(settings: &Settings, secrets: &FlatMap) {
    let path = settings.companion_path();
    let display = std::fs::canonicalize(&path)
        .unwrap_or_else(|_| path.clone())
        .display()
        .to_string();
    let keys: Vec<&str> = secrets.keys().map(String::as_str).collect();

    match companion::update(&path, &settings.location.root(), &keys) {
        Ok(true) => output::success(&format!(
            "Updated {} with {} vault references",
            output::path(&display),
            keys.len()
        )),
        Ok(false) => output::dimmed(&format!(
            "Counterpart file {} does not exist, skipping",
            display
        )),
        Err(e) => {
            debug!(error = ?e, "companion update failed");
            output::warn(&format!("failed to update counterpart file: {}", e));
        }
    }
}
