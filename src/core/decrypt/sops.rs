//! SOPS decryption backend.
//!
//! Runs the `sops` CLI, which resolves keys (age, PGP, cloud KMS) from its
//! own configuration and environment.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, trace};
use zeroize::Zeroizing;

use super::Decrypt;
use crate::core::constants;
use crate::error::{DecryptError, Result};

/// SOPS backend using the sops CLI.
#[derive(Debug, Clone)]
pub struct Sops {
    binary: PathBuf,
}

impl Sops {
    /// Use an explicit sops binary.
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Find `sops` on PATH.
    ///
    /// # Errors
    ///
    /// Returns `DecryptError::ToolNotFound` if it is not installed.
    pub fn locate() -> Result<Self> {
        let binary = which::which(constants::SOPS_BINARY)
            .map_err(|_| DecryptError::ToolNotFound(constants::SOPS_BINARY.to_string()))?;
        debug!(binary = %binary.display(), "found sops");
        Ok(Self::new(binary))
    }
}

impl Decrypt for Sops {
    fn name(&self) -> &'static str {
        "sops"
    }

    fn decrypt(&self, path: &Path) -> Result<Zeroizing<String>> {
        trace!(path = %path.display(), "decrypting with sops");

        let output = Command::new(&self.binary)
            .args([
                "--decrypt",
                "--input-type",
                "yaml",
                "--output-type",
                "yaml",
            ])
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| DecryptError::Failed {
                path: path.to_path_buf(),
                reason: format!("failed to run {}: {}", self.binary.display(), e),
            })?;

        let stdout = Zeroizing::new(output.stdout);
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DecryptError::Failed {
                path: path.to_path_buf(),
                reason: stderr.trim().to_string(),
            }
            .into());
        }

        let text = std::str::from_utf8(&stdout)
            .map_err(|_| DecryptError::InvalidUtf8(path.to_path_buf()))?;

        trace!(plaintext_len = text.len(), "decrypted with sops");
        Ok(Zeroizing::new(text.to_string()))
    }
}
