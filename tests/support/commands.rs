//! Command helper methods for Test.

use super::fixtures::TEST_TOKEN;
use super::{Test, VaultStub};
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a vault-import command with a clean environment.
    ///
    /// Vault and sops settings from the developer's shell are removed so
    /// tests see only what they pass explicitly.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("vault-import").expect("failed to find binary");
        cmd.current_dir(self.dir.path());
        for var in [
            "VAULT_ADDR",
            "VAULT_TOKEN",
            "VAULT_NAMESPACE",
            "SOPS_BINARY",
            "VAULT_IMPORT_LOG",
        ] {
            cmd.env_remove(var);
        }
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// Dry-run import of `file` through the fake sops.
    #[cfg(unix)]
    pub fn dry_run(&self, file: &str, vault_path: &str, extra: &[&str]) -> Output {
        let sops = self.fake_sops();
        self.cmd()
            .arg("--dry-run")
            .arg("--sops-binary")
            .arg(&sops)
            .args(extra)
            .args([file, vault_path])
            .output()
            .expect("failed to run vault-import")
    }

    /// Import of `file` through the fake sops into a stub Vault.
    #[cfg(unix)]
    pub fn import(
        &self,
        vault: &VaultStub,
        file: &str,
        vault_path: &str,
        extra: &[&str],
    ) -> Output {
        let sops = self.fake_sops();
        self.cmd()
            .arg("--vault-addr")
            .arg(vault.address())
            .arg("--vault-token")
            .arg(TEST_TOKEN)
            .arg("--sops-binary")
            .arg(&sops)
            .args(extra)
            .args([file, vault_path])
            .output()
            .expect("failed to run vault-import")
    }
}
