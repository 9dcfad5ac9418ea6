//! Test support utilities for vault-import integration tests.
//!
//! Provides an isolated working directory and a stand-in for `sops`.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use vault::{Recorded, VaultStub};

use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated temp directory.
///
/// No process-global state is mutated; child processes use
/// `.current_dir()` so tests can safely run in parallel.
pub struct Test {
    /// Temporary working directory
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Absolute path of a file inside the test directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a file inside the test directory.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        std::fs::write(&path, content).expect("failed to write file");
        path
    }

    /// Read a file inside the test directory.
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.path(name)).expect("failed to read file")
    }

    /// Install a fake `sops` that prints the file it is given, unchanged.
    ///
    /// Lets the CLI run against cleartext fixtures.
    #[cfg(unix)]
    pub fn fake_sops(&self) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.write(
            "bin/sops",
            "#!/bin/sh\nfor last; do :; done\nexec cat \"$last\"\n",
        );
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("failed to chmod fake sops");
        path
    }

    /// Install a fake `sops` that always fails.
    #[cfg(unix)]
    pub fn failing_sops(&self) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.write(
            "bin/sops-fail",
            "#!/bin/sh\necho 'Failed to get the data key required to decrypt the SOPS file.' >&2\nexit 128\n",
        );
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("failed to chmod fake sops");
        path
    }
}
