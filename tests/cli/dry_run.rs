//! Dry-run tests. These run the binary with a fake sops that prints the
//! cleartext fixture.

#![cfg(unix)]

use crate::support::*;

#[test]
fn test_dry_run_lists_masked_secrets() {
    let t = Test::new();
    t.write("app-secrets.enc.yaml", SECRETS_YAML);

    let output = t.dry_run("app-secrets.enc.yaml", "team", &[]);
    assert_success(&output);
    assert_stdout_contains(&output, "[dry-run] Would write to Vault path: secret/team");
    assert_stdout_contains(&output, "[dry-run] 4 secrets:");
    assert_stdout_contains(&output, "  admin.oauth2.clientID = <string, 13 chars>");
    assert_stdout_contains(&output, "  db.password = <string, 19 chars>");
    assert_stdout_contains(&output, "  db.port = <int>");
}

#[test]
fn test_dry_run_never_prints_values() {
    let t = Test::new();
    t.write("app-secrets.enc.yaml", SECRETS_YAML);

    let output = t.dry_run(
        "app-secrets.enc.yaml",
        "team",
        &["--verbose", "--update-counterpart"],
    );
    assert_success(&output);
    for value in SECRET_VALUES {
        assert_output_excludes(&output, value);
    }
}

#[test]
fn test_dry_run_keys_sorted() {
    let t = Test::new();
    t.write("app-secrets.enc.yaml", SECRETS_YAML);

    let output = t.dry_run("app-secrets.enc.yaml", "team", &[]);
    assert_success(&output);
    let out = stdout(&output);
    let keys: Vec<&str> = out
        .lines()
        .filter(|l| l.starts_with("  "))
        .map(|l| l.trim().split(' ').next().unwrap())
        .collect();
    assert_eq!(keys, SECRET_KEYS);
}

#[test]
fn test_dry_run_needs_no_credentials() {
    let t = Test::new();
    t.write("app-secrets.enc.yaml", SECRETS_YAML);

    // Test::cmd strips VAULT_ADDR and VAULT_TOKEN.
    let output = t.dry_run("app-secrets.enc.yaml", "team", &[]);
    assert_success(&output);
}

#[test]
fn test_append_name_and_mount() {
    let t = Test::new();
    t.write("app-secrets.enc.yaml", SECRETS_YAML);

    let output = t.dry_run(
        "app-secrets.enc.yaml",
        "team",
        &["--append-name", "--mount", "kv"],
    );
    assert_success(&output);
    assert_stdout_contains(&output, "Would write to Vault path: kv/team/app");
}

#[test]
fn test_append_name_override() {
    let t = Test::new();
    t.write("app-secrets.enc.yaml", SECRETS_YAML);

    let output = t.dry_run(
        "app-secrets.enc.yaml",
        "team",
        &["--append-name", "--name", "billing"],
    );
    assert_success(&output);
    assert_stdout_contains(&output, "Would write to Vault path: secret/team/billing");
}

#[test]
fn test_dry_run_counterpart_preview() {
    let t = Test::new();
    t.write("app-secrets.enc.yaml", SECRETS_YAML);
    t.write("app.yaml", COMPANION_YAML);

    let output = t.dry_run("app-secrets.enc.yaml", "team", &["--update-counterpart"]);
    assert_success(&output);
    assert_stdout_contains(&output, "[dry-run] Would update app.yaml with vault references:");
    assert_stdout_contains(
        &output,
        "  db.password: ref+vault://secret/team/db.password#value",
    );
    // Preview only.
    assert_eq!(t.read("app.yaml"), COMPANION_YAML);
}

#[test]
fn test_dry_run_counterpart_missing() {
    let t = Test::new();
    t.write("app-secrets.enc.yaml", SECRETS_YAML);

    let output = t.dry_run("app-secrets.enc.yaml", "team", &["--update-counterpart"]);
    assert_success(&output);
    assert_stdout_contains(&output, "Counterpart file app.yaml does not exist, skipping");
    assert!(!t.path("app.yaml").exists());
}

#[test]
fn test_empty_secret_file() {
    let t = Test::new();
    t.write("empty-secrets.yaml", "");

    let output = t.dry_run("empty-secrets.yaml", "team", &[]);
    assert_success(&output);
    assert_stdout_contains(&output, "[dry-run] 0 secrets:");
}

#[test]
fn test_log_env_var_accepted() {
    let t = Test::new();
    t.write("app-secrets.enc.yaml", SECRETS_YAML);
    let sops = t.fake_sops();

    let output = t
        .cmd()
        .env("VAULT_IMPORT_LOG", "vault_import=trace")
        .arg("--dry-run")
        .arg("--sops-binary")
        .arg(&sops)
        .args(["app-secrets.enc.yaml", "team"])
        .output()
        .unwrap();
    assert_success(&output);
    for value in SECRET_VALUES {
        assert_output_excludes(&output, value);
    }
}
