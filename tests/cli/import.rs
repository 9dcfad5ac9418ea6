//! Import tests against a stub Vault. The fake sops prints the cleartext
//! fixture.

#![cfg(unix)]

use crate::support::*;

#[test]
fn test_import_writes_each_secret() {
    let t = Test::new();
    let vault = VaultStub::start("204 No Content");
    t.write("app-secrets.enc.yaml", SECRETS_YAML);

    let output = t.import(&vault, "app-secrets.enc.yaml", "team", &[]);
    assert_success(&output);
    assert_stdout_contains(&output, "✓ Successfully wrote 4 secrets to secret/team/*");

    let requests = vault.requests();
    let paths: Vec<String> = requests.iter().map(|r| r.path.clone()).collect();
    let expected: Vec<String> = SECRET_KEYS
        .iter()
        .map(|k| format!("/v1/secret/data/team/{}", k))
        .collect();
    assert_eq!(paths, expected);
    for request in &requests {
        assert_eq!(request.method, "POST");
        assert_eq!(request.token.as_deref(), Some(TEST_TOKEN));
    }
    assert_eq!(requests[1].body, r#"{"data":{"value":"s3cr3t-oauth-value"}}"#);
    assert_eq!(requests[3].body, r#"{"data":{"value":"5432"}}"#);
}

#[test]
fn test_import_appends_name_and_mount() {
    let t = Test::new();
    let vault = VaultStub::start("200 OK");
    t.write("app-secrets.enc.yaml", "token: abc\n");

    let output = t.import(
        &vault,
        "app-secrets.enc.yaml",
        "team",
        &["--append-name", "--mount", "kv"],
    );
    assert_success(&output);
    assert_stdout_contains(&output, "Successfully wrote 1 secrets to kv/team/app/*");
    assert_eq!(vault.requests()[0].path, "/v1/kv/data/team/app/token");
}

#[test]
fn test_import_updates_companion() {
    let t = Test::new();
    let vault = VaultStub::start("204 No Content");
    t.write("app-secrets.enc.yaml", SECRETS_YAML);
    t.write("app.yaml", COMPANION_YAML);

    let output = t.import(
        &vault,
        "app-secrets.enc.yaml",
        "team",
        &["--update-counterpart"],
    );
    assert_success(&output);
    assert_stdout_contains(&output, "with 4 vault references");
    assert_eq!(
        t.read("app.yaml"),
        "\
admin:
    oauth2:
        clientID: ref+vault://secret/team/admin.oauth2.clientID#value
        clientSecret: ref+vault://secret/team/admin.oauth2.clientSecret#value
    publicAddress: https://example.com
db:
    host: localhost
    password: ref+vault://secret/team/db.password#value
    port: ref+vault://secret/team/db.port#value
"
    );
}

#[test]
fn test_companion_failure_is_only_a_warning() {
    let t = Test::new();
    let vault = VaultStub::start("204 No Content");
    t.write("app-secrets.enc.yaml", SECRETS_YAML);
    t.write("app.yaml", "- a\n- b\n");

    let output = t.import(
        &vault,
        "app-secrets.enc.yaml",
        "team",
        &["--update-counterpart"],
    );
    assert_success(&output);
    assert_stdout_contains(&output, "✓ Successfully wrote 4 secrets to secret/team/*");
    assert_stderr_contains(&output, "⚠ failed to update counterpart file");
    assert_eq!(t.read("app.yaml"), "- a\n- b\n");
    assert_eq!(vault.requests().len(), 4);
    assert_eq!(
        vault.requests()[0].body,
        r#"{"data":{"value":"client-abc123"}}"#
    );
}

#[test]
fn test_missing_companion_is_skipped() {
    let t = Test::new();
    let vault = VaultStub::start("204 No Content");
    t.write("app-secrets.enc.yaml", SECRETS_YAML);

    let output = t.import(
        &vault,
        "app-secrets.enc.yaml",
        "team",
        &["--update-counterpart"],
    );
    assert_success(&output);
    assert_stdout_contains(&output, "does not exist, skipping");
}

#[test]
fn test_rejected_write_aborts() {
    let t = Test::new();
    let vault = VaultStub::start("403 Forbidden");
    t.write("app-secrets.enc.yaml", SECRETS_YAML);
    t.write("app.yaml", COMPANION_YAML);

    let output = t.import(
        &vault,
        "app-secrets.enc.yaml",
        "team",
        &["--update-counterpart"],
    );
    assert_failure(&output);
    assert_stderr_contains(&output, "vault rejected write to team/admin.oauth2.clientID: 403");
    assert_eq!(vault.requests().len(), 1);
    assert_eq!(t.read("app.yaml"), COMPANION_YAML);
}
