//! HashiCorp Vault KV v2 backend.
//!
//! Each secret is written to `{mount}/data/{path}` as `{"value": "..."}`.

use reqwest::blocking::Client;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, trace};

use super::SecretStore;
use crate::core::constants;
use crate::error::{ConfigError, Result, StoreError};

/// Address and token for talking to Vault.
#[derive(Clone)]
pub struct VaultCredentials {
    pub address: String,
    pub token: String,
    pub namespace: Option<String>,
}

impl std::fmt::Debug for VaultCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultCredentials")
            .field("address", &self.address)
            .field("token", &"<redacted>")
            .field("namespace", &self.namespace)
            .finish()
    }
}

impl VaultCredentials {
    /// Build credentials from already-resolved flag/env values.
    ///
    /// Empty strings count as missing.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingAddress` or `ConfigError::MissingToken`.
    pub fn resolve(
        address: Option<String>,
        token: Option<String>,
        namespace: Option<String>,
    ) -> Result<Self> {
        let address = non_empty(address).ok_or(ConfigError::MissingAddress)?;
        let token = non_empty(token).ok_or(ConfigError::MissingToken)?;
        Ok(Self {
            address,
            token,
            namespace: non_empty(namespace),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Body of a KV v2 write.
#[derive(Debug, Serialize)]
struct WriteRequest<'a> {
    data: BTreeMap<&'a str, &'a str>,
}

impl<'a> WriteRequest<'a> {
    fn single(value: &'a str) -> Self {
        Self {
            data: BTreeMap::from([(constants::VALUE_FIELD, value)]),
        }
    }
}

/// Vault KV v2 client.
pub struct Vault {
    client: Client,
    credentials: VaultCredentials,
    mount: String,
}

impl std::fmt::Debug for Vault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vault")
            .field("credentials", &self.credentials)
            .field("mount", &self.mount)
            .finish()
    }
}

impl Vault {
    /// Create a client for the KV v2 engine at `mount`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Client` if the HTTP client cannot be built.
    pub fn new(credentials: VaultCredentials, mount: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(constants::VAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| StoreError::Client(e.to_string()))?;
        let mount = mount.into();
        debug!(address = %credentials.address, %mount, "created vault client");
        Ok(Self {
            client,
            credentials,
            mount,
        })
    }

    /// API URL for a secret path.
    pub fn data_url(&self, path: &str) -> String {
        format!(
            "{}/v1/{}/data/{}",
            self.credentials.address.trim_end_matches('/'),
            self.mount.trim_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl SecretStore for Vault {
    fn write(&self, path: &str, value: &str) -> Result<()> {
        let url = self.data_url(path);
        trace!(%url, value_len = value.len(), "writing secret");

        let body = WriteRequest::single(value);
        let mut request = self
            .client
            .post(&url)
            .header("X-Vault-Token", &self.credentials.token)
            .json(&body);
        if let Some(namespace) = &self.credentials.namespace {
            request = request.header("X-Vault-Namespace", namespace);
        }

        let response = request.send().map_err(|e| StoreError::Request {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(StoreError::Rejected {
                path: path.to_string(),
                status: status.as_u16(),
                body: body.trim().to_string(),
            }
            .into());
        }

        debug!(path, "wrote secret");
        Ok(())
    }
}
