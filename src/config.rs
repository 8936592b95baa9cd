//! Connection parameters for the Vault secrets backend.
//!
//! The host process owns configuration sourcing (flags, env, files); this
//! module only defines the four connection parameters and their validation.
//! A `from_env` convenience constructor is provided for hosts that follow
//! the standard `VAULT_*` environment convention.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{Result, SecretsError};

/// Configuration for the Vault instance used to fetch secrets.
///
/// `enabled` is advisory: it tells the host whether to use this subsystem
/// at all, and is never checked by provider construction itself.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VaultConfig {
    /// Enables fetching of keys and certificates from Vault.
    #[serde(default)]
    pub enabled: bool,

    /// Location of the Vault server (e.g., "https://vault.example.com:8200").
    #[serde(default)]
    pub url: String,

    /// Token used to authenticate with Vault.
    #[serde(default)]
    pub token: String,

    /// Location of the KV v2 secrets engine within Vault.
    #[serde(default)]
    pub mount_path: String,
}

impl fmt::Debug for VaultConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VaultConfig")
            .field("enabled", &self.enabled)
            .field("url", &self.url)
            .field("token", &"[REDACTED]")
            .field("mount_path", &self.mount_path)
            .finish()
    }
}

impl VaultConfig {
    /// Load configuration from environment variables.
    ///
    /// Uses:
    /// - `VAULT_ADDR`: Vault server address (required to enable the backend)
    /// - `VAULT_TOKEN`: authentication token
    /// - `VAULT_MOUNT_PATH`: KV v2 mount path
    /// - `VAULT_ENABLED`: "true"/"1" to mark the subsystem enabled
    ///
    /// Returns `Ok(None)` when `VAULT_ADDR` is not set, indicating the host
    /// has not configured a Vault backend at all. Missing token or mount
    /// path are reported later, by `validate()` at construction time.
    pub fn from_env() -> Result<Option<Self>> {
        let Ok(url) = std::env::var("VAULT_ADDR") else {
            return Ok(None);
        };

        let token = std::env::var("VAULT_TOKEN").unwrap_or_default();
        let mount_path = std::env::var("VAULT_MOUNT_PATH").unwrap_or_default();
        let enabled = std::env::var("VAULT_ENABLED")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        Ok(Some(Self { enabled, url, token, mount_path }))
    }

    /// Validate the connection parameters.
    ///
    /// `url`, `token`, and `mount_path` must all be non-empty. `enabled`
    /// is never checked here.
    pub fn validate(&self) -> Result<()> {
        if self.url.is_empty() {
            return Err(SecretsError::configuration("vault url must be set"));
        }
        if self.token.is_empty() {
            return Err(SecretsError::configuration("vault token must be set"));
        }
        if self.mount_path.is_empty() {
            return Err(SecretsError::configuration("vault mount path must be set"));
        }
        Ok(())
    }
}
