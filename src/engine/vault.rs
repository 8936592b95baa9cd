//! HashiCorp Vault KV v2 secrets engine implementation.
//!
//! Fetches secrets from Vault's KV v2 engine by path within a configured
//! mount. Construction only builds the client handle; nothing is fetched
//! until [`SecretsEngine::get`] is called.
//!
//! # Security
//!
//! - Tokens are never logged
//! - Secret values are never logged
//! - Communication should use TLS in production deployments

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use vaultrs::client::{VaultClient, VaultClientSettingsBuilder};
use vaultrs::kv2;

use super::{SecretBundle, SecretsEngine};
use crate::config::VaultConfig;
use crate::errors::{Result, SecretsError};

/// Secrets engine backed by Vault's KV v2 API.
///
/// The client is bound to the configured server address, authenticated with
/// the configured token, and scoped to a single KV v2 mount. It is
/// `Send + Sync` and safe to share across concurrent readers.
pub struct VaultKv2Engine {
    client: VaultClient,
    mount_path: String,
}

impl fmt::Debug for VaultKv2Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VaultKv2Engine")
            .field("mount_path", &self.mount_path)
            .field("client", &"[VaultClient]")
            .finish()
    }
}

impl VaultKv2Engine {
    /// Create a new KV v2 engine from validated connection parameters.
    ///
    /// Establishes a network-capable client handle only; no round trip is
    /// performed here.
    ///
    /// # Errors
    ///
    /// [`SecretsError::Connection`] if the client settings are rejected or
    /// the client cannot be constructed.
    pub fn new(config: &VaultConfig) -> Result<Self> {
        let mut settings_builder = VaultClientSettingsBuilder::default();
        settings_builder.address(&config.url);
        settings_builder.token(&config.token);

        let settings = settings_builder
            .build()
            .map_err(|e| SecretsError::connection(format!("invalid vault client settings: {}", e)))?;

        let client = VaultClient::new(settings)
            .map_err(|e| SecretsError::connection(format!("failed to create vault client: {}", e)))?;

        info!(url = %config.url, mount_path = %config.mount_path, "initialized vault kv2 engine");

        Ok(Self { client, mount_path: config.mount_path.clone() })
    }
}

#[async_trait]
impl SecretsEngine for VaultKv2Engine {
    async fn get(&self, cancel: &CancellationToken, path: &str) -> Result<SecretBundle> {
        debug!(path = %path, mount_path = %self.mount_path, "reading secret from vault");

        let read = kv2::read::<HashMap<String, Value>>(&self.client, &self.mount_path, path);

        tokio::select! {
            _ = cancel.cancelled() => Err(SecretsError::cancelled(path)),
            result = read => result
                .map(SecretBundle::new)
                .map_err(|e| SecretsError::backend(format!("vault kv2 read failed: {}", e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> VaultConfig {
        VaultConfig {
            enabled: true,
            url: "http://127.0.0.1:8200".to_string(),
            token: "test-token".to_string(),
            mount_path: "secret".to_string(),
        }
    }

    #[test]
    fn test_construction_performs_no_io() {
        // Nothing is listening on the configured address; construction must
        // still succeed because fetching is strictly lazy.
        let engine = VaultKv2Engine::new(&config()).unwrap();
        assert_eq!(engine.mount_path, "secret");
    }

    #[test]
    fn test_debug_hides_client() {
        let engine = VaultKv2Engine::new(&config()).unwrap();
        let debug_output = format!("{:?}", engine);
        assert!(debug_output.contains("mount_path"));
        assert!(!debug_output.contains("test-token"));
    }
}
