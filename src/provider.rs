//! Secret provider: validation, construction, and typed extraction.
//!
//! [`SecretProvider`] owns exactly one [`SecretsEngine`] for its lifetime
//! and holds no other state — no cache, no retry counters. Every
//! [`read_secret`](SecretProvider::read_secret) call is one fresh round
//! trip through the engine followed by one extraction step. The provider
//! can be shared (e.g. behind an `Arc`) across many concurrent readers of
//! different paths.

use std::fmt;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::config::VaultConfig;
use crate::engine::{SecretsEngine, VaultKv2Engine};
use crate::errors::{Result, SecretsError};
use crate::types::SecretBytes;

/// Field name under which the usable secret value is stored, by convention.
const VALUE_FIELD: &str = "value";

/// Retrieves secret byte-material from a secrets backend at runtime.
pub struct SecretProvider {
    engine: Box<dyn SecretsEngine>,
}

impl fmt::Debug for SecretProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretProvider").field("engine", &"[SecretsEngine]").finish()
    }
}

impl SecretProvider {
    /// Create a provider bound to a Vault KV v2 engine.
    ///
    /// Validates the configuration fail-closed (a partially constructed
    /// provider is never observable) and establishes the client handle.
    /// No secret is fetched here; fetching is strictly per-call and lazy.
    /// `enabled` is advisory to the host and never checked.
    ///
    /// # Errors
    ///
    /// - [`SecretsError::Configuration`] if `url`, `token`, or `mount_path`
    ///   is empty
    /// - [`SecretsError::Connection`] if client setup fails
    pub fn new(config: &VaultConfig) -> Result<Self> {
        config.validate()?;
        let engine = VaultKv2Engine::new(config)?;
        Ok(Self::with_engine(Box::new(engine)))
    }

    /// Create a provider over an arbitrary engine implementation.
    ///
    /// This is the extension point: any implementation of the one-method
    /// [`SecretsEngine`] contract is acceptable, including in-memory test
    /// doubles.
    pub fn with_engine(engine: Box<dyn SecretsEngine>) -> Self {
        Self { engine }
    }

    /// Read the secret stored at `path` within the configured mount.
    ///
    /// Performs one round trip through the engine, threading the caller's
    /// cancellation token, then extracts the field conventionally named
    /// `"value"` and copies its bytes into independently owned storage.
    /// Never retried internally; never cached.
    ///
    /// # Errors
    ///
    /// - [`SecretsError::Retrieval`] if the backend call failed, recording
    ///   the path and the underlying cause
    /// - [`SecretsError::Cancelled`] if the token fired first
    /// - [`SecretsError::Format`] if the `"value"` field is absent or not a
    ///   string
    pub async fn read_secret(&self, cancel: &CancellationToken, path: &str) -> Result<SecretBytes> {
        debug!(path = %path, "reading secret");

        let bundle = self.engine.get(cancel, path).await.map_err(|e| match e {
            cancelled @ SecretsError::Cancelled { .. } => cancelled,
            cause => SecretsError::retrieval(path, cause),
        })?;

        let value = bundle.field(VALUE_FIELD).ok_or_else(|| {
            SecretsError::format(path, format!("missing '{}' field in secret bundle", VALUE_FIELD))
        })?;

        let value = value.as_str().ok_or_else(|| {
            SecretsError::format(path, format!("'{}' field is not a string", VALUE_FIELD))
        })?;

        // Copied out of the bundle, which may be reused or discarded by the
        // backend layer after this call returns.
        Ok(SecretBytes::copy_from(value.as_bytes()))
    }
}
