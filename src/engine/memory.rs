//! In-memory secrets engine for tests and development.
//!
//! Holds fixed bundles keyed by path, with optional injectable failures.
//! This is the lightweight test double enabled by the single-method
//! [`SecretsEngine`] contract: it has no dependency on the real backend
//! client library and is **not** intended for production use.

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use super::{SecretBundle, SecretsEngine};
use crate::errors::{Result, SecretsError};

/// Secrets engine backed by an in-process map.
///
/// Safe for concurrent invocation: state lives in `DashMap`s.
#[derive(Debug, Default)]
pub struct MemoryEngine {
    secrets: DashMap<String, SecretBundle>,
    failures: DashMap<String, String>,
}

impl MemoryEngine {
    /// Creates an empty engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a bundle at a path, replacing any previous one.
    pub fn insert(&self, path: impl Into<String>, bundle: SecretBundle) {
        self.secrets.insert(path.into(), bundle);
    }

    /// Store a conventional `{"value": ...}` bundle at a path.
    pub fn insert_value(&self, path: impl Into<String>, value: impl Into<String>) {
        let bundle: SecretBundle =
            [("value".to_string(), Value::String(value.into()))].into_iter().collect();
        self.insert(path, bundle);
    }

    /// Make subsequent reads of a path fail with the given message.
    pub fn fail_path(&self, path: impl Into<String>, message: impl Into<String>) {
        self.failures.insert(path.into(), message.into());
    }
}

#[async_trait]
impl SecretsEngine for MemoryEngine {
    async fn get(&self, cancel: &CancellationToken, path: &str) -> Result<SecretBundle> {
        if cancel.is_cancelled() {
            return Err(SecretsError::cancelled(path));
        }

        if let Some(message) = self.failures.get(path) {
            return Err(SecretsError::backend(message.clone()));
        }

        self.secrets
            .get(path)
            .map(|bundle| bundle.clone())
            .ok_or_else(|| SecretsError::backend(format!("no secret stored at '{}'", path)))
    }
}
