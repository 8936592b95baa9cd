//! Pluggable secrets engine capability.
//!
//! This module defines the single extension point of the crate: the
//! [`SecretsEngine`] trait, a one-method capability for fetching the
//! key-value bundle stored at a path. The production variant
//! ([`vault::VaultKv2Engine`]) talks to HashiCorp Vault's KV v2 engine;
//! the in-memory variant ([`memory::MemoryEngine`]) returns fixed bundles
//! and is intended for tests and development. Any implementation of the
//! one-method contract is acceptable — the provider has no other coupling
//! to the backend.

pub mod memory;
pub mod vault;

pub use memory::MemoryEngine;
pub use vault::VaultKv2Engine;

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use tokio_util::sync::CancellationToken;

use crate::errors::Result;

/// Opaque mapping of field name to value returned by the backend for one
/// path.
///
/// A bundle is transient: it is owned by the call that produced it and must
/// not be retained past extraction. Versioning is handled inside the
/// backend; an engine always returns the latest version of the bundle.
#[derive(Clone, Default)]
pub struct SecretBundle {
    data: HashMap<String, Value>,
}

impl SecretBundle {
    /// Wrap a field map returned by a backend.
    pub fn new(data: HashMap<String, Value>) -> Self {
        Self { data }
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }

    /// Number of fields in the bundle.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the bundle has no fields.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl fmt::Debug for SecretBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field names only; values are secret material
        let mut names: Vec<&str> = self.data.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("SecretBundle").field("fields", &names).finish()
    }
}

impl FromIterator<(String, Value)> for SecretBundle {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self { data: iter.into_iter().collect() }
    }
}

/// Capability for fetching the versioned secret bundle stored at a path.
///
/// Implementations must be safe for concurrent invocation without external
/// synchronization, and must honor the caller's cancellation token,
/// returning promptly once it fires rather than blocking indefinitely.
#[async_trait]
pub trait SecretsEngine: Send + Sync {
    /// Fetch the bundle stored at `path` within the engine's mount.
    async fn get(&self, cancel: &CancellationToken, path: &str) -> Result<SecretBundle>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bundle_field_lookup() {
        let bundle: SecretBundle =
            [("value".to_string(), json!("abc")), ("note".to_string(), json!("x"))]
                .into_iter()
                .collect();

        assert_eq!(bundle.len(), 2);
        assert_eq!(bundle.field("value"), Some(&json!("abc")));
        assert!(bundle.field("missing").is_none());
    }

    #[test]
    fn test_empty_bundle() {
        let bundle = SecretBundle::default();
        assert!(bundle.is_empty());
        assert!(bundle.field("value").is_none());
    }

    #[test]
    fn test_bundle_debug_hides_values() {
        let bundle: SecretBundle =
            [("value".to_string(), json!("hunter2"))].into_iter().collect();

        let debug_output = format!("{:?}", bundle);
        assert!(debug_output.contains("value"));
        assert!(!debug_output.contains("hunter2"));
    }
}
