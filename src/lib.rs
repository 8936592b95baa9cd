//! # Vaultgate
//!
//! Vaultgate lets a host process obtain secret byte-material (tokens,
//! certificate key material) from HashiCorp Vault at runtime, instead of
//! embedding secrets in static configuration.
//!
//! ## Architecture
//!
//! The crate is built around the single-method [`SecretsEngine`] trait,
//! which fetches the versioned key-value bundle stored at a path. A
//! [`SecretProvider`] owns one engine instance and exposes
//! [`read_secret`](SecretProvider::read_secret): one round trip through the
//! engine, then extraction of the field conventionally named `"value"` into
//! independently owned [`SecretBytes`].
//!
//! ```text
//! VaultConfig → SecretProvider::new → VaultKv2Engine → Vault KV v2
//!                      ↓
//!               read_secret(cancel, path) → SecretBytes
//! ```
//!
//! The provider holds no cache and no retry state; it is safe to share
//! across concurrent readers. Every network-facing call threads a
//! caller-supplied `CancellationToken` and returns promptly once it fires.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tokio_util::sync::CancellationToken;
//! use vaultgate::{SecretProvider, VaultConfig};
//!
//! # async fn run() -> vaultgate::Result<()> {
//! let config = VaultConfig {
//!     enabled: true,
//!     url: "https://vault.example.com:8200".to_string(),
//!     token: "vault-token".to_string(),
//!     mount_path: "secret".to_string(),
//! };
//!
//! let provider = SecretProvider::new(&config)?;
//! let cancel = CancellationToken::new();
//! let key_material = provider.read_secret(&cancel, "certs/ingress-key").await?;
//! # Ok(())
//! # }
//! ```
//!
//! The unrelated [`group_label`] leaf utility derives a per-tenant metrics
//! group label from the first time-series in a batch; it has no dependency
//! on the secrets subsystem.

pub mod config;
pub mod engine;
pub mod errors;
pub mod group_label;
pub mod provider;
pub mod types;

// Re-export commonly used types and traits
pub use config::VaultConfig;
pub use engine::{MemoryEngine, SecretBundle, SecretsEngine, VaultKv2Engine};
pub use errors::{Result, SecretsError};
pub use group_label::{group_label, Label, TenantOverrides, TimeSeries};
pub use provider::SecretProvider;
pub use types::SecretBytes;

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_available() {
        assert!(!VERSION.is_empty());
    }
}
