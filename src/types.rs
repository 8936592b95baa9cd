//! Secure types for handling sensitive data.
//!
//! This module provides types that prevent accidental exposure of secrets
//! through logging, debugging, or error messages.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Independently owned secret byte material.
///
/// `SecretBytes` is always a copy: constructing one from a backend bundle
/// never aliases the bundle's internal buffers, so the bundle may be reused
/// or discarded by the backend layer after the call returns.
///
/// # Security
///
/// - Debug output shows `SecretBytes([REDACTED])` instead of the contents
/// - Display output shows `[REDACTED]`
/// - Serialization outputs `"[REDACTED]"` (NEVER the actual value)
/// - Deserialization works normally (accepts actual secret values)
/// - Memory is securely zeroed when dropped (via `zeroize` crate)
/// - To read the actual bytes, you must call `expose_secret()` explicitly
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBytes(Vec<u8>);

impl Serialize for SecretBytes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Never serialize the actual secret material
        serializer.serialize_str("[REDACTED]")
    }
}

impl<'de> Deserialize<'de> for SecretBytes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Allow deserializing actual secret values (e.g., from config files)
        let value = String::deserialize(deserializer)?;
        Ok(SecretBytes(value.into_bytes()))
    }
}

impl SecretBytes {
    /// Creates a `SecretBytes` by copying the given bytes into owned storage.
    pub fn copy_from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    /// Exposes the underlying secret bytes.
    ///
    /// # Security Warning
    ///
    /// Only use when the material is actually needed (cryptographic
    /// operations, writing to files/network). Never log the result.
    pub fn expose_secret(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the `SecretBytes` and returns the inner buffer.
    ///
    /// Prefer `expose_secret()` when a reference suffices.
    pub fn into_bytes(mut self) -> Vec<u8> {
        std::mem::take(&mut self.0)
    }

    /// Returns the length of the secret without exposing the value.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the secret is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBytes([REDACTED])")
    }
}

impl fmt::Display for SecretBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl PartialEq for SecretBytes {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for SecretBytes {}

impl From<Vec<u8>> for SecretBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for SecretBytes {
    fn from(bytes: &[u8]) -> Self {
        Self::copy_from(bytes)
    }
}

impl From<&str> for SecretBytes {
    fn from(s: &str) -> Self {
        Self::copy_from(s.as_bytes())
    }
}
