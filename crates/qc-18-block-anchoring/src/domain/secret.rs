//! # Service Secret
//!
//! Wrapper for the anchoring service credential secret that zeroizes
//! memory on drop and never prints its contents.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Credential secret used for HTTP Basic authentication.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ServiceSecret {
    inner: String,
}

impl ServiceSecret {
    /// Wrap a secret value.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            inner: secret.into(),
        }
    }

    /// Expose the secret for building the `Authorization` header.
    ///
    /// Use immediately and let go.
    pub fn expose(&self) -> &str {
        &self.inner
    }

    /// True when no secret was configured.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl std::fmt::Debug for ServiceSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ServiceSecret([REDACTED])")
    }
}
