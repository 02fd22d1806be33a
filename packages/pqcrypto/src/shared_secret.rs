//! Shared secret type for ML-KEM encapsulation/decapsulation

use crate::KeySizeMode;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A shared secret produced by encapsulation or decapsulation
///
/// The bytes are zeroized on drop and compared in constant time.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret {
    #[zeroize(skip)]
    level: KeySizeMode,
    secret: Vec<u8>,
}

impl SharedSecret {
    pub(crate) fn new(level: KeySizeMode, secret: Vec<u8>) -> Self {
        Self { level, secret }
    }

    /// Level whose key pair produced this secret
    #[must_use]
    pub fn level(&self) -> KeySizeMode {
        self.level
    }

    /// Get the shared secret as a byte slice
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.secret
    }

    /// Get the length of the shared secret in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.secret.len()
    }

    /// Check if the shared secret is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.secret.is_empty()
    }

    /// Lowercase hex rendering, the canonical text form
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.secret)
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSecret")
            .field("level", &self.level)
            .field("length", &self.secret.len())
            .finish()
    }
}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;
        self.level == other.level && self.secret.ct_eq(&other.secret).into()
    }
}

impl Eq for SharedSecret {}
