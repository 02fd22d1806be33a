//! SHA algorithm selection and metadata

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Digest variants selectable on the SHA transform
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize)]
pub enum HashAlgorithm {
    /// SHA-1 (160-bit). Broken for collision resistance; kept for checksums.
    #[default]
    #[serde(rename = "sha1")]
    Sha1,

    /// SHA-224 (SHA-2, 32-bit words)
    #[serde(rename = "sha224")]
    Sha224,

    /// SHA-256 (SHA-2, 32-bit words)
    #[serde(rename = "sha256")]
    Sha256,

    /// SHA3-224 (Keccak)
    #[serde(rename = "sha3-224")]
    Sha3_224,

    /// SHA3-256 (Keccak)
    #[serde(rename = "sha3-256")]
    Sha3_256,

    /// SHA3-384 (Keccak)
    #[serde(rename = "sha3-384")]
    Sha3_384,

    /// SHA3-512 (Keccak)
    #[serde(rename = "sha3-512")]
    Sha3_512,

    /// SHA-512/224 (SHA-512 truncated with its own IV)
    #[serde(rename = "sha512-224")]
    Sha512_224,

    /// SHA-512/256 (SHA-512 truncated with its own IV)
    #[serde(rename = "sha512-256")]
    Sha512_256,

    /// SHA-384 (SHA-2, 64-bit words)
    #[serde(rename = "sha384")]
    Sha384,

    /// SHA-512 (SHA-2, 64-bit words)
    #[serde(rename = "sha512")]
    Sha512,
}

impl HashAlgorithm {
    /// Menu name of the algorithm
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha224 => "sha224",
            Self::Sha256 => "sha256",
            Self::Sha3_224 => "sha3-224",
            Self::Sha3_256 => "sha3-256",
            Self::Sha3_384 => "sha3-384",
            Self::Sha3_512 => "sha3-512",
            Self::Sha512_224 => "sha512-224",
            Self::Sha512_256 => "sha512-256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
        }
    }

    /// Digest size in bytes
    #[must_use]
    pub fn output_size(self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha224 | Self::Sha3_224 | Self::Sha512_224 => 28,
            Self::Sha256 | Self::Sha3_256 | Self::Sha512_256 => 32,
            Self::Sha3_384 | Self::Sha384 => 48,
            Self::Sha3_512 | Self::Sha512 => 64,
        }
    }

    /// All variants in menu order
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[
            Self::Sha1,
            Self::Sha224,
            Self::Sha256,
            Self::Sha3_224,
            Self::Sha3_256,
            Self::Sha3_384,
            Self::Sha3_512,
            Self::Sha512_224,
            Self::Sha512_256,
            Self::Sha384,
            Self::Sha512,
        ]
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = crate::HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['_', '/'], "-");
        Self::all()
            .iter()
            .copied()
            .find(|algorithm| algorithm.name() == wanted)
            .ok_or_else(|| crate::HashError::UnsupportedAlgorithm(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for HashAlgorithm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
